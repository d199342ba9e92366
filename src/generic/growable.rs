/*!
A relocatable growable buffer with power-of-two capacity and a hard limit.

Both the [clause arena](crate::db::clause) and the shared
[vector stack](crate::db::vector) are built on a [Growable].

Capacity is tracked explicitly and doubles on demand, so growth points are
deterministic and a caller multiplexing several structures into one buffer
(as the vector store does) can observe them.
The backing store may relocate when capacity grows, which is why everything
layered on top addresses elements by index rather than by pointer --- an
index survives relocation for free.

Reaching the hard limit is [fatal](crate::misc::fatal): the limits are
architectural maxima, not tunables.
*/

use crate::misc::fatal;

pub struct Growable<T> {
    store: Vec<T>,

    /// The logical capacity: zero or a power of two, at most `limit`.
    capacity: usize,

    /// The architectural maximum capacity.
    limit: usize,

    /// A short description of what the buffer backs, for the fatal diagnostic.
    label: &'static str,
}

impl<T: Copy> Growable<T> {
    pub fn with_limit(limit: usize, label: &'static str) -> Self {
        debug_assert!(limit.is_power_of_two());
        Growable {
            store: Vec::default(),
            capacity: 0,
            limit,
            label,
        }
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.store.len() == self.capacity
    }

    pub fn available(&self) -> usize {
        self.capacity - self.store.len()
    }

    /// Ensures room for `needed` further elements, doubling capacity as required.
    ///
    /// Fatal once the hard limit is reached.
    /// Growth may relocate the backing store.
    pub fn reserve(&mut self, needed: usize) {
        if needed <= self.available() {
            return;
        }
        while needed > self.available() {
            if self.capacity == self.limit {
                fatal(&format!(
                    "maximum {} capacity of 2^{} elements exhausted",
                    self.label,
                    self.limit.trailing_zeros(),
                ));
            }
            self.capacity = match self.capacity {
                0 => 1,
                current => 2 * current,
            };
        }
        self.store.reserve_exact(self.capacity - self.store.len());
    }

    /// Appends an element within the reserved capacity.
    pub fn push(&mut self, element: T) {
        debug_assert!(self.store.len() < self.capacity);
        self.store.push(element);
    }

    #[inline(always)]
    pub fn get(&self, index: usize) -> T {
        self.store[index]
    }

    #[inline(always)]
    pub fn set(&mut self, index: usize, element: T) {
        self.store[index] = element;
    }

    pub fn as_slice(&self) -> &[T] {
        &self.store
    }

    /// Frees the backing store and resets the capacity bookkeeping.
    pub fn release(&mut self) {
        self.store = Vec::default();
        self.capacity = 0;
    }
}
