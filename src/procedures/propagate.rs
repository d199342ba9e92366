/*!
Propagating the archive.

See [Archive::propagate] for the method.

# Overview

The queue holds literals recently assigned true, in external numbering, and is
consumed in order: first forced, first propagated, each literal's watch list
walked to completion before the next is taken.

For a queue literal L the list walked is that of ¬L, as a clause watching ¬L
is the clause which may have lost a watch candidate when L became true.
Entries are processed with the usual two-watch moves, plus the drift handling
archived clauses need:

1. A blocking literal which no longer translates to the current universe drops
   its entry.
2. A true blocking literal keeps its entry with no further work --- the clause
   is satisfied and is not dereferenced at all.
3. A tombstoned clause drops its entry; this is how stale watches are lazily
   evicted.
4. The other watched literal is found as `lits[0] ^ lits[1] ^ ¬L` --- exactly
   one of the two watched slots holds ¬L, so the exclusive or cancels it.
   If the other literal no longer translates, the clause is tombstoned and the
   entry dropped.
5. A true other literal becomes the entry's new blocking literal.
6. Otherwise a replacement is searched from the clause's saved cursor to the
   end, wrapping through the unwatched region before the cursor.
   Any untranslatable literal met tombstones the clause and drops the entry.
   A literal not currently false is swapped into the watched slots, the cursor
   saved, and the entry moves to the replacement's list.
7. With no replacement and the other literal false, the clause is falsified:
   the conflict counter is bumped and the whole pass ends, the remaining
   entries of the list carried over untouched.
8. With no replacement and the other literal unassigned, the clause forces the
   other literal --- and the watch is simply kept.

After a list is walked the retained entries have been compacted in place,
preserving their relative order.

# A weaker guarantee than the working solver's propagation

Case 8 records nothing: a forced literal is expected to be (re)derived by the
working solver's own propagation over its own clauses.
The archive detects conflicts implied by archived knowledge; it does not
enqueue implications.

# The empty list exit

Meeting an *empty* watch list ends the *entire pass*, leaving any remaining
queue literals unpropagated --- not just the literal whose list is empty.
A literal beyond the watch table's coverage has a vacuously empty list and
ends the pass the same way.
This mirrors the reference behaviour of the original engine and is a
documented source of incompleteness; see the tests for an exact capture.
*/

use crate::{
    context::Archive,
    db::watches::{blocking_literal, blocking_word, reference_of},
    misc::log::targets,
    structures::{literal::ELiteral, universe::Universe},
};

impl Archive {
    /// Propagates the queue of newly true literals against the archive.
    ///
    /// A conflict is recorded by incrementing
    /// [counters.conflicts](crate::context::Counters) and ending the pass ---
    /// conflicts are a normal outcome, not an error.
    pub fn propagate<U: Universe>(&mut self, queue: &[ELiteral], universe: &U) {
        if !self.active() {
            return;
        }
        if self.clauses.is_empty() {
            log::trace!(target: targets::PROPAGATION, "empty archive, nothing to propagate");
            return;
        }

        for &literal in queue {
            self.counters.propagations += 1;
            let negated = -literal;
            log::trace!(target: targets::PROPAGATION, "propagating {literal} over the list of {negated}");

            if !self.watches.covers(negated) {
                return;
            }
            let list = self.watches.list(negated);
            if list.is_empty() {
                log::trace!(target: targets::PROPAGATION, "empty watch list, ending the pass");
                return;
            }
            debug_assert_eq!(list.len() % 2, 0);

            let end = list.len();
            let mut p = 0;
            let mut q = 0;
            let mut found_conflict = false;

            while p != end {
                let head = self.vectors.get(&list, p);
                self.vectors.set(&list, q, head);
                p += 1;
                q += 1;

                let blocking = blocking_literal(head);
                if !universe.valid_external(blocking) {
                    q -= 1;
                    p += 1;
                    continue;
                }
                let Some(internal_blocking) = universe.import(blocking) else {
                    q -= 1;
                    p += 1;
                    continue;
                };
                let blocking_value = universe.value_of(internal_blocking);

                let tail = self.vectors.get(&list, p);
                self.vectors.set(&list, q, tail);
                p += 1;
                q += 1;

                if blocking_value == Some(true) {
                    continue;
                }

                let reference = reference_of(tail);
                if self.clauses.is_garbage(reference) {
                    q -= 2;
                    continue;
                }

                debug_assert_ne!(self.clauses.size(reference), 2);
                let other = self.clauses.literal(reference, 0)
                    ^ self.clauses.literal(reference, 1)
                    ^ negated;
                if !universe.valid_external(other) {
                    self.clauses.mark_garbage(reference);
                    self.counters.garbage += 1;
                    q -= 2;
                    continue;
                }
                debug_assert_ne!(other, negated);
                debug_assert_ne!(other, literal);
                let Some(internal_other) = universe.import(other) else {
                    self.clauses.mark_garbage(reference);
                    self.counters.garbage += 1;
                    q -= 2;
                    continue;
                };
                let other_value = universe.value_of(internal_other);
                if other_value == Some(true) {
                    self.vectors.set(&list, q - 2, blocking_word(other));
                    continue;
                }

                let size = self.clauses.size(reference);
                let searched = self.clauses.searched(reference);
                debug_assert!(2 <= searched && searched < size);

                let mut replacement = None;
                let mut corrupted = false;
                for position in (searched..size).chain(2..searched) {
                    let candidate = self.clauses.literal(reference, position);
                    if !universe.valid_external(candidate) {
                        corrupted = true;
                        break;
                    }
                    let Some(internal_candidate) = universe.import(candidate) else {
                        corrupted = true;
                        break;
                    };
                    if universe.value_of(internal_candidate) != Some(false) {
                        replacement = Some((position, candidate));
                        break;
                    }
                }

                if corrupted {
                    self.clauses.mark_garbage(reference);
                    self.counters.garbage += 1;
                    q -= 2;
                    continue;
                }

                match replacement {
                    Some((position, replacement)) => {
                        log::trace!(target: targets::PROPAGATION, "watch of {reference} moves to {replacement}");
                        self.clauses.set_searched(reference, position);
                        q -= 2;
                        self.clauses.set_literal(reference, 0, other);
                        self.clauses.set_literal(reference, 1, replacement);
                        self.clauses.set_literal(reference, position, negated);
                        if !self.watches.covers(replacement) {
                            self.watches.resize(replacement.unsigned_abs());
                        }
                        self.watches
                            .watch(&mut self.vectors, replacement, other, reference);
                    }

                    None if other_value.is_some() => {
                        log::trace!(target: targets::PROPAGATION, "conflict on {reference}");
                        found_conflict = true;
                        break;
                    }

                    None => {
                        // The clause forces `other`; deriving the assignment is left
                        // to the working solver's propagation over its own clauses.
                        log::trace!(target: targets::PROPAGATION, "{reference} forces {other}");
                    }
                }
            }

            while p != end {
                let word = self.vectors.get(&list, p);
                self.vectors.set(&list, q, word);
                p += 1;
                q += 1;
            }
            self.vectors.resize(self.watches.list_mut(negated), q);
            self.check_vectors();

            if found_conflict {
                self.counters.conflicts += 1;
                return;
            }
        }
    }
}
