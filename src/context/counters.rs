/// Counts for various things which count, roughly.
#[derive(Clone, Copy, Debug, Default)]
pub struct Counters {
    /// A count of clauses archived over the session.
    pub archived: usize,

    /// A count of queue literals consumed by propagation.
    pub propagations: usize,

    /// A count of conflicts found by propagation.
    ///
    /// The observable outcome of a propagation pass: a pass which found a
    /// conflict increments this exactly once.
    pub conflicts: usize,

    /// A count of archived clauses tombstoned after renumbering drift.
    pub garbage: usize,
}
