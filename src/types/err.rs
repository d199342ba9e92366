//! Error types used in the library.
//!
//! Only recoverable conditions appear here.
//! - Capacity exhaustion of a store at its architectural maximum is
//!   [fatal](crate::misc::fatal) and never surfaces as a value.
//! - Renumbering drift is absorbed locally by dropping watches and
//!   tombstoning clauses.
//! - A conflict found during propagation is a normal outcome, recorded on the
//!   [counters](crate::context::Counters).

/// Noted errors when archiving a clause.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ArchiveError {
    /// An attempt to archive a clause with fewer than three literals.
    ///
    /// A binary clause never needs a watch replacement, so binary clauses are
    /// excluded from the archive by design.
    ShortClause,
}

impl std::fmt::Display for ArchiveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShortClause => write!(f, "ShortClause"),
        }
    }
}
