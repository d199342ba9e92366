/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [archiving a clause](crate::procedures)
    pub const ARCHIVE: &str = "archive";

    /// Logs related to [archive propagation](crate::procedures)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to the [vector store](crate::db::vector)
    pub const VECTORS: &str = "vectors";

    /// Logs related to [tier limits](crate::tiers)
    pub const TIERS: &str = "tiers";

    /// Logs made on the way to terminating the process
    pub const FATAL: &str = "fatal";
}
