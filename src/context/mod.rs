/*!
The archive --- the session object owning every store.

An [Archive] is created from a [configuration](crate::config::ArchiveConfig)
and unlocked with [init](Archive::init), after which clauses may be
[archived](Archive::archive_clause) and the archive
[propagated](Archive::propagate) against the literals the surrounding solver
assigns.
All storage is torn down together: the archive exclusively owns the clause
arena, the vector store, and the watch table, and nothing in them is
meaningful beyond the archive's life.

# Example

```rust
# use clause_archive::context::Archive;
# use clause_archive::structures::universe::{TableUniverse, Universe};
let mut the_universe = TableUniverse::default();
for variable in [1, 2, 3] {
    the_universe.bind(variable);
}
let clause: Vec<_> = [1, 2, 3]
    .iter()
    .map(|&literal| the_universe.import(literal).unwrap())
    .collect();

let mut the_archive = Archive::default();
the_archive.init();
assert!(the_archive.archive_clause(&clause, &the_universe).is_ok());

the_universe.assign(-1);
the_archive.propagate(&[-1], &the_universe);
assert_eq!(the_archive.counters.conflicts, 0);
```
*/

mod counters;
pub use counters::Counters;

use crate::{
    config::ArchiveConfig,
    db::{
        clause::ClauseStore,
        vector::VectorStore,
        watches::{blocking_literal, reference_of, Watch, WatchTable},
    },
    structures::literal::ELiteral,
};

pub struct Archive {
    /// The configuration of the archive.
    pub config: ArchiveConfig,

    /// Counters related to the session.
    pub counters: Counters,

    /// The clause store.
    /// See [db::clause](crate::db::clause) for details.
    pub clauses: ClauseStore,

    /// The vector store backing every watch list.
    /// See [db::vector](crate::db::vector) for details.
    pub vectors: VectorStore,

    /// The watch table.
    /// See [db::watches](crate::db::watches) for details.
    pub watches: WatchTable,

    /// Set by [init](Archive::init); nothing is archived or propagated before.
    unlocked: bool,
}

impl Default for Archive {
    fn default() -> Self {
        Archive::from_config(ArchiveConfig::default())
    }
}

impl Archive {
    pub fn from_config(config: ArchiveConfig) -> Self {
        Archive {
            config,
            counters: Counters::default(),
            clauses: ClauseStore::default(),
            vectors: VectorStore::default(),
            watches: WatchTable::default(),
            unlocked: false,
        }
    }

    /// Enables archiving for the session.
    /// Idempotent.
    pub fn init(&mut self) {
        self.unlocked = true;
    }

    /// Whether clauses are currently accepted and propagated.
    pub fn active(&self) -> bool {
        self.config.enabled.value && self.unlocked
    }

    /// Retracks the watch table to an external universe of `new_max` variables.
    pub fn resize_watches(&mut self, new_max: u32) {
        self.watches.resize(new_max);
        self.check_vectors();
    }

    /// Frees all vector storage and resets the bookkeeping.
    ///
    /// Watch lists are voided with their storage; the clause store is
    /// unaffected, though every watch into it is gone.
    pub fn release_vectors(&mut self) {
        self.vectors.release();
        self.watches.reset();
    }

    /// The decoded watch list of `literal`, for inspection.
    pub fn watches_on(&self, literal: ELiteral) -> Vec<Watch> {
        if !self.watches.covers(literal) {
            return Vec::default();
        }
        let list = self.watches.list(literal);
        debug_assert_eq!(list.len() % 2, 0);
        (0..list.len() / 2)
            .map(|entry| Watch {
                blocking: blocking_literal(self.vectors.get(&list, 2 * entry)),
                reference: reference_of(self.vectors.get(&list, 2 * entry + 1)),
            })
            .collect()
    }

    pub(crate) fn check_vectors(&self) {
        #[cfg(feature = "check_vectors")]
        self.vectors.check(self.watches.lists());
    }
}
