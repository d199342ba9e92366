//! A library for archiving learned clauses beyond the life of a solver's
//! working clause database, with watched-literal propagation over stable
//! external literal numbering.
//!
//! A conflict-driven solver learns clauses, and periodically discards most of
//! them --- and simplification may renumber the variable universe underneath
//! whatever survives.
//! clause_archive retains a chosen subset of learned clauses in a compact,
//! relocatable arena keyed by the *external* (problem-facing) numbering, so
//! that a secondary propagation pass can still detect conflicts implied by
//! previously learned knowledge after the working database has moved on.
//!
//! # Orientation
//!
//! The library is designed around the core structure of an
//! [Archive](context::Archive), which owns three stores:
//!
//! - The [clause store](db::clause): variable-length clause records packed
//!   end to end in a word arena, addressed by [ClauseRef](db::ClauseRef)
//!   offsets rather than pointers, as the arena relocates when it grows.
//! - The [vector store](db::vector): many independently growable vectors
//!   multiplexed into one shared stack, with doubling growth, sentinel-marked
//!   vacated slots, and aggregate slack bookkeeping.
//! - The [watch table](db::watches): one vector of blocking-literal/reference
//!   pairs per external literal, in both polarities.
//!
//! The [procedures] tie the stores together: archiving exports a clause to
//! external numbering and watches its first two literals; propagation walks
//! the relevant watch lists as literals become true, moving watches,
//! compacting lists in place, absorbing renumbering drift, and counting
//! conflicts.
//! Translation between numberings and value lookup stay with the surrounding
//! solver, behind the [Universe](structures::universe::Universe) trait.
//!
//! Useful starting points:
//! - The [propagation procedure](procedures::propagate) for the engine and
//!   its two deliberate quirks (no enqueueing of forced literals, and the
//!   empty-list pass exit).
//! - The [vector store](db::vector) for the slot lifecycle.
//! - The [configuration](config) and the [tiers] utility.
//!
//! # Example
//!
//! Archive a clause, lose a watch candidate, and find the conflict once every
//! literal of the clause is false:
//!
//! ```rust
//! # use clause_archive::context::Archive;
//! # use clause_archive::structures::universe::{TableUniverse, Universe};
//! let mut the_universe = TableUniverse::default();
//! for variable in [3, 5, 7] {
//!     the_universe.bind(variable);
//! }
//! let clause: Vec<_> = [5, -3, 7]
//!     .iter()
//!     .map(|&literal| the_universe.import(literal).unwrap())
//!     .collect();
//!
//! let mut the_archive = Archive::default();
//! the_archive.init();
//! the_archive.archive_clause(&clause, &the_universe).unwrap();
//!
//! the_universe.assign(-5);
//! the_universe.assign(3);
//! the_archive.propagate(&[-5, 3], &the_universe);
//! assert_eq!(the_archive.counters.conflicts, 0);
//!
//! the_universe.assign(-7);
//! the_archive.propagate(&[-7], &the_universe);
//! assert_eq!(the_archive.counters.conflicts, 1);
//! ```
//!
//! # Errors, and the lack of them
//!
//! The archive has two failure modes, neither of which is a recoverable
//! error value in the usual sense --- see [types::err] for the one exception:
//! - Exhausting a store at its architectural maximum is
//!   [fatal](misc::fatal) by design.
//! - Renumbering drift is absorbed locally: stale watches are dropped and
//!   stale clauses tombstoned during the next pass over them.
//!
//! # Logs
//!
//! Calls to [log!](log) are made with targets listed in [misc::log], so
//! output can be narrowed to the part of interest, for example with
//! [env_logger](https://docs.rs/env_logger/latest/env_logger/) and
//! `RUST_LOG=propagation …`.

pub mod config;
pub mod context;
pub mod db;
pub mod generic;
pub mod misc;
pub mod procedures;
pub mod structures;
pub mod tiers;
pub mod types;
