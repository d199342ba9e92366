//! The procedures of the archive, as methods on [Archive](crate::context::Archive).
//!
//! - [Archiving a clause](crate::procedures::archive)
//! - [Propagating the archive](crate::procedures::propagate)

pub mod archive;
pub mod propagate;
