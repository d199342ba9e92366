//! Generic structures, free of any interpretation specific to the archive.

pub mod growable;
