//! Abstract elements the archive works with: literals in two numberings, and
//! the variable universe which relates them.

pub mod literal;
pub mod universe;
