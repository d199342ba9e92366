//! Literals, in the two numberings the archive bridges.
//!
//! The surrounding solver works with *internal* literals, and is free to
//! renumber its variables whenever the formula is simplified.
//! Archived clauses must outlive such renumbering, so the archive stores
//! *external* literals: the stable, problem-facing numbering, with the DIMACS
//! sign convention.
//!
//! An external literal is a non-zero [i32], negative for a negated variable.
//! An internal literal is an atom index shifted left by one, with the low bit
//! set for negation.
//! The archive never inspects the contents of an internal literal itself ---
//! translation and valuation go through a [Universe](crate::structures::universe::Universe).

/// An external literal: stable, problem-facing, sign gives polarity.
pub type ELiteral = i32;

/// An internal literal of the working solver: `atom << 1 | negated`.
pub type ILiteral = u32;

/// An atom (variable) index of the working solver.
pub type Atom = u32;

/// The largest external variable the archive can watch.
///
/// Watch words carry a literal in a 31-bit payload (see
/// [watches](crate::db::watches)), so magnitudes are capped one bit below
/// that to leave room for the sign.
pub const MAX_EXTERNAL_VAR: ELiteral = (1 << 30) - 1;

/// Packs an atom and a polarity into an internal literal.
pub fn pack(atom: Atom, polarity: bool) -> ILiteral {
    (atom << 1) | (!polarity as ILiteral)
}

/// The atom of an internal literal.
pub fn atom_of(literal: ILiteral) -> Atom {
    literal >> 1
}

/// The polarity of an internal literal, true for positive.
pub fn polarity_of(literal: ILiteral) -> bool {
    literal & 1 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_round_trip() {
        for atom in [0, 1, 7, 255] {
            for polarity in [true, false] {
                let literal = pack(atom, polarity);
                assert_eq!(atom_of(literal), atom);
                assert_eq!(polarity_of(literal), polarity);
            }
        }
    }
}
