//! The variable universe the archive propagates against.
//!
//! The archive stores external literals, while values are known only for
//! internal literals, and the mapping between the two drifts as the
//! surrounding solver renumbers its variables.
//! The [Universe] trait is the seam: the solver supplies translation in both
//! directions, a validity predicate for external literals, and value lookup.
//!
//! Renumbering drift is a *soft* condition.
//! An external literal which no longer maps to anything is reported through
//! [valid_external](Universe::valid_external) returning false or
//! [import](Universe::import) returning [None], and the archive responds by
//! dropping the affected watch or tombstoning the affected clause --- never
//! by surfacing an error.
//!
//! [TableUniverse] is the canonical table-backed implementation, suitable for
//! driving the archive directly and as the reference semantics for drift.

use crate::structures::literal::{self, Atom, ELiteral, ILiteral, MAX_EXTERNAL_VAR};

/// Translation and valuation services the surrounding solver provides.
pub trait Universe {
    /// Whether `literal` is a meaningful external literal in the current universe.
    fn valid_external(&self, literal: ELiteral) -> bool;

    /// The internal literal `literal` currently maps to, if any.
    ///
    /// [None] when the external variable has been renumbered away.
    fn import(&self, literal: ELiteral) -> Option<ILiteral>;

    /// The external literal a (live) internal literal maps to.
    fn export(&self, literal: ILiteral) -> ELiteral;

    /// The value of an internal literal on the current assignment, [None] when unassigned.
    fn value_of(&self, literal: ILiteral) -> Option<bool>;
}

/// A table-backed universe: external variables bound to fresh atoms, retired
/// on demand to model renumbering, with a plain assignment table.
#[derive(Default)]
pub struct TableUniverse {
    /// External variable to atom, indexed by variable, [None] once retired.
    imports: Vec<Option<Atom>>,

    /// Atom to external variable.
    exports: Vec<ELiteral>,

    /// Value of the positive literal of each atom.
    values: Vec<Option<bool>>,
}

impl TableUniverse {
    /// Binds external variable `variable` to a fresh atom and returns the atom.
    pub fn bind(&mut self, variable: ELiteral) -> Atom {
        assert!(0 < variable && variable <= MAX_EXTERNAL_VAR);
        let variable = variable as usize;
        if self.imports.len() <= variable {
            self.imports.resize(variable + 1, None);
        }
        debug_assert!(self.imports[variable].is_none());
        let atom = self.exports.len() as Atom;
        self.imports[variable] = Some(atom);
        self.exports.push(variable as ELiteral);
        self.values.push(None);
        atom
    }

    /// Retires external variable `variable`, as renumbering would.
    ///
    /// Archived occurrences of the variable become drift for the archive to
    /// absorb on its next pass over them.
    pub fn retire(&mut self, variable: ELiteral) {
        assert!(0 < variable);
        if let Some(slot) = self.imports.get_mut(variable as usize) {
            *slot = None;
        }
    }

    /// Makes `literal` true on the current assignment.
    pub fn assign(&mut self, literal: ELiteral) {
        let internal = self.import(literal).expect("assignment to an unbound literal");
        self.values[literal::atom_of(internal) as usize] = Some(literal > 0);
    }

    /// Clears any value of the variable of `literal`.
    pub fn unassign(&mut self, literal: ELiteral) {
        let internal = self.import(literal).expect("clearing an unbound literal");
        self.values[literal::atom_of(internal) as usize] = None;
    }
}

impl Universe for TableUniverse {
    fn valid_external(&self, literal: ELiteral) -> bool {
        literal != 0
            && literal != ELiteral::MIN
            && literal.unsigned_abs() <= MAX_EXTERNAL_VAR.unsigned_abs()
            && (literal.unsigned_abs() as usize) < self.imports.len()
    }

    fn import(&self, literal: ELiteral) -> Option<ILiteral> {
        let atom = (*self.imports.get(literal.unsigned_abs() as usize)?)?;
        Some(literal::pack(atom, literal > 0))
    }

    fn export(&self, literal: ILiteral) -> ELiteral {
        let variable = self.exports[literal::atom_of(literal) as usize];
        match literal::polarity_of(literal) {
            true => variable,
            false => -variable,
        }
    }

    fn value_of(&self, literal: ILiteral) -> Option<bool> {
        let value = self.values[literal::atom_of(literal) as usize]?;
        Some(value == literal::polarity_of(literal))
    }
}
