/*!
Archiving a clause.

See [Archive::archive_clause] for the method.

A learned clause arrives in internal numbering.
Each literal is exported to the stable external numbering before storage, so
the record stays meaningful after the working solver renumbers its variables.
Exporting may reveal variables past the watch table's coverage, in which case
the table is grown before the clause is watched.

The clause is watched on its first two literals, each entry blocked by the
other, exactly once, at archive time.
*/

use crate::{
    context::Archive,
    db::ClauseRef,
    misc::log::targets,
    structures::{
        literal::ILiteral,
        universe::Universe,
    },
    types::err::ArchiveError,
};

impl Archive {
    /// Archives a clause given in internal numbering.
    ///
    /// Returns the reference of the archived record, or [None] when archiving
    /// is disabled or the archive has not been [unlocked](Archive::init).
    ///
    /// ```rust, ignore
    /// let reference = self.archive_clause(&learnt, &universe)?;
    /// ```
    pub fn archive_clause<U: Universe>(
        &mut self,
        clause: &[ILiteral],
        universe: &U,
    ) -> Result<Option<ClauseRef>, ArchiveError> {
        if !self.active() {
            return Ok(None);
        }
        if clause.len() < 3 {
            return Err(ArchiveError::ShortClause);
        }
        log::trace!(target: targets::ARCHIVE, "archiving a clause of {} literals", clause.len());

        let mut exported = Vec::with_capacity(clause.len());
        for &literal in clause {
            let external = universe.export(literal);
            debug_assert!(universe.valid_external(external));
            if !self.watches.covers(external) {
                self.resize_watches(external.unsigned_abs());
            }
            exported.push(external);
        }

        let reference = self.clauses.store(&exported);
        self.watches
            .watch_clause(&mut self.vectors, exported[0], exported[1], reference);
        self.counters.archived += 1;
        self.check_vectors();

        Ok(Some(reference))
    }
}
