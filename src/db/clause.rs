/*!
A database of clauses, aka. the knowledge base.

Clauses are appended, and once appended are never removed or mutated.
The only exception is the unit clause of an assumption, which is appended on entry to [with_assumption](ClauseDB::with_assumption) and removed on exit.

Fields of the database are private to ensure the use of methods which may be needed to uphold invariants.
In particular:
- No stored clause is empty.
- No stored clause contains some literal twice.
- Every atom of a stored clause is part of the language of the database.

# Example

```rust
# use clue_sat::db::clause::ClauseDB;
# use clue_sat::structures::literal::{CLiteral, Literal};
let mut clause_db = ClauseDB::default();
let p = clause_db.fresh_atom().unwrap();
let q = clause_db.fresh_atom().unwrap();

assert!(clause_db.add_clause(vec![CLiteral::new(p, true), CLiteral::new(q, true)]).is_ok());

let count_inside = clause_db.with_assumption(CLiteral::new(p, false), |db| db.clause_count());
assert_eq!(count_inside, Ok(2));
assert_eq!(clause_db.clause_count(), 1);
```
*/

use std::ops::Deref;

use crate::{
    db::keys::ClauseKey,
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

/// A database of clauses.
#[derive(Default)]
pub struct ClauseDB {
    /// The clauses, in order of addition.
    clauses: Vec<CClause>,

    /// The index of the unit clause of an active assumption, if any.
    assumption: Option<usize>,

    /// A count of the atoms in the language of the database, excluding top.
    atom_count: Atom,
}

impl ClauseDB {
    /// A fresh atom --- on Ok the atom is part of the language of the database.
    pub fn fresh_atom(&mut self) -> Result<Atom, ErrorKind> {
        match self.atom_count.checked_add(1) {
            Some(atom) if atom <= ATOM_MAX => {
                self.atom_count = atom;
                Ok(atom)
            }
            _ => Err(err::ClauseDBError::StorageExhausted.into()),
        }
    }

    /// A count of the atoms in the language of the database, excluding top.
    /// As atoms are contiguous, this is also the greatest atom.
    pub fn atom_count(&self) -> Atom {
        self.atom_count
    }

    /// Whether the atom is part of the language of the database.
    pub fn contains_atom(&self, atom: Atom) -> bool {
        0 < atom && atom <= self.atom_count
    }

    /// A count of the clauses in the database, including the unit clause of an active assumption.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// Appends a clause to the database, returning the key to the clause.
    ///
    /// Repeated literals are dropped, keeping the first occurrence.
    /// An empty clause is never the result of a rule of the game, and so is an error.
    pub fn add_clause(&mut self, clause: impl Clause) -> Result<ClauseKey, ErrorKind> {
        let clause = clause.canonical();

        if clause.is_empty() {
            log::error!(target: targets::CLAUSE_DB, "Attempt to store an empty clause");
            return Err(err::ClauseDBError::EmptyClause.into());
        }

        if let Some(literal) = clause.iter().find(|l| !self.contains_atom(l.atom())) {
            log::error!(target: targets::CLAUSE_DB, "The atom of {literal} is not part of the language");
            return Err(ErrorKind::UnknownAtom);
        }

        let mut the_clause = CClause::with_capacity(clause.len());
        for literal in clause {
            if !the_clause.contains(&literal) {
                the_clause.push(literal);
            }
        }

        self.store(the_clause, ClauseKey::Original)
    }

    /// Stores a clause, with a key of the given kind.
    fn store(
        &mut self,
        clause: CClause,
        kind: fn(crate::db::FormulaIndex) -> ClauseKey,
    ) -> Result<ClauseKey, ErrorKind> {
        let key = kind(ClauseKey::formula_index(self.clauses.len())?);
        log::trace!(target: targets::CLAUSE_DB, "{key}: {}", clause.as_string());
        self.clauses.push(clause);
        Ok(key)
    }

    /// The clause stored under the key.
    pub fn get(&self, key: &ClauseKey) -> Result<&CClause, err::ClauseDBError> {
        let stored_as_assumption = self.assumption == Some(key.index());
        match (key, stored_as_assumption) {
            (ClauseKey::Original(_), false) | (ClauseKey::Assumption(_), true) => {
                match self.clauses.get(key.index()) {
                    Some(clause) => Ok(clause),
                    None => Err(err::ClauseDBError::InvalidKeyIndex),
                }
            }
            _ => Err(err::ClauseDBError::InvalidKeyIndex),
        }
    }

    /// The key to the clause stored at some index.
    fn key_at(&self, index: usize) -> ClauseKey {
        // Indicies are checked to be representable on storage.
        let formula_index = index as crate::db::FormulaIndex;
        match self.assumption == Some(index) {
            true => ClauseKey::Assumption(formula_index),
            false => ClauseKey::Original(formula_index),
        }
    }

    /// An iterator over all clauses in the database, paired with their keys, in order of addition.
    pub fn all_clauses(&self) -> impl Iterator<Item = (ClauseKey, &CClause)> {
        self.clauses
            .iter()
            .enumerate()
            .map(|(index, clause)| (self.key_at(index), clause))
    }

    /// Temporarily appends the unit clause of `literal`, calls `body` on the database, and removes the unit clause.
    ///
    /// The unit clause is removed however `body` completes, including on a panic.
    /// So, every query made through `body` leaves the database as it was found.
    ///
    /// ```rust
    /// # use clue_sat::db::clause::ClauseDB;
    /// # use clue_sat::db::ClauseKey;
    /// # use clue_sat::structures::literal::{CLiteral, Literal};
    /// let mut clause_db = ClauseDB::default();
    /// let p = clause_db.fresh_atom().unwrap();
    ///
    /// let keys = clause_db
    ///     .with_assumption(CLiteral::new(p, true), |db| {
    ///         db.all_clauses().map(|(key, _)| key).collect::<Vec<_>>()
    ///     })
    ///     .unwrap();
    ///
    /// assert_eq!(keys, vec![ClauseKey::Assumption(0)]);
    /// assert_eq!(clause_db.clause_count(), 0);
    /// ```
    pub fn with_assumption<T>(
        &mut self,
        literal: CLiteral,
        body: impl FnOnce(&ClauseDB) -> T,
    ) -> Result<T, ErrorKind> {
        if !self.contains_atom(literal.atom()) {
            return Err(ErrorKind::UnknownAtom);
        }

        let guard = AssumptionGuard::place(self, literal)?;
        let result = body(&*guard);
        drop(guard);
        Ok(result)
    }

    /// The clauses of the database as a DIMACS formula, with a preamble.
    pub fn as_dimacs(&self) -> String {
        let mut dimacs = format!("p cnf {} {}\n", self.atom_count, self.clauses.len());
        for clause in &self.clauses {
            dimacs.push_str(&clause.as_dimacs(true));
            dimacs.push('\n');
        }
        dimacs
    }
}

/// Holds the database while an assumption is active, and removes the unit clause of the assumption when dropped.
struct AssumptionGuard<'db> {
    clause_db: &'db mut ClauseDB,

    /// The length of the database before the assumption was made.
    mark: usize,
}

impl<'db> AssumptionGuard<'db> {
    fn place(clause_db: &'db mut ClauseDB, literal: CLiteral) -> Result<Self, ErrorKind> {
        let mark = clause_db.clauses.len();
        clause_db.store(vec![literal], ClauseKey::Assumption)?;
        clause_db.assumption = Some(mark);
        log::trace!(target: targets::CLAUSE_DB, "Assumption of {literal} placed");
        Ok(AssumptionGuard { clause_db, mark })
    }
}

impl Deref for AssumptionGuard<'_> {
    type Target = ClauseDB;

    fn deref(&self) -> &Self::Target {
        self.clause_db
    }
}

impl Drop for AssumptionGuard<'_> {
    fn drop(&mut self) {
        self.clause_db.clauses.truncate(self.mark);
        self.clause_db.assumption = None;
        log::trace!(target: targets::CLAUSE_DB, "Assumption cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_atom_db() -> (ClauseDB, Atom, Atom) {
        let mut clause_db = ClauseDB::default();
        let p = clause_db.fresh_atom().unwrap();
        let q = clause_db.fresh_atom().unwrap();
        (clause_db, p, q)
    }

    #[test]
    fn empty_clause() {
        let (mut clause_db, _, _) = two_atom_db();
        assert_eq!(
            clause_db.add_clause(CClause::new()),
            Err(ErrorKind::ClauseDB(err::ClauseDBError::EmptyClause))
        );
        assert_eq!(clause_db.clause_count(), 0);
    }

    #[test]
    fn unknown_atom() {
        let (mut clause_db, p, _) = two_atom_db();
        assert_eq!(
            clause_db.add_clause(vec![CLiteral::new(p, true), CLiteral::new(3, true)]),
            Err(ErrorKind::UnknownAtom)
        );
    }

    #[test]
    fn duplicates_dropped() {
        let (mut clause_db, p, q) = two_atom_db();
        let p = CLiteral::new(p, true);
        let q = CLiteral::new(q, false);

        let key = clause_db.add_clause(vec![p, q, p, q]).unwrap();
        assert_eq!(clause_db.get(&key), Ok(&vec![p, q]));
    }

    #[test]
    fn assumption_removed_after_panic() {
        let (mut clause_db, p, _) = two_atom_db();
        let _ = clause_db.add_clause(CLiteral::new(p, true));

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _ = clause_db.with_assumption(CLiteral::new(p, false), |db| {
                assert_eq!(db.clause_count(), 2);
                panic!("! Body failure");
            });
        }));

        assert!(outcome.is_err());
        assert_eq!(clause_db.clause_count(), 1);
        assert!(clause_db.all_clauses().all(|(key, _)| matches!(key, ClauseKey::Original(_))));
    }

    #[test]
    fn assumption_key_is_only_valid_inside() {
        let (mut clause_db, p, _) = two_atom_db();

        let key = clause_db
            .with_assumption(CLiteral::new(p, true), |db| {
                let (key, clause) = db.all_clauses().last().unwrap();
                assert_eq!(clause, &vec![CLiteral::new(p, true)]);
                assert_eq!(db.get(&key), Ok(clause));
                key
            })
            .unwrap();

        assert_eq!(
            clause_db.get(&key),
            Err(err::ClauseDBError::InvalidKeyIndex)
        );
    }

    #[test]
    fn dimacs_export() {
        let (mut clause_db, p, q) = two_atom_db();
        let _ = clause_db.add_clause(vec![CLiteral::new(p, true), CLiteral::new(q, false)]);
        let _ = clause_db.add_clause(CLiteral::new(q, true));

        assert_eq!(clause_db.as_dimacs(), "p cnf 2 2\n1 -2 0\n2 0\n");
    }
}
