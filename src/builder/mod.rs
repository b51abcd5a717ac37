/*!
Tools for building a context.

# Basic methods

The library has two basic methods for building a context:
- [fresh_atom](crate::context::Context::fresh_atom), to obtain a fresh atom.
- [add_clause](crate::context::Context::add_clause), to add a clause.

A formula may be added to a context by interweaving these two methods.
In rough strokes, the pattern is to:
- Obtain a collection of atoms to represent a clause.
- Create [CLiteral]s from the atoms.
- Bundle the literals into a [CClause](crate::structures::clause::CClause).
- Add the clause to the context.

# Example

```rust
# use clue_sat::builder::ClauseOk;
# use clue_sat::context::Context;
# use clue_sat::reports::Report;
# use clue_sat::structures::literal::{CLiteral, Literal};
let mut the_context = Context::default();
let p = the_context.fresh_atom().unwrap();
let q = the_context.fresh_atom().unwrap();

let clause_a = vec![CLiteral::new(p, true), CLiteral::new(q, false)];
let clause_b = vec![CLiteral::new(p, false), CLiteral::new(q, true)];
let tautology = vec![CLiteral::new(p, false), CLiteral::new(p, true)];

assert!(the_context.add_clause(clause_a).is_ok());
assert!(the_context.add_clause(clause_b).is_ok());
assert_eq!(the_context.add_clause(tautology), Ok(ClauseOk::Tautology));

assert_eq!(the_context.clause_db.clause_count(), 2);
assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
```
*/

mod dimacs;
pub use dimacs::ParserInfo;

use crate::{
    context::Context,
    db::ClauseKey,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::Clause,
        literal::{CLiteral, Literal},
    },
    types::err::ErrorKind,
};

/// Ok results when adding a clause to the context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the context, and is stored under the key.
    Added(ClauseKey),

    /// The clause was a tautology (and so was not added to the context).
    Tautology,
}

impl Context {
    /// A fresh atom, part of the language of the context.
    pub fn fresh_atom(&mut self) -> Result<Atom, ErrorKind> {
        self.clause_db.fresh_atom()
    }

    /// A vector of `count` fresh atoms, in order.
    pub fn fresh_atoms(&mut self, count: usize) -> Result<Vec<Atom>, ErrorKind> {
        let mut atoms = Vec::with_capacity(count);
        for _ in 0..count {
            atoms.push(self.fresh_atom()?);
        }
        Ok(atoms)
    }

    /// Adds a clause to the context.
    ///
    /// A clause which contains some literal and the negation of that literal is true on every valuation, and is not stored.
    /// Otherwise, the clause is stored without any repeated literals.
    pub fn add_clause(&mut self, clause: impl Clause) -> Result<ClauseOk, ErrorKind> {
        let clause = clause.canonical();

        if clause
            .iter()
            .any(|literal| !self.clause_db.contains_atom(literal.atom()))
        {
            return Err(ErrorKind::UnknownAtom);
        }

        if is_tautology(&clause) {
            log::trace!(target: targets::CLAUSE_DB, "Tautology skipped: {}", clause.as_string());
            return Ok(ClauseOk::Tautology);
        }

        let key = self.clause_db.add_clause(clause)?;
        Ok(ClauseOk::Added(key))
    }
}

fn is_tautology(clause: &[CLiteral]) -> bool {
    clause
        .iter()
        .any(|literal| clause.contains(&literal.negate()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_dropped_on_addition() {
        let mut the_context = Context::default();
        let p = the_context.fresh_atom().unwrap();

        let p = CLiteral::new(p, true);
        let Ok(ClauseOk::Added(key)) = the_context.add_clause(vec![p, p]) else {
            panic!("! Clause not added");
        };
        assert_eq!(the_context.clause_db.get(&key), Ok(&vec![p]));
    }

    #[test]
    fn unknown_atom_before_tautology() {
        let mut the_context = Context::default();
        assert_eq!(the_context.add_clause(vec![1, -1]), Err(ErrorKind::UnknownAtom));
    }
}
