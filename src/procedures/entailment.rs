/*!
Entailment of a literal by the knowledge base of a context.

The knowledge base entails a literal *l* exactly when the knowledge base together with ¬*l* is unsatisfiable.
So, the [Entailment] of *l* is determined by (at most) two solves:

| KB ∧ ¬*l*     | KB ∧ *l*      | Entailment |
|---------------|---------------|------------|
| unsatisfiable | ---           | True       |
| satisfiable   | unsatisfiable | False      |
| satisfiable   | satisfiable   | Unknown    |

Both solves begin from the same knowledge base, and no clause persists from either solve.

Note, an inconsistent knowledge base entails every literal, and so the entailment of every literal is [True](Entailment::True).

# Example

```rust
# use clue_sat::context::Context;
# use clue_sat::reports::Entailment;
# use clue_sat::structures::literal::{CLiteral, Literal};
let mut the_context = Context::default();
let p = the_context.fresh_atom().unwrap();
let q = the_context.fresh_atom().unwrap();
let r = the_context.fresh_atom().unwrap();

let p_implies_q = vec![CLiteral::new(p, false), CLiteral::new(q, true)];
let _ = the_context.add_clause(p_implies_q);
let _ = the_context.add_clause(CLiteral::new(p, true));

assert_eq!(the_context.entailment(CLiteral::new(q, true)), Ok(Entailment::True));
assert_eq!(the_context.entailment(CLiteral::new(q, false)), Ok(Entailment::False));
assert_eq!(the_context.entailment(CLiteral::new(r, true)), Ok(Entailment::Unknown));
assert_eq!(the_context.clause_db.clause_count(), 2);
```
*/

use crate::{
    context::Context,
    misc::log::targets::{self},
    procedures::solve::Solve,
    reports::{Entailment, Report},
    structures::literal::{CLiteral, Literal},
    types::err::ErrorKind,
};

impl Context {
    /// The entailment of `literal` by the knowledge base.
    ///
    /// Each solve is made with the unit clause of an assumption temporarily added to the clause database.
    pub fn entailment(&mut self, literal: CLiteral) -> Result<Entailment, ErrorKind> {
        let entailment = match self.solve_assuming(literal.negate())? {
            Report::Unsatisfiable => Entailment::True,
            Report::Satisfiable => match self.solve_assuming(literal)? {
                Report::Unsatisfiable => Entailment::False,
                Report::Satisfiable => Entailment::Unknown,
            },
        };

        log::debug!(target: targets::ENTAILMENT, "{literal}: {entailment}");
        Ok(entailment)
    }

    /// The entailment of `literal` by the knowledge base, without mutating the context.
    ///
    /// Rather than adding a unit clause to the database, each solve is given an assumption.
    /// The result is always the same as [entailment](Context::entailment), though counters are not updated.
    pub fn entailment_shared(&self, literal: CLiteral) -> Result<Entailment, ErrorKind> {
        let entailment = match self.solve_shared(&[literal.negate()])? {
            Report::Unsatisfiable => Entailment::True,
            Report::Satisfiable => match self.solve_shared(&[literal])? {
                Report::Unsatisfiable => Entailment::False,
                Report::Satisfiable => Entailment::Unknown,
            },
        };

        log::debug!(target: targets::ENTAILMENT, "{literal}: {entailment} (shared)");
        Ok(entailment)
    }

    /// Solves with the unit clause of `literal` added to the clause database for the duration of the solve.
    fn solve_assuming(&mut self, literal: CLiteral) -> Result<Report, ErrorKind> {
        let config = &self.config;
        let (report, counters) = self
            .clause_db
            .with_assumption(literal, |clause_db| Solve::report_on(clause_db, &[], config))??;

        self.counters.absorb(&counters);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inconsistent_entails_everything() {
        let mut the_context = Context::default();
        let p = the_context.fresh_atom().unwrap();
        let q = the_context.fresh_atom().unwrap();

        let _ = the_context.add_clause(CLiteral::new(p, true));
        let _ = the_context.add_clause(CLiteral::new(p, false));

        assert_eq!(the_context.entailment(CLiteral::new(q, true)), Ok(Entailment::True));
        assert_eq!(the_context.entailment(CLiteral::new(q, false)), Ok(Entailment::True));
    }

    #[test]
    fn shared_agrees() {
        let mut the_context = Context::default();
        let atoms = the_context.fresh_atoms(4).unwrap();
        let clauses = vec![
            vec![CLiteral::new(atoms[0], true), CLiteral::new(atoms[1], true)],
            vec![CLiteral::new(atoms[0], false), CLiteral::new(atoms[2], true)],
            vec![CLiteral::new(atoms[1], false), CLiteral::new(atoms[2], true)],
            vec![CLiteral::new(atoms[3], false)],
        ];
        for clause in clauses {
            let _ = the_context.add_clause(clause);
        }

        for atom in atoms.iter().copied() {
            for polarity in [true, false] {
                let literal = CLiteral::new(atom, polarity);
                let shared = the_context.entailment_shared(literal);
                assert_eq!(shared, the_context.entailment(literal));
            }
        }
        assert_eq!(the_context.entailment(CLiteral::new(atoms[2], true)), Ok(Entailment::True));
        assert_eq!(the_context.entailment(CLiteral::new(atoms[3], true)), Ok(Entailment::False));
    }

    #[test]
    fn unknown_atom() {
        let mut the_context = Context::default();
        assert_eq!(the_context.entailment(1), Err(ErrorKind::UnknownAtom));
        assert_eq!(the_context.entailment_shared(1), Err(ErrorKind::UnknownAtom));
    }

    #[test]
    fn counters_accumulate() {
        let mut the_context = Context::default();
        let p = the_context.fresh_atom().unwrap();

        let _ = the_context.entailment(CLiteral::new(p, true));
        assert_eq!(the_context.counters.total_solves, 2);
    }
}
