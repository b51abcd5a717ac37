//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use clue_sat::structures::literal::{CLiteral, Literal};
//! # use clue_sat::structures::clause::Clause;
//! let clause = vec![CLiteral::new(2, true),
//!                   CLiteral::new(4, false),
//!                   CLiteral::new(3, false)];
//!
//! let mut some_valuation = vec![Some(true); 5];
//! some_valuation[2] = Some(false);
//! assert!(clause.unsatisfiable_on(&some_valuation));
//!
//! some_valuation[4] = None;
//! assert!(!clause.unsatisfiable_on(&some_valuation));
//! assert!(!clause.satisfied_on(&some_valuation));
//! ```
//!
//! - The empty clause is always false (never true), and is never stored.
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).

use crate::structures::{
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

/// The clause trait.
pub trait Clause {
    /// Some string representation of the clause.
    fn as_string(&self) -> String;

    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all literals in the clause, in the order of the clause.
    fn literals(&self) -> impl Iterator<Item = CLiteral>;

    /// The clause in its canonical form.
    fn canonical(self) -> CClause;

    /// Returns whether the clause is unsatisfiable on the given valuation.
    /// That is, whether every literal in the clause conflicts with the valuation.
    fn unsatisfiable_on(&self, valuation: &impl Valuation) -> bool;

    /// Returns whether some literal of the clause is true on the given valuation.
    fn satisfied_on(&self, valuation: &impl Valuation) -> bool;
}

/// The canonical implementation of a clause.
pub type CClause = Vec<CLiteral>;

/// The value of a literal on a valuation, with an atom outside the valuation treated as having no value.
fn literal_value(literal: CLiteral, valuation: &impl Valuation) -> Option<bool> {
    valuation
        .value_of(literal.atom())
        .flatten()
        .map(|value| value == literal.polarity())
}

impl Clause for CClause {
    fn as_string(&self) -> String {
        let mut the_string = String::from("(");
        for (index, literal) in self.iter().enumerate() {
            if index > 0 {
                the_string.push_str(" ∨ ");
            }
            the_string.push_str(&literal.to_string());
        }
        the_string.push(')');
        the_string
    }

    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = self
            .iter()
            .map(|literal| Literal::as_dimacs(literal, false))
            .collect::<Vec<_>>()
            .join(" ");
        if zero {
            the_string.push_str(" 0");
        }
        the_string
    }

    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        self.iter().copied()
    }

    fn canonical(self) -> CClause {
        self
    }

    fn unsatisfiable_on(&self, valuation: &impl Valuation) -> bool {
        self.literals()
            .all(|literal| literal_value(literal, valuation) == Some(false))
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.literals()
            .any(|literal| literal_value(literal, valuation) == Some(true))
    }
}

/// A literal is identified with the unit clause containing the literal.
impl Clause for CLiteral {
    fn as_string(&self) -> String {
        format!("({self})")
    }

    fn as_dimacs(&self, zero: bool) -> String {
        Literal::as_dimacs(self, zero)
    }

    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        std::iter::once(*self)
    }

    fn canonical(self) -> CClause {
        vec![self]
    }

    fn unsatisfiable_on(&self, valuation: &impl Valuation) -> bool {
        literal_value(*self, valuation) == Some(false)
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        literal_value(*self, valuation) == Some(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_literal_as_clause() {
        let p = CLiteral::new(1, false);
        let valuation = vec![Some(true), None];

        assert_eq!(p.canonical(), vec![-1]);
        assert!(!p.unsatisfiable_on(&valuation));
        assert!(!p.satisfied_on(&valuation));
    }

    #[test]
    fn satisfied_and_unsatisfiable() {
        let clause: CClause = vec![1, -2];
        let mut valuation = vec![Some(true), Some(false), Some(true)];

        assert!(clause.unsatisfiable_on(&valuation));
        assert!(!clause.satisfied_on(&valuation));

        valuation[2] = Some(false);
        assert!(clause.satisfied_on(&valuation));
        assert_eq!(clause.as_dimacs(true), "1 -2 0");
        assert_eq!(clause.as_string(), "(1 ∨ -2)");
    }
}
