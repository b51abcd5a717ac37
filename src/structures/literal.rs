//! Literals are atoms paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an atom and a polarity.
//!
//! The 'canonical' implementation of the literal trait is a signed integer, with the magnitude of the integer the atom and the sign of the integer the polarity.
//!
//! ```rust
//! # use clue_sat::structures::literal::{CLiteral, Literal};
//! let atom = 79;
//! let literal = CLiteral::new(atom, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), 79);
//! assert!(!literal.negate().polarity());
//! assert_eq!(literal.negate(), -79);
//! ```

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash + Copy {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The literal in its DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;
}

/// The representation of a literal as a signed integer.
pub type IntLiteral = i32;

/// The canonical implementation of a literal.
pub type CLiteral = IntLiteral;

impl Literal for IntLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as IntLiteral,
            false => -(atom as IntLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }

    fn as_dimacs(&self, zero: bool) -> String {
        match zero {
            true => format!("{self} 0"),
            false => format!("{self}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polarity_is_sign() {
        let p = CLiteral::new(3, true);
        let not_p = CLiteral::new(3, false);

        assert_eq!(p, 3);
        assert_eq!(not_p, -3);
        assert_eq!(p.negate(), not_p);
        assert_eq!(p.atom(), not_p.atom());
    }

    #[test]
    fn dimacs() {
        assert_eq!(CLiteral::new(12, false).as_dimacs(true), "-12 0");
        assert_eq!(CLiteral::new(12, true).as_dimacs(false), "12");
    }
}
