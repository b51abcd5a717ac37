//! Procedures used to determine the satisfiability of a formula, and so entailment.
//!
//! Each procedure other than [entailment] is a method on a [Solve](solve::Solve), and is placed here for documentation.
//!
//! - [solve] --- the structure of a solve, and the loop which drives a solve.
//! - [bcp] --- boolean constraint propagation over watched literals.
//! - [decision] --- choosing a value for some atom.
//! - [backtrack] --- undoing decisions after a conflict.
//! - [entailment] --- the truth value of a literal on the knowledge base of a context, from two solves.

pub mod backtrack;
pub mod bcp;
pub mod decision;
pub mod entailment;
pub mod solve;
