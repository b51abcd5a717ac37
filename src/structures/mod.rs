//! Key structures, such as literals and clauses.
//!
//! Most structures are made of a trait to capture the key features of the structure and a 'canonical' implementation of the trait.
//!
//! # Other structures without a trait and/or canonical implementation.
//!
//! ## Formulas
//!
//!  A formula 𝐅 is set of [clauses](clause), interpreted as the conjunction of those clauses.
//!
//!  The conjunction of clauses in the [clause database](crate::db::clause) is the *knowledge base* of a context.
//!  Clauses are only ever added, and so the formula only ever grows stronger.
//!
//! ## (Boolean) values
//!
//! A (boolean) value is one of [true] and [false].
//! A partial valuation may also leave an atom without a value, represented as [None].

pub mod atom;
pub mod clause;
pub mod literal;
pub mod valuation;
