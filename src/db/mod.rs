//! Databases for holding information relevant to a solve.
//!
//! - [The clause database](crate::db::clause)
//!   + The knowledge base: a collection of clauses, each indexed by a [ClauseKey]. \
//!     The clause database persists for the life of a [context](crate::context), and only grows.
//!
//! - [The trail](crate::db::trail)
//!   + The order in which atoms were given values during a solve, and why, divided into levels by decisions.
//!
//! - [Watch lists](crate::db::watches)
//!   + For each literal, the clauses which watch that literal.
//!
//! The trail and watch lists are made fresh for each [solve](crate::procedures::solve), and dropped when the solve returns.

pub mod clause;
mod keys;
pub use keys::*;
pub mod trail;
pub mod watches;

/// The index of a decision level.
pub type LevelIndex = u32;
