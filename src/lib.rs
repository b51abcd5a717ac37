//! A propositional reasoner for the deduction game Clue.
//!
//! clue_sat encodes the rules of Clue, and the events of some game, as a formula in conjunctive normal form, and answers whether any owner (player or case file) holds any card by testing the entailment of a literal with a small DPLL solver.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! A context holds a [configuration](crate::config), a [clause database](crate::db::clause) (the knowledge base), and some [counters](crate::context::Counters).
//! Clauses may be added though the [DIMACS](crate::context::Context::read_dimacs) representation of a formula or [programatically](crate::context::Context::add_clause).
//!
//! Each [solve](crate::procedures::solve) borrows the clause database and owns its own valuation and trail, so queries never leave a trace on the knowledge base.
//!
//! The game itself is found in [clue]:
//! - A [roster](crate::clue::roster) fixes the players and cards, and the atom for each 'owner holds card' proposition.
//! - A [game](crate::clue::Game) adds the [axioms](crate::clue::axioms) of the game to a context, and then the clauses of each [event](crate::clue::events).
//! - A [notepad](crate::clue::notepad) records the answer to every query.
//!
//! # Examples
//!
//! + Deduce the solution from a handful of events.
//!
//! ```rust
//! # use clue_sat::clue::{roster::{Category, Roster}, Game};
//! # use clue_sat::config::Config;
//! # use clue_sat::reports::Entailment;
//! let roster = Roster::new(
//!     &["a", "b", "c"],
//!     [
//!         Category::new("suspects", &["s1", "s2"]),
//!         Category::new("weapons", &["w1", "w2"]),
//!         Category::new("rooms", &["r1", "r2"]),
//!     ],
//! )
//! .unwrap();
//!
//! let mut game = Game::new(roster, Config::default()).unwrap();
//! game.hand("a", &["s1", "w1"]).unwrap();
//! assert_eq!(game.query("a", "r1"), Ok(Entailment::False));
//! assert_eq!(game.query("b", "r1"), Ok(Entailment::Unknown));
//!
//! // c was the first to refute, and so b holds none of the cards.
//! game.suggest("a", "s2", "w2", "r1", Some("c"), None).unwrap();
//! assert_eq!(game.query("b", "s2"), Ok(Entailment::False));
//!
//! // No one refutes, and a holds none of the cards.
//! game.suggest("a", "s2", "w2", "r2", None, None).unwrap();
//! assert_eq!(game.query("cf", "s2"), Ok(Entailment::True));
//! assert_eq!(game.query("cf", "r2"), Ok(Entailment::True));
//! assert_eq!(game.query("c", "r1"), Ok(Entailment::True));
//! ```
//!
//! + Parse and solve a DIMACS formula.
//!
//! ```rust
//! # use clue_sat::context::Context;
//! # use clue_sat::reports::Report;
//! let mut the_context = Context::default();
//!
//! let dimacs = "
//!  1  2 0
//! -1  2 0
//! -1 -2 0
//!  1 -2 0
//! ";
//!
//! assert!(the_context.read_dimacs(dimacs.as_bytes()).is_ok());
//! assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
//! ```
//!
//! # Logs
//!
//! Calls to the [log] macro are made throughout the library, on the targets listed in [misc::log].
//! No logger is provided.

pub mod builder;
pub mod clue;
pub mod config;
pub mod context;
pub mod db;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
