/*!
The context --- to which formulas are added and within which solves take place, etc.

A context owns a [configuration](crate::config), a [clause database](crate::db::clause) (the knowledge base), and [counters](Counters).
Each solve is made on a fresh [Solve](crate::procedures::solve::Solve), which borrows the clause database and is dropped when the solve returns.
So, nothing from one solve is visible to another.

# Example
```rust
# use clue_sat::context::Context;
# use clue_sat::config::Config;
# use clue_sat::reports::{Entailment, Report};
# use clue_sat::structures::literal::{CLiteral, Literal};
let mut the_context = Context::from_config(Config::default());

let p = the_context.fresh_atom().unwrap();
let q = the_context.fresh_atom().unwrap();

let p_q_clause = vec![CLiteral::new(p, true), CLiteral::new(q, true)];
assert!(the_context.add_clause(p_q_clause).is_ok());

let not_p = CLiteral::new(p, false);
assert!(the_context.add_clause(not_p).is_ok());

assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
assert_eq!(the_context.entailment(CLiteral::new(q, true)), Ok(Entailment::True));
```
*/

mod counters;
pub use counters::Counters;

use crate::{config::Config, db::clause::ClauseDB};

/// A context.
pub struct Context {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to solves made in the context.
    pub counters: Counters,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            counters: Counters::default(),
            clause_db: ClauseDB::default(),
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}
