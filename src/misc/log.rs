/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
The `clue_cli` binary initialises [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `log` feature, and so, for example:
- Logs related to [the clause database](crate::db::clause) can be filtered with `RUST_LOG=clause_db …` or,
- Logs of each event without details of the search can be found with `RUST_LOG=events=debug …`
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [configuration](crate::config)
    pub const CONFIG: &str = "config";

    /// Logs related to the course of a [solve](crate::procedures::solve)
    pub const SOLVE: &str = "solve";

    /// Logs related to [BCP](crate::procedures::bcp)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [decisions](crate::procedures::decision)
    pub const DECISION: &str = "decision";

    /// Logs related to [backtracking](crate::procedures::backtrack)
    pub const BACKTRACK: &str = "backtrack";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to [entailment](crate::procedures::entailment) queries
    pub const ENTAILMENT: &str = "entailment";

    /// Logs related to game [events](crate::clue::events)
    pub const EVENTS: &str = "events";

    /// Logs related to reading scripts and DIMACS
    pub const PARSE: &str = "parse";
}
