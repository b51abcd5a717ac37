//! Determines the satisfiability of the knowledge base, perhaps together with some assumptions.
//!
//! # Overview
//!
//! A [Solve] borrows a clause database and owns everything else required to search for a satisfying valuation: the valuation, a [trail](crate::db::trail), and [watch lists](crate::db::watches).
//! So, a solve never mutates the database, and any number of solves may be made on a database at once.
//!
//! The search is a DPLL search with an explicit trail:
//!
//! ```none
//!                     +---------------+
//!            +--------| make_decision |-----> satisfiable, if every atom has a value
//!            |        +---------------+
//!            |                ⌃
//!            |                | if no conflict
//!            ⌄                |
//! initialise +-------------------+
//! ---------->| propagate (bcp)   |
//!            +-------------------+
//!            ⌃                |
//!            |                | if some conflict
//!            |                ⌄
//!            |        +-----------+
//!            +--------| backtrack |-----> unsatisfiable, if no decision remains to flip
//!                     +-----------+
//! ```
//!
//! Initialisation values the literal of each unit clause and each assumption at level zero.
//! A conflict at level zero is immediately unsatisfiable, as there is no decision to flip.
//!
//! # Example
//!
//! ```rust
//! # use clue_sat::config::Config;
//! # use clue_sat::db::clause::ClauseDB;
//! # use clue_sat::procedures::solve::Solve;
//! # use clue_sat::reports::Report;
//! # use clue_sat::structures::literal::{CLiteral, Literal};
//! let mut clause_db = ClauseDB::default();
//! let p = clause_db.fresh_atom().unwrap();
//! let q = clause_db.fresh_atom().unwrap();
//!
//! let _ = clause_db.add_clause(vec![CLiteral::new(p, false), CLiteral::new(q, true)]);
//! let config = Config::default();
//!
//! let mut the_solve = Solve::new(&clause_db, &[CLiteral::new(p, true)], &config).unwrap();
//! assert_eq!(the_solve.run(), Ok(Report::Satisfiable));
//!
//! let assumptions = [CLiteral::new(p, true), CLiteral::new(q, false)];
//! let mut the_solve = Solve::new(&clause_db, &assumptions, &config).unwrap();
//! assert_eq!(the_solve.run(), Ok(Report::Unsatisfiable));
//! ```

use std::time::Instant;

use crate::{
    config::Config,
    context::{Context, Counters},
    db::{
        clause::ClauseDB,
        trail::{AssignmentSource, Trail},
        watches::Watches,
    },
    misc::log::targets::{self},
    procedures::{backtrack::BacktrackOk, decision::DecisionOk},
    reports::Report,
    structures::{
        atom::TOP_ATOM,
        clause::Clause,
        literal::{CLiteral, Literal},
        valuation::{CValuation, ValuationStatus},
    },
    types::err::{self, ErrorKind},
};

/// A solve, on a borrowed clause database.
pub struct Solve<'db> {
    /// The clause database.
    pub(super) clause_db: &'db ClauseDB,

    /// The configuration of the solve.
    pub(super) config: &'db Config,

    /// Literals to be assumed at level zero.
    assumptions: Vec<CLiteral>,

    /// The current valuation, with top at index zero.
    pub(super) valuation: CValuation,

    pub(super) trail: Trail,

    pub(super) watches: Watches,

    /// For each clause, the positions of the two watched literals of the clause.
    ///
    /// Unit clauses are valued at level zero and do not have watches, and so their entry is unused.
    pub(super) watched: Vec<[usize; 2]>,

    /// Counts of the solve.
    pub counters: Counters,
}

impl<'db> Solve<'db> {
    /// A solve of the clauses in `clause_db` together with `assumptions`.
    ///
    /// Returns an error if some assumption is not over an atom of the database.
    pub fn new(
        clause_db: &'db ClauseDB,
        assumptions: &[CLiteral],
        config: &'db Config,
    ) -> Result<Self, ErrorKind> {
        if assumptions
            .iter()
            .any(|literal| !clause_db.contains_atom(literal.atom()))
        {
            return Err(ErrorKind::UnknownAtom);
        }

        let atom_count = clause_db.atom_count() as usize;
        let mut valuation = vec![None; atom_count + 1];
        valuation[TOP_ATOM as usize] = Some(true);

        Ok(Solve {
            clause_db,
            config,
            assumptions: assumptions.to_vec(),
            valuation,
            trail: Trail::default(),
            watches: Watches::new(atom_count),
            watched: vec![[0, 1]; clause_db.clause_count()],
            counters: Counters::default(),
        })
    }

    /// The valuation of the solve.
    ///
    /// After a solve which returned [Report::Satisfiable] this is a full valuation on which every clause is true.
    pub fn valuation(&self) -> &CValuation {
        &self.valuation
    }

    /// Runs the solve to completion.
    pub fn run(&mut self) -> Result<Report, ErrorKind> {
        let start = Instant::now();
        self.counters.total_solves += 1;

        let report = self.search();

        self.counters.time += start.elapsed();
        log::trace!(target: targets::SOLVE, "Solve complete: {report:?}");
        report
    }

    /// Runs a solve on `clause_db`, and returns the report together with the counters of the solve.
    pub fn report_on(
        clause_db: &'db ClauseDB,
        assumptions: &[CLiteral],
        config: &'db Config,
    ) -> Result<(Report, Counters), ErrorKind> {
        let mut the_solve = Solve::new(clause_db, assumptions, config)?;
        let report = the_solve.run()?;
        Ok((report, the_solve.counters))
    }

    fn search(&mut self) -> Result<Report, ErrorKind> {
        if let Report::Unsatisfiable = self.initialise() {
            log::trace!(target: targets::PROPAGATION, "Conflict at level zero");
            return Ok(Report::Unsatisfiable);
        }

        'search_loop: loop {
            match self.propagate() {
                Ok(()) => match self.make_decision() {
                    DecisionOk::Literal(_) => continue 'search_loop,
                    DecisionOk::Exhausted => {
                        debug_assert!(self
                            .clause_db
                            .all_clauses()
                            .all(|(_, clause)| clause.satisfied_on(&self.valuation)));
                        return Ok(Report::Satisfiable);
                    }
                },

                Err(err::BCPError::Conflict(key)) => {
                    debug_assert!(self
                        .clause_db
                        .get(&key)
                        .is_ok_and(|clause| clause.unsatisfiable_on(&self.valuation)));
                    self.counters.total_conflicts += 1;
                    log::trace!(target: targets::PROPAGATION, "Conflict on {key}");

                    match self.backtrack() {
                        BacktrackOk::Flipped(_) => continue 'search_loop,
                        BacktrackOk::Exhausted => return Ok(Report::Unsatisfiable),
                    }
                }

                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Sets up watches for each clause of two or more literals, and values each unit clause and assumption.
    ///
    /// Returns [Report::Unsatisfiable] if two of the literals valued conflict, and [Report::Satisfiable] otherwise, though this only indicates the initial valuation is consistent.
    fn initialise(&mut self) -> Report {
        let clause_db = self.clause_db;

        for (key, clause) in clause_db.all_clauses() {
            if let [first, second, ..] = clause.as_slice() {
                self.watches.watch(*first, key);
                self.watches.watch(*second, key);
            }
        }

        for (key, clause) in clause_db.all_clauses() {
            if let [literal] = clause.as_slice() {
                if let ValuationStatus::Conflict = self.assign(*literal, AssignmentSource::Unit(key)) {
                    return Report::Unsatisfiable;
                }
            }
        }

        for index in 0..self.assumptions.len() {
            let literal = self.assumptions[index];
            if let ValuationStatus::Conflict = self.assign(literal, AssignmentSource::Assumption) {
                return Report::Unsatisfiable;
            }
        }

        Report::Satisfiable
    }

    /// Propagates each queued literal, stopping at the first conflict.
    fn propagate(&mut self) -> Result<(), err::BCPError> {
        while let Some(literal) = self.trail.next_to_propagate() {
            self.bcp(literal)?;
        }
        Ok(())
    }

    /// The value of `literal` on the current valuation, if the atom of the literal has a value.
    pub(super) fn value_of_literal(&self, literal: CLiteral) -> Option<bool> {
        self.valuation[literal.atom() as usize].map(|value| value == literal.polarity())
    }

    /// Values the atom of `literal` with the polarity of `literal`, and records the assignment on the trail, if the atom has no value.
    ///
    /// Returns the status of the valuation with respect to `literal` prior to the call.
    pub(super) fn assign(
        &mut self,
        literal: CLiteral,
        source: AssignmentSource,
    ) -> ValuationStatus {
        match self.value_of_literal(literal) {
            None => {
                self.valuation[literal.atom() as usize] = Some(literal.polarity());
                self.trail.store_assignment(literal, source);
                ValuationStatus::None
            }

            Some(true) => ValuationStatus::Set,

            Some(false) => ValuationStatus::Conflict,
        }
    }
}

impl Context {
    /// Determines the satisfiability of the knowledge base of the context.
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        self.solve_given(&[])
    }

    /// Determines the satisfiability of the knowledge base of the context together with `assumptions`.
    ///
    /// The counters of the solve are added to the counters of the context.
    pub fn solve_given(&mut self, assumptions: &[CLiteral]) -> Result<Report, ErrorKind> {
        let (report, counters) = Solve::report_on(&self.clause_db, assumptions, &self.config)?;
        self.counters.absorb(&counters);
        Ok(report)
    }

    /// As [solve_given](Context::solve_given), though without noting the counters of the solve.
    /// As the context is not mutated, solves may be made from many threads at once.
    pub fn solve_shared(&self, assumptions: &[CLiteral]) -> Result<Report, ErrorKind> {
        Solve::report_on(&self.clause_db, assumptions, &self.config).map(|(report, _)| report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db_with(atoms: u32, clauses: Vec<Vec<CLiteral>>) -> ClauseDB {
        let mut clause_db = ClauseDB::default();
        for _ in 0..atoms {
            clause_db.fresh_atom().unwrap();
        }
        for clause in clauses {
            clause_db.add_clause(clause).unwrap();
        }
        clause_db
    }

    #[test]
    fn empty_database_is_satisfiable() {
        let clause_db = ClauseDB::default();
        let config = Config::default();
        assert_eq!(
            Solve::report_on(&clause_db, &[], &config).map(|(report, _)| report),
            Ok(Report::Satisfiable)
        );
    }

    #[test]
    fn conflicting_units() {
        let clause_db = db_with(1, vec![vec![1], vec![-1]]);
        let config = Config::default();
        let (report, counters) = Solve::report_on(&clause_db, &[], &config).unwrap();

        assert_eq!(report, Report::Unsatisfiable);
        assert_eq!(counters.total_decisions, 0);
    }

    #[test]
    fn model_satisfies_every_clause() {
        let clauses = vec![vec![1, 2, 3], vec![-1, -2], vec![-2, -3], vec![-1, -3], vec![-3, 4]];
        let clause_db = db_with(4, clauses.clone());

        for polarity in [true, false] {
            let mut config = Config::default();
            config.decision_polarity.value = polarity;

            let mut the_solve = Solve::new(&clause_db, &[], &config).unwrap();
            assert_eq!(the_solve.run(), Ok(Report::Satisfiable));
            for clause in &clauses {
                assert!(clause.satisfied_on(the_solve.valuation()));
            }
        }
    }

    #[test]
    fn all_four_binary_clauses() {
        let clause_db = db_with(2, vec![vec![1, 2], vec![1, -2], vec![-1, 2], vec![-1, -2]]);
        let config = Config::default();
        let (report, counters) = Solve::report_on(&clause_db, &[], &config).unwrap();

        assert_eq!(report, Report::Unsatisfiable);
        assert!(counters.total_conflicts >= 2);
    }

    #[test]
    fn unknown_assumption() {
        let clause_db = db_with(1, vec![]);
        let config = Config::default();
        assert!(Solve::new(&clause_db, &[CLiteral::new(2, true)], &config).is_err());
    }
}
