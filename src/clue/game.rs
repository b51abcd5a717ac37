/*!
A game: a roster, and a context whose knowledge base holds the axioms of the game together with every event observed.

```rust
# use clue_sat::clue::Game;
# use clue_sat::config::Config;
# use clue_sat::reports::Entailment;
let mut game = Game::classic(Config::default()).unwrap();
assert_eq!(game.query("sc", "kn"), Ok(Entailment::Unknown));

game.hand("sc", &["wh", "li", "st"]).unwrap();
assert_eq!(game.query("sc", "li"), Ok(Entailment::True));
assert_eq!(game.query("cf", "li"), Ok(Entailment::False));
assert_eq!(game.query("sc", "kn"), Ok(Entailment::False));
```
*/

use crate::{
    builder::ClauseOk,
    clue::roster::{ItemIndex, Owner, Roster},
    config::Config,
    context::Context,
    misc::log::targets::{self},
    reports::{Entailment, Report},
    structures::clause::CClause,
    types::err::ErrorKind,
};

/// A game of Clue.
pub struct Game {
    roster: Roster,

    /// The context of the game, whose knowledge base is the encoding of the game.
    pub context: Context,
}

impl Game {
    /// A game with the given roster, with each axiom added to the knowledge base.
    pub fn new(roster: Roster, config: Config) -> Result<Self, ErrorKind> {
        let mut context = Context::from_config(config);
        context.fresh_atoms(roster.atom_count())?;

        let axioms = roster.axioms()?;
        let mut game = Game { roster, context };
        let added = game.add_clauses(axioms)?;
        log::info!(target: targets::EVENTS, "Game of {} players and {} items, with {added} axioms", game.roster.player_count(), game.roster.item_count());

        Ok(game)
    }

    /// A game with the [classic](Roster::classic) roster.
    pub fn classic(config: Config) -> Result<Self, ErrorKind> {
        Game::new(Roster::classic(), config)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Adds each clause to the knowledge base, returning a count of the clauses stored.
    pub(super) fn add_clauses(&mut self, clauses: Vec<CClause>) -> Result<usize, ErrorKind> {
        let mut added = 0;
        for clause in clauses {
            if let ClauseOk::Added(_) = self.context.add_clause(clause)? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// What the knowledge base entails about the named owner holding the named item.
    pub fn query(&mut self, owner: &str, item: &str) -> Result<Entailment, ErrorKind> {
        let owner = self.roster.owner(owner)?;
        let item = self.roster.item(item)?;
        self.query_at(owner, item)
    }

    /// What the knowledge base entails about `owner` holding `item`.
    pub fn query_at(&mut self, owner: Owner, item: ItemIndex) -> Result<Entailment, ErrorKind> {
        let literal = self.roster.literal(owner, item, true)?;
        self.context.entailment(literal)
    }

    /// As [query](Game::query), though without mutating the game, and so safe to call from many threads at once.
    pub fn query_shared(&self, owner: &str, item: &str) -> Result<Entailment, ErrorKind> {
        let owner = self.roster.owner(owner)?;
        let item = self.roster.item(item)?;
        let literal = self.roster.literal(owner, item, true)?;
        self.context.entailment_shared(literal)
    }

    /// Whether the knowledge base is satisfiable.
    ///
    /// If not, some observed events contradict each other (or the rules of the game), and every query is [True](Entailment::True).
    pub fn is_consistent(&mut self) -> Result<bool, ErrorKind> {
        match self.context.solve()? {
            Report::Satisfiable => Ok(true),
            Report::Unsatisfiable => Ok(false),
        }
    }

    /// For each category, the item the case file is known to hold, if any.
    ///
    /// An inconsistent knowledge base entails every item, and so nothing is known of the solution.
    pub fn solution(&mut self) -> Result<[Option<ItemIndex>; 3], ErrorKind> {
        let mut solution = [None; 3];
        if !self.is_consistent()? {
            log::info!(target: targets::EVENTS, "No solution from inconsistent events");
            return Ok(solution);
        }

        for (category, found) in solution.iter_mut().enumerate() {
            for item in self.roster.category_items(category) {
                if self.query_at(Owner::CaseFile, item)? == Entailment::True {
                    *found = Some(item);
                    break;
                }
            }
        }
        Ok(solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_game_knows_nothing() {
        let mut game = Game::classic(Config::default()).unwrap();
        assert_eq!(game.is_consistent(), Ok(true));
        assert_eq!(game.solution(), Ok([None, None, None]));
        assert_eq!(game.context.clause_db.atom_count() as usize, game.roster().atom_count());
    }

    #[test]
    fn no_solution_when_inconsistent() {
        let mut game = Game::classic(Config::default()).unwrap();
        game.hand("sc", &["kn"]).unwrap();
        game.hand("mu", &["kn"]).unwrap();

        assert_eq!(game.is_consistent(), Ok(false));
        assert_eq!(game.query("cf", "mu"), Ok(Entailment::True));
        assert_eq!(game.solution(), Ok([None, None, None]));
    }

    #[test]
    fn unknown_names() {
        let mut game = Game::classic(Config::default()).unwrap();
        assert!(game.query("zz", "kn").is_err());
        assert!(game.query("sc", "zz").is_err());
        assert!(game.query_shared("sc", "zz").is_err());
    }
}
