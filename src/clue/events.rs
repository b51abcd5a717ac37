/*!
Events of a game, and the clauses they add to the knowledge base.

- [hand](Game::hand) --- the complete hand of some owner is seen.
- [suggest](Game::suggest) --- a suggestion is made, and perhaps refuted.
- [accuse](Game::accuse) --- an accusation is made, and found to be correct or incorrect.

Each event is checked in full, and every clause of the event is built, before any clause is added.
So, an event which returns an error leaves the knowledge base untouched.
*/

use std::collections::BTreeSet;

use crate::{
    clue::{
        roster::{ItemIndex, Owner},
        Game,
    },
    config::AccusationPolicy,
    misc::log::targets::{self},
    structures::clause::CClause,
    types::err::{self, ErrorKind},
};

impl Game {
    /// Notes `owner` holds exactly `items`.
    ///
    /// Repeated items are treated as one, and the owner may be the case file.
    pub fn hand(&mut self, owner: &str, items: &[&str]) -> Result<(), ErrorKind> {
        let owner = self.roster().owner(owner)?;
        let mut held = BTreeSet::default();
        for item in items {
            held.insert(self.roster().item(item)?);
        }

        let mut clauses = Vec::with_capacity(self.roster().item_count());
        for item in 0..self.roster().item_count() {
            let polarity = held.contains(&item);
            clauses.push(vec![self.roster().literal(owner, item, polarity)?]);
        }

        self.observe("hand", clauses)
    }

    /// Notes `suggester` suggested the three items, and either:
    /// - No player refuted the suggestion, if `refuter` is None.
    /// - `refuter` was the first player after `suggester` to refute the suggestion, showing `shown` if the item shown was seen.
    pub fn suggest(
        &mut self,
        suggester: &str,
        item1: &str,
        item2: &str,
        item3: &str,
        refuter: Option<&str>,
        shown: Option<&str>,
    ) -> Result<(), ErrorKind> {
        let suggester = self.roster().player(suggester)?;
        let items = [
            self.roster().item(item1)?,
            self.roster().item(item2)?,
            self.roster().item(item3)?,
        ];
        let refuter = match refuter {
            Some(name) => Some(self.roster().player(name)?),
            None => None,
        };
        let shown = match shown {
            Some(name) => Some(self.roster().item(name)?),
            None => None,
        };

        let clauses = match refuter {
            None => {
                if shown.is_some() {
                    return Err(err::EventError::ShownWithoutRefuter.into());
                }
                self.unrefuted_clauses(suggester, items)?
            }

            Some(refuter) => {
                if refuter == suggester {
                    return Err(err::EventError::SelfRefutation.into());
                }
                if let Some(shown) = shown {
                    if !items.contains(&shown) {
                        return Err(err::EventError::ShownNotSuggested.into());
                    }
                }
                self.refuted_clauses(suggester, items, refuter, shown)?
            }
        };

        self.observe("suggest", clauses)
    }

    /// Notes `accuser` accused with the three items, and whether the accusation was `correct`.
    pub fn accuse(
        &mut self,
        accuser: &str,
        item1: &str,
        item2: &str,
        item3: &str,
        correct: bool,
    ) -> Result<(), ErrorKind> {
        let accuser = self.roster().player(accuser)?;
        let items = [
            self.roster().item(item1)?,
            self.roster().item(item2)?,
            self.roster().item(item3)?,
        ];

        let mut clauses = Vec::default();
        match correct {
            true => {
                for item in items {
                    clauses.push(vec![self.roster().literal(Owner::CaseFile, item, true)?]);
                }
            }

            false => {
                let mut not_solution = CClause::with_capacity(3);
                for item in items {
                    not_solution.push(self.roster().literal(Owner::CaseFile, item, false)?);
                }
                clauses.push(not_solution);

                match self.context.config.accusation_policy.value {
                    AccusationPolicy::RationalAccuser => {
                        for item in items {
                            let literal = self.roster().literal(Owner::Player(accuser), item, false)?;
                            clauses.push(vec![literal]);
                        }
                    }

                    AccusationPolicy::RulesOnly => {}
                }
            }
        }

        self.observe("accuse", clauses)
    }

    /// Each item is held either by the suggester or by the case file.
    fn unrefuted_clauses(
        &self,
        suggester: usize,
        items: [ItemIndex; 3],
    ) -> Result<Vec<CClause>, ErrorKind> {
        let mut clauses = Vec::with_capacity(3);
        for item in items {
            clauses.push(vec![
                self.roster().literal(Owner::Player(suggester), item, true)?,
                self.roster().literal(Owner::CaseFile, item, true)?,
            ]);
        }
        Ok(clauses)
    }

    /// Each player passed over holds none of the items, and the refuter holds the item shown, or one of the items.
    fn refuted_clauses(
        &self,
        suggester: usize,
        items: [ItemIndex; 3],
        refuter: usize,
        shown: Option<ItemIndex>,
    ) -> Result<Vec<CClause>, ErrorKind> {
        let mut clauses = Vec::default();

        let mut player = self.roster().next_player(suggester);
        while player != refuter {
            for item in items {
                clauses.push(vec![self.roster().literal(Owner::Player(player), item, false)?]);
            }
            player = self.roster().next_player(player);
        }

        let refuter = Owner::Player(refuter);
        match shown {
            Some(item) => clauses.push(vec![self.roster().literal(refuter, item, true)?]),

            None => {
                let mut one_of = CClause::with_capacity(3);
                for item in items {
                    one_of.push(self.roster().literal(refuter, item, true)?);
                }
                clauses.push(one_of);
            }
        }

        Ok(clauses)
    }

    /// Adds the clauses of an event to the knowledge base.
    fn observe(&mut self, event: &str, clauses: Vec<CClause>) -> Result<(), ErrorKind> {
        let added = self.add_clauses(clauses)?;
        log::debug!(target: targets::EVENTS, "{event}: {added} clauses added");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        clue::{
            roster::{Category, Roster},
            Game,
        },
        config::Config,
        reports::Entailment,
        types::err::{self, ErrorKind},
    };

    fn small_game() -> Game {
        let roster = Roster::new(
            &["a", "b", "c"],
            [
                Category::new("suspects", &["s1", "s2"]),
                Category::new("weapons", &["w1", "w2"]),
                Category::new("rooms", &["r1", "r2"]),
            ],
        )
        .unwrap();
        Game::new(roster, Config::default()).unwrap()
    }

    #[test]
    fn passed_players_hold_none() {
        let mut game = small_game();
        // b is passed over on the way from a to c.
        game.suggest("a", "s1", "w1", "r1", Some("c"), None).unwrap();

        for item in ["s1", "w1", "r1"] {
            assert_eq!(game.query("b", item), Ok(Entailment::False));
        }
    }

    #[test]
    fn ring_wraps_past_last_player() {
        let mut game = small_game();
        // a is passed over on the way from c to b.
        game.suggest("c", "s2", "w2", "r2", Some("b"), Some("w2")).unwrap();

        assert_eq!(game.query("a", "s2"), Ok(Entailment::False));
        assert_eq!(game.query("b", "w2"), Ok(Entailment::True));
        assert_eq!(game.query("cf", "w2"), Ok(Entailment::False));
        assert_eq!(game.query("cf", "w1"), Ok(Entailment::True));
    }

    #[test]
    fn unrefuted_suggestion() {
        let mut game = small_game();
        game.hand("a", &["s1", "w1"]).unwrap();
        game.suggest("a", "s2", "w2", "r1", None, None).unwrap();

        assert_eq!(game.query("cf", "s2"), Ok(Entailment::True));
        assert_eq!(game.query("cf", "w2"), Ok(Entailment::True));
        assert_eq!(game.query("cf", "r1"), Ok(Entailment::True));
    }

    #[test]
    fn repeated_hand_items() {
        let mut game = small_game();
        game.hand("b", &["r2", "r2"]).unwrap();

        assert_eq!(game.query("b", "r2"), Ok(Entailment::True));
        assert_eq!(game.query("b", "r1"), Ok(Entailment::False));
        assert_eq!(game.query("cf", "r1"), Ok(Entailment::True));
    }

    #[test]
    fn rejected_events() {
        let mut game = small_game();
        let clause_count = game.context.clause_db.clause_count();
        let event_error = |e| Err(ErrorKind::Event(e));
        let roster_error = Err(ErrorKind::Roster(err::RosterError::InvalidIdentifier));

        assert_eq!(
            game.suggest("a", "s1", "w1", "r1", Some("a"), None),
            event_error(err::EventError::SelfRefutation)
        );
        assert_eq!(
            game.suggest("a", "s1", "w1", "r1", None, Some("s1")),
            event_error(err::EventError::ShownWithoutRefuter)
        );
        assert_eq!(
            game.suggest("a", "s1", "w1", "r1", Some("b"), Some("s2")),
            event_error(err::EventError::ShownNotSuggested)
        );
        assert_eq!(game.suggest("cf", "s1", "w1", "r1", None, None), roster_error);
        assert_eq!(game.suggest("a", "s1", "w1", "r1", Some("cf"), None), roster_error);
        assert_eq!(game.accuse("cf", "s1", "w1", "r1", false), roster_error);
        assert_eq!(game.hand("a", &["s1", "zz"]), roster_error);

        assert_eq!(game.context.clause_db.clause_count(), clause_count);
    }
}
