/*!
A notepad, recording what is known about each owner holding each item.

The display of a notepad is a tab separated grid, with a row for each item and a column for each player followed by the case file.
Each cell is the [symbol](crate::reports::Entailment::symbol) of the entailment:
- `Y` --- the owner holds the item.
- `n` --- the owner does not hold the item.
- `-` --- unknown.

```none
	sc	mu	wh	gr	pe	pl	cf
mu	n	-	-	-	-	-	-
…
```
*/

use crate::{
    clue::{roster::Owner, Game},
    reports::Entailment,
    types::err::ErrorKind,
};

/// A grid of entailments, indexed by item and then owner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notepad {
    /// Names of owners, in column order.
    owners: Vec<String>,

    /// Names of items, in row order.
    items: Vec<String>,

    rows: Vec<Vec<Entailment>>,
}

impl Notepad {
    /// A notepad of every query on the game.
    pub fn from_game(game: &mut Game) -> Result<Self, ErrorKind> {
        let owners = game.roster().owners().collect::<Vec<_>>();
        let owner_names = owners
            .iter()
            .map(|owner| game.roster().owner_name(*owner).map(String::from))
            .collect::<Result<Vec<_>, _>>()?;
        let items = game.roster().items().to_vec();

        let mut rows = Vec::with_capacity(items.len());
        for item in 0..items.len() {
            let mut row = Vec::with_capacity(owners.len());
            for owner in &owners {
                row.push(game.query_at(*owner, item)?);
            }
            rows.push(row);
        }

        Ok(Notepad {
            owners: owner_names,
            items,
            rows,
        })
    }

    /// The entailment recorded for the owner at column `owner` holding the item at row `item`.
    pub fn get(&self, item: usize, owner: Owner) -> Option<Entailment> {
        let column = match owner {
            Owner::Player(index) if index + 1 < self.owners.len() => index,
            Owner::Player(_) => return None,
            Owner::CaseFile => self.owners.len() - 1,
        };
        self.rows.get(item)?.get(column).copied()
    }

    pub fn owners(&self) -> &[String] {
        &self.owners
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// The rows of the notepad, in item order, each with an entailment for each owner.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[Entailment])> {
        self.items
            .iter()
            .map(String::as_str)
            .zip(self.rows.iter().map(Vec::as_slice))
    }

    /// A count of cells with a known value.
    pub fn known_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|entailment| **entailment != Entailment::Unknown)
            .count()
    }
}

impl std::fmt::Display for Notepad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for owner in &self.owners {
            write!(f, "\t{owner}")?;
        }
        writeln!(f)?;

        for (item, row) in self.rows() {
            write!(f, "{item}")?;
            for entailment in row {
                write!(f, "\t{}", entailment.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        clue::roster::{Category, Roster},
        config::Config,
    };

    #[test]
    fn display_grid() {
        let roster = Roster::new(
            &["a", "b"],
            [
                Category::new("suspects", &["s"]),
                Category::new("weapons", &["w"]),
                Category::new("rooms", &["r1", "r2"]),
            ],
        )
        .unwrap();
        let mut game = Game::new(roster, Config::default()).unwrap();
        game.hand("a", &["r1"]).unwrap();

        let notepad = Notepad::from_game(&mut game).unwrap();
        let expected = "\ta\tb\tcf\n\
                        s\tn\tn\tY\n\
                        w\tn\tn\tY\n\
                        r1\tY\tn\tn\n\
                        r2\tn\tn\tY\n";
        assert_eq!(notepad.to_string(), expected);
        assert_eq!(notepad.get(2, Owner::Player(0)), Some(Entailment::True));
        assert_eq!(notepad.get(2, Owner::Player(2)), None);
        assert_eq!(notepad.known_count(), 12);
    }
}
