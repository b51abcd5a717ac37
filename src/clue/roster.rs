/*!
The players and cards of a game, and the encoding of 'owner holds item' as an atom.

# Owners and items

An [Owner] is either a player or the case file.
Players are indexed 0..*N* in turn order, and the case file has index *N*.

Items (cards) are indexed 0..*M* across all three categories, with the items of the first category first, then the second, then the third.

Names of players and names of items are separate, and so a player may share a name with an item (as in the classic game, where players are named for suspects).
The case file is named [CASE_FILE], and no player may take this name.

# Encoding

The atom for 'owner *o* holds item *i*' is *o* · *M* + *i* + 1.
So, the atoms of a game are exactly 1..=(*N* + 1) · *M*, and each atom [decodes](Roster::decode) to exactly one pair.

```rust
# use clue_sat::clue::roster::{Owner, Roster};
let roster = Roster::classic();
assert_eq!(roster.item_count(), 21);

let atom = roster.atom_of(Owner::Player(1), 3).unwrap();
assert_eq!(atom, 1 * 21 + 3 + 1);
assert_eq!(roster.decode(atom), Ok((Owner::Player(1), 3)));

assert_eq!(roster.atom_of(Owner::CaseFile, 20), Ok(7 * 21));
assert!(roster.atom_of(Owner::Player(6), 0).is_err());
```
*/

use std::{collections::HashSet, ops::Range};

use crate::{
    structures::{
        atom::{Atom, ATOM_MAX},
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

/// The name of the case file.
pub const CASE_FILE: &str = "cf";

/// The index of an item.
pub type ItemIndex = usize;

/// Something which may hold an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Owner {
    /// The player at the given index, in turn order.
    Player(usize),

    /// The case file, holding the solution.
    CaseFile,
}

/// A named category of items, e.g. weapons.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub items: Vec<String>,
}

impl Category {
    pub fn new(name: &str, items: &[&str]) -> Self {
        Category {
            name: name.to_string(),
            items: items.iter().map(|item| item.to_string()).collect(),
        }
    }
}

/// The players and items of a game.
#[derive(Clone, Debug)]
pub struct Roster {
    players: Vec<String>,

    categories: [Category; 3],

    /// The items of every category, in order.
    items: Vec<String>,
}

impl Roster {
    /// A roster of `players`, in turn order, and cards in three `categories`.
    ///
    /// ```rust
    /// # use clue_sat::clue::roster::{Category, Roster};
    /// # use clue_sat::types::err::{ErrorKind, RosterError};
    /// let categories = [
    ///     Category::new("suspects", &["s1", "s2"]),
    ///     Category::new("weapons", &["w1", "w2"]),
    ///     Category::new("rooms", &["r1", "r2"]),
    /// ];
    ///
    /// assert!(Roster::new(&["a", "b", "c"], categories.clone()).is_ok());
    /// assert_eq!(
    ///     Roster::new(&["a", "cf"], categories).err(),
    ///     Some(ErrorKind::Roster(RosterError::ReservedName))
    /// );
    /// ```
    pub fn new(players: &[&str], categories: [Category; 3]) -> Result<Self, ErrorKind> {
        if players.is_empty() {
            return Err(err::RosterError::NoPlayers.into());
        }
        if players.contains(&CASE_FILE) {
            return Err(err::RosterError::ReservedName.into());
        }
        if !all_distinct(players.iter().copied()) {
            return Err(err::RosterError::DuplicateName.into());
        }

        if categories.iter().any(|category| category.items.is_empty()) {
            return Err(err::RosterError::EmptyCategory.into());
        }
        let items = categories
            .iter()
            .flat_map(|category| category.items.iter().cloned())
            .collect::<Vec<_>>();
        if !all_distinct(items.iter().map(String::as_str)) {
            return Err(err::RosterError::DuplicateName.into());
        }

        match (players.len() + 1).checked_mul(items.len()) {
            Some(limit) if limit <= ATOM_MAX as usize => {}
            _ => return Err(err::ClauseDBError::StorageExhausted.into()),
        }

        Ok(Roster {
            players: players.iter().map(|player| player.to_string()).collect(),
            categories,
            items,
        })
    }

    /// The roster of the classic six player game.
    pub fn classic() -> Self {
        Roster {
            players: ["sc", "mu", "wh", "gr", "pe", "pl"].map(String::from).to_vec(),
            categories: [
                Category::new("suspects", &["mu", "pl", "gr", "pe", "sc", "wh"]),
                Category::new("weapons", &["kn", "ca", "re", "ro", "pi", "wr"]),
                Category::new("rooms", &["ha", "lo", "di", "ki", "ba", "co", "bi", "li", "st"]),
            ],
            items: [
                "mu", "pl", "gr", "pe", "sc", "wh", //
                "kn", "ca", "re", "ro", "pi", "wr", //
                "ha", "lo", "di", "ki", "ba", "co", "bi", "li", "st",
            ]
            .map(String::from)
            .to_vec(),
        }
    }

    /// A count of the players, excluding the case file.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// A count of all items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// A count of the atoms required to encode the game.
    pub fn atom_count(&self) -> usize {
        (self.players.len() + 1) * self.items.len()
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn categories(&self) -> &[Category; 3] {
        &self.categories
    }

    /// Every owner, with players in turn order followed by the case file.
    pub fn owners(&self) -> impl Iterator<Item = Owner> {
        (0..self.players.len())
            .map(Owner::Player)
            .chain(std::iter::once(Owner::CaseFile))
    }

    /// The indicies of the items of the category at `index`.
    pub fn category_items(&self, index: usize) -> Range<ItemIndex> {
        let start = self.categories[..index]
            .iter()
            .map(|category| category.items.len())
            .sum();
        let length = self.categories.get(index).map_or(0, |c| c.items.len());
        start..start + length
    }

    /// The owner with the given name.
    pub fn owner(&self, name: &str) -> Result<Owner, ErrorKind> {
        if name == CASE_FILE {
            return Ok(Owner::CaseFile);
        }
        match self.players.iter().position(|player| player == name) {
            Some(index) => Ok(Owner::Player(index)),
            None => Err(err::RosterError::InvalidIdentifier.into()),
        }
    }

    /// The index of the player with the given name.
    /// The case file is not a player.
    pub fn player(&self, name: &str) -> Result<usize, ErrorKind> {
        match self.owner(name)? {
            Owner::Player(index) => Ok(index),
            Owner::CaseFile => Err(err::RosterError::InvalidIdentifier.into()),
        }
    }

    /// The index of the item with the given name.
    pub fn item(&self, name: &str) -> Result<ItemIndex, ErrorKind> {
        match self.items.iter().position(|item| item == name) {
            Some(index) => Ok(index),
            None => Err(err::RosterError::InvalidIdentifier.into()),
        }
    }

    /// The name of an owner.
    pub fn owner_name(&self, owner: Owner) -> Result<&str, ErrorKind> {
        match owner {
            Owner::CaseFile => Ok(CASE_FILE),
            Owner::Player(index) => match self.players.get(index) {
                Some(name) => Ok(name),
                None => Err(err::RosterError::InvalidIdentifier.into()),
            },
        }
    }

    /// The name of an item.
    pub fn item_name(&self, item: ItemIndex) -> Result<&str, ErrorKind> {
        match self.items.get(item) {
            Some(name) => Ok(name),
            None => Err(err::RosterError::InvalidIdentifier.into()),
        }
    }

    /// The index of an owner, with the case file following the last player.
    fn owner_index(&self, owner: Owner) -> Result<usize, ErrorKind> {
        match owner {
            Owner::Player(index) if index < self.players.len() => Ok(index),
            Owner::Player(_) => Err(err::RosterError::InvalidIdentifier.into()),
            Owner::CaseFile => Ok(self.players.len()),
        }
    }

    /// The atom for `owner` holding `item`.
    pub fn atom_of(&self, owner: Owner, item: ItemIndex) -> Result<Atom, ErrorKind> {
        let owner_index = self.owner_index(owner)?;
        if item >= self.items.len() {
            return Err(err::RosterError::InvalidIdentifier.into());
        }
        // Bounded by the atom limit checked on construction.
        Ok((owner_index * self.items.len() + item + 1) as Atom)
    }

    /// The literal for `owner` holding `item`, if `polarity` is true, and for `owner` not holding `item` otherwise.
    pub fn literal(&self, owner: Owner, item: ItemIndex, polarity: bool) -> Result<CLiteral, ErrorKind> {
        Ok(CLiteral::new(self.atom_of(owner, item)?, polarity))
    }

    /// The owner and item encoded by `atom`.
    pub fn decode(&self, atom: Atom) -> Result<(Owner, ItemIndex), ErrorKind> {
        let atom = atom as usize;
        if atom == 0 || atom > self.atom_count() {
            return Err(err::RosterError::InvalidIdentifier.into());
        }
        let owner_index = (atom - 1) / self.items.len();
        let item = (atom - 1) % self.items.len();
        let owner = match owner_index == self.players.len() {
            true => Owner::CaseFile,
            false => Owner::Player(owner_index),
        };
        Ok((owner, item))
    }

    /// The player after `player` in turn order, wrapping from the last player to the first.
    pub fn next_player(&self, player: usize) -> usize {
        match player + 1 < self.players.len() {
            true => player + 1,
            false => 0,
        }
    }
}

fn all_distinct<'a>(names: impl Iterator<Item = &'a str>) -> bool {
    let mut seen = HashSet::new();
    names.into_iter().all(|name| seen.insert(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_roster() -> Roster {
        Roster::new(
            &["a", "b", "c"],
            [
                Category::new("suspects", &["s1", "s2"]),
                Category::new("weapons", &["w1", "w2"]),
                Category::new("rooms", &["r1", "r2"]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn encoding_is_a_bijection() {
        let roster = Roster::classic();
        let mut seen = HashSet::new();

        for owner in roster.owners() {
            for item in 0..roster.item_count() {
                let atom = roster.atom_of(owner, item).unwrap();
                assert!(0 < atom && atom as usize <= roster.atom_count());
                assert!(seen.insert(atom));
                assert_eq!(roster.decode(atom), Ok((owner, item)));
            }
        }
        assert_eq!(seen.len(), roster.atom_count());
    }

    #[test]
    fn out_of_range() {
        let roster = small_roster();
        let invalid = Err(ErrorKind::Roster(err::RosterError::InvalidIdentifier));

        assert_eq!(roster.atom_of(Owner::Player(3), 0), invalid);
        assert_eq!(roster.atom_of(Owner::CaseFile, 6), invalid);
        assert_eq!(roster.decode(0).err(), invalid.err());
        assert_eq!(roster.decode(25).err(), invalid.err());
        assert_eq!(roster.item("s3").err(), invalid.err());
        assert_eq!(roster.owner("d").err(), invalid.err());
    }

    #[test]
    fn case_file_by_name() {
        let roster = small_roster();
        assert_eq!(roster.owner(CASE_FILE), Ok(Owner::CaseFile));
        assert!(roster.player(CASE_FILE).is_err());
        assert_eq!(roster.atom_of(Owner::CaseFile, 0), Ok(19));
    }

    #[test]
    fn ring_wraps() {
        let roster = small_roster();
        assert_eq!(roster.next_player(0), 1);
        assert_eq!(roster.next_player(2), 0);
    }

    #[test]
    fn categories_partition_items() {
        let roster = Roster::classic();
        assert_eq!(roster.category_items(0), 0..6);
        assert_eq!(roster.category_items(1), 6..12);
        assert_eq!(roster.category_items(2), 12..21);
        assert_eq!(roster.item("kn"), Ok(6));
        assert_eq!(roster.owner("sc"), Ok(Owner::Player(0)));
        assert_eq!(roster.item("sc"), Ok(4));
    }

    #[test]
    fn invalid_rosters() {
        let categories = small_roster().categories().clone();
        let roster_error = |e| Some(ErrorKind::Roster(e));

        assert_eq!(
            Roster::new(&[], categories.clone()).err(),
            roster_error(err::RosterError::NoPlayers)
        );
        assert_eq!(
            Roster::new(&["a", "a"], categories.clone()).err(),
            roster_error(err::RosterError::DuplicateName)
        );

        let mut empty = categories.clone();
        empty[1].items.clear();
        assert_eq!(
            Roster::new(&["a"], empty).err(),
            roster_error(err::RosterError::EmptyCategory)
        );

        let mut repeated = categories;
        repeated[2].items.push("s1".to_string());
        assert_eq!(
            Roster::new(&["a"], repeated).err(),
            roster_error(err::RosterError::DuplicateName)
        );
    }
}
