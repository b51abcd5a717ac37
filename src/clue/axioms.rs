/*!
Clauses which hold in every game, regardless of events.

1. Coverage --- each item is held by some owner (the case file included).
2. Exclusivity --- no item is held by two owners.
3. Solution cardinality --- the case file holds some item of each category.
4. Solution exclusivity --- the case file holds at most one item of each category.

Together, these fix that each item has exactly one owner and the case file holds exactly one item of each category.
Nothing is said about how many items a player holds.
*/

use crate::{
    clue::roster::{Owner, Roster},
    structures::clause::CClause,
    types::err::ErrorKind,
};

impl Roster {
    /// The axioms of the game, in the order listed in [axioms](crate::clue::axioms).
    pub fn axioms(&self) -> Result<Vec<CClause>, ErrorKind> {
        let owners = self.owners().collect::<Vec<_>>();
        let mut clauses = Vec::default();

        for item in 0..self.item_count() {
            let mut coverage = CClause::with_capacity(owners.len());
            for owner in &owners {
                coverage.push(self.literal(*owner, item, true)?);
            }
            clauses.push(coverage);
        }

        for item in 0..self.item_count() {
            for (index, first) in owners.iter().enumerate() {
                for second in &owners[index + 1..] {
                    clauses.push(vec![
                        self.literal(*first, item, false)?,
                        self.literal(*second, item, false)?,
                    ]);
                }
            }
        }

        for category in 0..self.categories().len() {
            let mut cardinality = CClause::default();
            for item in self.category_items(category) {
                cardinality.push(self.literal(Owner::CaseFile, item, true)?);
            }
            clauses.push(cardinality);
        }

        for category in 0..self.categories().len() {
            let items = self.category_items(category);
            for first in items.clone() {
                for second in first + 1..items.end {
                    clauses.push(vec![
                        self.literal(Owner::CaseFile, first, false)?,
                        self.literal(Owner::CaseFile, second, false)?,
                    ]);
                }
            }
        }

        Ok(clauses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clue::roster::Category;

    #[test]
    fn axiom_count() {
        let roster = Roster::new(
            &["a", "b", "c"],
            [
                Category::new("suspects", &["s1", "s2"]),
                Category::new("weapons", &["w1", "w2", "w3"]),
                Category::new("rooms", &["r1"]),
            ],
        )
        .unwrap();

        // 6 coverage, 6 * (4 choose 2) exclusivity, 3 cardinality, 1 + 3 + 0 solution exclusivity.
        let axioms = roster.axioms().unwrap();
        assert_eq!(axioms.len(), 6 + 36 + 3 + 4);
        assert!(axioms.iter().all(|clause| !clause.is_empty()));
        assert_eq!(axioms[0].len(), 4);
    }
}
