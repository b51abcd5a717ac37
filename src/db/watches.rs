/*!
Watch lists, for [BCP](crate::procedures::bcp).

Each clause of two or more literals watches two of its literals.
So long as neither watched literal is false, the clause can neither assert a literal nor conflict with the valuation, and there is no need to examine the clause.

When a literal becomes false each clause watching the literal is examined, and either:
- The watch moves to some other literal of the clause which is not false.
- The other watched literal is true, and nothing is required.
- The other watched literal has no value, and is asserted by the clause.
- The other watched literal is false, and the clause conflicts with the valuation.

Watches do not need to be restored on backtracking, as backtracking only removes values.
*/

use crate::{
    db::ClauseKey,
    structures::literal::{CLiteral, Literal},
};

/// Watch lists for each literal, indexed by literal.
pub struct Watches {
    lists: Vec<Vec<ClauseKey>>,
}

/// The index of the watch list of a literal.
fn list_index(literal: CLiteral) -> usize {
    2 * literal.atom() as usize + literal.polarity() as usize
}

impl Watches {
    /// Empty watch lists for each literal over atoms up to and including `atom_count`.
    pub fn new(atom_count: usize) -> Self {
        Watches {
            lists: vec![Vec::default(); 2 * (atom_count + 1)],
        }
    }

    /// Notes the clause of `key` watches `literal`.
    pub fn watch(&mut self, literal: CLiteral, key: ClauseKey) {
        self.lists[list_index(literal)].push(key);
    }

    /// Takes the watch list of `literal`, leaving an empty list until the list is restored.
    /// To be used in conjunction with [restore_list](Watches::restore_list).
    pub fn take_list(&mut self, literal: CLiteral) -> Vec<ClauseKey> {
        std::mem::take(&mut self.lists[list_index(literal)])
    }

    /// Sets the watch list of `literal` to `list`.
    pub fn restore_list(&mut self, literal: CLiteral, list: Vec<ClauseKey>) {
        self.lists[list_index(literal)] = list;
    }
}
