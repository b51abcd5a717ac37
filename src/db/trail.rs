/*!
The trail of a solve.

The trail records each atom given a value during a solve, in order, as a literal together with the reason for the value.
The trail is divided into levels:
- Level zero contains the unit clauses of the knowledge base, any assumptions, and their consequences.
- Each further level begins with a decision (perhaps flipped), followed by the consequences of the decision.

Backtracking from a level is a pop of the trail to the mark at which the level began.
*/

use crate::{
    db::{ClauseKey, LevelIndex},
    structures::literal::CLiteral,
};

/// The reason an atom was given a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum AssignmentSource {
    /// The literal is the unit clause stored under the key.
    Unit(ClauseKey),

    /// The literal was assumed for the solve, without a clause in the database.
    Assumption,

    /// A free decision on the value of the atom.
    Decision,

    /// The opposite of some decision, made after the decision led to a conflict.
    FlippedDecision,

    /// A consequence of boolean constraint propagation on the clause stored under the key.
    BCP(ClauseKey),
}

/// A literal on the trail, with the reason for the literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Assignment {
    pub literal: CLiteral,
    pub source: AssignmentSource,
}

#[derive(Default)]
pub struct Trail {
    /// Every assignment, in order.
    pub assignments: Vec<Assignment>,

    /// Indicies at which a new level begins.
    pub level_indicies: Vec<usize>,

    /// The index of the first assignment which has not been propagated.
    pub q_head: usize,
}

impl Trail {
    /// Stores an assignment at the current level.
    pub fn store_assignment(&mut self, literal: CLiteral, source: AssignmentSource) {
        self.assignments.push(Assignment { literal, source });
    }

    /// Begins a fresh level, whose first assignment will be the next stored.
    pub fn push_fresh_level(&mut self) {
        self.level_indicies.push(self.assignments.len());
    }

    /// The current level.
    pub fn level(&self) -> LevelIndex {
        self.level_indicies.len() as LevelIndex
    }

    /// The next assignment to propagate, if any, advancing the queue.
    pub fn next_to_propagate(&mut self) -> Option<CLiteral> {
        let literal = self.assignments.get(self.q_head)?.literal;
        self.q_head += 1;
        Some(literal)
    }

    /// Removes the top level, if it exists, returning the assignments of the level in order of assignment.
    /// The first of these is the (perhaps flipped) decision which began the level.
    ///
    /// The queue is moved back to the end of the trail, as every remaining assignment was propagated before the level began.
    ///
    /// # Soundness
    /// Does not clear the *valuation* of the removed assignments.
    pub fn forget_top_level(&mut self) -> Option<Vec<Assignment>> {
        let top_start = self.level_indicies.pop()?;
        let removed = self.assignments.split_off(top_start);
        self.q_head = self.assignments.len();
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_pop_to_mark() {
        let mut trail = Trail::default();
        trail.store_assignment(1, AssignmentSource::Assumption);
        assert_eq!(trail.next_to_propagate(), Some(1));

        trail.push_fresh_level();
        trail.store_assignment(2, AssignmentSource::Decision);
        trail.store_assignment(-3, AssignmentSource::BCP(ClauseKey::Original(0)));
        assert_eq!(trail.level(), 1);
        assert_eq!(trail.next_to_propagate(), Some(2));

        let removed = trail.forget_top_level().unwrap();
        assert_eq!(removed.len(), 2);
        assert_eq!(removed[0].source, AssignmentSource::Decision);

        assert_eq!(trail.level(), 0);
        assert_eq!(trail.assignments.len(), 1);
        assert_eq!(trail.next_to_propagate(), None);
        assert!(trail.forget_top_level().is_none());
    }
}
