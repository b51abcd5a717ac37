/*!
Undoing decisions after a conflict.

Levels are removed from the trail, and the atoms valued on those levels are cleared from the valuation, until a level is found whose decision has not already been flipped.
That level is then reopened with the negation of its decision, as a [flipped decision](crate::db::trail::AssignmentSource::FlippedDecision).

Every valuation extending a flipped level has been examined, and so a conflict with no unflipped decision on the trail means the formula is unsatisfiable.

Backtracking is a loop over the trail, and so the depth of a search is not limited by the stack.
*/

use crate::{
    db::trail::AssignmentSource,
    misc::log::targets::{self},
    procedures::solve::Solve,
    structures::literal::{CLiteral, Literal},
};

/// Possible 'Ok' results from backtracking.
pub enum BacktrackOk {
    /// Some decision was flipped, and the flipped literal is queued for propagation.
    Flipped(CLiteral),

    /// No decision remains to be flipped.
    Exhausted,
}

impl Solve<'_> {
    /// For documentation see [procedures::backtrack](crate::procedures::backtrack).
    pub fn backtrack(&mut self) -> BacktrackOk {
        while let Some(level) = self.trail.forget_top_level() {
            for assignment in &level {
                self.valuation[assignment.literal.atom() as usize] = None;
            }

            let Some(head) = level.first() else {
                continue;
            };

            if let AssignmentSource::Decision = head.source {
                let flipped = head.literal.negate();
                self.trail.push_fresh_level();
                self.assign(flipped, AssignmentSource::FlippedDecision);
                self.counters.total_decisions += 1;

                log::trace!(target: targets::BACKTRACK, "Flipped {} to {flipped} at level {}", head.literal, self.trail.level());
                return BacktrackOk::Flipped(flipped);
            }
        }

        log::trace!(target: targets::BACKTRACK, "No decision to flip");
        BacktrackOk::Exhausted
    }
}
