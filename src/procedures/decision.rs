/*!
Choosing the value of an atom.

The decision procedure is straightforward:
- Take the first atom (by id) which is not assigned a value, and assign the [configured polarity](crate::config::Config::decision_polarity).

A decision is represented as a literal, with the atom of the literal the atom decided on and the polarity of the literal the value.
Each decision opens a fresh level on the trail.
*/

use crate::{
    db::trail::AssignmentSource,
    misc::log::targets::{self},
    procedures::solve::Solve,
    structures::{
        literal::{CLiteral, Literal},
        valuation::Valuation,
    },
};

/// Possible 'Ok' results from choosing a truth value to assign an atom.
pub enum DecisionOk {
    /// Some truth value was assigned to some atom.
    Literal(CLiteral),

    /// All atoms had already been assigned truth values, so no decision could be made.
    Exhausted,
}

impl Solve<'_> {
    /// Makes a decision on the first atom without a value, if one exists.
    pub fn make_decision(&mut self) -> DecisionOk {
        let Some(atom) = self.valuation.unvalued_atoms().next() else {
            return DecisionOk::Exhausted;
        };

        let decision = CLiteral::new(atom, self.config.decision_polarity.value);
        self.trail.push_fresh_level();
        self.assign(decision, AssignmentSource::Decision);
        self.counters.total_decisions += 1;

        log::trace!(target: targets::DECISION, "Decision {decision} at level {}", self.trail.level());
        DecisionOk::Literal(decision)
    }
}
