/*!
Boolean constraint propagation.

See [Solve::bcp] for the relevant method.

# Overview
Propagates an atom being assigned some value, given as a literal.

This is done by examining each clause watching the negation of the literal (now false) and either moving the watch of the clause to some literal which is not false, noting the other watch is true, asserting the other watch, or noting a conflict.

# Complications

The watch list of the false literal is taken from the watch lists for the duration of the examination and restored after.
This avoids a borrow of the watch list conflicting with a borrow of the solve to update the valuation or to watch some other literal.
The taken list is never the target of a moved watch, as a moved watch is on a literal which is not false and no clause contains a literal twice.
*/

use crate::{
    db::trail::AssignmentSource,
    misc::log::targets::{self},
    procedures::solve::Solve,
    structures::{
        literal::{CLiteral, Literal},
        valuation::ValuationStatus,
    },
    types::err::{self},
};

impl Solve<'_> {
    /// For documentation see [procedures::bcp](crate::procedures::bcp).
    pub fn bcp(&mut self, literal: CLiteral) -> Result<(), err::BCPError> {
        let clause_db = self.clause_db;
        let false_literal = literal.negate();
        let mut watch_list = self.watches.take_list(false_literal);
        let mut result = Ok(());

        let mut index = 0;
        'watch_loop: while index < watch_list.len() {
            let key = watch_list[index];

            let clause = match clause_db.get(&key) {
                Ok(clause) => clause,
                Err(_) => {
                    log::error!(target: targets::PROPAGATION, "Watch on a missing clause: {key}");
                    result = Err(err::BCPError::CorruptWatch);
                    break 'watch_loop;
                }
            };

            let [a, b] = self.watched[key.index()];
            let (this, other) = match clause[a] == false_literal {
                true => (0, b),
                false => (1, a),
            };
            let other_literal = clause[other];

            if self.value_of_literal(other_literal) == Some(true) {
                index += 1;
                continue 'watch_loop;
            }

            let replacement = (0..clause.len()).find(|position| {
                *position != a
                    && *position != b
                    && self.value_of_literal(clause[*position]) != Some(false)
            });

            if let Some(position) = replacement {
                self.watched[key.index()][this] = position;
                self.watches.watch(clause[position], key);
                watch_list.swap_remove(index);
                continue 'watch_loop;
            }

            match self.assign(other_literal, AssignmentSource::BCP(key)) {
                ValuationStatus::None => {
                    self.counters.total_propagations += 1;
                    log::trace!(target: targets::PROPAGATION, "{other_literal} from {key}");
                }

                ValuationStatus::Set => {}

                ValuationStatus::Conflict => {
                    result = Err(err::BCPError::Conflict(key));
                    break 'watch_loop;
                }
            }

            index += 1;
        }

        self.watches.restore_list(false_literal, watch_list);
        result
    }
}
