use crate::types::err::{self};

/// The index to a formula.
pub type FormulaIndex = u32;

/// A key to access a clause stored in the clause database.
///
/// Within the clause database clauses are stored in a vector, and keys contain the index to the clause.
/// The kind of a key distinguishes clauses which persist from the (at most one) unit clause added for the duration of an [assumption](crate::db::clause::ClauseDB::with_assumption).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClauseKey {
    /// The key to a clause which has been added to the knowledge base.
    Original(FormulaIndex),

    /// The key to the unit clause of some active assumption.
    Assumption(FormulaIndex),
}

impl ClauseKey {
    /// Extracts the index from a key.
    pub fn index(&self) -> usize {
        match self {
            Self::Original(i) | Self::Assumption(i) => *i as usize,
        }
    }

    /// The formula index for a clause to be stored at `index`, if the index is representable.
    pub fn formula_index(index: usize) -> Result<FormulaIndex, err::ClauseDBError> {
        match FormulaIndex::try_from(index) {
            Ok(index) => Ok(index),
            Err(_) => Err(err::ClauseDBError::StorageExhausted),
        }
    }
}

impl std::fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Original(key) => write!(f, "Original({key})"),
            Self::Assumption(key) => write!(f, "Assumption({key})"),
        }
    }
}
