//! Error types used in the library.
//!
//! - Errors from the roster and from events are caller errors, and are returned at the call which caused them.
//! - A clause database error is unexpected, and points to a bug in the encoding of some axiom or event.
//! - Inconsistent facts are *not* an error.
//!   Asserting contradictory facts leaves an unsatisfiable formula, which is observed through [is_consistent](crate::clue::Game::is_consistent).
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    BCP(BCPError),
    ClauseDB(ClauseDBError),
    Event(EventError),
    Parse(ParseError),
    Roster(RosterError),

    /// An atom was given which is not part of the language of the context.
    UnknownAtom,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BCP(e) => write!(f, "BCP: {e:?}"),
            Self::ClauseDB(e) => write!(f, "Clause database: {e:?}"),
            Self::Event(e) => write!(f, "Event: {e:?}"),
            Self::Parse(e) => write!(f, "Parse: {e:?}"),
            Self::Roster(e) => write!(f, "Roster: {e:?}"),
            Self::UnknownAtom => write!(f, "Unknown atom"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Noted errors during boolean constraint propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BCPError {
    /// A conflict was found on the clause stored under the key.
    Conflict(crate::db::ClauseKey),

    /// A watch list contained a key to a clause which is not in the database.
    CorruptWatch,
}

impl From<BCPError> for ErrorKind {
    fn from(e: BCPError) -> Self {
        ErrorKind::BCP(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// Some attempt was made to store an empty clause.
    EmptyClause,

    /// All possible keys have been used.
    StorageExhausted,

    /// A key to a clause which is not in the database.
    InvalidKeyIndex,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Noted errors when checking an event against the rules of the game.
///
/// An event is checked in full before any clause is added, so an event which returns an error leaves the knowledge base untouched.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EventError {
    /// The refuter of a suggestion was the suggester.
    SelfRefutation,

    /// A card was shown, though no one refuted the suggestion.
    ShownWithoutRefuter,

    /// The card shown was not one of the suggested cards.
    ShownNotSuggested,
}

impl From<EventError> for ErrorKind {
    fn from(e: EventError) -> Self {
        ErrorKind::Event(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// Some unspecific problem at a specific (1-indexed) line.
    Line(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors from building, or reading, a roster of players and cards.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RosterError {
    /// An owner or item was named (or indexed) which is not part of the roster.
    ///
    /// Also returned when the case file is named where a player is required.
    InvalidIdentifier,

    /// A roster requires at least one player.
    NoPlayers,

    /// Each category requires at least one card.
    EmptyCategory,

    /// Some name is used twice.
    DuplicateName,

    /// A player was given the name reserved for the case file.
    ReservedName,
}

impl From<RosterError> for ErrorKind {
    fn from(e: RosterError) -> Self {
        ErrorKind::Roster(e)
    }
}
