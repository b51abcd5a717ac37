use std::str::FromStr;

/// What an incorrect accusation reveals about the cards of the accuser.
///
/// The rules of the game only fix that the three accused cards are not (all) the solution.
/// Still, a rational accuser does not accuse with a card they hold, as the card is known not to be in the case file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum AccusationPolicy {
    /// Assume the accuser holds none of the accused cards.
    RationalAccuser = 0,

    /// Assume only what follows from the rules.
    RulesOnly,
}

impl std::fmt::Display for AccusationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RationalAccuser => write!(f, "RationalAccuser"),
            Self::RulesOnly => write!(f, "RulesOnly"),
        }
    }
}

impl AccusationPolicy {
    /// The minimum AccusationPolicy type.
    pub const MIN: AccusationPolicy = AccusationPolicy::RationalAccuser;

    /// The maximum AccusationPolicy type.
    pub const MAX: AccusationPolicy = AccusationPolicy::RulesOnly;
}

impl FromStr for AccusationPolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RationalAccuser" => Ok(Self::RationalAccuser),

            "RulesOnly" => Ok(Self::RulesOnly),

            _unknown_string => Err(()),
        }
    }
}
