/*!
Reports from a context.

- A [Report] on the satisfiability of the knowledge base, perhaps together with some assumptions.
- An [Entailment] of some literal by the knowledge base.
*/

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula is satisfiable.
    Satisfiable,

    /// The formula is unsatisfiable.
    Unsatisfiable,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}

/// What the knowledge base entails about some literal.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Entailment {
    /// The literal is entailed, as the knowledge base together with the negation of the literal is unsatisfiable.
    True,

    /// The negation of the literal is entailed.
    False,

    /// Both the literal and its negation are consistent with the knowledge base.
    Unknown,
}

impl Entailment {
    /// The symbol used for the entailment on a notepad.
    pub fn symbol(&self) -> char {
        match self {
            Self::True => 'Y',
            Self::False => 'n',
            Self::Unknown => '-',
        }
    }
}

impl std::fmt::Display for Entailment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::True => write!(f, "True"),
            Self::False => write!(f, "False"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
