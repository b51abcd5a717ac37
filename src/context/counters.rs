use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// A count of solves made.
    pub total_solves: usize,

    /// A count of all decisions made, flipped decisions included.
    pub total_decisions: usize,

    /// A count of every conflict seen.
    pub total_conflicts: usize,

    /// A count of every literal propagated.
    pub total_propagations: usize,

    /// The time taken by solves.
    pub time: Duration,
}

impl Counters {
    /// Adds the counts of `other` to the counts of `self`.
    pub fn absorb(&mut self, other: &Counters) {
        self.total_solves += other.total_solves;
        self.total_decisions += other.total_decisions;
        self.total_conflicts += other.total_conflicts;
        self.total_propagations += other.total_propagations;
        self.time += other.time;
    }
}
