//! Showdown outcome between two hands.

/// Result of comparing one hand against another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The hand scores higher.
    Win,
    /// The hand scores lower.
    Lose,
    /// Both hands score the same.
    Draw,
}

impl Outcome {
    /// Returns the outcome seen from the other hand.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Win => Self::Lose,
            Self::Lose => Self::Win,
            Self::Draw => Self::Draw,
        }
    }
}

impl From<core::cmp::Ordering> for Outcome {
    fn from(ordering: core::cmp::Ordering) -> Self {
        match ordering {
            core::cmp::Ordering::Greater => Self::Win,
            core::cmp::Ordering::Less => Self::Lose,
            core::cmp::Ordering::Equal => Self::Draw,
        }
    }
}
