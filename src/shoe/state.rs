//! Shoe dealing state.

/// Where a shoe is in its dealing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShoeState {
    /// No card dealt since construction, reset, or shuffle.
    Fresh,
    /// Some cards dealt, some remain.
    Dealing,
    /// Every card has been dealt.
    Exhausted,
}

impl ShoeState {
    /// Derives the state from the dealing cursor and shoe size.
    #[must_use]
    pub const fn from_cursor(cursor: usize, len: usize) -> Self {
        if cursor >= len {
            Self::Exhausted
        } else if cursor == 0 {
            Self::Fresh
        } else {
            Self::Dealing
        }
    }
}
