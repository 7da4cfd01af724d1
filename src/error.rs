//! Error types for deck and shoe construction.

use thiserror::Error;

/// Errors reported when validating a deck or shoe configuration.
///
/// Validation is opt-in through [`CustomDeck::validate`] and
/// [`Shoe::try_new`]. Unvalidated misconfiguration panics on the first
/// out-of-range lookup instead.
///
/// [`CustomDeck::validate`]: crate::CustomDeck::validate
/// [`Shoe::try_new`]: crate::Shoe::try_new
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// A shoe must hold at least one deck.
    #[error("a shoe needs at least one deck")]
    NoDecks,
    /// A custom deck declares no suits.
    #[error("custom deck declares no suits")]
    NoSuits,
    /// Each pip must appear at least once per suit.
    #[error("pip repeats must be at least one")]
    ZeroPipRepeats,
    /// The card identity encoding only has room for 100 faces.
    #[error("custom deck declares {count} pips, at most 100 are supported")]
    TooManyPips {
        /// Number of declared pips.
        count: usize,
    },
    /// Pip values are not parallel to pip names.
    #[error("{names} pip names but {values} pip values")]
    PipValuesMismatch {
        /// Number of pip names.
        names: usize,
        /// Number of pip values.
        values: usize,
    },
    /// Pip glyphs are not parallel to pip names.
    #[error("{names} pip names but {glyphs} pip glyphs")]
    PipGlyphsMismatch {
        /// Number of pip names.
        names: usize,
        /// Number of pip glyphs.
        glyphs: usize,
    },
    /// More suit colors than suits.
    #[error("{colors} suit colors for {suits} suits")]
    TooManySuitColors {
        /// Number of suits.
        suits: usize,
        /// Number of colors.
        colors: usize,
    },
    /// Card bases must cover every suit plus the unsuited slot.
    #[error("expected {expected} card base images, found {found}")]
    CardBasesMismatch {
        /// Suit count plus one.
        expected: usize,
        /// Number of configured bases.
        found: usize,
    },
    /// An unsuited pip index does not name a pip.
    #[error("unsuited pip index {index} is out of range for {pips} pips")]
    UnsuitedPipOutOfRange {
        /// Offending index.
        index: u8,
        /// Number of pips.
        pips: usize,
    },
}
