//! Deck and shoe configuration options.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Face, ID_MULTIPLIER};
use crate::error::DeckError;
use crate::sprite::{CardBase, FontFace};

/// Number of decks in a shoe when none is specified.
pub const DEFAULT_SHOE_DECKS: u8 = 3;

/// Standard deck layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StandardKind {
    /// 52 cards, Ace through King in each suit.
    #[default]
    Poker,
    /// 48 cards, two each of Ace and Nine through King in each suit.
    Pinochle,
    /// 24 cards, Ace and Nine through King in each suit.
    Euchre,
}

impl StandardKind {
    /// Faces used in each suit, in ascending face order.
    #[must_use]
    pub fn faces(self) -> &'static [Face] {
        const POKER: [Face; 13] = [
            Face::Ace,
            Face::Two,
            Face::Three,
            Face::Four,
            Face::Five,
            Face::Six,
            Face::Seven,
            Face::Eight,
            Face::Nine,
            Face::Ten,
            Face::Jack,
            Face::Queen,
            Face::King,
        ];
        const EUCHRE: [Face; 6] = [
            Face::Ace,
            Face::Nine,
            Face::Ten,
            Face::Jack,
            Face::Queen,
            Face::King,
        ];

        match self {
            Self::Poker => &POKER,
            Self::Pinochle | Self::Euchre => &EUCHRE,
        }
    }

    /// How many copies of each face appear per suit.
    #[must_use]
    pub const fn repeats(self) -> usize {
        match self {
            Self::Pinochle => 2,
            Self::Poker | Self::Euchre => 1,
        }
    }
}

/// Configuration for a standard deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardshoe::{StandardDeck, StandardKind};
///
/// let deck = StandardDeck::default()
///     .with_kind(StandardKind::Euchre)
///     .with_jokers(1)
///     .with_ace_high(false);
/// assert_eq!(deck.jokers, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StandardDeck {
    /// Deck layout.
    pub kind: StandardKind,
    /// Number of jokers appended after the suited cards.
    pub jokers: u8,
    /// Whether Aces outrank every other non-Joker card.
    pub ace_high: bool,
    /// Whether Jack, Queen, and King are worth ten.
    pub faces_ten: bool,
}

impl Default for StandardDeck {
    fn default() -> Self {
        Self {
            kind: StandardKind::Poker,
            jokers: 0,
            ace_high: true,
            faces_ten: false,
        }
    }
}

impl StandardDeck {
    /// Sets the deck layout.
    ///
    /// # Example
    ///
    /// ```
    /// use cardshoe::{StandardDeck, StandardKind};
    ///
    /// let deck = StandardDeck::default().with_kind(StandardKind::Pinochle);
    /// assert_eq!(deck.kind, StandardKind::Pinochle);
    /// ```
    #[must_use]
    pub const fn with_kind(mut self, kind: StandardKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the number of jokers.
    #[must_use]
    pub const fn with_jokers(mut self, jokers: u8) -> Self {
        self.jokers = jokers;
        self
    }

    /// Sets whether Aces are high.
    #[must_use]
    pub const fn with_ace_high(mut self, ace_high: bool) -> Self {
        self.ace_high = ace_high;
        self
    }

    /// Sets whether face cards are worth ten.
    ///
    /// # Example
    ///
    /// ```
    /// use cardshoe::StandardDeck;
    ///
    /// let deck = StandardDeck::default().with_faces_ten(true);
    /// assert!(deck.faces_ten);
    /// ```
    #[must_use]
    pub const fn with_faces_ten(mut self, faces_ten: bool) -> Self {
        self.faces_ten = faces_ten;
        self
    }
}

/// Configuration for a deck with caller-defined suits and faces.
///
/// Pip tables are parallel: `pip_names[i]`, `pip_values[i]`, and
/// `pip_glyphs[i]` all describe face index `i`. Faces listed in
/// `unsuited_pips` are dealt once per repeat with no suit.
///
/// ```
/// use cardshoe::CustomDeck;
///
/// let deck = CustomDeck::new(
///     ["Red", "Black"],
///     ["Low", "High", "Joker"],
///     [1, 2, 0],
/// )
/// .with_unsuited_pips([2]);
/// assert!(deck.validate().is_ok());
/// assert_eq!(deck.pip_glyphs, ["L", "H", "J"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomDeck {
    /// Suit names. Do not include an "unsuited" suit.
    pub suit_names: Vec<String>,
    /// Print color for each suit. Missing entries print in color 15.
    pub suit_colors: Vec<u8>,
    /// Face names, including unsuited faces.
    pub pip_names: Vec<String>,
    /// Face values, parallel to `pip_names`.
    pub pip_values: Vec<i32>,
    /// How many times each face appears per suit.
    pub pip_repeats: u8,
    /// Text printed on the card image for each face.
    pub pip_glyphs: Vec<String>,
    /// Indices into `pip_names` of faces that belong to no suit.
    pub unsuited_pips: Vec<u8>,
    /// Base image per suit, plus a trailing base for unsuited cards.
    pub card_bases: Vec<CardBase>,
    /// Font used to print glyphs.
    pub font: FontFace,
}

impl CustomDeck {
    /// Creates a custom deck with default glyphs, bases, and font.
    ///
    /// Glyphs default to the first character of each pip name. Each suit and
    /// the unsuited slot get a blank 32x32 base filled with color 1.
    #[must_use]
    pub fn new<S, P, V>(suit_names: S, pip_names: P, pip_values: V) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
        V: IntoIterator<Item = i32>,
    {
        let suit_names: Vec<String> = suit_names.into_iter().map(Into::into).collect();
        let pip_names: Vec<String> = pip_names.into_iter().map(Into::into).collect();
        let pip_glyphs = pip_names
            .iter()
            .map(|name| name.chars().take(1).collect())
            .collect();
        let card_bases = alloc::vec![CardBase::blank(); suit_names.len() + 1];

        Self {
            suit_names,
            suit_colors: Vec::new(),
            pip_names,
            pip_values: pip_values.into_iter().collect(),
            pip_repeats: 1,
            pip_glyphs,
            unsuited_pips: Vec::new(),
            card_bases,
            font: FontFace::Font8,
        }
    }

    /// Sets the print color for each suit.
    #[must_use]
    pub fn with_suit_colors(mut self, colors: impl IntoIterator<Item = u8>) -> Self {
        self.suit_colors = colors.into_iter().collect();
        self
    }

    /// Sets how many times each face appears per suit.
    #[must_use]
    pub const fn with_pip_repeats(mut self, repeats: u8) -> Self {
        self.pip_repeats = repeats;
        self
    }

    /// Sets the text printed for each face.
    #[must_use]
    pub fn with_pip_glyphs<G>(mut self, glyphs: G) -> Self
    where
        G: IntoIterator,
        G::Item: Into<String>,
    {
        self.pip_glyphs = glyphs.into_iter().map(Into::into).collect();
        self
    }

    /// Marks faces as unsuited. Order is kept when dealing them.
    #[must_use]
    pub fn with_unsuited_pips(mut self, pips: impl IntoIterator<Item = u8>) -> Self {
        self.unsuited_pips = pips.into_iter().collect();
        self
    }

    /// Sets the base images, one per suit plus one for unsuited cards.
    #[must_use]
    pub fn with_card_bases(mut self, bases: impl IntoIterator<Item = CardBase>) -> Self {
        self.card_bases = bases.into_iter().collect();
        self
    }

    /// Sets the glyph font.
    #[must_use]
    pub fn with_font(mut self, font: FontFace) -> Self {
        self.font = font;
        self
    }

    /// Checks that the pip tables line up and every index is in range.
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found.
    pub fn validate(&self) -> Result<(), DeckError> {
        let suits = self.suit_names.len();
        let pips = self.pip_names.len();

        if suits == 0 {
            return Err(DeckError::NoSuits);
        }
        if self.pip_repeats == 0 {
            return Err(DeckError::ZeroPipRepeats);
        }
        if pips >= ID_MULTIPLIER as usize {
            return Err(DeckError::TooManyPips { count: pips });
        }
        if self.pip_values.len() != pips {
            return Err(DeckError::PipValuesMismatch {
                names: pips,
                values: self.pip_values.len(),
            });
        }
        if self.pip_glyphs.len() != pips {
            return Err(DeckError::PipGlyphsMismatch {
                names: pips,
                glyphs: self.pip_glyphs.len(),
            });
        }
        if self.suit_colors.len() > suits {
            return Err(DeckError::TooManySuitColors {
                suits,
                colors: self.suit_colors.len(),
            });
        }
        if self.card_bases.len() != suits + 1 {
            return Err(DeckError::CardBasesMismatch {
                expected: suits + 1,
                found: self.card_bases.len(),
            });
        }
        if let Some(&index) = self
            .unsuited_pips
            .iter()
            .find(|&&index| index as usize >= pips)
        {
            return Err(DeckError::UnsuitedPipOutOfRange { index, pips });
        }

        Ok(())
    }
}

/// Either kind of deck configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeckConfig {
    /// Poker, Pinochle, or Euchre deck.
    Standard(StandardDeck),
    /// Caller-defined deck.
    Custom(CustomDeck),
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self::Standard(StandardDeck::default())
    }
}

impl From<StandardDeck> for DeckConfig {
    fn from(deck: StandardDeck) -> Self {
        Self::Standard(deck)
    }
}

impl From<StandardKind> for DeckConfig {
    fn from(kind: StandardKind) -> Self {
        Self::Standard(StandardDeck::default().with_kind(kind))
    }
}

impl From<CustomDeck> for DeckConfig {
    fn from(deck: CustomDeck) -> Self {
        Self::Custom(deck)
    }
}

/// Algorithm used by [`Shoe::shuffle`](crate::Shoe::shuffle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ShuffleMode {
    /// Visits every position and swaps it with a partner drawn from the
    /// whole shoe. Slightly biased; kept for sequence compatibility.
    #[default]
    Legacy,
    /// Unbiased Fisher-Yates shuffle.
    FisherYates,
}
