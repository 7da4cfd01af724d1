//! Card identities, resolved cards, and face-value comparisons.

extern crate alloc;

use alloc::string::String;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

/// Multiplier separating the suit index from the face index in a [`CardId`].
pub const ID_MULTIPLIER: u32 = 100;

/// Suit name given to cards that do not belong to any declared suit.
pub const UNSUITED: &str = "Unsuited";

/// Numeric identity of a card: `suit * 100 + face`.
///
/// Two cards are the same card iff their identities are equal. The face
/// index must stay below [`ID_MULTIPLIER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(u32);

impl CardId {
    /// Encodes a suit index and face index into an identity.
    ///
    /// # Panics
    ///
    /// Panics if `face` is not below [`ID_MULTIPLIER`].
    #[must_use]
    pub const fn encode(suit: u32, face: u8) -> Self {
        assert!((face as u32) < ID_MULTIPLIER, "face index out of range");
        Self(suit * ID_MULTIPLIER + face as u32)
    }

    /// Wraps a raw identity value.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw identity value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns `(suit, face)`.
    #[must_use]
    pub const fn decode(self) -> (u32, u8) {
        (self.suit(), self.face())
    }

    /// Suit index. Equal to the declared suit count for unsuited cards.
    #[must_use]
    pub const fn suit(self) -> u32 {
        self.0 / ID_MULTIPLIER
    }

    /// Face (pip) index.
    #[must_use]
    pub const fn face(self) -> u8 {
        (self.0 % ID_MULTIPLIER) as u8
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Suit of a standard deck, in deck-building order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All standard suits in deck-building order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Spades, Self::Diamonds, Self::Clubs];

    /// Suit index used in card identities.
    #[must_use]
    pub const fn index(self) -> u32 {
        self as u32
    }

    /// Display name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
        }
    }

    /// Looks up a standard suit by index.
    #[must_use]
    pub const fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(Self::Hearts),
            1 => Some(Self::Spades),
            2 => Some(Self::Diamonds),
            3 => Some(Self::Clubs),
            _ => None,
        }
    }
}

/// Face of a standard deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Joker. Always unsuited.
    Joker,
}

impl Face {
    /// All standard faces, Ace through Joker.
    pub const ALL: [Self; 14] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Joker,
    ];

    /// Face index used in card identities.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Display name of the face.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Joker => "Joker",
        }
    }

    /// Face value before any faces-ten adjustment (Ace = 1, King = 13, Joker = 99).
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Self::Joker => 99,
            face => face as i32 + 1,
        }
    }

    /// Whether this is a Jack, Queen, or King.
    #[must_use]
    pub const fn is_court(self) -> bool {
        matches!(self, Self::Jack | Self::Queen | Self::King)
    }

    /// Looks up a standard face by index.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < Self::ALL.len() {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }
}

/// A card resolved against its deck's configuration.
///
/// Cards are detached values: the ace-high flag is captured when the card is
/// dealt and does not follow later changes to the deck.
///
/// Equality and hashing use the [`CardId`] only, so the same card dealt
/// before and after an ace-high toggle compares equal.
#[derive(Debug, Clone)]
pub struct Card {
    id: CardId,
    name: String,
    pip: u8,
    pip_name: String,
    face_value: i32,
    suit: u32,
    suit_name: String,
    unsuited: bool,
    ace_high: bool,
}

impl Card {
    pub(crate) fn new(
        id: CardId,
        pip_name: String,
        face_value: i32,
        suit_name: String,
        unsuited: bool,
        ace_high: bool,
    ) -> Self {
        let name = if unsuited {
            alloc::format!("{pip_name} ({UNSUITED})")
        } else {
            alloc::format!("{pip_name} of {suit_name}")
        };

        Self {
            id,
            name,
            pip: id.face(),
            pip_name,
            face_value,
            suit: id.suit(),
            suit_name,
            unsuited,
            ace_high,
        }
    }

    /// Unique identity of the card.
    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    /// Full name, e.g. "Queen of Hearts" or "Joker (Unsuited)".
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Face index. Distinguishes court cards even when faces are worth ten.
    #[must_use]
    pub const fn pip(&self) -> u8 {
        self.pip
    }

    /// Face name, e.g. "King".
    #[must_use]
    pub fn pip_name(&self) -> &str {
        &self.pip_name
    }

    /// Face value used for comparisons.
    #[must_use]
    pub const fn face_value(&self) -> i32 {
        self.face_value
    }

    /// Suit index.
    #[must_use]
    pub const fn suit(&self) -> u32 {
        self.suit
    }

    /// Suit name, or "Unsuited".
    #[must_use]
    pub fn suit_name(&self) -> &str {
        &self.suit_name
    }

    /// Whether aces were high in the deck when this card was dealt.
    #[must_use]
    pub const fn is_ace_high(&self) -> bool {
        self.ace_high
    }

    /// Whether this card belongs to no suit.
    #[must_use]
    pub const fn is_unsuited(&self) -> bool {
        self.unsuited
    }

    const fn outranks_as_ace(&self, other: &Self) -> bool {
        self.ace_high
            && self.pip == Face::Ace.index()
            && other.pip != Face::Ace.index()
            && other.pip != Face::Joker.index()
    }

    /// Whether both cards have the same face value. Suits are ignored.
    #[must_use]
    pub const fn is_equal_to(&self, other: &Self) -> bool {
        self.face_value == other.face_value
    }

    /// Whether this card has a higher face value than `other`.
    ///
    /// When this card is an ace-high Ace it beats everything except another
    /// Ace or a Joker. Only this card's ace-high flag is consulted.
    #[must_use]
    pub const fn is_greater_than(&self, other: &Self) -> bool {
        if self.outranks_as_ace(other) {
            true
        } else {
            self.face_value > other.face_value
        }
    }

    /// Whether this card has a lower face value than `other`.
    ///
    /// An ace-high Ace is never lower than a non-Ace, non-Joker card. Only
    /// this card's ace-high flag is consulted.
    #[must_use]
    pub const fn is_less_than(&self, other: &Self) -> bool {
        if self.outranks_as_ace(other) {
            false
        } else {
            self.face_value < other.face_value
        }
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Ranks two cards, highest first.
///
/// Returns [`Ordering::Less`] when `left` ranks higher, [`Ordering::Equal`]
/// on equal rank, and [`Ordering::Greater`] when `right` ranks higher, so
/// `cards.sort_by(compare_cards)` puts the best card first. Each card's own
/// ace-high flag is checked, and a Joker still beats an ace-high Ace.
///
/// # Example
///
/// ```
/// use cardshoe::{Shoe, compare_cards};
///
/// let mut shoe = Shoe::poker(7);
/// let mut hand: Vec<_> = (0..5).filter_map(|_| shoe.next_card()).collect();
/// hand.sort_by(compare_cards);
/// assert_eq!(hand[0].name(), "Ace of Hearts");
/// ```
#[must_use]
pub fn compare_cards(left: &Card, right: &Card) -> Ordering {
    match (left.outranks_as_ace(right), right.outranks_as_ace(left)) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => right.face_value.cmp(&left.face_value),
    }
}
