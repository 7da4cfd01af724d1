//! Deck composition and card resolution.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, CardId, Face, ID_MULTIPLIER, Suit, UNSUITED};
use crate::options::{CustomDeck, DeckConfig, StandardDeck, StandardKind};
use crate::sprite::{
    self, CardBase, CardFace, CardSpriteSize, DEFAULT_GLYPH_COLOR, STANDARD_SUIT_COLORS,
};

/// Deck type, including custom decks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeckType {
    /// Standard poker deck.
    Poker,
    /// Pinochle deck.
    Pinochle,
    /// Euchre deck.
    Euchre,
    /// Caller-defined deck.
    Custom,
}

impl From<StandardKind> for DeckType {
    fn from(kind: StandardKind) -> Self {
        match kind {
            StandardKind::Poker => Self::Poker,
            StandardKind::Pinochle => Self::Pinochle,
            StandardKind::Euchre => Self::Euchre,
        }
    }
}

/// Card identities for one standard deck: suits in order, faces ascending,
/// each face repeated per the layout, then the jokers.
#[must_use]
pub fn compose_standard(deck: &StandardDeck) -> Vec<CardId> {
    let faces = deck.kind.faces();
    let repeats = deck.kind.repeats();
    let mut cards =
        Vec::with_capacity(Suit::ALL.len() * faces.len() * repeats + deck.jokers as usize);

    for suit in Suit::ALL {
        for face in faces {
            for _ in 0..repeats {
                cards.push(CardId::encode(suit.index(), face.index()));
            }
        }
    }

    let joker = CardId::encode(Suit::ALL.len() as u32, Face::Joker.index());
    cards.extend((0..deck.jokers).map(|_| joker));
    cards
}

/// Card identities for one custom deck: every suited pip in every suit, then
/// the unsuited pips in the order given.
///
/// # Panics
///
/// Panics if the deck defines more pips than a [`CardId`] can encode.
#[must_use]
pub fn compose_custom(deck: &CustomDeck) -> Vec<CardId> {
    assert!(
        deck.pip_names.len() < ID_MULTIPLIER as usize,
        "custom deck has {} pips, fewer than {ID_MULTIPLIER} are supported",
        deck.pip_names.len()
    );

    let repeats = deck.pip_repeats as usize;
    let unsuited_suit = deck.suit_names.len() as u32;
    let mut cards = Vec::new();

    for suit in 0..unsuited_suit {
        for pip in 0..deck.pip_names.len() {
            let pip = pip as u8;
            if deck.unsuited_pips.contains(&pip) {
                continue;
            }
            for _ in 0..repeats {
                cards.push(CardId::encode(suit, pip));
            }
        }
    }

    for &pip in &deck.unsuited_pips {
        for _ in 0..repeats {
            cards.push(CardId::encode(unsuited_suit, pip));
        }
    }

    cards
}

/// One physical deck: its configuration and composed card order.
///
/// The composed order never changes. Only the ace-high flag of a standard
/// deck may be toggled after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    config: DeckConfig,
    cards: Vec<CardId>,
}

impl Deck {
    /// Composes a deck from its configuration.
    ///
    /// # Panics
    ///
    /// Custom configurations are not validated here; call
    /// [`CustomDeck::validate`] first if the tables may be inconsistent.
    #[must_use]
    pub fn new(config: impl Into<DeckConfig>) -> Self {
        let config = config.into();
        let cards = match &config {
            DeckConfig::Standard(deck) => compose_standard(deck),
            DeckConfig::Custom(deck) => compose_custom(deck),
        };

        Self { config, cards }
    }

    /// The deck's configuration.
    #[must_use]
    pub const fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// Card identities in composed order.
    #[must_use]
    pub fn card_ids(&self) -> &[CardId] {
        &self.cards
    }

    /// Number of cards in one deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The deck type.
    #[must_use]
    pub fn deck_type(&self) -> DeckType {
        match &self.config {
            DeckConfig::Standard(deck) => deck.kind.into(),
            DeckConfig::Custom(_) => DeckType::Custom,
        }
    }

    /// Number of declared suits, excluding the unsuited slot.
    #[must_use]
    pub fn suit_count(&self) -> usize {
        match &self.config {
            DeckConfig::Standard(_) => Suit::ALL.len(),
            DeckConfig::Custom(deck) => deck.suit_names.len(),
        }
    }

    /// Whether the deck includes jokers. Always `false` for custom decks.
    #[must_use]
    pub const fn has_jokers(&self) -> bool {
        match &self.config {
            DeckConfig::Standard(deck) => deck.jokers > 0,
            DeckConfig::Custom(_) => false,
        }
    }

    /// Whether Aces are high. Always `false` for custom decks.
    #[must_use]
    pub const fn is_ace_high(&self) -> bool {
        match &self.config {
            DeckConfig::Standard(deck) => deck.ace_high,
            DeckConfig::Custom(_) => false,
        }
    }

    /// Sets whether Aces are high. Ignored for custom decks.
    ///
    /// Cards already dealt keep the flag they were dealt with.
    pub fn set_ace_high(&mut self, ace_high: bool) {
        if let DeckConfig::Standard(deck) = &mut self.config {
            tracing::debug!(ace_high, "ace-high toggled");
            deck.ace_high = ace_high;
        }
    }

    /// Whether face cards are worth ten. Always `false` for custom decks.
    #[must_use]
    pub const fn are_faces_ten(&self) -> bool {
        match &self.config {
            DeckConfig::Standard(deck) => deck.faces_ten,
            DeckConfig::Custom(_) => false,
        }
    }

    /// Resolves a card identity against this deck's current configuration.
    ///
    /// # Panics
    ///
    /// Panics if the identity names a face this deck does not define.
    #[must_use]
    pub fn card(&self, id: CardId) -> Card {
        let (suit, pip) = id.decode();
        let unsuited = suit as usize >= self.suit_count();

        match &self.config {
            DeckConfig::Standard(deck) => {
                let face = Face::from_index(pip)
                    .unwrap_or_else(|| panic!("card {id} has no standard face"));
                let face_value = if deck.faces_ten && face.is_court() {
                    10
                } else {
                    face.value()
                };
                let suit_name = Suit::from_index(suit).map_or(UNSUITED, Suit::name);

                Card::new(
                    id,
                    face.name().into(),
                    face_value,
                    suit_name.into(),
                    unsuited,
                    deck.ace_high,
                )
            }
            DeckConfig::Custom(deck) => {
                let suit_name: String = if unsuited {
                    UNSUITED.into()
                } else {
                    deck.suit_names[suit as usize].clone()
                };

                Card::new(
                    id,
                    deck.pip_names[pip as usize].clone(),
                    deck.pip_values[pip as usize],
                    suit_name,
                    unsuited,
                    false,
                )
            }
        }
    }

    /// Describes the image for a card dealt from this deck.
    ///
    /// `size` only applies to standard decks; custom decks always use their
    /// configured base image and font.
    ///
    /// # Panics
    ///
    /// Panics if the card's suit has no configured base image in a custom
    /// deck.
    #[must_use]
    pub fn card_face(&self, card: &Card, size: CardSpriteSize) -> CardFace {
        match &self.config {
            DeckConfig::Standard(_) => {
                let suit = card.suit() as usize;
                CardFace {
                    base: CardBase::Standard {
                        size,
                        suit: card.suit(),
                    },
                    color: STANDARD_SUIT_COLORS[suit.min(STANDARD_SUIT_COLORS.len() - 1)],
                    strokes: sprite::standard_strokes(card, size),
                }
            }
            DeckConfig::Custom(deck) => {
                let suit = card.suit() as usize;
                CardFace {
                    base: deck.card_bases[suit].clone(),
                    color: deck
                        .suit_colors
                        .get(suit)
                        .copied()
                        .unwrap_or(DEFAULT_GLYPH_COLOR),
                    strokes: sprite::custom_strokes(
                        &deck.pip_glyphs[card.pip() as usize],
                        &deck.font,
                    ),
                }
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new(StandardDeck::default())
    }
}
