//! Multi-deck shoes and dealing.

use alloc::vec::Vec;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, CardId};
use crate::deck::{Deck, DeckType};
use crate::error::DeckError;
use crate::options::{DeckConfig, ShuffleMode, StandardDeck};
use crate::sprite::{CardFace, CardSpriteSize};

pub mod state;

pub use state::ShoeState;

/// One or more copies of a deck, dealt in sequence.
///
/// A new shoe deals in composed order, deck after deck. Call
/// [`shuffle`](Self::shuffle) to randomise it; the shoe owns a seeded RNG so
/// the same seed always produces the same shuffles.
///
/// # Example
///
/// ```
/// use cardshoe::{Shoe, StandardDeck};
///
/// let mut shoe = Shoe::new(StandardDeck::default(), 2, 42);
/// shoe.shuffle();
/// while let Some(card) = shoe.next_card() {
///     let _ = card.name();
/// }
/// assert!(!shoe.has_more_cards());
/// ```
#[derive(Debug, Clone)]
pub struct Shoe {
    /// The deck every copy is built from.
    deck: Deck,
    /// Number of deck copies.
    num_decks: u8,
    /// Dealing order.
    cards: Vec<CardId>,
    /// Index of the next card to deal.
    cursor: usize,
    /// Shuffle algorithm.
    shuffle_mode: ShuffleMode,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a shoe of `num_decks` copies of the configured deck.
    ///
    /// The configuration is not validated; see [`try_new`](Self::try_new).
    #[must_use]
    pub fn new(config: impl Into<DeckConfig>, num_decks: u8, seed: u64) -> Self {
        let deck = Deck::new(config);
        let cards = Self::build(&deck, num_decks);

        tracing::debug!(
            deck_type = ?deck.deck_type(),
            num_decks,
            num_cards = cards.len(),
            "shoe built"
        );

        Self {
            deck,
            num_decks,
            cards,
            cursor: 0,
            shuffle_mode: ShuffleMode::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a shoe after validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `num_decks` is zero or a custom deck's tables are
    /// inconsistent.
    pub fn try_new(
        config: impl Into<DeckConfig>,
        num_decks: u8,
        seed: u64,
    ) -> Result<Self, DeckError> {
        if num_decks == 0 {
            return Err(DeckError::NoDecks);
        }

        let config = config.into();
        if let DeckConfig::Custom(deck) = &config {
            deck.validate()?;
        }

        Ok(Self::new(config, num_decks, seed))
    }

    /// Creates a single-deck shoe.
    #[must_use]
    pub fn single(config: impl Into<DeckConfig>, seed: u64) -> Self {
        Self::new(config, 1, seed)
    }

    /// Creates a single 52-card poker deck with Aces high and no jokers.
    #[must_use]
    pub fn poker(seed: u64) -> Self {
        Self::single(StandardDeck::default(), seed)
    }

    /// Sets the shuffle algorithm.
    #[must_use]
    pub fn with_shuffle_mode(mut self, mode: ShuffleMode) -> Self {
        self.shuffle_mode = mode;
        self
    }

    /// Changes the shuffle algorithm used from now on.
    pub const fn set_shuffle_mode(&mut self, mode: ShuffleMode) {
        self.shuffle_mode = mode;
    }

    /// The shuffle algorithm.
    #[must_use]
    pub const fn shuffle_mode(&self) -> ShuffleMode {
        self.shuffle_mode
    }

    /// Concatenates `num_decks` copies of the deck's composed order.
    fn build(deck: &Deck, num_decks: u8) -> Vec<CardId> {
        let ids = deck.card_ids();
        let mut cards = Vec::with_capacity(ids.len() * num_decks as usize);
        for _ in 0..num_decks {
            cards.extend_from_slice(ids);
        }
        cards
    }

    /// Deals the next card, or `None` once the shoe is exhausted.
    ///
    /// The card is resolved against the deck's current ace-high setting.
    pub fn next_card(&mut self) -> Option<Card> {
        let id = *self.cards.get(self.cursor)?;
        self.cursor += 1;
        if self.cursor == self.cards.len() {
            tracing::trace!("last card dealt");
        }
        Some(self.deck.card(id))
    }

    /// Returns whether any cards remain to be dealt.
    #[must_use]
    pub fn has_more_cards(&self) -> bool {
        self.cursor < self.cards.len()
    }

    /// Total number of cards in the shoe.
    #[must_use]
    pub fn num_cards(&self) -> usize {
        self.cards.len()
    }

    /// Number of cards not yet dealt.
    #[must_use]
    pub fn num_cards_remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// Number of deck copies in the shoe.
    #[must_use]
    pub const fn num_decks(&self) -> u8 {
        self.num_decks
    }

    /// Current dealing state.
    #[must_use]
    pub fn state(&self) -> ShoeState {
        ShoeState::from_cursor(self.cursor, self.cards.len())
    }

    /// Returns every card to the shoe without changing the order.
    pub fn reset(&mut self) {
        tracing::debug!(dealt = self.cursor, "shoe reset");
        self.cursor = 0;
    }

    /// Returns every card to the shoe and shuffles it.
    pub fn shuffle(&mut self) {
        match self.shuffle_mode {
            ShuffleMode::Legacy => {
                let len = self.cards.len();
                for index in 0..len {
                    let swap = self.rng.random_range(0..len);
                    if swap != index {
                        self.cards.swap(index, swap);
                    }
                }
            }
            ShuffleMode::FisherYates => self.cards.shuffle(&mut self.rng),
        }

        tracing::debug!(mode = ?self.shuffle_mode, num_cards = self.cards.len(), "shoe shuffled");
        self.cursor = 0;
    }

    /// Card identities in dealing order, including cards already dealt.
    #[must_use]
    pub fn card_ids(&self) -> &[CardId] {
        &self.cards
    }

    /// The deck this shoe is built from.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The deck type.
    #[must_use]
    pub fn deck_type(&self) -> DeckType {
        self.deck.deck_type()
    }

    /// Whether Aces are high. Always `false` for custom decks.
    #[must_use]
    pub const fn is_ace_high(&self) -> bool {
        self.deck.is_ace_high()
    }

    /// Sets whether Aces are high for cards dealt from now on.
    ///
    /// Ignored for custom decks. Cards already dealt are not affected.
    pub fn set_ace_high(&mut self, ace_high: bool) {
        self.deck.set_ace_high(ace_high);
    }

    /// Whether face cards are worth ten.
    #[must_use]
    pub const fn are_faces_ten(&self) -> bool {
        self.deck.are_faces_ten()
    }

    /// Describes the image for a card dealt from this shoe.
    #[must_use]
    pub fn card_face(&self, card: &Card, size: CardSpriteSize) -> CardFace {
        self.deck.card_face(card, size)
    }
}
