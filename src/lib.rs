//! Playing-card decks and multi-deck shoes with optional `no_std` support.
//!
//! A [`Shoe`] holds one or more copies of a [`Deck`] built from a standard
//! layout (poker, pinochle, euchre) or a fully custom suit and face table.
//! Dealing yields resolved [`Card`] values that can be compared by face value
//! with ace-high and joker rules, or ranked with [`compare_cards`].
//!
//! # Example
//!
//! ```
//! use cardshoe::{Shoe, StandardDeck, StandardKind};
//!
//! let deck = StandardDeck::default().with_kind(StandardKind::Euchre);
//! let mut shoe = Shoe::new(deck, 2, 42);
//! assert_eq!(shoe.num_cards(), 48);
//!
//! shoe.shuffle();
//! let first = shoe.next_card().unwrap();
//! let second = shoe.next_card().unwrap();
//! let _ = first.is_greater_than(&second);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod shoe;
pub mod sprite;

// Re-export main types
pub use card::{Card, CardId, Face, ID_MULTIPLIER, Suit, UNSUITED, compare_cards};
pub use deck::{Deck, DeckType};
pub use error::DeckError;
pub use options::{
    CustomDeck, DEFAULT_SHOE_DECKS, DeckConfig, ShuffleMode, StandardDeck, StandardKind,
};
pub use shoe::{Shoe, ShoeState};
pub use sprite::{Canvas, CardBase, CardFace, CardSpriteSize, FontFace, Stroke};
