//! Card face descriptions for image backends.
//!
//! The crate does not rasterise anything. [`Deck::card_face`] describes which
//! base image to start from, the print color, and the strokes to draw on it.
//! Any backend implementing [`Canvas`] can then [`paint`](CardFace::paint)
//! the face.
//!
//! [`Deck::card_face`]: crate::Deck::card_face

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::card::{Card, Face};

/// Print colors for Hearts, Spades, Diamonds, Clubs, and unsuited cards.
pub const STANDARD_SUIT_COLORS: [u8; 5] = [2, 15, 2, 15, 1];

/// Print color for custom suits without a configured color.
pub const DEFAULT_GLYPH_COLOR: u8 = 15;

/// Size of a standard card sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardSpriteSize {
    /// 8x8 pixels.
    Size8x8,
    /// 8x16 pixels.
    Size8x16,
    /// 16x16 pixels.
    #[default]
    Size16x16,
    /// 16x32 pixels.
    Size16x32,
    /// 32x32 pixels.
    Size32x32,
}

impl CardSpriteSize {
    /// Width in pixels.
    #[must_use]
    pub const fn width(self) -> u32 {
        match self {
            Self::Size8x8 | Self::Size8x16 => 8,
            Self::Size16x16 | Self::Size16x32 => 16,
            Self::Size32x32 => 32,
        }
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(self) -> u32 {
        match self {
            Self::Size8x8 => 8,
            Self::Size8x16 | Self::Size16x16 => 16,
            Self::Size16x32 | Self::Size32x32 => 32,
        }
    }
}

/// Font used to print a glyph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FontFace {
    /// 5-pixel font.
    Font5,
    /// 8-pixel font.
    #[default]
    Font8,
    /// 8-pixel font scaled to double size.
    DoubledFont8,
    /// Font asset supplied by the host, by name.
    Asset(String),
}

/// Image a card face is drawn onto.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CardBase {
    /// Built-in standard card art for a suit index and size.
    Standard {
        /// Sprite size.
        size: CardSpriteSize,
        /// Suit index; 4 is the unsuited (Joker) art.
        suit: u32,
    },
    /// Solid rectangle.
    Blank {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
        /// Fill color.
        color: u8,
    },
    /// Image asset supplied by the host, by name.
    Asset(String),
}

impl CardBase {
    /// A blank 32x32 base filled with color 1.
    #[must_use]
    pub const fn blank() -> Self {
        Self::Blank {
            width: 32,
            height: 32,
            color: 1,
        }
    }
}

/// One drawing operation on a card base.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Stroke {
    /// Line between two points, inclusive.
    Line {
        /// Start x.
        x0: i32,
        /// Start y.
        y0: i32,
        /// End x.
        x1: i32,
        /// End y.
        y1: i32,
    },
    /// Single pixel.
    Pixel {
        /// X coordinate.
        x: i32,
        /// Y coordinate.
        y: i32,
    },
    /// Text with its top-left corner at `(x, y)`.
    Text {
        /// Text to print.
        text: String,
        /// Left edge.
        x: i32,
        /// Top edge.
        y: i32,
        /// Font.
        font: FontFace,
    },
    /// Text centred horizontally with its top edge at `y`.
    CenteredText {
        /// Text to print.
        text: String,
        /// Top edge.
        y: i32,
        /// Font.
        font: FontFace,
    },
}

/// Drawing surface for card faces.
pub trait Canvas {
    /// Sets one pixel.
    fn set_pixel(&mut self, x: i32, y: i32, color: u8);

    /// Draws a line between two points, inclusive.
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u8);

    /// Prints text with its top-left corner at `(x, y)`.
    fn print(&mut self, text: &str, x: i32, y: i32, color: u8, font: &FontFace);

    /// Prints text centred horizontally.
    fn print_center(&mut self, text: &str, y: i32, color: u8, font: &FontFace);
}

/// Everything needed to draw one card.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardFace {
    /// Image to start from.
    pub base: CardBase,
    /// Color for every stroke.
    pub color: u8,
    /// Drawing operations, in order.
    pub strokes: Vec<Stroke>,
}

impl CardFace {
    /// Draws the strokes onto a canvas holding a copy of [`base`](Self::base).
    pub fn paint<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for stroke in &self.strokes {
            match stroke {
                Stroke::Line { x0, y0, x1, y1 } => {
                    canvas.draw_line(*x0, *y0, *x1, *y1, self.color);
                }
                Stroke::Pixel { x, y } => canvas.set_pixel(*x, *y, self.color),
                Stroke::Text { text, x, y, font } => {
                    canvas.print(text, *x, *y, self.color, font);
                }
                Stroke::CenteredText { text, y, font } => {
                    canvas.print_center(text, *y, self.color, font);
                }
            }
        }
    }
}

/// Glyph printed on a standard card.
pub(crate) fn standard_glyph(card: &Card) -> String {
    match Face::from_index(card.pip()) {
        Some(Face::Ace) => "A".into(),
        Some(Face::Ten) => "10".into(),
        Some(Face::Jack | Face::Joker) => "J".into(),
        Some(Face::Queen) => "Q".into(),
        Some(Face::King) => "K".into(),
        _ => card.face_value().to_string(),
    }
}

fn centered(text: String, font: FontFace) -> Stroke {
    Stroke::CenteredText { text, y: 0, font }
}

/// Strokes for a standard card. The ten gets hand-placed digits wherever the
/// centred "10" would not fit.
pub(crate) fn standard_strokes(card: &Card, size: CardSpriteSize) -> Vec<Stroke> {
    let is_ten = card.pip() == Face::Ten.index();
    let glyph = standard_glyph(card);

    match size {
        CardSpriteSize::Size8x8 if is_ten => alloc::vec![
            Stroke::Line { x0: 0, y0: 0, x1: 0, y1: 4 },
            Stroke::Line { x0: 2, y0: 1, x1: 2, y1: 3 },
            Stroke::Line { x0: 4, y0: 1, x1: 4, y1: 3 },
            Stroke::Pixel { x: 3, y: 0 },
            Stroke::Pixel { x: 3, y: 4 },
        ],
        CardSpriteSize::Size8x8 => alloc::vec![centered(glyph, FontFace::Font5)],
        CardSpriteSize::Size8x16 if is_ten => alloc::vec![
            Stroke::Line { x0: 1, y0: 1, x1: 1, y1: 6 },
            Stroke::Text {
                text: "0".into(),
                x: 2,
                y: 0,
                font: FontFace::Font8,
            },
        ],
        CardSpriteSize::Size8x16 | CardSpriteSize::Size16x16 => {
            alloc::vec![centered(glyph, FontFace::Font8)]
        }
        CardSpriteSize::Size16x32 if is_ten => alloc::vec![
            Stroke::Text {
                text: "1".into(),
                x: -1,
                y: 0,
                font: FontFace::DoubledFont8,
            },
            Stroke::Text {
                text: "0".into(),
                x: 5,
                y: 0,
                font: FontFace::DoubledFont8,
            },
        ],
        CardSpriteSize::Size16x32 | CardSpriteSize::Size32x32 => {
            alloc::vec![centered(glyph, FontFace::DoubledFont8)]
        }
    }
}

/// Strokes for a custom card: its glyph, centred.
pub(crate) fn custom_strokes(glyph: &str, font: &FontFace) -> Vec<Stroke> {
    alloc::vec![centered(glyph.into(), font.clone())]
}
