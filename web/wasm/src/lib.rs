use cardshoe::{
    Card, CardFace, CardSpriteSize, CustomDeck, DeckConfig, DeckType, Shoe, ShoeState,
    ShuffleMode, StandardDeck, StandardKind, Stroke,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmShoe {
    shoe: Shoe,
}

#[wasm_bindgen]
impl WasmShoe {
    #[wasm_bindgen(constructor)]
    pub fn new(
        deck_type: &str,
        num_decks: u8,
        jokers: u8,
        ace_high: bool,
        faces_ten: bool,
        seed: u32,
    ) -> Result<WasmShoe, JsValue> {
        let kind = kind_from_str(deck_type)?;
        let deck = StandardDeck::default()
            .with_kind(kind)
            .with_jokers(jokers)
            .with_ace_high(ace_high)
            .with_faces_ten(faces_ten);
        Self::build(deck.into(), num_decks, seed)
    }

    pub fn custom(config: JsValue, num_decks: u8, seed: u32) -> Result<WasmShoe, JsValue> {
        let config: JsCustomDeck =
            serde_wasm_bindgen::from_value(config).map_err(js_err)?;
        Self::build(config.into_deck().into(), num_decks, seed)
    }

    pub fn set_fisher_yates(&mut self, enabled: bool) {
        let mode = if enabled {
            ShuffleMode::FisherYates
        } else {
            ShuffleMode::Legacy
        };
        self.shoe.set_shuffle_mode(mode);
    }

    pub fn next_card(&mut self) -> Result<JsValue, JsValue> {
        match self.shoe.next_card() {
            Some(card) => to_js_value(&JsCard::from(&card)),
            None => Ok(JsValue::NULL),
        }
    }

    pub fn has_more_cards(&self) -> bool {
        self.shoe.has_more_cards()
    }

    pub fn reset(&mut self) {
        self.shoe.reset();
    }

    pub fn shuffle(&mut self) {
        self.shoe.shuffle();
    }

    pub fn set_ace_high(&mut self, ace_high: bool) {
        self.shoe.set_ace_high(ace_high);
    }

    pub fn card_face(&self, card_id: u32, size: &str) -> Result<JsValue, JsValue> {
        let size = size_from_str(size)?;
        let id = cardshoe::CardId::from_raw(card_id);
        if !self.shoe.deck().card_ids().contains(&id) {
            return Err(JsValue::from_str("card is not part of this deck"));
        }
        let card = self.shoe.deck().card(id);
        to_js_value(&JsCardFace::from(self.shoe.card_face(&card, size)))
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = Snapshot {
            deck_type: deck_type_to_str(self.shoe.deck_type()),
            state: state_to_str(self.shoe.state()),
            num_decks: self.shoe.num_decks(),
            num_cards: self.shoe.num_cards() as u32,
            num_cards_remaining: self.shoe.num_cards_remaining() as u32,
            ace_high: self.shoe.is_ace_high(),
            faces_ten: self.shoe.are_faces_ten(),
        };
        to_js_value(&snapshot)
    }
}

impl WasmShoe {
    fn build(config: DeckConfig, num_decks: u8, seed: u32) -> Result<Self, JsValue> {
        Shoe::try_new(config, num_decks, u64::from(seed))
            .map(|shoe| Self { shoe })
            .map_err(js_err)
    }
}

#[derive(Deserialize)]
struct JsCustomDeck {
    suit_names: Vec<String>,
    #[serde(default)]
    suit_colors: Vec<u8>,
    pip_names: Vec<String>,
    pip_values: Vec<i32>,
    #[serde(default = "one")]
    pip_repeats: u8,
    pip_glyphs: Option<Vec<String>>,
    #[serde(default)]
    unsuited_pips: Vec<u8>,
}

const fn one() -> u8 {
    1
}

impl JsCustomDeck {
    fn into_deck(self) -> CustomDeck {
        let deck = CustomDeck::new(self.suit_names, self.pip_names, self.pip_values)
            .with_suit_colors(self.suit_colors)
            .with_pip_repeats(self.pip_repeats)
            .with_unsuited_pips(self.unsuited_pips);
        match self.pip_glyphs {
            Some(glyphs) => deck.with_pip_glyphs(glyphs),
            None => deck,
        }
    }
}

#[derive(Serialize)]
struct Snapshot {
    deck_type: &'static str,
    state: &'static str,
    num_decks: u8,
    num_cards: u32,
    num_cards_remaining: u32,
    ace_high: bool,
    faces_ten: bool,
}

#[derive(Serialize)]
struct JsCard {
    id: u32,
    name: String,
    pip: u8,
    pip_name: String,
    face_value: i32,
    suit: u32,
    suit_name: String,
    ace_high: bool,
}

impl From<&Card> for JsCard {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id().raw(),
            name: card.name().into(),
            pip: card.pip(),
            pip_name: card.pip_name().into(),
            face_value: card.face_value(),
            suit: card.suit(),
            suit_name: card.suit_name().into(),
            ace_high: card.is_ace_high(),
        }
    }
}

#[derive(Serialize)]
struct JsCardFace {
    base: String,
    color: u8,
    strokes: Vec<JsStroke>,
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum JsStroke {
    Line { x0: i32, y0: i32, x1: i32, y1: i32 },
    Pixel { x: i32, y: i32 },
    Text { text: String, x: i32, y: i32, font: String },
    CenteredText { text: String, y: i32, font: String },
}

impl From<CardFace> for JsCardFace {
    fn from(face: CardFace) -> Self {
        Self {
            base: format!("{:?}", face.base),
            color: face.color,
            strokes: face.strokes.into_iter().map(JsStroke::from).collect(),
        }
    }
}

impl From<Stroke> for JsStroke {
    fn from(stroke: Stroke) -> Self {
        match stroke {
            Stroke::Line { x0, y0, x1, y1 } => Self::Line { x0, y0, x1, y1 },
            Stroke::Pixel { x, y } => Self::Pixel { x, y },
            Stroke::Text { text, x, y, font } => Self::Text {
                text,
                x,
                y,
                font: format!("{font:?}"),
            },
            Stroke::CenteredText { text, y, font } => Self::CenteredText {
                text,
                y,
                font: format!("{font:?}"),
            },
        }
    }
}

fn kind_from_str(kind: &str) -> Result<StandardKind, JsValue> {
    match kind {
        "poker" => Ok(StandardKind::Poker),
        "pinochle" => Ok(StandardKind::Pinochle),
        "euchre" => Ok(StandardKind::Euchre),
        other => Err(JsValue::from_str(&format!("unknown deck type: {other}"))),
    }
}

fn size_from_str(size: &str) -> Result<CardSpriteSize, JsValue> {
    match size {
        "8x8" => Ok(CardSpriteSize::Size8x8),
        "8x16" => Ok(CardSpriteSize::Size8x16),
        "16x16" => Ok(CardSpriteSize::Size16x16),
        "16x32" => Ok(CardSpriteSize::Size16x32),
        "32x32" => Ok(CardSpriteSize::Size32x32),
        other => Err(JsValue::from_str(&format!("unknown sprite size: {other}"))),
    }
}

fn deck_type_to_str(deck_type: DeckType) -> &'static str {
    match deck_type {
        DeckType::Poker => "Poker",
        DeckType::Pinochle => "Pinochle",
        DeckType::Euchre => "Euchre",
        DeckType::Custom => "Custom",
    }
}

fn state_to_str(state: ShoeState) -> &'static str {
    match state {
        ShoeState::Fresh => "Fresh",
        ShoeState::Dealing => "Dealing",
        ShoeState::Exhausted => "Exhausted",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
