use jokerpoker::{Card, Category, Deck, DeckOptions, Hand, Outcome, Rank, Suit};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmDealer {
    deck: Deck,
    hand: Option<Hand>,
    exchanged: bool,
}

#[wasm_bindgen]
impl WasmDealer {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, jokers: u8) -> Self {
        Self {
            deck: Deck::new(DeckOptions::default().with_jokers(jokers), seed as u64),
            hand: None,
            exchanged: false,
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.deck = Deck::new(self.deck.options, seed as u64);
        self.hand = None;
        self.exchanged = false;
    }

    pub fn deal(&mut self) -> Result<JsValue, JsValue> {
        let hand = Hand::deal(&self.deck).map_err(js_err)?;
        let snapshot = JsHand::from(&hand);
        self.hand = Some(hand);
        self.exchanged = false;
        to_js_value(&snapshot)
    }

    /// Exchanges the cards at the given positions. Allowed once per deal.
    pub fn exchange(&mut self, positions: Vec<u32>) -> Result<JsValue, JsValue> {
        if self.exchanged {
            return Err(JsValue::from_str("cards already exchanged"));
        }
        let hand = self.require_hand()?;

        let positions: Vec<usize> = positions.into_iter().map(|p| p as usize).collect();
        let hand = hand.exchange(&positions, &self.deck).map_err(js_err)?;
        let snapshot = JsHand::from(&hand);
        self.hand = Some(hand);
        self.exchanged = true;
        to_js_value(&snapshot)
    }

    /// Deals a rival hand and compares the current hand against it.
    pub fn showdown(&self) -> Result<JsValue, JsValue> {
        let hand = self.require_hand()?;
        let rival = Hand::deal(&self.deck).map_err(js_err)?;

        let result = JsShowdown {
            hand: JsHand::from(hand),
            outcome: outcome_to_str(hand.versus(&rival)),
            rival: JsHand::from(&rival),
        };
        to_js_value(&result)
    }

    pub fn cards_remaining(&self) -> u32 {
        self.deck.remaining() as u32
    }
}

impl WasmDealer {
    fn require_hand(&self) -> Result<&Hand, JsValue> {
        self.hand
            .as_ref()
            .ok_or_else(|| JsValue::from_str("no hand dealt"))
    }
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: &'static str,
    wild: bool,
}

impl From<&Card> for JsCard {
    fn from(card: &Card) -> Self {
        Self {
            suit: suit_to_str(card.suit),
            rank: rank_to_str(card.rank),
            wild: card.is_wildcard(),
        }
    }
}

#[derive(Serialize)]
struct JsHand {
    cards: Vec<JsCard>,
    category: &'static str,
    label: &'static str,
    score: u32,
    jokers: u32,
}

impl From<&Hand> for JsHand {
    fn from(hand: &Hand) -> Self {
        Self {
            cards: hand.cards().iter().map(JsCard::from).collect(),
            category: category_to_str(hand.category()),
            label: hand.category().label(),
            score: hand.score(),
            jokers: hand.wildcard_count() as u32,
        }
    }
}

#[derive(Serialize)]
struct JsShowdown {
    hand: JsHand,
    rival: JsHand,
    outcome: &'static str,
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Wildcard => "Wildcard",
        Suit::Spade => "Spade",
        Suit::Heart => "Heart",
        Suit::Club => "Club",
        Suit::Diamond => "Diamond",
    }
}

fn rank_to_str(rank: Rank) -> &'static str {
    if rank.is_wildcard() { "Wildcard" } else { rank.label() }
}

fn category_to_str(category: Category) -> &'static str {
    match category {
        Category::HighCard => "HighCard",
        Category::OnePair => "OnePair",
        Category::TwoPair => "TwoPair",
        Category::ThreeOfAKind => "ThreeOfAKind",
        Category::Straight => "Straight",
        Category::Flush => "Flush",
        Category::FullHouse => "FullHouse",
        Category::FourOfAKind => "FourOfAKind",
        Category::StraightFlush => "StraightFlush",
        Category::RoyalFlush => "RoyalFlush",
        Category::FiveOfAKind => "FiveOfAKind",
    }
}

fn outcome_to_str(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "Win",
        Outcome::Lose => "Lose",
        Outcome::Draw => "Draw",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
