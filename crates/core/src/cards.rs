use crate::RngState;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use thiserror::Error;

pub type CardId = u32;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Shape {
    Circle,
    Star,
    Square,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Circle, Shape::Star, Shape::Square];

    pub fn random(rng: &mut RngState) -> Self {
        Self::ALL[rng.pick_index(Self::ALL.len())]
    }

    pub fn name(self) -> &'static str {
        match self {
            Shape::Circle => "Circle",
            Shape::Star => "Star",
            Shape::Square => "Square",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Shape::Circle => '●',
            Shape::Star => '★',
            Shape::Square => '■',
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Shape::Circle => 0,
            Shape::Star => 1,
            Shape::Square => 2,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.symbol())
    }
}

/// Payload-free tag for a card kind, used by factories and the scoring table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CardType {
    Chance,
    Paar,
    Tripel,
    Quadrupel,
    Kombi,
}

impl CardType {
    pub const ALL: [CardType; 5] = [
        CardType::Chance,
        CardType::Paar,
        CardType::Tripel,
        CardType::Quadrupel,
        CardType::Kombi,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CardType::Chance => "Chance",
            CardType::Paar => "Paar",
            CardType::Tripel => "Tripel",
            CardType::Quadrupel => "Quadrupel",
            CardType::Kombi => "Kombi",
        }
    }
}

impl FromStr for CardType {
    type Err = CardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CardError::UnknownKind(trimmed.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CardKind {
    Chance,
    Paar,
    Tripel,
    Quadrupel,
    Kombi(Box<Card>, Box<Card>),
}

impl CardKind {
    pub fn card_type(&self) -> CardType {
        match self {
            CardKind::Chance => CardType::Chance,
            CardKind::Paar => CardType::Paar,
            CardKind::Tripel => CardType::Tripel,
            CardKind::Quadrupel => CardType::Quadrupel,
            CardKind::Kombi(..) => CardType::Kombi,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CardError {
    #[error(
        "cards must share a shape to be combined, got {first_shape} ({first}) and {second_shape} ({second})"
    )]
    IllegalCombination {
        first_shape: Shape,
        first: String,
        second_shape: Shape,
        second: String,
    },
    #[error("unknown card kind: {0}")]
    UnknownKind(String),
    #[error("missing argument: {0}")]
    NullArgument(&'static str),
}

/// A purchasable play-piece. Equality and hashing look at kind and shape only,
/// so two cards bought separately compare equal when they play identically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    #[serde(default)]
    id: CardId,
    shape: Shape,
    kind: CardKind,
    #[serde(default)]
    price: u32,
}

impl Card {
    /// Builds a card of `kind`. A Kombi must carry two children of `shape`.
    pub fn new(kind: CardKind, shape: Shape) -> Result<Self, CardError> {
        if let CardKind::Kombi(first, second) = &kind {
            if first.shape != second.shape || first.shape != shape {
                return Err(CardError::IllegalCombination {
                    first_shape: first.shape,
                    first: first.to_string(),
                    second_shape: second.shape,
                    second: second.to_string(),
                });
            }
        }
        Ok(Self::from_parts(kind, shape))
    }

    /// Kombi children must already share `shape`.
    pub(crate) fn from_parts(kind: CardKind, shape: Shape) -> Self {
        Self {
            id: 0,
            shape,
            kind,
            price: 1,
        }
    }

    pub fn combine(first: Card, second: Card) -> Result<Self, CardError> {
        let shape = first.shape;
        Self::new(CardKind::Kombi(Box::new(first), Box::new(second)), shape)
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn kind(&self) -> &CardKind {
        &self.kind
    }

    pub fn card_type(&self) -> CardType {
        self.kind.card_type()
    }

    pub fn price(&self) -> u32 {
        self.price
    }

    pub fn children(&self) -> Option<(&Card, &Card)> {
        match &self.kind {
            CardKind::Kombi(first, second) => Some((first, second)),
            _ => None,
        }
    }

    pub(crate) fn assign_id(&mut self, id: CardId) {
        if self.id == 0 {
            self.id = id;
        }
    }

    pub(crate) fn set_price(&mut self, price: u32) {
        self.price = price.max(1);
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.kind == other.kind
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.shape.hash(state);
        self.kind.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            CardKind::Kombi(first, second) => write!(f, "Kombi({first} + {second})"),
            kind => write!(f, "{} {}", kind.card_type().name(), self.shape),
        }
    }
}
