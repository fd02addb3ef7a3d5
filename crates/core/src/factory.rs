use crate::{Card, CardError, CardKind, CardType, RngState, Shape};

/// Maximum nesting of Kombi cards produced by random generation.
pub const MAX_RANDOM_KOMBI_DEPTH: usize = 3;

/// Source of new cards for the shop.
pub trait CardFactory {
    fn create_random(&self, rng: &mut RngState) -> Card;

    /// `None` for either argument is rejected with [`CardError::NullArgument`].
    fn create(
        &self,
        kind: Option<&str>,
        shape: Option<Shape>,
        rng: &mut RngState,
    ) -> Result<Card, CardError>;

    fn combine(&self, first: Card, second: Card) -> Result<Card, CardError> {
        Card::combine(first, second)
    }
}

#[derive(Debug, Clone)]
pub struct StandardCardFactory {
    kinds: Vec<CardType>,
}

impl StandardCardFactory {
    pub fn all() -> Self {
        Self::with_kinds(CardType::ALL.to_vec())
    }

    pub fn chance_only() -> Self {
        Self::with_kinds(vec![CardType::Chance])
    }

    /// An empty kind set falls back to Chance.
    pub fn with_kinds(kinds: Vec<CardType>) -> Self {
        let kinds = if kinds.is_empty() {
            vec![CardType::Chance]
        } else {
            kinds
        };
        Self { kinds }
    }

    pub fn build(&self, kind: CardType, shape: Shape, rng: &mut RngState) -> Card {
        self.build_at_depth(kind, shape, rng, 0)
    }

    fn build_at_depth(
        &self,
        kind: CardType,
        shape: Shape,
        rng: &mut RngState,
        depth: usize,
    ) -> Card {
        let kind = match kind {
            CardType::Chance => CardKind::Chance,
            CardType::Paar => CardKind::Paar,
            CardType::Tripel => CardKind::Tripel,
            CardType::Quadrupel => CardKind::Quadrupel,
            CardType::Kombi => {
                let first = self.random_child(shape, rng, depth + 1);
                let second = self.random_child(shape, rng, depth + 1);
                CardKind::Kombi(Box::new(first), Box::new(second))
            }
        };
        Card::from_parts(kind, shape)
    }

    fn random_child(&self, shape: Shape, rng: &mut RngState, depth: usize) -> Card {
        let kind = if depth >= MAX_RANDOM_KOMBI_DEPTH {
            let simple = [
                CardType::Chance,
                CardType::Paar,
                CardType::Tripel,
                CardType::Quadrupel,
            ];
            simple[rng.pick_index(simple.len())]
        } else {
            CardType::ALL[rng.pick_index(CardType::ALL.len())]
        };
        self.build_at_depth(kind, shape, rng, depth)
    }
}

impl Default for StandardCardFactory {
    fn default() -> Self {
        Self::all()
    }
}

impl CardFactory for StandardCardFactory {
    fn create_random(&self, rng: &mut RngState) -> Card {
        let kind = self.kinds[rng.pick_index(self.kinds.len())];
        let shape = Shape::random(rng);
        self.build(kind, shape, rng)
    }

    fn create(
        &self,
        kind: Option<&str>,
        shape: Option<Shape>,
        rng: &mut RngState,
    ) -> Result<Card, CardError> {
        let kind = kind.ok_or(CardError::NullArgument("kind"))?;
        let shape = shape.ok_or(CardError::NullArgument("shape"))?;
        let kind: CardType = kind.parse()?;
        Ok(self.build(kind, shape, rng))
    }
}
