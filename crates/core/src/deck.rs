use crate::{Card, RngState, Shape};

/// Shuffled reserve the hand is refilled from. Cards are drawn from the end.
#[derive(Debug, Default, Clone)]
pub struct DrawPile {
    cards: Vec<Card>,
}

impl DrawPile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn add_all(&mut self, mut cards: Vec<Card>) {
        self.cards.append(&mut cards);
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.cards);
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// A stack cards are played onto; only the top card matters for scoring.
#[derive(Debug, Default, Clone)]
pub struct DiscardPile {
    cards: Vec<Card>,
}

impl DiscardPile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn top_shape(&self) -> Option<Shape> {
        self.top().map(Card::shape)
    }

    /// Empties the pile, handing its cards back in play order.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CardId, CardKind};

    fn card(id: CardId, shape: Shape) -> Card {
        let mut card = Card::new(CardKind::Chance, shape).expect("chance");
        card.assign_id(id);
        card
    }

    #[test]
    fn draw_pops_from_the_end() {
        let mut pile = DrawPile::new();
        pile.add(card(1, Shape::Circle));
        pile.add_all(vec![card(2, Shape::Star), card(3, Shape::Square)]);
        assert_eq!(pile.len(), 3);
        assert_eq!(pile.draw().map(|card| card.id()), Some(3));
        assert_eq!(pile.draw().map(|card| card.id()), Some(2));
        assert_eq!(pile.draw().map(|card| card.id()), Some(1));
        assert!(pile.draw().is_none());
        assert!(pile.is_empty());
    }

    #[test]
    fn shuffle_keeps_every_card() {
        let mut pile = DrawPile::new();
        for id in 1..=20 {
            pile.add(card(id, Shape::Circle));
        }
        pile.shuffle(&mut RngState::from_seed(7));
        let mut ids: Vec<CardId> = pile.cards().iter().map(Card::id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=20).collect::<Vec<_>>());
    }

    #[test]
    fn discard_pile_is_a_stack() {
        let mut pile = DiscardPile::new();
        assert_eq!(pile.top_shape(), None);
        pile.push(card(1, Shape::Circle));
        pile.push(card(2, Shape::Star));
        assert_eq!(pile.top_shape(), Some(Shape::Star));
        let cards = pile.take_all();
        assert_eq!(cards.len(), 2);
        assert!(pile.is_empty());
        assert_eq!(pile.top(), None);
    }
}
