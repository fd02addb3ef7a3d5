use crate::{Card, CardId};

/// Cards currently held. Never holds more than `capacity` cards.
#[derive(Debug, Clone)]
pub struct Hand {
    cards: Vec<Card>,
    capacity: usize,
}

impl Hand {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cards: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn grow(&mut self) {
        self.capacity += 1;
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cards.len() >= self.capacity
    }

    /// Hands the card back when the hand is already full.
    pub fn add(&mut self, card: Card) -> Result<(), Card> {
        if self.is_full() {
            return Err(card);
        }
        self.cards.push(card);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id() == id)
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.position(id).is_some()
    }

    pub fn remove(&mut self, id: CardId) -> Option<Card> {
        let index = self.position(id)?;
        Some(self.cards.remove(index))
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CardKind, Shape};

    fn card(id: CardId) -> Card {
        let mut card = Card::new(CardKind::Tripel, Shape::Square).expect("tripel");
        card.assign_id(id);
        card
    }

    #[test]
    fn add_respects_capacity() {
        let mut hand = Hand::with_capacity(2);
        assert!(hand.add(card(1)).is_ok());
        assert!(hand.add(card(2)).is_ok());
        assert!(hand.is_full());
        let rejected = hand.add(card(3)).unwrap_err();
        assert_eq!(rejected.id(), 3);
        assert_eq!(hand.len(), 2);
        hand.grow();
        assert!(hand.add(rejected).is_ok());
        assert_eq!(hand.capacity(), 3);
    }

    #[test]
    fn remove_by_identity() {
        let mut hand = Hand::with_capacity(4);
        hand.add(card(1)).expect("room");
        hand.add(card(2)).expect("room");
        assert_eq!(hand.remove(2).map(|card| card.id()), Some(2));
        assert!(hand.remove(2).is_none());
        assert!(hand.contains(1));
        assert_eq!(hand.get(0).map(Card::id), Some(1));
    }
}
