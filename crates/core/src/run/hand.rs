use super::*;
use crate::*;
use tracing::debug;

impl GameSession {
    pub fn hand_cards_count(&self) -> Result<usize, GameError> {
        self.require("hand_cards_count", Mode::Playing)?;
        Ok(self.hand.len())
    }

    pub fn hand_card(&self, index: usize) -> Result<&Card, GameError> {
        self.require("hand_card", Mode::Playing)?;
        self.hand.get(index).ok_or(GameError::IndexOutOfRange {
            index,
            bound: self.hand.len(),
        })
    }

    /// Top shape of every discard pile in pile order, `None` for an empty pile.
    pub fn top_shapes(&self) -> Result<Vec<Option<Shape>>, GameError> {
        self.require("top_shapes", Mode::Playing)?;
        Ok(top_shapes(&self.discard_piles))
    }

    /// Plays `card` (located in the hand by id) onto pile `stack_index` and
    /// credits its score against the piles after placement.
    pub fn play(&mut self, card: &Card, stack_index: usize) -> Result<(), GameError> {
        self.require("play", Mode::Playing)?;
        if !self.hand.contains(card.id()) {
            return Err(GameError::CardNotInHand {
                card: card.to_string(),
            });
        }
        let bound = self.discard_piles.len();
        if stack_index >= bound {
            return Err(GameError::IndexOutOfRange {
                index: stack_index,
                bound,
            });
        }
        let Some(played) = self.hand.remove(card.id()) else {
            return Err(GameError::CardNotInHand {
                card: card.to_string(),
            });
        };
        let description = played.to_string();
        self.discard_piles[stack_index].push(played);
        let gained = self.discard_piles[stack_index]
            .top()
            .map(|top| score_against_piles(top, &self.discard_piles))
            .unwrap_or(0.0);
        self.add_credits(gained);
        debug!(card = %description, stack = stack_index, gained, credits = self.credits, "card played");
        self.events.push(Event::CardPlayed {
            card: description,
            stack: stack_index,
            gained,
            credits: self.credits,
        });

        if self.round >= self.max_rounds && self.hand.is_empty() {
            self.finish();
            return Ok(());
        }
        self.refill_hand();
        if self.hand.is_empty() {
            if self.round < self.max_rounds {
                self.advance_round();
            } else {
                self.finish();
            }
        }
        Ok(())
    }

    /// Plays the hand card at `hand_index`.
    pub fn play_at(&mut self, hand_index: usize, stack_index: usize) -> Result<(), GameError> {
        let card = self.hand_card(hand_index)?.clone();
        self.play(&card, stack_index)
    }
}
