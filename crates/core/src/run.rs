use crate::{
    CardFactory, CardId, ConfigError, DiscardPile, DrawPile, EventBus, GameConfig, Hand, Mode,
    RngState, ScoreRecorder, Shop, UpgradeLedger,
};
use std::fmt;
use thiserror::Error;

mod hand;
mod shop;
mod state;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GameError {
    #[error("{method} may only be called in mode {required}, but the game is in mode {actual}")]
    InvalidModeCall {
        method: &'static str,
        required: Mode,
        actual: Mode,
    },
    #[error("index {index} is out of range, valid indices are 0 to {bound} (exclusive)")]
    IndexOutOfRange { index: usize, bound: usize },
    #[error("{card} is not in hand")]
    CardNotInHand { card: String },
    #[error("invalid constructor argument: {0}")]
    InvalidConstructorArgument(#[from] ConfigError),
}

/// One game from the first shop to the final score.
///
/// The session owns every card container. Each query and command is valid in a
/// single [`Mode`]; calling it in another mode fails with
/// [`GameError::InvalidModeCall`] and leaves the session untouched.
pub struct GameSession {
    config: GameConfig,
    factory: Box<dyn CardFactory>,
    rng: RngState,
    mode: Mode,
    round: u32,
    max_rounds: u32,
    credits: f64,
    bought_card: bool,
    upgrades: UpgradeLedger,
    shop: Shop,
    hand: Hand,
    draw_pile: DrawPile,
    discard_piles: Vec<DiscardPile>,
    next_card_id: CardId,
    recorder: Option<Box<dyn ScoreRecorder>>,
    final_rank: Option<usize>,
    events: EventBus,
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("mode", &self.mode)
            .field("round", &self.round)
            .field("max_rounds", &self.max_rounds)
            .field("credits", &self.credits)
            .field("hand", &self.hand.len())
            .field("draw_pile", &self.draw_pile.len())
            .field("stacks", &self.discard_piles.len())
            .field("seed", &self.rng.seed())
            .finish_non_exhaustive()
    }
}
