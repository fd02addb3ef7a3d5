use super::*;
use crate::*;
use tracing::info;

impl GameSession {
    pub fn new(
        max_rounds: u32,
        factory: Box<dyn CardFactory>,
        rng: RngState,
    ) -> Result<Self, GameError> {
        Self::with_config(max_rounds, GameConfig::default(), factory, rng)
    }

    pub fn with_config(
        max_rounds: u32,
        config: GameConfig,
        factory: Box<dyn CardFactory>,
        rng: RngState,
    ) -> Result<Self, GameError> {
        if max_rounds == 0 {
            return Err(ConfigError::ZeroRounds.into());
        }
        config.validate()?;
        let discard_piles = (0..config.discard_piles).map(|_| DiscardPile::new()).collect();
        let mut session = Self {
            factory,
            rng,
            mode: Mode::Shopping,
            round: 1,
            max_rounds,
            credits: config.starting_credits,
            bought_card: false,
            upgrades: UpgradeLedger::default(),
            shop: Shop::new(config.shop.card_slots),
            hand: Hand::with_capacity(config.hand_capacity),
            draw_pile: DrawPile::new(),
            discard_piles,
            next_card_id: 1,
            recorder: None,
            final_rank: None,
            events: EventBus::default(),
            config,
        };
        info!(
            max_rounds,
            seed = session.rng.seed(),
            credits = session.credits,
            "game started"
        );
        session.restock_shop();
        Ok(session)
    }

    /// Collaborator told about the final credits when the game ends.
    pub fn set_score_recorder(&mut self, recorder: Option<Box<dyn ScoreRecorder>>) {
        self.recorder = recorder;
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn credits(&self) -> f64 {
        self.credits
    }

    pub fn current_round(&self) -> u32 {
        self.round
    }

    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    pub fn stacks_count(&self) -> usize {
        self.discard_piles.len()
    }

    pub fn discard_top_card(&self, index: usize) -> Option<&Card> {
        self.discard_piles.get(index).and_then(DiscardPile::top)
    }

    pub fn hand_capacity(&self) -> usize {
        self.hand.capacity()
    }

    pub fn shop_capacity(&self) -> usize {
        self.shop.capacity()
    }

    /// Cards bought so far, wherever they currently are.
    pub fn owned_card_count(&self) -> usize {
        self.hand.len()
            + self.draw_pile.len()
            + self
                .discard_piles
                .iter()
                .map(DiscardPile::len)
                .sum::<usize>()
    }

    pub fn has_bought_card(&self) -> bool {
        self.bought_card
    }

    pub fn upgrade_purchases(&self, kind: UpgradeKind) -> u32 {
        self.upgrades.purchases(kind)
    }

    /// Rank reported by the score recorder once the game has ended.
    pub fn final_rank(&self) -> Option<usize> {
        self.final_rank
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn drain_events(&mut self) -> Vec<Event> {
        self.events.drain().collect()
    }

    pub(super) fn require(&self, method: &'static str, required: Mode) -> Result<(), GameError> {
        if self.mode == required {
            Ok(())
        } else {
            Err(GameError::InvalidModeCall {
                method,
                required,
                actual: self.mode,
            })
        }
    }

    pub(super) fn add_credits(&mut self, delta: f64) {
        if self.credits + delta >= 0.0 {
            self.credits += delta;
        }
    }

    pub(super) fn restock_shop(&mut self) {
        self.shop.restock(
            &self.upgrades,
            self.credits,
            &self.config.shop,
            self.factory.as_ref(),
            &mut self.rng,
            &mut self.next_card_id,
        );
        self.events.push(Event::ShopRestocked {
            round: self.round,
            offers: self.shop.len(),
        });
    }

    pub(super) fn flush_discards(&mut self) {
        for pile in &mut self.discard_piles {
            self.draw_pile.add_all(pile.take_all());
        }
    }

    pub(super) fn refill_hand(&mut self) {
        while !self.hand.is_full() {
            let Some(card) = self.draw_pile.draw() else {
                break;
            };
            if let Err(card) = self.hand.add(card) {
                self.draw_pile.add(card);
                break;
            }
        }
    }

    pub(super) fn advance_round(&mut self) {
        self.round += 1;
        self.flush_discards();
        self.mode = Mode::Shopping;
        info!(round = self.round, credits = self.credits, "round started");
        self.events.push(Event::RoundAdvanced { round: self.round });
        self.restock_shop();
    }

    pub(super) fn finish(&mut self) {
        if self.mode == Mode::End {
            return;
        }
        self.mode = Mode::End;
        let credits = self.credits;
        let rank = self
            .recorder
            .as_mut()
            .and_then(|recorder| recorder.record(credits));
        self.final_rank = rank;
        info!(credits, rank = ?rank, "game ended");
        self.events.push(Event::GameEnded { credits, rank });
    }
}
