use super::*;
use crate::*;
use tracing::{debug, info};

impl GameSession {
    pub fn is_shop_empty(&self) -> Result<bool, GameError> {
        self.require("is_shop_empty", Mode::Shopping)?;
        Ok(self.shop.is_empty())
    }

    pub fn shop_item_count(&self) -> Result<usize, GameError> {
        self.require("shop_item_count", Mode::Shopping)?;
        Ok(self.shop.len())
    }

    pub fn shop_item_description(&self, index: usize) -> Result<String, GameError> {
        self.require("shop_item_description", Mode::Shopping)?;
        Ok(self.shop_item(index)?.listing())
    }

    pub fn shop_item_price(&self, index: usize) -> Result<u32, GameError> {
        self.require("shop_item_price", Mode::Shopping)?;
        Ok(self.shop_item(index)?.price())
    }

    /// Buys the offer at `index`. Returns `Ok(false)` without touching anything
    /// when the credits do not cover the price, or when the offer is a card
    /// and the owned cards already fill the hand capacity.
    pub fn buy(&mut self, index: usize) -> Result<bool, GameError> {
        self.require("buy", Mode::Shopping)?;
        let item = self.shop_item(index)?;
        let price = item.price();
        if f64::from(price) > self.credits {
            return Ok(false);
        }
        if item.is_card() && self.draw_pile.len() + self.hand.len() >= self.hand.capacity() {
            return Ok(false);
        }
        let Some(item) = self.shop.take(index) else {
            return Ok(false);
        };
        let description = item.describe();
        match item {
            ShopItem::Card(card) => {
                self.draw_pile.add(card);
                self.bought_card = true;
            }
            ShopItem::Upgrade(upgrade) => self.apply_upgrade(upgrade.kind),
        }
        self.credits -= f64::from(price);
        debug!(%description, price, credits = self.credits, "item bought");
        self.events.push(Event::ItemBought {
            description,
            price,
            credits: self.credits,
        });
        Ok(true)
    }

    pub fn is_draw_pile_empty(&self) -> Result<bool, GameError> {
        self.require("is_draw_pile_empty", Mode::Shopping)?;
        Ok(self.draw_pile.is_empty())
    }

    /// Leaves the shop and deals the hand. Does nothing until the first card
    /// of the game has been bought.
    pub fn end_shopping(&mut self) -> Result<(), GameError> {
        self.require("end_shopping", Mode::Shopping)?;
        if !self.bought_card {
            return Ok(());
        }
        self.shop.clear();
        self.flush_discards();
        self.draw_pile.shuffle(&mut self.rng);
        self.refill_hand();
        self.mode = Mode::Playing;
        info!(round = self.round, hand = self.hand.len(), "playing started");
        self.events.push(Event::PlayStarted {
            round: self.round,
            hand: self.hand.len(),
        });
        if self.round >= self.max_rounds && self.hand.is_empty() {
            self.finish();
        }
        Ok(())
    }

    fn shop_item(&self, index: usize) -> Result<&ShopItem, GameError> {
        self.shop.get(index).ok_or(GameError::IndexOutOfRange {
            index,
            bound: self.shop.len(),
        })
    }

    fn apply_upgrade(&mut self, kind: UpgradeKind) {
        match kind {
            UpgradeKind::MoreHand => self.hand.grow(),
            UpgradeKind::MoreShop => self.shop.grow(),
            UpgradeKind::MoreStacks => self.discard_piles.push(DiscardPile::new()),
        }
        let times_purchased = self.upgrades.record(kind);
        self.events.push(Event::UpgradeApplied {
            kind,
            times_purchased,
        });
    }
}
