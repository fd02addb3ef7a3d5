use crate::{Card, CardFactory, CardId, RngState, ShopRule, Upgrade, UpgradeKind, UpgradeLedger};
use tracing::debug;

/// Anything the shop can sell.
pub trait Purchasable {
    fn price(&self) -> u32;
    fn describe(&self) -> String;
}

impl Purchasable for Card {
    fn price(&self) -> u32 {
        Card::price(self)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl Purchasable for Upgrade {
    fn price(&self) -> u32 {
        self.price
    }

    fn describe(&self) -> String {
        self.kind.description().to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShopItem {
    Card(Card),
    Upgrade(Upgrade),
}

impl ShopItem {
    /// Line shown in the shop list: price in parentheses, then the item.
    pub fn listing(&self) -> String {
        format!("({}) {}", self.price(), self.describe())
    }

    pub fn is_card(&self) -> bool {
        matches!(self, ShopItem::Card(_))
    }
}

impl Purchasable for ShopItem {
    fn price(&self) -> u32 {
        match self {
            ShopItem::Card(card) => Purchasable::price(card),
            ShopItem::Upgrade(upgrade) => upgrade.price,
        }
    }

    fn describe(&self) -> String {
        match self {
            ShopItem::Card(card) => card.describe(),
            ShopItem::Upgrade(upgrade) => upgrade.describe(),
        }
    }
}

/// `round(credits / divisor * variation) + jitter`, never below the minimum price.
pub fn card_price(credits: f64, rule: &ShopRule, rng: &mut RngState) -> u32 {
    let variation = rng.uniform_f64(rule.price_variation_min, rule.price_variation_max);
    let jitter = i64::from(rule.price_jitter);
    let jitter = rng.uniform_i64(-jitter, jitter);
    let base = (credits.max(0.0) / rule.price_divisor * variation).round() as i64;
    let price = base.saturating_add(jitter).max(i64::from(rule.min_price));
    u32::try_from(price).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone)]
pub struct Shop {
    items: Vec<ShopItem>,
    card_slots: usize,
}

impl Shop {
    pub fn new(card_slots: usize) -> Self {
        Self {
            items: Vec::new(),
            card_slots,
        }
    }

    /// Takes effect on the next restock.
    pub fn grow(&mut self) {
        self.card_slots += 1;
    }

    pub fn capacity(&self) -> usize {
        self.card_slots + UpgradeKind::ALL.len()
    }

    /// Replaces every offer: the three upgrades first, then fresh cards priced
    /// from `credits`. New cards take ids from `next_id`.
    pub fn restock(
        &mut self,
        ledger: &UpgradeLedger,
        credits: f64,
        rule: &ShopRule,
        factory: &dyn CardFactory,
        rng: &mut RngState,
        next_id: &mut CardId,
    ) {
        self.items.clear();
        self.items
            .extend(ledger.offers().into_iter().map(ShopItem::Upgrade));
        while self.items.len() < self.capacity() {
            let mut card = factory.create_random(rng);
            card.assign_id(*next_id);
            *next_id = next_id.saturating_add(1);
            card.set_price(card_price(credits, rule, rng));
            self.items.push(ShopItem::Card(card));
        }
        debug!(
            offers = self.items.len(),
            credits, "shop restocked"
        );
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ShopItem> {
        self.items.get(index)
    }

    /// Removes the offer; later offers move up one slot.
    pub fn take(&mut self, index: usize) -> Option<ShopItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn items(&self) -> &[ShopItem] {
        &self.items
    }
}
