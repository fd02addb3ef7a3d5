use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("max_rounds must be greater than 0")]
    ZeroRounds,
    #[error("starting_credits must be a non-negative number, got {0}")]
    StartingCredits(f64),
    #[error("{0} must be at least 1")]
    ZeroCapacity(&'static str),
    #[error("shop.price_divisor must be positive, got {0}")]
    PriceDivisor(f64),
    #[error("shop price variation range [{min}, {max}] is invalid")]
    PriceVariation { min: f64, max: f64 },
}

/// Card slots and card pricing of the shop. Upgrade slots are fixed and not
/// configured here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShopRule {
    pub card_slots: usize,
    pub price_divisor: f64,
    pub price_variation_min: f64,
    pub price_variation_max: f64,
    pub price_jitter: u32,
    pub min_price: u32,
}

impl Default for ShopRule {
    fn default() -> Self {
        Self {
            card_slots: 5,
            price_divisor: 4.0,
            price_variation_min: 0.8,
            price_variation_max: 1.2,
            price_jitter: 1,
            min_price: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub starting_credits: f64,
    pub hand_capacity: usize,
    pub discard_piles: usize,
    pub shop: ShopRule,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_credits: 10.0,
            hand_capacity: 4,
            discard_piles: 3,
            shop: ShopRule::default(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.starting_credits.is_finite() || self.starting_credits < 0.0 {
            return Err(ConfigError::StartingCredits(self.starting_credits));
        }
        if self.hand_capacity == 0 {
            return Err(ConfigError::ZeroCapacity("hand_capacity"));
        }
        if self.discard_piles == 0 {
            return Err(ConfigError::ZeroCapacity("discard_piles"));
        }
        let shop = &self.shop;
        if shop.card_slots == 0 {
            return Err(ConfigError::ZeroCapacity("shop.card_slots"));
        }
        if !(shop.price_divisor.is_finite() && shop.price_divisor > 0.0) {
            return Err(ConfigError::PriceDivisor(shop.price_divisor));
        }
        if !(shop.price_variation_min.is_finite() && shop.price_variation_max.is_finite())
            || shop.price_variation_min < 0.0
            || shop.price_variation_min > shop.price_variation_max
        {
            return Err(ConfigError::PriceVariation {
                min: shop.price_variation_min,
                max: shop.price_variation_max,
            });
        }
        if shop.min_price == 0 {
            return Err(ConfigError::ZeroCapacity("shop.min_price"));
        }
        Ok(())
    }
}
