//! Game session engine for the card shop game. Keep this crate free of IO and
//! platform concerns.

pub mod cards;
pub mod config;
pub mod deck;
pub mod events;
pub mod factory;
pub mod hand;
pub mod record;
pub mod rng;
pub mod run;
pub mod scoring;
pub mod shop;
pub mod state;
pub mod upgrades;

pub use cards::*;
pub use config::*;
pub use deck::*;
pub use events::*;
pub use factory::*;
pub use hand::*;
pub use record::*;
pub use rng::*;
pub use run::*;
pub use scoring::*;
pub use shop::*;
pub use state::*;
pub use upgrades::*;
