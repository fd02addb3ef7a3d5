use crate::UpgradeKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    ShopRestocked {
        round: u32,
        offers: usize,
    },
    ItemBought {
        description: String,
        price: u32,
        credits: f64,
    },
    UpgradeApplied {
        kind: UpgradeKind,
        times_purchased: u32,
    },
    PlayStarted {
        round: u32,
        hand: usize,
    },
    CardPlayed {
        card: String,
        stack: usize,
        gained: f64,
        credits: f64,
    },
    RoundAdvanced {
        round: u32,
    },
    GameEnded {
        credits: f64,
        rank: Option<usize>,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
