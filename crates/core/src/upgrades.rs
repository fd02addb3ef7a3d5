use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeKind {
    MoreHand,
    MoreShop,
    MoreStacks,
}

impl UpgradeKind {
    /// Order in which the fixed upgrade slots are stocked.
    pub const ALL: [UpgradeKind; 3] = [
        UpgradeKind::MoreShop,
        UpgradeKind::MoreStacks,
        UpgradeKind::MoreHand,
    ];

    pub fn description(self) -> &'static str {
        match self {
            UpgradeKind::MoreHand => "Additional hand card",
            UpgradeKind::MoreShop => "Additional card in shop",
            UpgradeKind::MoreStacks => "Additional play stack",
        }
    }

    fn slot(self) -> usize {
        match self {
            UpgradeKind::MoreHand => 0,
            UpgradeKind::MoreShop => 1,
            UpgradeKind::MoreStacks => 2,
        }
    }
}

/// Price of the next purchase of an upgrade already bought `times_purchased` times.
pub fn upgrade_price(times_purchased: u32) -> u32 {
    times_purchased
        .saturating_mul(times_purchased)
        .saturating_add(1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Upgrade {
    pub kind: UpgradeKind,
    pub price: u32,
}

impl Upgrade {
    pub fn priced(kind: UpgradeKind, ledger: &UpgradeLedger) -> Self {
        Self {
            kind,
            price: upgrade_price(ledger.purchases(kind)),
        }
    }
}

/// Purchase counters per upgrade kind, kept for the whole game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeLedger {
    counts: [u32; 3],
}

impl UpgradeLedger {
    pub fn purchases(&self, kind: UpgradeKind) -> u32 {
        self.counts[kind.slot()]
    }

    pub fn record(&mut self, kind: UpgradeKind) -> u32 {
        let count = &mut self.counts[kind.slot()];
        *count = count.saturating_add(1);
        *count
    }

    pub fn offers(&self) -> [Upgrade; 3] {
        UpgradeKind::ALL.map(|kind| Upgrade::priced(kind, self))
    }
}
