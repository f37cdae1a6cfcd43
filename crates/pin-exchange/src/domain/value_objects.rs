//! Value objects for the pin exchange.

use serde::{Deserialize, Serialize};

/// Snapshot of the exchange pool counters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolStatus {
    /// Offers currently waiting to be redeemed.
    pub live_offers: usize,
    /// Distinct codes the active code source can produce.
    pub code_space: u64,
    /// Offers created since the pool started.
    pub offers_created: u64,
    /// Offers consumed by a successful redemption.
    pub offers_redeemed: u64,
    /// Redemption attempts that found no live offer.
    pub redemptions_rejected: u64,
    /// Generated codes discarded because they were already live.
    pub collisions: u64,
}

impl PoolStatus {
    /// Fraction of the code space occupied by live offers.
    pub fn occupancy(&self) -> f64 {
        if self.code_space == 0 {
            return 1.0;
        }
        self.live_offers as f64 / self.code_space as f64
    }
}
