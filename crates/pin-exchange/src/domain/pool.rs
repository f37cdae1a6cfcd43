//! # Exchange Pool - Live Offers by Code
//!
//! The pool maps every live code to exactly one un-redeemed offer.
//!
//! ## Invariants Enforced
//!
//! - A code is never reused while live: `create_offer()` regenerates on
//!   collision and never overwrites an existing entry.
//! - Redemption is exactly-once: `redeem()` removes the entry it returns;
//!   consumed offers are deleted, not marked.
//! - A failed redemption leaves the pool unchanged.
//!
//! The pool itself is not synchronized. Callers sharing it between
//! participants wrap it in a mutex (see `ExchangeService`).

use super::entities::{ExchangeOffer, OfferCode, ParticipantId, Pin, Timestamp};
use super::errors::{ExchangeError, ExchangeResult};
use super::value_objects::PoolStatus;
use crate::ports::outbound::CodeSource;
use std::collections::HashMap;
use tracing::{debug, error, warn};

/// Default number of draws before giving up on finding a fresh code.
pub const DEFAULT_MAX_CODE_ATTEMPTS: u32 = 64;

/// Registry of live exchange offers.
#[derive(Debug)]
pub struct ExchangePool {
    /// Draws allowed per `create_offer` call.
    max_code_attempts: u32,

    /// Live offers indexed by code.
    offers: HashMap<OfferCode, ExchangeOffer>,

    /// Code space reported by the last code source used.
    code_space: u64,

    offers_created: u64,
    offers_redeemed: u64,
    redemptions_rejected: u64,
    collisions: u64,
}

impl ExchangePool {
    /// Creates an empty pool.
    pub fn new(max_code_attempts: u32) -> Self {
        Self {
            max_code_attempts: max_code_attempts.max(1),
            offers: HashMap::new(),
            code_space: 0,
            offers_created: 0,
            offers_redeemed: 0,
            redemptions_rejected: 0,
            collisions: 0,
        }
    }

    /// Creates a pool with the default attempt budget.
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_MAX_CODE_ATTEMPTS)
    }

    /// Returns the number of live offers.
    pub fn len(&self) -> usize {
        self.offers.len()
    }

    /// Returns true if no offer is live.
    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }

    /// Checks whether `code` is live without mutating the pool.
    pub fn peek(&self, code: &str) -> bool {
        self.offers.contains_key(code)
    }

    /// Gets a live offer by code.
    pub fn get(&self, code: &str) -> Option<&ExchangeOffer> {
        self.offers.get(code)
    }

    /// Creates a live offer for `pin` and returns its code.
    ///
    /// # Errors
    /// - `CodeSpaceExhausted` if every code is taken or no fresh code was
    ///   drawn within the attempt budget. The pool is unchanged.
    pub fn create_offer(
        &mut self,
        pin: Pin,
        offered_by: ParticipantId,
        now: Timestamp,
        codes: &dyn CodeSource,
    ) -> ExchangeResult<OfferCode> {
        let code = self.fresh_code(codes)?;

        debug!(code = %code, pin_id = pin.id, participant = %offered_by, "Offer created");

        let offer = ExchangeOffer::new(code.clone(), pin, offered_by, now);
        self.offers.insert(code.clone(), offer);
        self.offers_created += 1;

        Ok(code)
    }

    /// Draws codes until one is not live.
    fn fresh_code(&mut self, codes: &dyn CodeSource) -> ExchangeResult<OfferCode> {
        self.code_space = codes.code_space();

        if self.offers.len() as u64 >= self.code_space {
            error!(
                live_offers = self.offers.len(),
                code_space = self.code_space,
                "Every code is live, cannot create offer"
            );
            return Err(self.exhausted(0));
        }

        for attempt in 1..=self.max_code_attempts {
            let code = codes.next_code();
            if !self.offers.contains_key(&code) {
                return Ok(code);
            }
            self.collisions += 1;
            warn!(code = %code, attempt, "Generated code already live, regenerating");
        }

        error!(
            attempts = self.max_code_attempts,
            live_offers = self.offers.len(),
            code_space = self.code_space,
            "No fresh code within attempt budget"
        );
        Err(self.exhausted(self.max_code_attempts))
    }

    fn exhausted(&self, attempts: u32) -> ExchangeError {
        ExchangeError::CodeSpaceExhausted {
            attempts,
            live_offers: self.offers.len(),
            code_space: self.code_space,
        }
    }

    /// Consumes the offer under `code` and returns it.
    ///
    /// # Errors
    /// - `NotFound` if `code` is not live. The pool is unchanged.
    pub fn take_offer(&mut self, code: &str) -> ExchangeResult<ExchangeOffer> {
        match self.offers.remove(code) {
            Some(offer) => {
                self.offers_redeemed += 1;
                debug!(code = %offer.code, pin_id = offer.pin.id, "Offer consumed");
                Ok(offer)
            }
            None => {
                self.redemptions_rejected += 1;
                debug!(code, "Redemption rejected, code not live");
                Err(ExchangeError::not_found(code))
            }
        }
    }

    /// Consumes the offer under `code` and returns its pin.
    ///
    /// # Errors
    /// - `NotFound` if `code` is unknown or already redeemed.
    pub fn redeem(&mut self, code: &str) -> ExchangeResult<Pin> {
        self.take_offer(code).map(|offer| offer.pin)
    }

    /// Returns copies of all live offers, ordered by code.
    pub fn live_offers(&self) -> Vec<ExchangeOffer> {
        let mut offers: Vec<_> = self.offers.values().cloned().collect();
        offers.sort_by(|a, b| a.code.cmp(&b.code));
        offers
    }

    /// Returns a counter snapshot.
    pub fn status(&self) -> PoolStatus {
        PoolStatus {
            live_offers: self.offers.len(),
            code_space: self.code_space,
            offers_created: self.offers_created,
            offers_redeemed: self.offers_redeemed,
            redemptions_rejected: self.redemptions_rejected,
            collisions: self.collisions,
        }
    }
}

impl Default for ExchangePool {
    fn default() -> Self {
        Self::with_defaults()
    }
}
