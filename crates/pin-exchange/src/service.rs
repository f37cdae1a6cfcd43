//! Exchange Service - offer/redeem orchestration
//!
//! Coordinates participant inventories with the shared exchange pool.
//!
//! ## Locking
//!
//! - The pool sits behind one `Mutex`; `create_offer` and `take_offer` are
//!   mutually exclusive, so concurrent redemptions of one code resolve to a
//!   single winner.
//! - `redeem_code` releases the pool lock before appending to the receiving
//!   inventory. The consumed offer is owned by the winning call at that
//!   point, so no other caller can observe or grant it.
//! - `offer_pin` holds the source inventory's write lock while inserting
//!   into the pool. Lock order is always inventory → pool.

use crate::adapters::{
    ExchangeEvent, ExchangeEventPublisher, NoOpPublisher, PublishError, RandomCodeSource,
};
use crate::config::{ConfigError, ExchangeConfig};
use crate::domain::{
    Catalog, ExchangeError, ExchangeOffer, ExchangePool, ExchangeResult, Inventory, OfferCode,
    OfferPolicy, ParticipantId, Pin, PoolStatus,
};
use crate::ports::inbound::PinExchangeApi;
use crate::ports::outbound::{CodeSource, SystemTimeSource, TimeSource};
use crate::session::InventoryHandle;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Exchange service shared by every participant session.
pub struct ExchangeService<C = RandomCodeSource, P = NoOpPublisher, T = SystemTimeSource>
where
    C: CodeSource,
    P: ExchangeEventPublisher,
    T: TimeSource,
{
    config: ExchangeConfig,
    catalog: Catalog,
    pool: Mutex<ExchangePool>,
    codes: Arc<C>,
    publisher: Arc<P>,
    time: Arc<T>,
}

impl ExchangeService {
    /// Builds a service with random codes, no event sink, and the standard catalog.
    pub fn from_config(config: ExchangeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let codes = Arc::new(RandomCodeSource::new(config.code_generator()));
        Ok(Self::new(
            config,
            Catalog::standard().clone(),
            codes,
            Arc::new(NoOpPublisher),
            Arc::new(SystemTimeSource),
        ))
    }
}

impl<C, P, T> ExchangeService<C, P, T>
where
    C: CodeSource,
    P: ExchangeEventPublisher,
    T: TimeSource,
{
    pub fn new(
        config: ExchangeConfig,
        catalog: Catalog,
        codes: Arc<C>,
        publisher: Arc<P>,
        time: Arc<T>,
    ) -> Self {
        let pool = ExchangePool::new(config.max_code_attempts);
        Self {
            config,
            catalog,
            pool: Mutex::new(pool),
            codes,
            publisher,
            time,
        }
    }

    pub fn config(&self) -> &ExchangeConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Checks whether `code` is live without consuming it.
    pub fn peek(&self, code: &str) -> bool {
        self.pool.lock().peek(code.trim())
    }

    /// Number of live offers.
    pub fn live_offer_count(&self) -> usize {
        self.pool.lock().len()
    }

    /// Copies of every live offer, ordered by code.
    pub fn live_offers(&self) -> Vec<ExchangeOffer> {
        self.pool.lock().live_offers()
    }

    fn notify(&self, event: ExchangeEvent) {
        if let Err(PublishError::NoSubscribers) = self.publisher.publish(event) {
            debug!("Exchange event dropped, no subscribers");
        }
    }

    fn log_failure(&self, participant: ParticipantId, err: &ExchangeError) {
        if err.is_fatal() {
            error!(participant = %participant, error = %err, "Exchange internal error");
        } else {
            info!(participant = %participant, error = %err, "Exchange request rejected");
        }
    }
}

impl<C, P, T> PinExchangeApi for ExchangeService<C, P, T>
where
    C: CodeSource,
    P: ExchangeEventPublisher,
    T: TimeSource,
{
    fn open_session(&self) -> InventoryHandle {
        let mut inventory = Inventory::new(ParticipantId::new());

        if self.config.seed_new_inventories {
            if let Some(pin) = self.catalog.random_pin(&mut rand::thread_rng()) {
                inventory.add(pin.clone());
            }
        }

        info!(
            participant = %inventory.owner(),
            pins = inventory.len(),
            "Session opened"
        );
        InventoryHandle::new(inventory)
    }

    fn offer_pin(&self, inventory: &InventoryHandle, pin_name: &str) -> ExchangeResult<OfferCode> {
        let owner = inventory.owner();
        let mut held = inventory.write();

        let pin = match held.find_by_name(pin_name) {
            Some(pin) => pin.clone(),
            None => {
                let err = ExchangeError::pin_not_owned(pin_name);
                self.log_failure(owner, &err);
                return Err(err);
            }
        };

        let created = {
            let mut pool = self.pool.lock();
            pool.create_offer(pin.clone(), owner, self.time.now(), self.codes.as_ref())
        };
        let code = match created {
            Ok(code) => code,
            Err(err) => {
                self.log_failure(owner, &err);
                return Err(err);
            }
        };

        if self.config.offer_policy == OfferPolicy::RemovePin {
            held.remove(&pin)?;
        }
        drop(held);

        info!(
            participant = %owner,
            code = %code,
            pin_id = pin.id,
            policy = ?self.config.offer_policy,
            "Pin offered"
        );
        self.notify(ExchangeEvent::OfferCreated {
            code: code.clone(),
            pin,
            offered_by: owner,
        });

        Ok(code)
    }

    fn redeem_code(&self, inventory: &InventoryHandle, code: &str) -> ExchangeResult<Pin> {
        let participant = inventory.owner();
        let code = code.trim();

        let taken = self.pool.lock().take_offer(code);
        match taken {
            Ok(offer) => {
                inventory.add(offer.pin.clone());

                info!(
                    participant = %participant,
                    code = %offer.code,
                    pin_id = offer.pin.id,
                    offered_by = %offer.offered_by,
                    "Pin received"
                );
                self.notify(ExchangeEvent::OfferRedeemed {
                    code: offer.code,
                    pin: offer.pin.clone(),
                    offered_by: offer.offered_by,
                    redeemed_by: participant,
                });

                Ok(offer.pin)
            }
            Err(err) => {
                self.log_failure(participant, &err);
                self.notify(ExchangeEvent::RedemptionRejected {
                    code: code.to_string(),
                    participant,
                });
                Err(err)
            }
        }
    }

    fn redeem_scanned(
        &self,
        inventory: &InventoryHandle,
        decoded: &[String],
    ) -> ExchangeResult<Pin> {
        match decoded.first() {
            Some(code) => self.redeem_code(inventory, code),
            None => {
                debug!(participant = %inventory.owner(), "Scan yielded no code");
                Err(ExchangeError::not_found(""))
            }
        }
    }

    fn list_inventory(&self, inventory: &InventoryHandle) -> Vec<Pin> {
        inventory.list()
    }

    fn list_catalog(&self) -> Vec<Pin> {
        self.catalog.pins().to_vec()
    }

    fn pool_status(&self) -> PoolStatus {
        self.pool.lock().status()
    }
}
