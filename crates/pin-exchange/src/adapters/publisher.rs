//! Event publisher adapters for the pin exchange.
//!
//! The presentation layer learns about completed offers and redemptions
//! through these events (to show "offer issued", "pin received" or
//! "code invalid" messages).

use crate::domain::{OfferCode, ParticipantId, Pin};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Default channel capacity for `BroadcastPublisher`.
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// Notification emitted by the exchange service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExchangeEvent {
    /// A pin was put up for exchange.
    OfferCreated {
        code: OfferCode,
        pin: Pin,
        offered_by: ParticipantId,
    },
    /// A code was redeemed and the pin moved to the redeemer.
    OfferRedeemed {
        code: OfferCode,
        pin: Pin,
        offered_by: ParticipantId,
        redeemed_by: ParticipantId,
    },
    /// A redemption attempt matched no live offer.
    RedemptionRejected {
        code: String,
        participant: ParticipantId,
    },
}

/// Event publisher trait for the exchange.
pub trait ExchangeEventPublisher: Send + Sync {
    /// Publishes one event.
    fn publish(&self, event: ExchangeEvent) -> Result<(), PublishError>;
}

/// Error type for publish operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishError {
    /// Nobody is listening.
    NoSubscribers,
}

impl std::fmt::Display for PublishError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSubscribers => write!(f, "No event subscribers"),
        }
    }
}

impl std::error::Error for PublishError {}

/// No-op publisher for running without a presentation layer.
#[derive(Debug, Clone, Default)]
pub struct NoOpPublisher;

impl ExchangeEventPublisher for NoOpPublisher {
    fn publish(&self, _event: ExchangeEvent) -> Result<(), PublishError> {
        Ok(())
    }
}

/// Fan-out publisher over a `tokio::sync::broadcast` channel.
///
/// Slow subscribers lag and lose the oldest events; the exchange itself
/// never waits on them.
#[derive(Debug, Clone)]
pub struct BroadcastPublisher {
    sender: broadcast::Sender<ExchangeEvent>,
}

impl BroadcastPublisher {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Opens a new subscription. Only events published afterwards are seen.
    pub fn subscribe(&self) -> broadcast::Receiver<ExchangeEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastPublisher {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}

impl ExchangeEventPublisher for BroadcastPublisher {
    fn publish(&self, event: ExchangeEvent) -> Result<(), PublishError> {
        self.sender
            .send(event)
            .map(|_| ())
            .map_err(|_| PublishError::NoSubscribers)
    }
}

/// Recording publisher for testing.
#[cfg(test)]
pub struct RecordingPublisher {
    pub events: parking_lot::Mutex<Vec<ExchangeEvent>>,
}

#[cfg(test)]
impl RecordingPublisher {
    pub fn new() -> Self {
        Self {
            events: parking_lot::Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<ExchangeEvent> {
        self.events.lock().clone()
    }
}

#[cfg(test)]
impl ExchangeEventPublisher for RecordingPublisher {
    fn publish(&self, event: ExchangeEvent) -> Result<(), PublishError> {
        self.events.lock().push(event);
        Ok(())
    }
}
