//! Per-participant pin inventory.

use super::entities::{ParticipantId, Pin};
use super::errors::{ExchangeError, ExchangeResult};

/// Ordered collection of pins held by one participant.
///
/// Order is acquisition order. Entries are independent copies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inventory {
    owner: ParticipantId,
    pins: Vec<Pin>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new(owner: ParticipantId) -> Self {
        Self {
            owner,
            pins: Vec::new(),
        }
    }

    /// Creates an inventory holding `pins` in the given order.
    pub fn with_pins(owner: ParticipantId, pins: impl IntoIterator<Item = Pin>) -> Self {
        Self {
            owner,
            pins: pins.into_iter().collect(),
        }
    }

    pub fn owner(&self) -> ParticipantId {
        self.owner
    }

    /// Snapshot of the held pins.
    pub fn list(&self) -> Vec<Pin> {
        self.pins.clone()
    }

    /// Borrowed view of the held pins.
    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    pub fn contains(&self, pin: &Pin) -> bool {
        self.pins.contains(pin)
    }

    /// First held pin with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<&Pin> {
        self.pins.iter().find(|p| p.name == name)
    }

    /// Appends a pin.
    pub fn add(&mut self, pin: Pin) {
        self.pins.push(pin);
    }

    /// Removes the first entry equal to `pin` and returns it.
    ///
    /// # Errors
    /// - `PinNotOwned` if no entry matches. The inventory is unchanged.
    pub fn remove(&mut self, pin: &Pin) -> ExchangeResult<Pin> {
        match self.pins.iter().position(|p| p == pin) {
            Some(idx) => Ok(self.pins.remove(idx)),
            None => Err(ExchangeError::pin_not_owned(pin.name.clone())),
        }
    }
}
