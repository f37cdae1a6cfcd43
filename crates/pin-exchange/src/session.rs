//! Participant inventory handles.
//!
//! A handle is the explicit, cloneable reference a session layer passes into
//! every exchange operation. Each handle guards its own inventory, so one
//! participant receiving a pin never blocks another.

use crate::domain::{ExchangeResult, Inventory, ParticipantId, Pin};
use parking_lot::{RwLock, RwLockWriteGuard};
use std::sync::Arc;

/// Shared handle to one participant's inventory.
#[derive(Clone, Debug)]
pub struct InventoryHandle {
    owner: ParticipantId,
    inner: Arc<RwLock<Inventory>>,
}

impl InventoryHandle {
    pub fn new(inventory: Inventory) -> Self {
        Self {
            owner: inventory.owner(),
            inner: Arc::new(RwLock::new(inventory)),
        }
    }

    /// Empty inventory for a fresh participant.
    pub fn empty() -> Self {
        Self::new(Inventory::new(ParticipantId::new()))
    }

    /// Fresh participant holding `pins`.
    pub fn with_pins(pins: impl IntoIterator<Item = Pin>) -> Self {
        Self::new(Inventory::with_pins(ParticipantId::new(), pins))
    }

    pub fn owner(&self) -> ParticipantId {
        self.owner
    }

    pub fn list(&self) -> Vec<Pin> {
        self.inner.read().list()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn find_by_name(&self, name: &str) -> Option<Pin> {
        self.inner.read().find_by_name(name).cloned()
    }

    pub fn add(&self, pin: Pin) {
        self.inner.write().add(pin);
    }

    pub fn remove(&self, pin: &Pin) -> ExchangeResult<Pin> {
        self.inner.write().remove(pin)
    }

    /// True if both handles refer to the same inventory.
    pub fn same_inventory(&self, other: &InventoryHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Inventory> {
        self.inner.write()
    }
}
