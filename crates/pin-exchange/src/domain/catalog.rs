//! Static pin catalog.
//!
//! The catalog is read-only reference data loaded once per process.

use super::entities::{Pin, PinId, Rarity};
use lazy_static::lazy_static;
use rand::seq::SliceRandom;
use rand::Rng;

lazy_static! {
    /// The event's standard catalog.
    pub static ref STANDARD_CATALOG: Catalog = Catalog::new(vec![
        Pin::new(1, "日本館ピン", Rarity::Common),
        Pin::new(2, "アメリカ館ピン", Rarity::Common),
        Pin::new(3, "SDGsピン", Rarity::Rare),
        Pin::new(4, "ロボットピン", Rarity::Epic),
        Pin::new(5, "宇宙館ピン", Rarity::Common),
        Pin::new(6, "ドバイ館ピン", Rarity::Common),
        Pin::new(7, "マスコットピン", Rarity::Rare),
        Pin::new(8, "期間限定ピン", Rarity::Legendary),
        Pin::new(9, "こどもピン", Rarity::Common),
        Pin::new(10, "食文化ピン", Rarity::Rare),
    ]);
}

/// Fixed set of pin designs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    pins: Vec<Pin>,
}

impl Catalog {
    pub fn new(pins: Vec<Pin>) -> Self {
        Self { pins }
    }

    /// The process-wide standard catalog.
    pub fn standard() -> &'static Catalog {
        &STANDARD_CATALOG
    }

    /// All designs in catalog order.
    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    pub fn get(&self, id: PinId) -> Option<&Pin> {
        self.pins.iter().find(|p| p.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Pin> {
        self.pins.iter().find(|p| p.name == name)
    }

    /// Uniformly random design, or `None` for an empty catalog.
    pub fn random_pin<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Pin> {
        self.pins.choose(rng)
    }
}
