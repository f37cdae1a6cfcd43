//! Core domain entities for the pin exchange.
//!
//! Pins are plain values: every inventory entry and every pooled offer owns
//! its own copy, so mutating one holder never affects another.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Timestamp in milliseconds since UNIX epoch.
pub type Timestamp = u64;

/// Catalog identifier of a pin design.
pub type PinId = u32;

/// Rarity tier of a pin design.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Lowercase name used for display and serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown rarity name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Unknown rarity: {0}")]
pub struct UnknownRarity(pub String);

impl FromStr for Rarity {
    type Err = UnknownRarity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "common" => Ok(Self::Common),
            "rare" => Ok(Self::Rare),
            "epic" => Ok(Self::Epic),
            "legendary" => Ok(Self::Legendary),
            _ => Err(UnknownRarity(s.to_string())),
        }
    }
}

/// A collectible pin.
///
/// Equality is by full value (id, name and rarity).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pin {
    pub id: PinId,
    pub name: String,
    pub rarity: Rarity,
}

impl Pin {
    /// Creates a pin record.
    pub fn new(id: PinId, name: impl Into<String>, rarity: Rarity) -> Self {
        Self {
            id,
            name: name.into(),
            rarity,
        }
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.rarity)
    }
}

/// Opaque identity of a participant session. Used for logs and events only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantId(pub Uuid);

impl ParticipantId {
    /// Allocates a fresh random identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ParticipantId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A redeemable exchange code, e.g. `EXPO-7QK2D`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OfferCode(String);

impl OfferCode {
    /// Wraps an already generated code string.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for OfferCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::borrow::Borrow<str> for OfferCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A pin made available for exchange under a code.
///
/// Offer lifecycle:
/// ```text
/// [LIVE] ──redeem──→ [CONSUMED] (entry deleted from the pool)
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeOffer {
    /// Code under which the offer is live.
    pub code: OfferCode,
    /// Copy of the offered pin.
    pub pin: Pin,
    /// Participant who created the offer.
    pub offered_by: ParticipantId,
    /// Creation time (ms).
    pub created_at: Timestamp,
}

impl ExchangeOffer {
    /// Creates a live offer.
    pub fn new(
        code: OfferCode,
        pin: Pin,
        offered_by: ParticipantId,
        created_at: Timestamp,
    ) -> Self {
        Self {
            code,
            pin,
            offered_by,
            created_at,
        }
    }
}

/// What happens to the source inventory when a pin is offered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferPolicy {
    /// The offering participant keeps the pin.
    #[default]
    RetainPin,
    /// The pin leaves the source inventory and is held by the pool until redeemed.
    RemovePin,
}

/// Error returned when parsing an unknown offer policy name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Unknown offer policy: {0}")]
pub struct UnknownOfferPolicy(pub String);

impl FromStr for OfferPolicy {
    type Err = UnknownOfferPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "retain" | "retain_pin" => Ok(Self::RetainPin),
            "remove" | "remove_pin" => Ok(Self::RemovePin),
            _ => Err(UnknownOfferPolicy(s.to_string())),
        }
    }
}
