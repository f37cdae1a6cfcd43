//! # Domain Layer - Pin Exchange
//!
//! Pure business logic with no locking and no I/O.
//!
//! ## Components
//!
//! - `entities`: Pin, Rarity, OfferCode, ExchangeOffer, OfferPolicy
//! - `code`: CodeGenerator (prefix + random suffix)
//! - `pool`: ExchangePool with exactly-once redemption
//! - `inventory`: Inventory, one per participant
//! - `catalog`: Catalog and the standard pin set
//! - `value_objects`: PoolStatus
//! - `errors`: ExchangeError enumeration

pub mod catalog;
pub mod code;
pub mod entities;
pub mod errors;
pub mod inventory;
pub mod pool;
pub mod value_objects;

pub use catalog::*;
pub use code::*;
pub use entities::*;
pub use errors::*;
pub use inventory::*;
pub use pool::*;
pub use value_objects::*;
