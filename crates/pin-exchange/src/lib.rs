//! # Pin Exchange
//!
//! Lets one participant offer an owned pin under a redeemable code (shown as
//! text or a QR image by the presentation layer) and another participant
//! redeem that code to receive the pin.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Live codes are unique, never overwritten | `domain/pool.rs` - `fresh_code()` |
//! | Redemption is exactly-once | `domain/pool.rs` - `take_offer()` removes the entry |
//! | Failed redemption changes nothing | `domain/pool.rs` - `take_offer()` |
//! | One winner per concurrent redemption | `service.rs` - pool `Mutex` |
//! | Inventory entries are independent copies | `domain/entities.rs` - `Pin` is a value type |
//!
//! ## Offer Lifecycle
//!
//! ```text
//! offer_pin ──→ [LIVE] ──redeem_code──→ [CONSUMED] (deleted)
//! ```
//!
//! There is no cancellation and no expiry; an offer lives until redeemed or
//! until the process ends.
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      OUTER LAYER                                │
//! │  adapters/ - Code sources, event publishers                     │
//! │  service.rs - ExchangeService (locking, orchestration)          │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ implements ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      MIDDLE LAYER                               │
//! │  ports/inbound.rs  - PinExchangeApi trait                       │
//! │  ports/outbound.rs - CodeSource, TimeSource traits              │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      INNER LAYER                                │
//! │  domain/entities.rs  - Pin, Rarity, OfferCode, ExchangeOffer    │
//! │  domain/code.rs      - CodeGenerator                            │
//! │  domain/pool.rs      - ExchangePool                             │
//! │  domain/inventory.rs - Inventory                                │
//! │  domain/catalog.rs   - Catalog                                  │
//! │  domain/errors.rs    - ExchangeError enum                       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pin_exchange::{ExchangeConfig, ExchangeService, PinExchangeApi};
//!
//! let exchange = ExchangeService::from_config(ExchangeConfig::from_env())?;
//! let alice = exchange.open_session();
//! let bob = exchange.open_session();
//!
//! let name = alice.list()[0].name.clone();
//! let code = exchange.offer_pin(&alice, &name)?;
//! let pin = exchange.redeem_code(&bob, code.as_str())?;
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;
pub mod session;

pub use adapters::*;
pub use config::{ConfigError, ExchangeConfig, MAX_CODE_LENGTH};
pub use domain::*;
pub use ports::{CodeSource, PinExchangeApi, SystemTimeSource, TimeSource};
pub use service::ExchangeService;
pub use session::InventoryHandle;
