//! # Pin Exchange Test Suite
//!
//! Cross-module tests driving the exchange through `PinExchangeApi` the way
//! two participant devices sharing one pool would.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs        # Service builders, catalog pins, logging
//! └── integration/
//!     ├── flows.rs        # Offer → redeem end-to-end, events, scan path
//!     ├── concurrency.rs  # Redemption races, parallel offers
//!     └── conservation.rs # Randomized sequences, no pin gained or lost
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p pin-exchange-tests
//! cargo test -p pin-exchange-tests integration::concurrency::
//! ```

#![allow(dead_code)]

pub mod fixtures;
