//! Ports layer for the pin exchange.
//!
//! Defines the hexagonal architecture port traits:
//! - Inbound (Driving) ports: API exposed to the presentation layer
//! - Outbound (Driven) ports: Code and time sources

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
