//! Adapters layer for the pin exchange.
//!
//! Concrete implementations of the outbound ports plus event publishing
//! toward the presentation layer.

pub mod code_source;
pub mod publisher;

pub use code_source::{RandomCodeSource, SeededCodeSource};
pub use publisher::{
    BroadcastPublisher, ExchangeEvent, ExchangeEventPublisher, NoOpPublisher, PublishError,
};
