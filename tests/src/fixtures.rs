//! Shared fixtures for the integration suite.

use pin_exchange::{
    BroadcastPublisher, Catalog, CodeGenerator, ExchangeConfig, ExchangeService, Pin, Rarity,
    SeededCodeSource, SystemTimeSource,
};
use std::sync::Arc;

/// Service type used across the suite: reproducible codes, observable events.
pub type TestExchange = ExchangeService<SeededCodeSource, BroadcastPublisher, SystemTimeSource>;

/// Builds a service with a seeded code source and a broadcast publisher.
pub fn exchange_with(config: ExchangeConfig, seed: u64) -> (Arc<TestExchange>, BroadcastPublisher) {
    pin_telemetry::init_test_logging();

    let publisher = BroadcastPublisher::new(1024);
    let codes = SeededCodeSource::new(config.code_generator(), seed);
    let service = ExchangeService::new(
        config,
        Catalog::standard().clone(),
        Arc::new(codes),
        Arc::new(publisher.clone()),
        Arc::new(SystemTimeSource),
    );
    (Arc::new(service), publisher)
}

/// Default test exchange: empty sessions, retain policy.
pub fn exchange() -> (Arc<TestExchange>, BroadcastPublisher) {
    exchange_with(ExchangeConfig::for_testing(), 2025)
}

/// Exchange whose code space holds exactly one code.
pub fn single_code_exchange() -> Arc<ExchangeService<SeededCodeSource>> {
    pin_telemetry::init_test_logging();

    let codes = SeededCodeSource::new(CodeGenerator::with_alphabet("EXPO-", 1, b"A"), 0);
    Arc::new(ExchangeService::new(
        ExchangeConfig::for_testing(),
        Catalog::standard().clone(),
        Arc::new(codes),
        Arc::new(pin_exchange::NoOpPublisher),
        Arc::new(SystemTimeSource),
    ))
}

pub fn sdgs_pin() -> Pin {
    Pin::new(3, "SDGsピン", Rarity::Rare)
}

pub fn catalog_pin(id: u32) -> Pin {
    Catalog::standard()
        .get(id)
        .cloned()
        .unwrap_or_else(|| panic!("catalog has no pin {}", id))
}
