//! # Conservation
//!
//! Randomized offer/redeem sequences over a handful of participants.
//! Inventories only grow through a successful redemption, and under the
//! remove policy every pin is either held or sitting in the pool.

#[cfg(test)]
mod tests {
    use crate::fixtures::{catalog_pin, exchange_with, TestExchange};
    use pin_exchange::{
        ExchangeConfig, InventoryHandle, OfferCode, OfferPolicy, PinExchangeApi, Pin,
    };
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashMap;

    const STEPS: usize = 400;

    fn counts<'a>(pins: impl IntoIterator<Item = &'a Pin>) -> HashMap<Pin, usize> {
        let mut counts = HashMap::new();
        for pin in pins {
            *counts.entry(pin.clone()).or_insert(0) += 1;
        }
        counts
    }

    fn held(participants: &[InventoryHandle]) -> Vec<Pin> {
        participants.iter().flat_map(|p| p.list()).collect()
    }

    fn in_circulation(exchange: &TestExchange, participants: &[InventoryHandle]) -> Vec<Pin> {
        let mut pins = held(participants);
        pins.extend(exchange.live_offers().into_iter().map(|offer| offer.pin));
        pins
    }

    fn participants() -> Vec<InventoryHandle> {
        vec![
            InventoryHandle::with_pins([catalog_pin(1), catalog_pin(3)]),
            InventoryHandle::with_pins([catalog_pin(5)]),
            InventoryHandle::with_pins([catalog_pin(7), catalog_pin(8), catalog_pin(10)]),
            InventoryHandle::empty(),
        ]
    }

    /// Picks a redeemable string: a live code, a spent code, or junk.
    fn pick_code(rng: &mut StdRng, live: &[OfferCode], spent: &[OfferCode]) -> String {
        match rng.gen_range(0..10) {
            0..=5 if !live.is_empty() => live[rng.gen_range(0..live.len())].to_string(),
            6..=7 if !spent.is_empty() => spent[rng.gen_range(0..spent.len())].to_string(),
            _ => format!("EXPO-{:05}", rng.gen_range(0..100_000)),
        }
    }

    #[test]
    fn test_inventories_only_grow_through_redemption() {
        let (exchange, _) = exchange_with(ExchangeConfig::for_testing(), 11);
        let participants = participants();
        let mut rng = StdRng::seed_from_u64(0xE7C0);
        let mut live: Vec<OfferCode> = Vec::new();
        let mut spent: Vec<OfferCode> = Vec::new();

        for _ in 0..STEPS {
            let before = held(&participants).len();
            let actor = &participants[rng.gen_range(0..participants.len())];

            if rng.gen_bool(0.4) {
                let pins = actor.list();
                let name = if pins.is_empty() || rng.gen_bool(0.1) {
                    "存在しないピン".to_string()
                } else {
                    pins[rng.gen_range(0..pins.len())].name.clone()
                };
                if let Ok(code) = exchange.offer_pin(actor, &name) {
                    live.push(code);
                }
                assert_eq!(held(&participants).len(), before);
            } else {
                let code = pick_code(&mut rng, &live, &spent);
                match exchange.redeem_code(actor, &code) {
                    Ok(_) => {
                        let idx = live
                            .iter()
                            .position(|c| c.as_str() == code)
                            .expect("redeemed code was live");
                        spent.push(live.swap_remove(idx));
                        assert_eq!(held(&participants).len(), before + 1);
                    }
                    Err(_) => assert_eq!(held(&participants).len(), before),
                }
            }

            assert_eq!(exchange.live_offer_count(), live.len());
        }

        let status = exchange.pool_status();
        assert_eq!(status.offers_created as usize, live.len() + spent.len());
        assert_eq!(status.offers_redeemed as usize, spent.len());
    }

    #[test]
    fn test_remove_policy_conserves_every_pin() {
        let config = ExchangeConfig {
            offer_policy: OfferPolicy::RemovePin,
            ..ExchangeConfig::for_testing()
        };
        let (exchange, _) = exchange_with(config, 23);
        let participants = participants();
        let initial = counts(&held(&participants));
        let mut rng = StdRng::seed_from_u64(0xB10C);
        let mut live: Vec<OfferCode> = Vec::new();
        let mut spent: Vec<OfferCode> = Vec::new();

        for _ in 0..STEPS {
            let actor = &participants[rng.gen_range(0..participants.len())];

            if rng.gen_bool(0.5) {
                let pins = actor.list();
                if pins.is_empty() {
                    continue;
                }
                let name = pins[rng.gen_range(0..pins.len())].name.clone();
                let code = exchange.offer_pin(actor, &name).unwrap();
                live.push(code);
            } else {
                let code = pick_code(&mut rng, &live, &spent);
                if exchange.redeem_code(actor, &code).is_ok() {
                    let idx = live
                        .iter()
                        .position(|c| c.as_str() == code)
                        .expect("redeemed code was live");
                    spent.push(live.swap_remove(idx));
                }
            }

            assert_eq!(counts(&in_circulation(&exchange, &participants)), initial);
        }

        // Drain the pool back to the last participant
        let sink = &participants[3];
        for code in live.drain(..) {
            exchange.redeem_code(sink, code.as_str()).unwrap();
        }
        assert_eq!(exchange.live_offer_count(), 0);
        assert_eq!(counts(&held(&participants)), initial);
    }
}
