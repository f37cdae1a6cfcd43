//! # Concurrency
//!
//! Two phones, one pool. Redemption races must resolve to exactly one
//! winner, and parallel offers must never share a live code.

#[cfg(test)]
mod tests {
    use crate::fixtures::{catalog_pin, exchange, sdgs_pin};
    use parking_lot::Mutex;
    use pin_exchange::{ExchangeError, InventoryHandle, OfferCode, PinExchangeApi};
    use std::collections::HashSet;
    use std::sync::{Arc, Barrier};

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_two_participants_race_for_one_code() {
        let (exchange, _) = exchange();
        let giver = InventoryHandle::with_pins([sdgs_pin()]);
        let receiver = InventoryHandle::empty();
        let code = exchange.offer_pin(&giver, "SDGsピン").unwrap();

        let barrier = Arc::new(Barrier::new(2));
        let mut tasks = Vec::new();
        for _ in 0..2 {
            let exchange = exchange.clone();
            let receiver = receiver.clone();
            let barrier = barrier.clone();
            let code = code.clone();
            tasks.push(tokio::task::spawn_blocking(move || {
                barrier.wait();
                exchange.redeem_code(&receiver, code.as_str())
            }));
        }

        let mut results = Vec::new();
        for task in tasks {
            results.push(task.await.unwrap());
        }

        let winners = results.iter().filter(|r| r.is_ok()).count();
        let losers = results
            .iter()
            .filter(|r| matches!(r, Err(ExchangeError::NotFound { .. })))
            .count();
        assert_eq!(winners, 1);
        assert_eq!(losers, 1);
        assert_eq!(receiver.list(), vec![sdgs_pin()]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_many_receivers_race_for_one_code() {
        let (exchange, _) = exchange();
        let giver = InventoryHandle::with_pins([catalog_pin(8)]);
        let code = exchange.offer_pin(&giver, "期間限定ピン").unwrap();

        let receivers: Vec<_> = (0..16).map(|_| InventoryHandle::empty()).collect();
        let barrier = Arc::new(Barrier::new(receivers.len()));

        let tasks: Vec<_> = receivers
            .iter()
            .cloned()
            .map(|receiver| {
                let exchange = exchange.clone();
                let barrier = barrier.clone();
                let code = code.clone();
                tokio::task::spawn_blocking(move || {
                    barrier.wait();
                    exchange.redeem_code(&receiver, code.as_str()).is_ok()
                })
            })
            .collect();

        let mut winners = 0;
        for task in tasks {
            if task.await.unwrap() {
                winners += 1;
            }
        }

        assert_eq!(winners, 1);
        let granted: usize = receivers.iter().map(|r| r.len()).sum();
        assert_eq!(granted, 1);
        assert_eq!(exchange.pool_status().offers_redeemed, 1);
        assert_eq!(exchange.pool_status().redemptions_rejected, 15);
    }

    #[test]
    fn test_parallel_offers_get_distinct_codes() {
        let (exchange, _) = exchange();
        let issued: Arc<Mutex<Vec<OfferCode>>> = Arc::new(Mutex::new(Vec::new()));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let exchange = exchange.clone();
                let issued = issued.clone();
                std::thread::spawn(move || {
                    let giver = InventoryHandle::with_pins([sdgs_pin()]);
                    for _ in 0..25 {
                        let code = exchange.offer_pin(&giver, "SDGsピン").unwrap();
                        issued.lock().push(code);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let issued = issued.lock();
        let unique: HashSet<_> = issued.iter().collect();
        assert_eq!(issued.len(), 200);
        assert_eq!(unique.len(), 200);
        assert_eq!(exchange.pool_status().live_offers, 200);
    }

    #[test]
    fn test_concurrent_offer_and_redeem_streams() {
        let (exchange, _) = exchange();
        let (tx, rx) = std::sync::mpsc::channel::<OfferCode>();
        let giver = InventoryHandle::with_pins([catalog_pin(4)]);
        let receiver = InventoryHandle::empty();

        let producer = {
            let exchange = exchange.clone();
            let giver = giver.clone();
            std::thread::spawn(move || {
                for _ in 0..100 {
                    let code = exchange.offer_pin(&giver, "ロボットピン").unwrap();
                    if tx.send(code).is_err() {
                        break;
                    }
                }
            })
        };

        let consumer = {
            let exchange = exchange.clone();
            let receiver = receiver.clone();
            std::thread::spawn(move || {
                let mut received = 0;
                for code in rx {
                    if exchange.redeem_code(&receiver, code.as_str()).is_ok() {
                        received += 1;
                    }
                }
                received
            })
        };

        producer.join().unwrap();
        let received = consumer.join().unwrap();

        assert_eq!(received, 100);
        assert_eq!(receiver.len(), 100);
        assert!(exchange.pool_status().live_offers == 0);
    }
}
