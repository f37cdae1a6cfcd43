//! Outbound (Driven) ports for the pin exchange.
//!
//! These traits define the external dependencies of the exchange: where
//! randomness for codes comes from and what time it is.

use crate::domain::{OfferCode, Timestamp};

/// Source of candidate exchange codes.
///
/// Implementations may return a code that is already live; the pool
/// detects that and asks again.
pub trait CodeSource: Send + Sync {
    /// Draws a candidate code.
    fn next_code(&self) -> OfferCode;

    /// Number of distinct codes this source can produce.
    fn code_space(&self) -> u64;
}

/// Time source for consistent timestamp handling.
///
/// Abstracted to allow testing with deterministic time.
pub trait TimeSource: Send + Sync {
    /// Returns the current timestamp in milliseconds.
    fn now(&self) -> Timestamp;
}

/// Default system time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }
}

/// Mock time source for testing.
#[cfg(test)]
pub struct MockTimeSource {
    time: std::sync::atomic::AtomicU64,
}

#[cfg(test)]
impl MockTimeSource {
    pub fn new(initial: Timestamp) -> Self {
        Self {
            time: std::sync::atomic::AtomicU64::new(initial),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.time.fetch_add(ms, std::sync::atomic::Ordering::SeqCst);
    }
}

#[cfg(test)]
impl TimeSource for MockTimeSource {
    fn now(&self) -> Timestamp {
        self.time.load(std::sync::atomic::Ordering::SeqCst)
    }
}

/// Code source replaying a fixed script, then repeating its last entry.
#[cfg(test)]
pub struct ScriptedCodeSource {
    codes: parking_lot::Mutex<std::collections::VecDeque<&'static str>>,
    last: parking_lot::Mutex<&'static str>,
    code_space: u64,
}

#[cfg(test)]
impl ScriptedCodeSource {
    pub fn new(codes: &[&'static str], code_space: u64) -> Self {
        Self {
            codes: parking_lot::Mutex::new(codes.iter().copied().collect()),
            last: parking_lot::Mutex::new(codes.last().copied().unwrap_or("")),
            code_space,
        }
    }
}

#[cfg(test)]
impl CodeSource for ScriptedCodeSource {
    fn next_code(&self) -> OfferCode {
        let next = self.codes.lock().pop_front();
        match next {
            Some(code) => {
                *self.last.lock() = code;
                OfferCode::new(code)
            }
            None => OfferCode::new(*self.last.lock()),
        }
    }

    fn code_space(&self) -> u64 {
        self.code_space
    }
}
