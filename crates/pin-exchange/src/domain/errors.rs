//! Exchange error types.

use thiserror::Error;

/// Errors surfaced by exchange operations.
///
/// `PinNotOwned` and `NotFound` are expected outcomes of user input.
/// `CodeSpaceExhausted` means the pool could not issue a fresh code and is
/// treated as an internal failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExchangeError {
    /// The inventory does not hold the requested pin.
    #[error("Pin not owned: {pin_name}")]
    PinNotOwned { pin_name: String },

    /// The code is not live: unknown, malformed, or already redeemed.
    #[error("Code not found: {code:?}")]
    NotFound { code: String },

    /// No unused code could be generated.
    #[error("Code space exhausted after {attempts} attempts ({live_offers} live offers, code space {code_space})")]
    CodeSpaceExhausted {
        attempts: u32,
        live_offers: usize,
        code_space: u64,
    },
}

impl ExchangeError {
    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound { code: code.into() }
    }

    pub fn pin_not_owned(pin_name: impl Into<String>) -> Self {
        Self::PinNotOwned {
            pin_name: pin_name.into(),
        }
    }

    /// True for internal invariant breaches.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::CodeSpaceExhausted { .. })
    }

    /// True for errors the participant can fix by retrying with other input.
    pub fn is_user_correctable(&self) -> bool {
        !self.is_fatal()
    }
}

/// Result type for exchange operations.
pub type ExchangeResult<T> = Result<T, ExchangeError>;
