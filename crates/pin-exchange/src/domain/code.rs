//! Exchange code generation.
//!
//! A code is a fixed namespace prefix followed by a fixed-length suffix drawn
//! uniformly from an alphabet. The generator is stateless; uniqueness among
//! live offers is enforced by the pool.

use super::entities::OfferCode;
use rand::Rng;

/// Default namespace prefix.
pub const DEFAULT_CODE_PREFIX: &str = "EXPO-";

/// Default suffix length.
pub const DEFAULT_CODE_LENGTH: usize = 5;

/// Uppercase letters and digits.
pub const ALPHANUMERIC_UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Stateless code generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeGenerator {
    prefix: String,
    length: usize,
    alphabet: Vec<u8>,
}

impl CodeGenerator {
    /// Creates a generator over `[A-Z0-9]`.
    pub fn new(prefix: impl Into<String>, length: usize) -> Self {
        Self::with_alphabet(prefix, length, ALPHANUMERIC_UPPER)
    }

    /// Creates a generator over a custom ASCII alphabet.
    ///
    /// Duplicate symbols are dropped so `code_space()` stays exact.
    pub fn with_alphabet(prefix: impl Into<String>, length: usize, alphabet: &[u8]) -> Self {
        let mut symbols: Vec<u8> = Vec::with_capacity(alphabet.len());
        for &b in alphabet {
            if b.is_ascii() && !symbols.contains(&b) {
                symbols.push(b);
            }
        }
        Self {
            prefix: prefix.into(),
            length,
            alphabet: symbols,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of distinct codes this generator can produce (saturating).
    pub fn code_space(&self) -> u64 {
        let base = self.alphabet.len() as u64;
        match base {
            0 | 1 if self.length > 0 => base,
            _ => u32::try_from(self.length)
                .ok()
                .and_then(|exp| base.checked_pow(exp))
                .unwrap_or(u64::MAX),
        }
    }

    /// Draws one code from `rng`.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> OfferCode {
        let mut code = String::with_capacity(self.prefix.len() + self.length);
        code.push_str(&self.prefix);
        if !self.alphabet.is_empty() {
            for _ in 0..self.length {
                let idx = rng.gen_range(0..self.alphabet.len());
                code.push(self.alphabet[idx] as char);
            }
        }
        OfferCode::new(code)
    }

    /// Checks that `code` has this generator's prefix, length and alphabet.
    pub fn matches_format(&self, code: &str) -> bool {
        match code.strip_prefix(self.prefix.as_str()) {
            Some(suffix) => {
                suffix.len() == self.length && suffix.bytes().all(|b| self.alphabet.contains(&b))
            }
            None => false,
        }
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_PREFIX, DEFAULT_CODE_LENGTH)
    }
}
