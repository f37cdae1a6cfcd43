//! Code source adapters.
//!
//! `RandomCodeSource` draws from the thread-local RNG and is what the
//! service uses by default. `SeededCodeSource` is deterministic for a given
//! seed, which makes demo runs and tests reproducible.

use crate::domain::{CodeGenerator, OfferCode};
use crate::ports::outbound::CodeSource;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Code source backed by `rand::thread_rng()`.
#[derive(Clone, Debug, Default)]
pub struct RandomCodeSource {
    generator: CodeGenerator,
}

impl RandomCodeSource {
    pub fn new(generator: CodeGenerator) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &CodeGenerator {
        &self.generator
    }
}

impl CodeSource for RandomCodeSource {
    fn next_code(&self) -> OfferCode {
        self.generator.generate(&mut rand::thread_rng())
    }

    fn code_space(&self) -> u64 {
        self.generator.code_space()
    }
}

/// Code source backed by a seeded `StdRng`.
#[derive(Debug)]
pub struct SeededCodeSource {
    generator: CodeGenerator,
    rng: Mutex<StdRng>,
}

impl SeededCodeSource {
    pub fn new(generator: CodeGenerator, seed: u64) -> Self {
        Self {
            generator,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl CodeSource for SeededCodeSource {
    fn next_code(&self) -> OfferCode {
        let mut rng = self.rng.lock();
        self.generator.generate(&mut *rng)
    }

    fn code_space(&self) -> u64 {
        self.generator.code_space()
    }
}
