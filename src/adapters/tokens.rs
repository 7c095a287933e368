use crate::core::TokenSource;
use crate::utils::error::AssetError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use std::sync::Mutex;

fn check_range(range: &RangeInclusive<u32>) -> Result<(), AssetError> {
    if range.is_empty() {
        return Err(AssetError::TokenSource {
            message: format!("empty token range {:?}", range),
        });
    }
    Ok(())
}

/// Draws from the thread-local generator on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngTokens;

impl TokenSource for ThreadRngTokens {
    fn token(&self, range: RangeInclusive<u32>) -> Result<u32, AssetError> {
        check_range(&range)?;
        Ok(rand::rng().random_range(range))
    }
}

/// Reproducible token stream for `--seed` builds.
#[derive(Debug)]
pub struct SeededTokens {
    rng: Mutex<StdRng>,
}

impl SeededTokens {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl TokenSource for SeededTokens {
    fn token(&self, range: RangeInclusive<u32>) -> Result<u32, AssetError> {
        check_range(&range)?;
        let mut rng = self.rng.lock().map_err(|_| AssetError::TokenSource {
            message: "token generator lock poisoned".to_string(),
        })?;
        Ok(rng.random_range(range))
    }
}

/// Either token source, picked at startup.
#[derive(Debug)]
pub enum Tokens {
    Random(ThreadRngTokens),
    Seeded(SeededTokens),
}

impl Tokens {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Tokens::Seeded(SeededTokens::new(seed)),
            None => Tokens::Random(ThreadRngTokens),
        }
    }
}

impl TokenSource for Tokens {
    fn token(&self, range: RangeInclusive<u32>) -> Result<u32, AssetError> {
        match self {
            Tokens::Random(tokens) => tokens.token(range),
            Tokens::Seeded(tokens) => tokens.token(range),
        }
    }
}
