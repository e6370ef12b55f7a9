//! Unique record code issuance
//!
//! Produces short, externally-presentable identifiers without relying on
//! storage auto-increment. A candidate is generated from a random source,
//! checked against the target collection, and either accepted or discarded;
//! the loop is bounded by attempt count so behavior stays deterministic
//! under test.
//!
//! Only the alphabet and suffix length are part of the contract — the
//! random source is injectable and carries no algorithm guarantee.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};
use thiserror::Error;

use core_kernel::{IssuedCode, PortError, CODE_ALPHABET, CODE_SUFFIX_LEN};

/// Default cap on candidate generations per issuance
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Errors from code issuance
#[derive(Debug, Error)]
pub enum CodeError {
    /// Every candidate collided within the attempt budget
    ///
    /// A transient, probabilistic condition — callers surface it as
    /// "please try again", never as a permanent failure.
    #[error("code space exhausted after {attempts} attempts")]
    Exhausted { attempts: u32 },

    /// The existence check itself failed
    #[error("code registry error: {0}")]
    Registry(#[from] PortError),
}

/// Source of uniform random indices for code generation
///
/// Production uses [`ThreadRandom`]; tests inject [`SeededRandom`] or a
/// scripted implementation to make issuance deterministic.
pub trait RandomSource: Send {
    /// Returns a uniform value in `[0, bound)`
    fn next_below(&mut self, bound: u32) -> u32;
}

/// Operating-system-seeded randomness via the thread-local generator
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_below(&mut self, bound: u32) -> u32 {
        rand::thread_rng().gen_range(0..bound)
    }
}

/// Deterministic randomness from a fixed seed
#[derive(Debug)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.0.gen_range(0..bound)
    }
}

/// Existence check against one record collection
///
/// Uniqueness is scoped per collection: walk-in codes are never checked
/// against reservation codes. The check is an optimization that catches
/// most collisions before storage does; the storage-level unique
/// constraint remains the authoritative backstop for races.
#[async_trait]
pub trait CodeRegistry: Send + Sync {
    /// Returns true if any record in the collection already holds `code`
    async fn is_taken(&self, code: &str) -> Result<bool, PortError>;
}

/// Issues unique record codes with a bounded retry loop
///
/// Each attempt generates `prefix + 6` characters from `A-Z0-9` and asks
/// the registry whether the candidate is taken. A free candidate is
/// accepted; a taken one is discarded and regenerated, up to
/// `max_attempts` times. Checks run sequentially — no parallel speculative
/// candidates, which would complicate the collision semantics for nothing.
pub struct CodeIssuer {
    prefix: String,
    max_attempts: u32,
    rng: Mutex<Box<dyn RandomSource>>,
}

impl CodeIssuer {
    /// Creates an issuer with the given code prefix and default settings
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            rng: Mutex::new(Box::new(ThreadRandom)),
        }
    }

    /// Overrides the attempt budget
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Replaces the random source (deterministic sources for tests)
    pub fn with_random_source(mut self, source: impl RandomSource + 'static) -> Self {
        self.rng = Mutex::new(Box::new(source));
        self
    }

    /// Returns the configured prefix
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Issues a code that the registry reported free at the moment of check
    ///
    /// Calls `is_taken` at least once and at most `max_attempts` times.
    /// This is check-then-act: the contract only guarantees the issuer
    /// itself observed no collision, not that a concurrent issuance cannot
    /// land the same code first — persistence handles that case.
    ///
    /// # Errors
    ///
    /// [`CodeError::Exhausted`] when every candidate collided, or
    /// [`CodeError::Registry`] if the existence check failed.
    pub async fn issue(&self, registry: &dyn CodeRegistry) -> Result<IssuedCode, CodeError> {
        for attempt in 1..=self.max_attempts {
            let candidate = self.next_candidate();
            if !registry.is_taken(candidate.as_str()).await? {
                if attempt > 1 {
                    tracing::debug!(attempt, code = %candidate, "issued code after collisions");
                }
                return Ok(candidate);
            }
            tracing::debug!(attempt, code = %candidate, "candidate code already taken");
        }
        Err(CodeError::Exhausted {
            attempts: self.max_attempts,
        })
    }

    fn next_candidate(&self) -> IssuedCode {
        // Lock scope ends before the caller awaits the existence check
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let mut suffix = String::with_capacity(CODE_SUFFIX_LEN);
        for _ in 0..CODE_SUFFIX_LEN {
            let index = rng.next_below(CODE_ALPHABET.len() as u32) as usize;
            suffix.push(CODE_ALPHABET[index] as char);
        }
        IssuedCode::from_parts(&self.prefix, &suffix)
    }
}
