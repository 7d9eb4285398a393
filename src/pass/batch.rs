//! Batches of pairwise-distinct passwords.

use std::collections::HashSet;

use rand::RngCore;
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use super::charset::{self, StrengthTier};
use super::generate::{generate_with, index_distribution};
use super::request::GenerationRequest;
use crate::error::GenerateError;

/// Per-slot redraw cap before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Required ratio of possible passwords to requested passwords.
const SPACE_FACTOR: u128 = 2;

/// Generated passwords in acceptance order. Zeroized on drop.
#[derive(Debug, Default)]
pub struct PasswordBatch {
    passwords: Vec<String>,
}

impl PasswordBatch {
    pub fn len(&self) -> usize {
        self.passwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passwords.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.passwords
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.passwords.iter()
    }

    /// Join into a single string, e.g. with a line break between entries.
    pub fn join(&self, separator: &str) -> Zeroizing<String> {
        Zeroizing::new(self.passwords.join(separator))
    }
}

impl Drop for PasswordBatch {
    fn drop(&mut self) {
        self.passwords.zeroize();
    }
}

impl<'a> IntoIterator for &'a PasswordBatch {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Fills a batch with distinct passwords of one tier and length.
#[derive(Debug, Clone, Copy)]
pub struct BatchBuilder {
    tier: StrengthTier,
    length: usize,
    max_attempts: usize,
}

impl BatchBuilder {
    pub fn new(tier: StrengthTier, length: usize) -> Self {
        Self {
            tier,
            length,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Cap on draws per slot (at least 1).
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Number of distinct passwords this tier and length can produce, saturating.
    pub fn space(&self) -> u128 {
        let pool = charset::size(self.tier) as u128;
        u32::try_from(self.length)
            .ok()
            .and_then(|len| pool.checked_pow(len))
            .unwrap_or(u128::MAX)
    }

    /// Build `count` distinct passwords.
    ///
    /// Fails up front when the space of possible passwords is less than
    /// twice `count`, and fails when any slot needs more than
    /// `max_attempts` draws to find an unseen password.
    pub fn build<R: RngCore + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<PasswordBatch, GenerateError> {
        if self.length == 0 {
            return Err(GenerateError::ZeroLength);
        }

        let space = self.space();
        if space < (count as u128).saturating_mul(SPACE_FACTOR) {
            return Err(GenerateError::SpaceTooSmall { space, count });
        }

        let pool = charset::build(self.tier);
        let index = index_distribution(&pool)?;

        let mut batch = PasswordBatch {
            passwords: Vec::with_capacity(count),
        };
        let mut seen: HashSet<String> = HashSet::with_capacity(count);
        let mut redraws = 0usize;

        for slot in 0..count {
            let mut attempts = 0;
            let pass = loop {
                if attempts == self.max_attempts {
                    wipe(seen);
                    return Err(GenerateError::RetriesExhausted { slot, attempts });
                }
                attempts += 1;

                let mut candidate = generate_with(&pool, &index, self.length, rng);
                if !seen.contains(&candidate) {
                    break candidate;
                }
                candidate.zeroize();
            };
            redraws += attempts - 1;
            seen.insert(pass.clone());
            batch.passwords.push(pass);
        }

        wipe(seen);
        debug!(
            tier = %self.tier,
            length = self.length,
            count,
            redraws,
            "Built password batch"
        );
        Ok(batch)
    }
}

impl From<&GenerationRequest> for BatchBuilder {
    fn from(request: &GenerationRequest) -> Self {
        Self::new(request.tier, request.length)
    }
}

fn wipe(seen: HashSet<String>) {
    for mut pass in seen {
        pass.zeroize();
    }
}
