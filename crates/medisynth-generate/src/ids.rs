use std::collections::HashSet;

use chrono::{Duration, NaiveDateTime};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::errors::SynthesisError;

const SUFFIX_LEN: usize = 6;
const SUFFIX_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const MINT_ATTEMPTS: usize = 64;

/// Mints run-unique identifiers of the form `PREFIX-YYYYMMDDHHMMSS-XXXXXX`.
///
/// The stamp comes from a logical clock rather than the wall clock, so a
/// seeded run produces the same identifiers every time. The clock starts at
/// the run anchor and only moves forward: when repeated suffix collisions
/// suggest the current second is running out of room, the mint ticks one
/// second ahead and keeps going.
#[derive(Debug)]
pub struct IdMint {
    clock: NaiveDateTime,
    stamp: String,
    issued: HashSet<String>,
}

impl IdMint {
    pub fn new(anchor: NaiveDateTime) -> Self {
        Self {
            clock: anchor,
            stamp: format_stamp(anchor),
            issued: HashSet::new(),
        }
    }

    /// Mint one identifier, guaranteed distinct from every earlier mint in
    /// this run regardless of prefix.
    pub fn mint(&mut self, prefix: &str, rng: &mut ChaCha8Rng) -> String {
        loop {
            for _ in 0..MINT_ATTEMPTS {
                let candidate = format!("{prefix}-{}-{}", self.stamp, random_suffix(rng));
                if self.issued.insert(candidate.clone()) {
                    return candidate;
                }
            }
            self.tick();
        }
    }

    /// Identifiers issued so far.
    pub fn issued(&self) -> usize {
        self.issued.len()
    }

    fn tick(&mut self) {
        self.clock = self.clock + Duration::seconds(1);
        self.stamp = format_stamp(self.clock);
    }
}

/// Pool of parent identifiers that reference fields are drawn from.
///
/// Pools are built from records that were actually generated, never from
/// fresh mints, so every sampled reference resolves within the dataset.
#[derive(Debug, Clone)]
pub struct IdPool {
    label: String,
    ids: Vec<String>,
}

impl IdPool {
    pub fn new(label: &str, ids: Vec<String>) -> Self {
        Self {
            label: label.to_string(),
            ids,
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|member| member == id)
    }

    /// Sample one member uniformly.
    pub fn pick(&self, rng: &mut ChaCha8Rng) -> Result<&str, SynthesisError> {
        if self.ids.is_empty() {
            return Err(SynthesisError::EmptyPool(self.label.clone()));
        }
        let index = rng.random_range(0..self.ids.len());
        Ok(&self.ids[index])
    }
}

fn format_stamp(at: NaiveDateTime) -> String {
    at.format("%Y%m%d%H%M%S").to_string()
}

fn random_suffix(rng: &mut ChaCha8Rng) -> String {
    (0..SUFFIX_LEN)
        .map(|_| SUFFIX_CHARSET[rng.random_range(0..SUFFIX_CHARSET.len())] as char)
        .collect()
}
