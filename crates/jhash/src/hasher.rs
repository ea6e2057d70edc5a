//! `std::hash` integration for driving `HashMap` and `HashSet`
//!
//! The algorithm produces 32-bit values while [`Hasher::finish`] returns
//! `u64`, so finished hashes are zero-extended. Tables built on this hasher
//! see more collisions than with a native 64-bit hash; it is meant for
//! workloads that want the exact kernel hash behavior, not as a general
//! replacement for the standard hasher.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use jhash::{JHashState, RandomJHashState};
//!
//! let mut map: HashMap<_, _, JHashState> = HashMap::default();
//! map.insert("abc", 123);
//! assert_eq!(map.get("abc"), Some(&123));
//!
//! let mut map: HashMap<_, _, RandomJHashState> = HashMap::default();
//! map.insert("def", 456);
//! assert_eq!(map.get("def"), Some(&456));
//! ```

use std::hash::{BuildHasher, Hasher};

use rand::RngExt;

use crate::lookup3::jhash;

/// [`Hasher`] that folds every written buffer through the hash, chaining the
/// running state as the seed
#[derive(Debug, Clone)]
pub struct JHasher {
    state: u32,
}

impl JHasher {
    /// Hasher starting from seed 0
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    /// Hasher starting from an explicit seed, typically a previous hash
    pub fn with_seed(seed: u32) -> Self {
        Self { state: seed }
    }
}

impl Default for JHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for JHasher {
    fn finish(&self) -> u64 {
        u64::from(self.state)
    }

    fn write(&mut self, bytes: &[u8]) {
        self.state = jhash(bytes, self.state);
    }
}

/// [`BuildHasher`] with a fixed seed, for deterministic tables
#[derive(Debug, Clone)]
pub struct JHashState(u32);

impl JHashState {
    /// State seeding every hasher with 0
    pub fn new() -> Self {
        Self(0)
    }

    /// State seeding every hasher with `seed`
    pub fn with_seed(seed: u32) -> Self {
        Self(seed)
    }
}

impl Default for JHashState {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildHasher for JHashState {
    type Hasher = JHasher;

    fn build_hasher(&self) -> JHasher {
        JHasher::with_seed(self.0)
    }
}

/// [`BuildHasher`] drawing a random seed per table instance
///
/// Varies bucket distribution between instances. This does not make the hash
/// collision-resistant against an adversary; it only decorrelates independent
/// tables.
#[derive(Debug, Clone)]
pub struct RandomJHashState(u32);

impl RandomJHashState {
    /// State with a freshly drawn random seed
    pub fn new() -> Self {
        Self(rand::rng().random())
    }
}

impl Default for RandomJHashState {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildHasher for RandomJHashState {
    type Hasher = JHasher;

    fn build_hasher(&self) -> JHasher {
        JHasher::with_seed(self.0)
    }
}
