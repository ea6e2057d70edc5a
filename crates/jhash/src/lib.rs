//! Jenkins lookup3 hashing in its Linux kernel form
//!
//! This crate provides `jhash`, the byte-oriented variant of Bob Jenkins'
//! lookup3 hash as adapted for the Linux kernel: a fast, non-cryptographic
//! 32-bit hash for hash-table indexing and checksumming. Output is bit-exact
//! against the reference construction under the pinned little-endian word
//! convention.
//!
//! It is not a cryptographic hash and offers no resistance to deliberate
//! collision attacks; do not use it where DoS resistance is required.
//!
//! # Components
//!
//! - **Hashing**: [`jhash`] and the checked [`try_jhash`], plus the
//!   [`jhash_size`]/[`jhash_mask`] table-sizing helpers
//! - **`std::hash` integration**: [`JHasher`], [`JHashState`] and
//!   [`RandomJHashState`] for driving `HashMap`/`HashSet`
//!
//! # Examples
//!
//! ## One-shot hashing
//!
//! ```
//! use jhash::jhash;
//!
//! assert_eq!(jhash(b"foobar", 0), 0xaeb72b0c);
//! ```
//!
//! ## Chaining keys through the seed
//!
//! ```
//! use jhash::jhash;
//!
//! let hash = jhash(b"bar", jhash(b"foo", 0));
//! assert_eq!(hash, jhash(b"bar", jhash(b"foo", 0)));
//! ```
//!
//! ## Backing a `HashMap`
//!
//! ```
//! use std::collections::HashMap;
//! use jhash::JHashState;
//!
//! let mut map: HashMap<_, _, JHashState> = HashMap::default();
//! map.insert("abc", 123);
//! assert_eq!(map.get("abc"), Some(&123));
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod hasher;
pub mod lookup3;

pub use error::HashError;

// Re-export commonly used items
pub use hasher::{JHasher, JHashState, RandomJHashState};
pub use lookup3::{JHASH_INITVAL, jhash, jhash_mask, jhash_size, try_jhash};
