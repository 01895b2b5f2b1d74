//! Incremental, push-driven JSON filtering.
//!
//! `jsonsieve` consumes UTF-8 byte chunks and emits `(path, value)` pairs
//! for exactly the value positions selected by a set of JSONPath patterns.
//! The whole input is never materialized: for every object or array the
//! engine either descends incrementally (a pattern could match below),
//! captures the subtree in one piece (the subtree itself is a match), or
//! scans past it without building anything.
//!
//! # Examples
//!
//! ```rust
//! use jsonsieve::{StreamingSieve, Value};
//!
//! let mut sieve = StreamingSieve::new(["$.users[*]"]).unwrap();
//! let mut matches = Vec::new();
//! for chunk in [&br#"{"users":[{"id":1},"#[..], &br#"{"id":2}]}"#[..]] {
//!     matches.extend(sieve.feed(chunk).unwrap());
//! }
//! matches.extend(sieve.finish().unwrap());
//!
//! assert_eq!(matches.len(), 2);
//! assert_eq!(matches[0].path, "$.users[0]");
//! assert_eq!(matches[1].path, "$.users[1]");
//! ```

mod buffer;
mod bulk;
mod chunk_utils;
mod error;
mod node;
mod path;
mod pattern;
mod scalar;
mod scan;
mod sieve;
mod structural;
mod value;

pub use chunk_utils::{produce_chunks, produce_prefixes};
pub use error::SieveError;
pub use pattern::PathPattern;
pub use sieve::{Match, StreamingSieve};
pub use value::{Array, Map, Value};

#[cfg(test)]
mod tests;
