//! Wildcard matching for byte and Unicode text.
//!
//! Patterns may contain two wildcard markers:
//! - `*` matches zero or more symbols
//! - `?` matches exactly one symbol
//!
//! Everything else is compared literally, with no escape mechanism, and the
//! match is anchored at both ends of the subject. The subject never carries
//! wildcard semantics: a `*` or `?` in the subject is an ordinary symbol.
//!
//! The same algorithm is instantiated for two symbol widths: raw bytes
//! ([`matches_bytes`]) and decoded Unicode scalar values ([`matches_chars`]),
//! so multi-byte characters are never compared at the sub-character level.
//! The [`matches`] function is the generic core behind both.
//!
//! Matching is a single forward pass that retains one backtracking
//! checkpoint, so memory use is constant and adversarial repetitive inputs
//! cannot trigger exponential recursion.
//!
//! # Examples
//!
//! ```
//! use wildcompare::matches_str;
//!
//! assert!(matches_str("*.txt", "readme.txt"));
//! assert!(matches_str("test?.log", "test1.log"));
//! assert!(!matches_str("test?.log", "test.log"));
//! ```
//!
//! Case-insensitive matching is a preprocessing transform, not a separate
//! algorithm: both inputs are folded before matching.
//!
//! ```
//! use wildcompare::matches_str_ignore_case;
//!
//! assert!(matches_str_ignore_case("hello*", "HELLO WORLD"));
//! ```

mod matcher;
mod symbol;

pub use matcher::{matches, matches_bytes, matches_chars, matches_str, matches_str_ignore_case};
pub use symbol::Symbol;
