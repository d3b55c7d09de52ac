//! Date/key codecs joining generated weeks to external note naming.
//!
//! # Responsibility
//! - Produce and parse the canonical week lookup key.
//! - Expand `{{...}}` dynamic segments in filename/template strings.
//! - Extract parseable date-format strings from mixed filename patterns.
//!
//! # Invariants
//! - The canonical key format is bit-exact; it is the join key against an
//!   externally defined note index and must never drift.
//! - Codec inputs are programmatic data: malformed keys fail fast instead
//!   of being silently repaired.

pub mod pattern;
pub mod template;
pub mod week_key;
