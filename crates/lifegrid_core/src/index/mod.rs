//! Note-index reconciliation against the configured week start.
//!
//! # Responsibility
//! - Correct externally built week keys whose producer assumed a
//!   different week-start day than the one now configured.
//!
//! # Invariants
//! - The index is an immutable snapshot for one render; the collaborator
//!   refreshes it, this crate only re-keys it.

pub mod reconcile;
