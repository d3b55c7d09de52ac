//! Domain model for the week-grid calendar engine.
//!
//! # Responsibility
//! - Define the immutable value types produced by the calendar generator.
//! - Define the week-start-day representation shared by settings, codecs
//!   and date math.
//!
//! # Invariants
//! - Every `Week::start_date` falls exactly on the configured week-start day.
//! - Model values are never mutated after construction; recomputation
//!   replaces them wholesale.

pub mod week;
pub mod week_start;
