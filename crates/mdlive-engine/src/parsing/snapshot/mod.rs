//! # Snapshot Testing Support
//!
//! Utilities for testing the decorator via snapshot assertions and invariant
//! checks.
//!
//! - **`normalize`**: renders a `Rendering` as compact text for `insta`
//! - **`invariants`**: runtime checks (line count, lossless text, balanced marks)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::describe;
