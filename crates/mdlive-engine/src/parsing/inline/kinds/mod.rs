//! # Inline Kinds
//!
//! Inline delimiter patterns, one type per construct. The rule table in
//! `rules` picks these up and prepends the escape guard.
//!
//! Every capture body is `[^\r]+?` rather than `.+?`: a carriage return left
//! in a line by a CRLF file never sits inside a styled span.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::{Escape, Link};
