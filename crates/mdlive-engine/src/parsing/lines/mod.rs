//! # Line Classification
//!
//! Each source line gets exactly one structural kind, decided by an ordered
//! rule list with a little state carried between lines.
//!
//! ## Modules
//!
//! - **`kinds`**: one type per construct owning its delimiters and patterns
//!   (CodeFence, Heading, BlockQuote, ListItem, ThematicBreak)
//! - **`classify`**: `MarkdownLineClassifier` and the carried `ClassifierState`
//! - **`types`**: `AnnotatedLine`, the decorated result for one line
//!
//! ## Key Invariants
//!
//! - One output line per input line, in order
//! - Captured groups concatenate back to the input line
//! - Fences toggle state; headings never match inside a fence
//! - A blockquote stays open until an empty line

pub mod classify;
pub mod kinds;
pub mod types;

pub use classify::{ClassifierState, LineClass, MarkdownLineClassifier};
pub use types::{AnnotatedLine, LineKind};
