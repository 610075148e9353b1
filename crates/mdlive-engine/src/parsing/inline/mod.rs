//! # Inline Decoration
//!
//! Marks bold, inline code, links and images inside one line of text.
//!
//! ## Model
//!
//! The line text is never rewritten. Each rule adds zero-width marks
//! (open, close, image preview) at byte offsets, so stripping the marks
//! always reproduces the source line. HTML escaping happens only when the
//! result is serialized with [`Decorated::to_markup`].
//!
//! ## Modules
//!
//! - **`types`**: `Decorated`, `Mark`, `InlineSpan`, flattened `Piece`s
//! - **`kinds`**: delimiter patterns owned per construct
//! - **`rules`**: the ordered rule table
//!
//! ## Rule Order
//!
//! `**` `__` `*` `_` then ``` `` ``` and `` ` `` then images then links.
//! Every rule scans the full line, including text an earlier rule already
//! styled. Unterminated markup stays literal.

pub mod kinds;
pub mod rules;
pub mod types;

pub use rules::Rule;
pub use types::{Decorated, InlineSpan, Mark, MarkKind, Piece, Style};

/// Decorates one line of raw text.
pub fn decorate_inline(raw: &str) -> Decorated {
    let mut decorated = Decorated::literal(raw);
    for rule in Rule::ORDER {
        rule.apply(&mut decorated);
    }
    decorated
}
