pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod thematic_break;

pub use block_quote::{BlockQuote, QuoteParts};
pub use code_fence::{CodeFence, FenceSide};
pub use heading::{Heading, HeadingParts};
pub use list::{BulletParts, ListItem, ListPrefix, OrderedParts};
pub use thematic_break::ThematicBreak;
