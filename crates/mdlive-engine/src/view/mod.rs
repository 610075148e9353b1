//! # View Contract
//!
//! The engine renders into anything implementing [`View`]. A view shows the
//! annotated lines, reports the caret and selection as flat character
//! offsets, and places the caret back at an offset after every render.
//!
//! - **`caret`**: `CaretMapper`, offset to line/column and back
//! - **`viewport`**: minimal scrolling to keep the caret visible
//! - **`state`**: `ViewState`, a headless view used by tests and the terminal host

pub mod caret;
pub mod state;
pub mod viewport;

use std::ops::Range;

use crate::parsing::lines::AnnotatedLine;

pub use caret::{CaretMapper, ViewPosition};
pub use state::ViewState;
pub use viewport::{Scroll, Viewport};

pub trait View {
    /// Replaces the displayed content.
    fn display(&mut self, lines: &[AnnotatedLine]);

    /// Selected character range; empty when there is only a caret.
    fn selection(&self) -> Range<usize>;

    /// The caret offset, which is the start of the selection.
    fn caret_offset(&self) -> usize {
        self.selection().start
    }

    /// Collapses the selection to `offset` and scrolls it into view.
    fn set_caret_offset(&mut self, offset: usize);
}
