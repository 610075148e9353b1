use std::ops::Range;

use crate::parsing::lines::AnnotatedLine;

use super::View;
use super::caret::{CaretMapper, ViewPosition};
use super::viewport::{Scroll, Viewport};

/// A headless view: the displayed lines, caret/selection and scroll state.
///
/// Hosts draw from it and forward navigation keys to it. The selection is an
/// anchor plus a moving head, both character offsets.
#[derive(Debug, Clone)]
pub struct ViewState {
    lines: Vec<AnnotatedLine>,
    mapper: CaretMapper,
    anchor: usize,
    head: usize,
    viewport: Viewport,
    /// Column kept while moving vertically through shorter lines.
    goal_column: Option<usize>,
    last_scroll: Scroll,
}

impl ViewState {
    pub fn new(height: usize) -> Self {
        Self::with_preview_width(height, CaretMapper::DEFAULT_PREVIEW_WIDTH)
    }

    pub fn with_preview_width(height: usize, preview_width: usize) -> Self {
        Self {
            lines: Vec::new(),
            mapper: CaretMapper::with_preview_width(&[], preview_width),
            anchor: 0,
            head: 0,
            viewport: Viewport::new(height),
            goal_column: None,
            last_scroll: Scroll::None,
        }
    }

    pub fn lines(&self) -> &[AnnotatedLine] {
        &self.lines
    }

    pub fn mapper(&self) -> &CaretMapper {
        &self.mapper
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The scroll applied by the most recent caret placement.
    pub fn last_scroll(&self) -> Scroll {
        self.last_scroll
    }

    pub fn caret_position(&self) -> ViewPosition {
        self.mapper.position_of(self.head)
    }

    pub fn resize(&mut self, height: usize) {
        self.viewport.resize(height);
        self.reveal_head();
    }

    /// Selects `range`, with the caret at its end.
    pub fn select(&mut self, range: Range<usize>) {
        let len = self.mapper.char_len();
        self.anchor = range.start.min(len);
        self.head = range.end.min(len);
        self.goal_column = None;
        self.reveal_head();
    }

    /// Moves the caret to `offset`, extending the selection if asked.
    pub fn move_to(&mut self, offset: usize, extend: bool) {
        self.head = offset.min(self.mapper.char_len());
        if !extend {
            self.anchor = self.head;
        }
        self.reveal_head();
    }

    pub fn move_left(&mut self, extend: bool) {
        self.goal_column = None;
        let sel = self.selection();
        if !extend && !sel.is_empty() {
            self.move_to(sel.start, false);
        } else {
            self.move_to(self.head.saturating_sub(1), extend);
        }
    }

    pub fn move_right(&mut self, extend: bool) {
        self.goal_column = None;
        let sel = self.selection();
        if !extend && !sel.is_empty() {
            self.move_to(sel.end, false);
        } else {
            self.move_to(self.head + 1, extend);
        }
    }

    pub fn move_up(&mut self, extend: bool) {
        let pos = self.caret_position();
        if pos.line == 0 {
            self.move_to(0, extend);
            return;
        }
        self.move_vertically(pos.line - 1, pos.column, extend);
    }

    pub fn move_down(&mut self, extend: bool) {
        let pos = self.caret_position();
        if pos.line + 1 >= self.mapper.line_count() {
            self.move_to(self.mapper.char_len(), extend);
            return;
        }
        self.move_vertically(pos.line + 1, pos.column, extend);
    }

    pub fn move_line_start(&mut self, extend: bool) {
        self.goal_column = None;
        let line = self.caret_position().line;
        self.move_to(self.mapper.line_start(line), extend);
    }

    pub fn move_line_end(&mut self, extend: bool) {
        self.goal_column = None;
        let line = self.caret_position().line;
        let end = self.mapper.line_start(line) + self.mapper.line_chars(line);
        self.move_to(end, extend);
    }

    fn move_vertically(&mut self, line: usize, column: usize, extend: bool) {
        let goal = *self.goal_column.get_or_insert(column);
        let offset = self.mapper.offset_of(ViewPosition::new(line, goal));
        self.move_to(offset, extend);
    }

    fn reveal_head(&mut self) {
        let line = self.caret_position().line;
        self.last_scroll = self.viewport.reveal(line, line + 1);
    }
}

impl View for ViewState {
    fn display(&mut self, lines: &[AnnotatedLine]) {
        self.lines = lines.to_vec();
        self.mapper = CaretMapper::with_preview_width(lines, self.mapper.preview_width());
        let len = self.mapper.char_len();
        self.anchor = self.anchor.min(len);
        self.head = self.head.min(len);
    }

    fn selection(&self) -> Range<usize> {
        self.anchor.min(self.head)..self.anchor.max(self.head)
    }

    fn set_caret_offset(&mut self, offset: usize) {
        self.goal_column = None;
        self.move_to(offset, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::decorate_text;
    use crate::view::viewport::Scroll;

    fn view_of(text: &str, height: usize) -> ViewState {
        let mut v = ViewState::new(height);
        v.display(&decorate_text(text).lines);
        v
    }

    #[test]
    fn caret_offset_is_selection_start() {
        let mut v = view_of("hello\n", 5);
        v.select(4..1);
        assert_eq!(v.selection(), 1..4);
        assert_eq!(v.caret_offset(), 1);
    }

    #[test]
    fn set_caret_clamps_and_collapses() {
        let mut v = view_of("ab\n", 5);
        v.select(0..2);
        v.set_caret_offset(40);
        assert_eq!(v.selection(), 3..3);
    }

    #[test]
    fn vertical_moves_keep_goal_column() {
        let mut v = view_of("abcdef\nab\nabcdef\n", 5);
        v.set_caret_offset(5);
        v.move_down(false);
        assert_eq!(v.caret_position(), ViewPosition::new(1, 2));
        v.move_down(false);
        assert_eq!(v.caret_position(), ViewPosition::new(2, 5));
    }

    #[test]
    fn shift_arrows_extend_selection() {
        let mut v = view_of("hello\n", 5);
        v.set_caret_offset(1);
        v.move_right(true);
        v.move_right(true);
        assert_eq!(v.selection(), 1..3);
        v.move_left(false);
        assert_eq!(v.selection(), 1..1);
    }

    #[test]
    fn line_start_and_end() {
        let mut v = view_of("- item\nnext\n", 5);
        v.set_caret_offset(3);
        v.move_line_end(false);
        assert_eq!(v.caret_offset(), 6);
        v.move_line_start(false);
        assert_eq!(v.caret_offset(), 0);
    }

    #[test]
    fn placing_caret_below_window_scrolls_minimally() {
        let text: String = (0..20).map(|i| format!("line {i}\n")).collect();
        let mut v = view_of(&text, 4);
        let offset = v.mapper().line_start(9);
        v.set_caret_offset(offset);
        assert_eq!(v.last_scroll(), Scroll::Down(6));
        assert_eq!(v.viewport().top, 6);

        v.set_caret_offset(v.mapper().line_start(7));
        assert_eq!(v.last_scroll(), Scroll::None);

        v.set_caret_offset(0);
        assert_eq!(v.last_scroll(), Scroll::Up(6));
    }
}
