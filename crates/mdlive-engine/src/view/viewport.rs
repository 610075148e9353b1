/// Direction and distance the viewport moved to reveal the caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scroll {
    None,
    Up(usize),
    Down(usize),
}

/// The visible window of rows: `[top, top + height)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub top: usize,
    pub height: usize,
}

impl Viewport {
    pub fn new(height: usize) -> Self {
        Self { top: 0, height }
    }

    pub fn bottom(&self) -> usize {
        self.top + self.height
    }

    /// Scrolls by the minimum needed to show rows `[caret_top, caret_bottom)`.
    ///
    /// A caret above the window scrolls up by exactly the overflow, one below
    /// scrolls down by exactly the overflow, and one already visible leaves
    /// the window alone.
    pub fn reveal(&mut self, caret_top: usize, caret_bottom: usize) -> Scroll {
        if caret_top < self.top {
            let by = self.top - caret_top;
            self.top = caret_top;
            Scroll::Up(by)
        } else if caret_bottom > self.bottom() {
            let by = caret_bottom - self.bottom();
            self.top += by;
            Scroll::Down(by)
        } else {
            Scroll::None
        }
    }

    /// Changes the window height, keeping the top row.
    pub fn resize(&mut self, height: usize) {
        self.height = height;
    }
}
