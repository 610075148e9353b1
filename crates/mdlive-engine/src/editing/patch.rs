use std::ops::Range;

/// Result of applying a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Byte ranges of the new text that differ from the old one.
    pub changed: Vec<Range<usize>>,
    /// Caret as a character offset.
    pub caret: usize,
    pub version: u64,
}
