use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Maximum number of entries kept in the past stack.
pub const HISTORY_LIMIT: usize = 100;

/// A snapshot of the document text and caret.
///
/// Serialized with the field names of the browser session format so stored
/// histories stay readable across hosts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub content: String,
    #[serde(rename = "caretPos")]
    pub caret_offset: usize,
}

impl HistoryEntry {
    pub fn new(content: impl Into<String>, caret_offset: usize) -> Self {
        Self {
            content: content.into(),
            caret_offset,
        }
    }
}

/// Linear undo/redo history.
///
/// The past stack is `older` followed by `current`, so it is never empty and
/// its top is the state currently shown. `future` holds undone entries, the
/// next one to redo last. Any new edit clears `future`, so history never
/// branches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryStack {
    older: VecDeque<HistoryEntry>,
    current: HistoryEntry,
    future: Vec<HistoryEntry>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a history from stored stacks.
    ///
    /// An empty `past` is reseeded, and a `past` longer than the limit keeps
    /// its newest entries.
    pub fn from_parts(past: Vec<HistoryEntry>, future: Vec<HistoryEntry>) -> Self {
        let mut older = VecDeque::from(past);
        let Some(current) = older.pop_back() else {
            return Self {
                future,
                ..Self::default()
            };
        };
        let mut stack = Self {
            older,
            current,
            future,
        };
        stack.evict();
        stack
    }

    /// Number of entries in the past stack, current state included.
    pub fn past_len(&self) -> usize {
        self.older.len() + 1
    }

    fn evict(&mut self) {
        while self.past_len() > HISTORY_LIMIT {
            self.older.pop_front();
        }
    }

    fn advance(&mut self, entry: HistoryEntry) {
        let previous = std::mem::replace(&mut self.current, entry);
        self.older.push_back(previous);
        self.evict();
    }

    /// Records a new state. Returns false, changing nothing, when `content`
    /// equals the current state's content.
    pub fn push(&mut self, content: &str, caret_offset: usize) -> bool {
        if self.current.content == content {
            return false;
        }
        self.advance(HistoryEntry::new(content, caret_offset));
        self.future.clear();
        true
    }

    /// Steps back one state and returns the state to show.
    ///
    /// `None` when only one state remains.
    pub fn undo(&mut self) -> Option<HistoryEntry> {
        let previous = self.older.pop_back()?;
        let undone = std::mem::replace(&mut self.current, previous);
        self.future.push(undone);
        Some(self.current.clone())
    }

    /// Re-applies the most recently undone state and returns it.
    pub fn redo(&mut self) -> Option<HistoryEntry> {
        let entry = self.future.pop()?;
        self.advance(entry.clone());
        Some(entry)
    }

    /// The state currently shown.
    pub fn current(&self) -> &HistoryEntry {
        &self.current
    }

    /// The past stack, oldest first, ending with the current state.
    pub fn past(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.older.iter().chain(std::iter::once(&self.current))
    }

    pub fn future(&self) -> &[HistoryEntry] {
        &self.future
    }

    pub fn can_undo(&self) -> bool {
        !self.older.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// JSON array of the past stack, oldest first.
    pub fn past_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.past().collect::<Vec<_>>())
    }

    /// JSON array of the future stack.
    pub fn future_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.future)
    }

    /// Parses a stored stack.
    pub fn parse_stack(json: &str) -> Result<Vec<HistoryEntry>, serde_json::Error> {
        serde_json::from_str(json)
    }
}
