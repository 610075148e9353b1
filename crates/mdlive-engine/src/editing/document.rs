use xi_rope::Rope;

use crate::editing::commands::{Cmd, changed_ranges, diff};
use crate::editing::history::{HistoryEntry, HistoryStack};
use crate::editing::patch::Patch;
use crate::io::{Export, Store, keys};
use crate::parsing::rope::char_len;
use crate::parsing::{Rendering, decorate};
use crate::view::View;

/// Text a new session starts with.
pub const DEFAULT_CONTENT: &str = "# ";

/// The live document: raw Markdown text, caret, history and the collaborators
/// every change is pushed through.
///
/// The raw text lives in an `xi_rope::Rope` and always ends with `\n`. It
/// changes only through [`Document::set`], which runs the whole update in
/// order: normalize, persist, decorate, display, place the caret, then record
/// history.
///
/// ```rust
/// # use mdlive_engine::editing::{Cmd, Document};
/// # use mdlive_engine::io::MemoryStore;
/// # use mdlive_engine::view::ViewState;
/// let mut doc = Document::restore(MemoryStore::new(), ViewState::new(24));
/// assert_eq!(doc.get(), "# \n");
///
/// doc.apply(Cmd::InsertText { text: "Title".to_string() });
/// assert_eq!(doc.get(), "# Title\n");
/// assert_eq!(doc.caret(), 7);
/// ```
pub struct Document<S: Store, V: View> {
    buffer: Rope,
    caret: usize,
    version: u64,
    history: HistoryStack,
    composing: bool,
    rendering: Rendering,
    last_changed: Vec<std::ops::Range<usize>>,
    store: S,
    view: V,
}

impl<S: Store, V: View> Document<S, V> {
    /// An empty document with fresh history. Nothing is rendered or persisted
    /// until the first [`set`](Self::set).
    pub fn new(store: S, view: V) -> Self {
        Self {
            buffer: Rope::from(""),
            caret: 0,
            version: 0,
            history: HistoryStack::new(),
            composing: false,
            rendering: Rendering { lines: Vec::new() },
            last_changed: Vec::new(),
            store,
            view,
        }
    }

    /// Starts a session from whatever `store` holds.
    ///
    /// Stored history stacks are loaded first; unreadable ones are replaced
    /// by fresh ones. Then the saved text is shown with the caret before its
    /// terminator, or [`DEFAULT_CONTENT`] when nothing was saved.
    pub fn restore(store: S, view: V) -> Self {
        let mut doc = Self::new(store, view);
        let past = doc.load_stack(keys::HISTORY);
        let future = doc.load_stack(keys::REDO_STACK);
        doc.history = HistoryStack::from_parts(past, future);

        match doc.store.get(keys::RAW_CONTENT).filter(|s| !s.is_empty()) {
            Some(saved) => {
                let caret = char_len(&saved).saturating_sub(1);
                log::debug!("Restoring {} saved characters", caret);
                doc.set(&saved, caret, false);
            }
            None => doc.set(DEFAULT_CONTENT, char_len(DEFAULT_CONTENT), false),
        }
        doc
    }

    fn load_stack(&self, key: &str) -> Vec<HistoryEntry> {
        let Some(json) = self.store.get(key) else {
            return Vec::new();
        };
        HistoryStack::parse_stack(&json).unwrap_or_else(|e| {
            log::warn!("Ignoring malformed stored {key}: {e}");
            Vec::new()
        })
    }

    /// Current raw text, trailing terminator included.
    pub fn get(&self) -> String {
        self.buffer.to_string()
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn rendering(&self) -> &Rendering {
        &self.rendering
    }

    pub fn is_composing(&self) -> bool {
        self.composing
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replaces the whole text and caret.
    ///
    /// A missing final `\n` is appended. The caret is clamped to the text.
    /// Unless `suppress_history` is set, the new state is recorded in history
    /// when its content differs from the latest entry.
    pub fn set(&mut self, content: &str, caret_offset: usize, suppress_history: bool) {
        let text = with_terminator(content);

        let delta = diff(&self.buffer, &text);
        self.last_changed = changed_ranges(&delta);
        self.buffer = delta.apply(&self.buffer);
        self.version += 1;
        self.persist(keys::RAW_CONTENT, &text);

        self.rendering = decorate(&self.buffer);
        self.view.display(&self.rendering.lines);

        self.caret = caret_offset.min(char_len(&text));
        self.view.set_caret_offset(self.caret);

        if !suppress_history && self.history.push(&text, self.caret) {
            self.persist_history();
        }
        log::debug!(
            "Set v{}: {} lines, caret {}",
            self.version,
            self.rendering.lines.len(),
            self.caret
        );
    }

    /// Records a state in history without showing it.
    fn checkpoint(&mut self, content: &str, caret_offset: usize) {
        if self.history.push(&with_terminator(content), caret_offset) {
            self.persist_history();
        }
    }

    /// Steps back one history state. Returns false when there is none.
    pub fn undo(&mut self) -> bool {
        let Some(entry) = self.history.undo() else {
            log::debug!("Nothing to undo");
            return false;
        };
        self.set(&entry.content, entry.caret_offset, true);
        self.persist_history();
        true
    }

    /// Re-applies the most recently undone state. Returns false when there
    /// is none.
    pub fn redo(&mut self) -> bool {
        let Some(entry) = self.history.redo() else {
            log::debug!("Nothing to redo");
            return false;
        };
        self.set(&entry.content, entry.caret_offset, true);
        self.persist_history();
        true
    }

    /// Runs a command against the current text and the view's selection.
    ///
    /// While a composition is active only `CompositionEnd` has any effect.
    pub fn apply(&mut self, cmd: Cmd) -> Patch {
        let version = self.version;

        match cmd {
            Cmd::CompositionStart => self.composing = true,
            Cmd::CompositionEnd { content } => {
                self.composing = false;
                let caret = self.view.caret_offset();
                self.set(&content, caret, false);
            }
            cmd if self.composing => log::debug!("Ignoring {cmd:?} during composition"),
            Cmd::Input { content } => {
                let caret = self.view.caret_offset();
                self.set(&content, caret, false);
            }
            Cmd::Undo => {
                self.undo();
            }
            Cmd::Redo => {
                self.redo();
            }
            cmd => {
                if let Some(compiled) = cmd.compile(&self.buffer, self.view.selection()) {
                    if let Some(step) = compiled.checkpoint {
                        let text = step.delta.apply(&self.buffer).to_string();
                        self.checkpoint(&text, step.caret);
                    }
                    let text = compiled.edit.delta.apply(&self.buffer).to_string();
                    self.set(&text, compiled.edit.caret, false);
                }
            }
        }

        let changed = if self.version == version {
            Vec::new()
        } else {
            std::mem::take(&mut self.last_changed)
        };
        Patch {
            changed,
            caret: self.caret,
            version: self.version,
        }
    }

    /// The current text packaged for download.
    pub fn export(&self) -> Export {
        Export::from_text(&self.get())
    }

    fn persist(&mut self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            log::warn!("Failed to persist {key}: {e}");
        }
    }

    fn persist_history(&mut self) {
        match (self.history.past_json(), self.history.future_json()) {
            (Ok(past), Ok(future)) => {
                self.persist(keys::HISTORY, &past);
                self.persist(keys::REDO_STACK, &future);
            }
            (Err(e), _) | (_, Err(e)) => log::warn!("Failed to encode history: {e}"),
        }
    }
}

fn with_terminator(content: &str) -> String {
    let mut text = content.to_string();
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{MemoryStore, StoreError};
    use crate::parsing::lines::LineKind;
    use crate::view::ViewState;
    use pretty_assertions::assert_eq;

    type TestDocument = Document<MemoryStore, ViewState>;

    fn fresh() -> TestDocument {
        Document::new(MemoryStore::new(), ViewState::new(10))
    }

    fn history_contents(doc: &TestDocument) -> Vec<String> {
        doc.history().past().map(|e| e.content.clone()).collect()
    }

    #[test]
    fn set_appends_terminator_and_renders() {
        let mut doc = fresh();
        doc.set("# Title", 7, false);
        assert_eq!(doc.get(), "# Title\n");
        assert_eq!(doc.caret(), 7);
        assert_eq!(doc.rendering().lines[0].kind(), LineKind::Heading(1));
        assert_eq!(doc.view().caret_offset(), 7);
        assert_eq!(doc.view().lines().len(), 2);
    }

    #[test]
    fn set_persists_content_and_history() {
        let mut doc = fresh();
        doc.set("abc", 3, false);
        assert_eq!(doc.store().get(keys::RAW_CONTENT).as_deref(), Some("abc\n"));
        assert_eq!(
            doc.store().get(keys::HISTORY).as_deref(),
            Some(r#"[{"content":"","caretPos":0},{"content":"abc\n","caretPos":3}]"#)
        );
        assert_eq!(doc.store().get(keys::REDO_STACK).as_deref(), Some("[]"));
    }

    #[test]
    fn caret_is_clamped_to_text() {
        let mut doc = fresh();
        doc.set("ab", 99, false);
        assert_eq!(doc.caret(), 3);
    }

    #[test]
    fn identical_content_is_not_recorded_twice() {
        let mut doc = fresh();
        doc.set("a", 1, false);
        doc.set("a\n", 0, false);
        assert_eq!(history_contents(&doc), vec!["", "a\n"]);
    }

    #[test]
    fn suppressed_set_leaves_history_alone() {
        let mut doc = fresh();
        doc.set("a", 1, true);
        assert_eq!(history_contents(&doc), vec![""]);
    }

    #[test]
    fn restore_defaults_to_heading_marker() {
        let doc = Document::restore(MemoryStore::new(), ViewState::new(10));
        assert_eq!(doc.get(), "# \n");
        assert_eq!(doc.caret(), 2);
    }

    #[test]
    fn restore_places_caret_before_terminator() {
        let store = MemoryStore::new().with(keys::RAW_CONTENT, "saved\n");
        let doc = Document::restore(store, ViewState::new(10));
        assert_eq!(doc.get(), "saved\n");
        assert_eq!(doc.caret(), 5);
    }

    #[test]
    fn restore_treats_empty_content_as_missing() {
        let store = MemoryStore::new().with(keys::RAW_CONTENT, "");
        let doc = Document::restore(store, ViewState::new(10));
        assert_eq!(doc.get(), "# \n");
    }

    #[test]
    fn restore_survives_malformed_history() {
        let store = MemoryStore::new()
            .with(keys::HISTORY, "{oops")
            .with(keys::REDO_STACK, "nope");
        let mut doc = Document::restore(store, ViewState::new(10));
        assert_eq!(history_contents(&doc), vec!["", "# \n"]);
        assert!(doc.undo());
        assert_eq!(doc.get(), "\n");
    }

    #[test]
    fn restore_reuses_stored_history() {
        let store = MemoryStore::new()
            .with(keys::RAW_CONTENT, "b\n")
            .with(
                keys::HISTORY,
                r#"[{"content":"a\n","caretPos":1},{"content":"b\n","caretPos":1}]"#,
            );
        let mut doc = Document::restore(store, ViewState::new(10));
        assert_eq!(history_contents(&doc), vec!["a\n", "b\n"]);
        assert!(doc.undo());
        assert_eq!(doc.get(), "a\n");
    }

    #[test]
    fn enter_continuation_undoes_in_two_steps() {
        let mut doc = fresh();
        doc.set("3. third", 8, false);
        let patch = doc.apply(Cmd::Enter { shift: false });
        assert_eq!(doc.get(), "3. third\n4. \n");
        assert_eq!(patch.caret, 12);

        doc.apply(Cmd::Undo);
        assert_eq!(doc.get(), "3. third\n\n");
        assert_eq!(doc.caret(), 9);

        doc.apply(Cmd::Undo);
        assert_eq!(doc.get(), "3. third\n");
        assert_eq!(doc.caret(), 8);
    }

    #[test]
    fn paste_link_over_selection() {
        let mut doc = fresh();
        doc.set("world wide", 0, false);
        doc.view_mut().select(2..6);
        doc.apply(Cmd::Paste {
            text: "hello".to_string(),
            url: Some("http://x".to_string()),
        });
        assert_eq!(doc.get(), "wo[rld ](http://x)wide\n");
        assert_eq!(doc.caret(), 7);

        doc.apply(Cmd::Undo);
        assert_eq!(doc.get(), "wohellowide\n");
    }

    #[test]
    fn composition_defers_input_until_end() {
        let mut doc = fresh();
        doc.set("a", 1, false);
        doc.apply(Cmd::CompositionStart);
        let patch = doc.apply(Cmd::Input {
            content: "ak".to_string(),
        });
        assert!(patch.changed.is_empty());
        assert_eq!(doc.get(), "a\n");

        doc.apply(Cmd::Bold);
        assert_eq!(doc.get(), "a\n");

        doc.apply(Cmd::CompositionEnd {
            content: "a日".to_string(),
        });
        assert!(!doc.is_composing());
        assert_eq!(doc.get(), "a日\n");
    }

    #[test]
    fn patch_reports_changed_bytes_and_version() {
        let mut doc = fresh();
        doc.set("ab", 1, false);
        let before = doc.version();
        let patch = doc.apply(Cmd::InsertText {
            text: "XY".to_string(),
        });
        assert_eq!(patch.changed, vec![1..3]);
        assert_eq!(patch.caret, 3);
        assert_eq!(patch.version, before + 1);
    }

    #[test]
    fn undo_and_redo_without_history_are_no_ops() {
        let mut doc = fresh();
        assert!(!doc.undo());
        assert!(!doc.redo());
        let patch = doc.apply(Cmd::Redo);
        assert!(patch.changed.is_empty());
        assert_eq!(patch.version, 0);
    }

    #[test]
    fn redo_store_is_updated_by_undo() {
        let mut doc = fresh();
        doc.set("a", 1, false);
        doc.undo();
        assert_eq!(
            doc.store().get(keys::REDO_STACK).as_deref(),
            Some(r#"[{"content":"a\n","caretPos":1}]"#)
        );
        assert!(doc.redo());
        assert_eq!(doc.get(), "a\n");
        assert_eq!(doc.store().get(keys::REDO_STACK).as_deref(), Some("[]"));
    }

    #[test]
    fn export_strips_terminator() {
        let mut doc = fresh();
        doc.set("# Notes", 0, false);
        assert_eq!(doc.export().content, "# Notes");
    }

    struct FailingStore;

    impl Store for FailingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::InvalidKey(key.to_string()))
        }
    }

    #[test]
    fn store_failures_do_not_stop_editing() {
        let mut doc = Document::restore(FailingStore, ViewState::new(10));
        doc.apply(Cmd::InsertText {
            text: "x".to_string(),
        });
        assert_eq!(doc.get(), "# x\n");
        assert!(doc.history().can_undo());
    }
}
