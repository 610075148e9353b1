use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mdlive_engine::editing::{Cmd, Document};
use mdlive_engine::io::FileStore;
use mdlive_engine::view::{View, ViewState};

use crate::render::IMAGE_PLACEHOLDER;

pub struct App {
    pub document: Document<FileStore, ViewState>,
    pub export_dir: PathBuf,
    pub status: String,
}

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

impl App {
    pub fn new(session_dir: PathBuf, export_dir: PathBuf, height: usize) -> Self {
        let view = ViewState::with_preview_width(height, IMAGE_PLACEHOLDER.chars().count());
        let document = Document::restore(FileStore::new(session_dir), view);
        Self {
            document,
            export_dir,
            status: String::new(),
        }
    }

    pub fn resize(&mut self, height: usize) {
        self.document.view_mut().resize(height);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        let cmd = match key.code {
            KeyCode::Char('q') if ctrl => return Flow::Quit,
            KeyCode::Char('s') if ctrl => {
                self.export();
                return Flow::Continue;
            }
            KeyCode::Char('z') if ctrl && !shift => Cmd::Undo,
            KeyCode::Char('y') if ctrl => Cmd::Redo,
            KeyCode::Char('Z') | KeyCode::Char('z') if ctrl => Cmd::Redo,
            KeyCode::Char('b') if ctrl => Cmd::Bold,
            KeyCode::Char(c) if !ctrl => Cmd::InsertText {
                text: c.to_string(),
            },
            KeyCode::Enter => Cmd::Enter { shift },
            KeyCode::Tab => Cmd::Tab,
            KeyCode::Backspace => Cmd::DeleteBackward,
            KeyCode::Delete => Cmd::DeleteForward,
            code => {
                self.navigate(code, shift);
                return Flow::Continue;
            }
        };

        self.status.clear();
        self.document.apply(cmd);
        Flow::Continue
    }

    fn navigate(&mut self, code: KeyCode, extend: bool) {
        let view = self.document.view_mut();
        match code {
            KeyCode::Left => view.move_left(extend),
            KeyCode::Right => view.move_right(extend),
            KeyCode::Up => view.move_up(extend),
            KeyCode::Down => view.move_down(extend),
            KeyCode::Home => view.move_line_start(extend),
            KeyCode::End => view.move_line_end(extend),
            _ => {}
        }
    }

    /// Bracketed paste. A lone URL pasted over a selection turns the
    /// selection into a link to it.
    pub fn paste(&mut self, text: String) {
        let has_selection = !self.document.view().selection().is_empty();
        let url = (has_selection && looks_like_url(&text)).then(|| text.trim().to_string());
        self.document.apply(Cmd::Paste { text, url });
    }

    pub fn export(&mut self) {
        match self.document.export().write_to(&self.export_dir) {
            Ok(path) => self.status = format!("Exported to {}", path.display()),
            Err(e) => {
                log::warn!("Export failed: {e}");
                self.status = format!("Export failed: {e}");
            }
        }
    }
}

fn looks_like_url(text: &str) -> bool {
    let text = text.trim();
    (text.starts_with("http://") || text.starts_with("https://"))
        && !text.chars().any(char::is_whitespace)
}
