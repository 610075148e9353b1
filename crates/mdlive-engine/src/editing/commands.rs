use std::borrow::Cow;
use std::ops::Range;

use xi_rope::delta::{Builder, DeltaElement};
use xi_rope::{Delta, Rope, RopeInfo};

use crate::editing::continuation::Continuation;
use crate::parsing::rope::{byte_of_char, char_len};

/// Editing commands accepted by [`Document::apply`](crate::editing::Document::apply).
///
/// Offsets come from the view's selection and are character offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// The host's plain text changed to `content`. Ignored while composing.
    Input { content: String },
    CompositionStart,
    /// Composition finished with the host text `content`.
    CompositionEnd { content: String },
    /// Newline, continuing a list or quote unless `shift` is held.
    Enter { shift: bool },
    /// Replace the selection with two spaces.
    Tab,
    /// Wrap the selection (or the caret point) in `**`.
    Bold,
    /// Paste `text`; with `url` the selection becomes a link to it.
    Paste { text: String, url: Option<String> },
    Undo,
    Redo,
    InsertText { text: String },
    DeleteBackward,
    DeleteForward,
}

/// One text change against the pre-command buffer and the caret after it.
#[derive(Debug, Clone)]
pub struct Edit {
    pub delta: Delta<RopeInfo>,
    pub caret: usize,
}

/// A compiled text command.
///
/// When present, `checkpoint` is recorded in history without being shown,
/// so a single undo steps back to it. Both edits apply to the buffer as it
/// was before the command.
#[derive(Debug, Clone)]
pub struct Compiled {
    pub checkpoint: Option<Edit>,
    pub edit: Edit,
}

impl Compiled {
    fn single(edit: Edit) -> Self {
        Self {
            checkpoint: None,
            edit,
        }
    }
}

/// The selection resolved against the buffer text.
struct Target<'a> {
    text: Cow<'a, str>,
    start: usize,
    end: usize,
    bytes: Range<usize>,
}

impl<'a> Target<'a> {
    fn new(buffer: &'a Rope, selection: Range<usize>) -> Self {
        let text = buffer.slice_to_cow(..);
        let len = char_len(&text);
        let start = selection.start.min(len);
        let end = selection.end.clamp(start, len);
        let bytes = byte_of_char(&text, start)..byte_of_char(&text, end);
        Self {
            text,
            start,
            end,
            bytes,
        }
    }

    fn selected(&self) -> &str {
        &self.text[self.bytes.clone()]
    }

    /// Text of the caret's line up to the caret.
    fn line_before_caret(&self) -> &str {
        let before = &self.text[..self.bytes.start];
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        &before[line_start..]
    }

    fn replace(&self, with: &str, caret: usize) -> Edit {
        self.replace_chars(self.start..self.end, with, caret)
    }

    fn replace_chars(&self, chars: Range<usize>, with: &str, caret: usize) -> Edit {
        let bytes = byte_of_char(&self.text, chars.start)..byte_of_char(&self.text, chars.end);
        let mut builder = Builder::new(self.text.len());
        builder.replace(bytes, Rope::from(with));
        Edit {
            delta: builder.build(),
            caret,
        }
    }
}

impl Cmd {
    /// Compiles a text-changing command into deltas over `buffer`.
    ///
    /// Returns `None` for commands handled by the document itself (input,
    /// composition, history) and for edits with nothing to change.
    pub fn compile(&self, buffer: &Rope, selection: Range<usize>) -> Option<Compiled> {
        let target = Target::new(buffer, selection);
        let start = target.start;

        let compiled = match self {
            Cmd::Enter { shift } => {
                let newline = target.replace("\n", start + 1);
                match Continuation::detect(target.line_before_caret()).filter(|_| !shift) {
                    Some(continuation) => {
                        let prefix = continuation.prefix();
                        let continued = target.replace(
                            &format!("\n{prefix}"),
                            start + 1 + char_len(&prefix),
                        );
                        Compiled {
                            checkpoint: Some(newline),
                            edit: continued,
                        }
                    }
                    None => Compiled::single(newline),
                }
            }
            Cmd::Tab => Compiled::single(target.replace("  ", start + 2)),
            Cmd::Bold => {
                let wrapped = format!("**{}**", target.selected());
                Compiled::single(target.replace(&wrapped, target.end + 2))
            }
            Cmd::Paste { text, url: None } | Cmd::InsertText { text } => {
                Compiled::single(target.replace(text, start + char_len(text)))
            }
            Cmd::Paste {
                text,
                url: Some(url),
            } => {
                let label = match target.selected() {
                    "" => text.as_str(),
                    selected => selected,
                };
                let link = format!("[{label}]({url})");
                Compiled {
                    checkpoint: Some(target.replace(text, start + char_len(text))),
                    edit: target.replace(&link, start + 1 + char_len(label)),
                }
            }
            Cmd::DeleteBackward => {
                if target.start < target.end {
                    Compiled::single(target.replace("", start))
                } else if start == 0 {
                    return None;
                } else {
                    Compiled::single(target.replace_chars(start - 1..start, "", start - 1))
                }
            }
            Cmd::DeleteForward => {
                if target.start < target.end {
                    Compiled::single(target.replace("", start))
                } else if start >= char_len(&target.text) {
                    return None;
                } else {
                    Compiled::single(target.replace_chars(start..start + 1, "", start))
                }
            }
            Cmd::Input { .. }
            | Cmd::CompositionStart
            | Cmd::CompositionEnd { .. }
            | Cmd::Undo
            | Cmd::Redo => return None,
        };
        Some(compiled)
    }
}

/// Minimal delta turning `old` into `new`: one replacement between the
/// common prefix and the common suffix.
pub fn diff(old: &Rope, new: &str) -> Delta<RopeInfo> {
    let old_text = old.slice_to_cow(..);
    let prefix: usize = old_text
        .chars()
        .zip(new.chars())
        .take_while(|(a, b)| a == b)
        .map(|(c, _)| c.len_utf8())
        .sum();
    let suffix: usize = old_text[prefix..]
        .chars()
        .rev()
        .zip(new[prefix..].chars().rev())
        .take_while(|(a, b)| a == b)
        .map(|(c, _)| c.len_utf8())
        .sum();

    let mut builder = Builder::new(old.len());
    builder.replace(
        prefix..old_text.len() - suffix,
        Rope::from(&new[prefix..new.len() - suffix]),
    );
    builder.build()
}

/// Byte ranges of the new text touched by `delta`. Pure deletions show up
/// as empty ranges at the deletion point.
pub fn changed_ranges(delta: &Delta<RopeInfo>) -> Vec<Range<usize>> {
    let mut changed: Vec<Range<usize>> = Vec::new();
    let mut old_pos = 0;
    let mut new_pos = 0;

    for op in delta.els.iter() {
        match op {
            DeltaElement::Copy(from, to) => {
                if *from > old_pos {
                    push_change(&mut changed, new_pos..new_pos);
                }
                new_pos += to - from;
                old_pos = *to;
            }
            DeltaElement::Insert(inserted) => {
                push_change(&mut changed, new_pos..new_pos + inserted.len());
                new_pos += inserted.len();
            }
        }
    }
    if old_pos < delta.base_len {
        push_change(&mut changed, new_pos..new_pos);
    }
    changed
}

fn push_change(changed: &mut Vec<Range<usize>>, range: Range<usize>) {
    if let Some(last) = changed.last_mut()
        && last.end >= range.start
    {
        last.end = last.end.max(range.end);
        return;
    }
    changed.push(range);
}
