pub mod inline;
pub mod lines;
pub mod rope;
pub mod snapshot;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use lines::{AnnotatedLine, ClassifierState, LineKind, MarkdownLineClassifier};
use rope::split_lines;

/// The decorated form of a whole document, one entry per `\n`-separated line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendering {
    pub lines: Vec<AnnotatedLine>,
}

/// Decorates every line of the rope in order, carrying fence and quote state.
pub fn decorate(rope: &Rope) -> Rendering {
    let classifier = MarkdownLineClassifier;
    let mut state = ClassifierState::default();

    let lines = split_lines(rope)
        .iter()
        .map(|line| AnnotatedLine::from_class(classifier.classify(line, &mut state)))
        .collect();

    Rendering { lines }
}

/// Convenience: decorate a string slice.
pub fn decorate_text(text: &str) -> Rendering {
    decorate(&Rope::from(text))
}

/// Marks lines strictly inside a fenced block. An unclosed fence runs to the
/// last line.
pub fn code_block_mask(lines: &[AnnotatedLine]) -> Vec<bool> {
    let mut inside = false;
    lines
        .iter()
        .map(|line| match line.kind() {
            LineKind::CodeFenceOpen => {
                inside = true;
                false
            }
            LineKind::CodeFenceClose => {
                inside = false;
                false
            }
            _ => inside,
        })
        .collect()
}

impl Rendering {
    /// Rebuilds the source text. Equal to the decorated input.
    pub fn source(&self) -> String {
        self.lines
            .iter()
            .map(AnnotatedLine::source)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// For each line, whether it sits strictly between an opening and a
    /// closing fence. Such lines are shown without inline styling.
    pub fn code_block_mask(&self) -> Vec<bool> {
        code_block_mask(&self.lines)
    }

    /// Full-document HTML, lines joined by `\n`.
    pub fn to_markup(&self) -> String {
        self.lines
            .iter()
            .map(AnnotatedLine::to_markup)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
