use xi_rope::Rope;

use crate::parsing::{
    Rendering,
    inline::{Decorated, MarkKind},
    rope::split_lines,
};

/// Validates decorator output invariants.
///
/// Asserts that:
/// - There is one annotated line per `\n`-separated source line
/// - Every annotated line rebuilds its source line exactly
/// - Marks are sorted, on char boundaries, and every open has a close
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(rope: &Rope, rendering: &Rendering) {
    let source = split_lines(rope);
    assert_eq!(
        source.len(),
        rendering.lines.len(),
        "line count mismatch: source {} vs rendered {}",
        source.len(),
        rendering.lines.len()
    );

    for (i, (text, line)) in source.iter().zip(&rendering.lines).enumerate() {
        assert_eq!(line.source(), *text, "line {i} does not rebuild its source");
        check_marks(line.text(), i);
    }
}

fn check_marks(decorated: &Decorated, line: usize) {
    let text = decorated.text();
    let mut depth = 0i64;
    let mut last = 0usize;
    for mark in decorated.marks() {
        assert!(
            mark.at >= last && mark.at <= text.len(),
            "line {line}: mark out of order or bounds at {}",
            mark.at
        );
        assert!(
            text.is_char_boundary(mark.at),
            "line {line}: mark inside a character at {}",
            mark.at
        );
        last = mark.at;
        match mark.kind {
            MarkKind::Open(_) => depth += 1,
            MarkKind::Close(_) => depth -= 1,
            MarkKind::ImagePreview { .. } => {}
        }
        assert!(depth >= 0, "line {line}: close before open at {}", mark.at);
    }
    assert_eq!(depth, 0, "line {line}: unbalanced marks");
}
