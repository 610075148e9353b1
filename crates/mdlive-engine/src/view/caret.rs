use unicode_width::UnicodeWidthChar;

use crate::parsing::{code_block_mask, inline::Piece, lines::AnnotatedLine};

/// A position in the rendered view: line index and visual column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ViewPosition {
    pub line: usize,
    pub column: usize,
}

impl ViewPosition {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// One displayed run on a line, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Text characters: one caret step each, with the display width of every
    /// character. Wide characters take two columns, control characters none.
    Text(Vec<usize>),
    /// An image preview: occupies columns but no caret steps.
    Preview(usize),
}

impl Segment {
    fn text(s: &str) -> Self {
        Segment::Text(s.chars().map(|c| c.width().unwrap_or(0)).collect())
    }

    fn width(&self) -> usize {
        match self {
            Segment::Text(widths) => widths.iter().sum(),
            Segment::Preview(w) => *w,
        }
    }
}

#[derive(Debug, Clone)]
struct MappedLine {
    /// Offset of the line's first character in the document.
    start: usize,
    /// Characters on the line, excluding the terminator.
    chars: usize,
    segments: Vec<Segment>,
}

/// Converts between flat character offsets and view positions.
///
/// Offsets count characters in emission order: marker text, then payload,
/// with one step for each line terminator. Image previews take
/// `preview_width` columns but are never counted as characters. Lines
/// inside a fenced block are shown literally, so they carry no previews.
#[derive(Debug, Clone)]
pub struct CaretMapper {
    lines: Vec<MappedLine>,
    preview_width: usize,
}

impl CaretMapper {
    pub const DEFAULT_PREVIEW_WIDTH: usize = 5;

    pub fn new(lines: &[AnnotatedLine]) -> Self {
        Self::with_preview_width(lines, Self::DEFAULT_PREVIEW_WIDTH)
    }

    pub fn with_preview_width(lines: &[AnnotatedLine], preview_width: usize) -> Self {
        let literal = code_block_mask(lines);
        let mut start = 0usize;
        let mut mapped = Vec::with_capacity(lines.len().max(1));

        for (line, literal) in lines.iter().zip(literal) {
            let mut segments = Vec::new();
            let prefix = line.prefix();
            if !prefix.is_empty() {
                segments.push(Segment::text(&prefix));
            }
            if literal {
                let text = line.text().text();
                if !text.is_empty() {
                    segments.push(Segment::text(text));
                }
            } else {
                for piece in line.text().pieces() {
                    match piece {
                        Piece::Text { text, .. } => segments.push(Segment::text(text)),
                        Piece::Image { .. } => segments.push(Segment::Preview(preview_width)),
                    }
                }
            }
            let chars = line.char_len();
            mapped.push(MappedLine {
                start,
                chars,
                segments,
            });
            start += chars + 1;
        }

        if mapped.is_empty() {
            mapped.push(MappedLine {
                start: 0,
                chars: 0,
                segments: Vec::new(),
            });
        }

        Self {
            lines: mapped,
            preview_width,
        }
    }

    pub fn preview_width(&self) -> usize {
        self.preview_width
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total characters in the document, terminators included.
    pub fn char_len(&self) -> usize {
        self.lines.last().map_or(0, |l| l.start + l.chars)
    }

    /// Number of characters on `line`, or 0 past the end.
    pub fn line_chars(&self, line: usize) -> usize {
        self.lines.get(line).map_or(0, |l| l.chars)
    }

    /// Visual width of `line` in columns.
    pub fn line_width(&self, line: usize) -> usize {
        self.lines
            .get(line)
            .map_or(0, |l| l.segments.iter().map(Segment::width).sum())
    }

    /// First character offset of `line`, clamped to the last line.
    pub fn line_start(&self, line: usize) -> usize {
        let i = line.min(self.lines.len() - 1);
        self.lines[i].start
    }

    /// The position just before the character at `offset`.
    ///
    /// Offsets past the end clamp to the end. When an offset sits on the
    /// boundary between two segments the earlier one wins, so a caret after
    /// an image's source text stays before its preview.
    pub fn position_of(&self, offset: usize) -> ViewPosition {
        let offset = offset.min(self.char_len());
        let index = self
            .lines
            .partition_point(|l| l.start + l.chars < offset)
            .min(self.lines.len() - 1);
        let line = &self.lines[index];
        let mut remaining = offset - line.start;
        let mut column = 0usize;

        for segment in &line.segments {
            match segment {
                Segment::Text(widths) => {
                    if remaining <= widths.len() {
                        let before: usize = widths[..remaining].iter().sum();
                        return ViewPosition::new(index, column + before);
                    }
                    column += segment.width();
                    remaining -= widths.len();
                }
                Segment::Preview(w) => column += w,
            }
        }
        ViewPosition::new(index, column)
    }

    /// The character offset for a view position.
    ///
    /// Lines past the end clamp to the last line, columns past a line end
    /// clamp to the line end, and a column inside a preview or a wide
    /// character snaps to the offset just before it.
    pub fn offset_of(&self, pos: ViewPosition) -> usize {
        let index = pos.line.min(self.lines.len() - 1);
        let line = &self.lines[index];
        let mut column = 0usize;
        let mut chars = 0usize;

        for segment in &line.segments {
            match segment {
                Segment::Text(widths) => {
                    for &w in widths {
                        if pos.column < column + w.max(1) {
                            return line.start + chars;
                        }
                        column += w;
                        chars += 1;
                    }
                }
                Segment::Preview(w) => {
                    if pos.column < column + w {
                        return line.start + chars;
                    }
                    column += w;
                }
            }
        }
        line.start + chars
    }
}
