use mdlive_engine::parsing::inline::{Piece, Style as InlineStyle};
use mdlive_engine::parsing::lines::{AnnotatedLine, LineKind};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Drawn in place of an image. The caret mapper reserves its width.
pub const IMAGE_PLACEHOLDER: &str = "[img]";

fn base_style(kind: LineKind) -> Style {
    match kind {
        LineKind::Heading(_) => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        LineKind::BlockquoteStart | LineKind::BlockquoteContinue => {
            Style::default().add_modifier(Modifier::ITALIC)
        }
        LineKind::CodeFenceOpen | LineKind::CodeFenceClose => Style::default().fg(Color::Yellow),
        LineKind::HorizontalRule => Style::default().fg(Color::DarkGray),
        LineKind::UnorderedItem | LineKind::OrderedItem | LineKind::Plain => Style::default(),
    }
}

fn marker_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn code_style() -> Style {
    Style::default().fg(Color::Yellow)
}

fn piece_style(base: Style, style: &InlineStyle) -> Style {
    let mut out = base;
    if style.bold {
        out = out.add_modifier(Modifier::BOLD);
    }
    if style.code {
        out = out.patch(code_style());
    }
    if style.link.is_some() {
        out = out.fg(Color::Blue).add_modifier(Modifier::UNDERLINED);
    }
    out
}

/// One terminal row for an annotated line. Lines inside a fenced block
/// (`literal`) are drawn without inline styling or image previews.
pub fn render_line(line: &AnnotatedLine, literal: bool) -> Line<'static> {
    let base = base_style(line.kind());
    let mut spans = Vec::new();

    let prefix = line.prefix();
    if !prefix.is_empty() {
        spans.push(Span::styled(prefix, marker_style()));
    }

    for piece in line.text().pieces() {
        match piece {
            Piece::Text { text, .. } if literal => {
                spans.push(Span::styled(text.to_string(), code_style()));
            }
            Piece::Text { text, style } => {
                spans.push(Span::styled(text.to_string(), piece_style(base, &style)));
            }
            Piece::Image { .. } if literal => {}
            Piece::Image { .. } => {
                spans.push(Span::styled(
                    IMAGE_PLACEHOLDER,
                    Style::default().fg(Color::Magenta),
                ));
            }
        }
    }

    Line::from(spans)
}
