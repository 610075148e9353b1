use std::fmt::Write as _;

use crate::parsing::inline::{Decorated, decorate_inline};

use super::classify::LineClass;
use super::kinds::FenceSide;

/// Structural kind of an annotated line, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    CodeFenceOpen,
    CodeFenceClose,
    Heading(u8),
    BlockquoteStart,
    BlockquoteContinue,
    UnorderedItem,
    OrderedItem,
    HorizontalRule,
    Plain,
}

/// One rendered source line: its structural markers plus decorated text.
///
/// Markers and gaps are kept as the literal source text, so
/// `prefix() + text().text()` is always the original line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotatedLine {
    CodeFenceOpen {
        text: Decorated,
    },
    CodeFenceClose {
        text: Decorated,
    },
    Heading {
        level: u8,
        marker: String,
        text: Decorated,
    },
    BlockquoteStart {
        marker: String,
        text: Decorated,
    },
    BlockquoteContinue {
        text: Decorated,
    },
    UnorderedItem {
        indent: String,
        marker: char,
        gap: String,
        text: Decorated,
    },
    OrderedItem {
        indent: String,
        number: String,
        gap: String,
        text: Decorated,
    },
    HorizontalRule {
        text: Decorated,
    },
    Plain {
        text: Decorated,
    },
}

impl AnnotatedLine {
    /// Builds the annotated line for a classified line, decorating its payload.
    pub fn from_class(class: LineClass<'_>) -> Self {
        match class {
            LineClass::Fence {
                side: FenceSide::Open,
                text,
            } => AnnotatedLine::CodeFenceOpen {
                text: decorate_inline(text),
            },
            LineClass::Fence {
                side: FenceSide::Close,
                text,
            } => AnnotatedLine::CodeFenceClose {
                text: decorate_inline(text),
            },
            LineClass::Heading {
                level,
                marker,
                text,
            } => AnnotatedLine::Heading {
                level,
                marker: marker.to_string(),
                text: decorate_inline(text),
            },
            LineClass::QuoteStart { marker, text } => AnnotatedLine::BlockquoteStart {
                marker: marker.to_string(),
                text: decorate_inline(text),
            },
            LineClass::QuoteContinue { text } => AnnotatedLine::BlockquoteContinue {
                text: decorate_inline(text),
            },
            LineClass::Bullet {
                indent,
                marker,
                gap,
                text,
            } => AnnotatedLine::UnorderedItem {
                indent: indent.to_string(),
                marker,
                gap: gap.to_string(),
                text: decorate_inline(text),
            },
            LineClass::Ordered {
                indent,
                number,
                gap,
                text,
            } => AnnotatedLine::OrderedItem {
                indent: indent.to_string(),
                number: number.to_string(),
                gap: gap.to_string(),
                text: decorate_inline(text),
            },
            LineClass::Rule { text } => AnnotatedLine::HorizontalRule {
                text: decorate_inline(text),
            },
            LineClass::Plain { text } => AnnotatedLine::Plain {
                text: decorate_inline(text),
            },
        }
    }

    pub fn kind(&self) -> LineKind {
        match self {
            AnnotatedLine::CodeFenceOpen { .. } => LineKind::CodeFenceOpen,
            AnnotatedLine::CodeFenceClose { .. } => LineKind::CodeFenceClose,
            AnnotatedLine::Heading { level, .. } => LineKind::Heading(*level),
            AnnotatedLine::BlockquoteStart { .. } => LineKind::BlockquoteStart,
            AnnotatedLine::BlockquoteContinue { .. } => LineKind::BlockquoteContinue,
            AnnotatedLine::UnorderedItem { .. } => LineKind::UnorderedItem,
            AnnotatedLine::OrderedItem { .. } => LineKind::OrderedItem,
            AnnotatedLine::HorizontalRule { .. } => LineKind::HorizontalRule,
            AnnotatedLine::Plain { .. } => LineKind::Plain,
        }
    }

    /// The decorated payload.
    pub fn text(&self) -> &Decorated {
        match self {
            AnnotatedLine::CodeFenceOpen { text }
            | AnnotatedLine::CodeFenceClose { text }
            | AnnotatedLine::Heading { text, .. }
            | AnnotatedLine::BlockquoteStart { text, .. }
            | AnnotatedLine::BlockquoteContinue { text }
            | AnnotatedLine::UnorderedItem { text, .. }
            | AnnotatedLine::OrderedItem { text, .. }
            | AnnotatedLine::HorizontalRule { text }
            | AnnotatedLine::Plain { text } => text,
        }
    }

    /// Structural marker text shown before the payload. Empty for lines
    /// whose whole content is payload.
    pub fn prefix(&self) -> String {
        match self {
            AnnotatedLine::Heading { marker, .. } | AnnotatedLine::BlockquoteStart { marker, .. } => {
                marker.clone()
            }
            AnnotatedLine::UnorderedItem {
                indent,
                marker,
                gap,
                ..
            } => format!("{indent}{marker}{gap}"),
            AnnotatedLine::OrderedItem {
                indent,
                number,
                gap,
                ..
            } => format!("{indent}{number}.{gap}"),
            _ => String::new(),
        }
    }

    /// The source line this was built from.
    pub fn source(&self) -> String {
        let mut s = self.prefix();
        s.push_str(self.text().text());
        s
    }

    /// Characters the caret can step over on this line, excluding the
    /// terminator.
    pub fn char_len(&self) -> usize {
        self.prefix().chars().count() + self.text().char_len()
    }

    /// HTML for this line using the classic class names.
    pub fn to_markup(&self) -> String {
        let body = self.text().to_markup();
        let prefix = html_escape::encode_text(&self.prefix()).into_owned();
        let mut html = String::new();
        let _ = match self {
            AnnotatedLine::CodeFenceOpen { .. } => write!(
                html,
                r#"<span class="code-block"><span class="out">{body}</span>"#
            ),
            AnnotatedLine::CodeFenceClose { .. } => {
                write!(html, r#"<span class="out">{body}</span></span>"#)
            }
            AnnotatedLine::Heading { level, .. } => write!(
                html,
                r#"<h{level}><span class="out">{prefix}</span><span class="in">{body}</span></h{level}>"#
            ),
            AnnotatedLine::BlockquoteStart { .. } => write!(
                html,
                r#"<span class="blockquote out">{prefix}</span><span class="blockquote in">{body}</span>"#
            ),
            AnnotatedLine::BlockquoteContinue { .. } => {
                write!(html, r#"<span class="blockquote in">{body}</span>"#)
            }
            AnnotatedLine::UnorderedItem { .. } => write!(
                html,
                r#"<span class="ul out">{prefix}</span><span class="ul in" role="listitem">{body}</span>"#
            ),
            AnnotatedLine::OrderedItem { .. } => write!(
                html,
                r#"<span class="ol out">{prefix}</span><span class="ol in" role="listitem">{body}</span>"#
            ),
            AnnotatedLine::HorizontalRule { .. } => {
                write!(html, r#"<span class="hr out">{body}</span>"#)
            }
            AnnotatedLine::Plain { .. } => write!(html, "<span>{body}</span>"),
        };
        html
    }
}
