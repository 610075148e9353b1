use std::fmt::Write as _;

/// A styled inline span.
///
/// Single-delimiter emphasis is styled as [`InlineSpan::Bold`] too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSpan {
    Bold,
    InlineCode,
    Link { href: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkKind {
    Open(InlineSpan),
    Close(InlineSpan),
    /// An image shown after its link-styled source text. It holds no text.
    ImagePreview { src: String },
}

/// A zero-width mark at a byte offset into the decorated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mark {
    pub at: usize,
    pub kind: MarkKind,
}

/// Effective style of a run of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    pub bold: bool,
    pub code: bool,
    /// Target of the innermost enclosing link.
    pub link: Option<String>,
}

impl Style {
    pub fn is_plain(&self) -> bool {
        *self == Style::default()
    }
}

/// A flattened piece of decorated text, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece<'a> {
    Text { text: &'a str, style: Style },
    Image { src: &'a str },
}

/// Literal line text plus the zero-width marks the inline rules placed on it.
///
/// The text is never rewritten, so stripping the marks gives back exactly
/// the input line. Marks are kept sorted by offset; marks sharing an offset
/// keep their nesting order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decorated {
    text: String,
    marks: Vec<Mark>,
}

impl Decorated {
    /// Undecorated text.
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: Vec::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Wraps `[start, end)` in `span`, optionally followed by an image preview.
    ///
    /// The new open mark goes inside any marks already at `start`, and the
    /// close mark goes inside any marks already at `end`.
    pub(crate) fn wrap(
        &mut self,
        start: usize,
        end: usize,
        span: InlineSpan,
        preview: Option<String>,
    ) {
        debug_assert!(start < end && end <= self.text.len());

        let open_at = self.marks.partition_point(|m| m.at <= start);
        self.marks.insert(
            open_at,
            Mark {
                at: start,
                kind: MarkKind::Open(span.clone()),
            },
        );

        let close_at = self.marks.partition_point(|m| m.at < end);
        self.marks.insert(
            close_at,
            Mark {
                at: end,
                kind: MarkKind::Close(span),
            },
        );

        if let Some(src) = preview {
            self.marks.insert(
                close_at + 1,
                Mark {
                    at: end,
                    kind: MarkKind::ImagePreview { src },
                },
            );
        }
    }

    /// Flattens the marks into styled text runs and image previews.
    ///
    /// Adjacent runs with the same style are merged.
    pub fn pieces(&self) -> Vec<Piece<'_>> {
        let mut out: Vec<Piece<'_>> = Vec::new();
        let mut active: Vec<&InlineSpan> = Vec::new();
        let mut run_start = 0usize;

        for mark in &self.marks {
            if mark.at > run_start {
                push_run(&mut out, &self.text, run_start, mark.at, style_of(&active));
                run_start = mark.at;
            }
            match &mark.kind {
                MarkKind::Open(span) => active.push(span),
                MarkKind::Close(span) => {
                    if let Some(i) = active.iter().rposition(|s| *s == span) {
                        active.remove(i);
                    }
                }
                MarkKind::ImagePreview { src } => out.push(Piece::Image { src: src.as_str() }),
            }
        }
        push_run(&mut out, &self.text, run_start, self.text.len(), style_of(&active));
        out
    }

    /// Renders the decorated text as HTML.
    ///
    /// Text is escaped, and spans that cross each other are closed and
    /// reopened so the output nests properly.
    pub fn to_markup(&self) -> String {
        let mut html = String::with_capacity(self.text.len() * 2);
        let mut open: Vec<&InlineSpan> = Vec::new();
        let mut pos = 0usize;

        for mark in &self.marks {
            if mark.at > pos {
                html.push_str(&html_escape::encode_text(&self.text[pos..mark.at]));
                pos = mark.at;
            }
            match &mark.kind {
                MarkKind::Open(span) => {
                    push_open_tag(&mut html, span);
                    open.push(span);
                }
                MarkKind::Close(span) => {
                    let Some(i) = open.iter().rposition(|s| *s == span) else {
                        continue;
                    };
                    let reopen: Vec<&InlineSpan> = open.drain(i + 1..).collect();
                    for inner in reopen.iter().rev() {
                        push_close_tag(&mut html, inner);
                    }
                    push_close_tag(&mut html, span);
                    open.remove(i);
                    for inner in reopen {
                        push_open_tag(&mut html, inner);
                        open.push(inner);
                    }
                }
                MarkKind::ImagePreview { src } => {
                    let _ = write!(
                        html,
                        r#"<img class="image" src="{}" alt="">"#,
                        html_escape::encode_double_quoted_attribute(src)
                    );
                }
            }
        }
        html.push_str(&html_escape::encode_text(&self.text[pos..]));
        for span in open.iter().rev() {
            push_close_tag(&mut html, span);
        }
        html
    }
}

fn push_run<'a>(out: &mut Vec<Piece<'a>>, full: &'a str, from: usize, to: usize, style: Style) {
    if from >= to {
        return;
    }
    if let Some(Piece::Text { text, style: prev }) = out.last_mut()
        && *prev == style
    {
        let begin = from - text.len();
        *text = &full[begin..to];
        return;
    }
    out.push(Piece::Text {
        text: &full[from..to],
        style,
    });
}

fn style_of(active: &[&InlineSpan]) -> Style {
    let mut style = Style::default();
    for span in active {
        match span {
            InlineSpan::Bold => style.bold = true,
            InlineSpan::InlineCode => style.code = true,
            InlineSpan::Link { href } => style.link = Some(href.clone()),
        }
    }
    style
}

fn push_open_tag(html: &mut String, span: &InlineSpan) {
    match span {
        InlineSpan::Bold => html.push_str(r#"<span class="bold">"#),
        InlineSpan::InlineCode => html.push_str(r#"<span class="inline-code">"#),
        InlineSpan::Link { href } => {
            let _ = write!(
                html,
                r#"<a class="link" href="{}">"#,
                html_escape::encode_double_quoted_attribute(href)
            );
        }
    }
}

fn push_close_tag(html: &mut String, span: &InlineSpan) {
    match span {
        InlineSpan::Link { .. } => html.push_str("</a>"),
        InlineSpan::Bold | InlineSpan::InlineCode => html.push_str("</span>"),
    }
}
