use std::fmt::Write as _;

use crate::parsing::{
    Rendering,
    inline::{Piece, Style},
};

/// Describes a rendering as stable, human-readable text for snapshots.
///
/// One output line per annotated line: the kind, the quoted prefix, then the
/// payload with styled runs in braces, e.g.
/// `Heading(1) "# " {b:**Title**}`. Lines inside a fenced block are tagged
/// `literal`.
pub fn describe(rendering: &Rendering) -> String {
    let mask = rendering.code_block_mask();
    let mut out = String::new();
    for (i, (line, literal)) in rendering.lines.iter().zip(mask).enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = write!(out, "{:?} {:?}", line.kind(), line.prefix());
        if literal {
            out.push_str(" literal");
        }
        let body = describe_pieces(&line.text().pieces());
        if !body.is_empty() {
            out.push(' ');
            out.push_str(&body);
        }
    }
    out
}

fn describe_pieces(pieces: &[Piece<'_>]) -> String {
    let mut out = String::new();
    for piece in pieces {
        match piece {
            Piece::Text { text, style } if style.is_plain() => out.push_str(text),
            Piece::Text { text, style } => {
                let _ = write!(out, "{{{}:{text}}}", tags(style));
            }
            Piece::Image { src } => {
                let _ = write!(out, "{{img:{src}}}");
            }
        }
    }
    out
}

fn tags(style: &Style) -> String {
    let mut tags = Vec::new();
    if style.bold {
        tags.push("b".to_string());
    }
    if style.code {
        tags.push("c".to_string());
    }
    if let Some(href) = &style.link {
        tags.push(format!("a({href})"));
    }
    tags.join(",")
}
