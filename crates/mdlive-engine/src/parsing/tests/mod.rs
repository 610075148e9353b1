//! Decorator tests over whole documents.
//!
//! Snapshots use the compact `describe` format so the expected output sits
//! next to the input.

use insta::assert_snapshot;
use rstest::rstest;
use xi_rope::Rope;

use crate::parsing::{
    decorate, decorate_text,
    lines::{AnnotatedLine, LineKind},
    snapshot::{describe, invariants},
};

#[test]
fn heading_then_bullets() {
    let r = decorate_text("# Title\n- item one\n- item two\n");
    assert_snapshot!(describe(&r), @r##"
    Heading(1) "# " Title
    UnorderedItem "- " item one
    UnorderedItem "- " item two
    Plain ""
    "##);
}

#[test]
fn fences_quotes_and_carried_state() {
    let r = decorate_text("```rust\nlet a = **b**;\n# not\n```\n> q\nstill\n\nafter");
    assert_snapshot!(describe(&r), @r#"
    CodeFenceOpen "" {c:```}rust
    Plain "" literal let a = {b:**b**};
    Plain "" literal # not
    CodeFenceClose "" {c:```}
    BlockquoteStart "> " q
    BlockquoteContinue "" still
    BlockquoteContinue ""
    Plain "" after
    "#);
}

#[test]
fn ordered_rule_bullet_and_images() {
    let r = decorate_text("1. [a](b) ![c](d)\n---\n  + `x`");
    assert_snapshot!(describe(&r), @r#"
    OrderedItem "1. " {a(b):[a](b)} {a(d):![c](d)}{img:d}
    HorizontalRule "" ---
    UnorderedItem "  + " {c:`x`}
    "#);
}

#[test]
fn structural_fields_of_first_example() {
    let r = decorate_text("# Title\n- item one\n- item two\n");
    match &r.lines[0] {
        AnnotatedLine::Heading { level, text, .. } => {
            assert_eq!(*level, 1);
            assert_eq!(text.text(), "Title");
        }
        other => panic!("expected heading, got {other:?}"),
    }
    match &r.lines[1] {
        AnnotatedLine::UnorderedItem {
            indent,
            marker,
            text,
            ..
        } => {
            assert_eq!(indent, "");
            assert_eq!(*marker, '-');
            assert_eq!(text.text(), "item one");
        }
        other => panic!("expected bullet, got {other:?}"),
    }
}

#[rstest]
#[case("")]
#[case("\n")]
#[case("# \n")]
#[case("plain\r\nwindows\r\n")]
#[case("> a\n> b\n\n- c\n  - d\n10. e\n")]
#[case("```\n# x\n> y\n```\n")]
#[case("**a `b** c`\n![i](u) [l](v)\n\\*x*\n")]
#[case("日本語 **太字** `コード`\n")]
#[case("####### seven\n#\n---\n--\n")]
fn invariants_hold(#[case] text: &str) {
    let rope = Rope::from(text);
    let r = decorate(&rope);
    invariants(&rope, &r);
    assert_eq!(r.source(), text);
}

#[test]
fn decorating_is_deterministic() {
    let text = "# a\n> b\nc\n\n1. d **e**\n```\nf\n```\n";
    assert_eq!(decorate_text(text), decorate_text(text));
}

#[test]
fn trailing_terminator_yields_final_empty_line() {
    let r = decorate_text("a\n");
    assert_eq!(r.lines.len(), 2);
    assert_eq!(r.lines[1].kind(), LineKind::Plain);
    assert_eq!(r.lines[1].source(), "");
}

#[test]
fn code_block_mask_excludes_fences() {
    let r = decorate_text("a\n```\nb\nc\n```\nd");
    assert_eq!(
        r.code_block_mask(),
        vec![false, false, true, true, false, false]
    );
}

#[test]
fn unterminated_fence_runs_to_end() {
    let r = decorate_text("```\nx\ny");
    assert_eq!(r.code_block_mask(), vec![false, true, true]);
}

#[test]
fn document_markup_joins_lines() {
    let r = decorate_text("# T\nbody");
    assert_eq!(
        r.to_markup(),
        concat!(
            r#"<h1><span class="out"># </span><span class="in">T</span></h1>"#,
            "\n",
            "<span>body</span>"
        )
    );
}
