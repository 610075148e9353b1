use insta::assert_snapshot;
use mdlive_engine::parsing::{decorate, snapshot};

fn decorate_fixture(name: &str) -> String {
    let md = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    let rope = xi_rope::Rope::from(md.as_str());

    let rendering = decorate(&rope);
    snapshot::invariants(&rope, &rendering);
    assert_eq!(rendering.source(), md);

    snapshot::describe(&rendering)
}

#[test]
fn fixture_shopping_list() {
    assert_snapshot!(decorate_fixture("shopping"), @r##"
    Heading(1) "# " Shopping
    UnorderedItem "- " milk
    UnorderedItem "- " {b:**eggs**}
    OrderedItem "1. " call {a(tel:1):[Sam](tel:1)}
    BlockquoteStart "> " remember
    BlockquoteContinue "" the {c:`receipt`}
    BlockquoteContinue ""
    HorizontalRule "" ---
    Plain ""
    "##);
}

#[test]
fn fixture_fenced_block() {
    assert_snapshot!(decorate_fixture("fenced"), @r###"
    Heading(2) "## " Build
    CodeFenceOpen "" {c:```}sh
    Plain "" literal # not a heading
    Plain "" literal echo {b:*hi*}
    CodeFenceClose "" {c:```}
    OrderedItem "  2. " step two
    OrderedItem "  3. " step three
    Plain ""
    "###);
}
