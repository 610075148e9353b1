// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, `code` and a [link](http://x).\n\n- Bullet point\n  - Nested item\n1. First\n> Quote\ncontinued\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n---\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_long_line(repeats: usize) -> String {
    let mut line = String::new();
    for i in 0..repeats {
        line.push_str(&format!("word{i} **b{i}** `c{i}` ![i{i}](u{i}) "));
    }
    line.push('\n');
    line
}
