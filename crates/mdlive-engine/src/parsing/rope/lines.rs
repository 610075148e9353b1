use xi_rope::Rope;

/// Splits the rope on `\n` the way `str::split('\n')` does.
///
/// A rope that ends with `\n` (or is empty) yields a trailing empty line, so
/// the number of lines is always one more than the number of terminators and
/// joining the lines with `\n` reproduces the rope exactly.
pub fn split_lines(rope: &Rope) -> Vec<String> {
    let mut out: Vec<String> = rope
        .lines_raw(..)
        .map(|raw| raw.strip_suffix('\n').unwrap_or(&raw).to_string())
        .collect();

    let ends_open = rope.is_empty() || rope.slice_to_cow(rope.len() - 1..rope.len()) == "\n";
    if ends_open {
        out.push(String::new());
    }

    out
}
