pub mod lines;
pub mod offsets;

pub use lines::split_lines;
pub use offsets::{byte_of_char, char_len};
