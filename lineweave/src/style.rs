/// ANSI color wrapping for command output.
///
/// Colorization is a presentation concern, kept out of the core operations:
/// `FileReader::concatenate_into` and `AnnotatedReader::render` return plain
/// strings and callers that want the traditional green/blue decoration apply
/// [`paint`] themselves. The escape codes are fixed so that painted output is
/// reproducible byte-for-byte regardless of terminal detection.
const RED: &str = "\x1b[91m";
const GREEN: &str = "\x1b[92m";
const BLUE: &str = "\x1b[94m";
const RESET: &str = "\x1b[0m";

/// The colors understood by [`paint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    /// Looks up a color by its lowercase key; unrecognized keys fall back to red.
    pub fn from_key(key: &str) -> Self {
        match key {
            "green" => Color::Green,
            "blue" => Color::Blue,
            _ => Color::Red,
        }
    }

    fn code(self) -> &'static str {
        match self {
            Color::Red => RED,
            Color::Green => GREEN,
            Color::Blue => BLUE,
        }
    }
}

/// Wraps `text` in the escape code for `color` and the reset code.
pub fn paint(color: Color, text: &str) -> String {
    format!("{}{}{}", color.code(), text, RESET)
}
