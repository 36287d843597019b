use core::fmt;

/// Errors from looking up, drawing or parsing glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// There is no glyph for this digit.
    MissingGlyph(u32),
    /// A row string was not exactly 5 characters long.
    RowLength(usize),
    /// A row string contained something other than `0` or `1`.
    RowChar { index: usize, found: char },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingGlyph(n) => write!(f, "no glyph for digit {}", n),
            Error::RowLength(len) => write!(f, "row must be 5 characters, got {}", len),
            Error::RowChar { index, found } => {
                write!(f, "unexpected {:?} at position {} of row", found, index)
            }
        }
    }
}
