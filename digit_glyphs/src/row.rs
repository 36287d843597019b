//! Conversion between glyph values and their `0`/`1` text form.

use arrform::{arrform, ArrForm};

use crate::{
    digits::{ROW_BITS, ROW_MASK},
    Error,
};

/// Format the low 5 bits of a value, most significant bit first.
///
/// ## Example
/// ```
/// assert_eq!(digit_glyphs::encode_row(0b11001).as_str(), "11001");
/// ```
pub fn encode_row(row: u8) -> ArrForm<ROW_BITS> {
    arrform!(ROW_BITS, "{:05b}", row & ROW_MASK)
}

/// Parse a 5 character `0`/`1` string back into a value.
pub fn parse_row(text: &str) -> Result<u8, Error> {
    let len = text.chars().count();
    if len != ROW_BITS {
        return Err(Error::RowLength(len));
    }

    text.chars()
        .enumerate()
        .try_fold(0_u8, |acc, (index, c)| match c {
            '0' => Ok(acc << 1),
            '1' => Ok((acc << 1) | 1),
            found => Err(Error::RowChar { index, found }),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DIGITS;

    #[test]
    fn encodes_msb_first() {
        assert_eq!(encode_row(0b00001).as_str(), "00001");
        assert_eq!(encode_row(0b10010).as_str(), "10010");
        assert_eq!(encode_row(0).as_str(), "00000");
    }

    #[test]
    fn encode_ignores_upper_bits() {
        assert_eq!(encode_row(0b1110_0101).as_str(), "00101");
    }

    #[test]
    fn glyph_rows_survive_text_form() {
        for glyph in DIGITS {
            for &value in glyph {
                let text = encode_row(value);
                assert_eq!(parse_row(text.as_str()), Ok(value));
            }
        }
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(parse_row(""), Err(Error::RowLength(0)));
        assert_eq!(parse_row("1111"), Err(Error::RowLength(4)));
        assert_eq!(parse_row("000000"), Err(Error::RowLength(6)));
    }

    #[test]
    fn rejects_other_characters() {
        assert_eq!(
            parse_row("10201"),
            Err(Error::RowChar {
                index: 2,
                found: '2'
            })
        );
        assert_eq!(
            parse_row("1 001"),
            Err(Error::RowChar {
                index: 1,
                found: ' '
            })
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            Error::RowLength(3).to_string(),
            "row must be 5 characters, got 3"
        );
        assert_eq!(Error::MissingGlyph(9).to_string(), "no glyph for digit 9");
    }
}
