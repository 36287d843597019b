//! The digit glyph table.
//!
//! Each glyph is three 5-bit values. Read as columns (bit 0 at the top) they draw a 3 pixel wide,
//! 5 pixel tall numeral; see [`Layout`](crate::Layout) for the ways they can be rendered.
//!
//! The names are kept lowercase so they match the table's published symbol names.

#![allow(non_upper_case_globals)]

/// A single glyph: three 5-bit values.
pub type Glyph = [u8; GLYPH_LEN];

/// Number of values in a glyph.
pub const GLYPH_LEN: usize = 3;

/// Number of meaningful bits in each glyph value.
pub const ROW_BITS: usize = 5;

/// Mask of the meaningful bits in each glyph value.
pub const ROW_MASK: u8 = 0b11111;

/// The lowest digit with a glyph.
pub const FIRST_DIGIT: u32 = 1;

/// The highest digit with a glyph.
pub const LAST_DIGIT: u32 = 8;

pub static digit_1: Glyph = checked([0b00000, 0b11111, 0b00000]);
pub static digit_2: Glyph = checked([0b11001, 0b10101, 0b10010]);
pub static digit_3: Glyph = checked([0b10001, 0b10101, 0b11111]);
pub static digit_4: Glyph = checked([0b00111, 0b00100, 0b11111]);
pub static digit_5: Glyph = checked([0b10111, 0b10101, 0b11101]);
pub static digit_6: Glyph = checked([0b11111, 0b10101, 0b11101]);
pub static digit_7: Glyph = checked([0b00001, 0b00001, 0b11111]);
pub static digit_8: Glyph = checked([0b11111, 0b10101, 0b11111]);

/// All glyphs in digit order, starting at [`FIRST_DIGIT`].
pub static DIGITS: [&Glyph; 8] = [
    &digit_1, &digit_2, &digit_3, &digit_4, &digit_5, &digit_6, &digit_7, &digit_8,
];

// evaluated at compile time: a value wider than ROW_BITS fails the build
const fn checked(glyph: Glyph) -> Glyph {
    let mut i = 0;
    while i < GLYPH_LEN {
        assert!(glyph[i] & !ROW_MASK == 0, "glyph value wider than 5 bits");
        i += 1;
    }
    glyph
}

/// Look up the glyph for a digit.
///
/// Returns `None` for anything outside [`FIRST_DIGIT`]..=[`LAST_DIGIT`], including 0 and 9.
pub fn digit(n: u32) -> Option<&'static Glyph> {
    match n {
        FIRST_DIGIT..=LAST_DIGIT => Some(DIGITS[(n - FIRST_DIGIT) as usize]),
        _ => None,
    }
}
