//! Drawing glyphs onto a pixel surface.

use log::{trace, warn};

use crate::{
    digits::{digit, Glyph, GLYPH_LEN, ROW_BITS},
    Coordinates, Error,
};

/// Anything glyphs can be drawn onto.
pub trait Canvas {
    type Color: Copy;

    /// Set a single pixel. Pixels outside the surface should be ignored.
    fn set_pixel(&mut self, pos: Coordinates, color: Self::Color);
}

/// How the three values of a glyph map onto pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Each value is a column, bit 0 at the top. Glyphs are 3 wide and 5 tall.
    #[default]
    Columns,
    /// Each value is a row, bit 4 on the left. Glyphs are 5 wide and 3 tall.
    Rows,
}

impl Layout {
    /// Glyph size as `(width, height)`.
    pub const fn size(self) -> (usize, usize) {
        match self {
            Layout::Columns => (GLYPH_LEN, ROW_BITS),
            Layout::Rows => (ROW_BITS, GLYPH_LEN),
        }
    }

    fn is_lit(self, glyph: &Glyph, (x, y): Coordinates) -> bool {
        let (value, bit) = match self {
            Layout::Columns => (glyph[x], y),
            Layout::Rows => (glyph[y], ROW_BITS - 1 - x),
        };

        (value >> bit) & 1 == 1
    }
}

/// Offsets of every lit pixel in a glyph, relative to its top-left, in reading order.
pub fn lit_pixels(glyph: &Glyph, layout: Layout) -> impl Iterator<Item = Coordinates> + '_ {
    let (width, height) = layout.size();

    (0..height)
        .flat_map(move |y| (0..width).map(move |x| (x, y)))
        .filter(move |&pos| layout.is_lit(glyph, pos))
}

/// Draw a glyph with its top-left corner at `start_pos`.
///
/// Only lit pixels are set, so whatever is already on the canvas shows through. Pixels whose
/// position would overflow `usize` are skipped.
pub fn draw_glyph<C: Canvas + ?Sized>(
    canvas: &mut C,
    glyph: &Glyph,
    layout: Layout,
    start_pos: Coordinates,
    color: C::Color,
) {
    trace!("drawing glyph {:?} at {:?} as {:?}", glyph, start_pos, layout);

    for (x, y) in lit_pixels(glyph, layout) {
        if let (Some(x), Some(y)) = (start_pos.0.checked_add(x), start_pos.1.checked_add(y)) {
            canvas.set_pixel((x, y), color);
        }
    }
}

/// Draw a digit from the glyph table
///
/// ## Example
/// ```ignore
/// use digit_glyphs::{draw_digit, Layout};
///
/// draw_digit(&mut display, 4, Layout::Columns, (4, 3), WHITE)?;
/// ```
pub fn draw_digit<C: Canvas + ?Sized>(
    canvas: &mut C,
    n: u32,
    layout: Layout,
    start_pos: Coordinates,
    color: C::Color,
) -> Result<(), Error> {
    let glyph = digit(n).ok_or_else(|| {
        warn!("no glyph for digit {}", n);
        Error::MissingGlyph(n)
    })?;

    draw_glyph(canvas, glyph, layout, start_pos, color);
    Ok(())
}
