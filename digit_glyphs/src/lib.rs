//! Tiny 3×5 pixel digit glyphs for LED matrices.
//!
//! The glyphs are stored as three 5-bit values each, in read-only memory. Digits 1 to 8 are the
//! only ones available; there is no glyph for 0 or 9.
//!
//! ## Example
//! ```
//! use digit_glyphs::{digit, digit_7, lit_pixels, Layout};
//!
//! assert_eq!(digit(7), Some(&digit_7));
//! assert_eq!(lit_pixels(&digit_7, Layout::Columns).count(), 7);
//! ```

#![cfg_attr(not(test), no_std)]

pub mod canvas;
pub mod digits;
pub mod error;
pub mod row;

pub use canvas::{draw_digit, draw_glyph, lit_pixels, Canvas, Layout};
pub use digits::*;
pub use error::Error;
pub use row::{encode_row, parse_row};

/// Display coordinates
pub type Coordinates = (usize, usize);
