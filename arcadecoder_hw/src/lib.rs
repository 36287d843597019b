//! Simple Rust library for showing digit glyphs on the [Tech Will Save Us](https://en.wikipedia.org/wiki/Technology_Will_Save_Us) Arcade Coder.
//!
//! More projects, info and credits on Arcade Coder are [available here](https://github.com/padraigfl/awesome-arcade-coder), and hardware documentation is available [here](https://github.com/padraigfl/awesome-arcade-coder/wiki).
//!
//! The driver only needs [`embedded_hal`] traits, so any HAL with a blocking SPI bus, output pins
//! and a delay will do.

#![cfg_attr(not(test), no_std)]

pub mod display;

pub use digit_glyphs::{Coordinates, Layout};
pub use display::{ArcadeCoderDisplay, DisplayError};

/// 3-bit color
pub type Color = (bool, bool, bool);

pub const WHITE: Color = (true, true, true);
pub const YELLOW: Color = (true, true, false);
pub const CYAN: Color = (false, true, true);
pub const RED: Color = (true, false, false);
pub const MAGENTA: Color = (true, false, true);
pub const GREEN: Color = (false, true, false);
pub const BLUE: Color = (false, false, true);
pub const BLACK: Color = (false, false, false);
