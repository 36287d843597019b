use core::fmt;

use digit_glyphs::{Canvas, Coordinates, Layout};
use embedded_hal::{
    delay::DelayNs,
    digital::{OutputPin, PinState},
    spi::SpiBus,
};
use log::{debug, trace};

use crate::Color;

/// Width and height of the matrix in pixels.
pub const SIZE: usize = 12;

/// The matrix is driven as six pairs of rows, `n` and `n + 6`.
const ROW_PAIRS: usize = 6;

/// Bytes shifted out for one pair of rows.
const ROW_BYTES: usize = 9;

// every channel is active low, so all bits set is a blank row
const BLANK_ROW: [u8; ROW_BYTES] = [255; ROW_BYTES];

/// Errors from the bus or control pins while driving the display.
#[derive(Debug)]
pub enum DisplayError<SpiE, PinE> {
    /// Shifting data out over the bus failed.
    Spi(SpiE),
    /// Driving a control pin failed.
    Pin(PinE),
}

impl<SpiE: fmt::Debug, PinE: fmt::Debug> fmt::Display for DisplayError<SpiE, PinE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::Spi(e) => write!(f, "could not write display data: {:?}", e),
            DisplayError::Pin(e) => write!(f, "could not set control pin: {:?}", e),
        }
    }
}

pub struct ArcadeCoderDisplay<SPI, PIN, DELAY> {
    spi: SPI,
    pin_a0: PIN,
    pin_a1: PIN,
    pin_a2: PIN,
    pin_oe: PIN,
    pin_latch: PIN,
    delay: DELAY,

    /// The time in microseconds to wait after switching channels for outputs to settle.
    pub channel_select_delay_us: u32,

    /// The time in microseconds to hold the latch high.
    pub latch_delay_us: u32,

    /// The current display buffer.
    pub display_buffer: [[u8; ROW_BYTES]; ROW_PAIRS],

    /// Whether to draw a row blank after drawing to reduce ghosting. This comes at the cost of longer draw times.
    pub anti_ghost: bool,

    /// How glyphs are laid out by [`draw_digit`](Self::draw_digit).
    pub layout: Layout,
}

impl<SPI, PIN, DELAY> ArcadeCoderDisplay<SPI, PIN, DELAY>
where
    SPI: SpiBus,
    PIN: OutputPin,
    DELAY: DelayNs,
{
    /// Create a new Arcade Coder display driver.
    ///
    /// The SPI bus should run in mode 0, MSB first. The Arcade Coder is happy at 200kHz.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let p = esp_hal::init(esp_hal::Config::default());
    /// let out = OutputConfig::default();
    ///
    /// let mut display = ArcadeCoderDisplay::new(
    ///     spi,
    ///     Output::new(p.GPIO19, Level::Low, out),
    ///     Output::new(p.GPIO18, Level::Low, out),
    ///     Output::new(p.GPIO21, Level::Low, out),
    ///     Output::new(p.GPIO4, Level::High, out),
    ///     Output::new(p.GPIO16, Level::Low, out),
    ///     Delay::new(),
    /// )?;
    /// ```
    pub fn new(
        spi: SPI,
        pin_a0: PIN,
        pin_a1: PIN,
        pin_a2: PIN,
        pin_oe: PIN,
        pin_latch: PIN,
        delay: DELAY,
    ) -> Result<Self, DisplayError<SPI::Error, PIN::Error>> {
        let mut display = Self {
            spi,
            pin_a0,
            pin_a1,
            pin_a2,
            pin_oe,
            pin_latch,
            delay,
            channel_select_delay_us: 100,
            latch_delay_us: 50,
            display_buffer: [BLANK_ROW; ROW_PAIRS],
            anti_ghost: true,
            layout: Layout::default(),
        };

        display.pin_a0.set_low().map_err(DisplayError::Pin)?;
        display.pin_a1.set_low().map_err(DisplayError::Pin)?;
        display.pin_a2.set_low().map_err(DisplayError::Pin)?;
        // output stays disabled until the first row is shifted in
        display.pin_oe.set_high().map_err(DisplayError::Pin)?;
        display.pin_latch.set_low().map_err(DisplayError::Pin)?;

        debug!("arcade coder display ready");
        Ok(display)
    }

    fn set_channel(
        &mut self,
        channel: Option<usize>,
    ) -> Result<(), DisplayError<SPI::Error, PIN::Error>> {
        use PinState::{High, Low};

        let (a0, a1, a2) = match channel {
            Some(0) => (Low, High, Low),
            Some(1) => (High, High, Low),
            Some(2) => (High, Low, High),
            Some(3) => (Low, Low, High),
            Some(4) => (High, Low, Low),
            Some(5) => (Low, High, High),
            Some(7) => (High, High, High),
            _ => (Low, Low, Low),
        };

        self.pin_a0.set_state(a0).map_err(DisplayError::Pin)?;
        self.pin_a1.set_state(a1).map_err(DisplayError::Pin)?;
        self.pin_a2.set_state(a2).map_err(DisplayError::Pin)?;
        // short delay for the output to stabilize
        self.delay.delay_us(self.channel_select_delay_us);
        Ok(())
    }

    fn send_display_data(
        &mut self,
        words: &[u8],
    ) -> Result<(), DisplayError<SPI::Error, PIN::Error>> {
        self.pin_oe.set_low().map_err(DisplayError::Pin)?;
        self.pin_latch.set_low().map_err(DisplayError::Pin)?;

        self.spi.write(words).map_err(DisplayError::Spi)?;
        self.spi.flush().map_err(DisplayError::Spi)?;

        self.pin_latch.set_high().map_err(DisplayError::Pin)?;
        self.delay.delay_us(self.latch_delay_us);
        self.pin_latch.set_low().map_err(DisplayError::Pin)?;
        Ok(())
    }

    /// Update the display with the current buffer
    ///
    /// _This needs to be called regularly as the image disappears after a short time._
    pub fn draw(&mut self) -> Result<(), DisplayError<SPI::Error, PIN::Error>> {
        for i in 0..ROW_PAIRS {
            let buf = self.display_buffer[i];
            trace!("row pair {}: {:02x?}", i, buf);

            self.set_channel(Some(i))?;
            self.send_display_data(&buf)?;

            if self.anti_ghost {
                self.send_display_data(&BLANK_ROW)?;
            }
        }

        self.set_channel(None)
    }
}

impl<SPI, PIN, DELAY> ArcadeCoderDisplay<SPI, PIN, DELAY> {
    /// Clear the display buffer to make the screen blank.
    ///
    /// The [`draw`] method needs to be called after this to update the display.
    ///
    /// [`draw`]: #method.draw
    pub fn clear(&mut self) {
        self.display_buffer = [BLANK_ROW; ROW_PAIRS];
    }

    /// Set a pixel to a color
    ///
    /// _Indexing starts from 0, so (0, 0) is the top-left and (11, 11) is the bottom-right._
    /// Pixels outside the matrix are ignored.
    pub fn set_pixel(&mut self, pos: Coordinates, color: Color) {
        if pos.0 >= SIZE || pos.1 >= SIZE {
            return;
        }

        let (byte_idx, bit_idx) = display_indexes(pos);
        let row = &mut self.display_buffer[pos.1 % ROW_PAIRS];

        // green, red and blue live in consecutive bytes
        for (offset, on) in [color.1, color.0, color.2].into_iter().enumerate() {
            let byte = &mut row[byte_idx + offset];
            *byte = *byte & !(1 << bit_idx) | (u8::from(!on) << bit_idx);
        }
    }

    /// The buffered color of a pixel, or `None` outside the matrix.
    pub fn pixel(&self, pos: Coordinates) -> Option<Color> {
        if pos.0 >= SIZE || pos.1 >= SIZE {
            return None;
        }

        let (byte_idx, bit_idx) = display_indexes(pos);
        let row = &self.display_buffer[pos.1 % ROW_PAIRS];
        let on = |byte: u8| byte & (1 << bit_idx) == 0;

        Some((on(row[byte_idx + 1]), on(row[byte_idx]), on(row[byte_idx + 2])))
    }

    pub fn draw_rect(&mut self, pos1: Coordinates, pos2: Coordinates, color: Color) {
        for x in pos1.0..=pos2.0 {
            for y in pos1.1..=pos2.1 {
                self.set_pixel((x, y), color);
            }
        }
    }

    /// Draw a digit glyph with its top-left corner at `start_pos`.
    ///
    /// Only digits 1 to 8 have glyphs; anything else draws nothing and returns an error.
    ///
    /// ## Example
    /// ```ignore
    /// use arcadecoder_hw::WHITE;
    ///
    /// display.draw_digit(4, (4, 3), WHITE)?;
    /// ```
    pub fn draw_digit(
        &mut self,
        n: u32,
        start_pos: Coordinates,
        color: Color,
    ) -> Result<(), digit_glyphs::Error> {
        let layout = self.layout;
        digit_glyphs::draw_digit(self, n, layout, start_pos, color)
    }
}

impl<SPI, PIN, DELAY> Canvas for ArcadeCoderDisplay<SPI, PIN, DELAY> {
    type Color = Color;

    fn set_pixel(&mut self, pos: Coordinates, color: Color) {
        ArcadeCoderDisplay::set_pixel(self, pos, color);
    }
}

/// Byte and bit of the green channel of a pixel within its row pair.
///
/// The left 4 columns of both rows share bytes 3..6; the right 8 columns of the top row use
/// bytes 0..3 and of the bottom row bytes 6..9.
fn display_indexes(pos: Coordinates) -> (usize, usize) {
    match (pos.0 < 4, pos.1 < ROW_PAIRS) {
        (true, true) => (3, 4 + pos.0),
        (true, false) => (3, pos.0),
        (false, true) => (0, pos.0 - 4),
        (false, false) => (6, pos.0 - 4),
    }
}
