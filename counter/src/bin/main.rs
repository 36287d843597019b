#![no_std]
#![no_main]

use arcadecoder_hw::{ArcadeCoderDisplay, Color, WHITE};
use digit_glyphs::{FIRST_DIGIT, LAST_DIGIT};
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use esp_backtrace as _;
use esp_hal::{
    delay::Delay,
    gpio::{Level, Output, OutputConfig},
    spi::master::{Config, Spi},
    spi::{BitOrder, Mode},
    time::Rate,
    timer::timg::TimerGroup,
    Blocking,
};
use log::{error, info, LevelFilter};

/// How many times each digit is refreshed before moving on, roughly one per millisecond.
const REFRESHES_PER_DIGIT: u32 = 500;

/// Top-left of the glyph, centred on the 12x12 matrix.
const DIGIT_POS: (usize, usize) = (4, 3);

const DIGIT_COLOR: Color = WHITE;

type Display = ArcadeCoderDisplay<Spi<'static, Blocking>, Output<'static>, Delay>;

#[embassy_executor::task]
async fn count(mut display: Display) {
    Timer::after(Duration::from_secs(1)).await;

    loop {
        for n in FIRST_DIGIT..=LAST_DIGIT {
            display.clear();
            if let Err(e) = display.draw_digit(n, DIGIT_POS, DIGIT_COLOR) {
                error!("{}", e);
            }

            for _ in 0..REFRESHES_PER_DIGIT {
                if let Err(e) = display.draw() {
                    error!("{}", e);
                }
                Timer::after_millis(1).await;
            }
        }
    }
}

#[esp_hal_embassy::main]
async fn main(spawner: Spawner) {
    esp_println::logger::init_logger(LevelFilter::Info);
    info!("Init!");
    let p = esp_hal::init(esp_hal::Config::default());

    let timg0 = TimerGroup::new(p.TIMG0);
    esp_hal_embassy::init(timg0.timer0);

    let spi = Spi::new(
        p.SPI2,
        Config::default()
            .with_frequency(Rate::from_khz(200))
            .with_mode(Mode::_0)
            .with_write_bit_order(BitOrder::MsbFirst),
    )
    .expect("could not create spi")
    .with_mosi(p.GPIO5)
    .with_sck(p.GPIO17);

    let out = OutputConfig::default();
    let display = ArcadeCoderDisplay::new(
        spi,
        Output::new(p.GPIO19, Level::Low, out),
        Output::new(p.GPIO18, Level::Low, out),
        Output::new(p.GPIO21, Level::Low, out),
        Output::new(p.GPIO4, Level::High, out),
        Output::new(p.GPIO16, Level::Low, out),
        Delay::new(),
    )
    .expect("could not set up display");

    let mut led = Output::new(p.GPIO22, Level::Low, out);
    led.set_high();

    info!("counting {} to {}", FIRST_DIGIT, LAST_DIGIT);
    spawner.spawn(count(display)).expect("could not spawn task");
}
