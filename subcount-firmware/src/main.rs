//! SubCount - YouTube Subscriber Counter Firmware
//!
//! Firmware for the ESP32-2432S028R ("Cheap Yellow Display"). The panel
//! setup comes from display.toml, embedded at build time; the subscriber
//! count arrives as text lines over the USB serial port.

#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]

extern crate alloc;

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::Timer;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_hal_bus::spi::ExclusiveDevice;
use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::spi::master::Spi;
use esp_hal::timer::timg::TimerGroup;
use esp_hal::uart::{Config as UartConfig, UartRx};
use mipidsi::interface::SpiInterface;
use mipidsi::models::{ILI9341Rgb565, ST7789};
use mipidsi::options::{ColorInversion, ColorOrder, Orientation as PanelOrientation, Rotation};
use mipidsi::Builder;
use {esp_backtrace as _, esp_println as _};

use subcount_core::config::toml::parse_display_config;
use subcount_core::config::{DisplayConfig, DriverChip, Orientation, CYD_2432S028R};
use subcount_display::screen::BACKGROUND;
use subcount_display::{Backlight, CounterScreen};

use crate::channels::SUBSCRIBER_COUNT;
use crate::output::{spi_config, HalOutput};

mod channels;
mod feed_rx;
mod output;
#[macro_use]
mod pins;

esp_bootloader_esp_idf::esp_app_desc!();

// Heap size: 32KB (display.toml parsing only)
const HEAP_SIZE: usize = 32 * 1024;

/// Embedded display configuration (compiled into firmware)
/// Edit display.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../display.toml");

/// Baud rate of the USB serial bridge
const FEED_BAUD_RATE: u32 = 115_200;

/// Main entry point
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    info!("SubCount firmware starting...");

    let peripherals = esp_hal::init(esp_hal::Config::default().with_cpu_clock(CpuClock::max()));
    esp_alloc::heap_allocator!(size: HEAP_SIZE);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);
    info!("Peripherals initialized");

    let config = load_config();
    info!(
        "Display: {:?} {}x{} {:?}, SPI {} Hz",
        config.driver, config.width, config.height, config.orientation, config.spi.write_hz
    );

    // Count feed on UART0 RX. TX stays with esp-println for defmt output.
    let rx = UartRx::new(
        peripherals.UART0,
        UartConfig::default().with_baudrate(FEED_BAUD_RATE),
    )
    .unwrap()
    .with_rx(peripherals.GPIO3)
    .into_async();
    spawner.spawn(feed_rx::feed_rx_task(rx)).unwrap();

    // GPIO1/3 belong to UART0 and 6-11 to the SPI flash; 20, 24 and 28-31
    // are not bonded out.
    let mut pins = pin_bank!(peripherals,
        0 => GPIO0, 2 => GPIO2, 4 => GPIO4, 5 => GPIO5,
        12 => GPIO12, 13 => GPIO13, 14 => GPIO14, 15 => GPIO15,
        16 => GPIO16, 17 => GPIO17, 18 => GPIO18, 19 => GPIO19,
        21 => GPIO21, 22 => GPIO22, 23 => GPIO23, 25 => GPIO25,
        26 => GPIO26, 27 => GPIO27, 32 => GPIO32, 33 => GPIO33,
        34 => GPIO34, 35 => GPIO35, 36 => GPIO36, 37 => GPIO37,
        38 => GPIO38, 39 => GPIO39,
    );

    let mut backlight = config.pins.backlight.map(|bl| {
        let pin = HalOutput::new(pins.take(bl.pin).unwrap());
        Backlight::from_config(pin, &bl)
    });

    let dc = Output::new(pins.take(config.pins.dc.pin).unwrap(), Level::Low, OutputConfig::default());
    let cs = Output::new(pins.take(config.pins.cs.pin).unwrap(), Level::High, OutputConfig::default());

    if let Some(rst) = config.pins.rst {
        let mut rst = Output::new(pins.take(rst.pin).unwrap(), Level::High, OutputConfig::default());
        rst.set_low();
        Timer::after_millis(10).await;
        rst.set_high();
        Timer::after_millis(120).await;
    }

    // SPI2
    let spi = Spi::new(peripherals.SPI2, spi_config(config.spi_config()))
        .unwrap()
        .with_sck(pins.take(config.pins.sclk.pin).unwrap())
        .with_mosi(pins.take(config.pins.mosi.pin).unwrap());
    let spi = match config.pins.miso {
        Some(miso) => spi.with_miso(pins.take(miso.pin).unwrap()),
        None => spi,
    };

    let spi_device = ExclusiveDevice::new(spi, cs, Delay::new()).unwrap();

    // mipidsi requires a pixel batching buffer that must live as long as the display driver.
    let mut di_buffer = [0u8; 512];
    let di = SpiInterface::new(spi_device, dc, &mut di_buffer);

    let screen = CounterScreen::new(config.fonts);
    let orientation = panel_orientation(config.orientation);

    let mut delay = Delay::new();
    match config.driver {
        DriverChip::Ili9341 | DriverChip::Ili9341V2 => {
            let display = Builder::new(ILI9341Rgb565, di)
                .display_size(config.width, config.height)
                .orientation(orientation)
                .color_order(ColorOrder::Bgr)
                .invert_colors(ColorInversion::Normal)
                .init(&mut delay)
                .unwrap();
            info!("ILI9341 initialized");
            render_loop(display, backlight.as_mut(), screen).await
        }
        DriverChip::St7789 => {
            let display = Builder::new(ST7789, di)
                .display_size(config.width, config.height)
                .orientation(orientation)
                .color_order(ColorOrder::Rgb)
                .invert_colors(ColorInversion::Inverted)
                .init(&mut delay)
                .unwrap();
            info!("ST7789 initialized");
            render_loop(display, backlight.as_mut(), screen).await
        }
    }
}

/// Parse the embedded display.toml
///
/// build.rs already rejects an invalid file, so the fallback only guards
/// against the two parsers disagreeing.
fn load_config() -> DisplayConfig {
    match parse_display_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Loaded embedded display.toml");
            config
        }
        Err(e) => {
            warn!("Invalid display.toml ({:?}), using CYD defaults", e);
            CYD_2432S028R
        }
    }
}

/// Panel rotation for a configured orientation
fn panel_orientation(orientation: Orientation) -> PanelOrientation {
    let rotation = match orientation {
        Orientation::Portrait => Rotation::Deg0,
        Orientation::Landscape => Rotation::Deg90,
        Orientation::PortraitFlipped => Rotation::Deg180,
        Orientation::LandscapeFlipped => Rotation::Deg270,
    };
    PanelOrientation::new().rotate(rotation)
}

/// Draw the counter screen, then redraw on every count update
async fn render_loop<D>(
    mut display: D,
    mut backlight: Option<&mut Backlight<HalOutput>>,
    screen: CounterScreen,
) -> !
where
    D: DrawTarget<Color = Rgb565>,
    D::Error: core::fmt::Debug,
{
    if let Err(e) = display.clear(BACKGROUND) {
        error!("Failed to clear display: {:?}", Debug2Format(&e));
    }
    if let Some(backlight) = backlight.as_mut() {
        backlight.on();
    }

    let mut count = 0;
    loop {
        if let Err(e) = screen.draw(&mut display, count) {
            warn!("Draw failed: {:?}", Debug2Format(&e));
        }
        count = SUBSCRIBER_COUNT.wait().await;
        info!("Subscribers: {}", count);
    }
}
