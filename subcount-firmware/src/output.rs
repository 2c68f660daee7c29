//! esp-hal adapters for the subcount-hal traits

use esp_hal::gpio::{AnyPin, Level, Output, OutputConfig};
use esp_hal::spi::master::Config;
use esp_hal::spi::Mode;
use esp_hal::time::Rate;

/// Push-pull output driving a subcount-hal `OutputPin`
pub struct HalOutput(Output<'static>);

impl HalOutput {
    /// Configure `pin` as an output, initially low
    pub fn new(pin: AnyPin<'static>) -> Self {
        Self(Output::new(pin, Level::Low, OutputConfig::default()))
    }
}

impl subcount_hal::OutputPin for HalOutput {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// esp-hal SPI master configuration for a bus setting
pub fn spi_config(config: subcount_hal::SpiConfig) -> Config {
    let mode = match config.mode {
        subcount_hal::Mode::Mode0 => Mode::_0,
        subcount_hal::Mode::Mode1 => Mode::_1,
        subcount_hal::Mode::Mode2 => Mode::_2,
        subcount_hal::Mode::Mode3 => Mode::_3,
    };
    Config::default()
        .with_frequency(Rate::from_hz(config.frequency))
        .with_mode(mode)
}
