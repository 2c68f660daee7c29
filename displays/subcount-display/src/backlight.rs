//! Backlight control

use subcount_core::config::PinConfig;
use subcount_hal::gpio::{Level, OutputPin};

/// Backlight enable pin with polarity
pub struct Backlight<P> {
    pin: P,
    active: Level,
}

impl<P: OutputPin> Backlight<P> {
    /// Wrap a pin; the backlight starts off
    pub fn new(pin: P, active_low: bool) -> Self {
        let mut backlight = Self {
            pin,
            active: if active_low { Level::Low } else { Level::High },
        };
        backlight.off();
        backlight
    }

    /// Wrap a pin using the polarity from its configuration
    pub fn from_config(pin: P, config: &PinConfig) -> Self {
        Self::new(pin, config.inverted)
    }

    /// Turn the backlight on
    pub fn on(&mut self) {
        self.pin.set_level(self.active);
    }

    /// Turn the backlight off
    pub fn off(&mut self) {
        self.pin.set_level(self.active.inverted());
    }

    /// Switch on or off
    pub fn set(&mut self, on: bool) {
        if on {
            self.on();
        } else {
            self.off();
        }
    }

    /// Whether the backlight is lit
    pub fn is_on(&self) -> bool {
        Level::from(self.pin.is_set_high()) == self.active
    }

    /// Give the pin back
    pub fn release(self) -> P {
        self.pin
    }
}
