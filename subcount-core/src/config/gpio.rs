//! GPIO allocation and pin-string parsing
//!
//! Tracks which ESP32 GPIOs a configuration uses so conflicting or
//! impossible assignments are caught before the panel is brought up.

use heapless::FnvIndexSet;

/// Number of GPIO numbers on the ESP32 (some are not bonded out)
pub const GPIO_COUNT: u8 = 40;

/// GPIO allocation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// GPIO number does not exist
    InvalidPin(u8),
    /// GPIO is wired to the SPI flash or held by the UART0 count feed
    Reserved(u8),
    /// GPIO cannot drive an output
    InputOnly(u8),
    /// GPIO already allocated
    AlreadyTaken(u8),
}

/// Whether a GPIO number exists on the ESP32
pub const fn is_valid_gpio(pin: u8) -> bool {
    pin < GPIO_COUNT && !matches!(pin, 20 | 24 | 28..=31)
}

/// GPIOs 6-11 are connected to the SPI flash
pub const fn is_flash_gpio(pin: u8) -> bool {
    matches!(pin, 6..=11)
}

/// GPIOs 1 and 3 are UART0 TX/RX (USB bridge, log output and count feed)
pub const fn is_uart0_gpio(pin: u8) -> bool {
    matches!(pin, 1 | 3)
}

/// Whether a GPIO is unavailable to the display
pub const fn is_reserved_gpio(pin: u8) -> bool {
    is_flash_gpio(pin) || is_uart0_gpio(pin)
}

/// GPIOs 34-39 have no output driver
pub const fn is_input_only(pin: u8) -> bool {
    matches!(pin, 34..=39)
}

/// GPIO allocator to track pin usage
pub struct GpioAllocator {
    allocated: FnvIndexSet<u8, 8>,
}

impl Default for GpioAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl GpioAllocator {
    /// Create an empty allocator
    pub fn new() -> Self {
        Self {
            allocated: FnvIndexSet::new(),
        }
    }

    /// Allocate a GPIO for input use
    pub fn allocate(&mut self, pin: u8) -> Result<(), PinError> {
        if !is_valid_gpio(pin) {
            return Err(PinError::InvalidPin(pin));
        }
        if is_reserved_gpio(pin) {
            return Err(PinError::Reserved(pin));
        }
        if self.allocated.contains(&pin) {
            return Err(PinError::AlreadyTaken(pin));
        }
        // A display never needs more than eight pins; a full set means a conflict
        self.allocated
            .insert(pin)
            .map_err(|_| PinError::AlreadyTaken(pin))?;
        Ok(())
    }

    /// Allocate a GPIO that must drive an output
    pub fn allocate_output(&mut self, pin: u8) -> Result<(), PinError> {
        if is_valid_gpio(pin) && is_input_only(pin) {
            return Err(PinError::InputOnly(pin));
        }
        self.allocate(pin)
    }

    /// Release a GPIO
    pub fn release(&mut self, pin: u8) {
        self.allocated.remove(&pin);
    }

    /// Check if a GPIO is allocated
    pub fn is_allocated(&self, pin: u8) -> bool {
        self.allocated.contains(&pin)
    }

    /// Number of allocated GPIOs
    pub fn allocated_count(&self) -> usize {
        self.allocated.len()
    }
}

/// Parse a pin string from display.toml
///
/// - `"gpio13"` -> `Some((13, false))`
/// - `"!gpio21"` -> `Some((21, true))` (active-low)
///
/// Only checks the GPIO number exists; role checks happen in validation.
pub fn parse_pin_string(s: &str) -> Option<(u8, bool)> {
    let s = s.trim();

    let (s, inverted) = match s.strip_prefix('!') {
        Some(rest) => (rest, true),
        None => (s, false),
    };

    let pin: u8 = s.strip_prefix("gpio")?.parse().ok()?;

    if !is_valid_gpio(pin) {
        return None;
    }

    Some((pin, inverted))
}
