//! Pin allocation by number
//!
//! display.toml names pins as `gpioN`, so the peripheral singletons are
//! moved into a bank once at boot and handed out by number afterwards.

use esp_hal::gpio::AnyPin;

use subcount_core::config::gpio::{is_reserved_gpio, is_valid_gpio, PinError, GPIO_COUNT};

/// Fill a `PinBank` from the peripherals
///
/// ```ignore
/// let mut pins = pin_bank!(peripherals, 2 => GPIO2, 12 => GPIO12);
/// let dc = pins.take(2)?;
/// ```
macro_rules! pin_bank {
    ($p:expr, $($num:literal => $gpio:ident),+ $(,)?) => {{
        let mut bank = $crate::pins::PinBank::new();
        $( bank.insert($num, esp_hal::gpio::AnyPin::from($p.$gpio)); )+
        bank
    }};
}

enum Slot {
    /// Not handed to the bank (flash, UART0, or not bonded out)
    Unavailable,
    Free(AnyPin<'static>),
    Taken,
}

/// GPIO pins available for config-driven assignment
pub struct PinBank {
    slots: [Slot; GPIO_COUNT as usize],
}

impl PinBank {
    /// Create an empty bank
    pub fn new() -> Self {
        Self {
            slots: core::array::from_fn(|_| Slot::Unavailable),
        }
    }

    /// Add a pin to the bank
    pub fn insert(&mut self, num: u8, pin: AnyPin<'static>) {
        if let Some(slot) = self.slots.get_mut(num as usize) {
            *slot = Slot::Free(pin);
        }
    }

    /// Take a pin by number
    pub fn take(&mut self, num: u8) -> Result<AnyPin<'static>, PinError> {
        if !is_valid_gpio(num) {
            return Err(PinError::InvalidPin(num));
        }
        let slot = &mut self.slots[num as usize];
        match core::mem::replace(slot, Slot::Taken) {
            Slot::Free(pin) => Ok(pin),
            Slot::Taken => Err(PinError::AlreadyTaken(num)),
            Slot::Unavailable => {
                *slot = Slot::Unavailable;
                if is_reserved_gpio(num) {
                    Err(PinError::Reserved(num))
                } else {
                    Err(PinError::InvalidPin(num))
                }
            }
        }
    }
}

impl Default for PinBank {
    fn default() -> Self {
        Self::new()
    }
}
