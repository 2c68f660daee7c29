//! SPI bus configuration
//!
//! The panel bus is owned by the chip HAL; this module only describes how
//! it should be clocked so configuration code stays chip-agnostic.

/// SPI configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Clock polarity and phase
    pub mode: Mode,
}

impl SpiConfig {
    /// Mode 0 at the given frequency (what TFT controllers expect)
    pub const fn new(frequency: u32) -> Self {
        Self {
            frequency,
            mode: Mode::Mode0,
        }
    }

    /// Same configuration at a different clock
    pub const fn with_frequency(self, frequency: u32) -> Self {
        Self { frequency, ..self }
    }
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self::new(1_000_000)
    }
}

/// Clock polarity / phase pair
///
/// ILI9341 and ST7789 both sample on the rising edge with an idle-low clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Idle low, sample on the leading edge
    Mode0,
    /// Idle low, sample on the trailing edge
    Mode1,
    /// Idle high, sample on the leading edge
    Mode2,
    /// Idle high, sample on the trailing edge
    Mode3,
}

impl Mode {
    /// Whether the clock idles high (CPOL)
    pub const fn idles_high(self) -> bool {
        matches!(self, Mode::Mode2 | Mode::Mode3)
    }
}
