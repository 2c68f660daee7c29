//! Display configuration types
//!
//! Describes the TFT panel and how it is wired: driver chip, native
//! resolution, orientation, SPI pin mapping, backlight, glyph sets to keep
//! in flash and SPI clock frequencies.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use subcount_hal::spi::SpiConfig;

use super::boards::CYD_2432S028R;
use super::gpio::{GpioAllocator, PinError};

/// Fastest SPI clock the ESP32 GPIO matrix can drive (Hz)
pub const MAX_SPI_FREQUENCY: u32 = 80_000_000;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// GPIO number does not exist on the chip
    InvalidPin(u8),
    /// GPIO is wired to the SPI flash or used by UART0
    ReservedPin(u8),
    /// Output role assigned to an input-only GPIO
    InputOnlyPin(u8),
    /// Same GPIO assigned to two roles
    PinConflict(u8),
    /// Width or height is zero
    InvalidDimensions,
    /// SPI frequency is zero or above `MAX_SPI_FREQUENCY`
    InvalidFrequency,
    /// display.toml is not valid TOML or does not match the expected layout,
    /// including values of the wrong type or outside their integer range
    Syntax,
    /// A pin value is not `"gpioN"`, `"!gpioN"` or `"none"` (where allowed)
    InvalidValue,
    /// Unknown driver name
    UnknownDriver,
    /// Unknown orientation name
    UnknownOrientation,
    /// Unknown font name
    UnknownFont,
}

impl From<PinError> for ConfigError {
    fn from(e: PinError) -> Self {
        match e {
            PinError::InvalidPin(pin) => ConfigError::InvalidPin(pin),
            PinError::Reserved(pin) => ConfigError::ReservedPin(pin),
            PinError::InputOnly(pin) => ConfigError::InputOnlyPin(pin),
            PinError::AlreadyTaken(pin) => ConfigError::PinConflict(pin),
        }
    }
}

/// Display controller chip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DriverChip {
    /// ILI9341, first-revision init sequence
    Ili9341,
    /// ILI9341 with the alternative gamma/init sequence most CYD panels need
    #[default]
    Ili9341V2,
    /// ST7789
    St7789,
}

impl DriverChip {
    /// Parse a driver name as written in display.toml
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ili9341" => Some(DriverChip::Ili9341),
            "ili9341_2" => Some(DriverChip::Ili9341V2),
            "st7789" => Some(DriverChip::St7789),
            _ => None,
        }
    }
}

/// Screen orientation relative to the panel's native portrait layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// Native orientation (0°)
    #[default]
    Portrait,
    /// Rotated 90°
    Landscape,
    /// Rotated 180°
    PortraitFlipped,
    /// Rotated 270°
    LandscapeFlipped,
}

impl Orientation {
    /// Parse an orientation name as written in display.toml
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "portrait" => Some(Orientation::Portrait),
            "landscape" => Some(Orientation::Landscape),
            "portrait_flipped" => Some(Orientation::PortraitFlipped),
            "landscape_flipped" => Some(Orientation::LandscapeFlipped),
            _ => None,
        }
    }

    /// Rotation in degrees
    pub const fn degrees(self) -> u16 {
        match self {
            Orientation::Portrait => 0,
            Orientation::Landscape => 90,
            Orientation::PortraitFlipped => 180,
            Orientation::LandscapeFlipped => 270,
        }
    }

    /// Whether width and height are swapped
    pub const fn is_landscape(self) -> bool {
        matches!(self, Orientation::Landscape | Orientation::LandscapeFlipped)
    }
}

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// GPIO number
    pub pin: u8,
    /// Pin is active-low
    pub inverted: bool,
}

impl PinConfig {
    /// Create an active-high pin
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
        }
    }

    /// Create an active-low pin
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
        }
    }
}

/// SPI and control pin assignments for the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinMap {
    /// Master In Slave Out (only needed for reading back the panel)
    pub miso: Option<PinConfig>,
    /// Master Out Slave In
    pub mosi: PinConfig,
    /// Serial clock
    pub sclk: PinConfig,
    /// Chip select
    pub cs: PinConfig,
    /// Data/command select
    pub dc: PinConfig,
    /// Panel reset, `None` when tied to the board reset line
    pub rst: Option<PinConfig>,
    /// Backlight enable; `inverted` means the backlight is on when low
    pub backlight: Option<PinConfig>,
}

impl PinMap {
    /// Check that every pin exists, output roles can drive, and no GPIO is shared
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut gpio = GpioAllocator::new();

        if let Some(miso) = self.miso {
            gpio.allocate(miso.pin)?;
        }
        for pin in [self.mosi, self.sclk, self.cs, self.dc] {
            gpio.allocate_output(pin.pin)?;
        }
        for pin in [self.rst, self.backlight].into_iter().flatten() {
            gpio.allocate_output(pin.pin)?;
        }

        Ok(())
    }
}

/// Glyph set that can be preloaded into flash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// 5x7 Adafruit-style font in an 8px cell
    Glcd,
    /// 16 px proportional
    Font2,
    /// 26 px proportional
    Font4,
    /// 48 px, digits and a few symbols
    Font6,
    /// 48 px 7-segment, digits only
    Font7,
    /// 75 px, digits only
    Font8,
    /// FreeFonts family
    FreeFonts,
    /// Anti-aliased fonts loaded from flash
    Smooth,
}

impl Font {
    /// Every known font, smallest text font first
    pub const ALL: [Font; 8] = [
        Font::Glcd,
        Font::Font2,
        Font::Font4,
        Font::Font6,
        Font::Font7,
        Font::Font8,
        Font::FreeFonts,
        Font::Smooth,
    ];

    const fn bit(self) -> u16 {
        1 << (self as u16)
    }

    /// Parse a font name as written in display.toml
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "glcd" => Some(Font::Glcd),
            "font2" => Some(Font::Font2),
            "font4" => Some(Font::Font4),
            "font6" => Some(Font::Font6),
            "font7" => Some(Font::Font7),
            "font8" => Some(Font::Font8),
            "free_fonts" => Some(Font::FreeFonts),
            "smooth" => Some(Font::Smooth),
            _ => None,
        }
    }

    /// Font only covers digits and a handful of symbols
    pub const fn is_numeric_only(self) -> bool {
        matches!(self, Font::Font6 | Font::Font7 | Font::Font8)
    }
}

/// Set of preloaded glyph sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FontSet(u16);

impl FontSet {
    /// No fonts
    pub const EMPTY: FontSet = FontSet(0);

    /// Add a font
    pub const fn with(self, font: Font) -> Self {
        FontSet(self.0 | font.bit())
    }

    /// Check whether a font is loaded
    pub const fn contains(&self, font: Font) -> bool {
        self.0 & font.bit() != 0
    }

    /// Check whether no font is loaded
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Loaded fonts in ascending size order
    pub fn iter(&self) -> impl Iterator<Item = Font> + '_ {
        Font::ALL.into_iter().filter(|f| self.contains(*f))
    }
}

impl FromIterator<Font> for FontSet {
    fn from_iter<I: IntoIterator<Item = Font>>(iter: I) -> Self {
        iter.into_iter().fold(FontSet::EMPTY, FontSet::with)
    }
}

/// SPI clock frequencies in Hz
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpiFrequencies {
    /// Clock for writes to the panel
    pub write_hz: u32,
    /// Clock for reads from the panel
    pub read_hz: u32,
    /// Clock for the touch controller sharing the bus
    pub touch_hz: u32,
}

impl SpiFrequencies {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.write_hz == 0 || self.read_hz == 0 || self.touch_hz == 0 {
            return Err(ConfigError::InvalidFrequency);
        }
        if self.write_hz > MAX_SPI_FREQUENCY
            || self.read_hz > MAX_SPI_FREQUENCY
            || self.touch_hz > MAX_SPI_FREQUENCY
        {
            return Err(ConfigError::InvalidFrequency);
        }
        Ok(())
    }
}

/// Complete display configuration
///
/// Built once at startup and never mutated. Passed to panel
/// initialization and to anything that needs the logical screen size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Controller chip
    pub driver: DriverChip,
    /// Native width in pixels (portrait)
    pub width: u16,
    /// Native height in pixels (portrait)
    pub height: u16,
    /// Orientation to draw in
    pub orientation: Orientation,
    /// Pin assignments
    pub pins: PinMap,
    /// Glyph sets to keep in flash
    pub fonts: FontSet,
    /// SPI clocks
    pub spi: SpiFrequencies,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        CYD_2432S028R
    }
}

impl DisplayConfig {
    /// Logical (width, height) after applying the orientation
    pub const fn size(&self) -> (u16, u16) {
        if self.orientation.is_landscape() {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        }
    }

    /// SPI bus settings for writing to the panel
    pub const fn spi_config(&self) -> SpiConfig {
        SpiConfig::new(self.spi.write_hz)
    }

    /// SPI bus settings for reading back from the panel
    pub const fn read_spi_config(&self) -> SpiConfig {
        SpiConfig::new(self.spi.read_hz)
    }

    /// Check the configuration against what the chip can do
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        self.spi.validate()?;
        self.pins.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landscape_swaps_size() {
        let mut config = CYD_2432S028R;
        assert_eq!(config.size(), (240, 320));

        config.orientation = Orientation::Landscape;
        assert_eq!(config.size(), (320, 240));

        config.orientation = Orientation::PortraitFlipped;
        assert_eq!(config.size(), (240, 320));
    }

    #[test]
    fn test_pin_conflict() {
        let mut config = CYD_2432S028R;
        config.pins.cs = PinConfig::new(2);
        assert_eq!(config.validate(), Err(ConfigError::PinConflict(2)));
    }

    #[test]
    fn test_input_only_output_role() {
        let mut config = CYD_2432S028R;
        config.pins.backlight = Some(PinConfig::new(35));
        assert_eq!(config.validate(), Err(ConfigError::InputOnlyPin(35)));

        // MISO is an input, so 35 is fine there
        let mut config = CYD_2432S028R;
        config.pins.miso = Some(PinConfig::new(35));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flash_pins_rejected() {
        let mut config = CYD_2432S028R;
        config.pins.dc = PinConfig::new(6);
        assert_eq!(config.validate(), Err(ConfigError::ReservedPin(6)));
    }

    #[test]
    fn test_uart0_pins_rejected() {
        let mut config = CYD_2432S028R;
        config.pins.dc = PinConfig::new(3);
        assert_eq!(config.validate(), Err(ConfigError::ReservedPin(3)));

        let mut config = CYD_2432S028R;
        config.pins.backlight = Some(PinConfig::new(1));
        assert_eq!(config.validate(), Err(ConfigError::ReservedPin(1)));
    }

    #[test]
    fn test_invalid_frequency() {
        // Reads may run faster than writes
        let mut config = CYD_2432S028R;
        config.spi.write_hz = 10_000_000;
        assert!(config.validate().is_ok());

        let mut config = CYD_2432S028R;
        config.spi.read_hz = MAX_SPI_FREQUENCY + 1;
        assert_eq!(config.validate(), Err(ConfigError::InvalidFrequency));

        let mut config = CYD_2432S028R;
        config.spi.write_hz = MAX_SPI_FREQUENCY + 1;
        assert_eq!(config.validate(), Err(ConfigError::InvalidFrequency));

        let mut config = CYD_2432S028R;
        config.spi.touch_hz = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidFrequency));
    }

    #[test]
    fn test_zero_dimensions() {
        let mut config = CYD_2432S028R;
        config.width = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidDimensions));
    }

    #[test]
    fn test_font_set() {
        let fonts = FontSet::EMPTY.with(Font::Font4).with(Font::Glcd);
        assert!(fonts.contains(Font::Glcd));
        assert!(fonts.contains(Font::Font4));
        assert!(!fonts.contains(Font::Font2));

        let mut iter = fonts.iter();
        assert_eq!(iter.next(), Some(Font::Glcd));
        assert_eq!(iter.next(), Some(Font::Font4));
        assert_eq!(iter.next(), None);

        let collected: FontSet = [Font::Glcd, Font::Font4].into_iter().collect();
        assert_eq!(collected, fonts);
        assert!(FontSet::EMPTY.is_empty());
    }

    #[test]
    fn test_names() {
        assert_eq!(DriverChip::from_name("ili9341_2"), Some(DriverChip::Ili9341V2));
        assert_eq!(DriverChip::from_name("ssd1306"), None);
        assert_eq!(
            Orientation::from_name("landscape_flipped"),
            Some(Orientation::LandscapeFlipped)
        );
        assert_eq!(Font::from_name("font7"), Some(Font::Font7));
        assert!(Font::Font7.is_numeric_only());
        assert!(!Font::Font4.is_numeric_only());
    }

    #[test]
    fn test_spi_config() {
        let config = CYD_2432S028R;
        assert_eq!(config.spi_config().frequency, 55_000_000);
        assert_eq!(config.read_spi_config().frequency, 20_000_000);
    }
}
