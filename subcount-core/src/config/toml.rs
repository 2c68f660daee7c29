//! `display.toml` loading
//!
//! Every key is optional; anything left out keeps the built-in CYD value.
//!
//! ```toml
//! [display]
//! driver = "ili9341_2"
//! width = 240
//! height = 320
//! orientation = "portrait"
//! fonts = ["glcd", "font2", "font4"]
//!
//! [pins]
//! mosi = "gpio13"
//! rst = "none"
//! backlight = "!gpio21"   # active-low
//!
//! [spi]
//! frequency = 55000000
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use serde::Deserialize;

use super::boards::CYD_2432S028R;
use super::display::{ConfigError, DisplayConfig, DriverChip, Font, FontSet, Orientation, PinConfig};
use super::gpio::parse_pin_string;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct DisplayFile {
    display: DisplaySection,
    pins: PinsSection,
    spi: SpiSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct DisplaySection {
    driver: Option<String>,
    width: Option<u16>,
    height: Option<u16>,
    orientation: Option<String>,
    fonts: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PinsSection {
    miso: Option<String>,
    mosi: Option<String>,
    sclk: Option<String>,
    cs: Option<String>,
    dc: Option<String>,
    rst: Option<String>,
    backlight: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SpiSection {
    frequency: Option<u32>,
    read_frequency: Option<u32>,
    touch_frequency: Option<u32>,
}

/// Parse display.toml on top of the CYD defaults and validate the result
pub fn parse_display_config(input: &str) -> Result<DisplayConfig, ConfigError> {
    let file: DisplayFile = ::toml::from_str(input).map_err(|_| ConfigError::Syntax)?;

    let mut config = CYD_2432S028R;

    let display = file.display;
    if let Some(driver) = display.driver {
        config.driver = DriverChip::from_name(&driver).ok_or(ConfigError::UnknownDriver)?;
    }
    if let Some(width) = display.width {
        config.width = width;
    }
    if let Some(height) = display.height {
        config.height = height;
    }
    if let Some(orientation) = display.orientation {
        config.orientation =
            Orientation::from_name(&orientation).ok_or(ConfigError::UnknownOrientation)?;
    }
    if let Some(fonts) = display.fonts {
        config.fonts = fonts
            .iter()
            .map(|name| Font::from_name(name).ok_or(ConfigError::UnknownFont))
            .collect::<Result<FontSet, _>>()?;
    }

    let pins = file.pins;
    if let Some(miso) = pins.miso {
        config.pins.miso = optional_pin(&miso)?;
    }
    if let Some(mosi) = pins.mosi {
        config.pins.mosi = required_pin(&mosi)?;
    }
    if let Some(sclk) = pins.sclk {
        config.pins.sclk = required_pin(&sclk)?;
    }
    if let Some(cs) = pins.cs {
        config.pins.cs = required_pin(&cs)?;
    }
    if let Some(dc) = pins.dc {
        config.pins.dc = required_pin(&dc)?;
    }
    if let Some(rst) = pins.rst {
        config.pins.rst = optional_pin(&rst)?;
    }
    if let Some(backlight) = pins.backlight {
        config.pins.backlight = optional_pin(&backlight)?;
    }

    let spi = file.spi;
    if let Some(hz) = spi.frequency {
        config.spi.write_hz = hz;
    }
    if let Some(hz) = spi.read_frequency {
        config.spi.read_hz = hz;
    }
    if let Some(hz) = spi.touch_frequency {
        config.spi.touch_hz = hz;
    }

    config.validate()?;
    Ok(config)
}

/// Parse a pin that may be "none"
fn optional_pin(value: &str) -> Result<Option<PinConfig>, ConfigError> {
    if value.trim() == "none" {
        return Ok(None);
    }
    required_pin(value).map(Some)
}

/// Parse a pin that must be connected
fn required_pin(value: &str) -> Result<PinConfig, ConfigError> {
    let (pin, inverted) = parse_pin_string(value).ok_or(ConfigError::InvalidValue)?;
    Ok(PinConfig { pin, inverted })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_cyd() {
        let config = parse_display_config("").unwrap();
        assert_eq!(config, CYD_2432S028R);
    }

    #[test]
    fn test_full_file_matches_cyd() {
        let input = r#"
# CYD wiring
[display]
driver = "ili9341_2"
width = 240
height = 320
orientation = "portrait"
fonts = ["glcd", "font2", "font4", "font6", "font7", "font8"]

[pins]
miso = "gpio12"
mosi = "gpio13"
sclk = "gpio14"
cs = "gpio15"
dc = "gpio2"
rst = "none"
backlight = "gpio21"

[spi]
frequency = 55000000
read_frequency = 20000000
touch_frequency = 2500000
"#;
        let config = parse_display_config(input).unwrap();
        assert_eq!(config, CYD_2432S028R);
    }

    #[test]
    fn test_overrides() {
        let input = r#"
[display]
driver = "st7789"
orientation = "landscape"
fonts = ["glcd"]

[pins]
rst = "gpio4"
backlight = "!gpio27"

[spi]
frequency = 40000000
"#;
        let config = parse_display_config(input).unwrap();
        assert_eq!(config.driver, DriverChip::St7789);
        assert_eq!(config.size(), (320, 240));
        assert!(config.fonts.contains(Font::Glcd));
        assert!(!config.fonts.contains(Font::Font4));
        assert_eq!(config.pins.rst, Some(PinConfig::new(4)));
        assert_eq!(config.pins.backlight, Some(PinConfig::inverted(27)));
        assert_eq!(config.spi.write_hz, 40_000_000);
        // Untouched keys keep the board value
        assert_eq!(config.pins.mosi.pin, 13);
        assert_eq!(config.spi.read_hz, 20_000_000);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse_display_config("[display\n"),
            Err(ConfigError::Syntax)
        );
        assert_eq!(
            parse_display_config("[display]\nbogus = 1\n"),
            Err(ConfigError::Syntax)
        );
        assert_eq!(
            parse_display_config("[display]\ndriver = \"ssd1306\"\n"),
            Err(ConfigError::UnknownDriver)
        );
        assert_eq!(
            parse_display_config("[display]\norientation = \"sideways\"\n"),
            Err(ConfigError::UnknownOrientation)
        );
        assert_eq!(
            parse_display_config("[display]\nfonts = [\"comic\"]\n"),
            Err(ConfigError::UnknownFont)
        );
        assert_eq!(
            parse_display_config("[pins]\nmosi = \"none\"\n"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_display_config("[pins]\ncs = \"gpio2\"\n"),
            Err(ConfigError::PinConflict(2))
        );
        assert_eq!(
            parse_display_config("[spi]\nfrequency = 0\n"),
            Err(ConfigError::InvalidFrequency)
        );
        // Out-of-range numbers fail deserialization
        assert_eq!(
            parse_display_config("[display]\nwidth = 70000\n"),
            Err(ConfigError::Syntax)
        );
    }

    #[test]
    fn test_uart0_pins_rejected() {
        assert_eq!(
            parse_display_config("[pins]\ndc = \"gpio3\"\n"),
            Err(ConfigError::ReservedPin(3))
        );
        assert_eq!(
            parse_display_config("[pins]\nbacklight = \"gpio1\"\n"),
            Err(ConfigError::ReservedPin(1))
        );
        assert_eq!(
            parse_display_config("[pins]\nmiso = \"gpio3\"\n"),
            Err(ConfigError::ReservedPin(3))
        );
    }

    #[test]
    fn test_slow_write_clock_only() {
        let config = parse_display_config("[spi]\nfrequency = 10000000\n").unwrap();
        assert_eq!(config.spi.write_hz, 10_000_000);
        assert_eq!(config.spi.read_hz, 20_000_000);
    }
}
