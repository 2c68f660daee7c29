//! Built-in board tables

use super::display::{
    DisplayConfig, DriverChip, Font, FontSet, Orientation, PinConfig, PinMap, SpiFrequencies,
};

/// ESP32-2432S028R ("Cheap Yellow Display")
///
/// 2.8" 240x320 ILI9341 on HSPI. Panel reset is tied to the board reset
/// line, so there is no RST pin.
pub const CYD_2432S028R: DisplayConfig = DisplayConfig {
    driver: DriverChip::Ili9341V2,
    width: 240,
    height: 320,
    orientation: Orientation::Portrait,
    pins: PinMap {
        miso: Some(PinConfig::new(12)),
        mosi: PinConfig::new(13),
        sclk: PinConfig::new(14),
        cs: PinConfig::new(15),
        dc: PinConfig::new(2),
        rst: None,
        backlight: Some(PinConfig::new(21)),
    },
    fonts: FontSet::EMPTY
        .with(Font::Glcd)
        .with(Font::Font2)
        .with(Font::Font4)
        .with(Font::Font6)
        .with(Font::Font7)
        .with(Font::Font8),
    spi: SpiFrequencies {
        write_hz: 55_000_000,
        read_hz: 20_000_000,
        touch_hz: 2_500_000,
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cyd_table() {
        let config = CYD_2432S028R;
        assert_eq!(config.driver, DriverChip::Ili9341V2);
        assert_eq!((config.width, config.height), (240, 320));
        assert_eq!(config.pins.miso, Some(PinConfig::new(12)));
        assert_eq!(config.pins.mosi.pin, 13);
        assert_eq!(config.pins.sclk.pin, 14);
        assert_eq!(config.pins.cs.pin, 15);
        assert_eq!(config.pins.dc.pin, 2);
        assert!(config.pins.rst.is_none());
        assert_eq!(config.pins.backlight, Some(PinConfig::new(21)));
        assert_eq!(config.spi.write_hz, 55_000_000);
        assert_eq!(config.spi.read_hz, 20_000_000);
        assert_eq!(config.spi.touch_hz, 2_500_000);
    }

    #[test]
    fn test_cyd_fonts() {
        let fonts = CYD_2432S028R.fonts;
        for font in [Font::Glcd, Font::Font2, Font::Font4, Font::Font6, Font::Font7, Font::Font8] {
            assert!(fonts.contains(font));
        }
        assert!(!fonts.contains(Font::FreeFonts));
        assert!(!fonts.contains(Font::Smooth));
    }

    #[test]
    fn test_cyd_is_valid() {
        assert!(CYD_2432S028R.validate().is_ok());
    }

    #[test]
    fn test_default_is_cyd() {
        assert_eq!(DisplayConfig::default(), CYD_2432S028R);
        // Constant, never computed
        assert_eq!(DisplayConfig::default(), DisplayConfig::default());
    }
}
