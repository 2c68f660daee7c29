//! Build script for subcount-firmware
//!
//! - Passes the esp-hal and defmt linker scripts
//! - Validates display.toml at compile time

use std::fs;
use std::path::Path;

fn main() {
    setup_linker();
    validate_config();
}

/// Linker scripts for esp-hal and defmt
fn setup_linker() {
    println!("cargo:rustc-link-arg=-Tlinkall.x");
    println!("cargo:rustc-link-arg=-Tdefmt.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate display.toml at compile time
///
/// Syntax is checked with a generic TOML parse first so the error points at
/// the offending line; the values are then run through the same parser and
/// validation the firmware uses at boot.
fn validate_config() {
    println!("cargo:rerun-if-changed=display.toml");

    let config_path = Path::new("display.toml");

    if !config_path.exists() {
        fail(
            "display.toml not found!",
            &[
                "The firmware embeds display.toml at build time.".into(),
                "Create one in the subcount-firmware directory; an empty file".into(),
                "selects the ESP32-2432S028R defaults.".into(),
            ],
        );
    }

    let config_content = fs::read_to_string(config_path)
        .unwrap_or_else(|e| fail("Failed to read display.toml", &[format!("Error: {}", e)]));

    if let Err(e) = toml::from_str::<toml::Table>(&config_content) {
        let lines: Vec<String> = e.to_string().lines().map(String::from).collect();
        fail("Invalid TOML syntax in display.toml", &lines);
    }

    let config = subcount_core::config::toml::parse_display_config(&config_content)
        .unwrap_or_else(|e| fail("Invalid display configuration in display.toml", &[describe(e)]));

    println!(
        "cargo:warning=display.toml validated: {:?} {}x{} {:?}, SPI {} Hz",
        config.driver, config.width, config.height, config.orientation, config.spi.write_hz
    );
}

/// Abort the build with a boxed error message
fn fail(title: &str, lines: &[String]) -> ! {
    const WIDTH: usize = 66;
    let rule = "═".repeat(WIDTH);

    let mut message = format!("\n╔{}╗\n{}\n╠{}╣\n", rule, boxed_line(&format!("ERROR: {}", title)), rule);
    for line in lines {
        message.push_str(&boxed_line(line));
        message.push('\n');
    }
    message.push_str(&format!("╚{}╝\n", rule));
    panic!("{}", message);
}

/// One line inside the box, truncated to fit
fn boxed_line(line: &str) -> String {
    let truncated = if line.chars().count() > 62 {
        format!("{}...", line.chars().take(59).collect::<String>())
    } else {
        line.to_string()
    };
    format!("║  {:<62}  ║", truncated)
}

/// Human-readable description of a configuration error
fn describe(error: subcount_core::config::ConfigError) -> String {
    use subcount_core::config::ConfigError;

    match error {
        ConfigError::InvalidPin(pin) => format!("gpio{} does not exist on the ESP32", pin),
        ConfigError::ReservedPin(pin) => {
            format!("gpio{} is used by the SPI flash or UART0", pin)
        }
        ConfigError::InputOnlyPin(pin) => {
            format!("gpio{} is input-only and cannot drive an output", pin)
        }
        ConfigError::PinConflict(pin) => format!("gpio{} is assigned more than once", pin),
        ConfigError::InvalidDimensions => "display width and height must be non-zero".into(),
        ConfigError::InvalidFrequency => {
            "SPI frequencies must be non-zero and at most 80 MHz".into()
        }
        ConfigError::Syntax => "file does not match the display.toml layout".into(),
        ConfigError::InvalidValue => {
            "pin values must look like \"gpioN\", \"!gpioN\" or \"none\"".into()
        }
        ConfigError::UnknownDriver => "unknown driver (ili9341, ili9341_2, st7789)".into(),
        ConfigError::UnknownOrientation => {
            "unknown orientation (portrait, landscape, *_flipped)".into()
        }
        ConfigError::UnknownFont => {
            "unknown font (glcd, font2/4/6/7/8, free_fonts, smooth)".into()
        }
    }
}
