//! Configuration types
//!
//! The display configuration is an immutable value handed to panel
//! initialization. The built-in board table is used unless `display.toml`
//! overrides it.

pub mod boards;
pub mod display;
pub mod gpio;
#[cfg(feature = "toml")]
pub mod toml;

pub use boards::CYD_2432S028R;
pub use display::*;
pub use gpio::{parse_pin_string, GpioAllocator};
