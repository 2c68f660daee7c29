//! SubCount Hardware Abstraction Layer
//!
//! Board-agnostic traits for the few peripherals the counter touches
//! directly. The panel itself is driven through `mipidsi`; this crate only
//! covers what sits around it.
//!
//! `subcount-display` talks to these traits, `subcount-firmware` implements
//! them on top of `esp-hal`, and host tests implement them with mocks.
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output (backlight enable)
//! - [`spi::SpiConfig`] - SPI clock and mode settings for the panel bus

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod spi;

pub use gpio::{Level, OutputPin};
pub use spi::{Mode, SpiConfig};
