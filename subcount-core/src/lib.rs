//! Board-agnostic core for the SubCount subscriber counter
//!
//! This crate holds everything about the panel that is data rather than
//! hardware access:
//!
//! - Display configuration types (driver, resolution, pin map, fonts, SPI clocks)
//! - The built-in board table for the ESP32-2432S028R
//! - Configuration validation
//! - `display.toml` loading (feature `toml`)
//! - Parser for the serial subscriber-count feed

#![no_std]
#![deny(unsafe_code)]

#[cfg(feature = "toml")]
extern crate alloc;

pub mod config;
pub mod feed;
