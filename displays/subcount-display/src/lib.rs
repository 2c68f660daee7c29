//! Drawing and panel-side helpers for SubCount
//!
//! This crate provides:
//! - `ShapeCanvas`, the "can fill rounded rectangles and triangles" capability,
//!   implemented for every Rgb565 `DrawTarget`
//! - `draw_youtube_logo`, the logo built from two filled primitives
//! - `CounterScreen`, the subscriber counter layout
//! - `Backlight`, polarity-aware backlight control
//!
//! Nothing here owns the panel. The firmware creates the `mipidsi` display
//! from a `DisplayConfig` and lends it to these routines.

#![no_std]

pub mod backend;
pub mod backlight;
pub mod logo;
pub mod screen;

// Re-export key types
pub use backend::ShapeCanvas;
pub use backlight::Backlight;
pub use logo::{draw_youtube_logo, YOUTUBE_RED};
pub use screen::{format_count, CounterScreen};
