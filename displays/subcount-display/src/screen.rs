//! Subscriber counter screen
//!
//! Logo near the top, the count centred below it, a caption underneath.
//! Fonts come from the configured glyph sets.

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10, FONT_8X13};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::{Rgb565, WebColors};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use heapless::String;

use subcount_core::config::{Font, FontSet};

use crate::logo::{draw_youtube_logo, LOGO_SIZE};

/// Screen background
pub const BACKGROUND: Rgb565 = Rgb565::BLACK;

/// Count colour
pub const COUNT_COLOR: Rgb565 = Rgb565::WHITE;

/// Caption colour
pub const CAPTION_COLOR: Rgb565 = Rgb565::CSS_LIGHT_GRAY;

/// Gap between logo and count (pixels)
const LOGO_GAP: i32 = 16;

/// Gap between count and caption (pixels)
const CAPTION_GAP: i32 = 8;

/// Longest formatted count: "4,294,967,295"
pub const COUNT_LEN: usize = 16;

/// Monospace font standing in for a preloaded glyph set
///
/// Digit-only sets have no monospace equivalent.
pub fn mono_font(font: Font) -> Option<&'static MonoFont<'static>> {
    match font {
        Font::Glcd => Some(&FONT_6X10),
        Font::Font2 => Some(&FONT_8X13),
        Font::Font4 => Some(&FONT_10X20),
        _ => None,
    }
}

/// Format a count with thousands separators
pub fn format_count(count: u32) -> String<COUNT_LEN> {
    let mut digits = [0u8; 10];
    let mut len = 0;
    let mut n = count;
    loop {
        digits[len] = b'0' + (n % 10) as u8;
        len += 1;
        n /= 10;
        if n == 0 {
            break;
        }
    }

    let mut out = String::new();
    for i in (0..len).rev() {
        // Capacity covers 10 digits and 3 separators
        let _ = out.push(digits[i] as char);
        if i > 0 && i % 3 == 0 {
            let _ = out.push(',');
        }
    }
    out
}

/// Subscriber counter layout
#[derive(Clone, Copy)]
pub struct CounterScreen {
    count_font: Option<&'static MonoFont<'static>>,
    caption_font: Option<&'static MonoFont<'static>>,
    caption: &'static str,
}

impl CounterScreen {
    /// Create a screen using the largest loaded font for the count and the
    /// smallest for the caption
    pub fn new(fonts: FontSet) -> Self {
        let mut text_fonts = fonts.iter().filter_map(mono_font);
        let caption_font = text_fonts.next();
        let count_font = text_fonts.last().or(caption_font);

        Self {
            count_font,
            caption_font,
            caption: "subscribers",
        }
    }

    /// Replace the caption text
    pub fn with_caption(self, caption: &'static str) -> Self {
        Self { caption, ..self }
    }

    /// Font used for the count, if any text font is loaded
    pub fn count_font(&self) -> Option<&'static MonoFont<'static>> {
        self.count_font
    }

    /// Font used for the caption
    pub fn caption_font(&self) -> Option<&'static MonoFont<'static>> {
        self.caption_font
    }

    /// Where the logo goes inside `bounds`: centred, a fifth of the way down
    pub fn logo_origin(bounds: Rectangle) -> Point {
        let x = (bounds.size.width as i32 - LOGO_SIZE.width as i32) / 2;
        let y = bounds.size.height as i32 / 5;
        bounds.top_left + Point::new(x, y)
    }

    /// Top of the count text band inside `bounds`
    pub fn count_top(bounds: Rectangle) -> i32 {
        Self::logo_origin(bounds).y + LOGO_SIZE.height as i32 + LOGO_GAP
    }

    /// Draw the whole screen
    ///
    /// The count band is cleared first so a shorter number leaves no
    /// leftovers; the rest of the screen is not cleared.
    pub fn draw<D>(&self, target: &mut D, count: u32) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let bounds = target.bounding_box();
        let origin = Self::logo_origin(bounds);
        draw_youtube_logo(target, origin.x, origin.y)?;

        let Some(count_font) = self.count_font else {
            return Ok(());
        };

        let centre_x = bounds.top_left.x + bounds.size.width as i32 / 2;
        let count_top = Self::count_top(bounds);
        let centred = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Top)
            .build();

        Rectangle::new(
            Point::new(bounds.top_left.x, count_top),
            Size::new(bounds.size.width, count_font.character_size.height),
        )
        .into_styled(PrimitiveStyle::with_fill(BACKGROUND))
        .draw(target)?;

        let text = format_count(count);
        Text::with_text_style(
            &text,
            Point::new(centre_x, count_top),
            MonoTextStyle::new(count_font, COUNT_COLOR),
            centred,
        )
        .draw(target)?;

        if let Some(caption_font) = self.caption_font {
            let caption_top =
                count_top + count_font.character_size.height as i32 + CAPTION_GAP;
            Text::with_text_style(
                self.caption,
                Point::new(centre_x, caption_top),
                MonoTextStyle::new(caption_font, CAPTION_COLOR),
                centred,
            )
            .draw(target)?;
        }

        Ok(())
    }
}
