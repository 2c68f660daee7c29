//! YouTube logo drawn from primitives
//!
//! A red rounded box with a white play triangle. Drawing it from two shapes
//! keeps a bitmap out of flash.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::backend::ShapeCanvas;

/// YouTube red (RGB565 0xE800)
pub const YOUTUBE_RED: Rgb565 = Rgb565::new(29, 0, 0);

/// Play triangle colour
pub const PLAY_COLOR: Rgb565 = Rgb565::WHITE;

/// Size of the red box
pub const LOGO_SIZE: Size = Size::new(60, 42);

/// Corner radius of the red box
pub const LOGO_CORNER_RADIUS: u32 = 10;

/// Play triangle vertices relative to the anchor: top, bottom, tip
pub const PLAY_TRIANGLE: [Point; 3] = [Point::new(24, 12), Point::new(24, 30), Point::new(40, 21)];

/// Draw the logo with its top-left corner at (x, y)
///
/// Issues exactly two commands: the red rounded box, then the white
/// triangle on top of it. No bounds checks; clipping is left to the canvas.
pub fn draw_youtube_logo<C>(canvas: &mut C, x: i32, y: i32) -> Result<(), C::Error>
where
    C: ShapeCanvas + ?Sized,
{
    let anchor = Point::new(x, y);

    canvas.fill_round_rect(anchor, LOGO_SIZE, LOGO_CORNER_RADIUS, YOUTUBE_RED)?;

    let [top, bottom, tip] = PLAY_TRIANGLE.map(|v| offset(anchor, v));
    canvas.fill_triangle(top, bottom, tip, PLAY_COLOR)
}

/// `anchor + delta`, pinned at the `i32` limits instead of overflowing
fn offset(anchor: Point, delta: Point) -> Point {
    Point::new(
        anchor.x.saturating_add(delta.x),
        anchor.y.saturating_add(delta.y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::pixelcolor::raw::{RawData, RawU16};
    use heapless::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Command {
        RoundRect {
            top_left: Point,
            size: Size,
            radius: u32,
            color: Rgb565,
        },
        Triangle {
            vertices: [Point; 3],
            color: Rgb565,
        },
    }

    // Records commands instead of drawing
    #[derive(Default)]
    struct Recorder {
        commands: Vec<Command, 8>,
    }

    impl ShapeCanvas for Recorder {
        type Error = Infallible;

        fn fill_round_rect(
            &mut self,
            top_left: Point,
            size: Size,
            radius: u32,
            color: Rgb565,
        ) -> Result<(), Infallible> {
            let _ = self.commands.push(Command::RoundRect {
                top_left,
                size,
                radius,
                color,
            });
            Ok(())
        }

        fn fill_triangle(
            &mut self,
            p1: Point,
            p2: Point,
            p3: Point,
            color: Rgb565,
        ) -> Result<(), Infallible> {
            let _ = self.commands.push(Command::Triangle {
                vertices: [p1, p2, p3],
                color,
            });
            Ok(())
        }
    }

    #[test]
    fn test_red_is_e800() {
        assert_eq!(RawU16::from(YOUTUBE_RED).into_inner(), 0xE800);
        assert_eq!(RawU16::from(PLAY_COLOR).into_inner(), 0xFFFF);
    }

    #[test]
    fn test_commands_at_10_10() {
        let mut canvas = Recorder::default();
        draw_youtube_logo(&mut canvas, 10, 10).unwrap();

        assert_eq!(
            canvas.commands.as_slice(),
            &[
                Command::RoundRect {
                    top_left: Point::new(10, 10),
                    size: Size::new(60, 42),
                    radius: 10,
                    color: YOUTUBE_RED,
                },
                Command::Triangle {
                    vertices: [Point::new(34, 22), Point::new(34, 40), Point::new(50, 31)],
                    color: Rgb565::WHITE,
                },
            ]
        );
    }

    #[test]
    fn test_negative_anchor_is_not_clamped() {
        let mut canvas = Recorder::default();
        draw_youtube_logo(&mut canvas, -100, -5).unwrap();

        assert_eq!(
            canvas.commands[1],
            Command::Triangle {
                vertices: [Point::new(-76, 7), Point::new(-76, 25), Point::new(-60, 16)],
                color: Rgb565::WHITE,
            }
        );
    }

    #[test]
    fn test_anchor_near_i32_limits() {
        let mut canvas = Recorder::default();
        draw_youtube_logo(&mut canvas, i32::MAX - 10, i32::MIN).unwrap();

        assert_eq!(
            canvas.commands[1],
            Command::Triangle {
                vertices: [
                    Point::new(i32::MAX, i32::MIN + 12),
                    Point::new(i32::MAX, i32::MIN + 30),
                    Point::new(i32::MAX, i32::MIN + 21),
                ],
                color: Rgb565::WHITE,
            }
        );

        // Entirely off-screen on a real target: nothing drawn, no overflow
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        display.set_allow_overdraw(true);
        draw_youtube_logo(&mut display, i32::MAX - 10, 0).unwrap();
        draw_youtube_logo(&mut display, i32::MIN, i32::MIN).unwrap();
        for y in 0..64 {
            for x in 0..64 {
                assert_eq!(display.get_pixel(Point::new(x, y)), None);
            }
        }
    }

    #[test]
    fn test_same_arguments_same_commands() {
        let mut canvas = Recorder::default();
        draw_youtube_logo(&mut canvas, 3, 7).unwrap();
        draw_youtube_logo(&mut canvas, 3, 7).unwrap();

        assert_eq!(canvas.commands.len(), 4);
        assert_eq!(canvas.commands[0..2], canvas.commands[2..4]);
    }

    #[test]
    fn test_pixels() {
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        // The triangle is drawn on top of the box
        display.set_allow_overdraw(true);

        draw_youtube_logo(&mut display, 0, 0).unwrap();

        // Box body
        assert_eq!(display.get_pixel(Point::new(5, 21)), Some(YOUTUBE_RED));
        assert_eq!(display.get_pixel(Point::new(30, 0)), Some(YOUTUBE_RED));
        // Play triangle
        assert_eq!(display.get_pixel(Point::new(30, 21)), Some(Rgb565::WHITE));
        // Rounded corners stay empty
        assert_eq!(display.get_pixel(Point::new(0, 0)), None);
        assert_eq!(display.get_pixel(Point::new(59, 41)), None);
        // Nothing past the box
        assert_eq!(display.get_pixel(Point::new(60, 21)), None);
        assert_eq!(display.get_pixel(Point::new(30, 42)), None);
    }
}
