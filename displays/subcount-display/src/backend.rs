//! Drawing capability
//!
//! The logo only needs two filled primitives, so routines take this narrow
//! trait instead of a full `DrawTarget`. Every Rgb565 draw target gets it for
//! free through `embedded-graphics`.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle, Triangle};

/// Surface that can fill rounded rectangles and triangles
pub trait ShapeCanvas {
    /// Error returned by the underlying surface
    type Error;

    /// Fill a rectangle with equal circular corners
    ///
    /// - `top_left`: Top-left corner of the bounding box
    /// - `size`: Width and height in pixels
    /// - `radius`: Corner radius in pixels
    fn fill_round_rect(
        &mut self,
        top_left: Point,
        size: Size,
        radius: u32,
        color: Rgb565,
    ) -> Result<(), Self::Error>;

    /// Fill the triangle spanned by three vertices
    fn fill_triangle(
        &mut self,
        p1: Point,
        p2: Point,
        p3: Point,
        color: Rgb565,
    ) -> Result<(), Self::Error>;
}

impl<D> ShapeCanvas for D
where
    D: DrawTarget<Color = Rgb565>,
{
    type Error = D::Error;

    fn fill_round_rect(
        &mut self,
        top_left: Point,
        size: Size,
        radius: u32,
        color: Rgb565,
    ) -> Result<(), Self::Error> {
        let (x, y) = (i64::from(top_left.x), i64::from(top_left.y));
        let extent = [
            (x, y),
            (x + i64::from(size.width), y + i64::from(size.height)),
        ];
        if !overlaps(self.bounding_box(), extent) {
            return Ok(());
        }

        RoundedRectangle::with_equal_corners(
            Rectangle::new(top_left, size),
            Size::new(radius, radius),
        )
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(self)
    }

    fn fill_triangle(
        &mut self,
        p1: Point,
        p2: Point,
        p3: Point,
        color: Rgb565,
    ) -> Result<(), Self::Error> {
        let corners = [p1, p2, p3].map(|p| (i64::from(p.x), i64::from(p.y)));
        if !overlaps(self.bounding_box(), corners) {
            return Ok(());
        }

        Triangle::new(p1, p2, p3)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(self)
    }
}

/// Whether the box spanned by `points` touches `bounds`
///
/// Shapes that miss the target entirely are skipped, so anchors near the
/// `i32` limits never reach the rasterizers' own coordinate arithmetic.
fn overlaps<const N: usize>(bounds: Rectangle, points: [(i64, i64); N]) -> bool {
    let Some(bottom_right) = bounds.bottom_right() else {
        return false;
    };
    let min_x = points.iter().map(|p| p.0).min().unwrap_or(i64::MAX);
    let max_x = points.iter().map(|p| p.0).max().unwrap_or(i64::MIN);
    let min_y = points.iter().map(|p| p.1).min().unwrap_or(i64::MAX);
    let max_y = points.iter().map(|p| p.1).max().unwrap_or(i64::MIN);

    max_x >= i64::from(bounds.top_left.x)
        && min_x <= i64::from(bottom_right.x)
        && max_y >= i64::from(bounds.top_left.y)
        && min_y <= i64::from(bottom_right.y)
}
