use crate::core::data::colour::Rgb;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::point::Point;
use crate::core::fern::generator::FernPoint;

/// Fern-space window mapped onto the frame: `(x_min, x_max, y_min, y_max)`.
/// Wide enough to hold the cloud at full breathing amplitude.
pub const FERN_BOUNDS: (f64, f64, f64, f64) = (-2.5, 3.0, 0.0, 10.5);
pub const FERN_COLOUR: Rgb = Rgb::new(0.15, 0.75, 0.25);
pub const FERN_POINT_ALPHA: f64 = 0.35;

/// Uniform scale from fern space to pixels, centred in the frame, y up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FernFit {
    scale: f64,
    origin_x: f64,
    origin_y: f64,
}

impl FernFit {
    #[must_use]
    pub fn for_frame(width: u32, height: u32) -> Self {
        let (x_min, x_max, y_min, y_max) = FERN_BOUNDS;
        let width = f64::from(width);
        let height = f64::from(height);
        let scale = (width / (x_max - x_min)).min(height / (y_max - y_min));

        let used_width = (x_max - x_min) * scale;
        let used_height = (y_max - y_min) * scale;

        Self {
            scale,
            origin_x: (width - used_width) / 2.0 - x_min * scale,
            origin_y: height - (height - used_height) / 2.0 + y_min * scale,
        }
    }

    #[must_use]
    pub fn project(&self, point: FernPoint) -> Point {
        Point {
            x: (self.origin_x + point.x * self.scale).floor() as i32,
            y: (self.origin_y - point.y * self.scale).floor() as i32,
        }
    }
}

/// Blends every point that lands inside `buffer`.
pub fn plot_fern(points: &[FernPoint], buffer: &mut PixelBuffer) -> Result<usize, PixelBufferError> {
    let rect = buffer.pixel_rect();
    let fit = FernFit::for_frame(rect.width(), rect.height());
    let mut plotted = 0;

    for point in points {
        let projected = fit.project(*point);
        let pixel = Point {
            x: projected.x + rect.top_left().x,
            y: projected.y + rect.top_left().y,
        };

        if rect.contains_point(pixel) {
            buffer.blend_pixel(pixel, FERN_COLOUR, FERN_POINT_ALPHA)?;
            plotted += 1;
        }
    }

    Ok(plotted)
}
