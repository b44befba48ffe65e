use crate::core::data::colour::{Colour, Rgb};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 4;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    pixel_rect.size() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds { pixel: Point, pixel_rect: PixelRect },
    BoundsMismatch {
        pixel_rect_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                pixel_rect_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "pixel rect size {} does not match buffer size {}",
                    pixel_rect_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, pixel_rect } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of PixelRect bounds top:{}, left:{}, bottom:{}, right:{}",
                    pixel.x,
                    pixel.y,
                    pixel_rect.top_left().y,
                    pixel_rect.top_left().x,
                    pixel_rect.bottom_right().y,
                    pixel_rect.bottom_right().x
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA8 image covering a [`PixelRect`].
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    /// A fully transparent black buffer.
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        Self {
            pixel_rect,
            buffer: vec![0; pixel_rect_to_buffer_size(pixel_rect)],
        }
    }

    #[must_use]
    pub fn filled(pixel_rect: PixelRect, colour: Colour) -> Self {
        let mut buffer = Self::new(pixel_rect);

        for pixel in buffer.buffer.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&[colour.r, colour.g, colour.b, colour.a]);
        }

        buffer
    }

    pub fn from_data(
        pixel_rect: PixelRect,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let buffer_size = pixel_rect_to_buffer_size(pixel_rect);

        if buffer_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size: buffer_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { pixel_rect, buffer })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let offset = self.byte_offset(pixel)?;
        let bytes = &self.buffer[offset..offset + BYTES_PER_PIXEL];

        Ok(Colour {
            r: bytes[0],
            g: bytes[1],
            b: bytes[2],
            a: bytes[3],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let offset = self.byte_offset(pixel)?;

        self.buffer[offset..offset + BYTES_PER_PIXEL]
            .copy_from_slice(&[colour.r, colour.g, colour.b, colour.a]);

        Ok(())
    }

    /// Composites `colour` with coverage `alpha` over the stored pixel
    /// (source-over, straight alpha).
    pub fn blend_pixel(
        &mut self,
        pixel: Point,
        colour: Rgb,
        alpha: f64,
    ) -> Result<(), PixelBufferError> {
        let existing = self.pixel(pixel)?;
        let alpha = alpha.clamp(0.0, 1.0);
        let existing_alpha = f64::from(existing.a) / 255.0;
        let existing_rgb = Rgb::new(
            f64::from(existing.r) / 255.0,
            f64::from(existing.g) / 255.0,
            f64::from(existing.b) / 255.0,
        );

        let blended_alpha = alpha + existing_alpha * (1.0 - alpha);
        if blended_alpha <= 0.0 {
            return Ok(());
        }

        let existing_weight = existing_alpha * (1.0 - alpha);
        let blended = Rgb::new(
            (colour.r * alpha + existing_rgb.r * existing_weight) / blended_alpha,
            (colour.g * alpha + existing_rgb.g * existing_weight) / blended_alpha,
            (colour.b * alpha + existing_rgb.b * existing_weight) / blended_alpha,
        );

        self.set_pixel(pixel, blended.to_colour_with_alpha(blended_alpha))
    }

    /// RGB bytes with the alpha channel dropped.
    #[must_use]
    pub fn rgb_bytes(&self) -> Vec<u8> {
        self.buffer
            .chunks_exact(BYTES_PER_PIXEL)
            .flat_map(|pixel| [pixel[0], pixel[1], pixel[2]])
            .collect()
    }

    fn byte_offset(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        self.pixel_rect
            .index_of(pixel)
            .map(|index| index * BYTES_PER_PIXEL)
            .ok_or(PixelBufferError::PixelOutsideBounds {
                pixel,
                pixel_rect: self.pixel_rect,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_pixel_rect(width: i32, height: i32) -> PixelRect {
        PixelRect::new(
            Point { x: 0, y: 0 },
            Point {
                x: width - 1,
                y: height - 1,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_new_creates_zeroed_rgba_buffer() {
        let buffer = PixelBuffer::new(create_pixel_rect(10, 10));

        assert_eq!(buffer.buffer_size(), 400); // 10 * 10 * 4
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_data_rejects_wrong_size() {
        let result = PixelBuffer::from_data(create_pixel_rect(2, 2), vec![255, 0, 0]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                pixel_rect_size: 16,
                buffer_size: 3
            }
        );
    }

    #[test]
    fn test_set_pixel_writes_rgba_at_row_major_offset() {
        let mut buffer = PixelBuffer::new(create_pixel_rect(3, 3));
        let red = Colour::opaque(255, 0, 0);

        buffer.set_pixel(Point { x: 1, y: 1 }, red).unwrap();

        assert_eq!(&buffer.buffer()[16..20], &[255, 0, 0, 255]);
        assert_eq!(buffer.pixel(Point { x: 1, y: 1 }).unwrap(), red);
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let pixel_rect = create_pixel_rect(3, 3);
        let mut buffer = PixelBuffer::new(pixel_rect);
        let result = buffer.set_pixel(Point { x: -1, y: 5 }, Colour::BLACK);

        assert_eq!(
            result,
            Err(PixelBufferError::PixelOutsideBounds {
                pixel: Point { x: -1, y: 5 },
                pixel_rect
            })
        );
    }

    #[test]
    fn test_filled_sets_every_pixel() {
        let buffer = PixelBuffer::filled(create_pixel_rect(2, 2), Colour::opaque(1, 2, 3));

        assert_eq!(buffer.buffer(), &[1, 2, 3, 255].repeat(4));
    }

    #[test]
    fn test_blend_pixel_accumulates_alpha() {
        let mut buffer = PixelBuffer::new(create_pixel_rect(2, 2));
        let point = Point { x: 0, y: 0 };
        let white = Rgb::new(1.0, 1.0, 1.0);

        buffer.blend_pixel(point, white, 0.5).unwrap();
        let once = buffer.pixel(point).unwrap();
        buffer.blend_pixel(point, white, 0.5).unwrap();
        let twice = buffer.pixel(point).unwrap();

        assert_eq!(once, Colour { r: 255, g: 255, b: 255, a: 128 });
        assert_eq!((twice.r, twice.g, twice.b), (255, 255, 255));
        assert!((191..=192).contains(&twice.a));
    }

    #[test]
    fn test_blend_pixel_over_transparent_keeps_straight_colour() {
        let mut buffer = PixelBuffer::new(create_pixel_rect(2, 2));
        let point = Point { x: 1, y: 1 };

        buffer.blend_pixel(point, Rgb::new(0.2, 0.6, 1.0), 0.35).unwrap();

        assert_eq!(buffer.pixel(point).unwrap(), Colour { r: 51, g: 153, b: 255, a: 89 });
    }

    #[test]
    fn test_blend_pixel_over_opaque_mixes_by_coverage() {
        let mut buffer = PixelBuffer::filled(create_pixel_rect(2, 2), Colour::opaque(0, 0, 0));
        let point = Point { x: 0, y: 1 };

        buffer.blend_pixel(point, Rgb::new(1.0, 0.5, 0.0), 0.5).unwrap();

        assert_eq!(buffer.pixel(point).unwrap(), Colour { r: 128, g: 64, b: 0, a: 255 });
    }

    #[test]
    fn test_blend_pixel_with_zero_coverage_leaves_pixel_untouched() {
        let mut buffer = PixelBuffer::new(create_pixel_rect(2, 2));
        let point = Point { x: 0, y: 0 };

        buffer.blend_pixel(point, Rgb::new(1.0, 1.0, 1.0), 0.0).unwrap();

        assert_eq!(buffer.pixel(point).unwrap(), Colour { r: 0, g: 0, b: 0, a: 0 });
    }

    #[test]
    fn test_rgb_bytes_drops_alpha() {
        let buffer = PixelBuffer::filled(create_pixel_rect(2, 2), Colour::opaque(9, 8, 7));

        assert_eq!(buffer.rgb_bytes(), [9, 8, 7].repeat(4));
    }
}
