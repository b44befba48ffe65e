use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::fractals::kernel::FractalKernel;
use crate::core::fractals::outcome::IterationOutcome;
use crate::core::frame::uniforms::FrameUniforms;
use crate::core::viewport::transform::KernelViewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelOutsideFrameError {
    pub pixel: Point,
    pub pixel_rect: PixelRect,
}

impl fmt::Display for PixelOutsideFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pixel (x: {}, y: {}) is outside the frame top-left: (x: {}, y: {}) bottom-right: (x: {}, y: {})",
            self.pixel.x,
            self.pixel.y,
            self.pixel_rect.top_left().x,
            self.pixel_rect.top_left().y,
            self.pixel_rect.bottom_right().x,
            self.pixel_rect.bottom_right().y
        )
    }
}

impl Error for PixelOutsideFrameError {}

/// Maps a pixel through the frame's viewport and runs the kernel on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalPixelAlgorithm {
    pixel_rect: PixelRect,
    viewport: KernelViewport,
    kernel: FractalKernel,
}

impl FractalPixelAlgorithm {
    #[must_use]
    pub fn new(pixel_rect: PixelRect, uniforms: &FrameUniforms) -> Self {
        Self {
            pixel_rect,
            viewport: uniforms.kernel_viewport(),
            kernel: uniforms.kernel(),
        }
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }
}

impl FractalAlgorithm for FractalPixelAlgorithm {
    type Success = IterationOutcome;
    type Failure = PixelOutsideFrameError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        if !self.pixel_rect.contains_point(pixel) {
            return Err(PixelOutsideFrameError {
                pixel,
                pixel_rect: self.pixel_rect,
            });
        }

        let relative = Point {
            x: pixel.x - self.pixel_rect.top_left().x,
            y: pixel.y - self.pixel_rect.top_left().y,
        };

        Ok(self
            .kernel
            .evaluate(self.viewport.pixel_to_fractal(relative)))
    }
}
