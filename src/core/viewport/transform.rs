//! Pixel to fractal-space mapping.
//!
//! Screen coordinates run right and down in pixels. Normalised device
//! coordinates (NDC) span `[-1, 1]` vertically with the imaginary axis
//! pointing up; the horizontal span is stretched by the aspect ratio so a
//! unit in NDC covers the same number of pixels on both axes.

use crate::core::data::complex::Complex;
use crate::core::data::point::{Point, ScreenPoint};
use crate::core::data::resolution::Resolution;
use crate::core::precision::double_double::DoubleDouble;
use crate::core::precision::split_float::SplitFloat;
use crate::core::viewport::limits::clamp_zoom;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NdcPoint {
    pub x: f64,
    pub y: f64,
}

#[must_use]
pub fn screen_to_ndc(point: ScreenPoint, resolution: Resolution) -> NdcPoint {
    let width = f64::from(resolution.width.max(1));
    let height = f64::from(resolution.height.max(1));

    NdcPoint {
        x: (2.0 * point.x / width - 1.0) * (width / height),
        y: 1.0 - 2.0 * point.y / height,
    }
}

/// A fractal-space position held in double-double precision on the host.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct FractalCoordinate {
    pub real: DoubleDouble,
    pub imag: DoubleDouble,
}

impl FractalCoordinate {
    pub const ORIGIN: Self = Self {
        real: DoubleDouble::ZERO,
        imag: DoubleDouble::ZERO,
    };

    #[must_use]
    pub fn from_complex(value: Complex) -> Self {
        Self {
            real: DoubleDouble::from_f64(value.real),
            imag: DoubleDouble::from_f64(value.imag),
        }
    }

    #[must_use]
    pub fn to_complex(self) -> Complex {
        Complex::new(self.real.to_f64(), self.imag.to_f64())
    }

    /// Shifts by an NDC offset already divided by zoom.
    #[must_use]
    pub fn offset(self, real: f64, imag: f64) -> Self {
        Self {
            real: self.real + DoubleDouble::from_f64(real),
            imag: self.imag + DoubleDouble::from_f64(imag),
        }
    }
}

/// The per-frame view as the kernel sees it: zoom plus a pan offset split
/// into single-precision high/low pairs. Zoom goes through [`clamp_zoom`]
/// before every use.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct KernelViewport {
    pub resolution: Resolution,
    pub zoom: f64,
    pub pan_x: SplitFloat,
    pub pan_y: SplitFloat,
}

impl KernelViewport {
    #[must_use]
    pub fn screen_to_fractal(&self, point: ScreenPoint) -> Complex {
        let ndc = screen_to_ndc(point, self.resolution);
        let zoom = clamp_zoom(self.zoom);
        let real = self.pan_x + SplitFloat::split(ndc.x / zoom);
        let imag = self.pan_y + SplitFloat::split(ndc.y / zoom);

        Complex::new(real.reconstruct(), imag.reconstruct())
    }

    /// Samples at the pixel centre.
    #[must_use]
    pub fn pixel_to_fractal(&self, pixel: Point) -> Complex {
        self.screen_to_fractal(ScreenPoint::pixel_centre(pixel))
    }

    /// Fractal-space distance between horizontally adjacent pixels.
    #[must_use]
    pub fn pixel_spacing(&self) -> f64 {
        2.0 / (f64::from(self.resolution.height.max(1)) * clamp_zoom(self.zoom))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::viewport::limits::ViewportLimits;

    #[test]
    fn test_centre_of_screen_is_ndc_origin() {
        let resolution = Resolution::new(800, 600);
        let ndc = screen_to_ndc(ScreenPoint::new(400.0, 300.0), resolution);

        assert_eq!(ndc, NdcPoint { x: 0.0, y: 0.0 });
    }

    #[test]
    fn test_corners_are_aspect_corrected_and_y_up() {
        let resolution = Resolution::new(800, 400);

        let top_left = screen_to_ndc(ScreenPoint::new(0.0, 0.0), resolution);
        let bottom_right = screen_to_ndc(ScreenPoint::new(800.0, 400.0), resolution);

        assert_eq!(top_left, NdcPoint { x: -2.0, y: 1.0 });
        assert_eq!(bottom_right, NdcPoint { x: 2.0, y: -1.0 });
    }

    #[test]
    fn test_kernel_viewport_applies_zoom_and_pan() {
        let viewport = KernelViewport {
            resolution: Resolution::new(100, 100),
            zoom: 2.0,
            pan_x: SplitFloat::split(-0.5),
            pan_y: SplitFloat::split(0.25),
        };

        let top_left = viewport.screen_to_fractal(ScreenPoint::new(0.0, 0.0));

        assert_eq!(top_left, Complex::new(-1.0, 0.75));
    }

    #[test]
    fn test_adjacent_pixels_stay_distinct_at_deep_zoom() {
        let viewport = KernelViewport {
            resolution: Resolution::new(64, 64),
            zoom: 1e11,
            pan_x: DoubleDouble::from_f64(-0.743_643_887_037_151).narrow(),
            pan_y: DoubleDouble::from_f64(0.131_825_904_205_33).narrow(),
        };

        let a = viewport.pixel_to_fractal(Point { x: 10, y: 10 });
        let b = viewport.pixel_to_fractal(Point { x: 11, y: 10 });
        let spacing = viewport.pixel_spacing();

        assert!(((b.real - a.real) - spacing).abs() < spacing * 0.05);
        assert_eq!(a.imag, b.imag);
    }

    #[test]
    fn test_degenerate_zoom_maps_to_finite_points() {
        let floor = KernelViewport {
            resolution: Resolution::new(8, 8),
            zoom: ViewportLimits::default().min_zoom,
            pan_x: SplitFloat::split(-0.5),
            pan_y: SplitFloat::split(0.0),
        };

        for zoom in [0.0, -1.0, f64::NAN] {
            let viewport = KernelViewport { zoom, ..floor };
            let point = viewport.screen_to_fractal(ScreenPoint::new(1.0, 1.0));

            assert!(point.is_finite(), "zoom {} gave {}", zoom, point);
            assert_eq!(point, floor.screen_to_fractal(ScreenPoint::new(1.0, 1.0)));
            assert!(viewport.pixel_spacing().is_finite());
        }
    }

    #[test]
    fn test_fractal_coordinate_offsets_in_double_double() {
        let base = FractalCoordinate::from_complex(Complex::new(1.0, -1.0));
        let moved = base.offset(1e-20, 0.0);

        assert_eq!(moved.real.high(), 1.0);
        assert_eq!(moved.real.low(), 1e-20);
        assert_eq!(moved.imag.to_f64(), -1.0);
    }
}
