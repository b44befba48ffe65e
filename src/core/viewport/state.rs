use crate::core::data::complex::Complex;
use crate::core::data::point::{ScreenDelta, ScreenPoint};
use crate::core::data::resolution::Resolution;
use crate::core::viewport::limits::ViewportLimits;
use crate::core::viewport::transform::{screen_to_ndc, FractalCoordinate, KernelViewport};
use log::warn;

/// Result of one gesture applied to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportChange {
    Applied,
    /// Applied with zoom clamped to the lower bound.
    Clamped,
    /// Rejected; the viewport is unchanged.
    Ignored,
}

/// Host-side view: zoom as `f64`, the pan offset (the fractal point at the
/// screen centre) in double-double.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    zoom: f64,
    pan: FractalCoordinate,
    resolution: Resolution,
    limits: ViewportLimits,
    home_zoom: f64,
    home_pan: FractalCoordinate,
}

impl ViewportState {
    #[must_use]
    pub fn new(resolution: Resolution, zoom: f64, centre: Complex, limits: ViewportLimits) -> Self {
        let min_zoom = positive_or(limits.min_zoom, ViewportLimits::default().min_zoom);
        let limits = ViewportLimits { min_zoom, ..limits };
        let zoom = if zoom.is_finite() { zoom.max(min_zoom) } else { 1.0 };
        let pan = FractalCoordinate::from_complex(centre);

        Self {
            zoom,
            pan,
            resolution,
            limits,
            home_zoom: zoom,
            home_pan: pan,
        }
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn pan(&self) -> FractalCoordinate {
        self.pan
    }

    #[must_use]
    pub fn centre(&self) -> Complex {
        self.pan.to_complex()
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn limits(&self) -> ViewportLimits {
        self.limits
    }

    /// Fractal point under `point`, at host precision.
    #[must_use]
    pub fn screen_to_fractal(&self, point: ScreenPoint) -> FractalCoordinate {
        let ndc = screen_to_ndc(point, self.resolution);

        self.pan.offset(ndc.x / self.zoom, ndc.y / self.zoom)
    }

    /// Drag by `delta` screen pixels; content follows the pointer.
    pub fn pan_by(&mut self, delta: ScreenDelta) -> ViewportChange {
        if !(delta.dx.is_finite() && delta.dy.is_finite()) {
            warn!("ignoring non-finite pan delta ({}, {})", delta.dx, delta.dy);
            return ViewportChange::Ignored;
        }

        let scale = 2.0 / f64::from(self.resolution.height.max(1)) * self.limits.pan_sensitivity;

        self.pan = self.pan.offset(
            -delta.dx * scale / self.zoom,
            delta.dy * scale / self.zoom,
        );

        ViewportChange::Applied
    }

    /// Multiplies zoom by `ratio`, keeping the fractal point under `anchor`
    /// fixed on screen.
    pub fn zoom_at(&mut self, anchor: ScreenPoint, ratio: f64) -> ViewportChange {
        if !(ratio.is_finite() && ratio > 0.0) {
            warn!("ignoring zoom ratio {}", ratio);
            return ViewportChange::Ignored;
        }

        let mut new_zoom = self.zoom * ratio;
        if !new_zoom.is_finite() {
            warn!("ignoring zoom ratio {}: zoom would overflow", ratio);
            return ViewportChange::Ignored;
        }

        let mut change = ViewportChange::Applied;
        if new_zoom < self.limits.min_zoom {
            warn!(
                "zoom {} clamped to lower bound {}",
                new_zoom, self.limits.min_zoom
            );
            new_zoom = self.limits.min_zoom;
            change = ViewportChange::Clamped;
        }

        let ndc = screen_to_ndc(anchor, self.resolution);
        let focus = self.screen_to_fractal(anchor);

        self.zoom = new_zoom;
        self.pan = focus.offset(-ndc.x / new_zoom, -ndc.y / new_zoom);

        change
    }

    /// Positive `steps` zoom in by `wheel_zoom_ratio` per step.
    pub fn zoom_wheel(&mut self, anchor: ScreenPoint, steps: f64) -> ViewportChange {
        self.zoom_at(anchor, self.limits.wheel_zoom_ratio.powf(steps))
    }

    /// Zoom by the ratio of successive finger distances about the pinch
    /// centre.
    pub fn zoom_pinch(
        &mut self,
        centre: ScreenPoint,
        previous_distance: f64,
        distance: f64,
    ) -> ViewportChange {
        if !(previous_distance > 0.0 && distance > 0.0) {
            warn!(
                "ignoring pinch with distances {} -> {}",
                previous_distance, distance
            );
            return ViewportChange::Ignored;
        }

        self.zoom_at(centre, distance / previous_distance)
    }

    /// The fractal point at the screen centre is preserved.
    /// Frames smaller than 2x2 cannot be rendered and are ignored.
    pub fn resize(&mut self, resolution: Resolution) -> ViewportChange {
        if !resolution.is_renderable() {
            warn!(
                "ignoring resize to {}x{}",
                resolution.width, resolution.height
            );
            return ViewportChange::Ignored;
        }

        self.resolution = resolution;
        ViewportChange::Applied
    }

    pub fn set_centre(&mut self, centre: Complex) -> ViewportChange {
        if !centre.is_finite() {
            warn!("ignoring non-finite centre {}", centre);
            return ViewportChange::Ignored;
        }

        self.pan = FractalCoordinate::from_complex(centre);
        ViewportChange::Applied
    }

    pub fn set_zoom(&mut self, zoom: f64) -> ViewportChange {
        if !zoom.is_finite() {
            warn!("ignoring non-finite zoom {}", zoom);
            return ViewportChange::Ignored;
        }

        if zoom < self.limits.min_zoom {
            self.zoom = self.limits.min_zoom;
            return ViewportChange::Clamped;
        }

        self.zoom = zoom;
        ViewportChange::Applied
    }

    /// Back to the zoom and centre the state was created with.
    pub fn reset(&mut self) {
        self.zoom = self.home_zoom;
        self.pan = self.home_pan;
    }

    /// Snapshot for the kernel: pan narrowed to split-float pairs.
    #[must_use]
    pub fn narrow(&self) -> KernelViewport {
        KernelViewport {
            resolution: self.resolution,
            zoom: self.zoom,
            pan_x: self.pan.real.narrow(),
            pan_y: self.pan.imag.narrow(),
        }
    }
}

fn positive_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}
