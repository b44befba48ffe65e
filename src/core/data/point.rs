/// Integer pixel position inside a [`PixelRect`].
///
/// [`PixelRect`]: crate::core::data::pixel_rect::PixelRect
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Sub-pixel position on screen, in pixels, y pointing down.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Centre of the pixel at `point`.
    #[must_use]
    pub fn pixel_centre(point: Point) -> Self {
        Self {
            x: f64::from(point.x) + 0.5,
            y: f64::from(point.y) + 0.5,
        }
    }

    #[must_use]
    pub fn offset(self, delta: ScreenDelta) -> Self {
        Self {
            x: self.x + delta.dx,
            y: self.y + delta.dy,
        }
    }
}

/// Pointer movement between two input events, in pixels.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ScreenDelta {
    pub dx: f64,
    pub dy: f64,
}

impl ScreenDelta {
    #[must_use]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}
