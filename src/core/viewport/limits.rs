use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewportLimits {
    /// Zoom never drops below this.
    pub min_zoom: f64,
    /// Multiplier on drag distance; 1.0 keeps content under the cursor.
    pub pan_sensitivity: f64,
    /// Zoom ratio for one wheel step.
    pub wheel_zoom_ratio: f64,
}

impl Default for ViewportLimits {
    fn default() -> Self {
        Self {
            min_zoom: 1e-9,
            pan_sensitivity: 1.0,
            wheel_zoom_ratio: 1.1,
        }
    }
}

/// Raises NaN, non-positive and too-small zoom values to the default floor.
#[must_use]
pub fn clamp_zoom(zoom: f64) -> f64 {
    let min_zoom = ViewportLimits::default().min_zoom;

    if zoom >= min_zoom { zoom } else { min_zoom }
}
