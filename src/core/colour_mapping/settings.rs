use serde::Deserialize;
use std::f64::consts::TAU;

/// Hue drift per unit of elapsed time, before scaling by `color_speed`.
pub const HUE_ANIMATION_RATE: f64 = 0.01;

#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ColorSettings {
    /// Radians. Not clamped; the palette is periodic.
    pub hue_phase: f64,
    pub color_speed: f64,
    pub saturation: f64,
    pub animate_hue: bool,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            hue_phase: 0.0,
            color_speed: 0.1,
            saturation: 1.0,
            animate_hue: false,
        }
    }
}

impl ColorSettings {
    /// The hue phase to use for a frame rendered `elapsed` time units after
    /// start.
    #[must_use]
    pub fn effective_hue_phase(&self, elapsed: f64) -> f64 {
        if self.animate_hue {
            (self.hue_phase + elapsed * HUE_ANIMATION_RATE * self.color_speed).rem_euclid(TAU)
        } else {
            self.hue_phase
        }
    }
}
