use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::palette::{desaturate, interpolated_palette};
use crate::core::data::colour::{Colour, Rgb};
use crate::core::fractals::newton::root_sector;
use crate::core::fractals::outcome::IterationOutcome;
use std::convert::Infallible;

/// Base tints for the three roots of `z³ − 1`, indexed by sector.
pub const NEWTON_ROOT_TINTS: [Rgb; 3] = [
    Rgb::new(1.0, 0.3, 0.3),
    Rgb::new(0.3, 1.0, 0.3),
    Rgb::new(0.3, 0.3, 1.0),
];

/// Continuous iteration count `n + 1 − log₂(log₂|z|)`. Falls back to the
/// integer count where the renormalisation is undefined.
#[must_use]
pub fn smooth_iteration_count(iterations: u32, magnitude_squared: f64) -> f64 {
    let n = f64::from(iterations);

    if !magnitude_squared.is_finite() || magnitude_squared <= 1.0 {
        return n;
    }

    let log_modulus = magnitude_squared.ln() / 2.0;
    let nu = (log_modulus / std::f64::consts::LN_2).log2();

    n + 1.0 - nu
}

/// Turns kernel outcomes into colours for one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColourMapper {
    hue_phase: f64,
    color_speed: f64,
    saturation: f64,
    max_iterations: u32,
}

impl ColourMapper {
    /// `hue_phase` is the already-animated phase for this frame.
    #[must_use]
    pub fn new(hue_phase: f64, color_speed: f64, saturation: f64, max_iterations: u32) -> Self {
        Self {
            hue_phase,
            color_speed,
            saturation,
            max_iterations: max_iterations.max(1),
        }
    }

    #[must_use]
    pub fn colour_index(&self, smooth_count: f64) -> f64 {
        smooth_count * self.color_speed + self.hue_phase
    }

    /// RGB in `[0, 1]³`.
    #[must_use]
    pub fn rgb(&self, outcome: IterationOutcome) -> Rgb {
        match outcome {
            IterationOutcome::Interior { .. }
            | IterationOutcome::Stabilized { .. }
            | IterationOutcome::NotConverged { .. } => Rgb::BLACK,
            IterationOutcome::Converged { iterations, root } => {
                let brightness = 1.0 - f64::from(iterations) / f64::from(self.max_iterations);

                NEWTON_ROOT_TINTS[root_sector(root)]
                    .scale(brightness)
                    .clamped()
            }
            IterationOutcome::Escaped {
                iterations,
                magnitude_squared,
            } => {
                let index = self.colour_index(smooth_iteration_count(iterations, magnitude_squared));

                desaturate(interpolated_palette(index), self.saturation).clamped()
            }
        }
    }
}

impl ColourMap for ColourMapper {
    type T = IterationOutcome;
    type Failure = Infallible;

    fn map(&self, value: IterationOutcome) -> Result<Colour, Infallible> {
        Ok(self.rgb(value).to_colour())
    }
}
