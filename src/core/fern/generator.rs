use crate::core::fern::maps::{breathing_maps, choose_map};
use rand::Rng;
use serde::Deserialize;

/// Iterations discarded before points are recorded, so the cloud does not
/// include the transient path from the origin.
pub const WARMUP_ITERATIONS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct FernSettings {
    pub point_count: usize,
    pub breathing_amplitude: f64,
}

impl Default for FernSettings {
    fn default() -> Self {
        Self {
            point_count: 100_000,
            breathing_amplitude: 0.005,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FernPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FernGenerator {
    settings: FernSettings,
}

impl FernGenerator {
    #[must_use]
    pub fn new(settings: FernSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn settings(&self) -> FernSettings {
        self.settings
    }

    /// A fresh point cloud for `time`. Only the random source carries state
    /// between calls.
    pub fn generate<R: Rng + ?Sized>(&self, time: f64, rng: &mut R) -> Vec<FernPoint> {
        let maps = breathing_maps(self.settings.breathing_amplitude * time.sin());
        let mut points = Vec::with_capacity(self.settings.point_count);
        let (mut x, mut y) = (0.0, 0.0);

        for step in 0..WARMUP_ITERATIONS + self.settings.point_count {
            let map = choose_map(&maps, rng.gen_range(0.0..1.0));
            (x, y) = map.apply(x, y);

            if step >= WARMUP_ITERATIONS {
                points.push(FernPoint { x, y });
            }
        }

        points
    }
}
