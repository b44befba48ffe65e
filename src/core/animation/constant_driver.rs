use crate::core::data::complex::Complex;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Angular speed in radians per unit of elapsed time.
    pub speed: f64,
    pub amplitude: f64,
    /// Start with the Julia and Phoenix constants animating.
    pub animate: bool,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            speed: 0.4,
            amplitude: 0.8,
            animate: false,
        }
    }
}

/// Drives one complex constant around a circle while animating. Turning
/// animation off keeps whatever value was last produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantAnimator {
    speed: f64,
    amplitude: f64,
    animating: bool,
    current: Complex,
}

impl ConstantAnimator {
    #[must_use]
    pub fn new(initial: Complex, settings: AnimationSettings) -> Self {
        Self {
            speed: settings.speed,
            amplitude: settings.amplitude,
            animating: settings.animate,
            current: initial,
        }
    }

    /// `(sin(t·speed)·amplitude, cos(t·speed)·amplitude)`.
    #[must_use]
    pub fn orbit_at(&self, elapsed: f64) -> Complex {
        let angle = elapsed * self.speed;

        Complex::new(angle.sin() * self.amplitude, angle.cos() * self.amplitude)
    }

    /// Advances to `elapsed` if animating and returns the constant to use.
    pub fn advance(&mut self, elapsed: f64) -> Complex {
        if self.animating {
            self.current = self.orbit_at(elapsed);
        }

        self.current
    }

    #[must_use]
    pub fn value(&self) -> Complex {
        self.current
    }

    /// Takes effect immediately; an animating driver overwrites it on the
    /// next advance.
    pub fn set_value(&mut self, value: Complex) {
        self.current = value;
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn set_animating(&mut self, animating: bool) {
        self.animating = animating;
    }

    /// Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.animating = !self.animating;
        self.animating
    }
}
