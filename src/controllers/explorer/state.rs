use crate::controllers::explorer::config::ExplorerConfig;
use crate::core::animation::constant_driver::ConstantAnimator;
use crate::core::colour_mapping::settings::ColorSettings;
use crate::core::data::complex::Complex;
use crate::core::data::point::{ScreenDelta, ScreenPoint};
use crate::core::data::resolution::Resolution;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::params::FractalParameters;
use crate::core::frame::uniforms::FrameUniforms;
use crate::core::viewport::state::{ViewportChange, ViewportState};
use crate::core::viewport::tuning::{AdaptiveTuner, Tuning};
use log::debug;

/// The single writer of everything a frame reads.
///
/// Input handlers mutate it between frames; [`ExplorerState::frame_uniforms`]
/// takes the one owned snapshot a frame renders from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerState {
    params: FractalParameters,
    viewport: ViewportState,
    colour: ColorSettings,
    julia: ConstantAnimator,
    phoenix: ConstantAnimator,
    tuner: AdaptiveTuner,
}

impl ExplorerState {
    #[must_use]
    pub fn new(config: &ExplorerConfig) -> Self {
        Self {
            params: config.fractal,
            viewport: ViewportState::new(
                config.view.resolution(),
                config.view.zoom,
                config.view.centre,
                config.limits,
            ),
            colour: config.colour,
            julia: ConstantAnimator::new(config.fractal.julia_constant, config.animation),
            phoenix: ConstantAnimator::new(config.fractal.phoenix_constant, config.animation),
            tuner: AdaptiveTuner::new(config.tuning),
        }
    }

    /// The user's parameters, with the constants as last produced.
    #[must_use]
    pub fn params(&self) -> FractalParameters {
        FractalParameters {
            julia_constant: self.julia.value(),
            phoenix_constant: self.phoenix.value(),
            ..self.params
        }
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    #[must_use]
    pub fn colour(&self) -> ColorSettings {
        self.colour
    }

    pub fn set_colour(&mut self, colour: ColorSettings) {
        self.colour = colour;
    }

    #[must_use]
    pub fn fractal(&self) -> FractalKind {
        self.params.fractal_type
    }

    pub fn select_fractal(&mut self, kind: FractalKind) {
        debug!("selected {}", kind);
        self.params.fractal_type = kind;
    }

    #[must_use]
    pub fn julia_constant(&self) -> Complex {
        self.julia.value()
    }

    pub fn set_julia_constant(&mut self, constant: Complex) {
        self.julia.set_value(constant);
    }

    #[must_use]
    pub fn phoenix_constant(&self) -> Complex {
        self.phoenix.value()
    }

    pub fn set_phoenix_constant(&mut self, constant: Complex) {
        self.phoenix.set_value(constant);
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.julia.is_animating()
    }

    /// Starts or stops both constants together. Stopping keeps the values
    /// last produced.
    pub fn toggle_animation(&mut self) -> bool {
        let animating = !self.is_animating();

        self.julia.set_animating(animating);
        self.phoenix.set_animating(animating);

        animating
    }

    pub fn toggle_derivative_bailout(&mut self) -> bool {
        self.params.use_derivative_bailout = !self.params.use_derivative_bailout;
        self.params.use_derivative_bailout
    }

    pub fn toggle_stabilization_exit(&mut self) -> bool {
        self.params.stabilization_exit = !self.params.stabilization_exit;
        self.params.stabilization_exit
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.params.max_iterations
    }

    pub fn double_iterations(&mut self) -> u32 {
        self.params.max_iterations = self.params.max_iterations.saturating_mul(2);
        self.params.max_iterations
    }

    /// Never drops below one iteration.
    pub fn halve_iterations(&mut self) -> u32 {
        self.params.max_iterations = (self.params.max_iterations / 2).max(1);
        self.params.max_iterations
    }

    pub fn pan_by(&mut self, delta: ScreenDelta) -> ViewportChange {
        self.viewport.pan_by(delta)
    }

    pub fn zoom_at(&mut self, anchor: ScreenPoint, ratio: f64) -> ViewportChange {
        self.viewport.zoom_at(anchor, ratio)
    }

    pub fn zoom_wheel(&mut self, anchor: ScreenPoint, steps: f64) -> ViewportChange {
        self.viewport.zoom_wheel(anchor, steps)
    }

    pub fn zoom_pinch(
        &mut self,
        centre: ScreenPoint,
        previous_distance: f64,
        distance: f64,
    ) -> ViewportChange {
        self.viewport.zoom_pinch(centre, previous_distance, distance)
    }

    pub fn resize(&mut self, resolution: Resolution) -> ViewportChange {
        self.viewport.resize(resolution)
    }

    pub fn set_centre(&mut self, centre: Complex) -> ViewportChange {
        self.viewport.set_centre(centre)
    }

    pub fn reset_view(&mut self) {
        self.viewport.reset();
    }

    /// Snapshot for a frame rendered at `elapsed` seconds: animated
    /// constants advanced, iteration budget and bailout tuned for the
    /// current zoom.
    pub fn frame_uniforms(&mut self, elapsed: f64) -> FrameUniforms {
        let base = Tuning {
            max_iterations: self.params.max_iterations,
            bailout: self.params.bailout,
        };
        let tuning = self.tuner.tune(self.viewport.zoom(), base, elapsed);

        let params = FractalParameters {
            julia_constant: self.julia.advance(elapsed),
            phoenix_constant: self.phoenix.advance(elapsed),
            max_iterations: tuning.max_iterations,
            bailout: tuning.bailout,
            ..self.params
        };

        FrameUniforms::capture(&params, &self.viewport, &self.colour, elapsed)
    }
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self::new(&ExplorerConfig::default())
    }
}
