use crate::core::colour_mapping::mapper::ColourMapper;
use crate::core::colour_mapping::settings::ColorSettings;
use crate::core::data::complex::Complex;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::kernel::FractalKernel;
use crate::core::fractals::params::FractalParameters;
use crate::core::precision::split_float::SplitFloat;
use crate::core::viewport::limits::clamp_zoom;
use crate::core::viewport::state::ViewportState;
use crate::core::viewport::transform::KernelViewport;

/// Everything one frame reads, captured once at frame start.
///
/// `fractal_type` is the raw family index; indices with no family render
/// as identity iteration. The pan offset is carried as split-float pairs,
/// never as a single native float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    pub resolution: Resolution,
    pub elapsed_time: f64,
    pub fractal_type: u32,
    pub julia_constant: Complex,
    pub phoenix_constant: Complex,
    pub pan_x: SplitFloat,
    pub pan_y: SplitFloat,
    pub hue_phase: f64,
    pub color_speed: f64,
    pub saturation: f64,
    pub zoom: f64,
    pub use_derivative_bailout: bool,
    pub stabilization_exit: bool,
    pub max_iterations: u32,
    pub bailout: f64,
    pub derivative_bailout_threshold: f64,
}

impl FrameUniforms {
    /// `colour.hue_phase` is animated to `elapsed_time` here.
    #[must_use]
    pub fn capture(
        params: &FractalParameters,
        viewport: &ViewportState,
        colour: &ColorSettings,
        elapsed_time: f64,
    ) -> Self {
        let kernel_viewport = viewport.narrow();

        Self {
            resolution: kernel_viewport.resolution,
            elapsed_time,
            fractal_type: params.fractal_type.index(),
            julia_constant: params.julia_constant,
            phoenix_constant: params.phoenix_constant,
            pan_x: kernel_viewport.pan_x,
            pan_y: kernel_viewport.pan_y,
            hue_phase: colour.effective_hue_phase(elapsed_time),
            color_speed: colour.color_speed,
            saturation: colour.saturation,
            zoom: kernel_viewport.zoom,
            use_derivative_bailout: params.use_derivative_bailout,
            stabilization_exit: params.stabilization_exit,
            max_iterations: params.max_iterations.max(1),
            bailout: params.bailout,
            derivative_bailout_threshold: params.derivative_bailout_threshold,
        }
    }

    #[must_use]
    pub fn fractal_kind(&self) -> Option<FractalKind> {
        FractalKind::from_index(self.fractal_type)
    }

    #[must_use]
    pub fn is_point_cloud(&self) -> bool {
        self.fractal_kind().is_some_and(FractalKind::is_point_cloud)
    }

    /// Zoom at or below zero, or NaN, comes back as the positive floor.
    #[must_use]
    pub fn kernel_viewport(&self) -> KernelViewport {
        KernelViewport {
            resolution: self.resolution,
            zoom: clamp_zoom(self.zoom),
            pan_x: self.pan_x,
            pan_y: self.pan_y,
        }
    }

    #[must_use]
    pub fn kernel(&self) -> FractalKernel {
        let params = FractalParameters {
            fractal_type: self.fractal_kind().unwrap_or_default(),
            julia_constant: self.julia_constant,
            phoenix_constant: self.phoenix_constant,
            max_iterations: self.max_iterations,
            bailout: self.bailout,
            derivative_bailout_threshold: self.derivative_bailout_threshold,
            use_derivative_bailout: self.use_derivative_bailout,
            stabilization_exit: self.stabilization_exit,
        };

        FractalKernel::from_index(self.fractal_type, &params)
    }

    #[must_use]
    pub fn colour_mapper(&self) -> ColourMapper {
        ColourMapper::new(
            self.hue_phase,
            self.color_speed,
            self.saturation,
            self.max_iterations,
        )
    }
}
