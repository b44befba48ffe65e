use crate::core::data::complex::Complex;
use crate::core::fractals::errors::FractalParamsError;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::kernel::BailoutMode;
use serde::Deserialize;

pub const DEFAULT_JULIA_CONSTANT: Complex = Complex::new(-0.7, 0.27);
pub const DEFAULT_PHOENIX_CONSTANT: Complex = Complex::new(-0.5, 0.0);
pub const DEFAULT_MAX_ITERATIONS: u32 = 256;
pub const DEFAULT_BAILOUT: f64 = 4.0;
pub const DEFAULT_DERIVATIVE_BAILOUT_THRESHOLD: f64 = 1000.0;

/// Everything the kernel needs besides the pixel coordinate. Read-only for
/// the duration of a frame.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FractalParameters {
    pub fractal_type: FractalKind,
    pub julia_constant: Complex,
    pub phoenix_constant: Complex,
    pub max_iterations: u32,
    /// Compared against `|z|²`.
    pub bailout: f64,
    pub derivative_bailout_threshold: f64,
    pub use_derivative_bailout: bool,
    /// Declare an orbit interior once successive `|z|²` values stop moving.
    /// Approximate: slowly escaping orbits near the boundary can be caught.
    pub stabilization_exit: bool,
}

impl Default for FractalParameters {
    fn default() -> Self {
        Self {
            fractal_type: FractalKind::default(),
            julia_constant: DEFAULT_JULIA_CONSTANT,
            phoenix_constant: DEFAULT_PHOENIX_CONSTANT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            bailout: DEFAULT_BAILOUT,
            derivative_bailout_threshold: DEFAULT_DERIVATIVE_BAILOUT_THRESHOLD,
            use_derivative_bailout: false,
            stabilization_exit: true,
        }
    }
}

impl FractalParameters {
    #[must_use]
    pub fn for_kind(fractal_type: FractalKind) -> Self {
        Self {
            fractal_type,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FractalParamsError> {
        if self.max_iterations == 0 {
            return Err(FractalParamsError::ZeroMaxIterations);
        }

        if !(self.bailout.is_finite() && self.bailout > 0.0) {
            return Err(FractalParamsError::NonPositiveBailout {
                bailout: self.bailout,
            });
        }

        if !(self.derivative_bailout_threshold.is_finite()
            && self.derivative_bailout_threshold > 0.0)
        {
            return Err(FractalParamsError::NonPositiveDerivativeThreshold {
                threshold: self.derivative_bailout_threshold,
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn bailout_mode(&self) -> BailoutMode {
        if self.use_derivative_bailout {
            BailoutMode::Derivative {
                threshold: self.derivative_bailout_threshold,
            }
        } else {
            BailoutMode::Magnitude
        }
    }
}
