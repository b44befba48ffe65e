use crate::core::animation::constant_driver::AnimationSettings;
use crate::core::colour_mapping::settings::ColorSettings;
use crate::core::data::complex::Complex;
use crate::core::data::resolution::Resolution;
use crate::core::fern::generator::FernSettings;
use crate::core::fractals::errors::FractalParamsError;
use crate::core::fractals::params::FractalParameters;
use crate::core::viewport::limits::ViewportLimits;
use crate::core::viewport::tuning::TuningPolicy;
use serde::Deserialize;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub width: u32,
    pub height: u32,
    pub zoom: f64,
    pub centre: Complex,
}

impl Default for ViewConfig {
    fn default() -> Self {
        let resolution = Resolution::default();

        Self {
            width: resolution.width,
            height: resolution.height,
            zoom: 1.0,
            centre: Complex::new(-0.5, 0.0),
        }
    }
}

impl ViewConfig {
    #[must_use]
    pub fn resolution(&self) -> Resolution {
        Resolution::new(self.width, self.height)
    }
}

/// Startup state for an explorer session. Every section falls back to its
/// defaults when missing from a config file.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub fractal: FractalParameters,
    pub view: ViewConfig,
    pub colour: ColorSettings,
    pub animation: AnimationSettings,
    pub tuning: TuningPolicy,
    pub fern: FernSettings,
    pub limits: ViewportLimits,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigValidationError {
    Fractal(FractalParamsError),
    Resolution { width: u32, height: u32 },
    Zoom { zoom: f64 },
    Centre { centre: Complex },
    Saturation { saturation: f64 },
    MinZoom { min_zoom: f64 },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fractal(err) => write!(f, "{}", err),
            Self::Resolution { width, height } => {
                write!(f, "resolution must be at least 2x2: {}x{}", width, height)
            }
            Self::Zoom { zoom } => write!(f, "zoom must be positive and finite: {}", zoom),
            Self::Centre { centre } => write!(f, "centre must be finite: {}", centre),
            Self::Saturation { saturation } => {
                write!(f, "saturation must be within [0, 1]: {}", saturation)
            }
            Self::MinZoom { min_zoom } => {
                write!(f, "minimum zoom must be positive and finite: {}", min_zoom)
            }
        }
    }
}

impl Error for ConfigValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Fractal(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FractalParamsError> for ConfigValidationError {
    fn from(err: FractalParamsError) -> Self {
        Self::Fractal(err)
    }
}

impl ExplorerConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.fractal.validate()?;

        if !self.view.resolution().is_renderable() {
            return Err(ConfigValidationError::Resolution {
                width: self.view.width,
                height: self.view.height,
            });
        }

        if !(self.view.zoom.is_finite() && self.view.zoom > 0.0) {
            return Err(ConfigValidationError::Zoom {
                zoom: self.view.zoom,
            });
        }

        if !self.view.centre.is_finite() {
            return Err(ConfigValidationError::Centre {
                centre: self.view.centre,
            });
        }

        if !(0.0..=1.0).contains(&self.colour.saturation) {
            return Err(ConfigValidationError::Saturation {
                saturation: self.colour.saturation,
            });
        }

        if !(self.limits.min_zoom.is_finite() && self.limits.min_zoom > 0.0) {
            return Err(ConfigValidationError::MinZoom {
                min_zoom: self.limits.min_zoom,
            });
        }

        Ok(())
    }
}
