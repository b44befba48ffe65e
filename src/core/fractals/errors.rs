use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FractalParamsError {
    ZeroMaxIterations,
    NonPositiveBailout { bailout: f64 },
    NonPositiveDerivativeThreshold { threshold: f64 },
}

impl fmt::Display for FractalParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::NonPositiveBailout { bailout } => {
                write!(f, "Bailout must be a positive finite number, got {}", bailout)
            }
            Self::NonPositiveDerivativeThreshold { threshold } => {
                write!(
                    f,
                    "Derivative bailout threshold must be a positive finite number, got {}",
                    threshold
                )
            }
        }
    }
}

impl Error for FractalParamsError {}
