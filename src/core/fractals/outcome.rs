use crate::core::data::complex::Complex;

/// How an orbit ended.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum IterationOutcome {
    /// Left the bailout region (or went non-finite) after `iterations` steps.
    Escaped {
        iterations: u32,
        magnitude_squared: f64,
    },
    /// Ran for the full iteration budget without escaping.
    Interior { iterations: u32 },
    /// Cut short by the stabilisation heuristic.
    Stabilized { iterations: u32 },
    /// Newton only.
    Converged { iterations: u32, root: Complex },
    /// Newton only.
    NotConverged { iterations: u32 },
}

impl IterationOutcome {
    #[must_use]
    pub fn iterations(&self) -> u32 {
        match *self {
            Self::Escaped { iterations, .. }
            | Self::Interior { iterations }
            | Self::Stabilized { iterations }
            | Self::Converged { iterations, .. }
            | Self::NotConverged { iterations } => iterations,
        }
    }

    /// Rendered black.
    #[must_use]
    pub fn is_interior(&self) -> bool {
        matches!(
            self,
            Self::Interior { .. } | Self::Stabilized { .. } | Self::NotConverged { .. }
        )
    }
}
