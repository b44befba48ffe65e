use serde::Deserialize;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Fractal families in the order of their integer indices (0..=10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    Julia,
    BurningShip,
    BurningShipJulia,
    Mandelbar,
    Newton,
    Phoenix,
    CubicMandelbrot,
    SineJulia,
    ExpJulia,
    BarnsleyFern,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFractalKindError {
    input: String,
}

impl fmt::Display for ParseFractalKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown fractal kind: {}", self.input)
    }
}

impl Error for ParseFractalKindError {}

impl FractalKind {
    pub const ALL: &'static [Self] = &[
        Self::Mandelbrot,
        Self::Julia,
        Self::BurningShip,
        Self::BurningShipJulia,
        Self::Mandelbar,
        Self::Newton,
        Self::Phoenix,
        Self::CubicMandelbrot,
        Self::SineJulia,
        Self::ExpJulia,
        Self::BarnsleyFern,
    ];

    #[must_use]
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    #[must_use]
    pub const fn index(self) -> u32 {
        self as u32
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
            Self::BurningShip => "Burning Ship",
            Self::BurningShipJulia => "Burning Ship Julia",
            Self::Mandelbar => "Mandelbar",
            Self::Newton => "Newton",
            Self::Phoenix => "Phoenix",
            Self::CubicMandelbrot => "Cubic Mandelbrot",
            Self::SineJulia => "Sine Julia",
            Self::ExpJulia => "Exp Julia",
            Self::BarnsleyFern => "Barnsley Fern",
        }
    }

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::Julia => "julia",
            Self::BurningShip => "burning-ship",
            Self::BurningShipJulia => "burning-ship-julia",
            Self::Mandelbar => "mandelbar",
            Self::Newton => "newton",
            Self::Phoenix => "phoenix",
            Self::CubicMandelbrot => "cubic-mandelbrot",
            Self::SineJulia => "sine-julia",
            Self::ExpJulia => "exp-julia",
            Self::BarnsleyFern => "barnsley-fern",
        }
    }

    /// Rendered as a point cloud rather than a per-pixel field.
    #[must_use]
    pub const fn is_point_cloud(self) -> bool {
        matches!(self, Self::BarnsleyFern)
    }
}

impl FromStr for FractalKind {
    type Err = ParseFractalKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");

        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.slug() == normalised)
            .ok_or_else(|| ParseFractalKindError {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for FractalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_follow_declaration_order() {
        for (index, kind) in FractalKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), index as u32);
            assert_eq!(FractalKind::from_index(index as u32), Some(*kind));
        }

        assert_eq!(FractalKind::Newton.index(), 5);
        assert_eq!(FractalKind::BarnsleyFern.index(), 10);
        assert_eq!(FractalKind::from_index(11), None);
    }

    #[test]
    fn test_parses_slugs_and_loose_spellings() {
        assert_eq!("burning-ship".parse::<FractalKind>(), Ok(FractalKind::BurningShip));
        assert_eq!("Sine_Julia".parse::<FractalKind>(), Ok(FractalKind::SineJulia));
        assert_eq!(" cubic mandelbrot ".parse::<FractalKind>(), Ok(FractalKind::CubicMandelbrot));
    }

    #[test]
    fn test_rejects_unknown_names() {
        let err = "lyapunov".parse::<FractalKind>().unwrap_err();

        assert_eq!(err.to_string(), "unknown fractal kind: lyapunov");
    }

    #[test]
    fn test_only_the_fern_is_a_point_cloud() {
        let clouds: Vec<_> = FractalKind::ALL
            .iter()
            .filter(|kind| kind.is_point_cloud())
            .collect();

        assert_eq!(clouds, vec![&FractalKind::BarnsleyFern]);
    }

    #[test]
    fn test_deserialises_from_kebab_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            kind: FractalKind,
        }

        let wrapper: Wrapper = toml::from_str("kind = \"burning-ship-julia\"").unwrap();

        assert_eq!(wrapper.kind, FractalKind::BurningShipJulia);
    }
}
