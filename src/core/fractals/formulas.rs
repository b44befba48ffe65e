//! One step of each iteration family.
//!
//! Every formula is a plain function so it can be checked in isolation;
//! [`Formula`] is the closed dispatch the kernel loops over.

use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_kinds::FractalKind;

/// `(x² − y², 2xy)`.
#[inline]
#[must_use]
pub fn square(z: Complex) -> Complex {
    Complex::new(z.real * z.real - z.imag * z.imag, 2.0 * z.real * z.imag)
}

#[inline]
#[must_use]
pub fn mandelbrot(z: Complex, c: Complex) -> Complex {
    square(z) + c
}

/// Absolute values are taken before squaring and the cross term is negated.
#[inline]
#[must_use]
pub fn burning_ship(z: Complex, c: Complex) -> Complex {
    let x = z.real.abs();
    let y = z.imag.abs();

    Complex::new(x * x - y * y, -2.0 * x * y) + c
}

/// Squares the conjugate.
#[inline]
#[must_use]
pub fn mandelbar(z: Complex, c: Complex) -> Complex {
    Complex::new(z.real * z.real - z.imag * z.imag, -2.0 * z.real * z.imag) + c
}

#[inline]
#[must_use]
pub fn cubic_mandelbrot(z: Complex, c: Complex) -> Complex {
    let x2 = z.real * z.real;
    let y2 = z.imag * z.imag;

    Complex::new(
        z.real * (x2 - 3.0 * y2),
        z.imag * (3.0 * x2 - y2),
    ) + c
}

#[inline]
#[must_use]
pub fn phoenix(z: Complex, previous: Complex, c: Complex, p: Complex) -> Complex {
    square(z) + c + p * previous
}

#[inline]
#[must_use]
pub fn sine_julia(z: Complex, k: Complex) -> Complex {
    Complex::new(
        z.real.sin() * z.imag.cosh(),
        z.real.cos() * z.imag.sinh(),
    ) + k
}

#[inline]
#[must_use]
pub fn exp_julia(z: Complex, k: Complex) -> Complex {
    let radius = z.real.exp();

    Complex::new(radius * z.imag.cos(), radius * z.imag.sin()) + k
}

/// Starting orbit state for one pixel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Seed {
    pub z: Complex,
    pub c: Complex,
}

/// Escape-time family dispatch. Newton is listed so that the kernel can
/// route to its own loop; `Identity` absorbs indices with no formula.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Formula {
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
    Identity,
}

impl Formula {
    #[must_use]
    pub fn from_kind(kind: FractalKind) -> Self {
        match kind {
            FractalKind::Mandelbrot => Self::Mandelbrot,
            FractalKind::Julia => Self::Julia,
            FractalKind::BurningShip => Self::BurningShip,
            FractalKind::BurningShipJulia => Self::BurningShipJulia,
            FractalKind::Mandelbar => Self::Mandelbar,
            FractalKind::Newton => Self::Newton,
            FractalKind::Phoenix => Self::Phoenix,
            FractalKind::CubicMandelbrot => Self::CubicMandelbrot,
            FractalKind::SineJulia => Self::SineJulia,
            FractalKind::ExpJulia => Self::ExpJulia,
            FractalKind::BarnsleyFern => Self::Identity,
        }
    }

    /// Total over `u32`: out-of-range indices iterate as identity.
    #[must_use]
    pub fn from_index(index: u32) -> Self {
        FractalKind::from_index(index).map_or(Self::Identity, Self::from_kind)
    }

    /// Mandelbrot-style families start at zero and add the pixel; the rest
    /// start at the pixel and add the Julia constant.
    #[must_use]
    pub fn seed(self, point: Complex, julia_constant: Complex) -> Seed {
        match self {
            Self::Mandelbrot | Self::BurningShip | Self::Mandelbar | Self::CubicMandelbrot => Seed {
                z: Complex::ZERO,
                c: point,
            },
            Self::Julia
            | Self::BurningShipJulia
            | Self::Phoenix
            | Self::SineJulia
            | Self::ExpJulia => Seed {
                z: point,
                c: julia_constant,
            },
            Self::Newton | Self::Identity => Seed {
                z: point,
                c: Complex::ZERO,
            },
        }
    }

    /// One step. `previous` is only read by Phoenix; Newton is not an
    /// escape-time step and is left unchanged here.
    #[inline]
    #[must_use]
    pub fn step(self, z: Complex, previous: Complex, c: Complex, phoenix_constant: Complex) -> Complex {
        match self {
            Self::Mandelbrot | Self::Julia => mandelbrot(z, c),
            Self::BurningShip | Self::BurningShipJulia => burning_ship(z, c),
            Self::Mandelbar => mandelbar(z, c),
            Self::Phoenix => phoenix(z, previous, c, phoenix_constant),
            Self::CubicMandelbrot => cubic_mandelbrot(z, c),
            Self::SineJulia => sine_julia(z, c),
            Self::ExpJulia => exp_julia(z, c),
            Self::Newton | Self::Identity => z,
        }
    }
}
