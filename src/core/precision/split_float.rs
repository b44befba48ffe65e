//! Compensated single-precision pair used at the kernel-input boundary.
//!
//! A `SplitFloat` carries a coordinate as `high + low`, both `f32`, giving
//! roughly 44 significant bits. This is the form pan offsets take in the
//! per-frame uniforms, where a single `f32` would collapse neighbouring
//! pixels onto the same value once the zoom is deep enough.

use crate::core::precision::error_free::single::{quick_two_sum, two_prod, two_sum};
use std::ops::{Add, Mul, Neg, Sub};

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct SplitFloat {
    high: f32,
    low: f32,
}

impl SplitFloat {
    pub const ZERO: Self = Self {
        high: 0.0,
        low: 0.0,
    };

    /// `high` is `value` rounded to single precision (about seven
    /// significant decimal digits), `low` the residual.
    #[must_use]
    pub fn split(value: f64) -> Self {
        let high = value as f32;
        let low = (value - f64::from(high)) as f32;

        Self { high, low }
    }

    /// Builds a pair from arbitrary components, renormalising so that
    /// `low` is no larger than half an ulp of `high`.
    #[must_use]
    pub fn from_parts(high: f32, low: f32) -> Self {
        let (high, low) = two_sum(high, low);

        Self { high, low }
    }

    #[must_use]
    pub fn high(&self) -> f32 {
        self.high
    }

    #[must_use]
    pub fn low(&self) -> f32 {
        self.low
    }

    #[must_use]
    pub fn reconstruct(self) -> f64 {
        f64::from(self.high) + f64::from(self.low)
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.high.is_finite() && self.low.is_finite()
    }

    /// Compensated sum: the rounding error of both the high and the low
    /// additions is folded back before renormalising.
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        let (sum, error) = two_sum(self.high, other.high);
        let (low_sum, low_error) = two_sum(self.low, other.low);

        let (sum, error) = quick_two_sum(sum, error + low_sum);
        let (high, low) = quick_two_sum(sum, error + low_error);

        Self { high, low }
    }

    /// Compensated product: exact `high * high` plus the cross terms.
    #[must_use]
    pub fn multiply(self, other: Self) -> Self {
        let (product, error) = two_prod(self.high, other.high);
        let cross = self.high * other.low + self.low * other.high + self.low * other.low;
        let (high, low) = quick_two_sum(product, error + cross);

        Self { high, low }
    }

    #[must_use]
    pub fn negate(self) -> Self {
        Self {
            high: -self.high,
            low: -self.low,
        }
    }
}

impl From<f64> for SplitFloat {
    fn from(value: f64) -> Self {
        Self::split(value)
    }
}

impl Add for SplitFloat {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        SplitFloat::add(self, other)
    }
}

impl Sub for SplitFloat {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        SplitFloat::add(self, other.negate())
    }
}

impl Mul for SplitFloat {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        self.multiply(other)
    }
}

impl Neg for SplitFloat {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}
