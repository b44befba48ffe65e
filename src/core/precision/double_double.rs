use crate::core::precision::error_free::double::{quick_two_sum, two_prod, two_sum};
use crate::core::precision::split_float::SplitFloat;
use std::ops::{Add, Mul, Neg, Sub};

/// Unevaluated sum of two `f64`s, used for host-side pan bookkeeping so
/// that accumulated pan deltas survive many zoom-about-cursor steps.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct DoubleDouble {
    high: f64,
    low: f64,
}

impl DoubleDouble {
    pub const ZERO: Self = Self {
        high: 0.0,
        low: 0.0,
    };

    #[must_use]
    pub const fn from_f64(value: f64) -> Self {
        Self {
            high: value,
            low: 0.0,
        }
    }

    #[must_use]
    pub fn high(&self) -> f64 {
        self.high
    }

    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }

    #[must_use]
    pub fn to_f64(self) -> f64 {
        self.high + self.low
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.high.is_finite() && self.low.is_finite()
    }

    /// Narrows to the compensated single-precision pair consumed by the
    /// kernel. The high part of the result takes the leading bits and the
    /// low part takes whatever remains of both components.
    #[must_use]
    pub fn narrow(self) -> SplitFloat {
        let high = self.high as f32;
        let residual = (self.high - f64::from(high)) + self.low;

        SplitFloat::from_parts(high, residual as f32)
    }

    #[must_use]
    pub fn add(self, other: Self) -> Self {
        let (sum, error) = two_sum(self.high, other.high);
        let (low_sum, low_error) = two_sum(self.low, other.low);

        let (sum, error) = quick_two_sum(sum, error + low_sum);
        let (high, low) = quick_two_sum(sum, error + low_error);

        Self { high, low }
    }

    #[must_use]
    pub fn multiply(self, other: Self) -> Self {
        let (product, error) = two_prod(self.high, other.high);
        let cross = self.high * other.low + self.low * other.high;
        let (high, low) = quick_two_sum(product, error + cross);

        Self { high, low }
    }

    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        self.multiply(Self::from_f64(factor))
    }

    #[must_use]
    pub fn negate(self) -> Self {
        Self {
            high: -self.high,
            low: -self.low,
        }
    }
}

impl From<f64> for DoubleDouble {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl Add for DoubleDouble {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        DoubleDouble::add(self, other)
    }
}

impl Sub for DoubleDouble {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        DoubleDouble::add(self, other.negate())
    }
}

impl Mul for DoubleDouble {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        self.multiply(other)
    }
}

impl Neg for DoubleDouble {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}
