//! Error-free transformations: each returns a rounded result together with
//! the exact rounding error, so `result + error` equals the true value.
//!
//! Products use Dekker splitting rather than fused multiply-add, matching
//! what a shading language without FMA guarantees.

macro_rules! error_free_ops {
    ($module:ident, $float:ty, $splitter:expr) => {
        pub mod $module {
            /// `2^ceil(mantissa_bits / 2) + 1`.
            pub const SPLITTER: $float = $splitter;

            /// Knuth's two-sum; no precondition on magnitudes.
            #[inline]
            #[must_use]
            pub fn two_sum(a: $float, b: $float) -> ($float, $float) {
                let sum = a + b;
                let b_virtual = sum - a;
                let a_virtual = sum - b_virtual;
                let error = (a - a_virtual) + (b - b_virtual);

                (sum, error)
            }

            /// Requires `|a| >= |b|` (or `a == 0`).
            #[inline]
            #[must_use]
            pub fn quick_two_sum(a: $float, b: $float) -> ($float, $float) {
                let sum = a + b;
                let error = b - (sum - a);

                (sum, error)
            }

            #[inline]
            #[must_use]
            pub fn split(a: $float) -> ($float, $float) {
                let t = SPLITTER * a;
                let high = t - (t - a);

                (high, a - high)
            }

            #[inline]
            #[must_use]
            pub fn two_prod(a: $float, b: $float) -> ($float, $float) {
                let product = a * b;
                let (a_high, a_low) = split(a);
                let (b_high, b_low) = split(b);
                let error =
                    ((a_high * b_high - product) + a_high * b_low + a_low * b_high) + a_low * b_low;

                (product, error)
            }
        }
    };
}

error_free_ops!(single, f32, 4097.0);
error_free_ops!(double, f64, 134_217_729.0);
