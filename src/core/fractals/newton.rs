use crate::core::data::complex::Complex;
use crate::core::fractals::outcome::IterationOutcome;
use std::f64::consts::TAU;

pub const CONVERGENCE_EPSILON: f64 = 0.001;
pub const DENOMINATOR_EPSILON: f64 = 1e-10;
pub const ROOT_COUNT: usize = 3;

/// One Newton step for `p(z) = z³ − 1`. The division is written as
/// `p · conj(p') / (|p'|² + ε)` so it stays finite at `p' = 0`.
#[inline]
#[must_use]
pub fn newton_step(z: Complex) -> Complex {
    let z2 = z * z;
    let p = z2 * z - Complex::ONE;
    let dp = z2.scale(3.0);
    let denominator = dp.magnitude_squared() + DENOMINATOR_EPSILON;

    z - (p * dp.conjugate()).scale(1.0 / denominator)
}

#[must_use]
pub fn iterate_newton(start: Complex, max_iterations: u32) -> IterationOutcome {
    let max_iterations = max_iterations.max(1);
    let mut z = start;

    for iteration in 1..=max_iterations {
        let next = newton_step(z);

        if !next.is_finite() {
            return IterationOutcome::NotConverged { iterations: iteration };
        }

        if (next - z).magnitude() < CONVERGENCE_EPSILON {
            return IterationOutcome::Converged {
                iterations: iteration,
                root: next,
            };
        }

        z = next;
    }

    IterationOutcome::NotConverged {
        iterations: max_iterations,
    }
}

/// Which cube root of unity `root` sits closest to, by argument:
/// 0 for `1`, 1 for `e^(2πi/3)`, 2 for `e^(−2πi/3)`.
#[must_use]
pub fn root_sector(root: Complex) -> usize {
    let sector_width = TAU / ROOT_COUNT as f64;
    let sector = (root.argument() / sector_width).round() as i64;

    sector.rem_euclid(ROOT_COUNT as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube_roots() -> [Complex; 3] {
        let half_sqrt3 = 3.0_f64.sqrt() / 2.0;

        [
            Complex::new(1.0, 0.0),
            Complex::new(-0.5, half_sqrt3),
            Complex::new(-0.5, -half_sqrt3),
        ]
    }

    #[test]
    fn test_starting_on_a_root_converges_in_one_step() {
        for root in cube_roots() {
            match iterate_newton(root, 64) {
                IterationOutcome::Converged { iterations, root: found } => {
                    assert_eq!(iterations, 1);
                    assert!((found - root).magnitude() < CONVERGENCE_EPSILON);
                }
                other => panic!("expected convergence at {}, got {:?}", root, other),
            }
        }
    }

    #[test]
    fn test_nearby_start_converges_to_that_root() {
        let outcome = iterate_newton(Complex::new(1.3, 0.2), 64);

        match outcome {
            IterationOutcome::Converged { iterations, root } => {
                assert!(iterations > 1);
                assert!((root - Complex::ONE).magnitude() < 0.01);
                assert_eq!(root_sector(root), 0);
            }
            other => panic!("expected convergence, got {:?}", other),
        }
    }

    #[test]
    fn test_sectors_identify_each_root() {
        let [one, upper, lower] = cube_roots();

        assert_eq!(root_sector(one), 0);
        assert_eq!(root_sector(upper), 1);
        assert_eq!(root_sector(lower), 2);
    }

    #[test]
    fn test_zero_derivative_does_not_produce_nan() {
        let next = newton_step(Complex::ZERO);

        assert!(next.is_finite());
    }

    #[test]
    fn test_budget_exhaustion_is_not_converged() {
        let outcome = iterate_newton(Complex::new(-10.0, 10.0), 1);

        assert_eq!(outcome, IterationOutcome::NotConverged { iterations: 1 });
    }
}
