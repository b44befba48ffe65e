use crate::core::data::complex::Complex;
use crate::core::fractals::formulas::{Formula, Seed};
use crate::core::fractals::newton::iterate_newton;
use crate::core::fractals::outcome::IterationOutcome;
use crate::core::fractals::params::{
    DEFAULT_BAILOUT, DEFAULT_DERIVATIVE_BAILOUT_THRESHOLD, FractalParameters,
};

/// Successive `|z|²` values closer than this end the orbit as stabilised.
pub const STABILIZATION_EPSILON: f64 = 1e-6;

/// Which escape test ends an orbit. The two are never combined.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum BailoutMode {
    /// `|z|² > bailout`.
    Magnitude,
    /// `|Σ dc|² ≥ threshold`, with `dc` tracked by the chain rule.
    Derivative { threshold: f64 },
}

/// Per-pixel evaluator for one frame's parameters.
///
/// The kernel is total: every input produces an outcome, and no orbit runs
/// for more than `max_iterations` steps.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FractalKernel {
    formula: Formula,
    julia_constant: Complex,
    phoenix_constant: Complex,
    max_iterations: u32,
    bailout: f64,
    bailout_mode: BailoutMode,
    stabilization_exit: bool,
}

impl FractalKernel {
    #[must_use]
    pub fn new(params: &FractalParameters) -> Self {
        Self::with_formula(Formula::from_kind(params.fractal_type), params)
    }

    /// Dispatch by raw family index; indices with no family iterate as
    /// identity.
    #[must_use]
    pub fn from_index(index: u32, params: &FractalParameters) -> Self {
        Self::with_formula(Formula::from_index(index), params)
    }

    /// Zero iterations run as one; a bailout or threshold that is not a
    /// positive finite number falls back to its default.
    fn with_formula(formula: Formula, params: &FractalParameters) -> Self {
        let bailout_mode = match params.bailout_mode() {
            BailoutMode::Magnitude => BailoutMode::Magnitude,
            BailoutMode::Derivative { threshold } => BailoutMode::Derivative {
                threshold: positive_finite_or(threshold, DEFAULT_DERIVATIVE_BAILOUT_THRESHOLD),
            },
        };

        Self {
            formula,
            julia_constant: params.julia_constant,
            phoenix_constant: params.phoenix_constant,
            max_iterations: params.max_iterations.max(1),
            bailout: positive_finite_or(params.bailout, DEFAULT_BAILOUT),
            bailout_mode,
            stabilization_exit: params.stabilization_exit,
        }
    }

    #[must_use]
    pub fn formula(&self) -> Formula {
        self.formula
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn evaluate(&self, point: Complex) -> IterationOutcome {
        match self.formula {
            Formula::Newton => iterate_newton(point, self.max_iterations),
            formula => self.escape_time(formula, point),
        }
    }

    fn escape_time(&self, formula: Formula, point: Complex) -> IterationOutcome {
        let Seed { mut z, c } = formula.seed(point, self.julia_constant);
        let mut previous = Complex::ZERO;
        let mut dc = Complex::ZERO;
        let mut dc_sum = Complex::ZERO;
        let mut last_magnitude = z.magnitude_squared();

        for iteration in 1..=self.max_iterations {
            if let BailoutMode::Derivative { .. } = self.bailout_mode {
                dc = (z * dc).scale(2.0) + Complex::ONE;
                dc_sum = dc_sum + dc;
            }

            let next = formula.step(z, previous, c, self.phoenix_constant);
            previous = z;
            z = next;

            let magnitude_squared = z.magnitude_squared();

            let escaped = !magnitude_squared.is_finite()
                || match self.bailout_mode {
                    BailoutMode::Magnitude => magnitude_squared > self.bailout,
                    BailoutMode::Derivative { threshold } => {
                        dc_sum.magnitude_squared() >= threshold
                    }
                };

            if escaped {
                return IterationOutcome::Escaped {
                    iterations: iteration,
                    magnitude_squared,
                };
            }

            if self.stabilization_exit
                && (magnitude_squared - last_magnitude).abs() < STABILIZATION_EPSILON
            {
                return IterationOutcome::Stabilized {
                    iterations: iteration,
                };
            }

            last_magnitude = magnitude_squared;
        }

        IterationOutcome::Interior {
            iterations: self.max_iterations,
        }
    }
}

fn positive_finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::fractal_kinds::FractalKind;

    fn params(kind: FractalKind) -> FractalParameters {
        FractalParameters::for_kind(kind)
    }

    #[test]
    fn test_origin_is_in_the_mandelbrot_set() {
        for max_iterations in [1, 10, 256, 1000, 5000] {
            let kernel = FractalKernel::new(&FractalParameters {
                max_iterations,
                stabilization_exit: false,
                ..params(FractalKind::Mandelbrot)
            });

            assert_eq!(
                kernel.evaluate(Complex::ZERO),
                IterationOutcome::Interior {
                    iterations: max_iterations
                }
            );
        }
    }

    #[test]
    fn test_origin_is_interior_with_stabilization_enabled() {
        let kernel = FractalKernel::new(&FractalParameters {
            max_iterations: 1000,
            ..params(FractalKind::Mandelbrot)
        });

        assert!(kernel.evaluate(Complex::ZERO).is_interior());
    }

    #[test]
    fn test_far_point_escapes_on_first_step() {
        let kernel = FractalKernel::new(&params(FractalKind::Mandelbrot));

        assert_eq!(
            kernel.evaluate(Complex::new(2.0, 2.0)),
            IterationOutcome::Escaped {
                iterations: 1,
                magnitude_squared: 8.0
            }
        );
    }

    #[test]
    fn test_derivative_bailout_agrees_with_magnitude_far_outside() {
        let point = Complex::new(2.0, 2.0);
        let magnitude = FractalKernel::new(&params(FractalKind::Mandelbrot)).evaluate(point);
        let derivative = FractalKernel::new(&FractalParameters {
            use_derivative_bailout: true,
            ..params(FractalKind::Mandelbrot)
        })
        .evaluate(point);

        assert!(matches!(magnitude, IterationOutcome::Escaped { .. }));
        assert!(matches!(derivative, IterationOutcome::Escaped { .. }));
        assert!(magnitude.iterations().abs_diff(derivative.iterations()) <= 3);
    }

    #[test]
    fn test_derivative_mode_ignores_magnitude_bailout() {
        let point = Complex::new(0.3, 0.6);
        let kernel = FractalKernel::new(&FractalParameters {
            use_derivative_bailout: true,
            bailout: 1e-3,
            stabilization_exit: false,
            ..params(FractalKind::Mandelbrot)
        });

        match kernel.evaluate(point) {
            IterationOutcome::Escaped {
                magnitude_squared, ..
            } => assert!(magnitude_squared > 1e-3),
            other => panic!("expected escape, got {:?}", other),
        }
    }

    #[test]
    fn test_iterations_never_exceed_budget() {
        let families = [
            FractalKind::Mandelbrot,
            FractalKind::Julia,
            FractalKind::BurningShip,
            FractalKind::BurningShipJulia,
            FractalKind::Mandelbar,
            FractalKind::Newton,
            FractalKind::Phoenix,
            FractalKind::CubicMandelbrot,
            FractalKind::SineJulia,
            FractalKind::ExpJulia,
        ];

        for kind in families {
            for derivative in [false, true] {
                let kernel = FractalKernel::new(&FractalParameters {
                    max_iterations: 32,
                    use_derivative_bailout: derivative,
                    ..params(kind)
                });

                for point in [
                    Complex::ZERO,
                    Complex::new(-0.75, 0.1),
                    Complex::new(0.28, 0.01),
                    Complex::new(3.0, -3.0),
                ] {
                    let outcome = kernel.evaluate(point);
                    assert!(
                        (1..=32).contains(&outcome.iterations()),
                        "{:?} at {} gave {:?}",
                        kind,
                        point,
                        outcome
                    );
                }
            }
        }
    }

    #[test]
    fn test_unknown_index_never_escapes() {
        let base = FractalParameters {
            max_iterations: 50,
            stabilization_exit: false,
            ..FractalParameters::default()
        };

        for index in [10, 11, 99] {
            let kernel = FractalKernel::from_index(index, &base);

            assert_eq!(
                kernel.evaluate(Complex::new(0.5, 0.5)),
                IterationOutcome::Interior { iterations: 50 }
            );
        }
    }

    #[test]
    fn test_stabilization_catches_fixed_point_orbits() {
        let kernel = FractalKernel::new(&FractalParameters {
            julia_constant: Complex::ZERO,
            ..params(FractalKind::Julia)
        });

        // z -> z² with |z| < 1 collapses towards 0.
        let outcome = kernel.evaluate(Complex::new(0.1, 0.0));

        assert!(matches!(outcome, IterationOutcome::Stabilized { .. }));
        assert!(outcome.is_interior());
    }

    #[test]
    fn test_stabilization_can_be_disabled() {
        let kernel = FractalKernel::new(&FractalParameters {
            julia_constant: Complex::ZERO,
            stabilization_exit: false,
            max_iterations: 40,
            ..params(FractalKind::Julia)
        });

        assert_eq!(
            kernel.evaluate(Complex::new(0.1, 0.0)),
            IterationOutcome::Interior { iterations: 40 }
        );
    }

    #[test]
    fn test_non_finite_orbit_counts_as_escape() {
        let kernel = FractalKernel::new(&FractalParameters {
            bailout: f64::MAX,
            ..params(FractalKind::ExpJulia)
        });

        let outcome = kernel.evaluate(Complex::new(800.0, 0.0));

        assert!(matches!(outcome, IterationOutcome::Escaped { iterations: 1, .. }));
    }

    #[test]
    fn test_phoenix_differs_from_julia_only_through_previous_term() {
        let point = Complex::new(0.2, 0.3);
        let no_memory = FractalKernel::new(&FractalParameters {
            phoenix_constant: Complex::ZERO,
            stabilization_exit: false,
            ..params(FractalKind::Phoenix)
        });
        let julia = FractalKernel::new(&FractalParameters {
            stabilization_exit: false,
            ..params(FractalKind::Julia)
        });

        assert_eq!(no_memory.evaluate(point), julia.evaluate(point));
    }

    #[test]
    fn test_newton_routes_to_root_finding() {
        let kernel = FractalKernel::new(&params(FractalKind::Newton));

        assert!(matches!(
            kernel.evaluate(Complex::ONE),
            IterationOutcome::Converged { iterations: 1, .. }
        ));
    }

    #[test]
    fn test_degenerate_bailouts_fall_back_to_defaults() {
        let points = [
            Complex::new(2.0, 2.0),
            Complex::new(0.3, 0.5),
            Complex::new(-0.1, 0.0),
        ];

        for bailout in [f64::NAN, f64::INFINITY, 0.0, -4.0] {
            for use_derivative_bailout in [false, true] {
                let reference = FractalKernel::new(&FractalParameters {
                    use_derivative_bailout,
                    ..FractalParameters::default()
                });
                let degenerate = FractalKernel::new(&FractalParameters {
                    bailout,
                    derivative_bailout_threshold: bailout,
                    use_derivative_bailout,
                    ..FractalParameters::default()
                });

                for point in points {
                    assert_eq!(
                        degenerate.evaluate(point),
                        reference.evaluate(point),
                        "bailout {} at {}",
                        bailout,
                        point
                    );
                }
            }
        }
    }

    #[test]
    fn test_zero_iteration_budget_runs_one_step() {
        let kernel = FractalKernel::new(&FractalParameters {
            max_iterations: 0,
            stabilization_exit: false,
            ..FractalParameters::default()
        });

        assert_eq!(kernel.max_iterations(), 1);
        assert_eq!(
            kernel.evaluate(Complex::ZERO),
            IterationOutcome::Interior { iterations: 1 }
        );
    }
}
