use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::escape_result::EscapeResult;
use std::num::NonZeroU32;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iterates `z <- z^2 + c` from `z = 0` while `|z| <= 2` and fewer than
/// `max_iterations` steps have been taken.
///
/// The step count is incremented after each update, so any `|c| > 2`
/// escapes with `iterations == 1`. An orbit that first leaves the radius on
/// the step that reaches the cap is reported as bounded.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> EscapeResult {
    let mut z = Complex::ZERO;
    let mut iterations = 0;

    while iterations < max_iterations && z.magnitude_squared() <= ESCAPE_RADIUS_SQUARED {
        z = z.square() + c;
        iterations += 1;
    }

    if iterations >= max_iterations {
        return EscapeResult::bounded(max_iterations);
    }

    EscapeResult {
        iterations,
        smooth: smooth_value(iterations, z.magnitude()),
        escaped: true,
    }
}

/// Continuous escape measure in `[n, n + 1)`.
///
/// `n + 1 - log2(log2 |z|)` equals `n + 1` as `|z|` approaches the radius and
/// reaches `n` where an orbit one step further out would sit on the radius,
/// so neighbouring bands meet. Clamped at both ends; a non-finite log falls
/// back to `n`.
fn smooth_value(iterations: u32, magnitude: f64) -> f64 {
    let n = f64::from(iterations);
    let smooth = n + 1.0 - magnitude.log2().log2();

    if !smooth.is_finite() {
        return n;
    }

    smooth.clamp(n, largest_below(n + 1.0))
}

// `n + 1` is a positive integral float here, so stepping its bit pattern
// down by one gives the next representable value toward zero.
fn largest_below(value: f64) -> f64 {
    f64::from_bits(value.to_bits() - 1)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    max_iterations: NonZeroU32,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(max_iterations: NonZeroU32) -> Self {
        Self { max_iterations }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations.get()
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    fn compute(&self, c: Complex) -> EscapeResult {
        escape_time(c, self.max_iterations.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(real: f64, imag: f64) -> Complex {
        Complex { real, imag }
    }

    #[test]
    fn test_known_escape_fixtures() {
        assert_eq!(escape_time(c(-1.0, -1.0), 80).iterations, 3);
        assert_eq!(escape_time(c(-1.0, -0.5), 80).iterations, 5);

        let inside = escape_time(c(-1.0, 0.0), 80);
        assert_eq!(inside.iterations, 80);
        assert!(!inside.escaped);
    }

    #[test]
    fn test_points_outside_radius_escape_on_first_step() {
        for point in [c(3.0, 0.0), c(0.0, -2.5), c(-2.1, 0.1), c(1.5, 1.5)] {
            let result = escape_time(point, 256);

            assert_eq!(result.iterations, 1, "point {point:?}");
            assert!(result.escaped);
        }
    }

    #[test]
    fn test_origin_is_bounded() {
        assert_eq!(escape_time(Complex::ZERO, 1000), EscapeResult::bounded(1000));
    }

    #[test]
    fn test_escape_on_last_step_counts_as_bounded() {
        // (-1,-1) leaves the radius on step 3
        let result = escape_time(c(-1.0, -1.0), 3);

        assert_eq!(result, EscapeResult::bounded(3));
    }

    #[test]
    fn test_cap_of_one_bounds_everything() {
        assert_eq!(escape_time(c(3.0, 0.0), 1), EscapeResult::bounded(1));
    }

    #[test]
    fn test_iterations_are_monotonic_in_cap() {
        let points = [
            c(-1.0, -1.0),
            c(-1.0, -0.5),
            c(-0.75, 0.1),
            c(0.3, 0.5),
            c(-1.0, 0.0),
            c(0.25, 0.0),
        ];

        for point in points {
            let mut previous = 0;
            for cap in [1, 2, 5, 10, 50, 100, 500] {
                let iterations = escape_time(point, cap).iterations;
                assert!(iterations >= previous, "point {point:?} cap {cap}");
                previous = iterations;
            }
        }
    }

    #[test]
    fn test_escaped_iterations_independent_of_larger_cap() {
        let low = escape_time(c(-1.0, -0.5), 80);
        let high = escape_time(c(-1.0, -0.5), 10_000);

        assert_eq!(low, high);
    }

    #[test]
    fn test_smooth_value_lies_in_unit_interval_above_iterations() {
        for y in -20..=20 {
            for x in -30..=10 {
                let point = c(f64::from(x) * 0.1, f64::from(y) * 0.1);
                let result = escape_time(point, 128);

                if result.escaped {
                    let n = f64::from(result.iterations);
                    assert!(result.smooth >= n, "{point:?} {result:?}");
                    assert!(result.smooth < n + 1.0, "{point:?} {result:?}");
                } else {
                    assert_eq!(result.smooth, 128.0);
                }
            }
        }
    }

    #[test]
    fn test_smooth_value_fixture() {
        // escapes on step 5 with |z| ~2.766
        let result = escape_time(c(-1.0, -0.5), 80);

        assert!((result.smooth - 5.4465).abs() < 0.001, "{result:?}");
    }

    #[test]
    fn test_smooth_value_guards_radius_edge() {
        // log2(2) = 1 and log2(1) = 0 puts the raw value exactly on n + 1
        let at_radius = smooth_value(4, 2.0);
        assert!(at_radius < 5.0);
        assert!(at_radius >= 4.0);

        assert_eq!(smooth_value(4, f64::INFINITY), 4.0);
        assert_eq!(smooth_value(4, f64::NAN), 4.0);
        assert_eq!(smooth_value(4, 1e300), 4.0);
    }

    #[test]
    fn test_smooth_value_is_continuous_across_bands() {
        let mut previous = escape_time(c(0.26, 0.0), 1000);
        let mut band_changes = 0;

        for step in 1..4000 {
            let current = escape_time(c(0.26 + f64::from(step) * 1e-5, 0.0), 1000);
            assert!(current.escaped, "{current:?}");

            if current.iterations != previous.iterations {
                band_changes += 1;
                assert!(
                    (current.smooth - previous.smooth).abs() < 0.1,
                    "step {step}: {previous:?} -> {current:?}"
                );
            }
            previous = current;
        }

        assert!(band_changes > 5);
    }

    #[test]
    fn test_algorithm_uses_configured_cap() {
        let algorithm = MandelbrotAlgorithm::new(NonZeroU32::new(80).unwrap());

        assert_eq!(algorithm.max_iterations(), 80);
        assert_eq!(algorithm.compute(c(-1.0, 0.0)).iterations, 80);
        assert_eq!(algorithm.compute(c(-1.0, -1.0)).iterations, 3);
    }
}
