use std::ops::{Add, Mul};

/// A point on the complex plane.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// `z²`, expanded so the orbit step costs three multiplies.
    #[must_use]
    pub fn square(self) -> Self {
        let re_im = self.real * self.imag;
        Self::new(
            self.real * self.real - self.imag * self.imag,
            re_im + re_im,
        )
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.real.hypot(self.imag)
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.real + rhs.real, self.imag + rhs.imag)
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.real * rhs.real - self.imag * rhs.imag,
            self.real * rhs.imag + self.imag * rhs.real,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Complex;

    #[test]
    fn magnitude_ignores_sign() {
        for c in [
            Complex::new(3.0, 4.0),
            Complex::new(-3.0, 4.0),
            Complex::new(3.0, -4.0),
            Complex::new(-3.0, -4.0),
        ] {
            assert_eq!(c.magnitude_squared(), 25.0);
            assert_eq!(c.magnitude(), 5.0);
        }
        assert_eq!(Complex::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn non_finite_parts_are_detected() {
        assert!(Complex::new(1.0, -1.0).is_finite());
        assert!(!Complex::new(f64::NAN, 0.0).is_finite());
        assert!(!Complex::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn add_and_mul_follow_complex_arithmetic() {
        assert_eq!(
            Complex::new(1.0, 2.0) + Complex::new(-3.0, -7.0),
            Complex::new(-2.0, -5.0)
        );
        // (1 + 2i)(3 + 4i) = -5 + 10i
        assert_eq!(
            Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0),
            Complex::new(-5.0, 10.0)
        );
    }

    #[test]
    fn square_matches_self_multiplication() {
        for z in [
            Complex::new(2.0, 3.0),
            Complex::new(-1.0, -1.0),
            Complex::new(0.5, -0.25),
        ] {
            assert_eq!(z.square(), z * z);
        }
        // (2 + 3i)² = -5 + 12i
        assert_eq!(Complex::new(2.0, 3.0).square(), Complex::new(-5.0, 12.0));
    }
}
