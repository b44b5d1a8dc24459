use crate::core::data::complex::Complex;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ComplexRectError {
    #[error("complex rect size must be positive: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },

    #[error("complex rect bounds must be finite")]
    NonFinite,
}

/// Linear interpolation: `start + (end - start) * t`.
#[must_use]
pub fn interpolate(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}

/// Axis-aligned region of the complex plane.
///
/// `top_left` holds the minimum real and imaginary parts; pixel row 0 maps to
/// the minimum imaginary bound.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    top_left: Complex,
    bottom_right: Complex,
}

impl ComplexRect {
    pub fn new(top_left: Complex, bottom_right: Complex) -> Result<Self, ComplexRectError> {
        if !top_left.is_finite() || !bottom_right.is_finite() {
            return Err(ComplexRectError::NonFinite);
        }

        let width = bottom_right.real - top_left.real;
        let height = bottom_right.imag - top_left.imag;

        if width <= 0.0 || height <= 0.0 || !width.is_finite() || !height.is_finite() {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    pub fn from_bounds(
        r_min: f64,
        r_max: f64,
        i_min: f64,
        i_max: f64,
    ) -> Result<Self, ComplexRectError> {
        Self::new(Complex::new(r_min, i_min), Complex::new(r_max, i_max))
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.bottom_right.real - self.top_left.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom_right.imag - self.top_left.imag
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex::new(
            (self.top_left.real + self.bottom_right.real) / 2.0,
            (self.top_left.imag + self.bottom_right.imag) / 2.0,
        )
    }

    /// Moves every bound toward `anchor` so that each distance is multiplied by `t`.
    ///
    /// `t < 1` zooms in around the anchor, `t > 1` zooms out. The anchor keeps
    /// its relative position inside the rect.
    pub fn interpolated_toward(&self, anchor: Complex, t: f64) -> Result<Self, ComplexRectError> {
        Self::from_bounds(
            interpolate(anchor.real, self.top_left.real, t),
            interpolate(anchor.real, self.bottom_right.real, t),
            interpolate(anchor.imag, self.top_left.imag, t),
            interpolate(anchor.imag, self.bottom_right.imag, t),
        )
    }

    pub fn scaled_about_center(&self, t: f64) -> Result<Self, ComplexRectError> {
        self.interpolated_toward(self.center(), t)
    }

    pub fn translated(&self, real: f64, imag: f64) -> Result<Self, ComplexRectError> {
        Self::from_bounds(
            self.top_left.real + real,
            self.bottom_right.real + real,
            self.top_left.imag + imag,
            self.bottom_right.imag + imag,
        )
    }
}
