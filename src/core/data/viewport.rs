use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use std::num::NonZeroU32;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ViewportError {
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
}

/// Point-in-time view state: the region of the plane on screen and the
/// iteration cap. Copied out of the navigation controller once per frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    region: ComplexRect,
    max_iterations: NonZeroU32,
}

impl Viewport {
    pub fn new(region: ComplexRect, max_iterations: u32) -> Result<Self, ViewportError> {
        let max_iterations =
            NonZeroU32::new(max_iterations).ok_or(ViewportError::ZeroMaxIterations)?;

        Ok(Self {
            region,
            max_iterations,
        })
    }

    #[must_use]
    pub fn region(&self) -> ComplexRect {
        self.region
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations.get()
    }

    #[must_use]
    pub fn iteration_cap(&self) -> NonZeroU32 {
        self.max_iterations
    }

    #[must_use]
    pub fn r_min(&self) -> f64 {
        self.region.top_left().real
    }

    #[must_use]
    pub fn r_max(&self) -> f64 {
        self.region.bottom_right().real
    }

    #[must_use]
    pub fn i_min(&self) -> f64 {
        self.region.top_left().imag
    }

    #[must_use]
    pub fn i_max(&self) -> f64 {
        self.region.bottom_right().imag
    }

    /// Pixels per plane unit along the real axis.
    #[must_use]
    pub fn zoom(&self, pixel_rect: PixelRect) -> f64 {
        f64::from(pixel_rect.width()) / self.region.width()
    }

    /// Pixels per plane unit along the imaginary axis.
    #[must_use]
    pub fn zoom_imag(&self, pixel_rect: PixelRect) -> f64 {
        f64::from(pixel_rect.height()) / self.region.height()
    }

    pub(crate) fn set_region(&mut self, region: ComplexRect) {
        self.region = region;
    }

    pub(crate) fn set_max_iterations(&mut self, max_iterations: NonZeroU32) {
        self.max_iterations = max_iterations;
    }
}
