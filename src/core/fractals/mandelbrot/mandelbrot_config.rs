use crate::core::{
    data::{
        complex_rect::{ComplexRect, ComplexRectError},
        viewport::{Viewport, ViewportError},
    },
    fractals::mandelbrot::{
        colour_mapping::kinds::ColouringMode,
        palettes::kinds::PaletteKind,
    },
};
use thiserror::Error;

pub const DEFAULT_R_MIN: f64 = -2.0;
pub const DEFAULT_R_MAX: f64 = 1.0;
pub const DEFAULT_I_MIN: f64 = -1.0;
pub const DEFAULT_I_MAX: f64 = 1.8;
pub const DEFAULT_MAX_ITERATIONS: u32 = 256;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MandelbrotConfigError {
    #[error("invalid view bounds: {0}")]
    Region(#[from] ComplexRectError),

    #[error(transparent)]
    Viewport(#[from] ViewportError),
}

/// Startup view of the set, unvalidated until [`MandelbrotConfig::viewport`]
/// is called.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub r_min: f64,
    pub r_max: f64,
    pub i_min: f64,
    pub i_max: f64,
    pub max_iterations: u32,
    pub colouring: ColouringMode,
    pub palette: PaletteKind,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            r_min: DEFAULT_R_MIN,
            r_max: DEFAULT_R_MAX,
            i_min: DEFAULT_I_MIN,
            i_max: DEFAULT_I_MAX,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            colouring: ColouringMode::default(),
            palette: PaletteKind::default(),
        }
    }
}

impl MandelbrotConfig {
    pub fn region(&self) -> Result<ComplexRect, ComplexRectError> {
        ComplexRect::from_bounds(self.r_min, self.r_max, self.i_min, self.i_max)
    }

    pub fn viewport(&self) -> Result<Viewport, MandelbrotConfigError> {
        Ok(Viewport::new(self.region()?, self.max_iterations)?)
    }
}
