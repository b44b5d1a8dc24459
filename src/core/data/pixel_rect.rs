use crate::core::data::point::Point;
use thiserror::Error;

/// Largest accepted frame edge, in pixels.
pub const MAX_PIXEL_EXTENT: u32 = 16_384;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelRectError {
    #[error("pixel rect size must be between 1 and {MAX_PIXEL_EXTENT}: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// The pixel grid `[0, width) × [0, height)` a frame is rendered into.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    width: u32,
    height: u32,
}

impl PixelRect {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelRectError> {
        let valid = |extent: u32| (1..=MAX_PIXEL_EXTENT).contains(&extent);

        if !valid(width) || !valid(height) {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width
            && (point.y as u32) < self.height
    }

    /// Number of pixels in the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Row-major pixel index to coordinate: `(i % width, i / width)`.
    #[must_use]
    pub fn point_at(&self, index: usize) -> Point {
        let width = self.width as usize;

        Point {
            x: (index % width) as i32,
            y: (index / width) as i32,
        }
    }
}
