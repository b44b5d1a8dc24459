use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use thiserror::Error;

pub const BYTES_PER_PIXEL: usize = 4;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    pixel_rect.size() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameBufferError {
    #[error("pixel rect size {pixel_rect_size} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        pixel_rect_size: usize,
        buffer_size: usize,
    },
}

pub type FrameBufferData = Vec<u8>;

/// RGBA frame, row-major: pixel `i` lives at bytes `4*i..4*i+4` and is the
/// pixel at `(i % width, i / width)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pixel_rect: PixelRect,
    buffer: FrameBufferData,
}

impl FrameBuffer {
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        Self {
            pixel_rect,
            buffer: vec![0; pixel_rect_to_buffer_size(pixel_rect)],
        }
    }

    pub fn from_data(
        pixel_rect: PixelRect,
        buffer: FrameBufferData,
    ) -> Result<Self, FrameBufferError> {
        let expected = pixel_rect_to_buffer_size(pixel_rect);

        if expected != buffer.len() {
            return Err(FrameBufferError::BoundsMismatch {
                pixel_rect_size: expected,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { pixel_rect, buffer })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    /// Colour at `pixel`, or `None` outside the frame.
    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        if !self.pixel_rect.contains_point(pixel) {
            return None;
        }

        let index = (pixel.y as usize * self.pixel_rect.width() as usize + pixel.x as usize)
            * BYTES_PER_PIXEL;

        Some(Colour::new(
            self.buffer[index],
            self.buffer[index + 1],
            self.buffer[index + 2],
        ))
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }
}
