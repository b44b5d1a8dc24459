use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// Maps a pixel onto the plane using the viewport's per-axis pixels-per-unit
/// scale. Total: points outside the frame extrapolate linearly, which is what
/// cursor tracking needs when the pointer sits on the window edge.
#[must_use]
pub fn pixel_to_complex_coords(pixel: Point, pixel_rect: PixelRect, viewport: &Viewport) -> Complex {
    Complex {
        real: f64::from(pixel.x) / viewport.zoom(pixel_rect) + viewport.r_min(),
        imag: f64::from(pixel.y) / viewport.zoom_imag(pixel_rect) + viewport.i_min(),
    }
}
