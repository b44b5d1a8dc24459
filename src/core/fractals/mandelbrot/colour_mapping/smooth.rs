use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColouringMode;
use crate::core::fractals::mandelbrot::palettes::palette::Palette;

/// Cyclic palette walk: the integer part of the value picks an entry, the
/// fractional part blends toward the next one in HCL space.
///
/// Points that never escaped take a fixed inside colour, so the set itself
/// does not change colour with the iteration cap.
#[derive(Debug, Clone)]
pub struct SmoothColourMap {
    palette: Palette,
    inside: Colour,
}

impl SmoothColourMap {
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            inside: Colour::BLACK,
        }
    }
}

impl ColourMap for SmoothColourMap {
    fn map(&self, value: f64) -> Colour {
        if !value.is_finite() {
            return self.palette.wrapping(0);
        }

        let whole = value.floor();
        let fraction = value - whole;
        let len = self.palette.len() as i64;
        // saturating float-to-int cast keeps huge magnitudes in range
        let index = (whole as i64).rem_euclid(len) as usize;

        let from = self.palette.wrapping(index);
        let to = self.palette.wrapping(index + 1);

        from.blend_hcl(to, fraction)
    }

    fn escape_value(&self, result: EscapeResult) -> f64 {
        result.smooth
    }

    fn display_name(&self) -> &str {
        ColouringMode::Smooth.display_name()
    }

    fn colour_of(&self, result: EscapeResult) -> Colour {
        if !result.escaped {
            return self.inside;
        }

        self.map(self.escape_value(result))
    }
}
