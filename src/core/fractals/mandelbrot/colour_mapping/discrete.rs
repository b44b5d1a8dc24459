use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColouringMode;
use crate::core::fractals::mandelbrot::palettes::palette::Palette;

/// Palette lookup by whole iteration count. Bounded points report a value of
/// zero so they take the inside-set colour.
#[derive(Debug, Clone)]
pub struct DiscreteColourMap {
    palette: Palette,
    inside: Colour,
    outside_cap: Colour,
}

impl DiscreteColourMap {
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            inside: Colour::BLACK,
            outside_cap: Colour::BLACK,
        }
    }
}

impl ColourMap for DiscreteColourMap {
    fn map(&self, value: f64) -> Colour {
        if value.is_nan() || value <= 0.0 {
            return self.inside;
        }

        let last = (self.palette.len() - 1) as f64;
        if value > last {
            return self.outside_cap;
        }

        self.palette.get(value.floor() as usize).unwrap_or(self.outside_cap)
    }

    fn escape_value(&self, result: EscapeResult) -> f64 {
        if result.escaped {
            f64::from(result.iterations)
        } else {
            0.0
        }
    }

    fn display_name(&self) -> &str {
        ColouringMode::Discrete.display_name()
    }
}
