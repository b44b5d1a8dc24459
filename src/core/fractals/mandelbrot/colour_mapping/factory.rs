use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::{
    discrete::DiscreteColourMap, kinds::ColouringMode, smooth::SmoothColourMap,
};
use crate::core::fractals::mandelbrot::palettes::palette::Palette;

#[must_use]
pub fn mandelbrot_colour_map_factory(mode: ColouringMode, palette: Palette) -> Box<dyn ColourMap> {
    match mode {
        ColouringMode::Smooth => Box::new(SmoothColourMap::new(palette)),
        ColouringMode::Discrete => Box::new(DiscreteColourMap::new(palette)),
    }
}
