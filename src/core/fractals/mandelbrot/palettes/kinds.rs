use crate::core::fractals::mandelbrot::palettes::gradients::{blue_white_colours, fire_colours};
use crate::core::fractals::mandelbrot::palettes::palette::{Palette, PaletteError};
use crate::core::fractals::mandelbrot::palettes::plan9::plan9_colours;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaletteKind {
    #[default]
    Plan9,
    Fire,
    BlueWhite,
}

impl PaletteKind {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Plan9 => "Plan 9",
            Self::Fire => "Fire gradient",
            Self::BlueWhite => "Blue-white gradient",
        }
    }

    pub fn build(self) -> Result<Palette, PaletteError> {
        let colours = match self {
            Self::Plan9 => plan9_colours(),
            Self::Fire => fire_colours(),
            Self::BlueWhite => blue_white_colours(),
        };

        Palette::new(colours)
    }
}

impl std::fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
