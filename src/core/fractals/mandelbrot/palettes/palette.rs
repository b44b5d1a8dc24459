use crate::core::data::colour::Colour;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("palette must contain at least one colour")]
    Empty,
}

/// Ordered, non-empty colour table. Built once at startup and shared
/// read-only by every render thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colours: Vec<Colour>,
}

impl Palette {
    pub fn new(colours: Vec<Colour>) -> Result<Self, PaletteError> {
        if colours.is_empty() {
            return Err(PaletteError::Empty);
        }

        Ok(Self { colours })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    // Never empty, but clippy expects the pair.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Colour> {
        self.colours.get(index).copied()
    }

    /// Entry at `index` modulo the palette length.
    #[must_use]
    pub fn wrapping(&self, index: usize) -> Colour {
        self.colours[index % self.colours.len()]
    }
}
