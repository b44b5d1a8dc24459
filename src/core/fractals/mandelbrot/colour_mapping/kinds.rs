#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColouringMode {
    /// Blend neighbouring palette entries by the fractional escape value.
    #[default]
    Smooth,
    /// Index the palette directly by iteration count.
    Discrete,
}

impl ColouringMode {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Smooth => "Smooth",
            Self::Discrete => "Discrete",
        }
    }
}

impl std::fmt::Display for ColouringMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
