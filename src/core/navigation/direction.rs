/// Screen-space pan direction. Up moves toward smaller imaginary values,
/// matching pixel row 0 sitting on the minimum imaginary bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

impl PanDirection {
    /// Unit offset `(real, imag)` for this direction.
    #[must_use]
    pub const fn unit(self) -> (f64, f64) {
        match self {
            Self::Up => (0.0, -1.0),
            Self::Down => (0.0, 1.0),
            Self::Left => (-1.0, 0.0),
            Self::Right => (1.0, 0.0),
        }
    }
}
