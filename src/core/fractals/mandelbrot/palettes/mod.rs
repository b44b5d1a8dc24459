pub mod gradients;
pub mod kinds;
pub mod palette;
pub mod plan9;
