use crate::core::data::complex::Complex;
use std::time::Duration;

/// Read-only view summary for the debug overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewStatus {
    /// Plane coordinate under the cursor, if the pointer is over the window.
    pub cursor_location: Option<Complex>,
    /// Pixels per plane unit along the real axis.
    pub zoom: f64,
    pub max_iterations: u32,
    pub last_render: Option<Duration>,
    pub debug_visible: bool,
}
