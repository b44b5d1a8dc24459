/// Outcome of iterating one point's orbit.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeResult {
    /// Orbit steps taken, `1..=max_iterations` for any non-zero cap.
    pub iterations: u32,
    /// Continuous escape measure in `[iterations, iterations + 1)` for
    /// escaped points; equal to `iterations` for bounded ones.
    pub smooth: f64,
    /// `false` when the cap was reached, i.e. the point is treated as inside the set.
    pub escaped: bool,
}

impl EscapeResult {
    #[must_use]
    pub fn bounded(max_iterations: u32) -> Self {
        Self {
            iterations: max_iterations,
            smooth: f64::from(max_iterations),
            escaped: false,
        }
    }
}
