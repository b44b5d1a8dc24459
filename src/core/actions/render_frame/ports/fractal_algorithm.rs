use crate::core::data::complex::Complex;
use crate::core::data::escape_result::EscapeResult;

/// Per-point escape-time computation. Implementations must be total and
/// pure so rows can be evaluated in any order on any thread.
pub trait FractalAlgorithm: Send + Sync {
    fn compute(&self, c: Complex) -> EscapeResult;
}
