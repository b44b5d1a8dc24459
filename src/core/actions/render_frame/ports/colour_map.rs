use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;

/// Turns an escape measure into a display colour.
///
/// `map` must be total: every `f64`, including NaN and infinities, yields a
/// colour.
pub trait ColourMap: Send + Sync {
    fn map(&self, value: f64) -> Colour;

    /// The scalar this map colours by, taken from an evaluator result.
    fn escape_value(&self, result: EscapeResult) -> f64;

    fn display_name(&self) -> &str;

    /// Colour for one evaluator result. Maps may override this to colour
    /// bounded points independently of their escape value.
    fn colour_of(&self, result: EscapeResult) -> Colour {
        self.map(self.escape_value(result))
    }
}

impl ColourMap for Box<dyn ColourMap> {
    fn map(&self, value: f64) -> Colour {
        (**self).map(value)
    }

    fn escape_value(&self, result: EscapeResult) -> f64 {
        (**self).escape_value(result)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }

    fn colour_of(&self, result: EscapeResult) -> Colour {
        (**self).colour_of(result)
    }
}
