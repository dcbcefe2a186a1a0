//! How a calculation outcome is shown to the user

use std::fmt;

use crate::CalcError;

/// Largest integer an IEEE double represents exactly, `2^53 - 1`
pub const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A numeric result classified by magnitude
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultDisplay {
    Exact(f64),
    /// Beyond the exact-integer range, so the low digits are unreliable
    Approximate(f64),
    /// Infinite or at the edge of the finite range
    TooLarge,
}

impl ResultDisplay {
    pub fn classify(value: f64) -> Self {
        let magnitude = value.abs();
        if magnitude >= f64::MAX {
            ResultDisplay::TooLarge
        } else if magnitude >= MAX_EXACT_INTEGER {
            ResultDisplay::Approximate(value)
        } else {
            ResultDisplay::Exact(value)
        }
    }
}

/// Exact results use plain decimal notation at every magnitude, approximate
/// ones always use scientific notation.
impl fmt::Display for ResultDisplay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ResultDisplay::Exact(value) => write!(f, "= {}", value),
            ResultDisplay::Approximate(value) => write!(f, "~ {:e}", value),
            ResultDisplay::TooLarge => write!(f, "that's too huge?"),
        }
    }
}

/// Render the outcome of [`crate::calculate`] as a single line.
/// Blank input renders as an empty line.
pub fn render_outcome(outcome: &Result<Option<f64>, CalcError>) -> String {
    match outcome {
        Ok(Some(value)) => ResultDisplay::classify(*value).to_string(),
        Ok(None) => String::new(),
        Err(e) => format!("Error: {}", e),
    }
}
