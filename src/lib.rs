//! infixcalc - A small calculator for whitespace-separated infix expressions
//!
//! Expressions are made of integer literals, `+ - * /`, brackets, the prefix
//! base-2 logarithm `log` and the binary power operator `exp`. Tokens must be
//! separated by whitespace.
//!
//! Operators are resolved in fixed tiers: `log` first, then `*` and `/`, then
//! `+` and `-`, and `exp` last. So `2 exp 3 + 1` is `2 exp 4`.

pub mod expression;
pub mod format;
pub mod parser;

use thiserror::Error;

// Re-export the main public API
pub use expression::{BinaryOp, Expression, ExpressionError};
pub use format::{ResultDisplay, render_outcome};
pub use parser::{ParseError, parse};

/// Any failure on the way from text to a number
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Expression(#[from] ExpressionError),
}

/// Parse and evaluate an expression in one step
///
/// Blank input yields `Ok(None)`: there is nothing to calculate yet, which is
/// not an error.
///
/// # Errors
///
/// Returns an error if the expression is malformed or fails to evaluate,
/// for example on division by zero.
///
/// # Examples
///
/// ```
/// use infixcalc::calculate;
///
/// assert_eq!(calculate("( 2 + 3 ) * 4").ok(), Some(Some(20.0)));
/// assert_eq!(calculate("   ").ok(), Some(None));
///
/// match calculate("1 / 0") {
///     Err(e) => println!("Error: {}", e),
///     Ok(value) => println!("{:?}", value),
/// }
/// ```
pub fn calculate(expression: &str) -> Result<Option<f64>, CalcError> {
    if expression.trim().is_empty() {
        return Ok(None);
    }

    let expr = parse(expression)?;
    Ok(Some(expr.evaluate()?))
}
