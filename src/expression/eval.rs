use log::{debug, warn};

use crate::expression::ast::{BinaryOp, Expression};
use crate::expression::errors::ExpressionError;

/// Parse the raw text of a number node.
///
/// Only plain runs of ASCII digits are accepted. Parsing goes through `f64`
/// so very long literals saturate to large or infinite values.
fn parse_number(text: &str) -> Result<f64, ExpressionError> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        warn!("Rejecting non-numeric token: '{}'", text);
        return Err(ExpressionError::InvalidNumber(text.to_string()));
    }

    text.parse::<f64>()
        .map_err(|_| ExpressionError::InvalidNumber(text.to_string()))
}

fn check_divisor(divisor: f64) -> Result<f64, ExpressionError> {
    if divisor == 0.0 {
        debug!("Division by zero attempted");
        Err(ExpressionError::DivisionByZero)
    } else {
        Ok(divisor)
    }
}

fn apply(op: BinaryOp, left: f64, right: f64) -> Result<f64, ExpressionError> {
    match op {
        BinaryOp::Add => Ok(left + right),
        BinaryOp::Subtract => Ok(left - right),
        BinaryOp::Multiply => Ok(left * right),
        BinaryOp::Divide => check_divisor(right).map(|right| left / right),
        BinaryOp::Exponentiate => Ok(left.powf(right)),
    }
}

impl Expression {
    /// Evaluates the expression and returns the result
    ///
    /// Overflow and logarithm domain violations are not errors: they come
    /// back as infinite or NaN values.
    ///
    /// # Errors
    ///
    /// Returns an error when:
    /// - A number node holds text that is not a digit sequence
    /// - The right operand of a division evaluates to zero
    ///
    /// Operands are evaluated left to right, except for division, whose
    /// divisor is evaluated first so a zero divisor is reported before any
    /// failure in the dividend.
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        let result = match self {
            Expression::Number(text) => parse_number(text),
            // The divisor is evaluated and checked before the dividend.
            Expression::Binary {
                op: BinaryOp::Divide,
                left,
                right,
            } => {
                let right = check_divisor(right.evaluate()?)?;
                let left = left.evaluate()?;
                apply(BinaryOp::Divide, left, right)
            }
            Expression::Binary { op, left, right } => {
                let left = left.evaluate()?;
                let right = right.evaluate()?;
                apply(*op, left, right)
            }
            Expression::Logarithm(operand) => operand.evaluate().map(f64::log2),
            Expression::Group(inner) => inner.evaluate(),
        };

        match &result {
            Ok(value) => debug!("{} evaluated to {}", self, value),
            Err(e) => debug!("{} failed to evaluate: {}", self, e),
        }

        result
    }
}
