use std::fmt;

use crate::expression::ast::Expression;

/// Renders the tree back into the token language with every binary node
/// bracketed, so the output parses to a tree with the same value.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Number(text) => write!(f, "{}", text),
            Expression::Binary { op, left, right } => {
                write!(f, "( {} {} {} )", left, op.symbol(), right)
            }
            Expression::Logarithm(operand) => write!(f, "log {}", operand),
            Expression::Group(inner) => write!(f, "{}", inner),
        }
    }
}
