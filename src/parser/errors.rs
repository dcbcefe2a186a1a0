use thiserror::Error;

use crate::expression::BinaryOp;

/// Errors raised while turning text into an expression tree
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Expression is empty")]
    EmptyExpression,
    #[error("Operator must precede bracket")]
    BracketAfterValue,
    #[error("Content inside brackets needs to end with value")]
    GroupEndsWithOperator,
    #[error("Too many closing brackets")]
    UnmatchedClosingBracket,
    #[error("Missing closing brackets")]
    MissingClosingBracket,
    #[error("{} may only follow a number or closing bracket", .0.symbol())]
    OperatorAfterOperator(BinaryOp),
    #[error("log is a unary operator, it must follow an operator")]
    LogarithmAfterValue,
    #[error("A number may only follow an operator, found '{0}'")]
    NumberAfterValue(String),
    #[error("You can't end with an operator")]
    TrailingOperator,
    #[error("Brackets must contain an expression")]
    EmptyGroup,
    #[error("Operator '{0}' is missing an operand")]
    MissingOperand(String),
    #[error("Group must merge into a single expression before evaluation, {0} remain")]
    UnmergedGroup(usize),
}
