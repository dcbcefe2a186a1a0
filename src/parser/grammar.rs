use std::mem;

use log::{debug, warn};

use crate::expression::Expression;
use crate::parser::collapse::{Node, collapse};
use crate::parser::errors::ParseError;
use crate::parser::token::Token;

/// What kind of token the parser will accept next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expecting {
    /// After an operator or an opening bracket: a number, `(` or `log`
    Operator,
    /// After a number or a closing bracket: a binary operator or `)`
    Value,
}

/// Nested groups being read. `current` is the innermost open group and
/// `enclosing` holds its ancestors, outermost (the root) first.
#[derive(Debug, Default)]
struct Groups {
    current: Vec<Node>,
    enclosing: Vec<Vec<Node>>,
}

impl Groups {
    fn open(&mut self) {
        self.enclosing.push(mem::take(&mut self.current));
    }

    fn close(&mut self) -> Result<(), ParseError> {
        let Some(parent) = self.enclosing.pop() else {
            warn!("Closing bracket without a matching opening bracket");
            return Err(ParseError::UnmatchedClosingBracket);
        };
        let inner = collapse(mem::replace(&mut self.current, parent))?;
        self.current.push(Node::Operand(Expression::group(inner)));
        Ok(())
    }

    fn push(&mut self, node: Node) {
        self.current.push(node);
    }

    fn at_root(&self) -> bool {
        self.enclosing.is_empty()
    }
}

fn require(expecting: Expecting, wanted: Expecting, error: ParseError) -> Result<(), ParseError> {
    if expecting == wanted {
        Ok(())
    } else {
        warn!("Rejecting expression: {}", error);
        Err(error)
    }
}

/// Parse a whitespace-separated expression into a collapsed tree
///
/// # Errors
///
/// Returns an error if the expression is blank, a token appears where the
/// previous token does not allow it, brackets are unbalanced, the input ends
/// on an operator, or a group fails to collapse into a single node.
pub fn parse(expression: &str) -> Result<Expression, ParseError> {
    debug!("Parsing expression: '{}'", expression);

    let mut groups = Groups::default();
    let mut expecting = Expecting::Operator;
    let mut seen_token = false;

    for token in Token::tokenize(expression) {
        seen_token = true;
        match token {
            Token::OpenBracket => {
                require(expecting, Expecting::Operator, ParseError::BracketAfterValue)?;
                groups.open();
                expecting = Expecting::Operator;
            }
            Token::CloseBracket => {
                require(expecting, Expecting::Value, ParseError::GroupEndsWithOperator)?;
                groups.close()?;
                expecting = Expecting::Value;
            }
            Token::Operator(op) => {
                require(expecting, Expecting::Value, ParseError::OperatorAfterOperator(op))?;
                groups.push(Node::Binary(op));
                expecting = Expecting::Operator;
            }
            Token::Logarithm => {
                require(expecting, Expecting::Operator, ParseError::LogarithmAfterValue)?;
                groups.push(Node::Logarithm);
                expecting = Expecting::Operator;
            }
            Token::Number(text) => {
                require(
                    expecting,
                    Expecting::Operator,
                    ParseError::NumberAfterValue(text.to_string()),
                )?;
                groups.push(Node::Operand(Expression::number(text)));
                expecting = Expecting::Value;
            }
        }
    }

    if !seen_token {
        return Err(ParseError::EmptyExpression);
    }

    if !groups.at_root() {
        warn!("Expression ends inside {} open group(s)", groups.enclosing.len());
        return Err(ParseError::MissingClosingBracket);
    }

    if expecting == Expecting::Operator {
        warn!("Expression ends on an operator");
        return Err(ParseError::TrailingOperator);
    }

    let expr = collapse(groups.current)?;
    debug!("Parsed '{}' as {}", expression.trim(), expr);
    Ok(expr)
}
