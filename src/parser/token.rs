use crate::expression::BinaryOp;

/// A whitespace-separated piece of input, classified by its literal text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    OpenBracket,
    CloseBracket,
    Operator(BinaryOp),
    Logarithm,
    /// Anything else; validated as a number only at evaluation
    Number(&'a str),
}

impl<'a> Token<'a> {
    pub fn classify(text: &'a str) -> Self {
        match text {
            "(" => Token::OpenBracket,
            ")" => Token::CloseBracket,
            "+" => Token::Operator(BinaryOp::Add),
            "-" => Token::Operator(BinaryOp::Subtract),
            "*" => Token::Operator(BinaryOp::Multiply),
            "/" => Token::Operator(BinaryOp::Divide),
            "exp" => Token::Operator(BinaryOp::Exponentiate),
            "log" => Token::Logarithm,
            other => Token::Number(other),
        }
    }

    /// Split an expression on runs of whitespace and classify each piece
    pub fn tokenize(expression: &'a str) -> impl Iterator<Item = Token<'a>> + 'a {
        expression.split_whitespace().map(Token::classify)
    }
}
