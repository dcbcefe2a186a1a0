/// Binary operators recognised by the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponentiate,
}

impl BinaryOp {
    /// The token that spells this operator in an expression
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Exponentiate => "exp",
        }
    }
}

/// A fully collapsed expression tree
///
/// Every child slot is owned and always set; partially built operators only
/// exist inside the parser while a group is still being read.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Raw digit text, parsed when evaluated
    Number(String),
    Binary {
        op: BinaryOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    /// Base-2 logarithm of the operand
    Logarithm(Box<Expression>),
    /// A bracketed group collapsed to its single node
    Group(Box<Expression>),
}

impl Expression {
    pub fn number(text: impl Into<String>) -> Self {
        Expression::Number(text.into())
    }

    pub fn binary(op: BinaryOp, left: Expression, right: Expression) -> Self {
        Expression::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn logarithm(operand: Expression) -> Self {
        Expression::Logarithm(Box::new(operand))
    }

    pub fn group(inner: Expression) -> Self {
        Expression::Group(Box::new(inner))
    }
}
