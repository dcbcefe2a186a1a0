use log::debug;

use crate::expression::{BinaryOp, Expression};
use crate::parser::errors::ParseError;

/// Binary tiers, resolved in this order after logarithms.
/// Exponentiation binds loosest, below addition.
const BINARY_TIERS: [&[BinaryOp]; 3] = [
    &[BinaryOp::Multiply, BinaryOp::Divide],
    &[BinaryOp::Add, BinaryOp::Subtract],
    &[BinaryOp::Exponentiate],
];

/// An entry of a group that has not been merged yet
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Operand(Expression),
    /// Binary operator still waiting for both operands
    Binary(BinaryOp),
    /// Logarithm still waiting for its operand
    Logarithm,
}

impl Node {
    fn label(&self) -> String {
        match self {
            Node::Operand(expr) => expr.to_string(),
            Node::Binary(op) => op.symbol().to_string(),
            Node::Logarithm => "log".to_string(),
        }
    }
}

fn is_operand(node: Option<&Node>) -> bool {
    matches!(node, Some(Node::Operand(_)))
}

/// Logarithms take the operand on their right. Scanning from the end lets
/// `log log x` nest, since the inner logarithm is complete before the outer
/// one looks at it.
fn merge_logarithms(nodes: &mut Vec<Node>) -> Result<(), ParseError> {
    let mut i = nodes.len();
    while i > 0 {
        i -= 1;
        if !matches!(nodes.get(i), Some(Node::Logarithm)) {
            continue;
        }
        if !is_operand(nodes.get(i + 1)) {
            return Err(ParseError::MissingOperand("log".to_string()));
        }
        let Node::Operand(operand) = nodes.remove(i + 1) else {
            return Err(ParseError::MissingOperand("log".to_string()));
        };
        nodes[i] = Node::Operand(Expression::logarithm(operand));
    }
    Ok(())
}

fn merge_binaries(nodes: &mut Vec<Node>, tier: &[BinaryOp]) -> Result<(), ParseError> {
    let mut i = 0;
    while i < nodes.len() {
        let op = match nodes.get(i) {
            Some(Node::Binary(op)) if tier.contains(op) => *op,
            _ => {
                i += 1;
                continue;
            }
        };

        if i == 0 || !is_operand(nodes.get(i - 1)) || !is_operand(nodes.get(i + 1)) {
            return Err(ParseError::MissingOperand(op.symbol().to_string()));
        }

        let mut triple = nodes.drain(i - 1..=i + 1);
        let left = triple.next();
        triple.next();
        let right = triple.next();
        drop(triple);

        let (Some(Node::Operand(left)), Some(Node::Operand(right))) = (left, right) else {
            return Err(ParseError::MissingOperand(op.symbol().to_string()));
        };
        nodes.insert(i - 1, Node::Operand(Expression::binary(op, left, right)));
        // The merged node sits at i - 1, so index i now holds the next
        // unvisited entry and chains fold to the left.
    }
    Ok(())
}

/// Collapse a group's flat node list into a single expression
///
/// # Errors
///
/// Returns an error if an operator lacks an operand, the group is empty, or
/// more than one node remains after every tier has been applied.
pub fn collapse(mut nodes: Vec<Node>) -> Result<Expression, ParseError> {
    debug!("Collapsing group of {} nodes", nodes.len());

    merge_logarithms(&mut nodes)?;
    for tier in BINARY_TIERS {
        merge_binaries(&mut nodes, tier)?;
    }

    if nodes.len() > 1 {
        debug!(
            "Unmerged nodes: {:?}",
            nodes.iter().map(Node::label).collect::<Vec<_>>()
        );
        return Err(ParseError::UnmergedGroup(nodes.len()));
    }

    match nodes.pop() {
        Some(Node::Operand(expr)) => {
            debug!("Group collapsed to {}", expr);
            Ok(expr)
        }
        Some(other) => Err(ParseError::MissingOperand(other.label())),
        None => Err(ParseError::EmptyGroup),
    }
}
