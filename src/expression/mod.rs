//! Expression tree, evaluation and canonical rendering

mod ast;
mod display;
mod errors;
mod eval;

pub use ast::{BinaryOp, Expression};
pub use errors::ExpressionError;
