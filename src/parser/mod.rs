//! Tokenizer, group-aware parser and precedence resolver

mod collapse;
mod errors;
mod grammar;
mod token;

pub use collapse::{Node, collapse};
pub use errors::ParseError;
pub use grammar::{Expecting, parse};
pub use token::Token;
