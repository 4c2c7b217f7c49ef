//! Expression compiler: formula text to an evaluable function.
//!
//! The grammar is infix arithmetic over `+ - * /`, with `^` (or `**`) as
//! power, parentheses, numeric literals, named constants, and calls into a
//! fixed numeric library that includes `logb(value, base)`.
//!
//! Pipeline: lex -> Pratt parse -> resolve names -> [`CompiledFn`].

mod ast;
mod compile;
mod lexer;
mod library;
mod parser;

pub use ast::{BinaryOp, Expr};
pub use compile::CompiledFn;

use crate::error::ParseError;

/// Parse formula text into an unresolved expression tree.
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    let tokens = lexer::lex(input)?;
    parser::parse_tokens(&tokens)
}

/// Compile formula text with `variable` as the free variable.
///
/// # Errors
/// Returns [`ParseError`] for malformed text, unknown names, or library
/// calls with the wrong argument count.
pub fn compile(input: &str, variable: &str) -> Result<CompiledFn, ParseError> {
    let expr = parse(input)?;
    CompiledFn::from_expr(&expr, variable)
}
