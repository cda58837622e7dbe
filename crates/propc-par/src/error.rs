//! The parser's closed error enumeration.

use thiserror::Error;

use crate::ast::AstError;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("Input consists of only whitespace")]
    EmptyInput,
    #[error("Unexpected token")]
    UnexpectedToken,
    #[error("Expected an operand, found end of input")]
    IncompleteExpression,
    #[error("Variable name exceeds the supported length")]
    VariableNameTooLarge,
    #[error(transparent)]
    Ast(#[from] AstError),
    #[error(transparent)]
    Context(#[from] propc_util::ContextError),
}

pub type ParseResult<T> = std::result::Result<T, ParseError>;
