//! propc-par — the parser: drives [`propc_lex::Scanner`] and
//! [`propc_util::Context`] to build a typed AST for propositional-logic
//! expressions.
//!
//! # Precedence climbing
//!
//! `parse_expression` is parameterised by the `left_operator` in scope: the
//! operator (or the `Top` sentinel, for the outermost call) that bounds how
//! far this frame is allowed to fold. A single recursive function handles
//! every connective — the duplication a hand-written `_from_conjunction`,
//! `_from_disjunction`, ... family would otherwise need collapses once
//! operators are data fed through [`precedence::should_combine_left`].
//!
//! # Fail-fast, full unwind
//!
//! There is no error recovery: the first unexpected token aborts parsing.
//! Every partially built node lives in a `Box`/`Vec` owned by the call that
//! is unwinding, so a `?` out of any parsing function drops its already-built
//! children automatically — the manual `goto cleanup_*` chains a GC-less,
//! destructor-less language needs for the same guarantee are not needed here.

mod ast;
mod error;
mod precedence;

pub use ast::{Ast, AstError, BinaryNode};
pub use error::{ParseError, ParseResult};
pub use precedence::{Associativity, Operator};

use propc_lex::{Scanner, Token, TokenKind};
use propc_util::{Context, VariableGetFlags};

use precedence::should_combine_left;

/// Variable names longer than this are rejected with
/// [`ParseError::VariableNameTooLarge`] rather than materialised.
const MAX_VARIABLE_NAME_LEN: usize = 1024;

/// Parses `input` against `context`, returning the `Statement` root that
/// wraps the single top-level expression.
///
/// Reads the first token and dispatches on it: `Eof` is `EmptyInput`,
/// `Variable`/`Negation` start an expression, anything else is
/// `UnexpectedToken`. On any error nothing from this call outlives the
/// `Err`: the scanner is a local, and the partially built AST is dropped
/// along with the `Result` that carried it.
pub fn parse(input: &str, context: &mut Context) -> ParseResult<Ast> {
    let mut parser = Parser::new(input, context);
    let first = parser.scanner.peek_token();
    match first.kind {
        TokenKind::Eof => Err(ParseError::EmptyInput),
        TokenKind::Variable | TokenKind::Negation => {
            let expr = parser.parse_expression(Operator::Top)?;
            Ok(Ast::Statement(Box::new(expr)))
        }
        _ => Err(ParseError::UnexpectedToken),
    }
}

struct Parser<'a> {
    scanner: Scanner<'a>,
    input: &'a str,
    context: &'a mut Context,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, context: &'a mut Context) -> Self {
        Self {
            scanner: Scanner::new(input),
            input,
            context,
        }
    }

    /// Reads one primary: a variable, or a negation that itself wraps one
    /// following expression. Anything else is an error — `Eof` means an
    /// operand was expected and the input ran out; any other non-primary
    /// token means an operator (or other non-operand) sat where an operand
    /// was expected.
    fn parse_primary(&mut self) -> ParseResult<Ast> {
        let token = self.scanner.read_token();
        match token.kind {
            TokenKind::Variable => self.materialize_variable(token),
            TokenKind::Negation => {
                let operand = self.parse_expression(Operator::Negation)?;
                Ok(Ast::Negation(Box::new(operand)))
            }
            TokenKind::Eof => Err(ParseError::IncompleteExpression),
            _ => Err(ParseError::UnexpectedToken),
        }
    }

    /// Parses one primary, then folds in binary operators whose priority
    /// `left_operator` permits, looping until the next token is not a
    /// binary operator or `should_combine_left` says to hand it back up.
    fn parse_expression(&mut self, left_operator: Operator) -> ParseResult<Ast> {
        let mut lhs = self.parse_primary()?;
        loop {
            let next = self.scanner.peek_token();
            if !next.kind.is_binary_operator() {
                return Ok(lhs);
            }
            let next_operator = operator_of_binary(next.kind);
            if should_combine_left(left_operator, next_operator) {
                return Ok(lhs);
            }
            self.scanner.read_token();
            let rhs = self.parse_expression(next_operator)?;
            lhs = build_binary(next.kind, lhs, rhs);
        }
    }

    fn materialize_variable(&mut self, token: Token) -> ParseResult<Ast> {
        let name = &self.input[token.span.begin.index..=token.span.end.index];
        if name.len() > MAX_VARIABLE_NAME_LEN {
            return Err(ParseError::VariableNameTooLarge);
        }
        let id = self.context.variable_get(name, VariableGetFlags::DEFAULT)?;
        Ok(Ast::Variable(id))
    }
}

fn operator_of_binary(kind: TokenKind) -> Operator {
    match kind {
        TokenKind::Conjunction => Operator::Conjunction,
        TokenKind::ExclusiveDisjunction => Operator::ExclusiveDisjunction,
        TokenKind::Disjunction => Operator::Disjunction,
        TokenKind::Implication => Operator::Implication,
        TokenKind::Biconditional => Operator::Biconditional,
        _ => unreachable!("caller already checked TokenKind::is_binary_operator"),
    }
}

fn build_binary(kind: TokenKind, lhs: Ast, rhs: Ast) -> Ast {
    let node = BinaryNode::new(lhs, rhs);
    match kind {
        TokenKind::Conjunction => Ast::Conjunction(node),
        TokenKind::Disjunction => Ast::Disjunction(node),
        TokenKind::ExclusiveDisjunction => Ast::ExclusiveDisjunction(node),
        TokenKind::Implication => Ast::Implication(node),
        TokenKind::Biconditional => Ast::Biconditional(node),
        _ => unreachable!("caller already checked TokenKind::is_binary_operator"),
    }
}

#[cfg(test)]
mod edge_cases;
