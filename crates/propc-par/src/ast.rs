//! AST node definitions for parsed propositional-logic expressions.
//!
//! Every non-leaf variant owns its children outright; dropping a node
//! recursively drops its subtree, which is what the release-by-kind
//! dispatch a tagged union needs in a language without destructors
//! collapses to here.

use propc_util::{Context, VariableGetFlags, VariableId};

/// Two owned operands, shared by every binary connective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryNode {
    pub lhs: Box<Ast>,
    pub rhs: Box<Ast>,
}

impl BinaryNode {
    pub fn new(lhs: Ast, rhs: Ast) -> Self {
        Self {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }
}

/// A parsed propositional-logic node.
///
/// `BooleanLiteral`, `Assignment`, and `StatementList` are part of the
/// closed node set and support construction/release like every other
/// variant, but [`crate::parse`] never produces them: its primary-expression
/// rule only recognises variables and negation, matching the form
/// grammar silence on literals, parentheses, and assignment at this stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ast {
    Variable(VariableId),
    BooleanLiteral(bool),
    Negation(Box<Ast>),
    Conjunction(BinaryNode),
    Disjunction(BinaryNode),
    ExclusiveDisjunction(BinaryNode),
    Implication(BinaryNode),
    Biconditional(BinaryNode),
    Assignment(BinaryNode),
    Statement(Box<Ast>),
    StatementList(Vec<Ast>),
}

/// Errors raised by the fallible AST constructors. `UnsupportedAstNodeType`
/// is part of the closed error set but unreachable here: `Ast` is a closed
/// Rust enum and its `Drop` impl handles every variant, so there is no
/// runtime dispatch-on-kind step that can fail as it would in a tagged
/// union walked by hand.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AstError {
    #[error("Assignment left-hand side must be a variable")]
    LeftHandSideMustBeVariable,
    #[error("Statement list push expects a Statement child")]
    ChildMustBeStatement,
    #[error("Push target is not a StatementList node")]
    ListNodeMustBeStatementList,
    #[error("Unsupported AST node kind during release")]
    UnsupportedAstNodeType,
}

impl Ast {
    /// Builds an `Assignment` node. Fails unless `lhs` is a `Variable`.
    pub fn new_assignment(lhs: Ast, rhs: Ast) -> Result<Ast, AstError> {
        if !matches!(lhs, Ast::Variable(_)) {
            return Err(AstError::LeftHandSideMustBeVariable);
        }
        Ok(Ast::Assignment(BinaryNode::new(lhs, rhs)))
    }

    /// Creates an empty statement list.
    pub fn new_statement_list() -> Ast {
        Ast::StatementList(Vec::new())
    }

    /// Prepends `statement` to a `StatementList`, mirroring the
    /// linked-list `push` that prepends and transfers ownership.
    pub fn push_statement(&mut self, statement: Ast) -> Result<(), AstError> {
        if !matches!(statement, Ast::Statement(_)) {
            return Err(AstError::ChildMustBeStatement);
        }
        match self {
            Ast::StatementList(statements) => {
                statements.insert(0, statement);
                Ok(())
            }
            _ => Err(AstError::ListNodeMustBeStatementList),
        }
    }
}
