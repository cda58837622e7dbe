//! Worked parse-tree examples and error-path tests.

use crate::{parse, Ast, BinaryNode, ParseError};
use propc_util::Context;
use quickcheck::{Arbitrary, Gen};

fn parse_ok(input: &str) -> (Ast, Context) {
    let mut ctx = Context::new();
    let ast = parse(input, &mut ctx).expect("expected a successful parse");
    (ast, ctx)
}

fn variable_id(ast: &Ast) -> u32 {
    match ast {
        Ast::Variable(id) => id.as_u32(),
        other => panic!("expected a Variable node, got {other:?}"),
    }
}

#[test]
fn single_variable_wraps_in_a_statement() {
    let (ast, _) = parse_ok("x");
    match ast {
        Ast::Statement(inner) => assert_eq!(variable_id(&inner), 0),
        other => panic!("expected Statement, got {other:?}"),
    }
}

#[test]
fn negation_wraps_its_operand() {
    let (ast, _) = parse_ok("\u{00AC}x");
    match ast {
        Ast::Statement(inner) => match *inner {
            Ast::Negation(operand) => assert_eq!(variable_id(&operand), 0),
            other => panic!("expected Negation, got {other:?}"),
        },
        other => panic!("expected Statement, got {other:?}"),
    }
}

#[test]
fn conjunction_builds_a_binary_node() {
    let (ast, ctx) = parse_ok("x\u{2227}y");
    match ast {
        Ast::Statement(inner) => match *inner {
            Ast::Conjunction(BinaryNode { lhs, rhs }) => {
                assert_eq!(variable_id(&lhs), 0);
                assert_eq!(variable_id(&rhs), 1);
            }
            other => panic!("expected Conjunction, got {other:?}"),
        },
        other => panic!("expected Statement, got {other:?}"),
    }
    assert_eq!(ctx.len(), 2);
}

#[test]
fn disjunction_then_conjunction_binds_conjunction_tighter() {
    // x ∨ y ∧ z  =>  Disjunction(x, Conjunction(y, z))
    let (ast, _) = parse_ok("x\u{2228}y\u{2227}z");
    match ast {
        Ast::Statement(inner) => match *inner {
            Ast::Disjunction(BinaryNode { lhs, rhs }) => {
                assert_eq!(variable_id(&lhs), 0);
                match *rhs {
                    Ast::Conjunction(BinaryNode { lhs, rhs }) => {
                        assert_eq!(variable_id(&lhs), 1);
                        assert_eq!(variable_id(&rhs), 2);
                    }
                    other => panic!("expected Conjunction on the right, got {other:?}"),
                }
            }
            other => panic!("expected Disjunction, got {other:?}"),
        },
        other => panic!("expected Statement, got {other:?}"),
    }
}

#[test]
fn conjunction_then_disjunction_binds_conjunction_tighter_on_the_left() {
    // x ∧ y ∨ z  =>  Disjunction(Conjunction(x, y), z)
    let (ast, _) = parse_ok("x\u{2227}y\u{2228}z");
    match ast {
        Ast::Statement(inner) => match *inner {
            Ast::Disjunction(BinaryNode { lhs, rhs }) => {
                assert_eq!(variable_id(&rhs), 2);
                match *lhs {
                    Ast::Conjunction(BinaryNode { lhs, rhs }) => {
                        assert_eq!(variable_id(&lhs), 0);
                        assert_eq!(variable_id(&rhs), 1);
                    }
                    other => panic!("expected Conjunction on the left, got {other:?}"),
                }
            }
            other => panic!("expected Disjunction, got {other:?}"),
        },
        other => panic!("expected Statement, got {other:?}"),
    }
}

#[test]
fn implication_chain_is_right_associative() {
    // x → y → z  =>  Implication(x, Implication(y, z))
    let (ast, _) = parse_ok("x\u{2192}y\u{2192}z");
    match ast {
        Ast::Statement(inner) => match *inner {
            Ast::Implication(BinaryNode { lhs, rhs }) => {
                assert_eq!(variable_id(&lhs), 0);
                match *rhs {
                    Ast::Implication(BinaryNode { lhs, rhs }) => {
                        assert_eq!(variable_id(&lhs), 1);
                        assert_eq!(variable_id(&rhs), 2);
                    }
                    other => panic!("expected nested Implication, got {other:?}"),
                }
            }
            other => panic!("expected Implication, got {other:?}"),
        },
        other => panic!("expected Statement, got {other:?}"),
    }
}

#[test]
fn conjunction_chain_is_left_associative() {
    // x ∧ y ∧ z  =>  Conjunction(Conjunction(x, y), z)
    let (ast, _) = parse_ok("x\u{2227}y\u{2227}z");
    match ast {
        Ast::Statement(inner) => match *inner {
            Ast::Conjunction(BinaryNode { lhs, rhs }) => {
                assert_eq!(variable_id(&rhs), 2);
                match *lhs {
                    Ast::Conjunction(BinaryNode { lhs, rhs }) => {
                        assert_eq!(variable_id(&lhs), 0);
                        assert_eq!(variable_id(&rhs), 1);
                    }
                    other => panic!("expected nested Conjunction, got {other:?}"),
                }
            }
            other => panic!("expected Conjunction, got {other:?}"),
        },
        other => panic!("expected Statement, got {other:?}"),
    }
}

#[test]
fn repeated_variable_reuses_its_id() {
    let (ast, ctx) = parse_ok("x\u{2227}x");
    match ast {
        Ast::Statement(inner) => match *inner {
            Ast::Conjunction(BinaryNode { lhs, rhs }) => {
                assert_eq!(variable_id(&lhs), variable_id(&rhs));
            }
            other => panic!("expected Conjunction, got {other:?}"),
        },
        other => panic!("expected Statement, got {other:?}"),
    }
    assert_eq!(ctx.len(), 1);
}

#[test]
fn empty_input_is_empty_input_error() {
    let mut ctx = Context::new();
    assert_eq!(parse("", &mut ctx), Err(ParseError::EmptyInput));
}

#[test]
fn whitespace_only_input_is_empty_input_error() {
    let mut ctx = Context::new();
    assert_eq!(parse("  \t\n ", &mut ctx), Err(ParseError::EmptyInput));
}

#[test]
fn leading_operator_is_unexpected_token() {
    let mut ctx = Context::new();
    assert_eq!(
        parse("\u{2227}x", &mut ctx),
        Err(ParseError::UnexpectedToken)
    );
}

#[test]
fn semicolon_as_first_token_is_unexpected_token() {
    let mut ctx = Context::new();
    assert_eq!(parse(";", &mut ctx), Err(ParseError::UnexpectedToken));
}

#[test]
fn boolean_literal_as_first_token_is_unexpected_token() {
    // Primary-expression parsing only recognises variables and negation;
    // boolean literals are part of the AST's closed node set but have no
    // parser path yet, matching true/false's absence from this version's
    // accepted grammar.
    let mut ctx = Context::new();
    assert_eq!(parse("true", &mut ctx), Err(ParseError::UnexpectedToken));
}

#[test]
fn trailing_operator_with_no_operand_is_incomplete_expression() {
    let mut ctx = Context::new();
    assert_eq!(
        parse("x\u{2227}", &mut ctx),
        Err(ParseError::IncompleteExpression)
    );
}

#[test]
fn negation_with_no_operand_is_incomplete_expression() {
    let mut ctx = Context::new();
    assert_eq!(
        parse("\u{00AC}", &mut ctx),
        Err(ParseError::IncompleteExpression)
    );
}

#[test]
fn operator_where_operand_expected_is_unexpected_token() {
    let mut ctx = Context::new();
    assert_eq!(
        parse("x\u{2227}\u{2228}y", &mut ctx),
        Err(ParseError::UnexpectedToken)
    );
}

#[test]
fn variable_name_over_the_limit_is_rejected() {
    let long_name = "a".repeat(1025);
    let mut ctx = Context::new();
    assert_eq!(
        parse(&long_name, &mut ctx),
        Err(ParseError::VariableNameTooLarge)
    );
}

#[test]
fn variable_name_at_the_limit_is_accepted() {
    let name = "a".repeat(1024);
    let mut ctx = Context::new();
    assert!(parse(&name, &mut ctx).is_ok());
}

#[test]
fn parsing_stops_after_one_statement_and_leaves_the_rest_unconsumed() {
    // parse() builds exactly one Statement; it never requires reaching Eof.
    let (ast, _) = parse_ok("x y");
    match ast {
        Ast::Statement(inner) => assert_eq!(variable_id(&inner), 0),
        other => panic!("expected Statement, got {other:?}"),
    }
}

/// A syntactically valid propositional-logic formula, generated for the
/// quickcheck property below. Recursion depth is bounded by `g.size()` so
/// shrinking still terminates.
#[derive(Clone, Debug)]
struct ValidFormula(String);

impl Arbitrary for ValidFormula {
    fn arbitrary(g: &mut Gen) -> Self {
        let depth = (g.size() % 4) as u32;
        ValidFormula(generate_formula(g, depth))
    }
}

fn generate_formula(g: &mut Gen, depth: u32) -> String {
    const VARS: &[&str] = &["x", "y", "z", "w"];
    const BINARY_GLYPHS: &[&str] = &["\u{2227}", "\u{2228}", "\u{22BB}", "\u{2192}", "\u{2194}"];

    if depth == 0 || bool::arbitrary(g) {
        let name = g.choose(VARS).expect("VARS is non-empty");
        return (*name).to_string();
    }
    if bool::arbitrary(g) {
        return format!("\u{00AC}{}", generate_formula(g, depth - 1));
    }
    let glyph = g.choose(BINARY_GLYPHS).expect("BINARY_GLYPHS is non-empty");
    format!(
        "{}{}{}",
        generate_formula(g, depth - 1),
        glyph,
        generate_formula(g, depth - 1)
    )
}

/// True if `ast` contains an `Assignment` node whose `lhs` is not a
/// `Variable`. `parse` never actually builds `Assignment` nodes (see
/// `crate::ast`'s module docs), so this always walks to `false` for a
/// `parse`-produced tree today, but the walk is written generically so it
/// stays correct if a future grammar extension adds an assignment primary.
fn has_ill_formed_assignment(ast: &Ast) -> bool {
    match ast {
        Ast::Variable(_) | Ast::BooleanLiteral(_) => false,
        Ast::Negation(inner) | Ast::Statement(inner) => has_ill_formed_assignment(inner),
        Ast::Assignment(BinaryNode { lhs, rhs }) => {
            !matches!(**lhs, Ast::Variable(_)) || has_ill_formed_assignment(rhs)
        }
        Ast::Conjunction(node)
        | Ast::Disjunction(node)
        | Ast::ExclusiveDisjunction(node)
        | Ast::Implication(node)
        | Ast::Biconditional(node) => {
            has_ill_formed_assignment(&node.lhs) || has_ill_formed_assignment(&node.rhs)
        }
        Ast::StatementList(statements) => statements.iter().any(has_ill_formed_assignment),
    }
}

#[quickcheck_macros::quickcheck]
fn every_successful_parse_is_a_well_formed_statement(formula: ValidFormula) -> bool {
    // spec §8 property 6: the root is always a Statement, and its subtree
    // never contains an Assignment node whose lhs is not a Variable.
    let mut ctx = Context::new();
    match parse(&formula.0, &mut ctx) {
        Ok(Ast::Statement(inner)) => !has_ill_formed_assignment(&inner),
        Ok(other) => {
            panic!("parse root was not a Statement: {other:?}")
        }
        Err(err) => panic!("expected {:?} to parse, got {err:?}", formula.0),
    }
}
