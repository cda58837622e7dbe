//! Operator priority and the `should_combine_left` fold decision.
//!
//! This module knows nothing about tokens or the scanner; it operates on
//! the abstract [`Operator`] the parser derives from a token kind. Keeping
//! it free of [`propc_lex::TokenKind`] is what lets `should_combine_left`
//! stay a pure function over two small enums.

/// The operators the parser folds, plus `Top`, the sentinel `left_operator`
/// used for the outermost call where no enclosing operator exists yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Top,
    Negation,
    Conjunction,
    ExclusiveDisjunction,
    Disjunction,
    Implication,
    Biconditional,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

impl Operator {
    /// Lower binds tighter. `Top` is deliberately looser than every real
    /// operator so the outermost frame never stops folding early.
    pub const fn priority(self) -> u8 {
        match self {
            Operator::Negation => 1,
            Operator::Conjunction => 2,
            Operator::ExclusiveDisjunction => 3,
            Operator::Disjunction => 4,
            Operator::Implication => 5,
            Operator::Biconditional => 6,
            Operator::Top => u8::MAX,
        }
    }

    pub const fn associativity(self) -> Associativity {
        match self {
            Operator::Negation | Operator::Implication => Associativity::Right,
            _ => Associativity::Left,
        }
    }
}

/// True when the frame holding `left` should stop and hand `next_op` back
/// to its caller rather than fold it in. Folding happens when this returns
/// `false`.
pub fn should_combine_left(left: Operator, next_op: Operator) -> bool {
    let (lp, rp) = (left.priority(), next_op.priority());
    if lp < rp {
        true
    } else if lp == rp && left.associativity() == Associativity::Left {
        true
    } else {
        false
    }
}
