//! Operator precedence and associativity.
//!
//! The binary and unary operators live in one ordered table, lowest binding
//! first. A single precedence-climbing routine walks it; there is no
//! per-level parse function.

use super::ambiguity::end_is_expression;
use super::expressions::{ExpressionParser, parse_primary, skip_nested};
use crate::parser::SyntaxKind;
use crate::parser::errors::{ErrorCode, SyntaxError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
    /// A second operator of the same band in one chain is an error.
    NonAssoc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Prefix,
    Binary,
}

/// One precedence level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub precedence: u8,
    pub operators: &'static [SyntaxKind],
    pub assoc: Assoc,
    pub arity: Arity,
}

const ADDITIVE_OPERATORS: &[SyntaxKind] = &[
    SyntaxKind::PLUS,
    SyntaxKind::MINUS,
    SyntaxKind::DOT_PLUS,
    SyntaxKind::DOT_MINUS,
];

pub const OPERATOR_TABLE: [Band; 8] = [
    Band {
        precedence: 4,
        operators: &[SyntaxKind::OR_KW],
        assoc: Assoc::Left,
        arity: Arity::Binary,
    },
    Band {
        precedence: 5,
        operators: &[SyntaxKind::AND_KW],
        assoc: Assoc::Left,
        arity: Arity::Binary,
    },
    Band {
        precedence: 6,
        operators: &[SyntaxKind::NOT_KW],
        assoc: Assoc::Right,
        arity: Arity::Prefix,
    },
    Band {
        precedence: 7,
        operators: &[
            SyntaxKind::LT,
            SyntaxKind::LT_EQ,
            SyntaxKind::GT,
            SyntaxKind::GT_EQ,
            SyntaxKind::EQ_EQ,
            SyntaxKind::LT_GT,
        ],
        assoc: Assoc::NonAssoc,
        arity: Arity::Binary,
    },
    Band {
        precedence: 8,
        operators: ADDITIVE_OPERATORS,
        assoc: Assoc::Left,
        arity: Arity::Binary,
    },
    Band {
        precedence: 9,
        operators: ADDITIVE_OPERATORS,
        assoc: Assoc::Right,
        arity: Arity::Prefix,
    },
    Band {
        precedence: 10,
        operators: &[
            SyntaxKind::STAR,
            SyntaxKind::SLASH,
            SyntaxKind::DOT_STAR,
            SyntaxKind::DOT_SLASH,
        ],
        assoc: Assoc::Left,
        arity: Arity::Binary,
    },
    Band {
        precedence: 11,
        operators: &[SyntaxKind::CARET, SyntaxKind::DOT_CARET],
        assoc: Assoc::Right,
        arity: Arity::Binary,
    },
];

/// Index of the binary band at or above `min_level` that owns `kind`.
pub fn binary_band(kind: SyntaxKind, min_level: usize) -> Option<usize> {
    OPERATOR_TABLE
        .iter()
        .enumerate()
        .skip(min_level)
        .find(|(_, band)| band.arity == Arity::Binary && band.operators.contains(&kind))
        .map(|(level, _)| level)
}

/// Index of the prefix band that owns `kind`.
pub fn prefix_band(kind: SyntaxKind) -> Option<usize> {
    OPERATOR_TABLE
        .iter()
        .position(|band| band.arity == Arity::Prefix && band.operators.contains(&kind))
}

/// Tokens that can begin a primary expression.
pub fn at_primary_start<P: ExpressionParser>(p: &P) -> bool {
    match p.current_kind() {
        SyntaxKind::UNSIGNED_INTEGER
        | SyntaxKind::UNSIGNED_REAL
        | SyntaxKind::STRING
        | SyntaxKind::TRUE_KW
        | SyntaxKind::FALSE_KW
        | SyntaxKind::IDENT
        | SyntaxKind::DOT
        | SyntaxKind::DER_KW
        | SyntaxKind::INITIAL_KW
        | SyntaxKind::PURE_KW
        | SyntaxKind::L_PAREN
        | SyntaxKind::L_BRACKET
        | SyntaxKind::L_BRACE => true,
        SyntaxKind::END_KW => end_is_expression(p),
        _ => false,
    }
}

/// SimpleExpression = UnaryExpression | BinaryExpression | PrimaryExpression
pub fn parse_simple_expression<P: ExpressionParser>(p: &mut P) {
    parse_band(p, 0);
}

/// Parse an operand whose operators all bind at `min_level` or tighter.
///
/// `BinaryExpression` nodes are built with a checkpoint so the left operand
/// is wrapped after the operator is seen.
pub fn parse_band<P: ExpressionParser>(p: &mut P, min_level: usize) {
    let checkpoint = p.checkpoint();

    match prefix_band(p.current_kind()) {
        Some(level) if level >= min_level => parse_prefix(p, level),
        Some(level) => {
            // `a * -b`: the operand of a tighter band cannot start with a looser prefix.
            let message = format!(
                "prefix {} is not allowed here; wrap the operand in parentheses",
                p.current_kind().display_name()
            );
            p.error(ErrorCode::E0403, message);
            parse_prefix(p, level);
        }
        None => parse_primary(p),
    }

    let mut previous: Option<usize> = None;
    while let Some(level) = binary_band(p.current_kind(), min_level) {
        let band = OPERATOR_TABLE[level];
        if band.assoc == Assoc::NonAssoc && previous == Some(level) {
            p.push_error(
                SyntaxError::builder(ErrorCode::E0407)
                    .range(p.current_range())
                    .found(Some(p.current_kind()))
                    .hint("add parentheses to group the comparison")
                    .build(),
            );
        }
        p.start_node_at(checkpoint, SyntaxKind::BINARY_EXPRESSION);
        p.bump();
        match band.assoc {
            Assoc::Right => parse_nested_band(p, level),
            Assoc::Left | Assoc::NonAssoc => parse_band(p, level + 1),
        }
        p.finish_node();
        previous = Some(level);
    }
}

/// `op operand`, where the operand may use every band from `level` upward.
fn parse_prefix<P: ExpressionParser>(p: &mut P, level: usize) {
    p.start_node(SyntaxKind::UNARY_EXPRESSION);
    p.bump();
    parse_nested_band(p, level);
    p.finish_node();
}

/// Recursion that does not pass through a delimiter still counts toward the nesting bound.
fn parse_nested_band<P: ExpressionParser>(p: &mut P, level: usize) {
    if p.enter_nesting() {
        parse_band(p, level);
    } else {
        skip_nested(p);
    }
    p.exit_nesting();
}
