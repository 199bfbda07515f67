//! Tie-break rules for the grammar's conflict points.
//!
//! A hand-written parser has no generator conflict table, so every place the
//! Modelica grammar is locally ambiguous is decided here by an explicit
//! predicate over the token lookahead, or by the open-construct stack for
//! `elseif` / `else` / `elsewhen` attachment.

use super::expressions::ExpressionParser;
use crate::parser::SyntaxKind;

/// Which clause family a construct belongs to. Clauses never attach across families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Equation,
    Statement,
    Expression,
}

/// Constructs that own `elseif` / `else` / `elsewhen` clauses or an `end` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Construct {
    If,
    When,
    For,
    While,
}

impl Construct {
    /// The keyword that follows `end` when this construct is closed.
    pub fn end_keyword(self) -> SyntaxKind {
        match self {
            Self::If => SyntaxKind::IF_KW,
            Self::When => SyntaxKind::WHEN_KW,
            Self::For => SyntaxKind::FOR_KW,
            Self::While => SyntaxKind::WHILE_KW,
        }
    }
}

/// An entry on the parser's stack of constructs still waiting for their `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpenConstruct {
    pub construct: Construct,
    pub category: Category,
}

impl OpenConstruct {
    pub fn new(construct: Construct, category: Category) -> Self {
        Self { construct, category }
    }
}

/// Outcome of asking who owns a clause keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The innermost open construct owns the clause.
    Attach,
    /// The owner is further out; this many inner constructs must close first.
    Unwind(usize),
    /// No open construct of the right kind exists.
    Orphan,
    /// Reaching the owner would cross a construct of another category.
    Ambiguous,
}

/// The construct kind a clause keyword belongs to.
pub fn clause_owner(clause: SyntaxKind) -> Option<Construct> {
    match clause {
        SyntaxKind::ELSEIF_KW | SyntaxKind::ELSE_KW => Some(Construct::If),
        SyntaxKind::ELSEWHEN_KW => Some(Construct::When),
        _ => None,
    }
}

pub fn is_clause_keyword(kind: SyntaxKind) -> bool {
    clause_owner(kind).is_some()
}

/// Attach `clause`, met in `category` context, to the nearest open construct
/// of the owning kind in the same category.
pub fn resolve_clause(open: &[OpenConstruct], clause: SyntaxKind, category: Category) -> Resolution {
    let Some(owner) = clause_owner(clause) else {
        return Resolution::Orphan;
    };
    for (depth, entry) in open.iter().rev().enumerate() {
        if entry.category != category {
            return if open[..open.len() - depth]
                .iter()
                .any(|e| e.construct == owner && e.category == category)
            {
                Resolution::Ambiguous
            } else {
                Resolution::Orphan
            };
        }
        if entry.construct == owner {
            return if depth == 0 {
                Resolution::Attach
            } else {
                Resolution::Unwind(depth)
            };
        }
    }
    Resolution::Orphan
}

// =============================================================================
// Section boundaries
// =============================================================================

/// `initial` opens a section only when `equation` or `algorithm` follows;
/// otherwise it is the `initial()` operator.
pub fn initial_opens_section<P: ExpressionParser>(p: &P) -> bool {
    p.at(SyntaxKind::INITIAL_KW)
        && matches!(p.nth(1), SyntaxKind::EQUATION_KW | SyntaxKind::ALGORITHM_KW)
}

/// Tokens that close the innermost open section or element list.
pub fn at_section_boundary<P: ExpressionParser>(p: &P) -> bool {
    match p.current_kind() {
        SyntaxKind::EQUATION_KW
        | SyntaxKind::ALGORITHM_KW
        | SyntaxKind::PUBLIC_KW
        | SyntaxKind::PROTECTED_KW
        | SyntaxKind::EXTERNAL_KW
        | SyntaxKind::END_KW
        | SyntaxKind::EOF => true,
        SyntaxKind::ANNOTATION_KW => true,
        SyntaxKind::INITIAL_KW => initial_opens_section(p),
        _ => false,
    }
}

/// `end` inside an expression is `EndExpression` unless it starts the
/// closing `end X;`, `end if;`, `end for;` and so on.
pub fn end_is_expression<P: ExpressionParser>(p: &P) -> bool {
    p.at(SyntaxKind::END_KW)
        && !matches!(
            p.nth(1),
            SyntaxKind::IDENT
                | SyntaxKind::SEMICOLON
                | SyntaxKind::IF_KW
                | SyntaxKind::FOR_KW
                | SyntaxKind::WHEN_KW
                | SyntaxKind::WHILE_KW
                | SyntaxKind::EOF
        )
}

// =============================================================================
// Dotted chains
// =============================================================================

/// How a dotted identifier chain should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainKind {
    Name,
    ComponentReference,
}

/// A `.` continues a chain only when an identifier follows it, so
/// `A.B.*` and `A.B.{c}` stop before the final dot.
pub fn dot_continues_chain<P: ExpressionParser>(p: &P, n: usize) -> bool {
    p.nth(n) == SyntaxKind::DOT && p.nth(n + 1) == SyntaxKind::IDENT
}

/// Read the chain at the cursor as a plain `Name`, unless some segment
/// carries array subscripts, in which case the more specific
/// `ComponentReference` wins.
pub fn classify_chain<P: ExpressionParser>(p: &P) -> ChainKind {
    let mut n = usize::from(p.at(SyntaxKind::DOT));
    if p.nth(n) != SyntaxKind::IDENT {
        return ChainKind::Name;
    }
    loop {
        n += 1;
        if p.nth(n) == SyntaxKind::L_BRACKET {
            return ChainKind::ComponentReference;
        }
        if !dot_continues_chain(p, n) {
            return ChainKind::Name;
        }
        n += 1;
    }
}

/// Lookahead index just past the delimiter group opened at `n`, or `None`
/// when it is never closed.
pub fn skip_balanced<P: ExpressionParser>(p: &P, mut n: usize) -> Option<usize> {
    let mut depth = 0usize;
    loop {
        match p.nth(n) {
            SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET | SyntaxKind::L_BRACE => depth += 1,
            SyntaxKind::R_PAREN | SyntaxKind::R_BRACKET | SyntaxKind::R_BRACE => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(n + 1);
                }
            }
            SyntaxKind::EOF => return None,
            _ => {}
        }
        n += 1;
    }
}

/// Lookahead index just past a component reference starting at `n`.
pub fn component_reference_end<P: ExpressionParser>(p: &P, mut n: usize) -> Option<usize> {
    if p.nth(n) == SyntaxKind::DOT {
        n += 1;
    }
    if p.nth(n) != SyntaxKind::IDENT {
        return None;
    }
    loop {
        n += 1;
        if p.nth(n) == SyntaxKind::L_BRACKET {
            n = skip_balanced(p, n)?;
        }
        if !dot_continues_chain(p, n) {
            return Some(n);
        }
        n += 1;
    }
}

/// `f(args)` followed by a description, `annotation` or `;` is a call used
/// as a whole equation (`SpecialEquation`); anything else starting with a
/// reference is the left side of a `SimpleEquation`.
pub fn is_special_equation<P: ExpressionParser>(p: &P) -> bool {
    let Some(n) = component_reference_end(p, 0) else {
        return false;
    };
    if p.nth(n) != SyntaxKind::L_PAREN {
        return false;
    }
    skip_balanced(p, n).is_some_and(|after| {
        matches!(
            p.nth(after),
            SyntaxKind::SEMICOLON | SyntaxKind::STRING | SyntaxKind::ANNOTATION_KW
        )
    })
}

// =============================================================================
// Choice points in declarations and arguments
// =============================================================================

/// `IDENT =` (but not `IDENT ==`) starts a named argument.
pub fn at_named_argument<P: ExpressionParser>(p: &P) -> bool {
    p.at(SyntaxKind::IDENT) && p.nth(1) == SyntaxKind::EQ
}

/// Pick the class specifier alternative at the cursor.
pub fn classify_class_specifier<P: ExpressionParser>(p: &P) -> SyntaxKind {
    if p.at(SyntaxKind::IDENT) && p.nth(1) == SyntaxKind::EQ {
        if p.nth(2) == SyntaxKind::DER_KW && p.nth(3) == SyntaxKind::L_PAREN {
            SyntaxKind::DER_CLASS_SPECIFIER
        } else {
            SyntaxKind::SHORT_CLASS_SPECIFIER
        }
    } else {
        SyntaxKind::LONG_CLASS_SPECIFIER
    }
}

/// Pick the import clause alternative at the cursor (positioned on `import`).
///
/// The lexer reads `.*` as the elementwise operator, so `A.*` arrives as
/// `A` followed by a single `DOT_STAR` token.
pub fn classify_import<P: ExpressionParser>(p: &P) -> SyntaxKind {
    if p.nth(1) == SyntaxKind::IDENT && p.nth(2) == SyntaxKind::EQ {
        return SyntaxKind::SIMPLE_IMPORT_CLAUSE;
    }
    let mut n = 1;
    if p.nth(n) != SyntaxKind::IDENT {
        return SyntaxKind::SIMPLE_IMPORT_CLAUSE;
    }
    while dot_continues_chain(p, n + 1) {
        n += 2;
    }
    match (p.nth(n + 1), p.nth(n + 2)) {
        (SyntaxKind::DOT_STAR, _) | (SyntaxKind::DOT, SyntaxKind::STAR) => {
            SyntaxKind::UNQUALIFIED_IMPORT_CLAUSE
        }
        (SyntaxKind::DOT, SyntaxKind::L_BRACE) => SyntaxKind::COMPOUND_IMPORT_CLAUSE,
        _ => SyntaxKind::SIMPLE_IMPORT_CLAUSE,
    }
}

/// Keywords that can start `ClassPrefixes`.
pub const CLASS_PREFIX_START: &[SyntaxKind] = &[
    SyntaxKind::PARTIAL_KW,
    SyntaxKind::CLASS_KW,
    SyntaxKind::MODEL_KW,
    SyntaxKind::OPERATOR_KW,
    SyntaxKind::RECORD_KW,
    SyntaxKind::BLOCK_KW,
    SyntaxKind::EXPANDABLE_KW,
    SyntaxKind::CONNECTOR_KW,
    SyntaxKind::TYPE_KW,
    SyntaxKind::PACKAGE_KW,
    SyntaxKind::PURE_KW,
    SyntaxKind::IMPURE_KW,
    SyntaxKind::FUNCTION_KW,
];

/// Tokens that can start a component clause.
pub const COMPONENT_CLAUSE_START: &[SyntaxKind] = &[
    SyntaxKind::FLOW_KW,
    SyntaxKind::STREAM_KW,
    SyntaxKind::DISCRETE_KW,
    SyntaxKind::PARAMETER_KW,
    SyntaxKind::CONSTANT_KW,
    SyntaxKind::INPUT_KW,
    SyntaxKind::OUTPUT_KW,
    SyntaxKind::IDENT,
    SyntaxKind::DOT,
];

/// After `redeclare` / `replaceable` and their modifiers: a short class
/// definition starts with a class prefix, anything else is a component clause.
pub fn at_short_class_definition<P: ExpressionParser>(p: &P) -> bool {
    p.at_any(CLASS_PREFIX_START)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eq(construct: Construct) -> OpenConstruct {
        OpenConstruct::new(construct, Category::Equation)
    }

    #[test]
    fn test_clause_attaches_to_innermost_if() {
        let open = [eq(Construct::If), eq(Construct::If)];
        assert_eq!(
            resolve_clause(&open, SyntaxKind::ELSE_KW, Category::Equation),
            Resolution::Attach
        );
    }

    #[test]
    fn test_elsewhen_unwinds_past_if() {
        let open = [eq(Construct::When), eq(Construct::For), eq(Construct::If)];
        assert_eq!(
            resolve_clause(&open, SyntaxKind::ELSEWHEN_KW, Category::Equation),
            Resolution::Unwind(2)
        );
    }

    #[test]
    fn test_elseif_never_attaches_to_when() {
        let open = [eq(Construct::When)];
        assert_eq!(
            resolve_clause(&open, SyntaxKind::ELSEIF_KW, Category::Equation),
            Resolution::Orphan
        );
    }

    #[test]
    fn test_orphan_at_section_level() {
        assert_eq!(
            resolve_clause(&[], SyntaxKind::ELSE_KW, Category::Statement),
            Resolution::Orphan
        );
    }

    #[test]
    fn test_crossing_categories_is_ambiguous() {
        let open = [
            eq(Construct::If),
            OpenConstruct::new(Construct::If, Category::Statement),
        ];
        assert_eq!(
            resolve_clause(&open, SyntaxKind::ELSE_KW, Category::Equation),
            Resolution::Ambiguous
        );
    }

    #[test]
    fn test_crossing_categories_without_owner_is_orphan() {
        let open = [
            eq(Construct::When),
            OpenConstruct::new(Construct::If, Category::Expression),
        ];
        assert_eq!(
            resolve_clause(&open, SyntaxKind::ELSE_KW, Category::Equation),
            Resolution::Orphan
        );
    }
}
