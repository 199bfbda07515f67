//! Block constructs shared by equations and statements
//!
//! `if`, `when` and `for` have the same shape in both sections; only the
//! node kinds and the item parser differ. Clause attachment and `end`
//! matching go through the open-construct stack.

use rowan::TextRange;

use super::ambiguity::{
    Category, Construct, OpenConstruct, Resolution, at_section_boundary, clause_owner,
    is_clause_keyword, resolve_clause,
};
use super::classes::ModelicaParser;
use super::expressions::{ExpressionParser, parse_expression, parse_for_index};
use super::{comma_sep1, equations, parse_comment, repeat_until, statements};
use crate::parser::SyntaxKind;
use crate::parser::errors::{ErrorCode, SyntaxError};

/// Which section a block belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Equation,
    Statement,
}

impl Family {
    pub fn category(self) -> Category {
        match self {
            Self::Equation => Category::Equation,
            Self::Statement => Category::Statement,
        }
    }

    fn if_kind(self) -> SyntaxKind {
        match self {
            Self::Equation => SyntaxKind::IF_EQUATION,
            Self::Statement => SyntaxKind::IF_STATEMENT,
        }
    }

    fn else_if_kind(self) -> SyntaxKind {
        match self {
            Self::Equation => SyntaxKind::ELSE_IF_EQUATION_CLAUSE,
            Self::Statement => SyntaxKind::ELSE_IF_STATEMENT_CLAUSE,
        }
    }

    fn else_kind(self) -> SyntaxKind {
        match self {
            Self::Equation => SyntaxKind::ELSE_EQUATION_CLAUSE,
            Self::Statement => SyntaxKind::ELSE_STATEMENT_CLAUSE,
        }
    }

    fn when_kind(self) -> SyntaxKind {
        match self {
            Self::Equation => SyntaxKind::WHEN_EQUATION,
            Self::Statement => SyntaxKind::WHEN_STATEMENT,
        }
    }

    fn else_when_kind(self) -> SyntaxKind {
        match self {
            Self::Equation => SyntaxKind::ELSE_WHEN_EQUATION_CLAUSE,
            Self::Statement => SyntaxKind::ELSE_WHEN_STATEMENT_CLAUSE,
        }
    }

    fn for_kind(self) -> SyntaxKind {
        match self {
            Self::Equation => SyntaxKind::FOR_EQUATION,
            Self::Statement => SyntaxKind::FOR_STATEMENT,
        }
    }

    fn parse_item<P: ModelicaParser>(self, p: &mut P) {
        match self {
            Self::Equation => equations::parse_equation(p),
            Self::Statement => statements::parse_statement(p),
        }
    }
}

/// A block body ends at `end`, a section boundary, or a clause keyword that
/// an open construct of this family claims.
pub fn body_ends<P: ExpressionParser>(p: &P, family: Family) -> bool {
    if at_section_boundary(p) {
        return true;
    }
    let kind = p.current_kind();
    is_clause_keyword(kind)
        && matches!(
            resolve_clause(p.open_constructs(), kind, family.category()),
            Resolution::Attach | Resolution::Unwind(_)
        )
}

/// Items of `family` up to the end of the enclosing block.
pub fn parse_body<P: ModelicaParser>(p: &mut P, family: Family) {
    repeat_until(p, |p: &P| body_ends(p, family), |p| family.parse_item(p));
}

/// Items of `family` up to the end of the section. An `end if;` with no
/// open `if` is reported here rather than closing the section.
pub fn parse_section_body<P: ModelicaParser>(p: &mut P, family: Family) {
    repeat_until(
        p,
        |p: &P| body_ends(p, family) && !at_stray_end(p),
        |p| {
            if at_stray_end(p) {
                stray_end(p);
            } else {
                family.parse_item(p);
            }
        },
    );
}

/// IfEquation / IfStatement = 'if' Expression 'then' Item*
///     ElseIfClause* ElseClause? 'end' 'if' DescriptionString? AnnotationClause? ';'
pub fn parse_if_block<P: ModelicaParser>(p: &mut P, family: Family) {
    let opened = p.current_range();
    p.start_node(family.if_kind());
    p.bump(); // if
    parse_expression(p);
    p.expect(SyntaxKind::THEN_KW);

    p.open_construct(OpenConstruct::new(Construct::If, family.category()));
    parse_body(p, family);

    let mut seen_else = false;
    loop {
        let kind = p.current_kind();
        if !is_clause_keyword(kind)
            || resolve_clause(p.open_constructs(), kind, family.category()) != Resolution::Attach
        {
            break;
        }
        match kind {
            _ if seen_else => {
                p.error(
                    ErrorCode::E0901,
                    format!("{} after `else` in the same `if`", kind.display_name()),
                );
                clause_head_as_error(p, kind);
                parse_body(p, family);
            }
            SyntaxKind::ELSEIF_KW => {
                p.start_node(family.else_if_kind());
                p.bump();
                parse_expression(p);
                p.expect(SyntaxKind::THEN_KW);
                parse_body(p, family);
                p.finish_node();
            }
            SyntaxKind::ELSE_KW => {
                p.start_node(family.else_kind());
                p.bump();
                parse_body(p, family);
                p.finish_node();
                seen_else = true;
            }
            _ => break,
        }
    }
    p.close_construct();

    finish_block(p, Construct::If, opened);
    p.finish_node();
}

/// WhenEquation / WhenStatement = 'when' Expression 'then' Item*
///     ElseWhenClause* 'end' 'when' DescriptionString? AnnotationClause? ';'
pub fn parse_when_block<P: ModelicaParser>(p: &mut P, family: Family) {
    let opened = p.current_range();
    p.start_node(family.when_kind());
    p.bump(); // when
    parse_expression(p);
    p.expect(SyntaxKind::THEN_KW);

    p.open_construct(OpenConstruct::new(Construct::When, family.category()));
    parse_body(p, family);

    while p.at(SyntaxKind::ELSEWHEN_KW)
        && resolve_clause(p.open_constructs(), SyntaxKind::ELSEWHEN_KW, family.category())
            == Resolution::Attach
    {
        p.start_node(family.else_when_kind());
        p.bump();
        parse_expression(p);
        p.expect(SyntaxKind::THEN_KW);
        parse_body(p, family);
        p.finish_node();
    }
    p.close_construct();

    finish_block(p, Construct::When, opened);
    p.finish_node();
}

/// ForEquation / ForStatement = 'for' ForIndex (',' ForIndex)* 'loop' Item*
///     'end' 'for' DescriptionString? AnnotationClause? ';'
pub fn parse_for_block<P: ModelicaParser>(p: &mut P, family: Family) {
    let opened = p.current_range();
    p.start_node(family.for_kind());
    p.bump(); // for
    comma_sep1(p, SyntaxKind::COMMA, parse_for_index);
    p.expect(SyntaxKind::LOOP_KW);

    p.open_construct(OpenConstruct::new(Construct::For, family.category()));
    parse_body(p, family);
    p.close_construct();

    finish_block(p, Construct::For, opened);
    p.finish_node();
}

/// WhileStatement = 'while' Expression 'loop' Statement*
///     'end' 'while' DescriptionString? AnnotationClause? ';'
pub fn parse_while_statement<P: ModelicaParser>(p: &mut P) {
    let opened = p.current_range();
    p.start_node(SyntaxKind::WHILE_STATEMENT);
    p.bump(); // while
    parse_expression(p);
    p.expect(SyntaxKind::LOOP_KW);

    p.open_construct(OpenConstruct::new(Construct::While, Category::Statement));
    parse_body(p, Family::Statement);
    p.close_construct();

    finish_block(p, Construct::While, opened);
    p.finish_node();
}

/// `end X` followed by the common comment tail and `;`.
fn finish_block<P: ExpressionParser>(p: &mut P, construct: Construct, opened: TextRange) {
    if parse_end(p, construct, opened) {
        parse_comment(p);
        p.expect(SyntaxKind::SEMICOLON);
    }
}

/// Consume `end X` for `construct`. Returns false when the `end` is missing
/// or belongs to something further out, in which case nothing is consumed.
pub fn parse_end<P: ExpressionParser>(p: &mut P, construct: Construct, opened: TextRange) -> bool {
    let keyword = construct.end_keyword();
    if !p.at(SyntaxKind::END_KW) {
        missing_end(p, keyword, opened);
        return false;
    }

    let target = p.nth(1);
    if target == keyword {
        p.bump();
        p.bump();
        return true;
    }

    let claimed_further_out = match target {
        SyntaxKind::IF_KW | SyntaxKind::WHEN_KW | SyntaxKind::FOR_KW | SyntaxKind::WHILE_KW => p
            .open_constructs()
            .iter()
            .any(|open| open.construct.end_keyword() == target),
        // `end;` and `end Name` close the class.
        _ => true,
    };
    if claimed_further_out {
        missing_end(p, keyword, opened);
        return false;
    }

    p.push_error(
        SyntaxError::builder(ErrorCode::E0207)
            .message(format!(
                "expected `end {}`, found `end {}`",
                keyword_text(keyword),
                keyword_text(target)
            ))
            .range(p.current_range())
            .expected(&[keyword])
            .found(Some(target))
            .related(format!("`{}` opened here", keyword_text(keyword)), opened)
            .build(),
    );
    p.bump();
    p.bump();
    true
}

fn missing_end<P: ExpressionParser>(p: &mut P, keyword: SyntaxKind, opened: TextRange) {
    let found = p.found();
    let found_name = found.unwrap_or(SyntaxKind::EOF).display_name();
    p.push_error(
        SyntaxError::builder(ErrorCode::E0206)
            .message(format!(
                "expected `end {}`, found {found_name} {}",
                keyword_text(keyword),
                p.context().description()
            ))
            .range(p.current_range())
            .expected(&[SyntaxKind::END_KW])
            .found(found)
            .related(format!("`{}` opened here", keyword_text(keyword)), opened)
            .build(),
    );
}

fn keyword_text(kind: SyntaxKind) -> &'static str {
    kind.display_name().trim_matches('`')
}

/// `end if;` (or `for`, `when`, `while`) where nothing of that kind is open.
pub fn at_stray_end<P: ExpressionParser>(p: &P) -> bool {
    p.at(SyntaxKind::END_KW)
        && matches!(
            p.nth(1),
            SyntaxKind::IF_KW | SyntaxKind::FOR_KW | SyntaxKind::WHEN_KW | SyntaxKind::WHILE_KW
        )
}

pub fn stray_end<P: ExpressionParser>(p: &mut P) {
    let target = p.nth(1);
    p.error(
        ErrorCode::E0207,
        format!("`end {0}` without an open `{0}`", keyword_text(target)),
    );
    p.start_node(SyntaxKind::ERROR);
    p.bump(); // end
    p.bump(); // if, for, when or while
    p.eat(SyntaxKind::SEMICOLON);
    p.finish_node();
}

/// An `elseif`, `else` or `elsewhen` that no open construct can take.
pub fn stray_clause<P: ModelicaParser>(p: &mut P, family: Family) {
    let kind = p.current_kind();
    let owner = clause_owner(kind).map_or(SyntaxKind::IF_KW, Construct::end_keyword);
    match resolve_clause(p.open_constructs(), kind, family.category()) {
        Resolution::Ambiguous => p.error(
            ErrorCode::E0950,
            format!(
                "{} could close more than one open `{}`",
                kind.display_name(),
                keyword_text(owner)
            ),
        ),
        _ => p.error(
            ErrorCode::E0603,
            format!("{} without an enclosing `{}`", kind.display_name(), keyword_text(owner)),
        ),
    }
    clause_head_as_error(p, kind);
}

/// Wrap a clause keyword and its `condition then` head in an `ERROR` node.
fn clause_head_as_error<P: ExpressionParser>(p: &mut P, kind: SyntaxKind) {
    p.start_node(SyntaxKind::ERROR);
    p.bump();
    if kind != SyntaxKind::ELSE_KW {
        parse_expression(p);
        p.eat(SyntaxKind::THEN_KW);
    }
    p.finish_node();
}
