//! Expression grammar
//!
//! Covers `Expression` and everything below it: if and range expressions,
//! the primary expressions, names, component references, function
//! arguments, array constructors and subscripts. Binary and unary operators
//! are delegated to the precedence resolver.

use rowan::{Checkpoint, TextRange};

use super::ambiguity::{
    Category, Construct, OpenConstruct, at_named_argument, dot_continues_chain, end_is_expression,
};
use super::comma_sep1;
use super::precedence::{binary_band, parse_simple_expression};
use crate::parser::SyntaxKind;
use crate::parser::errors::{ErrorCode, ParseContext, SyntaxError, expected_message};

/// Trait for parsers that can parse expressions
///
/// The required methods are the parser's primitive state operations; the
/// provided ones are the combinators every grammar module shares.
pub trait ExpressionParser {
    // Token inspection
    fn current_kind(&self) -> SyntaxKind;
    /// Kind of the nth significant token ahead; `EOF` past the end.
    fn nth(&self, n: usize) -> SyntaxKind;
    fn current_text(&self) -> &str;
    fn current_range(&self) -> TextRange;

    // Position tracking
    fn get_pos(&self) -> usize;

    // Token consumption
    fn bump(&mut self);

    // Node building
    fn start_node(&mut self, kind: SyntaxKind);
    fn finish_node(&mut self);
    fn checkpoint(&mut self) -> Checkpoint;
    fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind);

    // Diagnostics
    fn push_error(&mut self, error: SyntaxError);
    fn context(&self) -> ParseContext;
    fn push_context(&mut self, context: ParseContext);
    fn pop_context(&mut self);

    /// Returns false once nesting exceeds the configured bound. Always pair with `exit_nesting`.
    fn enter_nesting(&mut self) -> bool;
    fn exit_nesting(&mut self);

    // Constructs waiting for their clauses or `end`
    fn open_constructs(&self) -> &[OpenConstruct];
    fn open_construct(&mut self, construct: OpenConstruct);
    fn close_construct(&mut self);

    // -----------------------------------------------------------------
    // Provided combinators
    // -----------------------------------------------------------------

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == kind
    }

    fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        kinds.contains(&self.current_kind())
    }

    fn at_eof(&self) -> bool {
        self.at(SyntaxKind::EOF)
    }

    /// The current token kind, or `None` at the end of input.
    fn found(&self) -> Option<SyntaxKind> {
        Some(self.current_kind()).filter(|&kind| kind != SyntaxKind::EOF)
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat(kind) {
            true
        } else {
            self.error_expected(missing_code(kind), &[kind]);
            false
        }
    }

    /// Report an error at the current token.
    fn error(&mut self, code: ErrorCode, message: impl Into<String>) {
        let error = SyntaxError::builder(code)
            .message(message)
            .range(self.current_range())
            .found(self.found())
            .build();
        self.push_error(error);
    }

    /// Report that one of `expected` should have appeared at the current token.
    fn error_expected(&mut self, code: ErrorCode, expected: &[SyntaxKind]) {
        let found = self.found();
        let error = SyntaxError::builder(code)
            .message(expected_message(expected, found, self.context()))
            .range(self.current_range())
            .expected(expected)
            .found(found)
            .build();
        self.push_error(error);
    }

    /// Report an error and wrap tokens up to the recovery set in an `ERROR` node.
    ///
    /// Always consumes at least one token when not at the end of input.
    fn error_recover(&mut self, code: ErrorCode, message: impl Into<String>, recovery: &[SyntaxKind]) {
        self.error(code, message);
        if self.at_eof() {
            return;
        }
        tracing::debug!(code = %code, at = ?self.current_kind(), "recovering");
        self.start_node(SyntaxKind::ERROR);
        self.bump();
        while !self.at_eof() && !self.at_any(recovery) {
            self.bump();
        }
        self.finish_node();
    }

    /// Run `f` with `context` on top of the context stack.
    fn with_context<R>(&mut self, context: ParseContext, f: impl FnOnce(&mut Self) -> R) -> R
    where
        Self: Sized,
    {
        self.push_context(context);
        let result = f(self);
        self.pop_context();
        result
    }
}

/// The error code for a missing token of this kind.
pub fn missing_code(kind: SyntaxKind) -> ErrorCode {
    match kind {
        SyntaxKind::SEMICOLON => ErrorCode::E0201,
        SyntaxKind::R_BRACE => ErrorCode::E0202,
        SyntaxKind::R_PAREN => ErrorCode::E0203,
        SyntaxKind::R_BRACKET => ErrorCode::E0204,
        SyntaxKind::END_KW => ErrorCode::E0206,
        SyntaxKind::IDENT => ErrorCode::E0301,
        _ => ErrorCode::E0902,
    }
}

/// Expression = IfExpression | RangeExpression | SimpleExpression
///
/// The range form is chosen only when a `:` follows the first operand.
pub fn parse_expression<P: ExpressionParser>(p: &mut P) {
    if !p.enter_nesting() {
        skip_nested(p);
        p.exit_nesting();
        return;
    }

    if p.at(SyntaxKind::IF_KW) {
        parse_if_expression(p);
    } else {
        let checkpoint = p.checkpoint();
        parse_simple_expression(p);
        if p.at(SyntaxKind::COLON) {
            // RangeExpression = start ':' [step ':'] stop
            p.start_node_at(checkpoint, SyntaxKind::RANGE_EXPRESSION);
            p.bump();
            parse_simple_expression(p);
            if p.eat(SyntaxKind::COLON) {
                parse_simple_expression(p);
            }
            p.finish_node();
        }
    }

    p.exit_nesting();
}

/// IfExpression = 'if' Expression 'then' Expression ElseIfExpressionClause* 'else' Expression
fn parse_if_expression<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::IF_EXPRESSION);
    let opened = p.current_range();
    p.bump(); // if
    p.open_construct(OpenConstruct::new(Construct::If, Category::Expression));

    parse_expression(p);
    p.expect(SyntaxKind::THEN_KW);
    parse_expression(p);

    while p.at(SyntaxKind::ELSEIF_KW) {
        p.start_node(SyntaxKind::ELSE_IF_EXPRESSION_CLAUSE);
        p.bump();
        parse_expression(p);
        p.expect(SyntaxKind::THEN_KW);
        parse_expression(p);
        p.finish_node();
    }

    if p.eat(SyntaxKind::ELSE_KW) {
        parse_expression(p);
    } else {
        let found = p.found();
        let error = SyntaxError::builder(ErrorCode::E0902)
            .message(expected_message(&[SyntaxKind::ELSE_KW], found, p.context()))
            .range(p.current_range())
            .expected(&[SyntaxKind::ELSEIF_KW, SyntaxKind::ELSE_KW])
            .found(found)
            .related("`if` expression opened here", opened)
            .hint("an if-expression always needs an `else` branch")
            .build();
        p.push_error(error);
    }

    p.close_construct();
    p.finish_node();
}

/// PrimaryExpression = Literal | FunctionCall | ComponentReference
///     | ParenthesizedExpression | ArrayConcatenation | ArrayConstructor | EndExpression
pub fn parse_primary<P: ExpressionParser>(p: &mut P) {
    match p.current_kind() {
        SyntaxKind::UNSIGNED_INTEGER => parse_literal(p, SyntaxKind::UNSIGNED_INTEGER_LITERAL),
        SyntaxKind::UNSIGNED_REAL => parse_literal(p, SyntaxKind::UNSIGNED_REAL_LITERAL),
        SyntaxKind::STRING => parse_literal(p, SyntaxKind::STRING_LITERAL),
        SyntaxKind::TRUE_KW | SyntaxKind::FALSE_KW => {
            parse_literal(p, SyntaxKind::LOGICAL_LITERAL)
        }
        SyntaxKind::DER_KW | SyntaxKind::INITIAL_KW | SyntaxKind::PURE_KW => {
            // FunctionCall with a keyword as its function reference
            p.start_node(SyntaxKind::FUNCTION_CALL);
            p.bump();
            parse_call_arguments(p);
            p.finish_node();
        }
        SyntaxKind::IDENT | SyntaxKind::DOT => {
            let checkpoint = p.checkpoint();
            parse_component_reference(p);
            if p.at(SyntaxKind::L_PAREN) {
                p.start_node_at(checkpoint, SyntaxKind::FUNCTION_CALL);
                parse_call_arguments(p);
                p.finish_node();
            }
        }
        SyntaxKind::L_PAREN => parse_parenthesized_expression(p),
        SyntaxKind::L_BRACKET => parse_array_concatenation(p),
        SyntaxKind::L_BRACE => parse_array_constructor(p),
        SyntaxKind::END_KW if end_is_expression(p) => {
            p.start_node(SyntaxKind::END_EXPRESSION);
            p.bump();
            p.finish_node();
        }
        _ => missing_expression(p),
    }
}

/// Report a missing operand and leave an `ERROR` placeholder in its place.
///
/// A stray operator is swallowed into the placeholder; anything else is left
/// for the enclosing rule.
fn missing_expression<P: ExpressionParser>(p: &mut P) {
    let found = p.found();
    let message = format!(
        "expected an expression, found {} {}",
        found.unwrap_or(SyntaxKind::EOF).display_name(),
        p.context().description()
    );
    p.error(ErrorCode::E0406, message);
    p.start_node(SyntaxKind::ERROR);
    if binary_band(p.current_kind(), 0).is_some() {
        p.bump();
    }
    p.finish_node();
}

/// A node wrapping exactly one token.
pub fn parse_literal<P: ExpressionParser>(p: &mut P, kind: SyntaxKind) {
    p.start_node(kind);
    p.bump();
    p.finish_node();
}

/// ComponentReference = '.'? ComponentReferencePart ('.' ComponentReferencePart)*
pub fn parse_component_reference<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::COMPONENT_REFERENCE);
    p.eat(SyntaxKind::DOT);
    loop {
        // ComponentReferencePart = IDENT ArraySubscripts?
        p.start_node(SyntaxKind::COMPONENT_REFERENCE_PART);
        p.expect(SyntaxKind::IDENT);
        if p.at(SyntaxKind::L_BRACKET) {
            parse_array_subscripts(p);
        }
        p.finish_node();
        if !dot_continues_chain(p, 0) {
            break;
        }
        p.bump(); // .
    }
    p.finish_node();
}

/// Name = IDENT ('.' IDENT)*
pub fn parse_name<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::NAME);
    p.expect(SyntaxKind::IDENT);
    while dot_continues_chain(p, 0) {
        p.bump(); // .
        p.bump(); // IDENT
    }
    p.finish_node();
}

/// TypeSpecifier = '.'? Name
pub fn parse_type_specifier<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::TYPE_SPECIFIER);
    p.eat(SyntaxKind::DOT);
    if p.at(SyntaxKind::IDENT) {
        parse_name(p);
    } else {
        p.error_expected(ErrorCode::E0305, &[SyntaxKind::IDENT]);
    }
    p.finish_node();
}

/// '(' FunctionArguments? ')'
pub fn parse_call_arguments<P: ExpressionParser>(p: &mut P) {
    if !p.expect(SyntaxKind::L_PAREN) {
        return;
    }
    p.with_context(ParseContext::ArgumentList, |p| {
        if !p.at(SyntaxKind::R_PAREN) {
            parse_function_arguments(p);
        }
        p.expect(SyntaxKind::R_PAREN);
    });
}

/// FunctionArguments = ComprehensionClause
///     | FunctionArgument (',' FunctionArgument)* (',' NamedArgument (',' NamedArgument)*)?
///     | NamedArgument (',' NamedArgument)*
pub fn parse_function_arguments<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::FUNCTION_ARGUMENTS);

    let mut named = at_named_argument(p);
    if named {
        parse_named_argument(p);
    } else if p.at(SyntaxKind::FUNCTION_KW) {
        parse_function_argument(p);
    } else {
        let checkpoint = p.checkpoint();
        parse_expression(p);
        if p.at(SyntaxKind::FOR_KW) {
            p.start_node_at(checkpoint, SyntaxKind::COMPREHENSION_CLAUSE);
            parse_for_indices(p);
            p.finish_node();
        } else {
            p.start_node_at(checkpoint, SyntaxKind::FUNCTION_ARGUMENT);
            p.finish_node();
        }
    }

    while p.eat(SyntaxKind::COMMA) {
        if at_named_argument(p) {
            named = true;
            parse_named_argument(p);
        } else {
            if named {
                p.push_error(
                    SyntaxError::builder(ErrorCode::E0405)
                        .range(p.current_range())
                        .found(p.found())
                        .hint("move positional arguments before the named ones")
                        .build(),
                );
            }
            parse_function_argument(p);
        }
    }

    p.finish_node();
}

/// NamedArgument = IDENT '=' FunctionArgument
fn parse_named_argument<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::NAMED_ARGUMENT);
    p.expect(SyntaxKind::IDENT);
    p.expect(SyntaxKind::EQ);
    parse_function_argument(p);
    p.finish_node();
}

/// FunctionArgument = FunctionPartialApplication | Expression
fn parse_function_argument<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::FUNCTION_ARGUMENT);
    if p.at(SyntaxKind::FUNCTION_KW) {
        parse_function_partial_application(p);
    } else {
        parse_expression(p);
    }
    p.finish_node();
}

/// FunctionPartialApplication = 'function' TypeSpecifier '(' (NamedArgument (',' NamedArgument)*)? ')'
fn parse_function_partial_application<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::FUNCTION_PARTIAL_APPLICATION);
    p.bump(); // function
    parse_type_specifier(p);
    if p.expect(SyntaxKind::L_PAREN) {
        if !p.at(SyntaxKind::R_PAREN) {
            comma_sep1(p, SyntaxKind::COMMA, parse_named_argument);
        }
        p.expect(SyntaxKind::R_PAREN);
    }
    p.finish_node();
}

/// 'for' ForIndex (',' ForIndex)*
///
/// The tail of a comprehension; the expression before it is already parsed.
fn parse_for_indices<P: ExpressionParser>(p: &mut P) {
    p.bump(); // for
    comma_sep1(p, SyntaxKind::COMMA, parse_for_index);
}

/// ForIndex = IDENT ('in' Expression)?
pub fn parse_for_index<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::FOR_INDEX);
    p.expect(SyntaxKind::IDENT);
    if p.eat(SyntaxKind::IN_KW) {
        parse_expression(p);
    }
    p.finish_node();
}

/// ParenthesizedExpression = '(' (Expression? (',' Expression?)*)? ')'
///
/// Empty slots are allowed so `(a, , b) := f(x)` has somewhere to point.
pub fn parse_parenthesized_expression<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::PARENTHESIZED_EXPRESSION);
    p.bump(); // (
    p.with_context(ParseContext::Expression, |p| {
        if !p.at(SyntaxKind::R_PAREN) {
            loop {
                if !p.at_any(&[SyntaxKind::COMMA, SyntaxKind::R_PAREN]) {
                    parse_expression(p);
                }
                if !p.eat(SyntaxKind::COMMA) {
                    break;
                }
            }
        }
        p.expect(SyntaxKind::R_PAREN);
    });
    p.finish_node();
}

/// ArrayConcatenation = '[' ExpressionList (';' ExpressionList)* ']'
fn parse_array_concatenation<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::ARRAY_CONCATENATION);
    p.bump(); // [
    p.with_context(ParseContext::Expression, |p| {
        comma_sep1(p, SyntaxKind::SEMICOLON, parse_expression_list);
        p.expect(SyntaxKind::R_BRACKET);
    });
    p.finish_node();
}

/// ArrayConstructor = '{' (ComprehensionClause | ExpressionList)? '}'
fn parse_array_constructor<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::ARRAY_CONSTRUCTOR);
    p.bump(); // {
    p.with_context(ParseContext::Expression, |p| {
        if !p.at(SyntaxKind::R_BRACE) {
            let checkpoint = p.checkpoint();
            parse_expression(p);
            if p.at(SyntaxKind::FOR_KW) {
                p.start_node_at(checkpoint, SyntaxKind::COMPREHENSION_CLAUSE);
                parse_for_indices(p);
                p.finish_node();
            } else {
                p.start_node_at(checkpoint, SyntaxKind::EXPRESSION_LIST);
                while p.eat(SyntaxKind::COMMA) {
                    parse_expression(p);
                }
                p.finish_node();
            }
        }
        p.expect(SyntaxKind::R_BRACE);
    });
    p.finish_node();
}

/// ExpressionList = Expression (',' Expression)*
pub fn parse_expression_list<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::EXPRESSION_LIST);
    comma_sep1(p, SyntaxKind::COMMA, parse_expression);
    p.finish_node();
}

/// ArraySubscripts = '[' Subscript (',' Subscript)* ']'
pub fn parse_array_subscripts<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::ARRAY_SUBSCRIPTS);
    p.bump(); // [
    p.with_context(ParseContext::ArraySubscripts, |p| {
        comma_sep1(p, SyntaxKind::COMMA, parse_subscript);
        p.expect(SyntaxKind::R_BRACKET);
    });
    p.finish_node();
}

/// Subscript = ':' | Expression
fn parse_subscript<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::SUBSCRIPT);
    if p.at(SyntaxKind::COLON) && matches!(p.nth(1), SyntaxKind::COMMA | SyntaxKind::R_BRACKET) {
        p.bump();
    } else {
        parse_expression(p);
    }
    p.finish_node();
}

/// Skip a construct nested past the depth bound, up to the delimiter that closes it.
pub fn skip_nested<P: ExpressionParser>(p: &mut P) {
    p.error(ErrorCode::E0408, ErrorCode::E0408.default_message());
    tracing::debug!(at = ?p.current_range(), "nesting bound exceeded, skipping construct");
    p.start_node(SyntaxKind::ERROR);
    let mut depth = 0usize;
    loop {
        match p.current_kind() {
            SyntaxKind::EOF => break,
            SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET | SyntaxKind::L_BRACE => depth += 1,
            SyntaxKind::R_PAREN | SyntaxKind::R_BRACKET | SyntaxKind::R_BRACE => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            }
            SyntaxKind::SEMICOLON if depth == 0 => break,
            _ => {}
        }
        p.bump();
    }
    p.finish_node();
}
