//! Logos-based lexer for Modelica
//!
//! Fast tokenization using the logos crate. The lexer never fails: malformed
//! input becomes `ERROR` tokens that still cover the source text, so the
//! token stream always concatenates back to the input.

use super::errors::ErrorCode;
use super::syntax_kind::SyntaxKind;
use crate::base::LineCol;
use logos::Logos;
use rowan::{TextRange, TextSize};

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub range: TextRange,
    pub start: LineCol,
    pub end: LineCol,
}

impl Token<'_> {
    pub fn offset(&self) -> TextSize {
        self.range.start()
    }

    /// Classify an `ERROR` token into the lexical error it represents.
    pub fn lex_error(&self) -> Option<ErrorCode> {
        if self.kind != SyntaxKind::ERROR {
            return None;
        }
        let code = if self.text.starts_with('"') {
            ErrorCode::E0102
        } else if self.text.starts_with("/*") {
            ErrorCode::E0103
        } else if self.text.starts_with('\'') {
            ErrorCode::E0105
        } else if self.text == "\u{FEFF}" {
            ErrorCode::E0104
        } else {
            ErrorCode::E0101
        };
        Some(code)
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    position: LineCol,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            position: LineCol::default(),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let span = self.inner.span();
        let range = TextRange::new(
            TextSize::new(span.start as u32),
            TextSize::new(span.end as u32),
        );

        let kind = match logos_token {
            Ok(LogosToken::Bom) if span.start != 0 => SyntaxKind::ERROR,
            Ok(LogosToken::Ident) => SyntaxKind::from_keyword(text).unwrap_or(SyntaxKind::IDENT),
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        let start = self.position;
        self.position = start.advance(text);

        Some(Token {
            kind,
            text,
            range,
            start,
            end: self.position,
        })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\x0C]+")]
    Whitespace,

    #[regex(r"//[^\r\n]*")]
    LineComment,

    /// `/* ... */`. With no closing `*/` the error token runs to the end of the file.
    #[token("/*", lex_block_comment)]
    BlockComment,

    #[token("\u{FEFF}")]
    Bom,

    // =========================================================================
    // LITERALS
    // =========================================================================
    /// Plain identifiers and keywords; keywords are split out by table lookup
    #[regex(r"[_a-zA-Z][_a-zA-Z0-9]*")]
    Ident,

    /// `'a b'`. Never spans lines; unterminated, the rest of the line is an error token.
    #[token("'", |lex| lex_quoted(lex, b'\'', false))]
    QuotedIdent,

    #[regex(r"[0-9]+")]
    UnsignedInteger,

    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?|[0-9]+[eE][+-]?[0-9]+|\.[0-9]+([eE][+-]?[0-9]+)?")]
    UnsignedReal,

    /// May span lines. With no closing quote before the end of input only the
    /// rest of the opening line becomes an error token.
    #[token("\"", |lex| lex_quoted(lex, b'"', true))]
    String,

    // =========================================================================
    // MULTI-CHARACTER PUNCTUATION (must come before single-char)
    // =========================================================================
    #[token(":=")]
    ColonEq,

    #[token(".+")]
    DotPlus,

    #[token(".-")]
    DotMinus,

    #[token(".*")]
    DotStar,

    #[token("./")]
    DotSlash,

    #[token(".^")]
    DotCaret,

    #[token("<=")]
    LtEq,

    #[token(">=")]
    GtEq,

    #[token("==")]
    EqEq,

    #[token("<>")]
    LtGt,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token(";")]
    Semicolon,

    #[token(",")]
    Comma,

    #[token(".")]
    Dot,

    #[token(":")]
    Colon,

    #[token("=")]
    Eq,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("^")]
    Caret,

    #[token("<")]
    Lt,

    #[token(">")]
    Gt,
}

/// Finish a literal opened by `quote`, escapes included.
///
/// A closed literal ends after its closing quote. An unclosed one is an error
/// that stops at the end of its first line, so lexing resumes on the next.
fn lex_quoted(lex: &mut logos::Lexer<'_, LogosToken>, quote: u8, multiline: bool) -> Result<(), ()> {
    let rest = lex.remainder().as_bytes();
    let mut i = 0;
    while i < rest.len() {
        match rest[i] {
            b'\n' | b'\r' if !multiline => break,
            b'\\' if multiline || !matches!(rest.get(i + 1), Some(b'\n' | b'\r')) => i += 2,
            b if b == quote => {
                lex.bump(i + 1);
                return Ok(());
            }
            _ => i += 1,
        }
    }
    let line_end = rest
        .iter()
        .position(|&b| b == b'\n' || b == b'\r')
        .unwrap_or(rest.len());
    lex.bump(line_end);
    Err(())
}

/// Finish a block comment at its first `*/`, or take the rest of the input.
fn lex_block_comment(lex: &mut logos::Lexer<'_, LogosToken>) -> Result<(), ()> {
    match lex.remainder().find("*/") {
        Some(close) => {
            lex.bump(close + 2);
            Ok(())
        }
        None => {
            lex.bump(lex.remainder().len());
            Err(())
        }
    }
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Whitespace => SyntaxKind::WHITESPACE,
            LogosToken::LineComment => SyntaxKind::LINE_COMMENT,
            LogosToken::BlockComment => SyntaxKind::BLOCK_COMMENT,
            LogosToken::Bom => SyntaxKind::BOM,
            LogosToken::Ident | LogosToken::QuotedIdent => SyntaxKind::IDENT,
            LogosToken::UnsignedInteger => SyntaxKind::UNSIGNED_INTEGER,
            LogosToken::UnsignedReal => SyntaxKind::UNSIGNED_REAL,
            LogosToken::String => SyntaxKind::STRING,
            LogosToken::ColonEq => SyntaxKind::COLON_EQ,
            LogosToken::DotPlus => SyntaxKind::DOT_PLUS,
            LogosToken::DotMinus => SyntaxKind::DOT_MINUS,
            LogosToken::DotStar => SyntaxKind::DOT_STAR,
            LogosToken::DotSlash => SyntaxKind::DOT_SLASH,
            LogosToken::DotCaret => SyntaxKind::DOT_CARET,
            LogosToken::LtEq => SyntaxKind::LT_EQ,
            LogosToken::GtEq => SyntaxKind::GT_EQ,
            LogosToken::EqEq => SyntaxKind::EQ_EQ,
            LogosToken::LtGt => SyntaxKind::LT_GT,
            LogosToken::LParen => SyntaxKind::L_PAREN,
            LogosToken::RParen => SyntaxKind::R_PAREN,
            LogosToken::LBracket => SyntaxKind::L_BRACKET,
            LogosToken::RBracket => SyntaxKind::R_BRACKET,
            LogosToken::LBrace => SyntaxKind::L_BRACE,
            LogosToken::RBrace => SyntaxKind::R_BRACE,
            LogosToken::Semicolon => SyntaxKind::SEMICOLON,
            LogosToken::Comma => SyntaxKind::COMMA,
            LogosToken::Dot => SyntaxKind::DOT,
            LogosToken::Colon => SyntaxKind::COLON,
            LogosToken::Eq => SyntaxKind::EQ,
            LogosToken::Plus => SyntaxKind::PLUS,
            LogosToken::Minus => SyntaxKind::MINUS,
            LogosToken::Star => SyntaxKind::STAR,
            LogosToken::Slash => SyntaxKind::SLASH,
            LogosToken::Caret => SyntaxKind::CARET,
            LogosToken::Lt => SyntaxKind::LT,
            LogosToken::Gt => SyntaxKind::GT,
        }
    }
}
