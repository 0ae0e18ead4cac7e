//! Token data model for the lexer stage
//!
//!     A [Token] is an immutable record produced by the lexer: a [TokenKind] tag, a textual
//!     payload (possibly empty), a 1-based line, a 0-based column, and a nonnegative depth.
//!     Tokens are created once and never mutated; the lexer emits a flat sequence of them,
//!     terminated by a single `EOF` token.
//!
//!     Only `TAG` tokens acquire an [Attribute] list, and only after the parser's absorption
//!     loop has run - the lexer itself never attaches attributes to a token.

use std::fmt;

/// The kind of a lexer token.
///
/// `INDENTATION` is part of the public enumeration for parity with the token model other
/// implementations of this format expose, but this lexer never constructs it - depth is carried
/// as a field on every token instead of being its own token kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TokenKind {
    Tag,
    Class,
    Id,
    Attribute,
    Text,
    Indentation,
    Dot,
    Pipe,
    Comment,
    BlockComment,
    Interpolation,
    Code,
    Doctype,
    Include,
    Extends,
    Mixin,
    Call,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Tag => "TAG",
            TokenKind::Class => "CLASS",
            TokenKind::Id => "ID",
            TokenKind::Attribute => "ATTRIBUTE",
            TokenKind::Text => "TEXT",
            TokenKind::Indentation => "INDENTATION",
            TokenKind::Dot => "DOT",
            TokenKind::Pipe => "PIPE",
            TokenKind::Comment => "COMMENT",
            TokenKind::BlockComment => "BLOCK_COMMENT",
            TokenKind::Interpolation => "INTERPOLATION",
            TokenKind::Code => "CODE",
            TokenKind::Doctype => "DOCTYPE",
            TokenKind::Include => "INCLUDE",
            TokenKind::Extends => "EXTENDS",
            TokenKind::Mixin => "MIXIN",
            TokenKind::Call => "CALL",
            TokenKind::Eof => "EOF",
        };
        write!(f, "{name}")
    }
}

/// A single lexer token: kind, payload, and source location.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// 1-based line number.
    pub line: usize,
    /// 0-based column (byte offset into the line).
    pub column: usize,
    pub depth: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize, depth: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
            depth,
        }
    }

    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, "", line, 0, 0)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({:?}) @ {}:{} depth={}",
            self.kind, self.text, self.line, self.column, self.depth
        )
    }
}

/// The classification of an [Attribute]'s value.
///
/// This lexer/parser only ever produces `String` (see spec note in DESIGN.md / SPEC_FULL.md
/// §3): the other variants exist in the data model for forward compatibility with a future
/// attribute-kind inference pass, but are never constructed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AttributeKind {
    String,
    Boolean,
    Expression,
    Class,
    Id,
}

/// A single `name`/`value` pair parsed out of a `(...)` attribute list.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
    pub kind: AttributeKind,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>, kind: AttributeKind) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_kind_display_matches_spec_names() {
        assert_eq!(TokenKind::BlockComment.to_string(), "BLOCK_COMMENT");
        assert_eq!(TokenKind::Eof.to_string(), "EOF");
    }

    #[test]
    fn eof_token_has_zero_depth_and_column() {
        let t = Token::eof(5);
        assert_eq!(t.kind, TokenKind::Eof);
        assert_eq!(t.depth, 0);
        assert_eq!(t.column, 0);
        assert_eq!(t.line, 5);
    }
}
