//! Lexer stage: text → flat token stream
//!
//!     [tokenize] is the stage's only public entry point. Internally it is split into two
//!     layers: [raw] turns a line's remainder into small lexical atoms, and [line] consumes
//!     those atoms per physical line to apply the keyword/prefix dispatch and the element-line
//!     scan described for this stage.

pub mod line;
pub mod raw;

use crate::compiler::token::Token;

/// Tokenizes a complete document into a flat token sequence terminated by a single `EOF` token.
///
/// Lines are split on `\n` only; a trailing `\r` (as in `\r\n` input) is left in place as part
/// of whatever token ends up owning the end of that line.
pub fn tokenize(source: &str) -> Vec<Token> {
    let lines: Vec<&str> = source.split('\n').collect();
    let mut tokens = Vec::new();

    for (idx, raw_line) in lines.iter().enumerate() {
        let line_no = idx + 1;
        tokens.extend(line::tokenize_line(raw_line, line_no));
    }

    tokens.push(Token::eof(lines.len()));
    tokens
}
