//! Per-line classification and the element-line scan
//!
//!     Each physical line is handled independently: first its depth is computed from leading
//!     whitespace, then the line's remainder is dispatched - in order - against the keyword and
//!     punctuation prefixes, falling through to the element-line scan when none match. The
//!     element-line scan walks the raw atoms from [super::raw] to find `#id`/`.class`/`(attrs)`/
//!     tag boundaries, then switches to a plain byte scan once inline text begins (text and
//!     interpolation bodies need exact source slices, not atom boundaries).

use crate::compiler::lexer::raw::{self, Atom};
use crate::compiler::token::{Token, TokenKind};

/// Tokenizes a single physical line (no trailing `\n`).
pub fn tokenize_line(line: &str, line_no: usize) -> Vec<Token> {
    let (depth, indent_end) = compute_depth(line);
    let rest = &line[indent_end..];
    if rest.trim().is_empty() {
        return Vec::new();
    }

    if let Some(payload) = strip_keyword(rest, "doctype") {
        return vec![Token::new(TokenKind::Doctype, payload, line_no, indent_end, depth)];
    }
    if let Some(payload) = strip_keyword(rest, "include") {
        return vec![Token::new(TokenKind::Include, payload, line_no, indent_end, depth)];
    }
    if let Some(payload) = strip_keyword(rest, "extends") {
        return vec![Token::new(TokenKind::Extends, payload, line_no, indent_end, depth)];
    }
    if let Some(payload) = strip_keyword(rest, "mixin") {
        return vec![Token::new(TokenKind::Mixin, payload, line_no, indent_end, depth)];
    }
    if let Some(stripped) = rest.strip_prefix('+') {
        return vec![Token::new(TokenKind::Call, stripped.trim(), line_no, indent_end, depth)];
    }
    if let Some(stripped) = rest.strip_prefix("//-") {
        return vec![Token::new(TokenKind::BlockComment, stripped, line_no, indent_end, depth)];
    }
    if let Some(stripped) = rest.strip_prefix("//") {
        return vec![Token::new(TokenKind::Comment, stripped, line_no, indent_end, depth)];
    }
    if let Some(stripped) = rest.strip_prefix('|') {
        return vec![Token::new(TokenKind::Pipe, stripped.trim(), line_no, indent_end, depth)];
    }
    if let Some(stripped) = rest.strip_prefix('-') {
        return vec![Token::new(TokenKind::Code, stripped.trim(), line_no, indent_end, depth)];
    }

    scan_element_line(rest, line_no, indent_end, depth)
}

/// Computes the indentation depth of a line and the byte offset where its remainder begins.
///
/// Every leading tab contributes one depth level; leading spaces contribute `spaces / 2`
/// levels (integer division), and the two contributions are summed regardless of how tabs and
/// spaces are interleaved in the leading run.
fn compute_depth(line: &str) -> (usize, usize) {
    let mut tabs = 0usize;
    let mut spaces = 0usize;
    let mut end = 0usize;
    for (idx, ch) in line.char_indices() {
        match ch {
            '\t' => {
                tabs += 1;
                end = idx + ch.len_utf8();
            }
            ' ' => {
                spaces += 1;
                end = idx + ch.len_utf8();
            }
            _ => break,
        }
    }
    (tabs + spaces / 2, end)
}

/// Matches a keyword by byte prefix only, with no word-boundary check - `doctype` matches the
/// start of `doctypex` too. This is an acknowledged, intentionally preserved divergence.
fn strip_keyword<'a>(rest: &'a str, keyword: &str) -> Option<&'a str> {
    rest.strip_prefix(keyword)
}

fn scan_element_line(rest: &str, line_no: usize, column_offset: usize, depth: usize) -> Vec<Token> {
    let atoms = raw::tokenize(rest);
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < atoms.len() {
        let atom = &atoms[i];
        match atom.atom {
            Atom::Hash => {
                if let Some(ident) = atoms.get(i + 1).filter(|a| a.atom == Atom::Ident) {
                    tokens.push(Token::new(
                        TokenKind::Id,
                        ident.text(rest),
                        line_no,
                        column_offset + atom.start,
                        depth,
                    ));
                    i += 2;
                } else {
                    // A lone `#` outside text mode has no element-scan rule; skip it silently.
                    i += 1;
                }
            }
            Atom::Dot => {
                if let Some(ident) = atoms.get(i + 1).filter(|a| a.atom == Atom::Ident) {
                    tokens.push(Token::new(
                        TokenKind::Class,
                        ident.text(rest),
                        line_no,
                        column_offset + atom.start,
                        depth,
                    ));
                    i += 2;
                } else {
                    tokens.push(Token::new(TokenKind::Dot, "", line_no, column_offset + atom.start, depth));
                    i += 1;
                }
            }
            Atom::LParen => {
                if let Some((payload, next_i)) = scan_balanced_parens(&atoms, i, rest) {
                    tokens.push(Token::new(
                        TokenKind::Attribute,
                        payload,
                        line_no,
                        column_offset + atom.start,
                        depth,
                    ));
                    i = next_i;
                } else {
                    // Unmatched `(`: no closing paren on this line. Skip it silently.
                    i += 1;
                }
            }
            Atom::Ident => {
                let text = atom.text(rest);
                let starts_with_letter = text.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
                if starts_with_letter {
                    let tag_payload: String =
                        text.chars().take_while(|c| c.is_ascii_alphanumeric() || *c == '-').collect();
                    tokens.push(Token::new(
                        TokenKind::Tag,
                        tag_payload,
                        line_no,
                        column_offset + atom.start,
                        depth,
                    ));
                }
                i += 1;
            }
            Atom::Whitespace => {
                let next_is_hash_or_dot = atoms
                    .get(i + 1)
                    .is_some_and(|a| matches!(a.atom, Atom::Hash | Atom::Dot));
                let next_is_nonempty = i + 1 < atoms.len();
                if next_is_nonempty && !next_is_hash_or_dot {
                    tokens.extend(scan_inline_text(rest, atom.end, line_no, column_offset, depth));
                    break;
                }
                i += 1;
            }
            Atom::LBrace | Atom::RBrace | Atom::Other => {
                i += 1;
            }
        }
    }

    tokens
}

/// Given the index of a `(` atom, finds its matching balanced `)` and returns the raw text
/// between them (preserving nested parens verbatim) plus the atom index right after the close.
fn scan_balanced_parens(atoms: &[raw::AtomToken], open_index: usize, rest: &str) -> Option<(String, usize)> {
    let mut nesting = 1i32;
    let mut j = open_index + 1;
    while j < atoms.len() {
        match atoms[j].atom {
            Atom::LParen => nesting += 1,
            Atom::RParen => {
                nesting -= 1;
                if nesting == 0 {
                    let content_start = atoms[open_index].end;
                    let content_end = atoms[j].start;
                    return Some((rest[content_start..content_end].to_string(), j + 1));
                }
            }
            _ => {}
        }
        j += 1;
    }
    None
}

/// Scans from `start` (a byte offset into `rest`) to end of line, alternating `TEXT` runs with
/// `INTERPOLATION` tokens whenever a `#{ ... }` span is found. A lone `#` not followed by `{`,
/// or an unterminated `#{`, is left as ordinary text.
fn scan_inline_text(rest: &str, start: usize, line_no: usize, column_offset: usize, depth: usize) -> Vec<Token> {
    let mut tokens = Vec::new();
    let chars: Vec<(usize, char)> = rest[start..]
        .char_indices()
        .map(|(offset, ch)| (start + offset, ch))
        .collect();
    let mut idx = 0;
    let mut text_start = start;

    while idx < chars.len() {
        let (pos, ch) = chars[idx];
        let next_is_brace = chars.get(idx + 1).is_some_and(|(_, c)| *c == '{');
        if ch == '#' && next_is_brace {
            if pos > text_start {
                tokens.push(Token::new(
                    TokenKind::Text,
                    &rest[text_start..pos],
                    line_no,
                    column_offset + text_start,
                    depth,
                ));
            }
            let brace_pos = chars[idx + 1].0;
            let body_start = brace_pos + 1;
            if let Some(close_rel) = rest[body_start..].find('}') {
                let close_pos = body_start + close_rel;
                tokens.push(Token::new(
                    TokenKind::Interpolation,
                    &rest[body_start..close_pos],
                    line_no,
                    column_offset + pos,
                    depth,
                ));
                let resume = close_pos + 1;
                idx += 1;
                while idx < chars.len() && chars[idx].0 < resume {
                    idx += 1;
                }
                text_start = resume;
                continue;
            }
        }
        idx += 1;
    }

    if rest.len() > text_start {
        tokens.push(Token::new(
            TokenKind::Text,
            &rest[text_start..],
            line_no,
            column_offset + text_start,
            depth,
        ));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_produces_no_tokens() {
        assert!(tokenize_line("   ", 1).is_empty());
        assert!(tokenize_line("", 1).is_empty());
    }

    #[test]
    fn tabs_and_spaces_sum_depth() {
        let tokens = tokenize_line("\t  div", 1);
        assert_eq!(tokens[0].depth, 2);
    }

    #[test]
    fn two_spaces_per_level() {
        let tokens = tokenize_line("    div", 1);
        assert_eq!(tokens[0].depth, 2);
    }

    #[test]
    fn doctype_matches_without_word_boundary() {
        let tokens = tokenize_line("doctypex html", 1);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Doctype);
        assert_eq!(tokens[0].text, "x html");
    }

    #[test]
    fn tag_class_id_and_inline_text() {
        let tokens = tokenize_line("p.hello#greet Hi there", 1);
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Tag, TokenKind::Class, TokenKind::Id, TokenKind::Text]
        );
        assert_eq!(tokens[3].text, "Hi there");
    }

    #[test]
    fn balanced_nested_parens_preserved_verbatim() {
        let tokens = tokenize_line("div(data-x=\"a(b)c\")", 1);
        assert_eq!(tokens[1].kind, TokenKind::Attribute);
        assert_eq!(tokens[1].text, "data-x=\"a(b)c\"");
    }

    #[test]
    fn interpolation_alternates_with_text() {
        let tokens = tokenize_line("p Hello #{name}!", 1);
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Tag, TokenKind::Text, TokenKind::Interpolation, TokenKind::Text]
        );
        assert_eq!(tokens[2].text, "name");
        assert_eq!(tokens[3].text, "!");
    }

    #[test]
    fn lone_hash_without_brace_is_literal_text() {
        let tokens = tokenize_line("p price is # 5", 1);
        let text = tokens.last().unwrap();
        assert_eq!(text.kind, TokenKind::Text);
        assert!(text.text.contains('#'));
    }

    #[test]
    fn pipe_and_code_payloads_are_trimmed() {
        assert_eq!(tokenize_line("  | line one", 1)[0].text, "line one");
        assert_eq!(tokenize_line("- let x = 1", 1)[0].text, "let x = 1");
    }
}
