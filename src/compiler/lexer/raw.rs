//! Raw per-line atom tokenization
//!
//!     The element-line scan in [super::line] needs to walk a line character by character, but
//!     it never needs to look inside a run of identifier characters or a run of plain spaces -
//!     only at the boundaries between them. [Atom] groups a line's remainder into these small
//!     lexical atoms up front using `logos`, and [tokenize] pairs each atom with its byte span so
//!     the caller can slice the original line to recover exact payload text (including anything
//!     `logos` itself throws away, like the content of a quoted string or an interpolation body).

use logos::Logos;

/// A single lexical atom within one line's remainder.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Atom {
    /// A run of `[A-Za-z0-9_-]`, used for tag names, ids, classes, and attribute identifiers.
    #[regex("[A-Za-z0-9_-]+")]
    Ident,
    #[token("#")]
    Hash,
    #[token(".")]
    Dot,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    /// A run of one or more spaces.
    #[regex(" +")]
    Whitespace,
    /// Any single byte not covered above (quotes, `=`, `,`, `<`, punctuation, etc.).
    #[regex(".", priority = 1)]
    Other,
}

/// An [Atom] paired with its byte span into the line it was lexed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomToken {
    pub atom: Atom,
    pub start: usize,
    pub end: usize,
}

impl AtomToken {
    pub fn text<'a>(&self, line: &'a str) -> &'a str {
        &line[self.start..self.end]
    }
}

/// Tokenizes one line's remainder into raw atoms.
///
/// Every byte of `rest` is covered by exactly one atom (the `Other` variant is a catch-all), so
/// this never silently drops input; unrecognized bytes simply become single-byte `Other` atoms.
pub fn tokenize(rest: &str) -> Vec<AtomToken> {
    let mut lexer = Atom::lexer(rest);
    let mut out = Vec::new();
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        if let Ok(atom) = result {
            out.push(AtomToken {
                atom,
                start: span.start,
                end: span.end,
            });
        } else {
            // `.` with priority 1 covers every remaining byte, so this arm is unreachable in
            // practice; fall back to a single-byte Other atom rather than dropping the input.
            out.push(AtomToken {
                atom: Atom::Other,
                start: span.start,
                end: span.end,
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_tag_class_id_sequence() {
        let atoms = tokenize("p.hello#greet Hi there");
        let kinds: Vec<_> = atoms.iter().map(|a| a.atom).collect();
        assert_eq!(
            kinds,
            vec![
                Atom::Ident,
                Atom::Dot,
                Atom::Ident,
                Atom::Hash,
                Atom::Ident,
                Atom::Whitespace,
                Atom::Ident,
                Atom::Whitespace,
                Atom::Ident,
            ]
        );
    }

    #[test]
    fn spans_cover_the_entire_input_with_no_gaps() {
        let line = "img(src=\"a.png\")";
        let atoms = tokenize(line);
        let mut cursor = 0;
        for atom in &atoms {
            assert_eq!(atom.start, cursor);
            cursor = atom.end;
        }
        assert_eq!(cursor, line.len());
    }

    #[test]
    fn quote_and_equals_become_other_atoms() {
        let atoms = tokenize("(a=\"b\")");
        assert!(atoms.iter().any(|a| a.atom == Atom::Other));
    }
}
