//! Parser stage: token stream → AST
//!
//!     The parser walks the flat token stream with a cursor and a stack of open ancestors
//!     (an explicit stack rather than parent pointers, per the model's back-reference note: the
//!     two are behaviorally identical, and the stack avoids `Rc`/`RefCell` entirely). Each
//!     constructed node is placed into the tree by the ascend-attach-descend rule before the
//!     cursor moves on to the next node.

use crate::compiler::ast::{AstNode, NodeKind};
use crate::compiler::token::{Attribute, AttributeKind, Token, TokenKind};

/// Parses a complete token stream (as produced by [crate::compiler::lexer::tokenize]) into a
/// root [AstNode]. Never fails: malformed input degrades to fewer or emptier nodes, never a
/// panic or an error return.
pub fn parse(tokens: &[Token]) -> AstNode {
    let mut cursor = Cursor::new(tokens);
    let mut ancestors: Vec<AstNode> = vec![AstNode::root()];

    loop {
        match cursor.parse_node() {
            None => {
                if cursor.current().kind == TokenKind::Eof {
                    break;
                }
                cursor.advance();
                continue;
            }
            Some(node) => place(&mut ancestors, node, cursor.current().depth),
        }
    }

    while ancestors.len() > 1 {
        let finished = ancestors.pop().unwrap();
        ancestors.last_mut().unwrap().children.push(finished);
    }
    ancestors.pop().unwrap()
}

/// Applies the ascend-attach-descend rule: ascend the ancestor stack while the node's depth is
/// not strictly greater than the current top's, attach it there, then descend into it only if
/// the next token in the stream is deeper still.
fn place(ancestors: &mut Vec<AstNode>, node: AstNode, next_depth: usize) {
    while ancestors.len() > 1 && node.depth <= ancestors.last().unwrap().depth {
        let finished = ancestors.pop().unwrap();
        ancestors.last_mut().unwrap().children.push(finished);
    }

    if (next_depth as i64) > node.depth {
        ancestors.push(node);
    } else {
        ancestors.last_mut().unwrap().children.push(node);
    }
}

struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    fn current(&self) -> &Token {
        // The token stream always ends with EOF, so this never runs past the slice.
        self.tokens.get(self.pos).unwrap_or_else(|| self.tokens.last().unwrap())
    }

    fn advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Constructs the single node that begins at the current token, if any, advancing the
    /// cursor past everything that node consumes (itself, and for `TAG` nodes, any absorbed
    /// modifier tokens). Returns `None` for `EOF` or any token kind that never starts a node,
    /// in which case the cursor still advances past it so the caller can keep scanning.
    fn parse_node(&mut self) -> Option<AstNode> {
        let token = self.current().clone();
        if token.kind == TokenKind::Eof {
            return None;
        }

        let node_kind = match NodeKind::from_token_kind(token.kind) {
            Some(kind) => kind,
            None => {
                self.advance();
                return None;
            }
        };

        let mut node = AstNode::new(node_kind, token.depth as i64, token.line, token.column);

        match token.kind {
            TokenKind::Tag => {
                node.tag = Some(token.text.clone());
                self.advance();
                self.absorb(&mut node);
            }
            TokenKind::Text | TokenKind::Pipe | TokenKind::Dot => {
                node.text_content = Some(token.text.trim().to_string());
                node.is_block = matches!(token.kind, TokenKind::Pipe | TokenKind::Dot);
                self.advance();
            }
            TokenKind::Code | TokenKind::Comment | TokenKind::BlockComment | TokenKind::Interpolation => {
                node.text_content = Some(token.text.trim().to_string());
                self.advance();
            }
            TokenKind::Doctype => {
                node.tag = Some("doctype".to_string());
                node.text_content = Some(default_if_blank(&token.text, "html"));
                self.advance();
            }
            TokenKind::Include => {
                node.tag = Some("include".to_string());
                node.text_content = Some(token.text.trim().to_string());
                self.advance();
            }
            TokenKind::Extends => {
                node.tag = Some("extends".to_string());
                node.text_content = Some(token.text.trim().to_string());
                self.advance();
            }
            TokenKind::Mixin => {
                node.tag = Some("mixin".to_string());
                node.text_content = Some(token.text.trim().to_string());
                self.advance();
            }
            TokenKind::Call => {
                node.tag = Some("call".to_string());
                node.text_content = Some(token.text.trim().to_string());
                self.advance();
            }
            TokenKind::Class | TokenKind::Id | TokenKind::Attribute | TokenKind::Indentation | TokenKind::Eof => {
                unreachable!("excluded by NodeKind::from_token_kind")
            }
        }

        Some(node)
    }

    /// Consumes trailing same-depth modifier tokens into `node`: `ID` (last writer wins),
    /// `CLASS` (appended, source order), `ATTRIBUTE` (parsed and appended), and `TEXT`/
    /// `INTERPOLATION` (concatenated with a single separating space, marking the node inline).
    /// Stops at the first non-modifier token at the same depth, including `EOF`.
    fn absorb(&mut self, node: &mut AstNode) {
        loop {
            let token = self.current().clone();
            if token.kind == TokenKind::Eof || token.depth as i64 != node.depth {
                break;
            }
            match token.kind {
                TokenKind::Id => {
                    node.id = Some(token.text.trim().to_string());
                    self.advance();
                }
                TokenKind::Class => {
                    node.classes.push(token.text.clone());
                    self.advance();
                }
                TokenKind::Attribute => {
                    node.attributes.extend(parse_attribute_payload(&token.text));
                    self.advance();
                }
                TokenKind::Text | TokenKind::Interpolation => {
                    node.text_content = Some(match &node.text_content {
                        Some(existing) => format!("{existing} {}", token.text.trim()),
                        None => token.text.trim().to_string(),
                    });
                    node.is_inline = true;
                    self.advance();
                }
                _ => break,
            }
        }
    }
}

fn default_if_blank(text: &str, default: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parses an `ATTRIBUTE` token's raw payload (the content between the outermost parens) into
/// zero or more [Attribute]s. Splits on `,`, then each piece on the first `=`; an empty name
/// discards the segment, a missing `=` yields a `STRING` attribute with an empty value, and a
/// value wrapped in matching quotes has them stripped.
fn parse_attribute_payload(raw: &str) -> Vec<Attribute> {
    let mut attributes = Vec::new();
    for piece in raw.split(',') {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        let (name, value) = match piece.split_once('=') {
            Some((name, value)) => (name.trim(), value.trim()),
            None => (piece, ""),
        };
        if name.is_empty() {
            continue;
        }
        attributes.push(Attribute::new(name, strip_matching_quotes(value), AttributeKind::String));
    }
    attributes
}

fn strip_matching_quotes(value: &str) -> String {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return value[1..value.len() - 1].to_string();
        }
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::lexer;

    fn parse_source(source: &str) -> AstNode {
        parse(&lexer::tokenize(source))
    }

    #[test]
    fn empty_input_yields_childless_root() {
        let root = parse_source("");
        assert!(root.is_root());
        assert!(root.children.is_empty());
    }

    #[test]
    fn nested_structure_attaches_by_depth() {
        let root = parse_source("div\n  p Hi\n  span Bye");
        assert_eq!(root.children.len(), 1);
        let div = &root.children[0];
        assert_eq!(div.tag.as_deref(), Some("div"));
        assert_eq!(div.children.len(), 2);
        assert_eq!(div.children[0].tag.as_deref(), Some("p"));
        assert_eq!(div.children[1].tag.as_deref(), Some("span"));
    }

    #[test]
    fn sibling_after_deeper_child_ascends_correctly() {
        let root = parse_source("div\n  p\n    span Hi\n  footer Bye");
        let div = &root.children[0];
        assert_eq!(div.children.len(), 2);
        assert_eq!(div.children[0].tag.as_deref(), Some("p"));
        assert_eq!(div.children[0].children[0].tag.as_deref(), Some("span"));
        assert_eq!(div.children[1].tag.as_deref(), Some("footer"));
    }

    #[test]
    fn class_accumulation_is_associative_in_source_order() {
        let a = parse_source("tag.a.b");
        let b = parse_source("tag.a\n  .b");
        assert_eq!(a.children[0].classes, vec!["a", "b"]);
        // second form nests `.b` as a separate anonymous node rather than merging onto `tag` -
        // it is not the same source shape as `tag.a.b`, so only the first law applies here.
        assert_eq!(b.children[0].classes, vec!["a"]);
    }

    #[test]
    fn id_last_writer_wins() {
        let root = parse_source("div#x#y");
        assert_eq!(root.children[0].id.as_deref(), Some("y"));
    }

    #[test]
    fn attribute_payload_parses_quoted_and_unquoted_pairs() {
        let attrs = parse_attribute_payload("charset=\"UTF-8\", name='viewport'");
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs[0].name, "charset");
        assert_eq!(attrs[0].value, "UTF-8");
        assert_eq!(attrs[1].name, "name");
        assert_eq!(attrs[1].value, "viewport");
    }

    #[test]
    fn attribute_with_empty_name_is_discarded() {
        let attrs = parse_attribute_payload("=value, ok=1");
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs[0].name, "ok");
    }

    #[test]
    fn doctype_defaults_to_html_when_payload_blank() {
        let root = parse_source("doctype");
        assert_eq!(root.children[0].text_content.as_deref(), Some("html"));
    }

    #[test]
    fn block_text_via_pipe_creates_separate_text_children() {
        let root = parse_source("p\n  | line one\n  | line two");
        let p = &root.children[0];
        assert_eq!(p.children.len(), 2);
        assert!(p.children.iter().all(|c| c.is_block));
        assert_eq!(p.children[0].text_content.as_deref(), Some("line one"));
        assert_eq!(p.children[1].text_content.as_deref(), Some("line two"));
    }

    #[test]
    fn absorption_stops_at_eof() {
        let root = parse_source("p.foo");
        assert_eq!(root.children[0].classes, vec!["foo"]);
    }
}
