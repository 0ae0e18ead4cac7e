//! The parser's output tree
//!
//!     An [AstNode] is built once by the parser and treated as immutable by the renderer.
//!     Ownership is strictly tree-shaped: every node exclusively owns its `children`; there is
//!     no shared or cyclic structure anywhere in the tree.

use crate::compiler::token::{Attribute, TokenKind};

/// The sentinel depth recorded on the root node.
pub const ROOT_DEPTH: i64 = -1;

/// The kind of an AST node.
///
/// Distinct from [TokenKind] so that impossible states (an `INDENTATION` node, for instance)
/// simply have no corresponding variant here, at the cost of a small mapping step in the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum NodeKind {
    Root,
    Tag,
    Text,
    Comment,
    BlockComment,
    Interpolation,
    Code,
    Doctype,
    Include,
    Extends,
    Mixin,
    Call,
}

impl NodeKind {
    /// Maps the primary token kind that begins a node to the node kind it produces.
    ///
    /// Returns `None` for token kinds that never start a node (`CLASS`, `ID`, `ATTRIBUTE`,
    /// `INDENTATION`, `EOF`) - those are only ever absorbed or terminate the loop.
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Tag => Some(NodeKind::Tag),
            TokenKind::Text | TokenKind::Pipe | TokenKind::Dot => Some(NodeKind::Text),
            TokenKind::Comment => Some(NodeKind::Comment),
            TokenKind::BlockComment => Some(NodeKind::BlockComment),
            TokenKind::Interpolation => Some(NodeKind::Interpolation),
            TokenKind::Code => Some(NodeKind::Code),
            TokenKind::Doctype => Some(NodeKind::Doctype),
            TokenKind::Include => Some(NodeKind::Include),
            TokenKind::Extends => Some(NodeKind::Extends),
            TokenKind::Mixin => Some(NodeKind::Mixin),
            TokenKind::Call => Some(NodeKind::Call),
            TokenKind::Class | TokenKind::Id | TokenKind::Attribute | TokenKind::Indentation | TokenKind::Eof => None,
        }
    }

    /// The literal keyword name stored as `tag` for the directive-like node kinds.
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            NodeKind::Doctype => Some("doctype"),
            NodeKind::Include => Some("include"),
            NodeKind::Extends => Some("extends"),
            NodeKind::Mixin => Some("mixin"),
            NodeKind::Call => Some("call"),
            _ => None,
        }
    }
}

/// A node in the compiled document tree.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AstNode {
    pub node_kind: NodeKind,
    pub tag: Option<String>,
    pub text_content: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: Vec<Attribute>,
    pub depth: i64,
    pub line: usize,
    pub column: usize,
    pub children: Vec<AstNode>,
    pub is_void: bool,
    pub is_inline: bool,
    pub is_block: bool,
}

impl AstNode {
    /// Builds the tree's root: `tag = "root"`, depth = [ROOT_DEPTH], no other fields set.
    pub fn root() -> Self {
        AstNode {
            node_kind: NodeKind::Root,
            tag: Some("root".to_string()),
            text_content: None,
            id: None,
            classes: Vec::new(),
            attributes: Vec::new(),
            depth: ROOT_DEPTH,
            line: 0,
            column: 0,
            children: Vec::new(),
            is_void: false,
            is_inline: false,
            is_block: false,
        }
    }

    /// Builds a bare node of the given kind at the given source location; all other fields take
    /// their default (empty) value. Callers fill in `tag`/`text_content`/etc. afterward.
    pub fn new(node_kind: NodeKind, depth: i64, line: usize, column: usize) -> Self {
        AstNode {
            node_kind,
            tag: None,
            text_content: None,
            id: None,
            classes: Vec::new(),
            attributes: Vec::new(),
            depth,
            line,
            column,
            children: Vec::new(),
            is_void: false,
            is_inline: false,
            is_block: false,
        }
    }

    pub fn is_root(&self) -> bool {
        self.node_kind == NodeKind::Root
    }

    /// The effective tag name used for rendering: the explicit tag, or `"div"` for an
    /// anonymous node carrying `classes`/`id`, or the literal tag the node already has.
    pub fn effective_tag(&self) -> &str {
        self.tag.as_deref().unwrap_or("div")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_has_sentinel_depth_and_root_tag() {
        let root = AstNode::root();
        assert_eq!(root.depth, ROOT_DEPTH);
        assert_eq!(root.tag.as_deref(), Some("root"));
        assert!(root.is_root());
    }

    #[test]
    fn from_token_kind_excludes_modifier_and_control_kinds() {
        assert_eq!(NodeKind::from_token_kind(TokenKind::Class), None);
        assert_eq!(NodeKind::from_token_kind(TokenKind::Id), None);
        assert_eq!(NodeKind::from_token_kind(TokenKind::Attribute), None);
        assert_eq!(NodeKind::from_token_kind(TokenKind::Indentation), None);
        assert_eq!(NodeKind::from_token_kind(TokenKind::Eof), None);
    }

    #[test]
    fn from_token_kind_maps_pipe_and_dot_to_text() {
        assert_eq!(NodeKind::from_token_kind(TokenKind::Pipe), Some(NodeKind::Text));
        assert_eq!(NodeKind::from_token_kind(TokenKind::Dot), Some(NodeKind::Text));
    }

    #[test]
    fn effective_tag_defaults_to_div() {
        let node = AstNode::new(NodeKind::Tag, 0, 1, 0);
        assert_eq!(node.effective_tag(), "div");
    }
}
