//! Renderer stage: AST → HTML
//!
//!     [render] is the stage's only public entry point; [html] holds the actual serialization
//!     logic, including the void-element check, which looks up [tags]'s metadata table rather
//!     than keeping a separate list. `tags` also backs the CLI's `--stats` reporting.

pub mod html;
pub mod tags;

use crate::compiler::ast::AstNode;

/// Render configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// When pretty-printing, emit one tab per indent level instead of `tab_size` spaces.
    pub use_tabs: bool,
    /// Spaces per indent level when `use_tabs` is false.
    pub tab_size: usize,
    /// Suppress indentation, trailing newlines, and non-essential output (comments,
    /// include/extends/mixin/call placeholders) entirely.
    pub minify: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            use_tabs: false,
            tab_size: 2,
            minify: false,
        }
    }
}

/// Serializes a parsed document to an HTML string under the given options.
pub fn render(root: &AstNode, options: &RenderOptions) -> String {
    let mut output = String::new();
    html::render_node(&mut output, root, options);
    output
}
