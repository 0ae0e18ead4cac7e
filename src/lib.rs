//! # pugc
//!
//!     A compiler for an indentation-sensitive templating language, modeled on Pug, that emits
//!     HTML. Source structure is conveyed by leading whitespace rather than explicit closing
//!     tags; the compiler walks that structure and produces well-formed, optionally
//!     pretty-printed or minified HTML.
//!
//! Pipeline
//!
//!     Compilation is three strictly sequential stages, each owning its output until it hands it
//!     to the next:
//!
//!     1. **Lexer** - turns the raw source into a flat, line-oriented token stream carrying
//!        per-token indentation depth. See [compiler::lexer].
//!     2. **Parser** - folds that flat stream into a tree using depth as the only nesting
//!        signal. See [compiler::parser].
//!     3. **Renderer** - walks the tree to produce HTML, honoring void-element rules, escaping,
//!        inline/block text layout, and indentation/minification options. See [compiler::render].
//!
//!     `include`, `extends`, `mixin`/`call`, and code (`-`) lines are recognized and carried
//!     through the AST but never executed - they render as inert debugging comments, or are
//!     dropped entirely when minifying. There is no variable evaluation, no template
//!     inheritance, no file inclusion: interpolations (`#{...}`) are preserved verbatim.
//!
//! Getting Started
//!
//!     - For the end-to-end entry point, see [compiler::compile].
//!     - For the token data model, see [compiler::token].
//!     - For the AST, see [compiler::ast].
//!     - For render options, see [compiler::render::RenderOptions].

#![allow(rustdoc::invalid_html_tags)]

pub mod compiler;

pub use compiler::compile;
pub use compiler::render::RenderOptions;
