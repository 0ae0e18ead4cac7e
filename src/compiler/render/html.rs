//! Per-node-kind HTML serialization
//!
//!     A direct recursive match over [NodeKind] that pushes straight into a `String` buffer -
//!     no intermediate DOM. Building a DOM first would lose exactly the whitespace/indentation
//!     control this renderer needs (whether a tag's own text sits inline after `>` or on its
//!     own indented line, whether a closing tag gets a fresh indented line at all), so nodes are
//!     walked once, in source order, writing output as they go.

use crate::compiler::ast::{AstNode, NodeKind};
use crate::compiler::render::tags::{self, TagType};
use crate::compiler::render::RenderOptions;
use crate::compiler::token::{Attribute, AttributeKind};

/// Whether a tag name is always self-closed, regardless of the node's own content. Backed by
/// the [tags] registry rather than a separate hardcoded list, so the fixed void-element set has
/// one source of truth; tags the registry doesn't know about are never void.
pub fn is_void_tag(tag: &str) -> bool {
    matches!(tags::lookup(tag), Some(info) if info.tag_type == TagType::Void)
}

/// Escapes `&`, `<`, `>`, `"`, and `'` into their named HTML entities. Applied to element text,
/// class names, id values, and comment bodies - never to attribute values (see [render_attributes]).
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

pub(crate) fn render_node(output: &mut String, node: &AstNode, options: &RenderOptions) {
    if node.is_root() {
        for child in &node.children {
            render_node(output, child, options);
        }
        return;
    }

    if !options.minify {
        append_indent(output, node.depth.max(0) as usize, options);
    }

    match node.node_kind {
        NodeKind::Doctype => {
            output.push_str("<!DOCTYPE ");
            output.push_str(node.text_content.as_deref().unwrap_or("html"));
            output.push('>');
            if !options.minify {
                output.push('\n');
            }
        }
        NodeKind::Text => {
            if let Some(text) = &node.text_content {
                output.push_str(&escape_html(text));
            }
            if !options.minify {
                output.push('\n');
            }
        }
        NodeKind::Interpolation => {
            if let Some(text) = &node.text_content {
                output.push_str("#{ ");
                output.push_str(text);
                output.push_str(" }");
            }
            if !options.minify {
                output.push('\n');
            }
        }
        NodeKind::Comment => {
            if !options.minify {
                output.push_str("<!-- ");
                if let Some(text) = &node.text_content {
                    output.push_str(&escape_html(text));
                }
                output.push_str(" -->\n");
            }
        }
        NodeKind::BlockComment => {}
        NodeKind::Code | NodeKind::Include | NodeKind::Extends | NodeKind::Mixin | NodeKind::Call => {
            if !options.minify {
                output.push_str("<!-- ");
                output.push_str(directive_label(node.node_kind));
                output.push_str(": ");
                output.push_str(node.text_content.as_deref().unwrap_or(""));
                output.push_str(" -->\n");
            }
        }
        NodeKind::Tag => render_tag(output, node, options),
        NodeKind::Root => unreachable!("handled above"),
    }
}

fn directive_label(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Code => "CODE",
        NodeKind::Include => "INCLUDE",
        NodeKind::Extends => "EXTENDS",
        NodeKind::Mixin => "MIXIN",
        NodeKind::Call => "CALL",
        _ => unreachable!("only directive kinds reach here"),
    }
}

fn render_tag(output: &mut String, node: &AstNode, options: &RenderOptions) {
    output.push('<');
    output.push_str(node.effective_tag());

    if let Some(id) = &node.id {
        output.push_str(" id=\"");
        output.push_str(&escape_html(id));
        output.push('"');
    }

    render_classes(output, &node.classes);
    render_attributes(output, &node.attributes);

    if node.is_void || is_void_tag(node.effective_tag()) {
        output.push_str(" />");
        if !options.minify {
            output.push('\n');
        }
        return;
    }
    output.push('>');

    if let Some(text) = &node.text_content {
        if node.is_inline {
            output.push_str(&escape_html(text));
        } else {
            if !options.minify {
                output.push('\n');
                append_indent(output, (node.depth + 1).max(0) as usize, options);
            }
            output.push_str(&escape_html(text));
        }
    }

    if !node.children.is_empty() {
        if !options.minify && (node.text_content.is_none() || node.is_block) {
            output.push('\n');
        }
        for child in &node.children {
            render_node(output, child, options);
        }
        if !options.minify && !node.is_inline {
            append_indent(output, node.depth.max(0) as usize, options);
        }
    } else if !options.minify && node.text_content.is_some() && node.is_block {
        output.push('\n');
        append_indent(output, node.depth.max(0) as usize, options);
    }

    output.push_str("</");
    output.push_str(node.effective_tag());
    output.push('>');
    if !options.minify {
        output.push('\n');
    }
}

fn render_classes(output: &mut String, classes: &[String]) {
    if classes.is_empty() {
        return;
    }
    output.push_str(" class=\"");
    for (i, class) in classes.iter().enumerate() {
        if i > 0 {
            output.push(' ');
        }
        output.push_str(&escape_html(class));
    }
    output.push('"');
}

/// Attribute values are emitted between double quotes but deliberately **not** escaped - a
/// known divergence from strict HTML carried over from the source system.
fn render_attributes(output: &mut String, attributes: &[Attribute]) {
    for attr in attributes {
        output.push(' ');
        output.push_str(&attr.name);
        if attr.kind != AttributeKind::Boolean {
            output.push_str("=\"");
            output.push_str(&attr.value);
            output.push('"');
        }
    }
}

fn append_indent(output: &mut String, depth: usize, options: &RenderOptions) {
    for _ in 0..depth {
        if options.use_tabs {
            output.push('\t');
        } else {
            for _ in 0..options.tab_size {
                output.push(' ');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case('&', "&amp;")]
    #[case('<', "&lt;")]
    #[case('>', "&gt;")]
    #[case('"', "&quot;")]
    #[case('\'', "&#39;")]
    fn escape_html_maps_each_entity(#[case] input: char, #[case] expected: &str) {
        assert_eq!(escape_html(&input.to_string()), expected);
    }

    #[test]
    fn escape_html_leaves_plain_text_untouched() {
        assert_eq!(escape_html("plain text 123"), "plain text 123");
    }

    #[rstest]
    #[case("area")]
    #[case("base")]
    #[case("br")]
    #[case("col")]
    #[case("embed")]
    #[case("hr")]
    #[case("img")]
    #[case("input")]
    #[case("link")]
    #[case("meta")]
    #[case("param")]
    #[case("source")]
    #[case("track")]
    #[case("wbr")]
    fn known_void_tags_self_close(#[case] tag: &str) {
        assert!(is_void_tag(tag));
    }

    #[rstest]
    #[case("div")]
    #[case("span")]
    #[case("p")]
    fn non_void_tags_are_not_self_closing(#[case] tag: &str) {
        assert!(!is_void_tag(tag));
    }
}
