//! The compilation pipeline and its surrounding ambient stack
//!
//!     [compile] is the primary entry point: lex, parse, render, in that order, with no shared
//!     mutable state and no stage starting before the previous one has fully finished.

pub mod ast;
pub mod config;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod render;
pub mod token;

pub use render::RenderOptions;

/// Compiles a complete document into an HTML string.
///
/// Infallible: any `&str`, however malformed the template syntax it contains, produces some
/// HTML string rather than an error. Empty input produces an empty string.
pub fn compile(source: &str, options: RenderOptions) -> String {
    let tokens = lexer::tokenize(source);
    let root = parser::parse(&tokens);
    render::render(&root, &options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_produces_empty_output() {
        assert_eq!(compile("", RenderOptions::default()), "");
    }

    #[test]
    fn scenario_simple_element_with_class_id_and_inline_text() {
        let output = compile("p.hello#greet Hi there", RenderOptions::default());
        assert_eq!(output, "<p id=\"greet\" class=\"hello\">Hi there</p>\n");
    }

    #[test]
    fn scenario_nested_structure_with_void_child() {
        let source = "div\n  img(src=\"a.png\")\n  p Text";
        let output = compile(source, RenderOptions::default());
        assert_eq!(output, "<div>\n  <img src=\"a.png\" />\n  <p>Text</p>\n</div>\n");
    }

    #[test]
    fn scenario_doctype_and_escaping() {
        let source = "doctype html\np <script>";
        let output = compile(source, RenderOptions::default());
        assert_eq!(output, "<!DOCTYPE html>\n<p>&lt;script&gt;</p>\n");
    }

    #[test]
    fn scenario_block_text_via_pipe_on_separate_indented_lines() {
        let source = "p\n  | line one\n  | line two";
        let output = compile(source, RenderOptions::default());
        assert_eq!(output, "<p>\n  line one\n  line two\n</p>\n");
    }

    #[test]
    fn scenario_minification_suppresses_comments() {
        let source = "// visible in pretty\ndiv Hello";
        let options = RenderOptions {
            minify: true,
            ..RenderOptions::default()
        };
        assert_eq!(compile(source, options), "<div>Hello</div>");
    }

    #[test]
    fn scenario_attribute_parsing_with_quotes_and_multiple_pairs() {
        let output = compile("meta(charset=\"UTF-8\", name='viewport')", RenderOptions::default());
        assert_eq!(output, "<meta charset=\"UTF-8\" name=\"viewport\" />\n");
    }

    #[test]
    fn rendering_is_deterministic() {
        let source = "div.a#b(x=\"1\")\n  p Hello #{name}";
        let first = compile(source, RenderOptions::default());
        let second = compile(source, RenderOptions::default());
        assert_eq!(first, second);
    }

    #[test]
    fn minified_output_has_no_renderer_introduced_newlines() {
        let source = "div\n  p Hello\n  span World";
        let options = RenderOptions {
            minify: true,
            ..RenderOptions::default()
        };
        assert!(!compile(source, options).contains('\n'));
    }

    #[test]
    fn use_tabs_emits_one_tab_per_level() {
        let options = RenderOptions {
            use_tabs: true,
            ..RenderOptions::default()
        };
        let output = compile("div\n  p Hi", options);
        assert_eq!(output, "<div>\n\t<p>Hi</p>\n</div>\n");
    }

    #[test]
    fn snapshot_of_doctype_comment_code_and_sibling_list() {
        let source = "doctype html\n// top comment\n- let x = 1\nul\n  li.item Apple\n  li.item Banana";
        let output = compile(source, RenderOptions::default());
        insta::assert_snapshot!(output, @r###"
        <!DOCTYPE html>
        <!-- top comment -->
        <!-- CODE: let x = 1 -->
        <ul>
          <li class="item">Apple</li>
          <li class="item">Banana</li>
        </ul>
        "###);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_document() -> impl Strategy<Value = String> {
        proptest::collection::vec((0usize..4, "[a-z][a-z0-9]{0,5}", proptest::option::of("[A-Za-z ]{0,10}")), 0..8)
            .prop_map(|lines| {
                lines
                    .into_iter()
                    .map(|(depth, tag, text)| {
                        let indent = "  ".repeat(depth);
                        match text {
                            Some(t) if !t.is_empty() => format!("{indent}{tag} {t}"),
                            _ => format!("{indent}{tag}"),
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            })
    }

    fn assert_children_deeper_than_parent(node: &ast::AstNode) {
        for child in &node.children {
            assert!(child.depth > node.depth);
            assert_children_deeper_than_parent(child);
        }
    }

    proptest! {
        #[test]
        fn parsed_children_are_always_deeper_than_their_parent(source in arb_document()) {
            let tokens = lexer::tokenize(&source);
            let root = parser::parse(&tokens);
            assert_children_deeper_than_parent(&root);
        }

        #[test]
        fn compiling_the_same_source_twice_is_deterministic(source in arb_document()) {
            let options = RenderOptions::default();
            let first = compile(&source, options);
            let second = compile(&source, options);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn minified_output_never_contains_a_newline(source in arb_document()) {
            let options = RenderOptions {
                minify: true,
                ..RenderOptions::default()
            };
            let rendered = compile(&source, options);
            prop_assert!(!rendered.contains('\n'));
        }

        #[test]
        fn every_token_column_fits_within_its_own_line(source in "[a-zA-Z0-9 .#()_-]{0,120}") {
            let line_len = source.len();
            for token in lexer::tokenize(&source) {
                prop_assert!(token.column <= line_len);
            }
        }
    }
}
