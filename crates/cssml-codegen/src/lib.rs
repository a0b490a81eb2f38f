//! cssml Code Generator
//!
//! Reads a parsed style sheet as an encoding of a markup tree and renders it
//! as HTML. Selectors name elements, declarations become attributes or text
//! content, and `\name { ... }` rules become attributes built from content.
//!
//! ```text
//! Stylesheet → Variables::collect() → tree::build() → Vec<Vertex> → html::generate() → String
//! ```
//!
//! # Example
//!
//! ```
//! let html = cssml_codegen::convert("div { class: \"box\"; p { content: \"Hi\"; } }").unwrap();
//! assert_eq!(html, "<div class=\"box\"><p>Hi</p></div>");
//! ```

pub mod classify;
pub mod html;
pub mod tree;
pub mod variables;

use cssml_parser::ast::Stylesheet;
use cssml_parser::{ParseError, Parser};
use serde::Serialize;

pub use variables::Variables;

/// Marks a nested rule as an attribute: `\title { content: "..." }`.
pub const ATTRIBUTE_MARKER: char = '\\';

/// Remove one leading attribute marker, if present.
///
/// Shared by the classifier (attribute-rule names) and the renderer
/// (attribute names) so both agree on what the marker is.
pub fn strip_attribute_marker(name: &str) -> &str {
    name.strip_prefix(ATTRIBUTE_MARKER).unwrap_or(name)
}

/// A markup attribute, or the value an attribute-rule contributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attr {
    pub prop: String,
    pub value: String,
}

impl Attr {
    pub fn new(prop: &str, value: &str) -> Self {
        Self {
            prop: prop.to_string(),
            value: value.to_string(),
        }
    }
}

/// One element of the markup tree.
///
/// `children` is `None` when the rule had no nested element rules, which is
/// kept distinct from an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vertex {
    pub tag: String,
    pub attrs: Vec<Attr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Vertex>>,
}

/// The result of compiling a style sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct CompilerOutput {
    pub html: String,
    pub vertices: Vec<Vertex>,
}

/// Compile a parsed style sheet into a vertex tree and its HTML.
///
/// Variables are collected fresh for every call.
pub fn compile(sheet: &Stylesheet) -> CompilerOutput {
    let vars = Variables::collect(sheet);
    let vertices = tree::build(sheet, &vars);
    let html = html::generate(&vertices);
    log::debug!("compiled {} root elements", vertices.len());

    CompilerOutput { html, vertices }
}

/// Parse and compile style-sheet source straight to HTML.
pub fn convert(source: &str) -> Result<String, ParseError> {
    let sheet = Parser::parse(source)?;
    Ok(compile(&sheet).html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn html(source: &str) -> String {
        convert(source).unwrap()
    }

    // =========================================================================
    // Attribute marker
    // =========================================================================

    #[test]
    fn test_strip_attribute_marker() {
        assert_eq!(strip_attribute_marker("\\href"), "href");
        assert_eq!(strip_attribute_marker("href"), "href");
        assert_eq!(strip_attribute_marker("\\\\x"), "\\x");
        assert_eq!(strip_attribute_marker(""), "");
    }

    // =========================================================================
    // End to end
    // =========================================================================

    #[test]
    fn test_style_only_rule() {
        let sheet = Parser::parse("a { color: red; }").unwrap();
        let output = compile(&sheet);
        assert_eq!(
            output.vertices,
            vec![Vertex {
                tag: "a".into(),
                attrs: vec![],
                content: None,
                children: None,
            }]
        );
        assert_eq!(output.html, "<a></a>");
    }

    #[test]
    fn test_styles_dropped() {
        assert_eq!(html("div { color: blue; }"), "<div></div>");
    }

    #[test]
    fn test_attributes_and_content() {
        assert_eq!(
            html("div { class: \"container\"; content: \"Hello\"; color: blue; }"),
            "<div class=\"container\">Hello</div>"
        );
    }

    #[test]
    fn test_nested() {
        assert_eq!(
            html("div { p { content: \"Nested\"; } }"),
            "<div><p>Nested</p></div>"
        );
    }

    #[test]
    fn test_void_element_from_source() {
        assert_eq!(
            html("img { src: \"image.jpg\"; content: \"never\"; }"),
            "<img src=\"image.jpg\" />"
        );
    }

    #[test]
    fn test_root_renders_doctype_only() {
        assert_eq!(
            html(":root { --x: 1; content: \"no\"; body { } }"),
            "<!DOCTYPE html>"
        );
    }

    #[test]
    fn test_variables() {
        assert_eq!(
            html(":root { --title: \"Home\"; }\ntitle { content: var(--title); }\np { content: var(--missing); }"),
            "<!DOCTYPE html>\n<title>Home</title>\n<p>var(--missing)</p>"
        );
    }

    #[test]
    fn test_attribute_rule() {
        assert_eq!(
            html("a { href: \"/\"; \\title { content: \"Go home\"; } content: \"Home\"; }"),
            "<a href=\"/\" title=\"Go home\">Home</a>"
        );
    }

    #[test]
    fn test_full_page() {
        let source = r#"
/* A complete page */
:root {
  --site: "cssml";
}

html {
  head {
    meta { charset: "utf-8"; }
    title { content: var(--site); }
  }
  body {
    class: "page";
    background: white;
    h1 { content: "Welcome"; color: navy; }
    a {
      href: "/about";
      \title { content: "About us"; }
      content: "About";
    }
    .hidden { p { content: "never"; } }
    br {}
  }
}
"#;
        assert_eq!(
            html(source),
            "<!DOCTYPE html>\n<html><head><link rel=\"stylesheet\" href=\"styles.css\"><meta charset=\"utf-8\" /><title>cssml</title></head><body class=\"page\"><h1>Welcome</h1><a href=\"/about\" title=\"About us\">About</a><br /></body></html>"
        );
    }

    #[test]
    fn test_parse_error_propagates() {
        let err = convert("div { p { }").unwrap_err();
        assert_eq!(err.message, "Unclosed block");
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(html(""), "");
    }

    #[test]
    fn test_no_variable_leakage_between_conversions() {
        let first = html(":root { --x: \"first\"; }\np { content: var(--x); }");
        let second = html("p { content: var(--x); }");
        assert_eq!(first, "<!DOCTYPE html>\n<p>first</p>");
        assert_eq!(second, "<p>var(--x)</p>");
    }
}
