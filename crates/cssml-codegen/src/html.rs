//! HTML renderer.
//!
//! Serializes a `Vertex` tree to markup. Values are emitted exactly as stored;
//! the only rewriting is one pair of double quotes stripped from content.

use crate::{strip_attribute_marker, Vertex};

/// Injected at the start of every `<head>`.
pub const STYLESHEET_LINK: &str = r#"<link rel="stylesheet" href="styles.css">"#;

/// HTML5 void elements (self-closing, no content or children).
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Check if a tag name is an HTML5 void element.
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Render root vertices, one per line.
pub fn generate(vertices: &[Vertex]) -> String {
    vertices
        .iter()
        .map(render)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render one vertex and everything below it.
pub fn render(vertex: &Vertex) -> String {
    let mut out = String::new();
    render_into(vertex, &mut out);
    out
}

fn render_into(vertex: &Vertex, out: &mut String) {
    let tag = vertex.tag.as_str();
    let content = vertex.content.as_deref().map(unquote).unwrap_or_default();

    // Content-only node
    if tag.is_empty() {
        out.push_str(content);
        return;
    }

    // Doctype and other `!` declarations
    if tag.starts_with('!') {
        out.push('<');
        out.push_str(tag);
        out.push('>');
        return;
    }

    out.push('<');
    out.push_str(tag);
    push_attrs(vertex, out);

    if is_void_element(tag) {
        out.push_str(" />");
        return;
    }

    out.push('>');
    out.push_str(content);

    if tag == "head" {
        out.push_str(STYLESHEET_LINK);
    }
    for child in vertex.children.iter().flatten() {
        render_into(child, out);
    }

    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Space-separated `name=value` pairs, preceded by a space when non-empty.
fn push_attrs(vertex: &Vertex, out: &mut String) {
    for attr in &vertex.attrs {
        out.push(' ');
        out.push_str(strip_attribute_marker(&attr.prop));
        out.push('=');
        out.push_str(&attr.value);
    }
}

/// Strip one pair of surrounding double quotes.
fn unquote(content: &str) -> &str {
    content
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::doctype;
    use crate::Attr;
    use pretty_assertions::assert_eq;

    fn element(tag: &str, attrs: Vec<Attr>, content: Option<&str>) -> Vertex {
        Vertex {
            tag: tag.into(),
            attrs,
            content: content.map(String::from),
            children: None,
        }
    }

    fn with_children(mut vertex: Vertex, children: Vec<Vertex>) -> Vertex {
        vertex.children = Some(children);
        vertex
    }

    // =========================================================================
    // Basic elements
    // =========================================================================

    #[test]
    fn test_empty_element() {
        assert_eq!(render(&element("a", vec![], None)), "<a></a>");
    }

    #[test]
    fn test_element_with_content() {
        assert_eq!(render(&element("p", vec![], Some("Hello"))), "<p>Hello</p>");
    }

    #[test]
    fn test_content_quotes_stripped() {
        assert_eq!(
            render(&element("p", vec![], Some("\"Hello\""))),
            "<p>Hello</p>"
        );
    }

    #[test]
    fn test_only_one_quote_pair_stripped() {
        assert_eq!(
            render(&element("p", vec![], Some("\"\"x\"\""))),
            "<p>\"x\"</p>"
        );
    }

    #[test]
    fn test_unbalanced_quotes_kept() {
        assert_eq!(render(&element("p", vec![], Some("\"open"))), "<p>\"open</p>");
        assert_eq!(render(&element("p", vec![], Some("\""))), "<p>\"</p>");
    }

    #[test]
    fn test_single_quotes_kept() {
        assert_eq!(render(&element("p", vec![], Some("'hi'"))), "<p>'hi'</p>");
    }

    #[test]
    fn test_attributes_emitted_verbatim() {
        let vertex = element(
            "div",
            vec![Attr::new("class", "\"container\""), Attr::new("id", "main")],
            Some("\"Hello\""),
        );
        assert_eq!(
            render(&vertex),
            "<div class=\"container\" id=main>Hello</div>"
        );
    }

    #[test]
    fn test_attribute_marker_stripped() {
        let vertex = element("a", vec![Attr::new("\\title", "\"t\"")], None);
        assert_eq!(render(&vertex), "<a title=\"t\"></a>");
    }

    #[test]
    fn test_content_only_vertex() {
        assert_eq!(render(&element("", vec![], Some("\"text\""))), "text");
        assert_eq!(render(&element("", vec![], None)), "");
    }

    // =========================================================================
    // Structure
    // =========================================================================

    #[test]
    fn test_nested_children_concatenated() {
        let vertex = with_children(
            element("ul", vec![], None),
            vec![
                element("li", vec![], Some("a")),
                element("li", vec![], Some("b")),
            ],
        );
        assert_eq!(render(&vertex), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn test_content_precedes_children() {
        let vertex = with_children(
            element("p", vec![], Some("\"Hi \"")),
            vec![element("b", vec![], Some("there"))],
        );
        assert_eq!(render(&vertex), "<p>Hi <b>there</b></p>");
    }

    #[test]
    fn test_empty_and_absent_children_render_alike() {
        let absent = element("div", vec![], None);
        let empty = with_children(element("div", vec![], None), vec![]);
        assert_eq!(render(&absent), render(&empty));
    }

    #[test]
    fn test_void_element() {
        let vertex = element("img", vec![Attr::new("src", "\"image.jpg\"")], None);
        assert_eq!(render(&vertex), "<img src=\"image.jpg\" />");
    }

    #[test]
    fn test_void_element_without_attributes() {
        assert_eq!(render(&element("br", vec![], None)), "<br />");
    }

    #[test]
    fn test_void_element_ignores_content_and_children() {
        let vertex = with_children(
            element("input", vec![Attr::new("type", "text")], Some("ignored")),
            vec![element("span", vec![], Some("ignored"))],
        );
        assert_eq!(render(&vertex), "<input type=text />");
    }

    #[test]
    fn test_doctype() {
        assert_eq!(render(&doctype()), "<!DOCTYPE html>");
    }

    #[test]
    fn test_bang_tag_ignores_everything_else() {
        let vertex = with_children(
            element("!DOCTYPE html", vec![Attr::new("id", "x")], Some("c")),
            vec![element("p", vec![], None)],
        );
        assert_eq!(render(&vertex), "<!DOCTYPE html>");
    }

    // =========================================================================
    // Head injection
    // =========================================================================

    #[test]
    fn test_head_without_children() {
        let vertex = with_children(element("head", vec![], None), vec![]);
        assert_eq!(
            render(&vertex),
            "<head><link rel=\"stylesheet\" href=\"styles.css\"></head>"
        );
    }

    #[test]
    fn test_head_link_precedes_children() {
        let vertex = with_children(
            element("head", vec![], None),
            vec![
                element("meta", vec![Attr::new("charset", "\"utf-8\"")], None),
                element("title", vec![], Some("\"Home\"")),
            ],
        );
        assert_eq!(
            render(&vertex),
            "<head><link rel=\"stylesheet\" href=\"styles.css\"><meta charset=\"utf-8\" /><title>Home</title></head>"
        );
    }

    #[test]
    fn test_generate_joins_roots_with_newlines() {
        let html = generate(&[doctype(), element("html", vec![], None)]);
        assert_eq!(html, "<!DOCTYPE html>\n<html></html>");
    }

    #[test]
    fn test_generate_empty() {
        assert_eq!(generate(&[]), "");
    }
}
