//! Vertex tree construction.
//!
//! Each rule with a bare element selector becomes a `Vertex`; rules nested
//! inside it with element selectors become its children. `:root` becomes
//! the doctype marker.

use crate::classify::{classify_children, classify_selector, SelectorKind};
use crate::variables::Variables;
use crate::Vertex;
use cssml_parser::ast::{Node, Rule, Stylesheet};

/// Tag of the vertex produced for `:root`.
pub const DOCTYPE_TAG: &str = "!DOCTYPE html";

/// Build the root vertices of a style sheet, in document order.
/// Top-level declarations, at-rules and unsupported rules produce nothing.
pub fn build(sheet: &Stylesheet, vars: &Variables) -> Vec<Vertex> {
    sheet
        .nodes
        .iter()
        .filter_map(|node| match node {
            Node::Rule(rule) => build_vertex(rule, vars),
            _ => None,
        })
        .collect()
}

/// Build the vertex for one rule, or `None` when its selector is not an
/// element (or the root) selector.
pub fn build_vertex(rule: &Rule, vars: &Variables) -> Option<Vertex> {
    let tag = match classify_selector(&rule.selector) {
        SelectorKind::Root => return Some(doctype()),
        SelectorKind::Element(tag) => tag,
        SelectorKind::Attribute(_) | SelectorKind::Unsupported => {
            log::debug!("skipping rule with selector {:?}", rule.selector);
            return None;
        }
    };

    let classified = classify_children(&rule.children, vars);

    let children: Vec<Vertex> = rule
        .children
        .iter()
        .filter_map(|node| match node {
            Node::Rule(child) => match classify_selector(&child.selector) {
                SelectorKind::Element(_) => build_vertex(child, vars),
                _ => None,
            },
            _ => None,
        })
        .collect();

    Some(Vertex {
        tag: tag.to_string(),
        attrs: classified.attrs,
        content: classified.content,
        children: if children.is_empty() {
            None
        } else {
            Some(children)
        },
    })
}

/// The doctype marker vertex.
pub fn doctype() -> Vertex {
    Vertex {
        tag: DOCTYPE_TAG.to_string(),
        attrs: Vec::new(),
        content: Some(String::new()),
        children: Some(Vec::new()),
    }
}
