//! Selector and declaration classification.
//!
//! Decides what each child of a rule becomes in the markup tree: text
//! content, an attribute, a nested attribute-rule, or nothing at all.

use crate::variables::{Variables, CUSTOM_PROPERTY_PREFIX};
use crate::{strip_attribute_marker, Attr, ATTRIBUTE_MARKER};
use cssml_parser::ast::{Node, Rule};

/// The selector that stands for the document type declaration.
pub const ROOT_SELECTOR: &str = ":root";

/// The property whose value becomes an element's text content.
pub const CONTENT_PROPERTY: &str = "content";

/// Properties emitted as markup attributes. Sorted for binary search.
pub const ATTRIBUTE_NAMES: &[&str] = &[
    "alt",
    "autofocus",
    "charset",
    "checked",
    "class",
    "disabled",
    "hidden",
    "href",
    "id",
    "name",
    "onblur",
    "onchange",
    "onclick",
    "onmouseout",
    "onmouseover",
    "onsubmit",
    "placeholder",
    "readonly",
    "rel",
    "required",
    "src",
    "style",
    "tabindex",
    "target",
    "title",
    "type",
    "value",
    "viewport",
];

/// Check if a property is a recognized markup attribute.
pub fn is_attribute_name(property: &str) -> bool {
    ATTRIBUTE_NAMES.binary_search(&property).is_ok()
}

/// What a rule's selector means for the markup tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKind<'a> {
    /// `:root`, the doctype marker.
    Root,
    /// A bare alphanumeric identifier naming an element.
    Element(&'a str),
    /// `\name`, an attribute whose value is the rule's content.
    Attribute(&'a str),
    /// Anything else: classes, ids, combinators, pseudo-selectors.
    Unsupported,
}

/// Classify a selector.
pub fn classify_selector(selector: &str) -> SelectorKind<'_> {
    if selector == ROOT_SELECTOR {
        SelectorKind::Root
    } else if is_element_name(selector) {
        SelectorKind::Element(selector)
    } else if selector.starts_with(ATTRIBUTE_MARKER) {
        SelectorKind::Attribute(strip_attribute_marker(selector).trim())
    } else {
        SelectorKind::Unsupported
    }
}

/// A non-empty run of ASCII letters and digits.
pub fn is_element_name(selector: &str) -> bool {
    !selector.is_empty() && selector.chars().all(|c| c.is_ascii_alphanumeric())
}

/// What a declaration inside a rule contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    /// `content: ...`, the element's text.
    Content,
    /// A recognized markup attribute.
    Attribute,
    /// `--name: ...`, only consulted through `var()`.
    CustomProperty,
    /// Presentation styling. Not carried into the markup.
    Style,
}

/// Classify a declaration by its property name.
pub fn classify_declaration(property: &str) -> DeclarationKind {
    if property == CONTENT_PROPERTY {
        DeclarationKind::Content
    } else if is_attribute_name(property) {
        DeclarationKind::Attribute
    } else if property.starts_with(CUSTOM_PROPERTY_PREFIX) {
        DeclarationKind::CustomProperty
    } else {
        DeclarationKind::Style
    }
}

/// Attributes and text content extracted from one rule's immediate children.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classified {
    pub attrs: Vec<Attr>,
    pub content: Option<String>,
}

/// Partition a rule's immediate children into attributes and content.
///
/// Values go through `vars` first. Style declarations, element rules,
/// at-rules and comments contribute nothing here.
pub fn classify_children(nodes: &[Node], vars: &Variables) -> Classified {
    let mut classified = Classified::default();

    for node in nodes {
        match node {
            Node::Declaration(decl) => {
                let value = vars.resolve(&decl.value);
                match classify_declaration(&decl.property) {
                    DeclarationKind::Content => {
                        classified.content = Some(value.to_string());
                    }
                    DeclarationKind::Attribute => {
                        classified.attrs.push(Attr::new(&decl.property, value));
                    }
                    DeclarationKind::CustomProperty | DeclarationKind::Style => {
                        log::debug!("dropping style declaration {}", decl.property);
                    }
                }
            }
            Node::Rule(rule) => {
                if let Some(attr) = attribute_rule(rule, vars) {
                    classified.attrs.push(attr);
                }
            }
            Node::AtRule(_) | Node::Comment(_) => {}
        }
    }

    classified
}

/// Turn a `\name { content: ... }` rule into an attribute. Rules without
/// the marker, or whose content is missing or empty, yield nothing.
fn attribute_rule(rule: &Rule, vars: &Variables) -> Option<Attr> {
    let SelectorKind::Attribute(name) = classify_selector(&rule.selector) else {
        return None;
    };
    let content = classify_children(&rule.children, vars).content?;
    if content.is_empty() {
        return None;
    }
    Some(Attr::new(name, &content))
}
