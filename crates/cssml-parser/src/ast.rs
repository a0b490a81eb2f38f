//! Concrete syntax tree for style-sheet source.
//!
//! Selectors, properties, values and at-rule params are kept as trimmed raw
//! text. Nothing is interpreted here; deciding what a selector or property
//! means is the code generator's job.

use cssml_lexer::Span;

/// A complete parsed style sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Stylesheet {
    pub nodes: Vec<Node>,
}

/// A node at any level of the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// `selector { ... }`
    Rule(Rule),

    /// `property: value`
    Declaration(Declaration),

    /// `@name params;` or `@name params { ... }`
    AtRule(AtRule),

    /// A `/* comment */` between statements.
    Comment(String),
}

/// A style rule with its nested nodes in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub selector: String,
    pub children: Vec<Node>,
    pub span: Span,
}

/// A single `property: value` pair. The value keeps quotes and escapes.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
    pub span: Span,
}

/// An at-rule. `children` is `None` for the statement form (`@import x;`).
#[derive(Debug, Clone, PartialEq)]
pub struct AtRule {
    pub name: String,
    pub params: String,
    pub children: Option<Vec<Node>>,
    pub span: Span,
}

impl Stylesheet {
    /// Visit every declaration in the tree, depth-first in document order.
    pub fn walk_declarations<'a>(&'a self, visit: &mut impl FnMut(&'a Declaration)) {
        walk_nodes(&self.nodes, visit);
    }
}

fn walk_nodes<'a>(nodes: &'a [Node], visit: &mut impl FnMut(&'a Declaration)) {
    for node in nodes {
        match node {
            Node::Declaration(decl) => visit(decl),
            Node::Rule(rule) => walk_nodes(&rule.children, visit),
            Node::AtRule(at_rule) => {
                if let Some(children) = &at_rule.children {
                    walk_nodes(children, visit);
                }
            }
            Node::Comment(_) => {}
        }
    }
}
