//! cssml Parser
//!
//! Parses a token stream into a concrete syntax tree of rules, declarations,
//! at-rules and comments. Rules nest to any depth.

pub mod ast;
pub mod parser;

pub use ast::{AtRule, Declaration, Node, Rule, Stylesheet};
pub use parser::Parser;

/// Parser error with position information.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Parse error at line {line}, column {column}: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}
