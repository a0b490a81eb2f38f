//! Style-sheet parser.
//!
//! Parses the token stream from `cssml-lexer` into a `Stylesheet`.
//! A statement is read up to the first `{`, `;` or `}` outside parentheses:
//! a `{` makes it a rule (or at-rule block), anything else a declaration.
//!
//! Uses recursive descent, one level per nested block.

use crate::ast::{AtRule, Declaration, Node, Rule, Stylesheet};
use crate::ParseError;
use cssml_lexer::{Span, Token, TokenKind};

/// Style-sheet parser.
///
/// Converts a flat token stream into a tree of nodes using recursive descent.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Create a new parser for the given tokens.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse source text into a style sheet.
    pub fn parse(source: &str) -> Result<Stylesheet, ParseError> {
        let tokens = cssml_lexer::Scanner::tokenize(source).map_err(|e| ParseError {
            message: e.message,
            line: e.line,
            column: e.column,
        })?;

        let mut parser = Parser::new(tokens);
        parser.parse_stylesheet()
    }

    fn parse_stylesheet(&mut self) -> Result<Stylesheet, ParseError> {
        let nodes = self.parse_block(None)?;
        Ok(Stylesheet { nodes })
    }

    // =========================================================================
    // Blocks
    // =========================================================================

    /// Parse nodes until the block closes. `open` is the span of the `{` that
    /// opened the block, `None` at the top level.
    fn parse_block(&mut self, open: Option<Span>) -> Result<Vec<Node>, ParseError> {
        let mut nodes = Vec::new();

        loop {
            self.skip_whitespace();
            let span = self.peek().span;

            match &self.peek().kind {
                TokenKind::Eof => {
                    if let Some(open) = open {
                        return Err(error_at("Unclosed block", open));
                    }
                    break;
                }
                TokenKind::RBrace => {
                    if open.is_none() {
                        return Err(error_at("Unexpected }", span));
                    }
                    self.advance(); // consume `}`
                    break;
                }
                TokenKind::Semicolon => {
                    // Stray separator
                    self.advance();
                }
                TokenKind::Comment(text) => {
                    let text = text.clone();
                    self.advance();
                    nodes.push(Node::Comment(text));
                }
                TokenKind::AtWord(_) => {
                    nodes.push(self.parse_at_rule()?);
                }
                _ => {
                    nodes.push(self.parse_statement()?);
                }
            }
        }

        Ok(nodes)
    }

    /// Parse a rule or a declaration, whichever the terminator says it is.
    fn parse_statement(&mut self) -> Result<Node, ParseError> {
        let start = self.peek().span;
        let prelude = self.collect_prelude()?;

        if self.peek().kind == TokenKind::LBrace {
            let open = self.peek().span;
            self.advance(); // consume `{`

            let selector = source_text(&prelude);
            if selector.is_empty() {
                return Err(error_at("Missing selector before {", open));
            }

            let children = self.parse_block(Some(open))?;
            return Ok(Node::Rule(Rule {
                selector,
                children,
                span: start,
            }));
        }

        // `}` stays for the enclosing block to consume
        if self.peek().kind == TokenKind::Semicolon {
            self.advance();
        }

        parse_declaration(&prelude, start).map(Node::Declaration)
    }

    /// Parse `@name params;` or `@name params { ... }`.
    fn parse_at_rule(&mut self) -> Result<Node, ParseError> {
        let start = self.peek().span;
        let name = match &self.peek().kind {
            TokenKind::AtWord(name) => name.clone(),
            _ => return Err(error_at("Expected at-rule", start)),
        };
        self.advance(); // consume `@name`

        let params = source_text(&self.collect_prelude()?);

        let children = match self.peek().kind {
            TokenKind::LBrace => {
                let open = self.peek().span;
                self.advance();
                Some(self.parse_block(Some(open))?)
            }
            TokenKind::Semicolon => {
                self.advance();
                None
            }
            _ => None,
        };

        Ok(Node::AtRule(AtRule {
            name,
            params,
            children,
            span: start,
        }))
    }

    /// Collect tokens up to a `{`, `;` or `}` outside parentheses, or EOF.
    /// The terminator is left unconsumed.
    fn collect_prelude(&mut self) -> Result<Vec<Token>, ParseError> {
        let mut prelude = Vec::new();
        let mut open_parens: Vec<Span> = Vec::new();

        loop {
            let token = self.peek();
            match token.kind {
                TokenKind::Eof => {
                    if let Some(&open) = open_parens.last() {
                        return Err(error_at("Unclosed bracket", open));
                    }
                    break;
                }
                TokenKind::LBrace | TokenKind::Semicolon | TokenKind::RBrace
                    if open_parens.is_empty() =>
                {
                    break;
                }
                TokenKind::LParen => open_parens.push(token.span),
                TokenKind::RParen => {
                    open_parens.pop();
                }
                _ => {}
            }

            prelude.push(token.clone());
            self.advance();
        }

        Ok(prelude)
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn skip_whitespace(&mut self) {
        while matches!(self.peek().kind, TokenKind::Whitespace(_)) {
            self.advance();
        }
    }

    fn peek(&self) -> &Token {
        // The scanner always ends the stream with EOF
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
    }
}

/// Split a prelude at its first top-level `:` into property and value.
fn parse_declaration(prelude: &[Token], start: Span) -> Result<Declaration, ParseError> {
    let mut depth = 0usize;
    let mut colon = None;
    for (i, token) in prelude.iter().enumerate() {
        match token.kind {
            TokenKind::LParen => depth += 1,
            TokenKind::RParen => depth = depth.saturating_sub(1),
            TokenKind::Colon if depth == 0 => {
                colon = Some(i);
                break;
            }
            _ => {}
        }
    }

    let Some(colon) = colon else {
        return Err(error_at(
            &format!("Unknown word {}", source_text(prelude)),
            start,
        ));
    };

    let property = source_text(&prelude[..colon]);
    if property.is_empty() {
        return Err(error_at("Missing property name", start));
    }

    Ok(Declaration {
        property,
        value: source_text(&prelude[colon + 1..]),
        span: start,
    })
}

/// Rebuild trimmed source text from tokens, dropping comments.
fn source_text(tokens: &[Token]) -> String {
    let mut text = String::new();
    for token in tokens {
        token.kind.write_source(&mut text);
    }
    text.trim().to_string()
}

fn error_at(message: &str, span: Span) -> ParseError {
    ParseError {
        message: message.to_string(),
        line: span.line,
        column: span.column,
    }
}
