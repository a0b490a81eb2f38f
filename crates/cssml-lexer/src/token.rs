/// A position in source text, tracking line and column for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }
}

/// Token classification for style-sheet source.
///
/// Tokens keep their raw text so the parser can rebuild selectors and
/// declaration values exactly as written.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Trivia (carry raw text)
    Whitespace(String),
    Comment(String),

    // Words (carry raw text)
    Word(String),
    AtWord(String), // @media, without the `@`
    String(String), // quotes included

    // Punctuation
    Colon,
    Semicolon,
    LBrace,
    RBrace,
    LParen,
    RParen,

    // End of input
    Eof,
}

impl TokenKind {
    /// Append the source text this token was scanned from.
    ///
    /// Comments write nothing: they never survive into selectors or values.
    pub fn write_source(&self, out: &mut String) {
        match self {
            TokenKind::Whitespace(text) | TokenKind::Word(text) | TokenKind::String(text) => {
                out.push_str(text)
            }
            TokenKind::AtWord(name) => {
                out.push('@');
                out.push_str(name);
            }
            TokenKind::Colon => out.push(':'),
            TokenKind::Semicolon => out.push(';'),
            TokenKind::LBrace => out.push('{'),
            TokenKind::RBrace => out.push('}'),
            TokenKind::LParen => out.push('('),
            TokenKind::RParen => out.push(')'),
            TokenKind::Comment(_) | TokenKind::Eof => {}
        }
    }
}

/// A token produced by the style-sheet lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}
