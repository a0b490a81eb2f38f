use crate::token::{Span, Token, TokenKind};
use crate::LexerError;

/// Style-sheet source scanner.
///
/// Tokenizes source text into a flat stream of tokens.
/// Keeps the raw text of words, strings and whitespace so nothing the
/// author wrote is normalized away before the parser sees it.
///
/// - `Vec<char>` source for index-based navigation
/// - Line and column tracking on every token
/// - Backslash escapes glue the next character onto the current word
pub struct Scanner {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
    tokens: Vec<Token>,
}

impl Scanner {
    /// Create a new scanner for the given source.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source into a vector of tokens.
    pub fn tokenize(source: &str) -> Result<Vec<Token>, LexerError> {
        let mut scanner = Scanner::new(source);
        scanner.scan_tokens()?;
        Ok(scanner.tokens)
    }

    /// Scan all tokens from the source.
    fn scan_tokens(&mut self) -> Result<(), LexerError> {
        while !self.is_at_end() {
            self.scan_token()?;
        }

        self.emit(TokenKind::Eof);
        Ok(())
    }

    /// Scan the next token.
    fn scan_token(&mut self) -> Result<(), LexerError> {
        let ch = self.peek();

        match ch {
            c if is_whitespace(c) => {
                self.scan_whitespace();
                Ok(())
            }

            '/' if self.peek_next() == '*' => self.scan_comment(),

            '"' | '\'' => self.scan_string(),

            '@' => {
                self.scan_at_word();
                Ok(())
            }

            ':' => self.punct(TokenKind::Colon),
            ';' => self.punct(TokenKind::Semicolon),
            '{' => self.punct(TokenKind::LBrace),
            '}' => self.punct(TokenKind::RBrace),
            '(' => self.punct(TokenKind::LParen),
            ')' => self.punct(TokenKind::RParen),

            _ => {
                self.scan_word();
                Ok(())
            }
        }
    }

    // --- Scanners ---

    fn punct(&mut self, kind: TokenKind) -> Result<(), LexerError> {
        let span = Span::new(self.pos, self.pos + 1, self.line, self.column);
        self.advance();
        self.tokens.push(Token::new(kind, span));
        Ok(())
    }

    /// Scan a run of whitespace, including newlines.
    fn scan_whitespace(&mut self) {
        let (start_pos, start_line, start_col) = (self.pos, self.line, self.column);

        let mut text = String::new();
        while !self.is_at_end() && is_whitespace(self.peek()) {
            text.push(self.advance());
        }

        let span = Span::new(start_pos, self.pos, start_line, start_col);
        self.tokens
            .push(Token::new(TokenKind::Whitespace(text), span));
    }

    /// Scan a `/* ... */` comment. The token carries the trimmed body.
    fn scan_comment(&mut self) -> Result<(), LexerError> {
        let (start_pos, start_line, start_col) = (self.pos, self.line, self.column);

        // Skip `/*`
        self.advance();
        self.advance();

        let mut body = String::new();
        loop {
            if self.is_at_end() {
                return Err(LexerError {
                    message: "Unclosed comment".into(),
                    line: start_line,
                    column: start_col,
                });
            }
            if self.peek() == '*' && self.peek_next() == '/' {
                self.advance();
                self.advance();
                break;
            }
            body.push(self.advance());
        }

        let span = Span::new(start_pos, self.pos, start_line, start_col);
        self.tokens.push(Token::new(
            TokenKind::Comment(body.trim().to_string()),
            span,
        ));
        Ok(())
    }

    /// Scan a string literal. The raw text is kept, quotes and escapes included,
    /// since declaration values are passed through verbatim.
    fn scan_string(&mut self) -> Result<(), LexerError> {
        let (start_pos, start_line, start_col) = (self.pos, self.line, self.column);

        let quote = self.advance();
        let mut raw = String::new();
        raw.push(quote);

        loop {
            if self.is_at_end() {
                return Err(LexerError {
                    message: "Unclosed string".into(),
                    line: start_line,
                    column: start_col,
                });
            }
            let c = self.advance();
            raw.push(c);
            if c == quote {
                break;
            }
            if c == '\\' && !self.is_at_end() {
                raw.push(self.advance());
            }
        }

        let span = Span::new(start_pos, self.pos, start_line, start_col);
        self.tokens.push(Token::new(TokenKind::String(raw), span));
        Ok(())
    }

    /// Scan an at-keyword such as `@media`.
    fn scan_at_word(&mut self) {
        let (start_pos, start_line, start_col) = (self.pos, self.line, self.column);
        self.advance(); // consume `@`

        let name = self.read_word();

        let span = Span::new(start_pos, self.pos, start_line, start_col);
        self.tokens.push(Token::new(TokenKind::AtWord(name), span));
    }

    /// Scan a bare word: identifiers, numbers, selector fragments, `\attr` markers.
    fn scan_word(&mut self) {
        let (start_pos, start_line, start_col) = (self.pos, self.line, self.column);

        let mut word = String::new();
        // The first character is always taken so stray delimiters cannot stall the scanner.
        let first = self.advance();
        word.push(first);
        if first == '\\' && !self.is_at_end() {
            word.push(self.advance());
        }
        word.push_str(&self.read_word());

        let span = Span::new(start_pos, self.pos, start_line, start_col);
        self.tokens.push(Token::new(TokenKind::Word(word), span));
    }

    /// Read word characters up to the next delimiter. A backslash always
    /// takes the following character with it.
    fn read_word(&mut self) -> String {
        let mut word = String::new();
        while !self.is_at_end() && !self.at_word_boundary() {
            let c = self.advance();
            word.push(c);
            if c == '\\' && !self.is_at_end() {
                word.push(self.advance());
            }
        }
        word
    }

    fn at_word_boundary(&self) -> bool {
        match self.peek() {
            c if is_whitespace(c) => true,
            '{' | '}' | ';' | ':' | '(' | ')' | '"' | '\'' | '@' => true,
            '/' => self.peek_next() == '*',
            _ => false,
        }
    }

    // --- Helpers ---

    fn emit(&mut self, kind: TokenKind) {
        let span = Span::new(self.pos, self.pos, self.line, self.column);
        self.tokens.push(Token::new(kind, span));
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.pos]
        }
    }

    fn peek_next(&self) -> char {
        if self.pos + 1 >= self.chars.len() {
            '\0'
        } else {
            self.chars[self.pos + 1]
        }
    }

    /// Consume one character, keeping line and column in step.
    fn advance(&mut self) -> char {
        let c = self.peek();
        if !self.is_at_end() {
            self.pos += 1;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        c
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0c')
}
