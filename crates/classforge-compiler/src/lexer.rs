//! Lexer for member source fragments.
//!
//! The [`Lexer`] converts fragment text into a stream of [`Token`]s using
//! direct dispatch on the first character. Fragments are short, so the
//! whole token stream is produced eagerly via [`tokenize`].

use classforge_core::{Span, SyntaxError};

use crate::cursor::{Cursor, is_ident_continue, is_ident_start};
use crate::token::{Token, TokenKind, lookup_keyword};

/// Tokenize an entire fragment, appending an EOF token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

/// Lexer over a single member source fragment.
pub struct Lexer<'src> {
    cursor: Cursor<'src>,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given fragment.
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Consume and return the next token.
    pub fn next_token(&mut self) -> Result<Token, SyntaxError> {
        self.skip_trivia();

        if self.cursor.is_eof() {
            return Ok(Token::new(
                TokenKind::Eof,
                "",
                Span::point(self.cursor.line(), self.cursor.column()),
            ));
        }

        let line = self.cursor.line();
        let col = self.cursor.column();
        let start = self.cursor.offset();

        match self.cursor.peek().unwrap() {
            c if c.is_ascii_digit() => self.scan_number(line, col, start),
            c if is_ident_start(c) => Ok(self.scan_identifier(line, col, start)),
            _ => self.scan_operator(line, col, start),
        }
    }

    /// Skip whitespace and comments.
    fn skip_trivia(&mut self) {
        loop {
            while self.cursor.peek().is_some_and(|c| c.is_ascii_whitespace()) {
                self.cursor.advance();
            }
            match (self.cursor.peek(), self.cursor.peek_nth(1)) {
                (Some('/'), Some('/')) => {
                    while self.cursor.peek().is_some_and(|c| c != '\n') {
                        self.cursor.advance();
                    }
                }
                (Some('/'), Some('*')) => {
                    self.cursor.advance();
                    self.cursor.advance();
                    // Unterminated block comments simply run to EOF.
                    while !self.cursor.is_eof() {
                        if self.cursor.peek() == Some('*') && self.cursor.peek_nth(1) == Some('/') {
                            self.cursor.advance();
                            self.cursor.advance();
                            break;
                        }
                        self.cursor.advance();
                    }
                }
                _ => return,
            }
        }
    }

    fn scan_number(&mut self, line: u32, col: u32, start: u32) -> Result<Token, SyntaxError> {
        while self.cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.cursor.advance();
        }
        let lexeme = self.cursor.slice_from(start);
        let span = Span::new(line, col, lexeme.len() as u32);
        // Digits only, so the only failure mode is overflow.
        if lexeme.parse::<i64>().is_err() {
            return Err(SyntaxError::InvalidNumber {
                span,
                detail: format!("integer literal '{lexeme}' out of range"),
            });
        }
        Ok(Token::new(TokenKind::IntLiteral, lexeme, span))
    }

    fn scan_identifier(&mut self, line: u32, col: u32, start: u32) -> Token {
        while self.cursor.peek().is_some_and(is_ident_continue) {
            self.cursor.advance();
        }
        let lexeme = self.cursor.slice_from(start);
        let span = Span::new(line, col, lexeme.len() as u32);
        let kind = lookup_keyword(lexeme).unwrap_or(TokenKind::Identifier);
        Token::new(kind, lexeme, span)
    }

    fn scan_operator(&mut self, line: u32, col: u32, start: u32) -> Result<Token, SyntaxError> {
        let c = self.cursor.advance().unwrap();
        let kind = match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '=' => self.maybe_eq(TokenKind::Assign, TokenKind::EqEq),
            '!' => self.maybe_eq(TokenKind::Bang, TokenKind::NotEq),
            '<' => self.maybe_eq(TokenKind::Less, TokenKind::LessEq),
            '>' => self.maybe_eq(TokenKind::Greater, TokenKind::GreaterEq),
            '&' if self.cursor.peek() == Some('&') => {
                self.cursor.advance();
                TokenKind::AndAnd
            }
            '|' if self.cursor.peek() == Some('|') => {
                self.cursor.advance();
                TokenKind::OrOr
            }
            _ => {
                return Err(SyntaxError::UnexpectedChar {
                    ch: c,
                    span: Span::new(line, col, c.len_utf8() as u32),
                });
            }
        };
        let lexeme = self.cursor.slice_from(start);
        Ok(Token::new(kind, lexeme, Span::new(line, col, lexeme.len() as u32)))
    }

    /// `single`, or `double` if the next character is `=`.
    fn maybe_eq(&mut self, single: TokenKind, double: TokenKind) -> TokenKind {
        if self.cursor.peek() == Some('=') {
            self.cursor.advance();
            double
        } else {
            single
        }
    }
}
