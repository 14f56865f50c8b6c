//! Parser for member source fragments.
//!
//! Turns a token stream into a [`FieldMember`] or [`MethodMember`].
//! Expressions use Pratt parsing (precedence climbing).
//!
//! The fragment grammar:
//!
//! ```text
//! field   := modifiers type ident [ "=" expr ] ";"
//! method  := modifiers type ident "(" [ param { "," param } ] ")"
//!            "{" { stmt } "}"
//! param   := type ident
//! stmt    := type ident "=" expr ";"
//!          | ident "=" expr ";"
//!          | "return" [ expr ] ";"
//! ```

use classforge_core::{
    BinaryOp, Expr, FieldMember, MemberFlags, MethodMember, Param, Stmt, SyntaxError, TypeName,
    UnaryOp,
};

use crate::lexer::tokenize;
use crate::token::{Token, TokenKind};

/// Binding power of prefix operators (`-`, `!`).
const PREFIX_BP: u8 = 13;

/// Parse a field fragment such as `int x = 1;`.
pub fn parse_field_fragment(source: &str) -> Result<FieldMember, SyntaxError> {
    let mut parser = Parser::new(tokenize(source)?)?;
    let field = parser.parse_field(source)?;
    parser.expect_end()?;
    Ok(field)
}

/// Parse a method fragment such as `int getSum() { return x + y; }`.
pub fn parse_method_fragment(source: &str) -> Result<MethodMember, SyntaxError> {
    let mut parser = Parser::new(tokenize(source)?)?;
    let method = parser.parse_method(source)?;
    parser.expect_end()?;
    Ok(method)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Result<Self, SyntaxError> {
        if tokens.first().is_some_and(|t| t.kind == TokenKind::Eof) {
            return Err(SyntaxError::EmptyFragment);
        }
        Ok(Self { tokens, pos: 0 })
    }

    // =========================================
    // Token stream helpers
    // =========================================

    fn peek(&self) -> &Token {
        // The stream always ends with an EOF token.
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        token
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<Token, SyntaxError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn unexpected(&self, expected: &'static str) -> SyntaxError {
        let token = self.peek();
        if token.kind == TokenKind::Eof {
            SyntaxError::UnexpectedEof { expected }
        } else {
            SyntaxError::UnexpectedToken {
                found: token.lexeme.clone(),
                expected,
                span: token.span,
            }
        }
    }

    fn expect_end(&self) -> Result<(), SyntaxError> {
        let token = self.peek();
        if token.kind == TokenKind::Eof {
            Ok(())
        } else {
            Err(SyntaxError::TrailingInput { span: token.span })
        }
    }

    // =========================================
    // Members
    // =========================================

    fn parse_field(&mut self, source: &str) -> Result<FieldMember, SyntaxError> {
        let flags = self.parse_modifiers();
        let ty = self.parse_type(/* allow_void */ false, "field type")?;
        let name = self.expect(TokenKind::Identifier, "field name")?.lexeme;
        let init = if self.eat(TokenKind::Assign) {
            Some(self.parse_expr(0)?)
        } else {
            None
        };
        self.expect(TokenKind::Semicolon, "';'")?;
        Ok(FieldMember::new(name, ty, init, flags, source))
    }

    fn parse_method(&mut self, source: &str) -> Result<MethodMember, SyntaxError> {
        let flags = self.parse_modifiers();
        let ret = self.parse_type(/* allow_void */ true, "return type")?;
        let name = self.expect(TokenKind::Identifier, "method name")?.lexeme;

        self.expect(TokenKind::LeftParen, "'('")?;
        let mut params = Vec::new();
        if !self.check(TokenKind::RightParen) {
            loop {
                let ty = self.parse_type(/* allow_void */ false, "parameter type")?;
                let pname = self.expect(TokenKind::Identifier, "parameter name")?.lexeme;
                params.push(Param::new(ty, pname));
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RightParen, "')'")?;

        self.expect(TokenKind::LeftBrace, "'{'")?;
        let mut body = Vec::new();
        while !self.check(TokenKind::RightBrace) {
            if self.check(TokenKind::Eof) {
                return Err(SyntaxError::UnexpectedEof { expected: "'}'" });
            }
            body.push(self.parse_stmt()?);
        }
        self.expect(TokenKind::RightBrace, "'}'")?;

        Ok(MethodMember::new(name, params, ret, body, flags, source))
    }

    fn parse_modifiers(&mut self) -> MemberFlags {
        let mut flags = MemberFlags::empty();
        while let Some(flag) = MemberFlags::from_keyword(&self.peek().lexeme) {
            self.advance();
            flags |= flag;
        }
        flags
    }

    fn parse_type(&mut self, allow_void: bool, expected: &'static str) -> Result<TypeName, SyntaxError> {
        let token = self.peek().clone();
        let ty = match token.kind {
            TokenKind::Int => TypeName::Int,
            TokenKind::Bool => TypeName::Bool,
            TokenKind::Void => TypeName::Void,
            _ => return Err(self.unexpected(expected)),
        };
        if ty == TypeName::Void && !allow_void {
            return Err(SyntaxError::InvalidType {
                name: token.lexeme,
                span: token.span,
            });
        }
        self.advance();
        Ok(ty)
    }

    // =========================================
    // Statements
    // =========================================

    fn parse_stmt(&mut self) -> Result<Stmt, SyntaxError> {
        match self.peek().kind {
            TokenKind::Return => {
                self.advance();
                if self.eat(TokenKind::Semicolon) {
                    return Ok(Stmt::Return(None));
                }
                let expr = self.parse_expr(0)?;
                self.expect(TokenKind::Semicolon, "';'")?;
                Ok(Stmt::Return(Some(expr)))
            }
            TokenKind::Int | TokenKind::Bool | TokenKind::Void => {
                let ty = self.parse_type(/* allow_void */ false, "local type")?;
                let name = self.expect(TokenKind::Identifier, "local name")?.lexeme;
                self.expect(TokenKind::Assign, "'='")?;
                let init = self.parse_expr(0)?;
                self.expect(TokenKind::Semicolon, "';'")?;
                Ok(Stmt::Local { ty, name, init })
            }
            TokenKind::Identifier => {
                let name = self.advance().lexeme;
                self.expect(TokenKind::Assign, "'='")?;
                let value = self.parse_expr(0)?;
                self.expect(TokenKind::Semicolon, "';'")?;
                Ok(Stmt::Assign { name, value })
            }
            _ => Err(self.unexpected("statement")),
        }
    }

    // =========================================
    // Expressions (Pratt)
    // =========================================

    /// Parse an expression with a minimum binding power.
    fn parse_expr(&mut self, min_bp: u8) -> Result<Expr, SyntaxError> {
        let mut lhs = self.parse_prefix()?;

        while let Some((op, l_bp, r_bp)) = infix_binding(self.peek().kind) {
            if l_bp < min_bp {
                break;
            }
            self.advance();
            let rhs = self.parse_expr(r_bp)?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }

        Ok(lhs)
    }

    fn parse_prefix(&mut self) -> Result<Expr, SyntaxError> {
        let token = self.peek().clone();
        match token.kind {
            TokenKind::IntLiteral => {
                self.advance();
                // The lexer already validated the literal's range.
                let value = token.lexeme.parse::<i64>().map_err(|e| {
                    SyntaxError::InvalidNumber {
                        span: token.span,
                        detail: e.to_string(),
                    }
                })?;
                Ok(Expr::Int(value))
            }
            TokenKind::True => {
                self.advance();
                Ok(Expr::Bool(true))
            }
            TokenKind::False => {
                self.advance();
                Ok(Expr::Bool(false))
            }
            TokenKind::Identifier => {
                self.advance();
                Ok(Expr::Var(token.lexeme))
            }
            TokenKind::Minus => {
                self.advance();
                Ok(Expr::Unary {
                    op: UnaryOp::Neg,
                    operand: Box::new(self.parse_expr(PREFIX_BP)?),
                })
            }
            TokenKind::Bang => {
                self.advance();
                Ok(Expr::Unary {
                    op: UnaryOp::Not,
                    operand: Box::new(self.parse_expr(PREFIX_BP)?),
                })
            }
            TokenKind::LeftParen => {
                self.advance();
                let expr = self.parse_expr(0)?;
                self.expect(TokenKind::RightParen, "')'")?;
                Ok(expr)
            }
            _ => Err(self.unexpected("expression")),
        }
    }
}

/// Binding powers for infix operators: `(op, left_bp, right_bp)`.
fn infix_binding(kind: TokenKind) -> Option<(BinaryOp, u8, u8)> {
    let entry = match kind {
        TokenKind::OrOr => (BinaryOp::Or, 1, 2),
        TokenKind::AndAnd => (BinaryOp::And, 3, 4),
        TokenKind::EqEq => (BinaryOp::Eq, 5, 6),
        TokenKind::NotEq => (BinaryOp::Ne, 5, 6),
        TokenKind::Less => (BinaryOp::Lt, 7, 8),
        TokenKind::LessEq => (BinaryOp::Le, 7, 8),
        TokenKind::Greater => (BinaryOp::Gt, 7, 8),
        TokenKind::GreaterEq => (BinaryOp::Ge, 7, 8),
        TokenKind::Plus => (BinaryOp::Add, 9, 10),
        TokenKind::Minus => (BinaryOp::Sub, 9, 10),
        TokenKind::Star => (BinaryOp::Mul, 11, 12),
        TokenKind::Slash => (BinaryOp::Div, 11, 12),
        TokenKind::Percent => (BinaryOp::Rem, 11, 12),
        _ => return None,
    };
    Some(entry)
}
