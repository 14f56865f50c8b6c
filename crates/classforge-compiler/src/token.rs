//! Token types for the fragment lexer.

use std::fmt;

use classforge_core::Span;

/// A token from a member source fragment.
#[derive(Clone, PartialEq)]
pub struct Token {
    /// The type of token.
    pub kind: TokenKind,
    /// The source text of this token.
    pub lexeme: String,
    /// Location in the fragment.
    pub span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?} @ {:?})", self.kind, self.lexeme, self.span)
    }
}

/// All token types in the fragment grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // =========================================
    // Literals and identifiers
    // =========================================
    /// Integer literal: `42`
    IntLiteral,
    /// User-defined identifier
    Identifier,

    // =========================================
    // Keywords
    // =========================================
    /// `int`
    Int,
    /// `bool`
    Bool,
    /// `void`
    Void,
    /// `true`
    True,
    /// `false`
    False,
    /// `return`
    Return,
    /// `public`
    Public,
    /// `private`
    Private,
    /// `static`
    Static,
    /// `final`
    Final,

    // =========================================
    // Operators
    // =========================================
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `!`
    Bang,
    /// `=`
    Assign,
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    /// `<`
    Less,
    /// `<=`
    LessEq,
    /// `>`
    Greater,
    /// `>=`
    GreaterEq,
    /// `&&`
    AndAnd,
    /// `||`
    OrOr,

    // =========================================
    // Punctuation
    // =========================================
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `;`
    Semicolon,

    /// End of fragment.
    Eof,
}

/// Map an identifier to its keyword kind, if it is one.
pub fn lookup_keyword(word: &str) -> Option<TokenKind> {
    match word {
        "int" => Some(TokenKind::Int),
        "bool" => Some(TokenKind::Bool),
        "void" => Some(TokenKind::Void),
        "true" => Some(TokenKind::True),
        "false" => Some(TokenKind::False),
        "return" => Some(TokenKind::Return),
        "public" => Some(TokenKind::Public),
        "private" => Some(TokenKind::Private),
        "static" => Some(TokenKind::Static),
        "final" => Some(TokenKind::Final),
        _ => None,
    }
}
