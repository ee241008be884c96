use std::fmt;

use sclc_span::{Span, Symbol};

/// Every lexeme the scanner can produce (`spec.md` §3/§4.1). Literal payloads
/// are decoded at scan time so the parser never re-parses text. `and`/`or`/
/// `not` are textual keywords, not symbolic operators — the source language
/// has no `&&`/`||`/`!`.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // punctuation
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Comma,
    Dot,
    Colon,
    DoubleColon,
    Arrow,
    Semicolon,
    Assign,
    EqEq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,

    // logical keywords
    And,
    Or,
    Not,

    // keywords
    If,
    Else,
    For,
    While,
    Break,
    Continue,
    Return,
    Var,
    Func,
    Method,
    Operator,
    Import,
    True,
    False,

    // literals and identifiers
    Ident(Symbol),
    IntLit(i32),
    DoubleLit(f64),
    StringLit(String),

    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Plus => write!(f, "`+`"),
            TokenKind::Minus => write!(f, "`-`"),
            TokenKind::Star => write!(f, "`*`"),
            TokenKind::Slash => write!(f, "`/`"),
            TokenKind::Percent => write!(f, "`%`"),
            TokenKind::Comma => write!(f, "`,`"),
            TokenKind::Dot => write!(f, "`.`"),
            TokenKind::Colon => write!(f, "`:`"),
            TokenKind::DoubleColon => write!(f, "`::`"),
            TokenKind::Arrow => write!(f, "`->`"),
            TokenKind::Semicolon => write!(f, "`;`"),
            TokenKind::Assign => write!(f, "`=`"),
            TokenKind::EqEq => write!(f, "`==`"),
            TokenKind::NotEq => write!(f, "`!=`"),
            TokenKind::Lt => write!(f, "`<`"),
            TokenKind::Gt => write!(f, "`>`"),
            TokenKind::LtEq => write!(f, "`<=`"),
            TokenKind::GtEq => write!(f, "`>=`"),
            TokenKind::LParen => write!(f, "`(`"),
            TokenKind::RParen => write!(f, "`)`"),
            TokenKind::LBracket => write!(f, "`[`"),
            TokenKind::RBracket => write!(f, "`]`"),
            TokenKind::LBrace => write!(f, "`{{`"),
            TokenKind::RBrace => write!(f, "`}}`"),
            TokenKind::And => write!(f, "keyword `and`"),
            TokenKind::Or => write!(f, "keyword `or`"),
            TokenKind::Not => write!(f, "keyword `not`"),
            TokenKind::If => write!(f, "keyword `if`"),
            TokenKind::Else => write!(f, "keyword `else`"),
            TokenKind::For => write!(f, "keyword `for`"),
            TokenKind::While => write!(f, "keyword `while`"),
            TokenKind::Break => write!(f, "keyword `break`"),
            TokenKind::Continue => write!(f, "keyword `continue`"),
            TokenKind::Return => write!(f, "keyword `return`"),
            TokenKind::Var => write!(f, "keyword `var`"),
            TokenKind::Func => write!(f, "keyword `func`"),
            TokenKind::Method => write!(f, "keyword `method`"),
            TokenKind::Operator => write!(f, "keyword `operator`"),
            TokenKind::Import => write!(f, "keyword `import`"),
            TokenKind::True => write!(f, "keyword `true`"),
            TokenKind::False => write!(f, "keyword `false`"),
            TokenKind::Ident(s) => write!(f, "identifier `{s}`"),
            TokenKind::IntLit(v) => write!(f, "integer `{v}`"),
            TokenKind::DoubleLit(v) => write!(f, "double `{v}`"),
            TokenKind::StringLit(s) => write!(f, "string {s:?}"),
            TokenKind::Eof => write!(f, "end of file"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}
