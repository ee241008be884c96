use sclc_ast::{NodeBuilder, Token, TokenKind};
use sclc_errors::{ParseError, ParseErrorKind};
use sclc_span::{Span, Symbol};

use crate::scope::{ScopeStack, SymbolTable};

/// Holds the token stream plus the scope/symbol state `spec.md` §4.2
/// threads through every `parse_*` method. Tokens are stored reversed so
/// that advancing the cursor is a cheap `Vec::pop`.
pub struct ParserContext {
    tokens: Vec<Token>,
    pub(crate) token: Token,
    pub(crate) prev_token: Token,
    pub(crate) nodes: NodeBuilder,
    pub(crate) scopes: ScopeStack,
    pub(crate) symbols: SymbolTable,
}

impl ParserContext {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        tokens.reverse();
        let dummy = Token::new(TokenKind::Eof, Span::dummy());
        let mut ctx = Self {
            tokens,
            token: dummy.clone(),
            prev_token: dummy,
            nodes: NodeBuilder::new(),
            scopes: ScopeStack::new(),
            symbols: SymbolTable::new(),
        };
        ctx.bump();
        ctx
    }

    pub fn bump(&mut self) {
        let next = self.tokens.pop().unwrap_or_else(|| Token::new(TokenKind::Eof, self.token.span));
        self.prev_token = std::mem::replace(&mut self.token, next);
    }

    pub fn check(&self, kind: &TokenKind) -> bool {
        &self.token.kind == kind
    }

    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    pub fn expect(&mut self, kind: &TokenKind) -> Result<Span, ParseError> {
        if self.eat(kind) {
            Ok(self.prev_token.span)
        } else {
            self.unexpected(format!("{kind}"))
        }
    }

    pub fn expect_any(&mut self, kinds: &[TokenKind]) -> Result<Span, ParseError> {
        if kinds.iter().any(|k| self.check(k)) {
            self.bump();
            Ok(self.prev_token.span)
        } else {
            let expected = kinds.iter().map(|k| k.to_string()).collect::<Vec<_>>().join(" or ");
            self.unexpected(expected)
        }
    }

    fn unexpected<T>(&self, expected: impl Into<String>) -> Result<T, ParseError> {
        Err(ParseError::new(
            self.token.span,
            self.token.kind.to_string(),
            ParseErrorKind::Expected { expected: expected.into(), found: self.token.kind.to_string() },
        ))
    }

    pub fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(self.token.span, self.token.kind.to_string(), kind)
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.token.kind, TokenKind::Eof)
    }

    /// The kind of the token after the current one, without consuming
    /// anything. Used by the `for`-init lookahead (`spec.md` §4.2 names no
    /// explicit syntax for this case; grounded on the original's
    /// `checkForm({IDENTIFIER, COLON})` two-token lookahead).
    pub fn peek_next(&self) -> Option<&TokenKind> {
        self.tokens.last().map(|t| &t.kind)
    }

    pub fn expect_ident(&mut self) -> Result<(Symbol, Span), ParseError> {
        if let TokenKind::Ident(name) = self.token.kind.clone() {
            let span = self.token.span;
            self.bump();
            Ok((name, span))
        } else {
            let expected = "an identifier".to_string();
            self.unexpected(expected)
        }
    }
}
