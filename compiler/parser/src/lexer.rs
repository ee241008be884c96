use std::collections::HashMap;

use once_cell::sync::Lazy;
use sclc_ast::{Token, TokenKind};
use sclc_errors::{LexError, LexErrorKind};
use sclc_span::{Span, Symbol};

static KEYWORDS: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    use TokenKind::*;
    HashMap::from([
        ("and", And),
        ("or", Or),
        ("not", Not),
        ("true", True),
        ("false", False),
        ("if", If),
        ("else", Else),
        ("for", For),
        ("while", While),
        ("break", Break),
        ("continue", Continue),
        ("return", Return),
        ("var", Var),
        ("func", Func),
        ("method", Method),
        ("operator", Operator),
        ("import", Import),
    ])
});

/// Single linear scan over the source text (`spec.md` §4.1). Holds the
/// whole source as a `Vec<char>` rather than scanning the raw `&str`
/// byte-by-byte, since the grammar is defined over characters and the
/// source is small enough that this isn't a real cost.
pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: u32,
    line_start: usize,
}

impl Lexer {
    pub fn new(src: &str) -> Self {
        Self { chars: src.chars().collect(), pos: 0, line: 1, line_start: 0 }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace_and_comments();

            let start_line = self.line;
            let start_col = (self.pos - self.line_start) as u32;
            let start_pos = self.pos;

            let Some(c) = self.peek() else {
                tokens.push(Token::new(TokenKind::Eof, Span::new(start_line, start_col, 0)));
                return Ok(tokens);
            };

            let kind = self.scan_token(c, start_line, start_col)?;
            let span = Span::new(start_line, start_col, (self.pos - start_pos) as u32);
            tokens.push(Token::new(kind, span));
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.line_start = self.pos;
        }
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.peek() {
                Some(' ') | Some('\r') | Some('\t') | Some('\n') => {
                    self.advance();
                }
                Some('/') if self.peek_at(1) == Some('/') => {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    fn scan_token(&mut self, c: char, start_line: u32, start_col: u32) -> Result<TokenKind, LexError> {
        match c {
            '+' => {
                self.advance();
                Ok(TokenKind::Plus)
            }
            '-' => {
                self.advance();
                Ok(if self.eat('>') { TokenKind::Arrow } else { TokenKind::Minus })
            }
            '*' => {
                self.advance();
                Ok(TokenKind::Star)
            }
            '/' => {
                self.advance();
                Ok(TokenKind::Slash)
            }
            '%' => {
                self.advance();
                Ok(TokenKind::Percent)
            }
            ',' => {
                self.advance();
                Ok(TokenKind::Comma)
            }
            '.' => {
                self.advance();
                Ok(TokenKind::Dot)
            }
            ':' => {
                self.advance();
                Ok(if self.eat(':') { TokenKind::DoubleColon } else { TokenKind::Colon })
            }
            ';' => {
                self.advance();
                Ok(TokenKind::Semicolon)
            }
            '=' => {
                self.advance();
                Ok(if self.eat('=') { TokenKind::EqEq } else { TokenKind::Assign })
            }
            '!' => {
                self.advance();
                Ok(if self.eat('=') { TokenKind::NotEq } else { TokenKind::Not })
            }
            '<' => {
                self.advance();
                Ok(if self.eat('=') { TokenKind::LtEq } else { TokenKind::Lt })
            }
            '>' => {
                self.advance();
                Ok(if self.eat('=') { TokenKind::GtEq } else { TokenKind::Gt })
            }
            '(' => {
                self.advance();
                Ok(TokenKind::LParen)
            }
            ')' => {
                self.advance();
                Ok(TokenKind::RParen)
            }
            '[' => {
                self.advance();
                Ok(TokenKind::LBracket)
            }
            ']' => {
                self.advance();
                Ok(TokenKind::RBracket)
            }
            '{' => {
                self.advance();
                Ok(TokenKind::LBrace)
            }
            '}' => {
                self.advance();
                Ok(TokenKind::RBrace)
            }
            '"' => self.scan_string(start_line, start_col),
            c if c.is_ascii_digit() => Ok(self.scan_number()),
            c if c.is_ascii_alphabetic() || c == '_' => Ok(self.scan_ident_or_keyword()),
            other => {
                self.advance();
                Err(LexError::new(Span::new(start_line, start_col, 1), LexErrorKind::UnexpectedChar(other)))
            }
        }
    }

    fn scan_number(&mut self) -> TokenKind {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }
        if self.peek() == Some('.') && matches!(self.peek_at(1), Some(c) if c.is_ascii_digit()) {
            self.advance();
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.advance();
            }
            let text: String = self.chars[start..self.pos].iter().collect();
            TokenKind::DoubleLit(text.parse().expect("scanned double literal text is always valid"))
        } else {
            let text: String = self.chars[start..self.pos].iter().collect();
            // Decoded into a signed 32-bit range (`spec.md` §4.1); values that
            // don't fit wrap via the same `as i32` truncation a wider target
            // would need to undo at lowering anyway.
            let value = text.parse::<i64>().map(|v| v as i32).unwrap_or(i32::MAX);
            TokenKind::IntLit(value)
        }
    }

    fn scan_ident_or_keyword(&mut self) -> TokenKind {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
            self.advance();
        }
        let text: String = self.chars[start..self.pos].iter().collect();
        match KEYWORDS.get(text.as_str()) {
            Some(kind) => kind.clone(),
            None => TokenKind::Ident(Symbol::intern(&text)),
        }
    }

    fn scan_string(&mut self, start_line: u32, start_col: u32) -> Result<TokenKind, LexError> {
        self.advance(); // opening quote
        let raw_start = self.pos;
        while let Some(c) = self.peek() {
            if c == '"' {
                break;
            }
            self.advance();
        }
        if self.peek().is_none() {
            return Err(LexError::new(
                Span::new(start_line, start_col, (self.pos - raw_start) as u32),
                LexErrorKind::UnterminatedString,
            ));
        }
        let raw = self.chars[raw_start..self.pos].to_vec();
        self.advance(); // closing quote
        Ok(TokenKind::StringLit(translate_escapes(&raw)))
    }
}

/// Applies `\n`/`\t` escape translation; any other `\x` drops the backslash
/// and keeps `x` verbatim, matching the source scanner's `formatEscapes`
/// exactly (including a trailing, unpaired `\` at the very end of the
/// string, which is kept literally since there's no following character to
/// pair it with).
fn translate_escapes(raw: &[char]) -> String {
    let mut res = String::new();
    let mut i = 0;
    while i < raw.len() {
        if raw[i] == '\\' && i != raw.len() - 1 {
            match raw[i + 1] {
                'n' => {
                    res.push('\n');
                    i += 2;
                }
                't' => {
                    res.push('\t');
                    i += 2;
                }
                _ => {
                    i += 1;
                }
            }
        } else {
            res.push(raw[i]);
            i += 1;
        }
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        Lexer::new(src).tokenize().unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn punctuation_and_compounds() {
        assert_eq!(
            kinds("-> == != <= >= :: ="),
            vec![
                TokenKind::Arrow,
                TokenKind::EqEq,
                TokenKind::NotEq,
                TokenKind::LtEq,
                TokenKind::GtEq,
                TokenKind::DoubleColon,
                TokenKind::Assign,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn bare_bang_is_an_alternate_spelling_of_not() {
        assert_eq!(kinds("!a"), vec![TokenKind::Not, TokenKind::Ident(Symbol::intern("a")), TokenKind::Eof]);
    }

    #[test]
    fn keywords_and_identifiers() {
        assert_eq!(
            kinds("var x and foo"),
            vec![
                TokenKind::Var,
                TokenKind::Ident(Symbol::intern("x")),
                TokenKind::And,
                TokenKind::Ident(Symbol::intern("foo")),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn numbers() {
        assert_eq!(
            kinds("42 3.5 7."),
            vec![TokenKind::IntLit(42), TokenKind::DoubleLit(3.5), TokenKind::IntLit(7), TokenKind::Dot, TokenKind::Eof]
        );
    }

    #[test]
    fn integer_literal_at_the_edge_of_i32_round_trips() {
        assert_eq!(kinds("2147483647"), vec![TokenKind::IntLit(i32::MAX), TokenKind::Eof]);
    }

    #[test]
    fn string_escapes() {
        let toks = kinds(r#""a\nb\tc\qd""#);
        assert_eq!(toks, vec![TokenKind::StringLit("a\nb\tcqd".to_string()), TokenKind::Eof]);
    }

    #[test]
    fn line_comment_is_skipped() {
        assert_eq!(kinds("var x // trailing comment\n"), vec![TokenKind::Var, TokenKind::Ident(Symbol::intern("x")), TokenKind::Eof]);
    }

    #[test]
    fn unterminated_string_errors() {
        assert!(Lexer::new("\"abc").tokenize().is_err());
    }

    #[test]
    fn unexpected_char_errors() {
        assert!(Lexer::new("@").tokenize().is_err());
    }

    #[test]
    fn line_tracking_across_newlines() {
        let tokens = Lexer::new("var\nx").tokenize().unwrap();
        assert_eq!(tokens[0].span.line, 1);
        assert_eq!(tokens[1].span.line, 2);
    }
}
