use sclc_ast::{NamedType, TokenKind, Type};
use sclc_errors::{ParseError, ParseErrorKind};

use crate::context::ParserContext;

impl ParserContext {
    /// `spec.md` §4.2: an identifier naming a scalar, or `func(t1,…->r)`, or
    /// a parenthesized type, each optionally followed by `[]`/`*` postfix
    /// markers in any order and repetition.
    pub fn parse_type(&mut self) -> Result<Type, ParseError> {
        let mut ty = self.parse_type_atom()?;
        loop {
            if self.eat(&TokenKind::LBracket) {
                self.expect(&TokenKind::RBracket)?;
                ty = Type::IndexedPointer(Box::new(ty));
            } else if self.eat(&TokenKind::Star) {
                ty = Type::ReferencePointer(Box::new(ty));
            } else {
                break;
            }
        }
        Ok(ty)
    }

    fn parse_type_atom(&mut self) -> Result<Type, ParseError> {
        if self.eat(&TokenKind::LParen) {
            let inner = self.parse_type()?;
            self.expect(&TokenKind::RParen)?;
            return Ok(inner);
        }

        if self.eat(&TokenKind::Func) {
            self.expect(&TokenKind::LParen)?;
            let mut params = Vec::new();
            if !self.check(&TokenKind::Arrow) {
                params.push(self.parse_type()?);
                while self.eat(&TokenKind::Comma) {
                    params.push(self.parse_type()?);
                }
            }
            self.expect(&TokenKind::Arrow)?;
            let ret = self.parse_type()?;
            self.expect(&TokenKind::RParen)?;
            return Ok(Type::FunctionReference(Box::new(ret), params));
        }

        if let TokenKind::Ident(name) = self.token.kind.clone() {
            self.bump();
            return NamedType::from_name(name.as_str()).map(Type::Named).ok_or_else(|| {
                ParseError::new(
                    self.prev_token.span,
                    self.prev_token.kind.to_string(),
                    ParseErrorKind::UnknownType(name.as_str().to_string()),
                )
            });
        }

        Err(ParseError::new(
            self.token.span,
            self.token.kind.to_string(),
            ParseErrorKind::Expected { expected: "a type".to_string(), found: self.token.kind.to_string() },
        ))
    }
}

#[cfg(test)]
mod tests {
    use sclc_ast::Token;

    use super::*;
    use crate::lexer::Lexer;

    fn parse(src: &str) -> Type {
        let tokens: Vec<Token> = Lexer::new(src).tokenize().unwrap();
        ParserContext::new(tokens).parse_type().unwrap()
    }

    #[test]
    fn scalar() {
        assert_eq!(parse("i32"), Type::i32());
    }

    #[test]
    fn indexed_pointer() {
        assert_eq!(parse("i32[]"), Type::IndexedPointer(Box::new(Type::i32())));
    }

    #[test]
    fn reference_pointer_chain() {
        assert_eq!(
            parse("i32**"),
            Type::ReferencePointer(Box::new(Type::ReferencePointer(Box::new(Type::i32()))))
        );
    }

    #[test]
    fn mixed_postfix_order() {
        assert_eq!(
            parse("i32[]*"),
            Type::ReferencePointer(Box::new(Type::IndexedPointer(Box::new(Type::i32()))))
        );
    }

    #[test]
    fn function_reference() {
        assert_eq!(
            parse("func(i32,bool->void)"),
            Type::FunctionReference(Box::new(Type::void()), vec![Type::i32(), Type::bool()])
        );
    }

    #[test]
    fn parenthesized() {
        assert_eq!(parse("(i32)[]"), Type::IndexedPointer(Box::new(Type::i32())));
    }

    #[test]
    fn round_trips_through_canonical_string() {
        // Testable property: parse(T.to_string()) == T for every type the grammar accepts.
        for src in ["i32", "i32[]", "i32*", "bool[]*", "func(i32,f64->void)", "func(->bool)"] {
            let ty = parse(src);
            let reparsed = parse(&ty.to_string());
            assert_eq!(ty, reparsed, "round trip failed for {src}");
        }
    }
}
