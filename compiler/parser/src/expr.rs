use sclc_ast::{
    expr::{AssignExpr, BinaryExpr, BinaryOp, CallExpr, Expr, GroupExpr, IdentifierExpr, LiteralExpr, LiteralValue, UnaryExpr, UnaryOp},
    Node, NamedType, TokenKind, Type,
};
use sclc_errors::{ParseError, ParseErrorKind};

use crate::context::ParserContext;

/// `spec.md` §4.2: a call's argument list is capped the same as a function
/// declaration's parameter list.
pub const MAX_ARGS: usize = 16;

impl ParserContext {
    /// Entry point for the precedence ladder: assignment is the lowest
    /// precedence level.
    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_assignment()
    }

    fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        let target = self.parse_or()?;
        if self.eat(&TokenKind::Assign) {
            let value = self.parse_assignment()?; // right-associative
            let id_expr = match target {
                Expr::Identifier(id) => id,
                other => {
                    return Err(ParseError::new(
                        other.span(),
                        self.prev_token.kind.to_string(),
                        ParseErrorKind::InvalidAssignmentTarget,
                    ));
                }
            };
            let span = id_expr.span.merge(value.span());
            let ty = id_expr.ty.clone();
            let id = self.nodes.next_id();
            return Ok(Expr::Assign(AssignExpr::new(id, span, Box::new(id_expr), Box::new(value), ty)));
        }
        Ok(target)
    }

    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc_binary(&[(TokenKind::Or, BinaryOp::Or)], Self::parse_and)
    }

    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc_binary(&[(TokenKind::And, BinaryOp::And)], Self::parse_equality)
    }

    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc_binary(
            &[(TokenKind::EqEq, BinaryOp::Eq), (TokenKind::NotEq, BinaryOp::Ne)],
            Self::parse_comparison,
        )
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc_binary(
            &[
                (TokenKind::Lt, BinaryOp::Lt),
                (TokenKind::Gt, BinaryOp::Gt),
                (TokenKind::LtEq, BinaryOp::Le),
                (TokenKind::GtEq, BinaryOp::Ge),
            ],
            Self::parse_additive,
        )
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc_binary(
            &[(TokenKind::Plus, BinaryOp::Add), (TokenKind::Minus, BinaryOp::Sub)],
            Self::parse_multiplicative,
        )
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc_binary(
            &[
                (TokenKind::Star, BinaryOp::Mul),
                (TokenKind::Slash, BinaryOp::Div),
                (TokenKind::Percent, BinaryOp::Rem),
            ],
            Self::parse_unary,
        )
    }

    /// Shared climber for every left-associative binary level. The parser
    /// assigns the result type conservatively as the left operand's type,
    /// comparisons included (`spec.md` §4.2 — a documented surprise, not
    /// silently corrected to `bool`).
    fn parse_left_assoc_binary(
        &mut self,
        ops: &[(TokenKind, BinaryOp)],
        mut next: impl FnMut(&mut Self) -> Result<Expr, ParseError>,
    ) -> Result<Expr, ParseError> {
        let mut expr = next(self)?;
        loop {
            let Some((_, op)) = ops.iter().find(|(tok, _)| self.check(tok)) else {
                break;
            };
            self.bump();
            let rhs = next(self)?;
            let span = expr.span().merge(rhs.span());
            let ty = expr.ty().clone();
            let id = self.nodes.next_id();
            expr = Expr::Binary(BinaryExpr::new(id, span, Box::new(expr), *op, Box::new(rhs), ty));
        }
        Ok(expr)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if self.check(&TokenKind::Minus) || self.check(&TokenKind::Not) {
            let op = if self.check(&TokenKind::Minus) { UnaryOp::Neg } else { UnaryOp::Not };
            let start = self.token.span;
            self.bump();
            let operand = self.parse_unary()?;
            let span = start.merge(operand.span());
            let ty = operand.ty().clone();
            let id = self.nodes.next_id();
            return Ok(Expr::Unary(UnaryExpr::new(id, span, op, Box::new(operand), ty)));
        }
        self.parse_call()
    }

    fn parse_call(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;
        while self.check(&TokenKind::LParen) {
            let open = self.token.span;
            self.bump();
            let mut args = Vec::new();
            if !self.check(&TokenKind::RParen) {
                args.push(self.parse_expression()?);
                while self.eat(&TokenKind::Comma) {
                    args.push(self.parse_expression()?);
                }
            }
            let close = self.expect(&TokenKind::RParen)?;
            if args.len() > MAX_ARGS {
                return Err(self.error(ParseErrorKind::TooManyArguments { max: MAX_ARGS }));
            }

            let ret_ty = match expr.ty() {
                Type::FunctionReference(ret, _) => (**ret).clone(),
                _ => return Err(self.error(ParseErrorKind::NotCallable)),
            };

            let span = expr.span().merge(open).merge(close);
            let id = self.nodes.next_id();
            expr = Expr::Call(CallExpr::new(id, span, Box::new(expr), args, ret_ty));
        }
        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match self.token.kind.clone() {
            TokenKind::IntLit(v) => {
                let span = self.token.span;
                self.bump();
                let id = self.nodes.next_id();
                Ok(Expr::Literal(LiteralExpr::new(id, span, LiteralValue::Int(v), Type::i32())))
            }
            TokenKind::DoubleLit(v) => {
                let span = self.token.span;
                self.bump();
                let id = self.nodes.next_id();
                Ok(Expr::Literal(LiteralExpr::new(id, span, LiteralValue::Double(v), Type::f64())))
            }
            TokenKind::True | TokenKind::False => {
                let span = self.token.span;
                let value = matches!(self.token.kind, TokenKind::True);
                self.bump();
                let id = self.nodes.next_id();
                Ok(Expr::Literal(LiteralExpr::new(id, span, LiteralValue::Bool(value), Type::bool())))
            }
            TokenKind::StringLit(s) => {
                let span = self.token.span;
                self.bump();
                let id = self.nodes.next_id();
                let ty = Type::IndexedPointer(Box::new(Type::Named(NamedType::U8)));
                Ok(Expr::Literal(LiteralExpr::new(id, span, LiteralValue::Str(s), ty)))
            }
            TokenKind::Ident(name) => {
                let span = self.token.span;
                self.bump();
                let ty = self
                    .symbols
                    .get_type(name)
                    .cloned()
                    .ok_or_else(|| ParseError::new(span, name.to_string(), ParseErrorKind::UnknownIdentifier(name.to_string())))?;
                let id = self.nodes.next_id();
                Ok(Expr::Identifier(IdentifierExpr::new(id, span, name, ty)))
            }
            TokenKind::LParen => {
                let open = self.token.span;
                self.bump();
                let inner = self.parse_expression()?;
                let close = self.expect(&TokenKind::RParen)?;
                let ty = inner.ty().clone();
                let id = self.nodes.next_id();
                Ok(Expr::Group(GroupExpr::new(id, open.merge(close), Box::new(inner), ty)))
            }
            _ => Err(ParseError::new(
                self.token.span,
                self.token.kind.to_string(),
                ParseErrorKind::Expected { expected: "an expression".to_string(), found: self.token.kind.to_string() },
            )),
        }
    }
}
