use sclc_ast::{
    stmt::{BlockStmt, BreakStmt, ContinueStmt, ExprStmt, ForInit, ForStmt, FuncDeclStmt, IfStmt, Param, ReturnStmt, Stmt, VarDeclStmt, WhileStmt},
    Node, TokenKind, Type,
};
use sclc_errors::{ParseError, ParseErrorKind};
use sclc_span::Span;

use crate::{
    context::ParserContext,
    expr::MAX_ARGS,
    scope::ScopeKind,
};

impl ParserContext {
    pub fn parse_program(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut stmts = Vec::new();
        while !self.is_eof() {
            stmts.push(self.parse_declaration()?);
        }
        Ok(stmts)
    }

    /// Top level is a sequence of declarations (`spec.md` §4.2); a block's
    /// children go through this same entry point, since function and
    /// variable declarations are only rejected at the point they're built
    /// (placement is a semantic check, not a grammar restriction — mirrors
    /// the original's `declaration()` being called uniformly from both the
    /// top level and every block body).
    fn parse_declaration(&mut self) -> Result<Stmt, ParseError> {
        if matches!(self.peek_kind(), TokenKind::Func | TokenKind::Method | TokenKind::Operator) {
            return self.parse_func_decl();
        }
        if matches!(self.peek_kind(), TokenKind::Var) {
            return self.parse_var_decl();
        }
        if self.scopes.is_empty() {
            return Err(self.error(ParseErrorKind::StatementAtGlobalScope));
        }
        self.parse_statement()
    }

    fn peek_kind(&self) -> TokenKind {
        self.token.kind.clone()
    }

    fn parse_func_decl(&mut self) -> Result<Stmt, ParseError> {
        let start = self.token.span;
        self.bump(); // `func` / `method` / `operator`

        if !self.scopes.is_empty() {
            return Err(self.error(ParseErrorKind::FunctionNotAtGlobalScope));
        }

        let (name, _) = self.expect_ident()?;
        self.expect(&TokenKind::LParen)?;

        let mut params = Vec::new();
        if !self.check(&TokenKind::RParen) {
            loop {
                if params.len() >= MAX_ARGS {
                    return Err(self.error(ParseErrorKind::TooManyParameters { max: MAX_ARGS }));
                }
                let (pname, pspan) = self.expect_ident()?;
                self.expect(&TokenKind::Colon)?;
                let ty = self.parse_type()?;
                params.push(Param { name: pname, ty, span: pspan });
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(&TokenKind::RParen)?;

        // `->` is canonical; a bare `:` is the legacy return-type spelling
        // and normalizes to the same AST shape (`spec.md` §4.2).
        let return_ty = if self.eat(&TokenKind::Arrow) || self.eat(&TokenKind::Colon) {
            self.parse_type()?
        } else {
            Type::void()
        };

        let reference_ty = Type::FunctionReference(Box::new(return_ty.clone()), params.iter().map(|p| p.ty.clone()).collect());
        self.symbols.insert(name, reference_ty);

        let (body, end) = if self.eat(&TokenKind::LBrace) {
            self.scopes.push(ScopeKind::Function);
            self.symbols.push_scope();
            for p in &params {
                self.symbols.insert(p.name, p.ty.clone());
            }
            let block = self.parse_block_body(start)?;
            self.symbols.pop_scope();
            self.scopes.pop();
            let end = block.span;
            (Some(block), end)
        } else {
            let end = self.expect(&TokenKind::Semicolon)?;
            (None, end)
        };

        let id = self.nodes.next_id();
        Ok(Stmt::FuncDecl(FuncDeclStmt::new(id, start.merge(end), name, params, return_ty, body)))
    }

    fn parse_var_decl(&mut self) -> Result<Stmt, ParseError> {
        let start = self.token.span;
        self.bump(); // `var`
        Ok(Stmt::VarDecl(self.parse_var_decl_body(start)?))
    }

    /// `IDENT : type [= expr] ;`, shared between the `var`-prefixed
    /// declaration form and a `for`-loop's inline initializer, which omits
    /// the `var` keyword (grounded on the original's `variableDecl`/
    /// `forStatement` sharing this exact shape).
    fn parse_var_decl_body(&mut self, start: Span) -> Result<VarDeclStmt, ParseError> {
        let (name, name_span) = self.expect_ident()?;
        if self.symbols.exists(name) {
            return Err(ParseError::new(name_span, name.to_string(), ParseErrorKind::DuplicateName(name.to_string())));
        }
        self.expect(&TokenKind::Colon)?;
        let ty = self.parse_type()?;
        let init = if self.eat(&TokenKind::Assign) { Some(self.parse_expression()?) } else { None };
        let end = self.expect(&TokenKind::Semicolon)?;
        self.symbols.insert(name, ty.clone());
        let id = self.nodes.next_id();
        Ok(VarDeclStmt::new(id, start.merge(end), name, ty, init))
    }

    fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        match self.peek_kind() {
            TokenKind::LBrace => self.parse_block_stmt(),
            TokenKind::If => self.parse_if_stmt(),
            TokenKind::While => self.parse_while_stmt(),
            TokenKind::For => self.parse_for_stmt(),
            TokenKind::Return => self.parse_return_stmt(),
            TokenKind::Break => self.parse_break_stmt(),
            TokenKind::Continue => self.parse_continue_stmt(),
            _ => self.parse_expr_stmt(),
        }
    }

    fn parse_block_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.token.span;
        self.bump(); // `{`
        self.scopes.push(ScopeKind::Block);
        self.symbols.push_scope();
        let block = self.parse_block_body(start)?;
        self.symbols.pop_scope();
        self.scopes.pop();
        Ok(Stmt::Block(block))
    }

    /// Assumes the opening `{` has already been consumed; parses
    /// declarations until the matching `}`. Scope bookkeeping is the
    /// caller's responsibility, since a function body pushes `Function`
    /// while a bare block pushes `Block`.
    fn parse_block_body(&mut self, open: Span) -> Result<BlockStmt, ParseError> {
        let mut stmts = Vec::new();
        while !self.check(&TokenKind::RBrace) && !self.is_eof() {
            stmts.push(self.parse_declaration()?);
        }
        let close = self.expect(&TokenKind::RBrace)?;
        let id = self.nodes.next_id();
        Ok(BlockStmt::new(id, open.merge(close), stmts))
    }

    fn parse_if_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.token.span;
        self.bump(); // `if`
        self.expect(&TokenKind::LParen)?;
        self.scopes.push(ScopeKind::Block);
        let cond = self.parse_expression()?;
        self.expect(&TokenKind::RParen)?;
        let then_branch = Box::new(self.parse_statement()?);
        let else_branch = if self.eat(&TokenKind::Else) { Some(Box::new(self.parse_statement()?)) } else { None };
        self.scopes.pop();
        let end = else_branch.as_ref().map_or(then_branch.span(), |e| e.span());
        let id = self.nodes.next_id();
        Ok(Stmt::If(IfStmt::new(id, start.merge(end), cond, then_branch, else_branch)))
    }

    fn parse_while_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.token.span;
        self.bump(); // `while`
        self.expect(&TokenKind::LParen)?;
        self.scopes.push(ScopeKind::Loop);
        let cond = self.parse_expression()?;
        self.expect(&TokenKind::RParen)?;
        let body = Box::new(self.parse_statement()?);
        self.scopes.pop();
        let end = body.span();
        let id = self.nodes.next_id();
        Ok(Stmt::While(WhileStmt::new(id, start.merge(end), cond, body)))
    }

    fn parse_for_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.token.span;
        self.bump(); // `for`
        self.expect(&TokenKind::LParen)?;
        self.scopes.push(ScopeKind::Loop);
        self.symbols.push_scope();

        let init = if self.eat(&TokenKind::Semicolon) {
            None
        } else if matches!(self.peek_kind(), TokenKind::Ident(_)) && matches!(self.peek_next(), Some(TokenKind::Colon)) {
            let var_start = self.token.span;
            Some(Box::new(ForInit::VarDecl(self.parse_var_decl_body(var_start)?)))
        } else {
            Some(Box::new(ForInit::Expr(self.parse_expr_stmt_raw()?)))
        };

        let cond = if self.check(&TokenKind::Semicolon) { None } else { Some(self.parse_expression()?) };
        self.expect(&TokenKind::Semicolon)?;

        let increment = if self.check(&TokenKind::RParen) { None } else { Some(self.parse_expression()?) };
        self.expect(&TokenKind::RParen)?;

        let body = Box::new(self.parse_statement()?);
        self.symbols.pop_scope();
        self.scopes.pop();

        let end = body.span();
        let id = self.nodes.next_id();
        Ok(Stmt::For(ForStmt::new(id, start.merge(end), init, cond, increment, body)))
    }

    fn parse_return_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.token.span;
        self.bump(); // `return`
        let value = if self.check(&TokenKind::Semicolon) { None } else { Some(self.parse_expression()?) };
        let end = self.expect(&TokenKind::Semicolon)?;
        let id = self.nodes.next_id();
        Ok(Stmt::Return(ReturnStmt::new(id, start.merge(end), value)))
    }

    fn parse_break_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.token.span;
        self.bump(); // `break`
        if !self.scopes.in_loop() {
            return Err(ParseError::new(start, "keyword `break`".to_string(), ParseErrorKind::BreakOutsideLoop));
        }
        let end = self.expect(&TokenKind::Semicolon)?;
        let id = self.nodes.next_id();
        Ok(Stmt::Break(BreakStmt::new(id, start.merge(end))))
    }

    fn parse_continue_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.token.span;
        self.bump(); // `continue`
        if !self.scopes.in_loop() {
            return Err(ParseError::new(start, "keyword `continue`".to_string(), ParseErrorKind::ContinueOutsideLoop));
        }
        let end = self.expect(&TokenKind::Semicolon)?;
        let id = self.nodes.next_id();
        Ok(Stmt::Continue(ContinueStmt::new(id, start.merge(end))))
    }

    fn parse_expr_stmt(&mut self) -> Result<Stmt, ParseError> {
        Ok(Stmt::Expression(self.parse_expr_stmt_raw()?))
    }

    fn parse_expr_stmt_raw(&mut self) -> Result<ExprStmt, ParseError> {
        let expr = self.parse_expression()?;
        let end = self.expect(&TokenKind::Semicolon)?;
        let span = expr.span().merge(end);
        let id = self.nodes.next_id();
        Ok(ExprStmt::new(id, span, expr))
    }
}
