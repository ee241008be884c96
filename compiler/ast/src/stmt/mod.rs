use std::fmt;

use sclc_span::{NodeId, Span};

use crate::common::Node;

mod block;
mod control_flow;
mod func_decl;
mod jump;
mod var_decl;

pub use block::BlockStmt;
pub use control_flow::{ForInit, ForStmt, IfStmt, WhileStmt};
pub use func_decl::{FuncDeclStmt, Param};
pub use jump::{BreakStmt, ContinueStmt, ReturnStmt};
pub use var_decl::VarDeclStmt;

use crate::expr::Expr;

/// A single expression evaluated for its side effects.
#[derive(Clone, Debug)]
pub struct ExprStmt {
    pub id: NodeId,
    pub span: Span,
    pub expr: Expr,
}

impl ExprStmt {
    pub fn new(id: NodeId, span: Span, expr: Expr) -> Self {
        Self { id, span, expr }
    }
}

impl fmt::Display for ExprStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};", self.expr)
    }
}

crate::simple_node_impl!(ExprStmt);

/// Every statement form `spec.md` §3/§4.2 names.
#[derive(Clone, Debug)]
pub enum Stmt {
    Block(BlockStmt),
    Expression(ExprStmt),
    FuncDecl(FuncDeclStmt),
    VarDecl(VarDeclStmt),
    Return(ReturnStmt),
    If(IfStmt),
    While(WhileStmt),
    For(ForStmt),
    Break(BreakStmt),
    Continue(ContinueStmt),
}

impl Node for Stmt {
    fn id(&self) -> NodeId {
        match self {
            Stmt::Block(s) => s.id,
            Stmt::Expression(s) => s.id,
            Stmt::FuncDecl(s) => s.id,
            Stmt::VarDecl(s) => s.id,
            Stmt::Return(s) => s.id,
            Stmt::If(s) => s.id,
            Stmt::While(s) => s.id,
            Stmt::For(s) => s.id,
            Stmt::Break(s) => s.id,
            Stmt::Continue(s) => s.id,
        }
    }

    fn span(&self) -> Span {
        match self {
            Stmt::Block(s) => s.span,
            Stmt::Expression(s) => s.span,
            Stmt::FuncDecl(s) => s.span,
            Stmt::VarDecl(s) => s.span,
            Stmt::Return(s) => s.span,
            Stmt::If(s) => s.span,
            Stmt::While(s) => s.span,
            Stmt::For(s) => s.span,
            Stmt::Break(s) => s.span,
            Stmt::Continue(s) => s.span,
        }
    }
}
