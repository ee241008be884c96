use sclc_span::{NodeId, Span};

use super::{ExprStmt, Stmt, VarDeclStmt};
use crate::expr::Expr;

#[derive(Clone, Debug)]
pub struct IfStmt {
    pub id: NodeId,
    pub span: Span,
    pub cond: Expr,
    pub then_branch: Box<Stmt>,
    pub else_branch: Option<Box<Stmt>>,
}

impl IfStmt {
    pub fn new(id: NodeId, span: Span, cond: Expr, then_branch: Box<Stmt>, else_branch: Option<Box<Stmt>>) -> Self {
        Self { id, span, cond, then_branch, else_branch }
    }
}

crate::simple_node_impl!(IfStmt);

#[derive(Clone, Debug)]
pub struct WhileStmt {
    pub id: NodeId,
    pub span: Span,
    pub cond: Expr,
    pub body: Box<Stmt>,
}

impl WhileStmt {
    pub fn new(id: NodeId, span: Span, cond: Expr, body: Box<Stmt>) -> Self {
        Self { id, span, cond, body }
    }
}

crate::simple_node_impl!(WhileStmt);

/// The initializer clause of a `for`, which is either a local `var`
/// declaration or a bare expression statement (`spec.md` §4.3: "first lower
/// the `init` statement into the current block").
#[derive(Clone, Debug)]
pub enum ForInit {
    VarDecl(VarDeclStmt),
    Expr(ExprStmt),
}

#[derive(Clone, Debug)]
pub struct ForStmt {
    pub id: NodeId,
    pub span: Span,
    pub init: Option<Box<ForInit>>,
    pub cond: Option<Expr>,
    pub increment: Option<Expr>,
    pub body: Box<Stmt>,
}

impl ForStmt {
    pub fn new(
        id: NodeId,
        span: Span,
        init: Option<Box<ForInit>>,
        cond: Option<Expr>,
        increment: Option<Expr>,
        body: Box<Stmt>,
    ) -> Self {
        Self { id, span, init, cond, increment, body }
    }
}

crate::simple_node_impl!(ForStmt);
