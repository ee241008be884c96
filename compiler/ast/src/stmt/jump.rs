use sclc_span::{NodeId, Span};

use crate::expr::Expr;

#[derive(Clone, Debug)]
pub struct ReturnStmt {
    pub id: NodeId,
    pub span: Span,
    pub value: Option<Expr>,
}

impl ReturnStmt {
    pub fn new(id: NodeId, span: Span, value: Option<Expr>) -> Self {
        Self { id, span, value }
    }
}

crate::simple_node_impl!(ReturnStmt);

/// Requires an enclosing `while`/`for` (`spec.md` §4.2); the parser checks
/// this against its loop-depth counter before building the node.
#[derive(Clone, Debug)]
pub struct BreakStmt {
    pub id: NodeId,
    pub span: Span,
}

impl BreakStmt {
    pub fn new(id: NodeId, span: Span) -> Self {
        Self { id, span }
    }
}

crate::simple_node_impl!(BreakStmt);

#[derive(Clone, Debug)]
pub struct ContinueStmt {
    pub id: NodeId,
    pub span: Span,
}

impl ContinueStmt {
    pub fn new(id: NodeId, span: Span) -> Self {
        Self { id, span }
    }
}

crate::simple_node_impl!(ContinueStmt);
