use sclc_span::{NodeId, Span};

use super::Stmt;

/// `{ stmt... }`. Also used, without braces in the source text, as the
/// synthesized body of a `for`/`while`/`if` arm that wasn't itself a block.
#[derive(Clone, Debug)]
pub struct BlockStmt {
    pub id: NodeId,
    pub span: Span,
    pub stmts: Vec<Stmt>,
}

impl BlockStmt {
    pub fn new(id: NodeId, span: Span, stmts: Vec<Stmt>) -> Self {
        Self { id, span, stmts }
    }
}

crate::simple_node_impl!(BlockStmt);
