use sclc_span::{NodeId, Span, Symbol};

use crate::{expr::Expr, ty::Type};

/// `var name: T [= init];`. Lowered to a single stack slot at function
/// scope, or a module global outside one (`spec.md` §4.3).
#[derive(Clone, Debug)]
pub struct VarDeclStmt {
    pub id: NodeId,
    pub span: Span,
    pub name: Symbol,
    pub ty: Type,
    pub init: Option<Expr>,
}

impl VarDeclStmt {
    pub fn new(id: NodeId, span: Span, name: Symbol, ty: Type, init: Option<Expr>) -> Self {
        Self { id, span, name, ty, init }
    }
}

crate::simple_node_impl!(VarDeclStmt);
