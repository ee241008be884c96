use std::fmt;

use sclc_span::{NodeId, Span, Symbol};

use crate::ty::Type;

#[derive(Clone, Debug)]
pub struct IdentifierExpr {
    pub id: NodeId,
    pub span: Span,
    pub name: Symbol,
    pub ty: Type,
}

impl IdentifierExpr {
    pub fn new(id: NodeId, span: Span, name: Symbol, ty: Type) -> Self {
        Self { id, span, name, ty }
    }
}

impl fmt::Display for IdentifierExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

crate::simple_node_impl!(IdentifierExpr);
