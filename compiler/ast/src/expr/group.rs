use std::fmt;

use sclc_span::{NodeId, Span};

use super::Expr;
use crate::ty::Type;

/// A parenthesized expression. Kept as its own node (rather than discarded
/// during parsing) so the original span of the parens is preserved for
/// diagnostics; lowering simply forwards to the inner expression.
#[derive(Clone, Debug)]
pub struct GroupExpr {
    pub id: NodeId,
    pub span: Span,
    pub inner: Box<Expr>,
    pub ty: Type,
}

impl GroupExpr {
    pub fn new(id: NodeId, span: Span, inner: Box<Expr>, ty: Type) -> Self {
        Self { id, span, inner, ty }
    }
}

impl fmt::Display for GroupExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.inner)
    }
}

crate::simple_node_impl!(GroupExpr);
