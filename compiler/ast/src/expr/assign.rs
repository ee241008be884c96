use std::fmt;

use sclc_span::{NodeId, Span};

use super::{Expr, IdentifierExpr};
use crate::ty::Type;

/// `target = value`. The parser only ever builds this with `target` an
/// [`IdentifierExpr`] (`spec.md` §4.2: "LHS must be an Identifier; otherwise
/// `Invalid assignment target`"), so the field is typed as such rather than
/// as a general `Expr` — wrong-shaped assignment targets are rejected
/// before a node is ever built instead of panicking in the lowering pass.
#[derive(Clone, Debug)]
pub struct AssignExpr {
    pub id: NodeId,
    pub span: Span,
    pub target: Box<IdentifierExpr>,
    pub value: Box<Expr>,
    pub ty: Type,
}

impl AssignExpr {
    pub fn new(id: NodeId, span: Span, target: Box<IdentifierExpr>, value: Box<Expr>, ty: Type) -> Self {
        Self { id, span, target, value, ty }
    }
}

impl fmt::Display for AssignExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.target, self.value)
    }
}

crate::simple_node_impl!(AssignExpr);
