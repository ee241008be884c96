use std::fmt;

use sclc_span::{NodeId, Span};

use super::Expr;
use crate::ty::Type;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Not,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Neg => write!(f, "-"),
            UnaryOp::Not => write!(f, "not "),
        }
    }
}

#[derive(Clone, Debug)]
pub struct UnaryExpr {
    pub id: NodeId,
    pub span: Span,
    pub op: UnaryOp,
    pub operand: Box<Expr>,
    pub ty: Type,
}

impl UnaryExpr {
    pub fn new(id: NodeId, span: Span, op: UnaryOp, operand: Box<Expr>, ty: Type) -> Self {
        Self { id, span, op, operand, ty }
    }
}

impl fmt::Display for UnaryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op, self.operand)
    }
}

crate::simple_node_impl!(UnaryExpr);
