use std::fmt;

use sclc_span::{NodeId, Span};

use super::Expr;
use crate::ty::Type;

/// A binary operator, grouped here the way `spec.md` §4.2's precedence
/// table groups them (logical, equality, relational, additive,
/// multiplicative); the lowering pass further splits each arithmetic and
/// comparison op on signedness/float-ness via the operand's `Type`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    And,
    Or,
}

impl BinaryOp {
    pub fn is_comparison(self) -> bool {
        matches!(self, BinaryOp::Eq | BinaryOp::Ne | BinaryOp::Lt | BinaryOp::Gt | BinaryOp::Le | BinaryOp::Ge)
    }

    pub fn is_logical(self) -> bool {
        matches!(self, BinaryOp::And | BinaryOp::Or)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Le => "<=",
            BinaryOp::Ge => ">=",
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
        };
        write!(f, "{s}")
    }
}

/// The parser assigns the left operand's type conservatively (`spec.md`
/// §4.2: "the parser assigns the result type conservatively as the left
/// operand's type"), comparisons included — the AST type field is not
/// `bool` for a comparison, a documented surprise carried forward rather
/// than silently fixed (see `SPEC_FULL.md` §9).
#[derive(Clone, Debug)]
pub struct BinaryExpr {
    pub id: NodeId,
    pub span: Span,
    pub lhs: Box<Expr>,
    pub op: BinaryOp,
    pub rhs: Box<Expr>,
    pub ty: Type,
}

impl BinaryExpr {
    pub fn new(id: NodeId, span: Span, lhs: Box<Expr>, op: BinaryOp, rhs: Box<Expr>, ty: Type) -> Self {
        Self { id, span, lhs, op, rhs, ty }
    }
}

impl fmt::Display for BinaryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.op, self.rhs)
    }
}

crate::simple_node_impl!(BinaryExpr);
