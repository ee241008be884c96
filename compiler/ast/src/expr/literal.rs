use std::fmt;

use sclc_span::{NodeId, Span};

use crate::ty::Type;

/// The decoded payload of a literal expression; `Int` is always stored
/// widened to host `i32` by the scanner (`spec.md` §4.1) and narrowed or
/// sign-extended to the declared slot's width only at lowering.
#[derive(Clone, Debug, PartialEq)]
pub enum LiteralValue {
    Bool(bool),
    Int(i32),
    Double(f64),
    Str(String),
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Bool(b) => write!(f, "{b}"),
            LiteralValue::Int(i) => write!(f, "{i}"),
            LiteralValue::Double(d) => write!(f, "{d}"),
            LiteralValue::Str(s) => write!(f, "{s:?}"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct LiteralExpr {
    pub id: NodeId,
    pub span: Span,
    pub value: LiteralValue,
    pub ty: Type,
}

impl LiteralExpr {
    pub fn new(id: NodeId, span: Span, value: LiteralValue, ty: Type) -> Self {
        Self { id, span, value, ty }
    }
}

impl fmt::Display for LiteralExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

crate::simple_node_impl!(LiteralExpr);
