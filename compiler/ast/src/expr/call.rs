use std::fmt;

use sclc_span::{NodeId, Span};

use super::Expr;
use crate::ty::Type;

/// `callee(args...)`. `callee`'s resolved type must be a
/// `Type::FunctionReference`; `ty` is that reference's return type
/// (`spec.md` §4.2).
#[derive(Clone, Debug)]
pub struct CallExpr {
    pub id: NodeId,
    pub span: Span,
    pub callee: Box<Expr>,
    pub args: Vec<Expr>,
    pub ty: Type,
}

impl CallExpr {
    pub fn new(id: NodeId, span: Span, callee: Box<Expr>, args: Vec<Expr>, ty: Type) -> Self {
        Self { id, span, callee, args, ty }
    }
}

impl fmt::Display for CallExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.callee)?;
        for (i, a) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{a}")?;
        }
        write!(f, ")")
    }
}

crate::simple_node_impl!(CallExpr);
