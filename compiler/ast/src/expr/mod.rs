use std::fmt;

use sclc_span::{NodeId, Span};

use crate::{common::Node, ty::Type};

mod assign;
mod binary;
mod call;
mod group;
mod identifier;
mod literal;
mod unary;

pub use assign::AssignExpr;
pub use binary::{BinaryExpr, BinaryOp};
pub use call::CallExpr;
pub use group::GroupExpr;
pub use identifier::IdentifierExpr;
pub use literal::{LiteralExpr, LiteralValue};
pub use unary::{UnaryExpr, UnaryOp};

/// An expression, always carrying the type the parser resolved for it
/// (`spec.md` §3: "every expression node carries a resolved type").
#[derive(Clone, Debug)]
pub enum Expr {
    Literal(LiteralExpr),
    Identifier(IdentifierExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Group(GroupExpr),
    Assign(AssignExpr),
    Call(CallExpr),
}

impl Expr {
    pub fn ty(&self) -> &Type {
        match self {
            Expr::Literal(e) => &e.ty,
            Expr::Identifier(e) => &e.ty,
            Expr::Unary(e) => &e.ty,
            Expr::Binary(e) => &e.ty,
            Expr::Group(e) => &e.ty,
            Expr::Assign(e) => &e.ty,
            Expr::Call(e) => &e.ty,
        }
    }
}

impl Node for Expr {
    fn id(&self) -> NodeId {
        match self {
            Expr::Literal(e) => e.id,
            Expr::Identifier(e) => e.id,
            Expr::Unary(e) => e.id,
            Expr::Binary(e) => e.id,
            Expr::Group(e) => e.id,
            Expr::Assign(e) => e.id,
            Expr::Call(e) => e.id,
        }
    }

    fn span(&self) -> Span {
        match self {
            Expr::Literal(e) => e.span,
            Expr::Identifier(e) => e.span,
            Expr::Unary(e) => e.span,
            Expr::Binary(e) => e.span,
            Expr::Group(e) => e.span,
            Expr::Assign(e) => e.span,
            Expr::Call(e) => e.span,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(e) => write!(f, "{e}"),
            Expr::Identifier(e) => write!(f, "{e}"),
            Expr::Unary(e) => write!(f, "{e}"),
            Expr::Binary(e) => write!(f, "{e}"),
            Expr::Group(e) => write!(f, "{e}"),
            Expr::Assign(e) => write!(f, "{e}"),
            Expr::Call(e) => write!(f, "{e}"),
        }
    }
}
