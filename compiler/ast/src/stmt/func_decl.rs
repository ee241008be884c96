use sclc_span::{NodeId, Span, Symbol};

use super::BlockStmt;
use crate::ty::Type;

#[derive(Clone, Debug)]
pub struct Param {
    pub name: Symbol,
    pub ty: Type,
    pub span: Span,
}

/// A function declaration or, when `body` is `None`, an external
/// declaration (`spec.md` §4.2: "If `func ... )` is followed by `;` rather
/// than `{`, the body is absent; no scope is pushed"). `return_ty` defaults
/// to `void` when no `-> T` is present.
#[derive(Clone, Debug)]
pub struct FuncDeclStmt {
    pub id: NodeId,
    pub span: Span,
    pub name: Symbol,
    pub params: Vec<Param>,
    pub return_ty: Type,
    pub body: Option<BlockStmt>,
}

impl FuncDeclStmt {
    pub fn new(
        id: NodeId,
        span: Span,
        name: Symbol,
        params: Vec<Param>,
        return_ty: Type,
        body: Option<BlockStmt>,
    ) -> Self {
        Self { id, span, name, params, return_ty, body }
    }

    /// The `FunctionReference` type recorded under the function's name so
    /// recursive calls resolve before the body is parsed (`spec.md` §4.2).
    pub fn reference_type(&self) -> Type {
        Type::FunctionReference(Box::new(self.return_ty.clone()), self.params.iter().map(|p| p.ty.clone()).collect())
    }

    pub fn is_external(&self) -> bool {
        self.body.is_none()
    }
}

crate::simple_node_impl!(FuncDeclStmt);
