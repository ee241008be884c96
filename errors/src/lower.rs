/// Internal invariant violations from the lowering pass (`spec.md` §7):
/// negating a pointer, calling an unresolved name, or reaching an AST shape
/// that a correctly-parsed program can never produce. These are fatal and
/// should not occur for programs that passed the parser.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LowerError {
    #[error("cannot apply unary `-` to a pointer value")]
    NegatePointer,
    #[error("call to unresolved function `{0}`")]
    UnresolvedCall(String),
    #[error("use of unresolved identifier `{0}` during lowering")]
    UnresolvedIdentifier(String),
    #[error("lowering reached an AST shape unreachable under correct parsing: {0}")]
    Unreachable(String),
}
