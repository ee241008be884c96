use sclc_span::Span;

/// A `ParseError(line, token, message)` per `spec.md` §4.2/§7. `token` is a
/// textual description of the token that was being consumed when the error
/// was raised (its `Display`, not its raw lexeme, since literals and
/// keywords describe themselves best that way).
#[derive(Debug, Clone, thiserror::Error)]
#[error("(at {span}) (at token {token}) {kind}")]
pub struct ParseError {
    pub span: Span,
    pub token: String,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(span: Span, token: impl Into<String>, kind: ParseErrorKind) -> Self {
        Self { span, token: token.into(), kind }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("function declarations must be at global scope")]
    FunctionNotAtGlobalScope,
    #[error("statements are not allowed at global scope")]
    StatementAtGlobalScope,
    #[error("`{0}` is already defined in this scope")]
    DuplicateName(String),
    #[error("unknown identifier `{0}`")]
    UnknownIdentifier(String),
    #[error("unknown type `{0}`")]
    UnknownType(String),
    #[error("`break` must be inside an enclosing `while` or `for`")]
    BreakOutsideLoop,
    #[error("`continue` must be inside an enclosing `while` or `for`")]
    ContinueOutsideLoop,
    #[error("function cannot declare more than {max} parameters")]
    TooManyParameters { max: usize },
    #[error("call cannot pass more than {max} arguments")]
    TooManyArguments { max: usize },
    #[error("invalid assignment target")]
    InvalidAssignmentTarget,
    #[error("callee is not a function")]
    NotCallable,
    #[error("expected {expected}, found {found}")]
    Expected { expected: String, found: String },
    #[error("{0}")]
    Message(String),
}
