use sclc_span::Span;

/// Errors raised by the scanner (`spec.md` §4.1, §7: "unclassifiable byte" or
/// "unterminated string literal").
#[derive(Debug, Clone, thiserror::Error)]
#[error("(at {span}) {kind}")]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

impl LexError {
    pub fn new(span: Span, kind: LexErrorKind) -> Self {
        Self { span, kind }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LexErrorKind {
    #[error("unexpected character `{0}`")]
    UnexpectedChar(char),
    #[error("unterminated string literal")]
    UnterminatedString,
}
