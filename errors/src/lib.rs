//! Diagnostics shared across sclc's scanner, parser, and lowering pass.
//!
//! Mirrors the teacher's `leo-errors` split between a structured error
//! value and a `Handler` that is the only thing allowed to print and exit
//! (`spec.md` §7: "the driver is the only place that prints and exits").

mod handler;
mod lex;
mod lower;
mod parse;

pub use handler::Handler;
pub use lex::{LexError, LexErrorKind};
pub use lower::LowerError;
pub use parse::{ParseError, ParseErrorKind};

pub use sclc_span::Span;

/// The union of every fallible-stage error, so that `sclc-compiler` can
/// propagate a single `Result` type through the whole pipeline.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Lower(#[from] LowerError),
}

pub type Result<T> = std::result::Result<T, Error>;
