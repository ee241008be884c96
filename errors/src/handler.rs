use colored::Colorize;

use crate::Error;

/// The single place allowed to print a diagnostic and decide the process
/// should exit non-zero (`spec.md` §7). Every stage returns a `Result`
/// instead of printing directly; the driver owns one `Handler` and calls
/// [`Handler::report`] on the first error it sees.
#[derive(Debug, Default)]
pub struct Handler {
    errors: std::cell::RefCell<Vec<Error>>,
}

impl Handler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error without printing it. Stages that might one day want
    /// to collect several diagnostics before bailing (the parser currently
    /// does not — it returns `Err` on the first one, per spec) can use this;
    /// `render_all`/`has_errors` exist for that future, without changing
    /// today's "halt on first error" behavior.
    pub fn push(&self, err: Error) {
        self.errors.borrow_mut().push(err);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.borrow().is_empty()
    }

    /// Renders one error exactly as `spec.md` §7 specifies:
    /// `Error: (at line N) (at token …) <message>`, red-highlighted.
    pub fn render(err: &Error) -> String {
        format!("{} {}", "Error:".red().bold(), err)
    }

    pub fn render_all(&self) -> Vec<String> {
        self.errors.borrow().iter().map(Self::render).collect()
    }

    /// Prints the rendered error to stderr. The driver is expected to call
    /// this once and then `std::process::exit(1)`.
    pub fn report(&self, err: &Error) {
        eprintln!("{}", Self::render(err));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LexError, LexErrorKind};
    use sclc_span::Span;

    #[test]
    fn render_matches_spec_format() {
        colored::control::set_override(false);
        let err: Error = LexError::new(Span::new(3, 0, 1), LexErrorKind::UnexpectedChar('$')).into();
        let rendered = Handler::render(&err);
        assert_eq!(rendered, "Error: (at line 3) unexpected character `$`");
    }
}
