//! Orchestrates the scan → parse → lower pipeline for sclc (`spec.md` §1),
//! the way `leo-compiler` orchestrates the teacher's own parse →
//! type-check → pass pipeline: a small owner struct taking options once and
//! source text per call.

mod compiler;
mod config;

pub use compiler::{CompileOutput, Compiler};
pub use config::CompilerConfig;
