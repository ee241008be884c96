use sclc_ast::stmt::Stmt;
use sclc_errors::Result;
use sclc_passes::{IrBuilder, Lowerer};

use crate::config::CompilerConfig;

/// What one successful [`Compiler::compile`] call hands back: the typed
/// program the parser produced and the finished backend the lowering pass
/// drove. Generic over the backend the same way [`Lowerer`] is, so a caller
/// can swap in a real LLVM-backed `IrBuilder` without this crate changing.
pub struct CompileOutput<B: IrBuilder> {
    pub program: Vec<Stmt>,
    pub module: B,
}

/// Orchestrates the scan → parse → lower pipeline (`spec.md` §1). Owns
/// nothing but its [`CompilerConfig`]; source text and the backend to lower
/// against are supplied per call, the way the teacher's `Compiler` takes a
/// fresh `Handler` and file path per run rather than caching them across
/// compilations.
pub struct Compiler {
    config: CompilerConfig,
}

impl Compiler {
    pub fn new(config: CompilerConfig) -> Self {
        Self { config }
    }

    /// Runs the full pipeline over `source`, lowering against `builder`.
    /// The first `LexError`/`ParseError`/`LowerError` terminates the run
    /// (`spec.md` §5: "no recovery, no warnings").
    #[tracing::instrument(skip(self, source, builder))]
    pub fn compile<B: IrBuilder>(&self, source: &str, builder: B) -> Result<CompileOutput<B>> {
        tracing::debug!(bytes = source.len(), "scanning and parsing");
        let program = sclc_parser::parse(source)?;
        tracing::debug!(declarations = program.len(), "parsed program, lowering");
        let module = Lowerer::new(builder).lower_program(&self.config.module_name, &program)?;
        tracing::debug!("lowering complete");
        Ok(CompileOutput { program, module })
    }
}

#[cfg(test)]
mod tests {
    use sclc_passes::RefIrBuilder;

    use super::*;

    #[test]
    fn compiles_a_well_formed_program() {
        let compiler = Compiler::new(CompilerConfig::new("demo"));
        let output = compiler.compile("func main() { var x : i32 = 0; }", RefIrBuilder::new()).unwrap();
        assert_eq!(output.program.len(), 1);
        let module = output.module.finish();
        assert_eq!(module.name, "demo");
        assert!(module.verify_single_terminator_per_block());
    }

    #[test]
    fn first_parse_error_short_circuits_lowering() {
        let compiler = Compiler::new(CompilerConfig::default());
        let err = compiler.compile("func main() { a = 1; }", RefIrBuilder::new()).unwrap_err();
        assert!(matches!(err, sclc_errors::Error::Parse(_)));
    }
}
