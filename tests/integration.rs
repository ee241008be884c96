//! End-to-end scenarios S1–S6 (`spec.md` §8), driven through the public
//! `sclc-compiler` API rather than any single crate's internals — these
//! exercise the full scan → parse → lower pipeline the way a real `sclc`
//! invocation would.

use sclc_compiler::{CompileOutput, Compiler, CompilerConfig};
use sclc_passes::RefIrBuilder;

fn compile(src: &str) -> sclc_passes::refir::Module {
    let CompileOutput { module, .. } =
        Compiler::new(CompilerConfig::new("test")).compile(src, RefIrBuilder::new()).expect("program should compile");
    module.finish()
}

#[test]
fn s1_nested_while_loops() {
    let module = compile(
        "func main() { var a : i32 = 0; var b : i32 = 0; while (a < 10) { while (b < 10) { b = b + 1; } a = a + 1; } }",
    );
    assert_eq!(module.functions.len(), 1);
    assert!(module.verify_single_terminator_per_block());
    // entry + return + (cond, body, exit) for each of the two nested whiles.
    assert_eq!(module.functions[0].blocks.len(), 2 + 3 * 2);
}

#[test]
fn s2_early_return_joins_a_single_ret() {
    let module = compile("func f(x : i32) -> i32 { if (x < 0) { return 0 - x; } return x; }");
    assert!(module.verify_single_terminator_per_block());
    assert_eq!(module.functions[0].name, "f");
    assert_eq!(module.functions[0].ret, sclc_ast::NamedType::I32);
}

#[test]
fn s3_external_declaration_has_no_entry_block() {
    let module = compile("func puts(s : u8[]) -> i32;");
    let func = &module.functions[0];
    assert!(func.external);
    assert!(func.blocks.is_empty());
    assert_eq!(func.params, vec![sclc_ast::NamedType::Ptr]);
    assert_eq!(func.ret, sclc_ast::NamedType::I32);
}

#[test]
fn s4_break_targets_the_inner_loop_only() {
    let module = compile("func main() { while (true) { while (true) { break; } } }");
    assert!(module.verify_single_terminator_per_block());
    // entry + return + (cond, body, exit) * 2 + one dead block after `break`.
    assert_eq!(module.functions[0].blocks.len(), 2 + 3 * 2 + 1);
}

#[test]
fn s5_undefined_identifier_fails_to_compile() {
    let compiler = Compiler::new(CompilerConfig::default());
    let err = compiler.compile("func main() { a = 1; }", RefIrBuilder::new()).unwrap_err();
    assert!(err.to_string().to_lowercase().contains("unknown identifier"));
}

#[test]
fn s6_function_declared_inside_function_fails_to_compile() {
    let compiler = Compiler::new(CompilerConfig::default());
    let err = compiler.compile("func main() { func g() {} }", RefIrBuilder::new()).unwrap_err();
    assert!(err.to_string().to_lowercase().contains("global scope"));
}

#[test]
fn recursive_function_calls_resolve_through_the_module_function_table() {
    let module = compile("func fac(n : i32) -> i32 { if (n < 2) { return 1; } return n * fac(n - 1); }");
    assert!(module.verify_single_terminator_per_block());
}

#[test]
fn non_constant_global_initializer_compiles_via_the_implicit_init_function() {
    let module = compile("var base : i32 = 1; var total : i32 = base + 1;");
    assert!(module.verify_single_terminator_per_block());
    assert!(module.functions.iter().any(|f| f.name == "sclc.init"));
}

#[test]
fn header_emitted_from_a_compiled_programs_ast_reparses() {
    let CompileOutput { program, .. } = Compiler::new(CompilerConfig::new("test"))
        .compile("func add(a : i32, b : i32) -> i32 { return a + b; } var total : i32;", RefIrBuilder::new())
        .unwrap();
    let header = sclc_headergen::HeaderWriter::new().emit(&program);
    let reparsed = sclc_parser::parse(&header).expect("emitted header should itself parse");
    assert_eq!(reparsed.len(), program.len());
}
