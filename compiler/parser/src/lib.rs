//! Scanner and recursive-descent parser for sclc: turns source text into the
//! ordered, fully-typed statement list `sclc-passes` lowers.

mod context;
mod expr;
mod lexer;
mod scope;
mod stmt;
mod ty;

use sclc_ast::stmt::Stmt;
use sclc_errors::Error;

use context::ParserContext;
use lexer::Lexer;

/// Scans and parses `src` into the top-level statement list (`spec.md`
/// §4.2). Fails fast on the first lex or parse error.
pub fn parse(src: &str) -> Result<Vec<Stmt>, Error> {
    let tokens = Lexer::new(src).tokenize()?;
    let mut ctx = ParserContext::new(tokens);
    Ok(ctx.parse_program()?)
}

#[cfg(test)]
mod tests {
    use sclc_ast::{stmt::Stmt, Node};

    use super::*;

    #[test]
    fn s1_nested_while_loops_parse() {
        let src = "func main() { var a : i32 = 0; var b : i32 = 0; while (a < 10) { while (b < 10) { b = b + 1; } a = a + 1; } }";
        let program = parse(src).unwrap();
        assert_eq!(program.len(), 1);
        assert!(matches!(program[0], Stmt::FuncDecl(_)));
    }

    #[test]
    fn s2_early_return_joins_parse() {
        let src = "func f(x : i32) -> i32 { if (x < 0) { return 0 - x; } return x; }";
        let program = parse(src).unwrap();
        assert_eq!(program.len(), 1);
    }

    #[test]
    fn s3_external_declaration_parses() {
        let src = "func puts(s : u8[]) -> i32;";
        let program = parse(src).unwrap();
        let Stmt::FuncDecl(f) = &program[0] else { panic!("expected FuncDecl") };
        assert!(f.is_external());
    }

    #[test]
    fn s4_break_targets_inner_loop_parses() {
        let src = "func main() { while (true) { while (true) { break; } } }";
        assert!(parse(src).is_ok());
    }

    #[test]
    fn s5_undefined_identifier_fails() {
        let src = "func main() { a = 1; }";
        let err = parse(src).unwrap_err();
        assert!(err.to_string().contains("Unknown identifier") || err.to_string().contains("unknown identifier"));
    }

    #[test]
    fn s6_function_declared_inside_function_fails() {
        let src = "func main() { func g() {} }";
        let err = parse(src).unwrap_err();
        assert!(err.to_string().to_lowercase().contains("global scope"));
    }

    #[test]
    fn max_args_boundary() {
        let params: Vec<String> = (0..16).map(|i| format!("p{i}: i32")).collect();
        let src = format!("func f({}) {{}}", params.join(", "));
        assert!(parse(&src).is_ok());

        let params: Vec<String> = (0..17).map(|i| format!("p{i}: i32")).collect();
        let src = format!("func f({}) {{}}", params.join(", "));
        assert!(parse(&src).is_err());
    }

    #[test]
    fn break_outside_loop_fails() {
        assert!(parse("func main() { break; }").is_err());
    }

    #[test]
    fn statement_at_global_scope_fails() {
        assert!(parse("a = 1;").is_err());
    }

    #[test]
    fn duplicate_name_in_scope_fails() {
        assert!(parse("func main() { var a : i32 = 0; var a : i32 = 1; }").is_err());
    }

    #[test]
    fn legacy_colon_return_type_accepted() {
        let program = parse("func f() : i32 { return 0; }").unwrap();
        let Stmt::FuncDecl(f) = &program[0] else { panic!("expected FuncDecl") };
        assert_eq!(f.return_ty, sclc_ast::Type::i32());
    }

    #[test]
    fn recursive_call_resolves_before_body_finishes() {
        let src = "func fac(n : i32) -> i32 { if (n < 2) { return 1; } return n * fac(n - 1); }";
        assert!(parse(src).is_ok());
    }

    #[test]
    fn header_round_trip_property() {
        // Testable property 2: re-parsing a declaration emitted from the AST succeeds.
        let program = parse("func add(a : i32, b : i32) -> i32;").unwrap();
        let Stmt::FuncDecl(f) = &program[0] else { panic!("expected FuncDecl") };
        let header = format!(
            "func {}({})->{};",
            f.name,
            f.params.iter().map(|p| format!("{}:{}", p.name, p.ty)).collect::<Vec<_>>().join(","),
            f.return_ty
        );
        assert!(parse(&header).is_ok());
    }

    #[test]
    fn every_expression_node_has_a_type() {
        // Testable property 3, spot-checked over a representative program.
        let program = parse("func f() -> i32 { var x : i32 = 1 + 2; return x; }").unwrap();
        let Stmt::FuncDecl(f) = &program[0] else { panic!("expected FuncDecl") };
        let body = f.body.as_ref().unwrap();
        let Stmt::VarDecl(v) = &body.stmts[0] else { panic!("expected VarDecl") };
        let init = v.init.as_ref().unwrap();
        // `ty()` always returns a concrete `Type`; reaching this line is the assertion.
        let _ = init.ty();
        let _ = init.id();
    }
}
