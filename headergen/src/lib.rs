//! Emits a textual declaration header from a parsed program (`spec.md`
//! §4.4): one `func NAME(p1:T1,…)->R;` or `var NAME:T;` line per top-level
//! declaration, in source order, prefixed with a `// GENERATED FILE`
//! banner.
//!
//! Modeled on the teacher's formatter crate: a writer owning a `String`
//! buffer with one method per declaration kind, leaning on `Type`'s own
//! canonical `Display` impl rather than duplicating the type-printing logic
//! here.

use sclc_ast::stmt::{FuncDeclStmt, Stmt, VarDeclStmt};

#[derive(Default)]
pub struct HeaderWriter {
    buf: String,
}

impl HeaderWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the writer and returns the finished header text. The
    /// caller's `program` must be the direct output of `sclc_parser::parse`
    /// — every element is a `FuncDecl` or `VarDecl` by construction, since
    /// the parser rejects any other statement at global scope.
    #[tracing::instrument(skip(self, program))]
    pub fn emit(mut self, program: &[Stmt]) -> String {
        self.buf.push_str("// GENERATED FILE\n");
        for stmt in program {
            match stmt {
                Stmt::FuncDecl(f) => self.write_func_decl(f),
                Stmt::VarDecl(v) => self.write_var_decl(v),
                other => unreachable!("non-declaration statement at global scope survived parsing: {other:?}"),
            }
        }
        tracing::debug!(declarations = program.len(), "emitted header");
        self.buf
    }

    fn write_func_decl(&mut self, f: &FuncDeclStmt) {
        self.buf.push_str("func ");
        self.buf.push_str(f.name.as_str());
        self.buf.push('(');
        for (i, p) in f.params.iter().enumerate() {
            if i > 0 {
                self.buf.push(',');
            }
            self.buf.push_str(p.name.as_str());
            self.buf.push(':');
            self.buf.push_str(&p.ty.to_string());
        }
        self.buf.push_str(")->");
        self.buf.push_str(&f.return_ty.to_string());
        self.buf.push_str(";\n");
    }

    fn write_var_decl(&mut self, v: &VarDeclStmt) {
        self.buf.push_str("var ");
        self.buf.push_str(v.name.as_str());
        self.buf.push(':');
        self.buf.push_str(&v.ty.to_string());
        self.buf.push_str(";\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_banner_and_one_line_per_declaration() {
        let program = sclc_parser::parse("func add(a : i32, b : i32) -> i32 { return a + b; } var counter : i32;").unwrap();
        let header = HeaderWriter::new().emit(&program);
        assert!(header.starts_with("// GENERATED FILE\n"));
        assert!(header.contains("func add(a:i32,b:i32)->i32;\n"));
        assert!(header.contains("var counter:i32;\n"));
    }

    #[test]
    fn external_declaration_emits_like_any_other() {
        let program = sclc_parser::parse("func puts(s : u8[]) -> i32;").unwrap();
        let header = HeaderWriter::new().emit(&program);
        assert_eq!(header, "// GENERATED FILE\nfunc puts(s:u8[])->i32;\n");
    }

    #[test]
    fn no_params_no_return_type_prints_void() {
        let program = sclc_parser::parse("func main() {}").unwrap();
        let header = HeaderWriter::new().emit(&program);
        assert_eq!(header, "// GENERATED FILE\nfunc main()->void;\n");
    }

    #[test]
    fn emitted_header_reparses_to_the_same_header() {
        let program = sclc_parser::parse(
            "func fac(n : i32) -> i32 { if (n < 2) { return 1; } return n * fac(n - 1); } func puts(s : u8[]) -> i32; var count : i32;",
        )
        .unwrap();
        let first = HeaderWriter::new().emit(&program);
        let reparsed = sclc_parser::parse(&first).unwrap();
        let second = HeaderWriter::new().emit(&reparsed);
        assert_eq!(first, second);
    }
}
