//! Typed AST → IR lowering (`spec.md` §4.3), generic over any backend
//! implementing [`IrBuilder`]. `Lowerer::lower_program` is the crate's one
//! public entry point; everything else is a private recursive-descent walk
//! mirroring the parser's own shape (one `lower_*` method per AST variant,
//! exhaustive matches so a new `Expr`/`Stmt` variant fails to compile here
//! until handled — the redesign `spec.md` §9 asks for in place of the
//! source's RTTI-driven visitor).

use indexmap::IndexMap;
use sclc_ast::{
    expr::{BinaryOp, Expr, IdentifierExpr, LiteralValue, UnaryOp},
    stmt::{ForInit, Stmt},
    NamedType, Type,
};
use sclc_errors::LowerError;
use sclc_span::Symbol;

use crate::ir_builder::{FloatPredicate, IntPredicate, IrBuilder};

/// Collapses every pointer and function-reference type to the single
/// opaque IR pointer (`spec.md` §4.3, §9 "opaque pointer lowering"); the
/// AST `Type` remains the only place signedness/float-ness is looked up.
pub fn ir_type(ty: &Type) -> NamedType {
    match ty {
        Type::Named(n) => *n,
        Type::IndexedPointer(_) | Type::ReferencePointer(_) | Type::FunctionReference(..) => NamedType::Ptr,
    }
}

#[derive(Clone, Copy)]
enum Global<B: IrBuilder> {
    Function(B::Function),
    Var(B::Value, NamedType),
}

struct LoopTargets<B: IrBuilder> {
    continue_target: B::Block,
    break_target: B::Block,
}

pub struct Lowerer<B: IrBuilder> {
    builder: B,
    globals: IndexMap<Symbol, Global<B>>,
    localvars: IndexMap<Symbol, B::Value>,
    arguments: IndexMap<Symbol, B::Value>,
    loop_stack: Vec<LoopTargets<B>>,
    current_function: Option<B::Function>,
    return_slot: Option<B::Value>,
    return_ty: NamedType,
    return_block: Option<B::Block>,
    next_string_id: u32,
    init_function: Option<B::Function>,
    init_block: Option<B::Block>,
}

impl<B: IrBuilder> Lowerer<B> {
    pub fn new(builder: B) -> Self {
        Self {
            builder,
            globals: IndexMap::new(),
            localvars: IndexMap::new(),
            arguments: IndexMap::new(),
            loop_stack: Vec::new(),
            current_function: None,
            return_slot: None,
            return_ty: NamedType::Void,
            return_block: None,
            next_string_id: 0,
            init_function: None,
            init_block: None,
        }
    }

    /// Lowers every top-level declaration and hands the finished builder
    /// back to the caller (`sclc-compiler` asks the backend to render or
    /// serialize it; `spec.md` §4.3 leaves the emitted form unspecified).
    #[tracing::instrument(skip(self, program))]
    pub fn lower_program(mut self, module_name: &str, program: &[Stmt]) -> Result<B, LowerError> {
        self.builder.set_module_name(module_name);
        for stmt in program {
            match stmt {
                Stmt::FuncDecl(f) => self.lower_function(f)?,
                Stmt::VarDecl(v) => self.lower_global_var(v)?,
                other => return Err(LowerError::Unreachable(format!("statement at global scope survived parsing: {other:?}"))),
            }
        }
        if self.init_function.is_some() {
            self.builder.ret_void();
        }
        Ok(self.builder)
    }

    /// `spec.md` §9's "variable declaration at global scope" open question,
    /// resolved per `DESIGN.md`: a compile-time-constant literal backs the
    /// global directly; anything else (a non-literal expression, or a string
    /// literal, which needs a separate backing buffer rather than a scalar
    /// `GlobalConst`) is lowered exactly like a local's initializer, with the
    /// resulting store appended to a synthesized `sclc.init` function that
    /// collects every such deferred initializer in declaration order.
    fn lower_global_var(&mut self, v: &sclc_ast::stmt::VarDeclStmt) -> Result<(), LowerError> {
        let ty = ir_type(&v.ty);
        match &v.init {
            None => {
                let slot = self.builder.global_var(&v.name.to_string(), ty, None);
                self.globals.insert(v.name, Global::Var(slot, ty));
            }
            Some(Expr::Literal(l)) if !matches!(l.value, LiteralValue::Str(_)) => {
                let init = match &l.value {
                    LiteralValue::Bool(b) => crate::ir_builder::GlobalConst::Bool(*b),
                    LiteralValue::Int(i) => crate::ir_builder::GlobalConst::Int(*i as i64),
                    LiteralValue::Double(d) => crate::ir_builder::GlobalConst::Float(*d),
                    LiteralValue::Str(_) => unreachable!("excluded by the guard above"),
                };
                let slot = self.builder.global_var(&v.name.to_string(), ty, Some(init));
                self.globals.insert(v.name, Global::Var(slot, ty));
            }
            Some(init_expr) => {
                let slot = self.builder.global_var(&v.name.to_string(), ty, None);
                self.globals.insert(v.name, Global::Var(slot, ty));
                self.ensure_init_block();
                let value = self.lower_expr(init_expr, false)?;
                self.builder.store(value, slot);
            }
        }
        Ok(())
    }

    /// Creates the module's implicit init sequence on first use and restores
    /// it as the insertion point (a regular function lowered between two
    /// deferred global initializers leaves the builder's cursor elsewhere).
    fn ensure_init_block(&mut self) -> B::Block {
        if let Some(block) = self.init_block {
            self.builder.set_insertion_point(block);
            return block;
        }
        let func = self.builder.declare_function("sclc.init", &[], NamedType::Void);
        let block = self.builder.append_block(func, "init");
        self.builder.set_insertion_point(block);
        self.init_function = Some(func);
        self.init_block = Some(block);
        block
    }

    #[tracing::instrument(skip(self, f), fields(name = %f.name))]
    fn lower_function(&mut self, f: &sclc_ast::stmt::FuncDeclStmt) -> Result<(), LowerError> {
        let param_tys: Vec<NamedType> = f.params.iter().map(|p| ir_type(&p.ty)).collect();
        let ret_ty = ir_type(&f.return_ty);

        let func = self.builder.declare_function(&f.name.to_string(), &param_tys, ret_ty);
        self.globals.insert(f.name, Global::Function(func));

        let Some(body) = &f.body else {
            return Ok(());
        };

        self.current_function = Some(func);
        let entry = self.builder.append_block(func, "entry");
        let return_block = self.builder.append_block(func, "return");
        self.builder.set_insertion_point(entry);

        self.return_ty = ret_ty;
        self.return_block = Some(return_block);
        self.return_slot = if ret_ty.is_void() { None } else { Some(self.builder.alloca(ret_ty, 1)) };

        let param_vals = self.builder.function_params(func);
        for (param, value) in f.params.iter().zip(param_vals) {
            self.arguments.insert(param.name, value);
        }

        self.lower_block_stmts(&body.stmts)?;
        self.builder.br(return_block);

        self.builder.set_insertion_point(return_block);
        match self.return_slot {
            Some(slot) => {
                let value = self.builder.load(ret_ty, slot);
                self.builder.ret(value);
            }
            None => self.builder.ret_void(),
        }

        self.localvars.clear();
        self.arguments.clear();
        self.loop_stack.clear();
        self.current_function = None;
        self.return_slot = None;
        self.return_block = None;
        Ok(())
    }

    fn lower_block_stmts(&mut self, stmts: &[Stmt]) -> Result<(), LowerError> {
        for stmt in stmts {
            self.lower_stmt(stmt)?;
        }
        Ok(())
    }

    fn lower_stmt(&mut self, stmt: &Stmt) -> Result<(), LowerError> {
        match stmt {
            Stmt::Block(b) => self.lower_block_stmts(&b.stmts),
            Stmt::Expression(e) => {
                self.lower_expr(&e.expr, false)?;
                Ok(())
            }
            Stmt::FuncDecl(_) => Err(LowerError::Unreachable("nested function declaration survived parsing".into())),
            Stmt::VarDecl(v) => self.lower_local_var(v),
            Stmt::Return(r) => self.lower_return(r),
            Stmt::If(i) => self.lower_if(i),
            Stmt::While(w) => self.lower_while(w),
            Stmt::For(f) => self.lower_for(f),
            Stmt::Break(_) => self.lower_break(),
            Stmt::Continue(_) => self.lower_continue(),
        }
    }

    fn lower_local_var(&mut self, v: &sclc_ast::stmt::VarDeclStmt) -> Result<(), LowerError> {
        let ty = ir_type(&v.ty);
        let slot = self.builder.alloca(ty, 1);
        if let Some(init) = &v.init {
            let value = self.lower_expr(init, false)?;
            self.builder.store(value, slot);
        }
        self.localvars.insert(v.name, slot);
        Ok(())
    }

    fn lower_return(&mut self, r: &sclc_ast::stmt::ReturnStmt) -> Result<(), LowerError> {
        if let Some(value_expr) = &r.value {
            let value = self.lower_expr(value_expr, false)?;
            let slot = self.return_slot.expect("non-void function missing its return slot");
            self.builder.store(value, slot);
        }
        self.builder.br(self.return_block.expect("return statement outside a function"));
        self.open_dead_block("after_return");
        Ok(())
    }

    fn lower_if(&mut self, i: &sclc_ast::stmt::IfStmt) -> Result<(), LowerError> {
        let func = self.current_function();
        let cond = self.lower_expr(&i.cond, false)?;
        let then_b = self.builder.append_block(func, "if.then");
        let exit_b = self.builder.append_block(func, "if.exit");
        let else_b = if i.else_branch.is_some() { self.builder.append_block(func, "if.else") } else { exit_b };

        self.builder.cond_br(cond, then_b, else_b);

        self.builder.set_insertion_point(then_b);
        self.lower_stmt(&i.then_branch)?;
        self.builder.br(exit_b);

        if let Some(else_stmt) = &i.else_branch {
            self.builder.set_insertion_point(else_b);
            self.lower_stmt(else_stmt)?;
            self.builder.br(exit_b);
        }

        self.builder.set_insertion_point(exit_b);
        Ok(())
    }

    fn lower_while(&mut self, w: &sclc_ast::stmt::WhileStmt) -> Result<(), LowerError> {
        let func = self.current_function();
        let cond_b = self.builder.append_block(func, "while.cond");
        let body_b = self.builder.append_block(func, "while.body");
        let exit_b = self.builder.append_block(func, "while.exit");

        self.builder.br(cond_b);
        self.builder.set_insertion_point(cond_b);
        let cond = self.lower_expr(&w.cond, false)?;
        self.builder.cond_br(cond, body_b, exit_b);

        self.loop_stack.push(LoopTargets { continue_target: cond_b, break_target: exit_b });
        self.builder.set_insertion_point(body_b);
        self.lower_stmt(&w.body)?;
        self.builder.br(cond_b);
        self.loop_stack.pop();

        self.builder.set_insertion_point(exit_b);
        Ok(())
    }

    fn lower_for(&mut self, f: &sclc_ast::stmt::ForStmt) -> Result<(), LowerError> {
        if let Some(init) = &f.init {
            match init.as_ref() {
                ForInit::VarDecl(v) => self.lower_local_var(v)?,
                ForInit::Expr(e) => {
                    self.lower_expr(&e.expr, false)?;
                }
            }
        }

        let func = self.current_function();
        let cond_b = self.builder.append_block(func, "for.cond");
        let body_b = self.builder.append_block(func, "for.body");
        let exit_b = self.builder.append_block(func, "for.exit");

        self.builder.br(cond_b);
        self.builder.set_insertion_point(cond_b);
        let cond = match &f.cond {
            Some(c) => self.lower_expr(c, false)?,
            None => self.builder.const_bool(true),
        };
        self.builder.cond_br(cond, body_b, exit_b);

        self.loop_stack.push(LoopTargets { continue_target: cond_b, break_target: exit_b });
        self.builder.set_insertion_point(body_b);
        self.lower_stmt(&f.body)?;
        if let Some(inc) = &f.increment {
            self.lower_expr(inc, false)?;
        }
        self.builder.br(cond_b);
        self.loop_stack.pop();

        self.builder.set_insertion_point(exit_b);
        Ok(())
    }

    fn lower_break(&mut self) -> Result<(), LowerError> {
        let target = self.loop_stack.last().expect("`break` outside a loop survived parsing").break_target;
        self.builder.br(target);
        self.open_dead_block("after_break");
        Ok(())
    }

    fn lower_continue(&mut self) -> Result<(), LowerError> {
        let target = self.loop_stack.last().expect("`continue` outside a loop survived parsing").continue_target;
        self.builder.br(target);
        self.open_dead_block("after_continue");
        Ok(())
    }

    /// `spec.md` §4.3/§9's dead-block trick: a fresh, unreachable block so
    /// any statements textually following a terminator can still be
    /// lowered without a second terminator landing on an already-closed
    /// block. Generalized here to `return` as well as `break`/`continue` —
    /// the source only names the latter two, but the same hazard exists
    /// for dead code after a `return` (see `DESIGN.md`).
    fn open_dead_block(&mut self, label: &str) {
        let func = self.current_function();
        let dead = self.builder.append_block(func, label);
        self.builder.set_insertion_point(dead);
    }

    fn current_function(&self) -> B::Function {
        self.current_function.expect("statement lowered outside any function")
    }

    fn lower_expr(&mut self, expr: &Expr, lvalue: bool) -> Result<B::Value, LowerError> {
        match expr {
            Expr::Literal(l) => self.lower_literal(l),
            Expr::Identifier(id) => {
                if lvalue {
                    self.lower_identifier_lvalue(id)
                } else {
                    self.lower_identifier_rvalue(id)
                }
            }
            Expr::Unary(u) => self.lower_unary(u),
            Expr::Binary(b) => self.lower_binary(b),
            Expr::Group(g) => self.lower_expr(&g.inner, lvalue),
            Expr::Assign(a) => self.lower_assign(a),
            Expr::Call(c) => self.lower_call(c),
        }
    }

    fn lower_literal(&mut self, l: &sclc_ast::expr::LiteralExpr) -> Result<B::Value, LowerError> {
        Ok(match &l.value {
            LiteralValue::Bool(b) => self.builder.const_bool(*b),
            LiteralValue::Int(i) => self.builder.const_int(ir_type(&l.ty), *i as i64),
            LiteralValue::Double(d) => self.builder.const_float(ir_type(&l.ty), *d),
            LiteralValue::Str(s) => {
                let mut bytes = s.as_bytes().to_vec();
                bytes.push(0);
                let name = format!("__str.{}", self.next_string_id);
                self.next_string_id += 1;
                self.builder.global_string(&name, &bytes)
            }
        })
    }

    fn lower_identifier_rvalue(&mut self, ident: &IdentifierExpr) -> Result<B::Value, LowerError> {
        if let Some(&slot) = self.localvars.get(&ident.name) {
            return Ok(self.builder.load(ir_type(&ident.ty), slot));
        }
        if let Some(binding) = self.globals.get(&ident.name).copied() {
            return Ok(match binding {
                Global::Var(slot, ty) => self.builder.load(ty, slot),
                Global::Function(f) => self.builder.function_ptr(f),
            });
        }
        if let Some(&value) = self.arguments.get(&ident.name) {
            return Ok(value);
        }
        Err(LowerError::UnresolvedIdentifier(ident.name.to_string()))
    }

    fn lower_identifier_lvalue(&mut self, ident: &IdentifierExpr) -> Result<B::Value, LowerError> {
        if let Some(&slot) = self.localvars.get(&ident.name) {
            return Ok(slot);
        }
        if let Some(Global::Var(slot, _)) = self.globals.get(&ident.name).copied() {
            return Ok(slot);
        }
        if self.arguments.contains_key(&ident.name) {
            return Err(LowerError::Unreachable(format!("argument `{}` is not assignable", ident.name)));
        }
        Err(LowerError::UnresolvedIdentifier(ident.name.to_string()))
    }

    fn lower_unary(&mut self, u: &sclc_ast::expr::UnaryExpr) -> Result<B::Value, LowerError> {
        let operand_ty = u.operand.ty().clone();
        let operand = self.lower_expr(&u.operand, false)?;
        match u.op {
            UnaryOp::Not => Ok(self.builder.not(operand)),
            UnaryOp::Neg => {
                if operand_ty.is_pointer_like() {
                    return Err(LowerError::NegatePointer);
                }
                let ty = ir_type(&operand_ty);
                let zero = if operand_ty.is_float() { self.builder.const_float(ty, 0.0) } else { self.builder.const_int(ty, 0) };
                Ok(self.builder.sub(ty, zero, operand))
            }
        }
    }

    fn lower_binary(&mut self, b: &sclc_ast::expr::BinaryExpr) -> Result<B::Value, LowerError> {
        let lhs_ty = b.lhs.ty().clone();
        let lhs = self.lower_expr(&b.lhs, false)?;
        let rhs = self.lower_expr(&b.rhs, false)?;
        let ty = ir_type(&lhs_ty);

        Ok(match b.op {
            BinaryOp::Add => self.builder.add(ty, lhs, rhs),
            BinaryOp::Sub => self.builder.sub(ty, lhs, rhs),
            BinaryOp::Mul => self.builder.mul(ty, lhs, rhs),
            BinaryOp::Div if lhs_ty.is_float() => self.builder.fdiv(lhs, rhs),
            BinaryOp::Div if lhs_ty.is_signed() => self.builder.sdiv(lhs, rhs),
            BinaryOp::Div => self.builder.udiv(lhs, rhs),
            BinaryOp::Rem if lhs_ty.is_float() => self.builder.frem(lhs, rhs),
            BinaryOp::Rem if lhs_ty.is_signed() => self.builder.srem(lhs, rhs),
            BinaryOp::Rem => self.builder.urem(lhs, rhs),
            BinaryOp::And => self.builder.and(lhs, rhs),
            BinaryOp::Or => self.builder.or(lhs, rhs),
            cmp if lhs_ty.is_float() => self.builder.fcmp(float_predicate(cmp), lhs, rhs),
            cmp => self.builder.icmp(int_predicate(cmp, lhs_ty.is_signed()), lhs, rhs),
        })
    }

    fn lower_assign(&mut self, a: &sclc_ast::expr::AssignExpr) -> Result<B::Value, LowerError> {
        let value = self.lower_expr(&a.value, false)?;
        let slot = self.lower_identifier_lvalue(&a.target)?;
        self.builder.store(value, slot);
        Ok(value)
    }

    fn lower_call(&mut self, c: &sclc_ast::expr::CallExpr) -> Result<B::Value, LowerError> {
        let args: Vec<B::Value> = c.args.iter().map(|a| self.lower_expr(a, false)).collect::<Result<_, _>>()?;

        if let Expr::Identifier(id) = c.callee.as_ref() {
            if let Some(Global::Function(f)) = self.globals.get(&id.name).copied() {
                return Ok(self.builder.call(f, &args));
            }
            let known_elsewhere = self.localvars.contains_key(&id.name) || self.arguments.contains_key(&id.name) || self.globals.contains_key(&id.name);
            if !known_elsewhere {
                return Err(LowerError::UnresolvedCall(id.name.to_string()));
            }
        }

        let param_tys: Vec<NamedType> = match c.callee.ty() {
            Type::FunctionReference(_, params) => params.iter().map(ir_type).collect(),
            other => return Err(LowerError::Unreachable(format!("call target has non-function type `{other}`"))),
        };
        let ret_ty = ir_type(&c.ty);
        let callee = self.lower_expr(&c.callee, false)?;
        Ok(self.builder.call_indirect(ret_ty, &param_tys, callee, &args))
    }
}

fn int_predicate(op: BinaryOp, signed: bool) -> IntPredicate {
    match (op, signed) {
        (BinaryOp::Eq, _) => IntPredicate::Eq,
        (BinaryOp::Ne, _) => IntPredicate::Ne,
        (BinaryOp::Lt, true) => IntPredicate::Slt,
        (BinaryOp::Lt, false) => IntPredicate::Ult,
        (BinaryOp::Gt, true) => IntPredicate::Sgt,
        (BinaryOp::Gt, false) => IntPredicate::Ugt,
        (BinaryOp::Le, true) => IntPredicate::Sle,
        (BinaryOp::Le, false) => IntPredicate::Ule,
        (BinaryOp::Ge, true) => IntPredicate::Sge,
        (BinaryOp::Ge, false) => IntPredicate::Uge,
        (other, _) => unreachable!("{other:?} is not a comparison operator"),
    }
}

fn float_predicate(op: BinaryOp) -> FloatPredicate {
    match op {
        BinaryOp::Eq => FloatPredicate::Oeq,
        BinaryOp::Ne => FloatPredicate::One,
        BinaryOp::Lt => FloatPredicate::Olt,
        BinaryOp::Gt => FloatPredicate::Ogt,
        BinaryOp::Le => FloatPredicate::Ole,
        BinaryOp::Ge => FloatPredicate::Oge,
        other => unreachable!("{other:?} is not a comparison operator"),
    }
}

trait NamedTypeExt {
    fn is_void(self) -> bool;
}

impl NamedTypeExt for NamedType {
    fn is_void(self) -> bool {
        matches!(self, NamedType::Void)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::refir::RefIrBuilder;

    fn lower_source(src: &str) -> crate::refir::Module {
        let program = sclc_parser::parse(src).expect("program should parse");
        Lowerer::new(RefIrBuilder::new()).lower_program("test", &program).expect("program should lower").finish()
    }

    #[test]
    fn s1_nested_while_loops_lower() {
        let module = lower_source(
            "func main() { var a : i32 = 0; var b : i32 = 0; while (a < 10) { while (b < 10) { b = b + 1; } a = a + 1; } }",
        );
        assert_eq!(module.functions.len(), 1);
        assert!(module.verify_single_terminator_per_block());
        // entry + return + (cond/body/exit) * 2 nested whiles
        assert!(module.functions[0].blocks.len() >= 8);
    }

    #[test]
    fn s2_early_return_joins_single_ret() {
        let module = lower_source("func f(x : i32) -> i32 { if (x < 0) { return 0 - x; } return x; }");
        assert!(module.verify_single_terminator_per_block());
        // exactly one `return` block produces the function's single `ret`.
        let func = &module.functions[0];
        assert_eq!(func.name, "f");
    }

    #[test]
    fn s3_external_declaration_has_no_entry_block() {
        let module = lower_source("func puts(s : u8[]) -> i32;");
        let func = &module.functions[0];
        assert!(func.external);
        assert!(func.blocks.is_empty());
        assert_eq!(func.params, vec![NamedType::Ptr]);
        assert_eq!(func.ret, NamedType::I32);
    }

    #[test]
    fn s4_break_targets_inner_loop() {
        let module = lower_source("func main() { while (true) { while (true) { break; } } }");
        assert!(module.verify_single_terminator_per_block());
    }

    #[test]
    fn s5_undefined_identifier_already_rejected_by_parser() {
        assert!(sclc_parser::parse("func main() { a = 1; }").is_err());
    }

    #[test]
    fn recursive_call_lowers_through_the_function_table() {
        let module = lower_source("func fac(n : i32) -> i32 { if (n < 2) { return 1; } return n * fac(n - 1); }");
        assert!(module.verify_single_terminator_per_block());
    }

    #[test]
    fn unary_negate_on_pointer_fails() {
        let program = sclc_parser::parse("func f(p : i32[]) { var x : i32[] = p; }").unwrap();
        // Neg on a pointer isn't reachable through valid syntax directly
        // (`- p` where `p : i32[]`), so build the AST node explicitly.
        let Stmt::FuncDecl(fd) = &program[0] else { panic!() };
        let body = fd.body.as_ref().unwrap();
        let Stmt::VarDecl(v) = &body.stmts[0] else { panic!() };
        let ptr_ty = v.ty.clone();
        let mut lowerer = Lowerer::new(RefIrBuilder::new());
        let unary = sclc_ast::expr::UnaryExpr::new(
            sclc_span::NodeId(9999),
            sclc_span::Span::dummy(),
            UnaryOp::Neg,
            Box::new(Expr::Literal(sclc_ast::expr::LiteralExpr::new(
                sclc_span::NodeId(10000),
                sclc_span::Span::dummy(),
                LiteralValue::Int(0),
                ptr_ty,
            ))),
            Type::i32(),
        );
        let err = lowerer.lower_unary(&unary).unwrap_err();
        assert!(matches!(err, LowerError::NegatePointer));
    }

    #[test]
    fn string_literal_backs_a_null_terminated_global() {
        let module = lower_source("func main() { var s : u8[] = \"hi\"; }");
        assert_eq!(module.strings.len(), 1);
        assert_eq!(module.strings[0].bytes, vec![b'h', b'i', 0]);
    }

    #[test]
    fn non_constant_global_initializer_lowers_into_an_implicit_init_function() {
        let module = lower_source("var base : i32 = 1; var total : i32 = base + 1;");
        let init = module.functions.iter().find(|f| f.name == "sclc.init").expect("init function should exist");
        assert!(!init.blocks.is_empty());
        assert!(module.verify_single_terminator_per_block());
    }

    #[test]
    fn string_global_initializer_also_defers_through_the_init_function() {
        let module = lower_source("var greeting : u8[] = \"hi\";");
        assert_eq!(module.strings.len(), 1);
        assert!(module.functions.iter().any(|f| f.name == "sclc.init"));
    }
}
