//! The abstract backend contract the lowering pass is generic over
//! (`spec.md` §4.3). Deliberately a trait rather than a concrete LLVM
//! binding: any backend implementing it — a real LLVM wrapper, or the
//! in-memory [`crate::refir::RefIrBuilder`] shipped here — can drive the
//! same [`crate::lower::Lowerer`].

use sclc_ast::NamedType;

/// Integer comparison predicates (`spec.md` §4.3). Signed and unsigned are
/// distinct ops even at equal bit width because `slt`/`ult` disagree on the
/// high bit's meaning; `add`/`sub`/`mul` don't need this split since
/// two's-complement arithmetic gives identical bit patterns either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntPredicate {
    Eq,
    Ne,
    Slt,
    Sgt,
    Sle,
    Sge,
    Ult,
    Ugt,
    Ule,
    Uge,
}

/// Ordered float comparison predicates (`spec.md` §4.3).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FloatPredicate {
    Oeq,
    One,
    Olt,
    Ogt,
    Ole,
    Oge,
}

/// The capabilities `spec.md` §4.3 lists as the lowering pass's only
/// dependency on a backend. Every pointer and function-reference source
/// type has already collapsed to `NamedType::Ptr` by the time a `Type`
/// reaches this trait (see [`crate::lower::ir_type`]) — the trait's type
/// vocabulary is exactly the `Named` set plus that one opaque pointer.
pub trait IrBuilder {
    type Value: Copy + Eq + std::fmt::Debug;
    type Block: Copy + Eq + std::fmt::Debug;
    type Function: Copy + Eq + std::fmt::Debug;

    fn set_module_name(&mut self, name: &str);

    /// Declares a function (external linkage, fixed argument types,
    /// non-variadic) inside the module and registers it in the backend's
    /// own name table so a later [`IrBuilder::lookup_function`] finds it.
    fn declare_function(&mut self, name: &str, params: &[NamedType], ret: NamedType) -> Self::Function;
    fn lookup_function(&self, name: &str) -> Option<Self::Function>;
    /// The function's parameters as values, in declaration order (`spec.md`
    /// §4.3 step 5: "parameters are values, not slots"). Called once the
    /// entry block is current, so a backend that represents a parameter as
    /// an ordinary instruction has somewhere to put it.
    fn function_params(&mut self, func: Self::Function) -> Vec<Self::Value>;
    /// An opaque pointer value denoting the function itself, for the
    /// indirect-call path (`spec.md` §4.3: "otherwise lower the callee as a
    /// normal value, which will be a function pointer").
    fn function_ptr(&mut self, func: Self::Function) -> Self::Value;

    fn append_block(&mut self, func: Self::Function, label: &str) -> Self::Block;
    fn current_block(&self) -> Self::Block;
    fn set_insertion_point(&mut self, block: Self::Block);

    fn const_int(&mut self, ty: NamedType, value: i64) -> Self::Value;
    fn const_float(&mut self, ty: NamedType, value: f64) -> Self::Value;
    fn const_bool(&mut self, value: bool) -> Self::Value;
    fn alloca(&mut self, ty: NamedType, count: u32) -> Self::Value;
    fn load(&mut self, ty: NamedType, ptr: Self::Value) -> Self::Value;
    fn store(&mut self, value: Self::Value, ptr: Self::Value);

    fn add(&mut self, ty: NamedType, lhs: Self::Value, rhs: Self::Value) -> Self::Value;
    fn sub(&mut self, ty: NamedType, lhs: Self::Value, rhs: Self::Value) -> Self::Value;
    fn mul(&mut self, ty: NamedType, lhs: Self::Value, rhs: Self::Value) -> Self::Value;

    fn sdiv(&mut self, lhs: Self::Value, rhs: Self::Value) -> Self::Value;
    fn udiv(&mut self, lhs: Self::Value, rhs: Self::Value) -> Self::Value;
    fn fdiv(&mut self, lhs: Self::Value, rhs: Self::Value) -> Self::Value;
    fn srem(&mut self, lhs: Self::Value, rhs: Self::Value) -> Self::Value;
    fn urem(&mut self, lhs: Self::Value, rhs: Self::Value) -> Self::Value;
    fn frem(&mut self, lhs: Self::Value, rhs: Self::Value) -> Self::Value;

    fn icmp(&mut self, pred: IntPredicate, lhs: Self::Value, rhs: Self::Value) -> Self::Value;
    fn fcmp(&mut self, pred: FloatPredicate, lhs: Self::Value, rhs: Self::Value) -> Self::Value;

    /// Bitwise on `i1`, per `spec.md` §4.3's resolved open question (§9):
    /// "Preserve bitwise unless the user specifies otherwise."
    fn and(&mut self, lhs: Self::Value, rhs: Self::Value) -> Self::Value;
    fn or(&mut self, lhs: Self::Value, rhs: Self::Value) -> Self::Value;
    fn not(&mut self, operand: Self::Value) -> Self::Value;

    fn br(&mut self, target: Self::Block);
    fn cond_br(&mut self, cond: Self::Value, then_block: Self::Block, else_block: Self::Block);

    fn call(&mut self, func: Self::Function, args: &[Self::Value]) -> Self::Value;
    fn call_indirect(&mut self, ret: NamedType, params: &[NamedType], callee: Self::Value, args: &[Self::Value]) -> Self::Value;

    fn ret(&mut self, value: Self::Value);
    fn ret_void(&mut self);

    /// Materializes a global constant byte buffer backing a string literal
    /// (`spec.md` §4.3) and returns a pointer to it.
    fn global_string(&mut self, name: &str, bytes: &[u8]) -> Self::Value;

    /// A module-level scalar global, ambient plumbing `spec.md` §4.3 doesn't
    /// enumerate (global `var` lowering is an explicit open question, §9).
    /// `init` is `None` both for an uninitialized global and for one whose
    /// initializer isn't a compile-time constant — the latter is instead
    /// assigned by a store appended to the module's implicit init sequence
    /// (see `DESIGN.md`).
    fn global_var(&mut self, name: &str, ty: NamedType, init: Option<GlobalConst>) -> Self::Value;
}

/// A compile-time-constant initializer a global variable can be backed with
/// directly, without going through the implicit init sequence (see
/// `DESIGN.md`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GlobalConst {
    Int(i64),
    Float(f64),
    Bool(bool),
}
