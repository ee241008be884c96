use indexmap::IndexMap;
use sclc_ast::Type;
use sclc_span::Symbol;

/// The kind of statement enclosing the parser's current position, used for
/// placement checks (`spec.md` §4.2): function declarations only at global
/// scope, statements only inside a function, `break`/`continue` only inside
/// a loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopeKind {
    Function,
    Loop,
    Block,
}

#[derive(Debug, Default)]
pub struct ScopeStack {
    kinds: Vec<ScopeKind>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: ScopeKind) {
        self.kinds.push(kind);
    }

    pub fn pop(&mut self) {
        self.kinds.pop();
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn in_function(&self) -> bool {
        self.kinds.iter().any(|k| *k == ScopeKind::Function)
    }

    pub fn in_loop(&self) -> bool {
        self.kinds.iter().any(|k| *k == ScopeKind::Loop)
    }
}

/// A vector of scope dictionaries (`spec.md` §4.2). `IndexMap` rather than
/// `HashMap` so that whatever iterates a scope (the header emitter, a
/// debug dump) sees declaration order rather than hash order.
#[derive(Debug, Default)]
pub struct SymbolTable {
    scopes: Vec<IndexMap<Symbol, Type>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self { scopes: vec![IndexMap::new()] }
    }

    pub fn push_scope(&mut self) {
        self.scopes.push(IndexMap::new());
    }

    pub fn pop_scope(&mut self) {
        self.scopes.pop();
        debug_assert!(!self.scopes.is_empty(), "popped the global scope");
    }

    /// Scans every currently visible scope, innermost first.
    pub fn exists(&self, name: Symbol) -> bool {
        self.scopes.iter().any(|s| s.contains_key(&name))
    }

    /// Returns the nearest enclosing binding, inner scopes shadowing outer.
    pub fn get_type(&self, name: Symbol) -> Option<&Type> {
        self.scopes.iter().rev().find_map(|s| s.get(&name))
    }

    pub fn insert(&mut self, name: Symbol, ty: Type) {
        self.scopes.last_mut().expect("at least the global scope is always present").insert(name, ty);
    }

    pub fn is_global_scope(&self) -> bool {
        self.scopes.len() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_scope_shadows_outer() {
        let mut table = SymbolTable::new();
        table.insert(Symbol::intern("x"), Type::i32());
        table.push_scope();
        table.insert(Symbol::intern("x"), Type::bool());
        assert_eq!(table.get_type(Symbol::intern("x")), Some(&Type::bool()));
        table.pop_scope();
        assert_eq!(table.get_type(Symbol::intern("x")), Some(&Type::i32()));
    }

    #[test]
    fn exists_scans_all_visible_scopes() {
        let mut table = SymbolTable::new();
        table.insert(Symbol::intern("x"), Type::i32());
        table.push_scope();
        assert!(table.exists(Symbol::intern("x")));
        assert!(!table.exists(Symbol::intern("y")));
    }

    #[test]
    fn scope_stack_tracks_placement() {
        let mut scopes = ScopeStack::new();
        assert!(scopes.is_empty());
        scopes.push(ScopeKind::Function);
        assert!(scopes.in_function());
        scopes.push(ScopeKind::Loop);
        assert!(scopes.in_loop());
        scopes.pop();
        assert!(!scopes.in_loop());
        assert!(scopes.in_function());
    }
}
