//! Source positions and interned identifiers shared by every sclc stage.

use std::{
    collections::HashMap,
    fmt,
    sync::Mutex,
};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A 1-based source line plus the byte range within that line the token or
/// node occupies. The line is the unit every diagnostic in `spec.md` §7
/// surfaces to the user; the byte range exists only to let a future
/// diagnostic renderer underline the exact offending text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub line: u32,
    pub col: u32,
    pub len: u32,
}

impl Span {
    pub fn new(line: u32, col: u32, len: u32) -> Self {
        Self { line, col, len }
    }

    /// A span with no useful position, used for synthesized nodes that have
    /// no corresponding source text (e.g. an inserted dead block after a
    /// `break`).
    pub fn dummy() -> Self {
        Self { line: 0, col: 0, len: 0 }
    }

    pub fn merge(self, other: Span) -> Span {
        if self.line != other.line {
            return self;
        }
        let start = self.col.min(other.col);
        let end = (self.col + self.len).max(other.col + other.len);
        Span::new(self.line, start, end - start)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}", self.line)
    }
}

/// Global string interner. The compiler is a single short-lived process
/// (`spec.md` §5: strictly single-threaded, run to completion), so leaking
/// interned strings for a `'static` lifetime is the idiomatic, cheap choice
/// rather than threading an arena lifetime through every AST node.
struct Interner {
    strings: HashMap<&'static str, Symbol>,
    lookup: Vec<&'static str>,
}

impl Interner {
    fn new() -> Self {
        Self { strings: HashMap::new(), lookup: Vec::new() }
    }

    fn intern(&mut self, s: &str) -> Symbol {
        if let Some(sym) = self.strings.get(s) {
            return *sym;
        }
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let sym = Symbol(self.lookup.len() as u32);
        self.lookup.push(leaked);
        self.strings.insert(leaked, sym);
        sym
    }

    fn resolve(&self, sym: Symbol) -> &'static str {
        self.lookup[sym.0 as usize]
    }
}

static INTERNER: Lazy<Mutex<Interner>> = Lazy::new(|| Mutex::new(Interner::new()));

/// An interned identifier. Two `Symbol`s compare equal iff their underlying
/// strings are equal, but the comparison itself is an integer comparison,
/// which is why symbol tables key on `Symbol` rather than `String`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(u32);

impl Symbol {
    pub fn intern(s: &str) -> Self {
        INTERNER.lock().unwrap().intern(s)
    }

    pub fn as_str(self) -> &'static str {
        INTERNER.lock().unwrap().resolve(self)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Symbol::intern(s)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Symbol::intern(&s)
    }
}

/// Per-node identity, allocated one-per-node by [`NodeIdGen`] during parsing.
/// `sclc-ast` stores `span`/`ty` directly as struct fields on each node
/// rather than keying a side table off this id (see `DESIGN.md`'s `sclc-ast`
/// entry) — `NodeId` itself still exists as the thing a future side table
/// (or this crate's own diagnostics, which report by node) would be keyed
/// on, and is what `NodeIdGen` hands out to keep ids unique within a
/// compilation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

/// Hands out fresh, strictly increasing `NodeId`s for one compilation.
#[derive(Debug, Default)]
pub struct NodeIdGen {
    next: u32,
}

impl NodeIdGen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self) -> NodeId {
        let id = NodeId(self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_is_idempotent() {
        let a = Symbol::intern("foo");
        let b = Symbol::intern("foo");
        let c = Symbol::intern("bar");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.as_str(), "foo");
    }

    #[test]
    fn node_ids_increase() {
        let mut gen = NodeIdGen::new();
        let a = gen.next();
        let b = gen.next();
        assert!(b.0 > a.0);
    }
}
