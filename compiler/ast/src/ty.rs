use std::fmt;

use serde::{Deserialize, Serialize};

/// A scalar named type: `void`, `bool`, the fixed-width integers, the two
/// floating-point widths, or the opaque `ptr` produced by collapsing every
/// pointer-flavored type at lowering (`spec.md` §4.3).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamedType {
    Void,
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Ptr,
}

impl NamedType {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "void" => NamedType::Void,
            "bool" => NamedType::Bool,
            "i8" => NamedType::I8,
            "i16" => NamedType::I16,
            "i32" => NamedType::I32,
            "i64" => NamedType::I64,
            "u8" => NamedType::U8,
            "u16" => NamedType::U16,
            "u32" => NamedType::U32,
            "u64" => NamedType::U64,
            "f32" => NamedType::F32,
            "f64" => NamedType::F64,
            "ptr" => NamedType::Ptr,
            _ => return None,
        })
    }

    pub fn bit_width(self) -> Option<u32> {
        match self {
            NamedType::I8 | NamedType::U8 => Some(8),
            NamedType::I16 | NamedType::U16 => Some(16),
            NamedType::I32 | NamedType::U32 => Some(32),
            NamedType::I64 | NamedType::U64 => Some(64),
            NamedType::F32 => Some(32),
            NamedType::F64 => Some(64),
            NamedType::Bool => Some(1),
            NamedType::Void | NamedType::Ptr => None,
        }
    }

    pub fn is_signed(self) -> bool {
        matches!(self, NamedType::I8 | NamedType::I16 | NamedType::I32 | NamedType::I64)
    }

    pub fn is_integer(self) -> bool {
        matches!(
            self,
            NamedType::I8
                | NamedType::I16
                | NamedType::I32
                | NamedType::I64
                | NamedType::U8
                | NamedType::U16
                | NamedType::U32
                | NamedType::U64
        )
    }

    pub fn is_float(self) -> bool {
        matches!(self, NamedType::F32 | NamedType::F64)
    }
}

impl fmt::Display for NamedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NamedType::Void => "void",
            NamedType::Bool => "bool",
            NamedType::I8 => "i8",
            NamedType::I16 => "i16",
            NamedType::I32 => "i32",
            NamedType::I64 => "i64",
            NamedType::U8 => "u8",
            NamedType::U16 => "u16",
            NamedType::U32 => "u32",
            NamedType::U64 => "u64",
            NamedType::F32 => "f32",
            NamedType::F64 => "f64",
            NamedType::Ptr => "ptr",
        };
        write!(f, "{s}")
    }
}

/// A resolved type, as produced by the parser's type grammar
/// (`spec.md` §3: named scalar, `T[]` indexed pointer, `T*` reference
/// pointer, or `func(t1,t2,...->r)` function reference).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    Named(NamedType),
    IndexedPointer(Box<Type>),
    ReferencePointer(Box<Type>),
    FunctionReference(Box<Type>, Vec<Type>),
}

impl Type {
    pub fn void() -> Self {
        Type::Named(NamedType::Void)
    }

    pub fn bool() -> Self {
        Type::Named(NamedType::Bool)
    }

    pub fn i32() -> Self {
        Type::Named(NamedType::I32)
    }

    pub fn f64() -> Self {
        Type::Named(NamedType::F64)
    }

    /// `true` for either pointer flavor or a function reference; these three
    /// all collapse to the single opaque IR pointer type at lowering.
    pub fn is_pointer_like(&self) -> bool {
        matches!(self, Type::IndexedPointer(_) | Type::ReferencePointer(_) | Type::FunctionReference(..))
            || matches!(self, Type::Named(NamedType::Ptr))
    }

    pub fn is_signed(&self) -> bool {
        matches!(self, Type::Named(n) if n.is_signed())
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Type::Named(n) if n.is_integer())
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Type::Named(n) if n.is_float())
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Type::Named(NamedType::Void))
    }

    /// Structural equality ignoring any span/id metadata — there isn't any
    /// on `Type` itself, so this is just `==`, kept for call sites that read
    /// more clearly naming the intent (matches the teacher's `eq_flat`).
    pub fn eq_flat(&self, other: &Type) -> bool {
        self == other
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Named(n) => write!(f, "{n}"),
            Type::IndexedPointer(elem) => write!(f, "{elem}[]"),
            Type::ReferencePointer(elem) => write!(f, "{elem}*"),
            Type::FunctionReference(ret, params) => {
                write!(f, "func(")?;
                for (i, p) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{p}")?;
                }
                write!(f, "->{ret})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_strings() {
        assert_eq!(Type::i32().to_string(), "i32");
        assert_eq!(Type::IndexedPointer(Box::new(Type::i32())).to_string(), "i32[]");
        assert_eq!(Type::ReferencePointer(Box::new(Type::bool())).to_string(), "bool*");
        let f = Type::FunctionReference(Box::new(Type::void()), vec![Type::i32(), Type::f64()]);
        assert_eq!(f.to_string(), "func(i32,f64->void)");
    }

    #[test]
    fn pointer_like_collapses() {
        assert!(Type::IndexedPointer(Box::new(Type::i32())).is_pointer_like());
        assert!(Type::ReferencePointer(Box::new(Type::i32())).is_pointer_like());
        assert!(Type::FunctionReference(Box::new(Type::void()), vec![]).is_pointer_like());
        assert!(!Type::i32().is_pointer_like());
    }
}
