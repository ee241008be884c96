//! The typed AST produced by `sclc-parser`: tokens, resolved types, and the
//! expression/statement tree the lowering pass in `sclc-passes` consumes.
//!
//! Every node carries its own [`sclc_span::NodeId`] and [`sclc_span::Span`]
//! directly rather than through an external side table — a recursive-descent
//! parser always has both in hand by the time it constructs a node, so
//! there's nothing a side table would buy beyond an extra lookup.

pub mod common;
pub mod expr;
pub mod stmt;
mod token;
mod ty;

pub use common::{Node, NodeBuilder};
pub use token::{Token, TokenKind};
pub use ty::{NamedType, Type};
