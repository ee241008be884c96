use std::cell::RefCell;

use sclc_span::{NodeId, NodeIdGen};

/// Hands out `NodeId`s to the parser as it builds the tree. `RefCell` keeps
/// it usable through a shared `&NodeBuilder` so every `parse_*` method can
/// take `&self` instead of threading `&mut` through the whole recursive
/// descent.
#[derive(Debug, Default)]
pub struct NodeBuilder {
    inner: RefCell<NodeIdGen>,
}

impl NodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> NodeId {
        self.inner.borrow_mut().next()
    }
}
