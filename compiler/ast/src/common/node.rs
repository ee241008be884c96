use sclc_span::{NodeId, Span};

/// Every AST node carries its own identity and source position rather than
/// looking them up in a side table; recursive-descent construction always
/// knows both by the time a node's constructor runs.
pub trait Node: std::fmt::Debug {
    fn id(&self) -> NodeId;
    fn span(&self) -> Span;
}

/// Implements [`Node`] for a struct with `id: NodeId` and `span: Span` fields.
#[macro_export]
macro_rules! simple_node_impl {
    ($ty:ty) => {
        impl $crate::common::Node for $ty {
            fn id(&self) -> sclc_span::NodeId {
                self.id
            }

            fn span(&self) -> sclc_span::Span {
                self.span
            }
        }
    };
}
