use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Core types shared by the genealogy graph

/// Capability a payload must provide to live inside a genealogy graph.
///
/// The graph builds a payload from its identifier when the node is created and
/// owns it until the node is removed.
pub trait Entity {
    type Id: Ord + Clone + Debug;

    /// Build a fresh payload for the given identifier
    fn from_id(id: &Self::Id) -> Self;

    /// Identifier this payload was built from
    fn id(&self) -> Self::Id;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphStatistics {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub leaf_nodes: usize,
    pub orphan_nodes: usize,
    pub average_degree: f64,
}
