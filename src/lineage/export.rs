use crate::lineage::graph::GenealogyGraph;
use crate::types::Entity;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::BTreeMap;
use tracing::debug;

impl<E: Entity> GenealogyGraph<E> {
    /// Copy the topology into a petgraph `DiGraph` with `parent -> child` edges.
    ///
    /// The result is an owned snapshot; later changes to the genealogy are not
    /// reflected in it. Node weights are the identifiers, and the returned map
    /// resolves an identifier to its `NodeIndex`.
    pub fn to_petgraph(&self) -> (DiGraph<E::Id, ()>, BTreeMap<E::Id, NodeIndex>) {
        let mut graph = DiGraph::with_capacity(self.len(), self.edge_count());
        let mut node_map = BTreeMap::new();

        for id in self.ids() {
            let node_index = graph.add_node(id.clone());
            node_map.insert(id.clone(), node_index);
        }

        for (id, &parent_index) in &node_map {
            let Ok(node) = self.node(id) else {
                continue;
            };
            for child_id in node.children() {
                if let Some(&child_index) = node_map.get(child_id) {
                    graph.add_edge(parent_index, child_index, ());
                }
            }
        }

        debug!(
            "Exported genealogy with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        (graph, node_map)
    }
}
