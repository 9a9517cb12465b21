use crate::config::{GenealogyConfig, RemovalPolicy};
use crate::error::{GenealogyError, Result};
use crate::lineage::node::Node;
use crate::types::{Entity, GraphStatistics};
use std::collections::{BTreeMap, VecDeque};
use tracing::{debug, warn};

/// Ancestry graph of entities keyed by their identifier.
///
/// An edge `parent -> child` means the child was derived from the parent. The
/// graph owns every node and payload in a single index; adjacency in both
/// directions is kept as identifier sets, and every edge is written and erased
/// through `link`/`unlink` so the two directions always mirror each other.
///
/// The graph does not check for cycles. Callers only add edges consistent with
/// a DAG.
#[derive(Debug, Clone)]
pub struct GenealogyGraph<E: Entity> {
    root_id: E::Id,
    nodes: BTreeMap<E::Id, Node<E>>,
    config: GenealogyConfig,
}

impl<E: Entity> GenealogyGraph<E> {
    /// Create a graph holding only the root node
    pub fn new(root_id: E::Id) -> Self {
        Self::with_config(root_id, GenealogyConfig::default())
    }

    pub fn with_config(root_id: E::Id, config: GenealogyConfig) -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(root_id.clone(), Node::new(root_id.clone()));

        debug!("Created genealogy rooted at {:?} ({:?} removal)", root_id, config.removal);
        Self {
            root_id,
            nodes,
            config,
        }
    }

    pub fn config(&self) -> &GenealogyConfig {
        &self.config
    }

    pub fn get_root_id(&self) -> &E::Id {
        &self.root_id
    }

    pub fn exists(&self, id: &E::Id) -> bool {
        self.nodes.contains_key(id)
    }

    /// Get the number of nodes in the graph
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root cannot be removed
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the number of parent -> child edges in the graph
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|node| node.children.len()).sum()
    }

    pub fn node(&self, id: &E::Id) -> Result<&Node<E>, E::Id> {
        self.nodes
            .get(id)
            .ok_or_else(|| GenealogyError::NotFound(id.clone()))
    }

    fn node_mut(&mut self, id: &E::Id) -> Result<&mut Node<E>, E::Id> {
        self.nodes
            .get_mut(id)
            .ok_or_else(|| GenealogyError::NotFound(id.clone()))
    }

    /// Payload of the node, borrowed for as long as the graph is not mutated
    pub fn get(&self, id: &E::Id) -> Result<&E, E::Id> {
        self.node(id).map(|node| &node.payload)
    }

    pub fn get_mut(&mut self, id: &E::Id) -> Result<&mut E, E::Id> {
        self.node_mut(id).map(|node| &mut node.payload)
    }

    /// Get direct children of a node, in ascending id order
    pub fn get_children(&self, id: &E::Id) -> Result<Vec<E::Id>, E::Id> {
        Ok(self.node(id)?.children.iter().cloned().collect())
    }

    /// Get direct parents of a node, in ascending id order
    pub fn get_parents(&self, id: &E::Id) -> Result<Vec<E::Id>, E::Id> {
        Ok(self.node(id)?.parents.iter().cloned().collect())
    }

    /// Create a node derived from a single parent
    pub fn create(&mut self, id: E::Id, parent_id: &E::Id) -> Result<(), E::Id> {
        self.create_with_parents(id, std::slice::from_ref(parent_id))
    }

    /// Create a node derived from every listed parent.
    ///
    /// The id is checked first, then every parent; nothing is inserted unless
    /// all checks pass.
    pub fn create_with_parents(&mut self, id: E::Id, parent_ids: &[E::Id]) -> Result<(), E::Id> {
        if self.exists(&id) {
            return Err(GenealogyError::AlreadyExists(id));
        }
        if parent_ids.is_empty() {
            return Err(GenealogyError::NoParents(id));
        }
        if let Some(missing) = parent_ids.iter().find(|parent_id| !self.exists(parent_id)) {
            return Err(GenealogyError::NotFound(missing.clone()));
        }

        self.nodes.insert(id.clone(), Node::new(id.clone()));
        for parent_id in parent_ids {
            self.link(parent_id, &id);
        }

        debug!("Created node {:?} with {} parents", id, parent_ids.len());
        Ok(())
    }

    /// Add a parent edge between two existing nodes. Adding an existing edge
    /// again changes nothing.
    pub fn connect(&mut self, child_id: &E::Id, parent_id: &E::Id) -> Result<(), E::Id> {
        if !self.exists(child_id) {
            return Err(GenealogyError::NotFound(child_id.clone()));
        }
        if !self.exists(parent_id) {
            return Err(GenealogyError::NotFound(parent_id.clone()));
        }

        self.link(parent_id, child_id);
        debug!("Connected {:?} -> {:?}", parent_id, child_id);
        Ok(())
    }

    /// Remove a non-root node and every edge touching it.
    ///
    /// Returns the removed ids, the requested one first. Under
    /// [`RemovalPolicy::Cascade`] non-root nodes left without parents follow,
    /// transitively, in breadth-first order.
    pub fn remove(&mut self, id: &E::Id) -> Result<Vec<E::Id>, E::Id> {
        if !self.exists(id) {
            return Err(GenealogyError::NotFound(id.clone()));
        }
        if *id == self.root_id {
            return Err(GenealogyError::RootRemovalForbidden(id.clone()));
        }

        let mut removed = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(id.clone());

        while let Some(current) = queue.pop_front() {
            let Some(node) = self.detach(&current) else {
                continue;
            };

            for child_id in &node.children {
                let orphaned = child_id != &self.root_id
                    && self.nodes.get(child_id).is_some_and(Node::is_parentless);
                if !orphaned {
                    continue;
                }
                match self.config.removal {
                    RemovalPolicy::Cascade => queue.push_back(child_id.clone()),
                    RemovalPolicy::Isolate => {
                        warn!("Node {:?} lost its last parent {:?}", child_id, current);
                    }
                }
            }

            removed.push(node.id);
        }

        debug!("Removed {} nodes starting at {:?}", removed.len(), id);
        Ok(removed)
    }

    /// Unlink a node from all its neighbours and take it out of the index
    fn detach(&mut self, id: &E::Id) -> Option<Node<E>> {
        let (parents, children) = {
            let node = self.nodes.get(id)?;
            (node.parents.clone(), node.children.clone())
        };

        for parent_id in &parents {
            self.unlink(parent_id, id);
        }
        for child_id in &children {
            self.unlink(id, child_id);
        }

        let mut node = self.nodes.remove(id)?;
        // Keep the adjacency the node had so callers can follow its children
        node.parents = parents;
        node.children = children;
        Some(node)
    }

    fn link(&mut self, parent_id: &E::Id, child_id: &E::Id) {
        if let Some(parent) = self.nodes.get_mut(parent_id) {
            parent.children.insert(child_id.clone());
        }
        if let Some(child) = self.nodes.get_mut(child_id) {
            child.parents.insert(parent_id.clone());
        }
    }

    fn unlink(&mut self, parent_id: &E::Id, child_id: &E::Id) {
        if let Some(parent) = self.nodes.get_mut(parent_id) {
            parent.children.remove(child_id);
        }
        if let Some(child) = self.nodes.get_mut(child_id) {
            child.parents.remove(parent_id);
        }
    }

    /// Every identifier in the graph, ascending
    pub fn ids(&self) -> impl Iterator<Item = &E::Id> {
        self.nodes.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&E::Id, &E)> {
        self.nodes.iter().map(|(id, node)| (id, &node.payload))
    }

    /// Get leaf nodes (nodes with no children)
    pub fn leaves(&self) -> Vec<E::Id> {
        self.nodes
            .values()
            .filter(|node| node.is_leaf())
            .map(|node| node.id.clone())
            .collect()
    }

    /// Get non-root nodes without parents, left behind by non-cascading removal
    pub fn orphans(&self) -> Vec<E::Id> {
        self.nodes
            .values()
            .filter(|node| node.is_parentless() && node.id != self.root_id)
            .map(|node| node.id.clone())
            .collect()
    }

    /// Get graph statistics
    pub fn statistics(&self) -> GraphStatistics {
        let total_nodes = self.len();
        let total_edges = self.edge_count();
        let total_degree: usize = self.nodes.values().map(Node::degree).sum();

        let average_degree = if total_nodes > 0 {
            total_degree as f64 / total_nodes as f64
        } else {
            0.0
        };

        GraphStatistics {
            total_nodes,
            total_edges,
            leaf_nodes: self.leaves().len(),
            orphan_nodes: self.orphans().len(),
            average_degree,
        }
    }
}
