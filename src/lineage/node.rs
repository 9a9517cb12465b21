use crate::types::Entity;
use std::collections::BTreeSet;

/// One vertex of the genealogy graph.
///
/// The node owns its payload. Adjacency is stored as identifier sets resolved
/// through the graph's index, so neither direction owns the other.
#[derive(Debug, Clone)]
pub struct Node<E: Entity> {
    pub(crate) id: E::Id,
    pub(crate) payload: E,
    pub(crate) children: BTreeSet<E::Id>,
    pub(crate) parents: BTreeSet<E::Id>,
}

impl<E: Entity> Node<E> {
    pub(crate) fn new(id: E::Id) -> Self {
        let payload = E::from_id(&id);
        Self {
            id,
            payload,
            children: BTreeSet::new(),
            parents: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> &E::Id {
        &self.id
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }

    pub fn children(&self) -> &BTreeSet<E::Id> {
        &self.children
    }

    pub fn parents(&self) -> &BTreeSet<E::Id> {
        &self.parents
    }

    /// No outgoing edges
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// No incoming edges
    pub fn is_parentless(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn degree(&self) -> usize {
        self.children.len() + self.parents.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Sample(String);

    impl Entity for Sample {
        type Id = String;

        fn from_id(id: &String) -> Self {
            Sample(id.clone())
        }

        fn id(&self) -> String {
            self.0.clone()
        }
    }

    #[test]
    fn test_new_node_builds_payload() {
        let node: Node<Sample> = Node::new("A1H1".to_string());

        assert_eq!(node.id(), "A1H1");
        assert_eq!(node.payload().id(), "A1H1");
        assert!(node.is_leaf());
        assert!(node.is_parentless());
        assert_eq!(node.degree(), 0);
    }
}
