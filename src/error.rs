use std::fmt::Debug;
use thiserror::Error;

/// Errors raised by genealogy graph operations.
///
/// Every variant is a caller error carrying the identifier that triggered it.
/// A failed operation never leaves the graph partially modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenealogyError<Id: Debug> {
    /// The identifier is not a node of the graph
    #[error("Node not found: {0:?}")]
    NotFound(Id),

    /// `create` was given an identifier that is already taken
    #[error("Node already exists: {0:?}")]
    AlreadyExists(Id),

    /// `create` was given an empty parent list
    #[error("Node {0:?} must be created with at least one parent")]
    NoParents(Id),

    /// `remove` targeted the root node
    #[error("Root node cannot be removed: {0:?}")]
    RootRemovalForbidden(Id),
}

impl<Id: Debug> GenealogyError<Id> {
    /// Identifier the failed operation was called with
    pub fn id(&self) -> &Id {
        match self {
            GenealogyError::NotFound(id)
            | GenealogyError::AlreadyExists(id)
            | GenealogyError::NoParents(id)
            | GenealogyError::RootRemovalForbidden(id) => id,
        }
    }
}

pub type Result<T, Id> = std::result::Result<T, GenealogyError<Id>>;
