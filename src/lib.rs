pub mod config;
pub mod error;
pub mod lineage;
pub mod types;

pub use config::{GenealogyConfig, RemovalPolicy};
pub use error::{GenealogyError, Result};
pub use lineage::{GenealogyGraph, Node};
pub use types::{Entity, GraphStatistics};
