pub mod export;
pub mod graph;
pub mod node;

pub use graph::GenealogyGraph;
pub use node::Node;
