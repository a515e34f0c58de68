pub mod chain;
pub mod node;

pub use chain::{Chain, ChainStep};
pub use node::{Neighbor, Node, Traversal};
