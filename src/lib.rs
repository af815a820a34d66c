pub mod activation;
pub mod layer;
pub mod network;
pub mod node;
pub mod prelude;

// Convenience re-exports
pub use layer::Layer;
pub use network::Network;
pub use node::Node;
pub use prelude::{Error, Result};
