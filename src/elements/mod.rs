//! Structural elements module

mod node;
mod restraint;

pub use node::Node;
pub use restraint::Restraint;
