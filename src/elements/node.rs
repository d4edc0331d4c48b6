//! Node element - represents a point in 3D space

use serde::{Deserialize, Serialize};

use crate::elements::Restraint;

/// A 3D node in the structural model
///
/// Nodes are created through [`StructuralModel::add_node`] and own their
/// identity for the life of the model; the id is never reassigned.
///
/// [`StructuralModel::add_node`]: crate::model::StructuralModel::add_node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier within the owning model
    pub id: u32,
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    pub z: f64,
    /// Boundary conditions at this node
    pub restraint: Restraint,
}

impl Node {
    pub(crate) fn new(id: u32, x: f64, y: f64, z: f64, restraint: Restraint) -> Self {
        Self {
            id,
            x,
            y,
            z,
            restraint,
        }
    }

    /// Get the coordinates as an array
    pub fn coords(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Calculate distance to another node
    pub fn distance_to(&self, other: &Node) -> f64 {
        self.distance_to_point(other.x, other.y, other.z)
    }

    /// Calculate distance to a point
    pub fn distance_to_point(&self, x: f64, y: f64, z: f64) -> f64 {
        let dx = x - self.x;
        let dy = y - self.y;
        let dz = z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Check if this node has any restrained DOF
    pub fn is_supported(&self) -> bool {
        self.restraint.is_supported()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_distance() {
        let n1 = Node::new(1, 0.0, 0.0, 0.0, Restraint::free());
        let n2 = Node::new(2, 3.0, 4.0, 0.0, Restraint::free());
        assert!((n1.distance_to(&n2) - 5.0).abs() < 1e-10);
        assert!((n2.distance_to_point(0.0, 0.0, 0.0) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_node_support_flag() {
        let free = Node::new(1, 0.0, 0.0, 0.0, Restraint::free());
        let fixed = Node::new(2, 1.0, 0.0, 0.0, Restraint::fixed());
        assert!(!free.is_supported());
        assert!(fixed.is_supported());
    }
}
