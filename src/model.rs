//! Structural model - central container for nodes

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::elements::{Node, Restraint};
use crate::error::{ModelError, ModelResult};

/// Maximum number of nodes a model may hold
pub const MAX_NODES: usize = 10_000;

/// Distance below which two nodes are considered coincident
pub const NODE_DUPLICATE_TOLERANCE: f64 = 1e-6;

/// Options for adding a node to the model
///
/// The default adds an unrestrained node with an auto-allocated id and
/// duplicate detection enabled.
#[derive(Debug, Clone, Copy)]
pub struct NodeOptions {
    /// Boundary conditions (fully free when None)
    pub restraint: Option<Restraint>,
    /// Explicit id (auto-allocated when None)
    pub id: Option<u32>,
    /// Whether to reject nodes coinciding with an existing node
    pub check_duplicate: bool,
}

impl Default for NodeOptions {
    fn default() -> Self {
        Self {
            restraint: None,
            id: None,
            check_duplicate: true,
        }
    }
}

impl NodeOptions {
    /// Create options with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the boundary conditions
    pub fn restraint(mut self, restraint: Restraint) -> Self {
        self.restraint = Some(restraint);
        self
    }

    /// Use an explicit id instead of auto-allocation
    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    /// Disable duplicate detection for this add
    pub fn skip_duplicate_check(mut self) -> Self {
        self.check_duplicate = false;
        self
    }
}

/// Partial update of a node's properties
///
/// Fields left as None keep their current value.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeUpdate {
    /// New X coordinate
    pub x: Option<f64>,
    /// New Y coordinate
    pub y: Option<f64>,
    /// New Z coordinate
    pub z: Option<f64>,
    /// New boundary conditions
    pub restraint: Option<Restraint>,
}

impl NodeUpdate {
    /// Create an empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the X coordinate
    pub fn x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    /// Set the Y coordinate
    pub fn y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    /// Set the Z coordinate
    pub fn z(mut self, z: f64) -> Self {
        self.z = Some(z);
        self
    }

    /// Set the boundary conditions
    pub fn restraint(mut self, restraint: Restraint) -> Self {
        self.restraint = Some(restraint);
        self
    }
}

/// Serialized form of a structural model
///
/// Nodes are ordered by id so the persisted shape is stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelData {
    /// Node records
    pub nodes: Vec<Node>,
    /// Next id the allocator would hand out
    pub next_node_id: u32,
}

/// The central container for structural model data
///
/// Owns all nodes of one structure and enforces identity uniqueness,
/// spatial deduplication and the node capacity limit. Single-threaded
/// by design; callers needing shared access must synchronize externally.
#[derive(Debug, Clone)]
pub struct StructuralModel {
    nodes: HashMap<u32, Node>,
    next_node_id: u32,
}

impl Default for StructuralModel {
    fn default() -> Self {
        Self::new()
    }
}

impl StructuralModel {
    /// Create a new empty model
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            next_node_id: 1,
        }
    }

    // ========================
    // Node Lifecycle
    // ========================

    /// Add a node with default options
    ///
    /// The node is unrestrained, gets an auto-allocated id and is rejected
    /// if it coincides with an existing node.
    pub fn add_node(&mut self, x: f64, y: f64, z: f64) -> ModelResult<&Node> {
        self.add_node_with(x, y, z, NodeOptions::default())
    }

    /// Add a node with explicit options
    ///
    /// Checks run in order: capacity, duplicate location, id conflict.
    /// On any failure the model is left unchanged. When an explicit id
    /// at or above the allocator counter is supplied, the counter is
    /// advanced past it so later auto-allocated ids never collide.
    pub fn add_node_with(
        &mut self,
        x: f64,
        y: f64,
        z: f64,
        options: NodeOptions,
    ) -> ModelResult<&Node> {
        if self.nodes.len() >= MAX_NODES {
            return Err(ModelError::NodeLimitExceeded(MAX_NODES));
        }

        if options.check_duplicate {
            if let Some(existing) = self.find_node_at(x, y, z) {
                return Err(ModelError::DuplicateNode {
                    x,
                    y,
                    z,
                    existing_id: existing.id,
                });
            }
        }

        let id = match options.id {
            None => {
                let id = self.next_node_id;
                self.next_node_id += 1;
                id
            }
            Some(id) => {
                if self.nodes.contains_key(&id) {
                    return Err(ModelError::NodeIdExists(id));
                }
                if id >= self.next_node_id {
                    self.next_node_id = id + 1;
                }
                id
            }
        };

        let restraint = options.restraint.unwrap_or_default();
        self.nodes.insert(id, Node::new(id, x, y, z, restraint));

        Ok(&self.nodes[&id])
    }

    /// Get a node by id
    pub fn get_node(&self, id: u32) -> ModelResult<&Node> {
        self.nodes.get(&id).ok_or(ModelError::NodeNotFound(id))
    }

    /// Check if a node exists
    pub fn has_node(&self, id: u32) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Remove a node from the model, returning it
    ///
    /// Does not check whether other entities (members, frames) still
    /// reference the node; that integrity check is the caller's
    /// responsibility.
    pub fn remove_node(&mut self, id: u32) -> ModelResult<Node> {
        self.nodes.remove(&id).ok_or(ModelError::NodeNotFound(id))
    }

    /// Update node properties in place
    ///
    /// Only the fields set in `update` are overwritten. The node's id is
    /// never changed. Duplicate detection is not re-run against the new
    /// coordinates, so an update may move a node onto an existing one.
    pub fn update_node(&mut self, id: u32, update: NodeUpdate) -> ModelResult<&Node> {
        let node = self
            .nodes
            .get_mut(&id)
            .ok_or(ModelError::NodeNotFound(id))?;

        if let Some(x) = update.x {
            node.x = x;
        }
        if let Some(y) = update.y {
            node.y = y;
        }
        if let Some(z) = update.z {
            node.z = z;
        }
        if let Some(restraint) = update.restraint {
            node.restraint = restraint;
        }

        Ok(&self.nodes[&id])
    }

    // ========================
    // Queries
    // ========================

    /// Find a node within the default duplicate tolerance of a point
    pub fn find_node_at(&self, x: f64, y: f64, z: f64) -> Option<&Node> {
        self.find_node_within(x, y, z, NODE_DUPLICATE_TOLERANCE)
    }

    /// Find a node within `tolerance` of a point
    ///
    /// Linear scan; returns the first match in iteration order when
    /// several nodes fall inside the tolerance.
    pub fn find_node_within(&self, x: f64, y: f64, z: f64, tolerance: f64) -> Option<&Node> {
        self.nodes
            .values()
            .find(|node| node.distance_to_point(x, y, z) <= tolerance)
    }

    /// Find all nodes within a bounding box (bounds inclusive)
    #[allow(clippy::too_many_arguments)]
    pub fn find_nodes_in_box(
        &self,
        x_min: f64,
        y_min: f64,
        z_min: f64,
        x_max: f64,
        y_max: f64,
        z_max: f64,
    ) -> Vec<&Node> {
        self.nodes
            .values()
            .filter(|node| {
                x_min <= node.x
                    && node.x <= x_max
                    && y_min <= node.y
                    && node.y <= y_max
                    && z_min <= node.z
                    && node.z <= z_max
            })
            .collect()
    }

    /// Get all nodes with at least one restrained DOF
    pub fn supported_nodes(&self) -> Vec<&Node> {
        self.nodes.values().filter(|n| n.is_supported()).collect()
    }

    /// Iterate over all nodes (unspecified order)
    pub fn iter_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the model has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Remove all nodes and reset the id allocator
    pub fn clear(&mut self) {
        debug!("Clearing model ({} nodes)", self.nodes.len());
        self.nodes.clear();
        self.next_node_id = 1;
    }

    // ========================
    // Serialization
    // ========================

    /// Serialize to the persisted schema
    pub fn to_data(&self) -> ModelData {
        let mut nodes: Vec<Node> = self.nodes.values().cloned().collect();
        nodes.sort_by_key(|n| n.id);

        ModelData {
            nodes,
            next_node_id: self.next_node_id,
        }
    }

    /// Reconstruct a model from the persisted schema
    ///
    /// Load is trusted: capacity and duplicate-location checks are not
    /// re-run. Duplicate or zero ids are rejected, and a stored counter
    /// that would collide with an existing id is raised past the maximum
    /// id present.
    pub fn from_data(data: ModelData) -> ModelResult<Self> {
        let mut model = Self::new();

        for node in data.nodes {
            if node.id == 0 {
                return Err(ModelError::Validation(
                    "Node id 0 is not allowed".to_string(),
                ));
            }
            if model.nodes.contains_key(&node.id) {
                return Err(ModelError::Validation(format!(
                    "Duplicate node id {} in model data",
                    node.id
                )));
            }
            model.nodes.insert(node.id, node);
        }

        model.next_node_id = data.next_node_id.max(1);
        if let Some(max_id) = model.nodes.keys().max().copied() {
            if model.next_node_id <= max_id {
                model.next_node_id = max_id + 1;
            }
        }

        debug!("Loaded model with {} nodes", model.nodes.len());
        Ok(model)
    }

    /// Serialize the model to a JSON string
    pub fn to_json(&self) -> ModelResult<String> {
        Ok(serde_json::to_string(&self.to_data())?)
    }

    /// Reconstruct a model from a JSON string
    pub fn from_json(json: &str) -> ModelResult<Self> {
        let data: ModelData = serde_json::from_str(json)?;
        Self::from_data(data)
    }
}
