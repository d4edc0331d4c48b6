//! Structural Model - the model layer of a structural analysis application
//!
//! This library provides the in-memory representation of a structure
//! (nodes, coordinates, boundary restraints) together with a unit
//! conversion engine for translating quantities between measurement
//! systems:
//! - Node registry with id allocation, spatial deduplication and a
//!   capacity limit
//! - Bounding-box and support queries
//! - Explicit-schema JSON serialization
//! - Exact, composable length/force/angle conversion across unit systems
//!
//! ## Example
//! ```rust
//! use structural_model::prelude::*;
//!
//! let mut model = StructuralModel::new();
//!
//! // Add nodes (coordinates in the caller's unit system)
//! model.add_node(0.0, 0.0, 0.0).unwrap();
//! let tip = model.add_node(10.0, 0.0, 0.0).unwrap().id;
//!
//! // Fix the base
//! model.update_node(1, NodeUpdate::new().restraint(Restraint::fixed())).unwrap();
//!
//! // Convert the tip coordinate for an imperial-units report
//! let converter = UnitConverter::new(SI_UNITS, IMPERIAL_UNITS);
//! let x_ft = converter.length(model.get_node(tip).unwrap().x);
//! assert!((x_ft - 32.8084).abs() < 1e-3);
//! ```

pub mod elements;
pub mod error;
pub mod model;
pub mod units;

// Re-export common types
pub mod prelude {
    pub use crate::elements::{Node, Restraint};
    pub use crate::error::{ModelError, ModelResult};
    pub use crate::model::{
        ModelData, NodeOptions, NodeUpdate, StructuralModel, MAX_NODES, NODE_DUPLICATE_TOLERANCE,
    };
    pub use crate::units::{
        convert_angle, convert_force, convert_length, AngleUnit, ForceUnit, LengthUnit,
        UnitConverter, UnitSystem, IMPERIAL_UNITS, SI_UNITS,
    };
}
