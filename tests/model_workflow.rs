use approx::assert_relative_eq;
use structural_model::prelude::*;

/// Build a small portal frame: two fixed bases, two free top corners.
/// Coordinates are in meters (SI system).
fn build_portal_frame() -> StructuralModel {
    let mut model = StructuralModel::new();

    let fixed = NodeOptions::new().restraint(Restraint::fixed());
    model.add_node_with(0.0, 0.0, 0.0, fixed).unwrap();
    model.add_node_with(6.0, 0.0, 0.0, fixed).unwrap();
    model.add_node(0.0, 3.5, 0.0).unwrap();
    model.add_node(6.0, 3.5, 0.0).unwrap();

    model
}

#[test]
fn portal_frame_queries() {
    let model = build_portal_frame();

    assert_eq!(model.node_count(), 4);
    assert_eq!(model.supported_nodes().len(), 2);

    // Base nodes only
    let bases = model.find_nodes_in_box(-0.1, -0.1, -0.1, 6.1, 0.1, 0.1);
    assert_eq!(bases.len(), 2);
    assert!(bases.iter().all(|n| n.is_supported()));

    // Snap lookup at a column top
    let top = model.find_node_at(0.0, 3.5, 0.0).unwrap();
    assert!(!top.is_supported());
}

#[test]
fn portal_frame_survives_json_roundtrip() {
    let model = build_portal_frame();

    let json = model.to_json().unwrap();
    let restored = StructuralModel::from_json(&json).unwrap();

    assert_eq!(restored.node_count(), model.node_count());
    for node in model.iter_nodes() {
        let loaded = restored.get_node(node.id).unwrap();
        assert_eq!(loaded.coords(), node.coords());
        assert_eq!(loaded.restraint, node.restraint);
    }

    // Restored allocator must keep handing out fresh ids
    let mut restored = restored;
    let next = restored.add_node(3.0, 7.0, 0.0).unwrap().id;
    assert!(model.iter_nodes().all(|n| n.id != next));
}

#[test]
fn report_coordinates_in_imperial_units() {
    // The analysis pipeline converts model quantities before display;
    // the model itself stays unit-agnostic.
    let model = build_portal_frame();
    let converter = UnitConverter::new(SI_UNITS, IMPERIAL_UNITS);

    let bay = model.find_node_at(6.0, 0.0, 0.0).unwrap();
    assert_relative_eq!(converter.length(bay.x), 19.685, max_relative = 1e-4);

    // Round-trip back to SI for solving
    let back = converter.inverse().length(converter.length(bay.x));
    assert_relative_eq!(back, 6.0, max_relative = 1e-9);
}

#[test]
fn duplicate_snap_respects_model_tolerance() {
    let mut model = build_portal_frame();

    // A node a hair away from an existing one is rejected...
    let err = model
        .add_node(0.0, 3.5 + NODE_DUPLICATE_TOLERANCE / 2.0, 0.0)
        .unwrap_err();
    assert!(matches!(err, ModelError::DuplicateNode { .. }));

    // ...but clears the tolerance easily at normal spacing
    model.add_node(0.0, 3.6, 0.0).unwrap();
    assert_eq!(model.node_count(), 5);
}
