//! Integration tests for grid compilation.
//!
//! These cover the end-to-end contract: `set` cells on a grid, `compile`
//! it, and check the emitted operations, their order and their operands.

use std::f64::consts::PI;

use qgrid_compile::{CompileError, GridCompiler, NodePolicy, compile};
use qgrid_ir::{
    ColumnId, GridStore, IrError, MalformedReason, NodeKind, OperationClass, OperationKind,
    PlacedNode, SharedGrid, WireId,
};
use tracing_subscriber::EnvFilter;

/// Helper: route compiler logs to the test writer (`RUST_LOG=debug` to see them).
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Helper: place a node, panicking on failure.
fn place(grid: &mut GridStore, wire: u32, column: u32, node: PlacedNode) {
    grid.set(WireId(wire), ColumnId(column), node).unwrap();
}

/// Helper: operation names in emission order.
fn op_names(grid: &GridStore) -> Vec<&'static str> {
    compile(grid).unwrap().iter().map(|op| op.name()).collect()
}

// ============================================================================
// Variant selection
// ============================================================================

#[test]
fn test_toffoli_lane_order() {
    init_tracing();
    let mut grid = GridStore::new(6, 1);
    place(
        &mut grid,
        3,
        0,
        PlacedNode::from_parts(NodeKind::X, 0.0, Some(WireId(2)), Some(WireId(5)), None),
    );

    let circuit = compile(&grid).unwrap();
    assert_eq!(circuit.len(), 1);
    let op = &circuit.operations()[0];
    assert_eq!(op.kind, OperationKind::CCX);
    assert_eq!(op.kind.class(), OperationClass::DoublyControlled);
    assert_eq!(op.wire_indices(), vec![2, 5, 3]);
}

#[test]
fn test_controlled_rz() {
    init_tracing();
    let mut grid = GridStore::new(5, 1);
    place(
        &mut grid,
        4,
        0,
        PlacedNode::new(NodeKind::Z)
            .with_angle(1.5708)
            .with_control(WireId(1)),
    );

    let circuit = compile(&grid).unwrap();
    let op = &circuit.operations()[0];
    assert_eq!(op.name(), "crz");
    assert_eq!(op.wire_indices(), vec![1, 4]);
    assert_eq!(op.parameter(), Some(1.5708));
}

#[test]
fn test_barrier_spans_every_wire() {
    init_tracing();
    let mut grid = GridStore::new(5, 4);
    place(&mut grid, 3, 2, PlacedNode::barrier());

    let circuit = compile(&grid).unwrap();
    assert_eq!(circuit.len(), 1);
    let op = &circuit.operations()[0];
    assert!(op.is_barrier());
    assert_eq!(op.wire_indices(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_swap_and_controlled_swap() {
    let mut grid = GridStore::new(4, 2);
    place(&mut grid, 1, 0, PlacedNode::swap(WireId(3)));
    place(
        &mut grid,
        1,
        1,
        PlacedNode::swap(WireId(3)).with_control(WireId(0)),
    );

    let circuit = compile(&grid).unwrap();
    assert_eq!(circuit.operations()[0].kind, OperationKind::Swap);
    assert_eq!(circuit.operations()[0].wire_indices(), vec![1, 3]);
    assert_eq!(circuit.operations()[1].kind, OperationKind::CSwap);
    assert_eq!(circuit.operations()[1].wire_indices(), vec![0, 1, 3]);
}

#[test]
fn test_rotations_take_precedence_over_controls() {
    let mut grid = GridStore::new(3, 3);
    place(
        &mut grid,
        2,
        0,
        PlacedNode::new(NodeKind::X)
            .with_angle(PI)
            .with_control(WireId(0)),
    );
    place(
        &mut grid,
        2,
        1,
        PlacedNode::new(NodeKind::Y)
            .with_angle(-PI / 4.0)
            .with_control(WireId(0)),
    );
    place(&mut grid, 2, 2, PlacedNode::new(NodeKind::Z).with_angle(0.1));

    let ops = compile(&grid).unwrap().into_operations();
    assert_eq!(ops[0].kind, OperationKind::Rx(PI));
    assert_eq!(ops[0].wire_indices(), vec![2]);
    assert_eq!(ops[1].kind, OperationKind::Ry(-PI / 4.0));
    assert_eq!(ops[2].kind, OperationKind::Rz(0.1));
}

#[test]
fn test_angle_zero_is_exact() {
    let mut grid = GridStore::new(1, 3);
    place(&mut grid, 0, 0, PlacedNode::new(NodeKind::X).with_angle(f64::MIN_POSITIVE));
    place(&mut grid, 0, 1, PlacedNode::new(NodeKind::X).with_angle(-0.0));
    place(&mut grid, 0, 2, PlacedNode::new(NodeKind::Z).with_angle(f64::NAN));

    let ops = compile(&grid).unwrap().into_operations();

    // The smallest positive angle still selects the rotation.
    assert_eq!(ops[0].kind, OperationKind::Rx(f64::MIN_POSITIVE));

    // Negative zero compares equal to zero: no rotation.
    assert_eq!(ops[1].kind, OperationKind::X);

    // NaN is not equal to zero, so it passes through as the rotation angle.
    assert_eq!(ops[2].name(), "rz");
    assert!(ops[2].parameter().is_some_and(f64::is_nan));
}

#[test]
fn test_bell_pair_layout() {
    let mut grid = GridStore::new(2, 2);
    place(&mut grid, 0, 0, PlacedNode::new(NodeKind::H));
    place(
        &mut grid,
        1,
        1,
        PlacedNode::new(NodeKind::X).with_control(WireId(0)),
    );

    assert_eq!(op_names(&grid), vec!["h", "cx"]);
}

#[test]
fn test_every_kind_emits_one_operation() {
    let mut grid = GridStore::new(3, NodeKind::ALL.len() as u32);
    for (column, kind) in NodeKind::ALL.into_iter().enumerate() {
        let node = match kind {
            NodeKind::Swap => PlacedNode::swap(WireId(2)),
            other => PlacedNode::new(other),
        };
        place(&mut grid, 0, column as u32, node);
    }

    assert_eq!(
        op_names(&grid),
        vec![
            "id", "x", "y", "z", "s", "sdg", "t", "tdg", "h", "swap", "barrier"
        ]
    );
}

// ============================================================================
// Grid semantics
// ============================================================================

#[test]
fn test_reset_replaces_cell() {
    let mut grid = GridStore::new(3, 1);
    place(
        &mut grid,
        1,
        0,
        PlacedNode::new(NodeKind::X).with_control(WireId(0)),
    );
    place(&mut grid, 1, 0, PlacedNode::new(NodeKind::T));

    let circuit = compile(&grid).unwrap();
    assert_eq!(circuit.len(), 1);
    assert_eq!(circuit.operations()[0].kind, OperationKind::T);
    assert_eq!(circuit.operations()[0].wire_indices(), vec![1]);
}

#[test]
fn test_cleared_cell_is_skipped() {
    let mut grid = GridStore::new(2, 2);
    place(&mut grid, 0, 0, PlacedNode::new(NodeKind::H));
    place(&mut grid, 1, 1, PlacedNode::new(NodeKind::S));
    grid.clear(WireId(0), ColumnId(0)).unwrap();

    assert_eq!(op_names(&grid), vec!["s"]);
}

#[test]
fn test_out_of_bounds_set_leaves_compile_output_unchanged() {
    let mut grid = GridStore::new(2, 2);
    place(&mut grid, 0, 0, PlacedNode::new(NodeKind::H));
    let before = compile(&grid).unwrap();

    let err = grid
        .set(WireId(0), ColumnId(2), PlacedNode::new(NodeKind::X))
        .unwrap_err();
    assert!(matches!(
        err,
        IrError::OutOfBounds {
            num_wires: 2,
            num_columns: 2,
            ..
        }
    ));

    assert_eq!(compile(&grid).unwrap(), before);
}

#[test]
fn test_malformed_nodes_are_rejected_at_set() {
    let mut grid = GridStore::new(3, 1);

    let control_b_only =
        PlacedNode::from_parts(NodeKind::X, 0.0, None, Some(WireId(1)), None);
    let err = grid.set(WireId(0), ColumnId(0), control_b_only).unwrap_err();
    assert_eq!(
        err,
        IrError::MalformedNode {
            wire: WireId(0),
            column: ColumnId(0),
            reason: MalformedReason::ControlBWithoutControlA,
        }
    );

    let beyond_grid = PlacedNode::new(NodeKind::H).with_control(WireId(9));
    let err = grid.set(WireId(0), ColumnId(0), beyond_grid).unwrap_err();
    assert!(matches!(
        err,
        IrError::MalformedNode {
            reason: MalformedReason::LaneOutOfRange { .. },
            ..
        }
    ));

    assert!(grid.is_empty());
}

#[test]
fn test_unknown_kind_mnemonic() {
    let reason = "u3".parse::<NodeKind>().unwrap_err();
    let err: CompileError = reason.at(WireId(0), ColumnId(0)).into();
    assert!(err.is_malformed_node());
}

// ============================================================================
// Policy and sharing
// ============================================================================

#[test]
fn test_strict_policy_rejects_angle_on_hadamard() {
    let mut grid = GridStore::new(2, 2);
    place(&mut grid, 0, 0, PlacedNode::new(NodeKind::X));
    place(&mut grid, 1, 1, PlacedNode::new(NodeKind::H).with_angle(0.5));

    // Permissive: the angle is dropped.
    assert_eq!(op_names(&grid), vec!["x", "h"]);

    // Strict: the whole compile fails.
    let compiler = GridCompiler::builder()
        .with_policy(NodePolicy::Strict)
        .build();
    let err = compiler.compile(&grid).unwrap_err();
    assert!(matches!(
        err,
        CompileError::Ir(IrError::MalformedNode {
            reason: MalformedReason::OverSpecified { field: "angle", .. },
            ..
        })
    ));
}

#[test]
fn test_shared_grid_compiles_under_read_lock() {
    let shared = SharedGrid::new(GridStore::new(2, 3));
    shared
        .set(WireId(0), ColumnId(0), PlacedNode::new(NodeKind::H))
        .unwrap();
    shared
        .set(
            WireId(1),
            ColumnId(1),
            PlacedNode::new(NodeKind::X).with_control(WireId(0)),
        )
        .unwrap();

    let circuit = compile(&shared.read()).unwrap();
    assert_eq!(circuit.len(), 2);
}

#[test]
fn test_json_handoff_shape() {
    let mut grid = GridStore::new(2, 1);
    place(
        &mut grid,
        1,
        0,
        PlacedNode::new(NodeKind::Z)
            .with_angle(0.25)
            .with_control(WireId(0)),
    );

    let json = compile(&grid).unwrap().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["num_wires"], 2);
    assert_eq!(value["operations"][0]["kind"]["CRz"], 0.25);
    assert_eq!(value["operations"][0]["wires"], serde_json::json!([0, 1]));
}
