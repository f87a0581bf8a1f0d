//! Variant selection: one placed node to one operation.
//!
//! | kind | no angle, no controls | control_a | both controls | angle | angle + control_a |
//! |------|-----------------------|-----------|---------------|-------|-------------------|
//! | X | `x` | `cx` | `ccx` | `rx` | `rx`, control dropped |
//! | Y | `y` | `cy` | `cy`, control_b dropped | `ry` | `ry`, control dropped |
//! | Z | `z` | `cz` | `cz`, control_b dropped | `rz` | `crz` |
//! | S, Sdg, T, Tdg | the gate; angle and controls dropped | | | | |
//! | H | `h` | `ch` | `ch`, control_b dropped | angle dropped | |
//! | Swap | `swap` | `cswap` | `cswap`, control_b dropped | angle dropped | |
//! | Identity | `id`; everything else dropped | | | | |
//! | Barrier | `barrier` over all wires; everything else dropped | | | | |
//!
//! `swap_partner` is dropped for every kind except Swap. The angle counts as
//! set only when it is exactly non-zero.

use qgrid_ir::{MalformedReason, NodeKind, Operation, OperationKind, PlacedNode, WireId};

/// Names of the node fields a resolution did not use.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IgnoredFields(Vec<&'static str>);

impl IgnoredFields {
    fn angle(&mut self, node: &PlacedNode) {
        if node.has_rotation() {
            self.0.push("angle");
        }
    }

    fn control_a(&mut self, node: &PlacedNode) {
        if node.control_a().is_some() {
            self.0.push("control_a");
        }
    }

    fn control_b(&mut self, node: &PlacedNode) {
        if node.control_b().is_some() {
            self.0.push("control_b");
        }
    }

    fn controls(&mut self, node: &PlacedNode) {
        self.control_a(node);
        self.control_b(node);
    }

    fn swap_partner(&mut self, node: &PlacedNode) {
        if node.swap_partner().is_some() {
            self.0.push("swap_partner");
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().copied()
    }
}

/// Resolve `node`, placed on `wire` of a grid with `num_wires` wires, to its
/// operation.
///
/// The node is validated first, so a structurally invalid node (for example
/// `control_b` without `control_a`) is an error rather than a plain gate.
pub fn resolve(
    node: &PlacedNode,
    wire: WireId,
    num_wires: u32,
) -> Result<(Operation, IgnoredFields), MalformedReason> {
    node.validate(wire, num_wires)?;

    let mut ignored = IgnoredFields::default();
    let kind = node.kind();

    if kind != NodeKind::Swap {
        ignored.swap_partner(node);
    }
    if !kind.is_rotatable() {
        ignored.angle(node);
    }

    let op = match kind {
        NodeKind::Identity => {
            ignored.controls(node);
            Operation::single(OperationKind::I, wire)
        }

        NodeKind::X => match (node.has_rotation(), node.control_a(), node.control_b()) {
            (true, _, _) => {
                ignored.controls(node);
                Operation::single(OperationKind::Rx(node.angle()), wire)
            }
            (false, Some(a), Some(b)) => Operation::new(OperationKind::CCX, [a, b, wire]),
            (false, Some(a), None) => Operation::new(OperationKind::CX, [a, wire]),
            (false, None, _) => Operation::single(OperationKind::X, wire),
        },

        NodeKind::Y => match (node.has_rotation(), node.control_a()) {
            (true, _) => {
                ignored.controls(node);
                Operation::single(OperationKind::Ry(node.angle()), wire)
            }
            (false, Some(a)) => {
                ignored.control_b(node);
                Operation::new(OperationKind::CY, [a, wire])
            }
            (false, None) => Operation::single(OperationKind::Y, wire),
        },

        NodeKind::Z => {
            ignored.control_b(node);
            match (node.has_rotation(), node.control_a()) {
                (true, Some(a)) => Operation::new(OperationKind::CRz(node.angle()), [a, wire]),
                (true, None) => Operation::single(OperationKind::Rz(node.angle()), wire),
                (false, Some(a)) => Operation::new(OperationKind::CZ, [a, wire]),
                (false, None) => Operation::single(OperationKind::Z, wire),
            }
        }

        NodeKind::S => phase_gate(node, OperationKind::S, wire, &mut ignored),
        NodeKind::Sdg => phase_gate(node, OperationKind::Sdg, wire, &mut ignored),
        NodeKind::T => phase_gate(node, OperationKind::T, wire, &mut ignored),
        NodeKind::Tdg => phase_gate(node, OperationKind::Tdg, wire, &mut ignored),

        NodeKind::H => {
            ignored.control_b(node);
            match node.control_a() {
                Some(a) => Operation::new(OperationKind::CH, [a, wire]),
                None => Operation::single(OperationKind::H, wire),
            }
        }

        NodeKind::Swap => {
            ignored.control_b(node);
            let Some(partner) = node.swap_partner() else {
                return Err(MalformedReason::MissingSwapPartner);
            };
            match node.control_a() {
                Some(a) => Operation::new(OperationKind::CSwap, [a, wire, partner]),
                None => Operation::new(OperationKind::Swap, [wire, partner]),
            }
        }

        NodeKind::Barrier => {
            ignored.controls(node);
            Operation::barrier((0..num_wires).map(WireId))
        }
    };

    Ok((op, ignored))
}

/// S, Sdg, T and Tdg have no controlled or rotated forms.
fn phase_gate(
    node: &PlacedNode,
    kind: OperationKind,
    wire: WireId,
    ignored: &mut IgnoredFields,
) -> Operation {
    ignored.controls(node);
    Operation::single(kind, wire)
}
