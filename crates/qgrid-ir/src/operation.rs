//! Compiled operations: the primitive instructions a grid resolves to.

use serde::{Deserialize, Serialize};

use crate::wire::WireId;

/// The fixed operation vocabulary.
///
/// Rotation variants carry their angle in radians, passed through from the
/// placed node without normalisation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OperationKind {
    // Single-qubit gates
    /// Identity.
    I,
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
    /// Hadamard.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger.
    Sdg,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger.
    Tdg,

    // Rotations
    /// Rotation around X.
    Rx(f64),
    /// Rotation around Y.
    Ry(f64),
    /// Rotation around Z.
    Rz(f64),

    // Controlled gates
    /// Controlled-X (CNOT).
    CX,
    /// Controlled-Y.
    CY,
    /// Controlled-Z.
    CZ,
    /// Controlled-Hadamard.
    CH,
    /// Controlled rotation around Z.
    CRz(f64),
    /// Toffoli (CCX).
    CCX,

    // Swaps
    /// SWAP.
    Swap,
    /// Fredkin (CSWAP).
    CSwap,

    /// Barrier across a set of wires.
    Barrier,
}

/// Coarse category of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationClass {
    /// Unparameterised single-qubit gate.
    SingleQubit,
    /// Single-qubit gate with one control.
    Controlled,
    /// Single-qubit gate with two controls.
    DoublyControlled,
    /// Single-qubit rotation.
    Rotation,
    /// Rotation with one control.
    ControlledRotation,
    /// Two-wire exchange.
    Swap,
    /// Exchange with one control.
    ControlledSwap,
    /// Synchronisation marker.
    Barrier,
    /// No-op on one wire.
    Identity,
}

impl OperationKind {
    /// Get the mnemonic of this operation.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            OperationKind::I => "id",
            OperationKind::X => "x",
            OperationKind::Y => "y",
            OperationKind::Z => "z",
            OperationKind::H => "h",
            OperationKind::S => "s",
            OperationKind::Sdg => "sdg",
            OperationKind::T => "t",
            OperationKind::Tdg => "tdg",
            OperationKind::Rx(_) => "rx",
            OperationKind::Ry(_) => "ry",
            OperationKind::Rz(_) => "rz",
            OperationKind::CX => "cx",
            OperationKind::CY => "cy",
            OperationKind::CZ => "cz",
            OperationKind::CH => "ch",
            OperationKind::CRz(_) => "crz",
            OperationKind::CCX => "ccx",
            OperationKind::Swap => "swap",
            OperationKind::CSwap => "cswap",
            OperationKind::Barrier => "barrier",
        }
    }

    /// Number of wires the operation acts on, or `None` for a barrier,
    /// which spans however many wires it was given.
    #[inline]
    pub fn num_wires(&self) -> Option<usize> {
        match self {
            OperationKind::I
            | OperationKind::X
            | OperationKind::Y
            | OperationKind::Z
            | OperationKind::H
            | OperationKind::S
            | OperationKind::Sdg
            | OperationKind::T
            | OperationKind::Tdg
            | OperationKind::Rx(_)
            | OperationKind::Ry(_)
            | OperationKind::Rz(_) => Some(1),

            OperationKind::CX
            | OperationKind::CY
            | OperationKind::CZ
            | OperationKind::CH
            | OperationKind::CRz(_)
            | OperationKind::Swap => Some(2),

            OperationKind::CCX | OperationKind::CSwap => Some(3),

            OperationKind::Barrier => None,
        }
    }

    /// The rotation angle, if this is a rotation.
    pub fn parameter(&self) -> Option<f64> {
        match self {
            OperationKind::Rx(theta)
            | OperationKind::Ry(theta)
            | OperationKind::Rz(theta)
            | OperationKind::CRz(theta) => Some(*theta),
            _ => None,
        }
    }

    /// Category of this operation.
    pub fn class(&self) -> OperationClass {
        match self {
            OperationKind::I => OperationClass::Identity,
            OperationKind::X
            | OperationKind::Y
            | OperationKind::Z
            | OperationKind::H
            | OperationKind::S
            | OperationKind::Sdg
            | OperationKind::T
            | OperationKind::Tdg => OperationClass::SingleQubit,
            OperationKind::Rx(_) | OperationKind::Ry(_) | OperationKind::Rz(_) => {
                OperationClass::Rotation
            }
            OperationKind::CX | OperationKind::CY | OperationKind::CZ | OperationKind::CH => {
                OperationClass::Controlled
            }
            OperationKind::CRz(_) => OperationClass::ControlledRotation,
            OperationKind::CCX => OperationClass::DoublyControlled,
            OperationKind::Swap => OperationClass::Swap,
            OperationKind::CSwap => OperationClass::ControlledSwap,
            OperationKind::Barrier => OperationClass::Barrier,
        }
    }
}

/// One primitive instruction with its operands.
///
/// `wires` is ordered controls first, then the target, then the swap
/// partner where there is one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// What the operation does.
    pub kind: OperationKind,
    /// Wires the operation acts on.
    pub wires: Vec<WireId>,
}

impl Operation {
    /// Create an operation on the given wires.
    pub fn new(kind: OperationKind, wires: impl IntoIterator<Item = WireId>) -> Self {
        let wires: Vec<WireId> = wires.into_iter().collect();
        debug_assert!(
            kind.num_wires().is_none_or(|n| n == wires.len()),
            "operation '{}' expects {:?} wires, got {}",
            kind.name(),
            kind.num_wires(),
            wires.len()
        );
        Self { kind, wires }
    }

    /// Create a single-wire operation.
    pub fn single(kind: OperationKind, wire: WireId) -> Self {
        Self::new(kind, [wire])
    }

    /// Create a barrier across the given wires.
    pub fn barrier(wires: impl IntoIterator<Item = WireId>) -> Self {
        Self::new(OperationKind::Barrier, wires)
    }

    /// Get the mnemonic of the operation.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Get the rotation angle, if any.
    pub fn parameter(&self) -> Option<f64> {
        self.kind.parameter()
    }

    /// Check if this is a barrier.
    pub fn is_barrier(&self) -> bool {
        matches!(self.kind, OperationKind::Barrier)
    }

    /// Wire indices as plain integers, in operand order.
    pub fn wire_indices(&self) -> Vec<u32> {
        self.wires.iter().map(|w| w.0).collect()
    }
}
