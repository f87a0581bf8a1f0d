//! Error types for the IR crate.

use thiserror::Error;

use crate::wire::{ColumnId, WireId};

/// Errors raised by the grid store and node validation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum IrError {
    /// A coordinate lies outside the grid extent.
    #[error("Cell ({wire}, {column}) is outside the {num_wires}x{num_columns} grid")]
    OutOfBounds {
        /// Requested wire.
        wire: WireId,
        /// Requested column.
        column: ColumnId,
        /// Number of wires in the grid.
        num_wires: u32,
        /// Number of columns in the grid.
        num_columns: u32,
    },

    /// A node's field combination violates the placement invariants.
    #[error("Malformed node at ({wire}, {column}): {reason}")]
    MalformedNode {
        /// Wire the node is placed on.
        wire: WireId,
        /// Column the node is placed in.
        column: ColumnId,
        /// What is wrong with the node.
        reason: MalformedReason,
    },
}

/// Why a node was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MalformedReason {
    /// The kind mnemonic is not part of the node vocabulary.
    #[error("unknown node kind '{0}'")]
    UnknownKind(String),

    /// `control_b` is set while `control_a` is not.
    #[error("control_b is set without control_a")]
    ControlBWithoutControlA,

    /// A control or swap partner points at the node's own wire.
    #[error("{lane} references the node's own wire")]
    SelfReference {
        /// The offending lane.
        lane: WireId,
    },

    /// A control or swap partner lies outside the grid.
    #[error("{lane} is outside a grid of {num_wires} wires")]
    LaneOutOfRange {
        /// The offending lane.
        lane: WireId,
        /// Number of wires in the grid.
        num_wires: u32,
    },

    /// Two of the node's lane references coincide.
    #[error("{lane} is referenced more than once")]
    DuplicateLane {
        /// The repeated lane.
        lane: WireId,
    },

    /// A SWAP node has no partner wire.
    #[error("swap node has no swap partner")]
    MissingSwapPartner,

    /// A field is set that the node's kind has no use for.
    #[error("field '{field}' has no meaning for {kind} nodes")]
    OverSpecified {
        /// Mnemonic of the node kind.
        kind: &'static str,
        /// Name of the ignored field.
        field: &'static str,
    },
}

impl MalformedReason {
    /// Attach the cell coordinates this reason was found at.
    pub fn at(self, wire: WireId, column: ColumnId) -> IrError {
        IrError::MalformedNode {
            wire,
            column,
            reason: self,
        }
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
