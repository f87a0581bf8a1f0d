//! qgrid Intermediate Representation
//!
//! Core data structures for circuit grids: a fixed-size layout of gate
//! placements where rows are wires (one qubit's timeline each) and columns
//! are discrete time steps.
//!
//! # Core Components
//!
//! - **Coordinates**: [`WireId`], [`ColumnId`]
//! - **Nodes**: [`PlacedNode`] is one gate placement; [`NodeKind`] is its
//!   gate family (X, Y, Z, S, T, H, SWAP, identity, barrier, ...)
//! - **Grid**: [`GridStore`] holds the placements; [`SharedGrid`] wraps it
//!   for single-writer / multi-reader access
//! - **Operations**: [`Operation`] and [`OperationKind`] form the vocabulary a
//!   grid compiles to
//!
//! # Example
//!
//! ```rust
//! use qgrid_ir::{ColumnId, GridStore, NodeKind, PlacedNode, WireId};
//!
//! let mut grid = GridStore::new(3, 2);
//!
//! // Hadamard on q0, then a CNOT controlled by q0 targeting q1.
//! grid.set(WireId(0), ColumnId(0), PlacedNode::new(NodeKind::H)).unwrap();
//! grid.set(
//!     WireId(1),
//!     ColumnId(1),
//!     PlacedNode::new(NodeKind::X).with_control(WireId(0)),
//! )
//! .unwrap();
//!
//! assert_eq!(grid.num_occupied(), 2);
//! ```
//!
//! # Node Kinds
//!
//! | Kind | Variants it can resolve to |
//! |------|----------------------------|
//! | `X` | `x`, `cx`, `ccx`, `rx` |
//! | `Y` | `y`, `cy`, `ry` |
//! | `Z` | `z`, `cz`, `rz`, `crz` |
//! | `H` | `h`, `ch` |
//! | `S`, `Sdg`, `T`, `Tdg` | themselves |
//! | `Swap` | `swap`, `cswap` |
//! | `Identity` | `id` |
//! | `Barrier` | `barrier` over every wire |

pub mod error;
pub mod grid;
pub mod node;
pub mod operation;
pub mod wire;

pub use error::{IrError, IrResult, MalformedReason};
pub use grid::{GridStore, SharedGrid};
pub use node::{NodeKind, PlacedNode};
pub use operation::{Operation, OperationClass, OperationKind};
pub use wire::{ColumnId, WireId};
