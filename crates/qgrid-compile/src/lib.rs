//! qgrid Grid Compiler
//!
//! Turns a [`GridStore`](qgrid_ir::GridStore) of gate placements into the
//! ordered operation sequence it describes.
//!
//! # Overview
//!
//! ```text
//! GridStore (wires x columns)
//!       │
//!       ▼
//! ┌──────────────┐
//! │ GridCompiler │ ◄── CompileConfig (node policy)
//! └──────────────┘
//!       │   column 0: wire 0, wire 1, ...
//!       │   column 1: wire 0, wire 1, ...
//!       ▼
//! CompiledCircuit (ordered Operations)
//! ```
//!
//! Every occupied cell becomes exactly one operation. Which variant a node
//! becomes (plain, controlled, doubly-controlled, rotated) is decided from
//! the fields it carries; see [`resolve`] for the full table.
//!
//! # Example
//!
//! ```rust
//! use qgrid_compile::compile;
//! use qgrid_ir::{ColumnId, GridStore, NodeKind, PlacedNode, WireId};
//!
//! let mut grid = GridStore::new(5, 3);
//! grid.set(
//!     WireId(3),
//!     ColumnId(0),
//!     PlacedNode::new(NodeKind::X).with_controls(WireId(2), WireId(4)),
//! )
//! .unwrap();
//! grid.set(WireId(0), ColumnId(1), PlacedNode::barrier()).unwrap();
//!
//! let circuit = compile(&grid).unwrap();
//! assert_eq!(circuit.len(), 2);
//! assert_eq!(circuit.operations()[0].name(), "ccx");
//! assert_eq!(circuit.operations()[0].wire_indices(), vec![2, 4, 3]);
//! assert_eq!(circuit.operations()[1].wires.len(), 5);
//! ```
//!
//! # Over-specified nodes
//!
//! Fields a kind has no use for (an angle on H, `control_b` on Z, ...) are
//! dropped with a warning under [`NodePolicy::Permissive`], the default, and
//! rejected as malformed under [`NodePolicy::Strict`].

pub mod circuit;
pub mod compiler;
pub mod config;
pub mod error;
pub mod resolve;

pub use circuit::CompiledCircuit;
pub use compiler::{GridCompiler, GridCompilerBuilder, compile};
pub use config::{CompileConfig, NodePolicy};
pub use error::{CompileError, CompileResult};
