//! The compiled operation sequence.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use qgrid_ir::Operation;

use crate::error::CompileResult;

/// Operations produced from one grid, in execution order.
///
/// The register width is carried along so a consumer can allocate every
/// wire of the grid, including wires no operation touches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledCircuit {
    num_wires: u32,
    operations: Vec<Operation>,
}

impl CompiledCircuit {
    pub fn new(num_wires: u32, operations: Vec<Operation>) -> Self {
        Self {
            num_wires,
            operations,
        }
    }

    /// Number of wires in the source grid.
    pub fn num_wires(&self) -> u32 {
        self.num_wires
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn into_operations(self) -> Vec<Operation> {
        self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.operations.iter()
    }

    /// Count operations by mnemonic.
    pub fn count_ops(&self) -> FxHashMap<&'static str, usize> {
        let mut counts = FxHashMap::default();
        for op in &self.operations {
            *counts.entry(op.name()).or_insert(0) += 1;
        }
        counts
    }

    /// Serialize to pretty-printed JSON for an external executor.
    pub fn to_json(&self) -> CompileResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a sequence previously written by [`to_json`](Self::to_json).
    pub fn from_json(json: &str) -> CompileResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl fmt::Display for CompiledCircuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} wires, {} ops", self.num_wires, self.operations.len())?;
        for op in &self.operations {
            write!(f, "\n{}", op.name())?;
            if let Some(theta) = op.parameter() {
                write!(f, "({theta})")?;
            }
            let wires: Vec<String> = op.wires.iter().map(ToString::to_string).collect();
            write!(f, " {}", wires.join(", "))?;
        }
        Ok(())
    }
}

impl IntoIterator for CompiledCircuit {
    type Item = Operation;
    type IntoIter = std::vec::IntoIter<Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.into_iter()
    }
}

impl<'a> IntoIterator for &'a CompiledCircuit {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.iter()
    }
}
