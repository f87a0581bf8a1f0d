//! Grid compiler: walks a grid and emits its operation sequence.

use tracing::{debug, info, instrument, warn};

use qgrid_ir::{ColumnId, GridStore, MalformedReason, PlacedNode, WireId};

use crate::circuit::CompiledCircuit;
use crate::config::{CompileConfig, NodePolicy};
use crate::error::CompileResult;
use crate::resolve::{IgnoredFields, resolve};

/// Compiles a [`GridStore`] into a [`CompiledCircuit`].
///
/// Cells are visited column by column, and within a column from the lowest
/// wire to the highest. Each occupied cell yields exactly one operation,
/// appended in visit order. No reordering or dependency analysis takes
/// place: two nodes in the same column come out in wire order.
#[derive(Debug, Clone, Default)]
pub struct GridCompiler {
    config: CompileConfig,
}

impl GridCompiler {
    /// Create a compiler with the default (permissive) configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a compiler from a configuration.
    pub fn with_config(config: CompileConfig) -> Self {
        Self { config }
    }

    pub fn builder() -> GridCompilerBuilder {
        GridCompilerBuilder::new()
    }

    pub fn config(&self) -> &CompileConfig {
        &self.config
    }

    /// Compile the whole grid.
    ///
    /// Fails on the first malformed node; no partial sequence is returned.
    #[instrument(skip(self, grid), fields(wires = grid.num_wires(), columns = grid.num_columns()))]
    pub fn compile(&self, grid: &GridStore) -> CompileResult<CompiledCircuit> {
        info!(
            "Compiling {}x{} grid with {} occupied cells",
            grid.num_wires(),
            grid.num_columns(),
            grid.num_occupied()
        );

        let mut operations = Vec::with_capacity(grid.num_occupied());
        for (wire, column, node) in grid.iter_column_major() {
            let (op, ignored) =
                resolve(node, wire, grid.num_wires()).map_err(|reason| reason.at(wire, column))?;
            self.check_ignored(node, wire, column, &ignored)?;

            debug!("{column} {wire}: {node} -> {} {:?}", op.name(), op.wire_indices());
            operations.push(op);
        }

        info!("Grid compiled to {} operations", operations.len());
        Ok(CompiledCircuit::new(grid.num_wires(), operations))
    }

    fn check_ignored(
        &self,
        node: &PlacedNode,
        wire: WireId,
        column: ColumnId,
        ignored: &IgnoredFields,
    ) -> CompileResult<()> {
        match self.config.policy {
            NodePolicy::Permissive => {
                for field in ignored.iter() {
                    warn!(
                        "Ignoring '{field}' on {} node at ({wire}, {column})",
                        node.kind()
                    );
                }
                Ok(())
            }
            NodePolicy::Strict => match ignored.iter().next() {
                Some(field) => Err(MalformedReason::OverSpecified {
                    kind: node.kind().mnemonic(),
                    field,
                }
                .at(wire, column)
                .into()),
                None => Ok(()),
            },
        }
    }
}

/// Compile a grid with the default configuration.
pub fn compile(grid: &GridStore) -> CompileResult<CompiledCircuit> {
    GridCompiler::new().compile(grid)
}

/// Builder for [`GridCompiler`].
#[derive(Debug, Clone, Default)]
pub struct GridCompilerBuilder {
    config: CompileConfig,
}

impl GridCompilerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how over-specified nodes are treated.
    #[must_use]
    pub fn with_policy(mut self, policy: NodePolicy) -> Self {
        self.config.policy = policy;
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn with_config(mut self, config: CompileConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> GridCompiler {
        GridCompiler::with_config(self.config)
    }
}
