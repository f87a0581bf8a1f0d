//! Fixed-extent grid of placed nodes.
//!
//! The grid is an arena of `wires * columns` slots laid out wire-major
//! (`wire * columns + column`). Bounds are fixed at construction and every
//! coordinate passes through [`GridStore::slot`], so bounds checking lives in
//! one place.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{IrError, IrResult};
use crate::node::PlacedNode;
use crate::wire::{ColumnId, WireId};

/// A `wires x columns` grid of optional placed nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct GridStore {
    num_wires: u32,
    num_columns: u32,
    slots: Vec<Option<PlacedNode>>,
}

impl GridStore {
    /// Create an empty grid.
    pub fn new(num_wires: u32, num_columns: u32) -> Self {
        let len = num_wires as usize * num_columns as usize;
        Self {
            num_wires,
            num_columns,
            slots: vec![None; len],
        }
    }

    pub fn num_wires(&self) -> u32 {
        self.num_wires
    }

    pub fn num_columns(&self) -> u32 {
        self.num_columns
    }

    fn slot(&self, wire: WireId, column: ColumnId) -> IrResult<usize> {
        if wire.0 >= self.num_wires || column.0 >= self.num_columns {
            return Err(IrError::OutOfBounds {
                wire,
                column,
                num_wires: self.num_wires,
                num_columns: self.num_columns,
            });
        }
        Ok(wire.index() * self.num_columns as usize + column.index())
    }

    /// Store `node` at the cell, replacing whatever was there.
    ///
    /// The node is validated against this grid first; on error the grid is
    /// left untouched.
    pub fn set(&mut self, wire: WireId, column: ColumnId, node: PlacedNode) -> IrResult<()> {
        let slot = self.slot(wire, column)?;
        node.validate(wire, self.num_wires)
            .map_err(|reason| reason.at(wire, column))?;
        self.slots[slot] = Some(node);
        Ok(())
    }

    /// Get the node at the cell, if any.
    pub fn get(&self, wire: WireId, column: ColumnId) -> IrResult<Option<&PlacedNode>> {
        let slot = self.slot(wire, column)?;
        Ok(self.slots[slot].as_ref())
    }

    /// Empty the cell, returning the node it held.
    pub fn clear(&mut self, wire: WireId, column: ColumnId) -> IrResult<Option<PlacedNode>> {
        let slot = self.slot(wire, column)?;
        Ok(self.slots[slot].take())
    }

    /// Number of occupied cells.
    pub fn num_occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Check if no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Occupied cells in column-major order: columns ascending, and within a
    /// column, wires ascending.
    pub fn iter_column_major(&self) -> impl Iterator<Item = (WireId, ColumnId, &PlacedNode)> {
        let columns = self.num_columns as usize;
        (0..self.num_columns).flat_map(move |column| {
            (0..self.num_wires).filter_map(move |wire| {
                self.slots[wire as usize * columns + column as usize]
                    .as_ref()
                    .map(|node| (WireId(wire), ColumnId(column), node))
            })
        })
    }
}

impl fmt::Display for GridStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GridStore {}x{}:", self.num_wires, self.num_columns)?;
        let columns = self.num_columns as usize;
        for wire in 0..self.num_wires {
            write!(f, "\n{}:", WireId(wire))?;
            let row = &self.slots[wire as usize * columns..(wire as usize + 1) * columns];
            for cell in row {
                match cell {
                    Some(node) => write!(f, " {node}")?,
                    None => write!(f, " .")?,
                }
            }
        }
        Ok(())
    }
}

/// A grid shared between one writer and many readers.
#[derive(Debug, Clone)]
pub struct SharedGrid {
    inner: Arc<RwLock<GridStore>>,
}

impl SharedGrid {
    pub fn new(grid: GridStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(grid)),
        }
    }

    /// Acquire read access.
    ///
    /// A poisoned lock still yields the grid: `set` validates before it
    /// writes, so a panicking writer cannot leave a half-written cell.
    pub fn read(&self) -> RwLockReadGuard<'_, GridStore> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Acquire write access.
    pub fn write(&self) -> RwLockWriteGuard<'_, GridStore> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store a node through the write lock.
    pub fn set(&self, wire: WireId, column: ColumnId, node: PlacedNode) -> IrResult<()> {
        self.write().set(wire, column, node)
    }
}

impl From<GridStore> for SharedGrid {
    fn from(grid: GridStore) -> Self {
        Self::new(grid)
    }
}
