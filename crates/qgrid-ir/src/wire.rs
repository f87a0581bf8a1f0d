//! Wire and column coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a wire (one qubit's timeline) in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WireId(pub u32);

impl WireId {
    /// The wire index as a `usize`, for slot arithmetic.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<u32> for WireId {
    fn from(id: u32) -> Self {
        WireId(id)
    }
}

/// Index of a column (a discrete time step) in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ColumnId(pub u32);

impl ColumnId {
    /// The column index as a `usize`, for slot arithmetic.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

impl From<u32> for ColumnId {
    fn from(id: u32) -> Self {
        ColumnId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_display() {
        assert_eq!(format!("{}", WireId(0)), "q0");
        assert_eq!(format!("{}", WireId(12)), "q12");
    }

    #[test]
    fn test_column_display() {
        assert_eq!(format!("{}", ColumnId(3)), "t3");
    }

    #[test]
    fn test_ordering_follows_index() {
        assert!(WireId(1) < WireId(2));
        assert!(ColumnId(0) < ColumnId(7));
        assert_eq!(WireId::from(4).index(), 4);
    }
}
