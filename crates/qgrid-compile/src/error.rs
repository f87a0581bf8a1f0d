//! Error types for the compilation crate.

use thiserror::Error;

/// Errors that can occur during compilation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompileError {
    /// Error from the IR crate: an out-of-bounds cell or a malformed node.
    #[error(transparent)]
    Ir(#[from] qgrid_ir::IrError),

    /// Configuration or compiled output could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CompileError {
    /// Check if this error was raised for a malformed node.
    pub fn is_malformed_node(&self) -> bool {
        matches!(self, CompileError::Ir(qgrid_ir::IrError::MalformedNode { .. }))
    }
}

/// Result type for compilation operations.
pub type CompileResult<T> = Result<T, CompileError>;
