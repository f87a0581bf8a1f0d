//! Compiler configuration.

use serde::{Deserialize, Serialize};

use crate::error::CompileResult;

/// How the compiler treats fields a node's kind has no use for, such as
/// `control_b` on a Y node or an angle on an H node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodePolicy {
    /// Drop the field and log a warning.
    #[default]
    Permissive,
    /// Reject the node as malformed.
    Strict,
}

/// Settings for a [`GridCompiler`](crate::GridCompiler).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileConfig {
    /// Treatment of over-specified nodes.
    pub policy: NodePolicy,
}

impl CompileConfig {
    /// Parse a configuration fragment. Missing keys take their defaults.
    ///
    /// ```
    /// use qgrid_compile::{CompileConfig, NodePolicy};
    ///
    /// let config = CompileConfig::from_json(r#"{ "policy": "strict" }"#).unwrap();
    /// assert_eq!(config.policy, NodePolicy::Strict);
    /// ```
    pub fn from_json(json: &str) -> CompileResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
