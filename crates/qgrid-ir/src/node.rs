//! Placed nodes: one gate placement per grid cell.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MalformedReason;
use crate::wire::WireId;

/// The gate family a node belongs to.
///
/// The set is closed: the compiler resolves every kind with one exhaustive
/// match, so a new kind does not build until its resolution rule exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Identity.
    Identity,
    /// Pauli-X family: X, CX, CCX, RX.
    X,
    /// Pauli-Y family: Y, CY, RY.
    Y,
    /// Pauli-Z family: Z, CZ, RZ, CRZ.
    Z,
    /// S gate.
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate.
    T,
    /// T-dagger gate.
    Tdg,
    /// Hadamard family: H, CH.
    H,
    /// Swap family: SWAP, CSWAP.
    Swap,
    /// Barrier over every wire of the grid.
    Barrier,
}

impl NodeKind {
    /// Every node kind, in declaration order.
    pub const ALL: [NodeKind; 11] = [
        NodeKind::Identity,
        NodeKind::X,
        NodeKind::Y,
        NodeKind::Z,
        NodeKind::S,
        NodeKind::Sdg,
        NodeKind::T,
        NodeKind::Tdg,
        NodeKind::H,
        NodeKind::Swap,
        NodeKind::Barrier,
    ];

    /// Short mnemonic of the kind.
    #[inline]
    pub fn mnemonic(self) -> &'static str {
        match self {
            NodeKind::Identity => "id",
            NodeKind::X => "x",
            NodeKind::Y => "y",
            NodeKind::Z => "z",
            NodeKind::S => "s",
            NodeKind::Sdg => "sdg",
            NodeKind::T => "t",
            NodeKind::Tdg => "tdg",
            NodeKind::H => "h",
            NodeKind::Swap => "swap",
            NodeKind::Barrier => "barrier",
        }
    }

    /// Whether a non-zero angle selects a rotation variant.
    #[inline]
    pub fn is_rotatable(self) -> bool {
        matches!(self, NodeKind::X | NodeKind::Y | NodeKind::Z)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl FromStr for NodeKind {
    type Err = MalformedReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" | "iden" | "i" => Ok(NodeKind::Identity),
            "x" => Ok(NodeKind::X),
            "y" => Ok(NodeKind::Y),
            "z" => Ok(NodeKind::Z),
            "s" => Ok(NodeKind::S),
            "sdg" => Ok(NodeKind::Sdg),
            "t" => Ok(NodeKind::T),
            "tdg" => Ok(NodeKind::Tdg),
            "h" => Ok(NodeKind::H),
            "swap" => Ok(NodeKind::Swap),
            "barrier" | "b" => Ok(NodeKind::Barrier),
            _ => Err(MalformedReason::UnknownKind(s.to_string())),
        }
    }
}

/// A gate placement occupying one grid cell.
///
/// Nodes are values: the grid replaces them wholesale and never edits a
/// stored node in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedNode {
    kind: NodeKind,
    #[serde(default)]
    angle: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    control_a: Option<WireId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    control_b: Option<WireId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    swap_partner: Option<WireId>,
}

impl PlacedNode {
    /// Create a node of the given kind with no angle and no lane references.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            angle: 0.0,
            control_a: None,
            control_b: None,
            swap_partner: None,
        }
    }

    /// Create a node from the editor's flat field set.
    ///
    /// Unlike the builder methods this accepts any combination, including
    /// `control_b` without `control_a`; validation happens when the node is
    /// stored or compiled.
    pub fn from_parts(
        kind: NodeKind,
        angle: f64,
        control_a: Option<WireId>,
        control_b: Option<WireId>,
        swap_partner: Option<WireId>,
    ) -> Self {
        Self {
            kind,
            angle,
            control_a,
            control_b,
            swap_partner,
        }
    }

    /// Set the rotation angle in radians.
    #[must_use]
    pub fn with_angle(mut self, radians: f64) -> Self {
        self.angle = radians;
        self
    }

    /// Set a single control wire.
    #[must_use]
    pub fn with_control(mut self, control: WireId) -> Self {
        self.control_a = Some(control);
        self
    }

    /// Set both control wires.
    #[must_use]
    pub fn with_controls(mut self, control_a: WireId, control_b: WireId) -> Self {
        self.control_a = Some(control_a);
        self.control_b = Some(control_b);
        self
    }

    /// Set the partner wire of a swap.
    #[must_use]
    pub fn with_swap_partner(mut self, partner: WireId) -> Self {
        self.swap_partner = Some(partner);
        self
    }

    /// Shorthand for a swap node.
    pub fn swap(partner: WireId) -> Self {
        Self::new(NodeKind::Swap).with_swap_partner(partner)
    }

    /// Shorthand for a barrier node.
    pub fn barrier() -> Self {
        Self::new(NodeKind::Barrier)
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn control_a(&self) -> Option<WireId> {
        self.control_a
    }

    pub fn control_b(&self) -> Option<WireId> {
        self.control_b
    }

    pub fn swap_partner(&self) -> Option<WireId> {
        self.swap_partner
    }

    /// Whether a rotation is requested. Exact comparison against zero.
    #[inline]
    #[allow(clippy::float_cmp)]
    pub fn has_rotation(&self) -> bool {
        self.angle != 0.0
    }

    /// Check the structural invariants for a node placed on `wire` in a grid
    /// of `num_wires` wires.
    pub fn validate(&self, wire: WireId, num_wires: u32) -> Result<(), MalformedReason> {
        if self.control_b.is_some() && self.control_a.is_none() {
            return Err(MalformedReason::ControlBWithoutControlA);
        }

        let lanes = [self.control_a, self.control_b, self.swap_partner];
        let mut seen: Vec<WireId> = Vec::with_capacity(lanes.len());
        for lane in lanes.into_iter().flatten() {
            if lane.0 >= num_wires {
                return Err(MalformedReason::LaneOutOfRange { lane, num_wires });
            }
            if lane == wire {
                return Err(MalformedReason::SelfReference { lane });
            }
            if seen.contains(&lane) {
                return Err(MalformedReason::DuplicateLane { lane });
            }
            seen.push(lane);
        }

        if self.kind == NodeKind::Swap && self.swap_partner.is_none() {
            return Err(MalformedReason::MissingSwapPartner);
        }

        Ok(())
    }
}

impl fmt::Display for PlacedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let mut fields = Vec::new();
        if self.has_rotation() {
            fields.push(format!("angle={}", self.angle));
        }
        if let Some(c) = self.control_a {
            fields.push(format!("ctrl_a={c}"));
        }
        if let Some(c) = self.control_b {
            fields.push(format!("ctrl_b={c}"));
        }
        if let Some(p) = self.swap_partner {
            fields.push(format!("swap={p}"));
        }

        if !fields.is_empty() {
            write!(f, "({})", fields.join(", "))?;
        }
        Ok(())
    }
}
