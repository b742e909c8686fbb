//! Compile-time node tags for the max/min recursion.
//!
//! Minimax and alpha-beta alternate between maximizing and minimizing
//! nodes. Instead of duplicating the node logic per direction, both
//! algorithms are written once over a node-kind type parameter; the
//! two halves cannot drift apart because there is only one body.

/// Marker trait distinguishing maximizing from minimizing nodes.
pub trait NodeKind {
    /// Whether this node maximizes the perspective color's value.
    const MAXIMIZING: bool;
    /// The node kind of the child nodes.
    type Flip: NodeKind;
}

/// A node where the engine maximizes the perspective color's value.
pub struct MaxNode;

/// A node where the engine minimizes the perspective color's value,
/// i.e. the opponent is acting.
pub struct MinNode;

impl NodeKind for MaxNode {
    const MAXIMIZING: bool = true;
    type Flip = MinNode;
}

impl NodeKind for MinNode {
    const MAXIMIZING: bool = false;
    type Flip = MaxNode;
}
