//! Capability surface a retained UI tree must expose for geometry queries.
//!
//! The trait speaks only in terms of opaque node handles, so the same
//! resolvers run against the in-memory `dom::Document`, a browser DOM binding,
//! or any toolkit that can answer these questions.

use crate::rect::{Position, Rectangle};
use std::fmt;

/// Geometry and ancestry queries against a laid-out tree.
///
/// All methods are expected to be cheap reads of already-computed layout.
/// Handles that the host does not know about should degrade to "no parent",
/// zero offsets and empty rectangles rather than panic.
pub trait LayoutHost {
    /// Opaque handle to a node in the host tree.
    type Node: Copy + PartialEq + fmt::Debug;

    /// Parent in the node tree, including the document node.
    fn parent_node(&self, node: Self::Node) -> Option<Self::Node>;

    /// Parent only if it is an element (the document node is not one).
    fn parent_element(&self, node: Self::Node) -> Option<Self::Node>;

    /// Nearest ancestor establishing a positioning reference frame.
    fn offset_parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// `offsetLeft` / `offsetTop` relative to the offset parent.
    fn offset_position(&self, node: Self::Node) -> Position;

    /// `scrollLeft` / `scrollTop`, or `None` for nodes that cannot scroll.
    fn scroll_offset(&self, node: Self::Node) -> Option<Position>;

    /// Border box in client coordinates.
    fn bounding_client_rect(&self, node: Self::Node) -> Rectangle;

    /// Topmost element painted at the given client point.
    fn element_from_point(&self, x: f32, y: f32) -> Option<Self::Node>;

    /// Inclusive containment: a node contains itself.
    fn contains(&self, ancestor: Self::Node, node: Self::Node) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == ancestor {
                return true;
            }
            current = self.parent_node(n);
        }
        false
    }
}
