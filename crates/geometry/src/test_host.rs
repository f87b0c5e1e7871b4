//! Minimal `LayoutHost` used by this crate's unit tests.

use crate::host::LayoutHost;
use crate::rect::{Position, Rectangle};

#[derive(Clone, Debug, Default)]
struct FlatNode {
    parent: Option<usize>,
    offset_parent: Option<usize>,
    offset: Position,
    scroll: Option<Position>,
    rect: Rectangle,
}

/// Nodes are stored in a flat list; every parent is also an element.
#[derive(Default)]
pub(crate) struct FlatTree {
    nodes: Vec<FlatNode>,
    topmost: Option<usize>,
}

impl FlatTree {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, parent: Option<usize>, (top, left): (f32, f32)) -> usize {
        self.nodes.push(FlatNode {
            parent,
            offset: Position::new(top, left),
            scroll: Some(Position::ZERO),
            ..FlatNode::default()
        });
        self.nodes.len() - 1
    }

    /// Every node's offset parent becomes its direct parent.
    pub(crate) fn positioned_chain(&mut self) {
        for node in &mut self.nodes {
            node.offset_parent = node.parent;
        }
    }

    pub(crate) fn set_offset_parent(&mut self, node: usize, offset_parent: Option<usize>) {
        self.nodes[node].offset_parent = offset_parent;
    }

    pub(crate) fn set_scroll(&mut self, node: usize, (top, left): (f32, f32)) {
        self.nodes[node].scroll = Some(Position::new(top, left));
    }

    pub(crate) fn disable_scroll(&mut self, node: usize) {
        self.nodes[node].scroll = None;
    }

    pub(crate) fn set_rect(&mut self, node: usize, rect: Rectangle) {
        self.nodes[node].rect = rect;
    }

    pub(crate) fn set_topmost(&mut self, node: Option<usize>) {
        self.topmost = node;
    }
}

impl LayoutHost for FlatTree {
    type Node = usize;

    fn parent_node(&self, node: usize) -> Option<usize> {
        self.nodes.get(node).and_then(|n| n.parent)
    }

    fn parent_element(&self, node: usize) -> Option<usize> {
        self.parent_node(node)
    }

    fn offset_parent(&self, node: usize) -> Option<usize> {
        self.nodes.get(node).and_then(|n| n.offset_parent)
    }

    fn offset_position(&self, node: usize) -> Position {
        self.nodes.get(node).map(|n| n.offset).unwrap_or_default()
    }

    fn scroll_offset(&self, node: usize) -> Option<Position> {
        self.nodes.get(node).and_then(|n| n.scroll)
    }

    fn bounding_client_rect(&self, node: usize) -> Rectangle {
        self.nodes.get(node).map(|n| n.rect).unwrap_or_default()
    }

    fn element_from_point(&self, _x: f32, _y: f32) -> Option<usize> {
        self.topmost
    }
}
