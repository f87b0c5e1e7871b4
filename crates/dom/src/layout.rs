//! `LayoutHost` for [`Document`]: offset parents, scroll and client rects.

use crate::document::Document;
use crate::hit_test::hit_test;
use crate::types::{Id, NodeKind};
use geometry::{LayoutHost, Position, Rectangle, find_position};

impl Document {
    /// Nearest positioned ancestor element, falling back to the outermost
    /// element. The outermost element, text nodes and the document have none.
    pub fn offset_parent(&self, id: Id) -> Option<Id> {
        if !self.is_element(id) {
            return None;
        }
        let mut outermost = None;
        let mut current = self.parent(id);
        while let Some(ancestor) = current {
            if !self.is_element(ancestor) {
                break;
            }
            if self.layout(ancestor).is_some_and(|l| l.positioned) {
                return Some(ancestor);
            }
            outermost = Some(ancestor);
            current = self.parent(ancestor);
        }
        outermost
    }

    /// Border box in client coordinates: page position minus the scroll of
    /// every strict ancestor. Text nodes report their parent's box.
    pub fn bounding_client_rect(&self, id: Id) -> Rectangle {
        let Some(record) = self.record(id) else {
            return Rectangle::default();
        };
        if let NodeKind::Text { .. } = record.kind {
            return record
                .parent
                .map(|parent| self.bounding_client_rect(parent))
                .unwrap_or_default();
        }

        let page = find_position(self, id, false);
        let mut scroll = Position::ZERO;
        let mut current = record.parent;
        while let Some(ancestor) = current {
            scroll += LayoutHost::scroll_offset(self, ancestor).unwrap_or_default();
            current = self.parent(ancestor);
        }

        Rectangle::new(
            page.left - scroll.left,
            page.top - scroll.top,
            record.layout.width,
            record.layout.height,
        )
    }
}

impl LayoutHost for Document {
    type Node = Id;

    fn parent_node(&self, node: Id) -> Option<Id> {
        self.parent(node)
    }

    fn parent_element(&self, node: Id) -> Option<Id> {
        self.parent(node).filter(|p| self.is_element(*p))
    }

    fn offset_parent(&self, node: Id) -> Option<Id> {
        Document::offset_parent(self, node)
    }

    fn offset_position(&self, node: Id) -> Position {
        match self.record(node) {
            Some(record) if record.kind.is_element() => {
                Position::new(record.layout.offset_top, record.layout.offset_left)
            }
            _ => Position::ZERO,
        }
    }

    fn scroll_offset(&self, node: Id) -> Option<Position> {
        let record = self.record(node)?;
        if record.kind.is_text() {
            return None;
        }
        Some(Position::new(record.layout.scroll_top, record.layout.scroll_left))
    }

    fn bounding_client_rect(&self, node: Id) -> Rectangle {
        Document::bounding_client_rect(self, node)
    }

    fn element_from_point(&self, x: f32, y: f32) -> Option<Id> {
        hit_test(self, x, y)
    }

    fn contains(&self, ancestor: Id, node: Id) -> bool {
        Document::contains(self, ancestor, node)
    }
}
