use crate::types::{Id, Layout, NodeKind, TextControl, is_text_control_name};
use caret::TreeRange;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DomError {
    UnknownNode(Id),
    InvalidParent(Id),
    WrongNodeKind(Id),
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomError::UnknownNode(id) => write!(f, "unknown node {}", id.0),
            DomError::InvalidParent(id) => write!(f, "node {} cannot have children", id.0),
            DomError::WrongNodeKind(id) => write!(f, "node {} has the wrong kind", id.0),
        }
    }
}

impl std::error::Error for DomError {}

#[derive(Clone, Debug)]
pub(crate) struct NodeRecord {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<Id>,
    pub(crate) children: Vec<Id>,
    pub(crate) layout: Layout,
}

/// Arena-backed retained tree with layout, focus and selection state.
///
/// Nodes are never removed, so every `Id` handed out stays valid for the
/// lifetime of the document.
#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<NodeRecord>,
    focused: Option<Id>,
    ranges: Vec<TreeRange<Id>>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeRecord {
                kind: NodeKind::Document,
                parent: None,
                children: Vec::new(),
                layout: Layout::default(),
            }],
            focused: None,
            ranges: Vec::new(),
        }
    }

    #[inline]
    pub fn root(&self) -> Id {
        Id::DOCUMENT
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A document always holds at least its document node.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub(crate) fn record(&self, id: Id) -> Option<&NodeRecord> {
        self.nodes.get(id.index())
    }

    fn record_mut(&mut self, id: Id) -> Result<&mut NodeRecord, DomError> {
        self.nodes
            .get_mut(id.index())
            .ok_or(DomError::UnknownNode(id))
    }

    fn append(&mut self, parent: Id, kind: NodeKind, layout: Layout) -> Result<Id, DomError> {
        let parent_record = self.record(parent).ok_or(DomError::UnknownNode(parent))?;
        if !parent_record.kind.allows_children() {
            return Err(DomError::InvalidParent(parent));
        }
        let id = Id(self.nodes.len() as u32);
        self.nodes.push(NodeRecord {
            kind,
            parent: Some(parent),
            children: Vec::new(),
            layout,
        });
        self.record_mut(parent)?.children.push(id);
        Ok(id)
    }

    /// Append an element. `input` and `textarea` become empty text controls.
    pub fn append_element(
        &mut self,
        parent: Id,
        name: &str,
        layout: Layout,
    ) -> Result<Id, DomError> {
        let control = is_text_control_name(name).then(TextControl::default);
        let kind = NodeKind::Element {
            name: name.to_string(),
            control,
            legacy_text_range: false,
        };
        self.append(parent, kind, layout)
    }

    /// Append an `input`/`textarea`-style control holding `value`.
    pub fn append_text_control(
        &mut self,
        parent: Id,
        name: &str,
        value: &str,
        layout: Layout,
    ) -> Result<Id, DomError> {
        let kind = NodeKind::Element {
            name: name.to_string(),
            control: Some(TextControl::new(value)),
            legacy_text_range: false,
        };
        self.append(parent, kind, layout)
    }

    pub fn append_text(&mut self, parent: Id, text: &str) -> Result<Id, DomError> {
        let kind = NodeKind::Text {
            text: text.to_string(),
        };
        self.append(parent, kind, Layout::default())
    }

    pub fn set_legacy_text_range(&mut self, id: Id, enabled: bool) -> Result<(), DomError> {
        match &mut self.record_mut(id)?.kind {
            NodeKind::Element {
                legacy_text_range, ..
            } => {
                *legacy_text_range = enabled;
                Ok(())
            }
            _ => Err(DomError::WrongNodeKind(id)),
        }
    }

    pub fn set_text(&mut self, id: Id, text: &str) -> Result<(), DomError> {
        match &mut self.record_mut(id)?.kind {
            NodeKind::Text { text: existing } => {
                existing.clear();
                existing.push_str(text);
                Ok(())
            }
            NodeKind::Element {
                control: Some(control),
                ..
            } => {
                *control = TextControl {
                    value: text.to_string(),
                    selection: control.selection.clamped(text.chars().count()),
                };
                Ok(())
            }
            _ => Err(DomError::WrongNodeKind(id)),
        }
    }

    pub fn layout(&self, id: Id) -> Option<&Layout> {
        self.record(id).map(|r| &r.layout)
    }

    pub fn layout_mut(&mut self, id: Id) -> Option<&mut Layout> {
        self.nodes.get_mut(id.index()).map(|r| &mut r.layout)
    }

    pub fn kind(&self, id: Id) -> Option<&NodeKind> {
        self.record(id).map(|r| &r.kind)
    }

    pub fn name(&self, id: Id) -> Option<&str> {
        match self.kind(id)? {
            NodeKind::Element { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn is_element(&self, id: Id) -> bool {
        self.kind(id).is_some_and(NodeKind::is_element)
    }

    pub fn is_text(&self, id: Id) -> bool {
        self.kind(id).is_some_and(NodeKind::is_text)
    }

    pub fn parent(&self, id: Id) -> Option<Id> {
        self.record(id).and_then(|r| r.parent)
    }

    pub fn children(&self, id: Id) -> &[Id] {
        self.record(id).map(|r| r.children.as_slice()).unwrap_or(&[])
    }

    pub fn control(&self, id: Id) -> Option<&TextControl> {
        match self.kind(id)? {
            NodeKind::Element { control, .. } => control.as_ref(),
            _ => None,
        }
    }

    pub(crate) fn control_mut(&mut self, id: Id) -> Option<&mut TextControl> {
        match &mut self.nodes.get_mut(id.index())?.kind {
            NodeKind::Element { control, .. } => control.as_mut(),
            _ => None,
        }
    }

    /// Own text for text nodes, concatenated descendant text otherwise.
    /// Control values are not part of the tree's text.
    pub fn text_content(&self, id: Id) -> String {
        match self.kind(id) {
            Some(NodeKind::Text { text }) => text.clone(),
            Some(_) => self
                .text_nodes(id)
                .filter_map(|t| self.text(t))
                .collect(),
            None => String::new(),
        }
    }

    pub(crate) fn text(&self, id: Id) -> Option<&str> {
        match self.kind(id)? {
            NodeKind::Text { text } => Some(text),
            _ => None,
        }
    }

    /// Character length of a text node (0 for anything else).
    pub fn text_len(&self, id: Id) -> usize {
        self.text(id).map(|t| t.chars().count()).unwrap_or(0)
    }

    /// Text-node descendants of `root` in document order, `root` excluded.
    pub fn text_nodes(&self, root: Id) -> TextNodes<'_> {
        let mut stack: Vec<Id> = self.children(root).to_vec();
        stack.reverse();
        TextNodes { doc: self, stack }
    }

    /// Inclusive: a node contains itself.
    pub fn contains(&self, ancestor: Id, node: Id) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    pub fn focused(&self) -> Option<Id> {
        self.focused
    }

    pub fn focus(&mut self, id: Id) {
        if self.record(id).is_some() {
            self.focused = Some(id);
        }
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    pub fn selection_ranges(&self) -> &[TreeRange<Id>] {
        &self.ranges
    }

    /// Replace the document selection with a single range.
    pub fn set_selection(&mut self, range: TreeRange<Id>) {
        self.ranges.clear();
        self.ranges.push(range);
    }

    pub fn clear_selection(&mut self) {
        self.ranges.clear();
    }

    pub(crate) fn push_range(&mut self, range: TreeRange<Id>) {
        self.ranges.push(range);
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Pre-order walk yielding only text nodes.
pub struct TextNodes<'a> {
    doc: &'a Document,
    stack: Vec<Id>,
}

impl Iterator for TextNodes<'_> {
    type Item = Id;

    fn next(&mut self) -> Option<Id> {
        while let Some(id) = self.stack.pop() {
            let Some(record) = self.doc.record(id) else {
                continue;
            };
            if record.kind.is_text() {
                return Some(id);
            }
            self.stack.extend(record.children.iter().rev().copied());
        }
        None
    }
}
