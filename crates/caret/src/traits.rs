//! Editing capabilities a host tree can expose for a node.
//!
//! A host implements [`CaretHost`] plus whichever capability traits its nodes
//! support, and answers [`CaretHost::editable`] by handing itself out as the
//! one capability that applies to the probed node. Caret operations probe once
//! per call and then talk to that capability only.
//!
//! # Integration Pattern
//!
//! ```ignore
//! impl CaretHost for Document {
//!     type Node = Id;
//!
//!     fn editable(&mut self, node: Id) -> Option<Editable<'_, Id>> {
//!         if self.is_text_control(node) {
//!             return Some(Editable::TextEntry(self));
//!         }
//!         Some(Editable::Tree(self))
//!     }
//! }
//! ```

use crate::range::TreeRange;
use crate::text_range::TextRange;
use std::fmt;

/// Native text-entry control (`input`, `textarea`) with a selection-start
/// property. Offsets are characters into the control's value.
pub trait TextEntry {
    type Node;

    fn selection_start(&self, node: Self::Node) -> usize;

    /// Give the control input focus.
    fn focus(&mut self, node: Self::Node);

    /// Select `start..end`; implementations clamp to the value length.
    fn set_selection_range(&mut self, node: Self::Node, start: usize, end: usize);
}

/// Legacy range API: ranges are created per element and applied with `select`.
pub trait TextRangeSource {
    type Node;

    /// A range spanning the element's whole text.
    fn create_text_range(&self, node: Self::Node) -> TextRange;

    /// The active selection expressed as a range over this element's text,
    /// or `None` if the selection is absent or lies elsewhere.
    fn selection_text_range(&self, node: Self::Node) -> Option<TextRange>;

    /// Make `range` the active selection.
    fn select(&mut self, node: Self::Node, range: &TextRange);
}

/// Generic editable tree (contenteditable-style) driven through a
/// document-wide selection of [`TreeRange`]s.
pub trait EditableTree {
    type Node;

    /// First range of the active selection.
    fn first_range(&self) -> Option<TreeRange<Self::Node>>;

    /// Text covered by `range`; empty when the start lies after the end.
    fn stringify(&self, range: &TreeRange<Self::Node>) -> String;

    /// Text-node descendants of `root` in document order.
    fn text_nodes(&self, root: Self::Node) -> Box<dyn Iterator<Item = Self::Node> + '_>;

    /// Character length of a text node.
    fn text_length(&self, node: Self::Node) -> usize;

    fn remove_all_ranges(&mut self);

    fn add_range(&mut self, range: TreeRange<Self::Node>);
}

/// The capability selected for one node.
pub enum Editable<'a, N> {
    TextEntry(&'a mut dyn TextEntry<Node = N>),
    TextRange(&'a mut dyn TextRangeSource<Node = N>),
    Tree(&'a mut dyn EditableTree<Node = N>),
}

impl<N> Editable<'_, N> {
    pub fn kind(&self) -> EditableKind {
        match self {
            Editable::TextEntry(_) => EditableKind::TextEntry,
            Editable::TextRange(_) => EditableKind::TextRange,
            Editable::Tree(_) => EditableKind::Tree,
        }
    }
}

impl<N> fmt::Debug for Editable<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Editable::{:?}", self.kind())
    }
}

/// Tag of an [`Editable`] without the borrowed capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditableKind {
    TextEntry,
    TextRange,
    Tree,
}

/// Entry point for caret operations: capability probing on a node handle.
pub trait CaretHost {
    /// Opaque handle to a node in the host tree.
    type Node: Copy + PartialEq + fmt::Debug;

    /// Probe `node`, in priority order text entry, legacy text range,
    /// editable tree. `None` if the node offers no editing surface.
    fn editable(&mut self, node: Self::Node) -> Option<Editable<'_, Self::Node>>;
}
