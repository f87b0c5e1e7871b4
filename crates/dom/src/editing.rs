//! Caret capabilities of [`Document`].
//!
//! Text controls answer as [`TextEntry`], elements flagged with
//! `legacy_text_range` as [`TextRangeSource`], and every other element (and
//! the document itself) as an [`EditableTree`] driven by the document
//! selection.

use crate::document::Document;
use crate::types::{Id, NodeKind};
use caret::{
    Boundary, CaretHost, Editable, EditableKind, EditableTree, SelectionRange, TextEntry,
    TextRange, TextRangeSource, TreeRange, text_boundary_at,
};

impl Document {
    /// Characters in text nodes that precede `target` in document order.
    fn chars_before(&self, target: Id) -> usize {
        let mut count = 0;
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            if id == target {
                return count;
            }
            let Some(record) = self.record(id) else {
                continue;
            };
            if let NodeKind::Text { text } = &record.kind {
                count += text.chars().count();
            }
            stack.extend(record.children.iter().rev().copied());
        }
        count
    }

    /// Flattened character position of a boundary within the whole document.
    pub fn boundary_position(&self, boundary: Boundary<Id>) -> usize {
        let before = self.chars_before(boundary.node);
        if self.is_text(boundary.node) {
            return before + boundary.offset.min(self.text_len(boundary.node));
        }
        let children = self.children(boundary.node);
        let upto = boundary.offset.min(children.len());
        let inside: usize = children[..upto]
            .iter()
            .map(|child| self.subtree_text_len(*child))
            .sum();
        before + inside
    }

    fn subtree_text_len(&self, id: Id) -> usize {
        if self.is_text(id) {
            return self.text_len(id);
        }
        self.text_nodes(id).map(|t| self.text_len(t)).sum()
    }

    /// Text between two boundaries, empty if `range.end` precedes `range.start`.
    pub fn range_text(&self, range: &TreeRange<Id>) -> String {
        let start = self.boundary_position(range.start);
        let end = self.boundary_position(range.end);
        if end <= start {
            return String::new();
        }
        self.text_nodes(self.root())
            .filter_map(|t| self.text(t))
            .flat_map(str::chars)
            .skip(start)
            .take(end - start)
            .collect()
    }

    /// Character offset of `boundary` relative to the start of `element`, if
    /// the boundary lies inside it.
    fn offset_within(&self, element: Id, boundary: Boundary<Id>) -> Option<usize> {
        if !self.contains(element, boundary.node) {
            return None;
        }
        let origin = self.boundary_position(Boundary::new(element, 0));
        Some(self.boundary_position(boundary).saturating_sub(origin))
    }
}

impl TextEntry for Document {
    type Node = Id;

    fn selection_start(&self, node: Id) -> usize {
        self.control(node).map(|c| c.selection.start).unwrap_or(0)
    }

    fn focus(&mut self, node: Id) {
        Document::focus(self, node);
    }

    fn set_selection_range(&mut self, node: Id, start: usize, end: usize) {
        if let Some(control) = self.control_mut(node) {
            control.selection = SelectionRange::new(start, end).clamped(control.char_len());
        }
    }
}

impl TextRangeSource for Document {
    type Node = Id;

    fn create_text_range(&self, node: Id) -> TextRange {
        TextRange::spanning(self.subtree_text_len(node))
    }

    fn selection_text_range(&self, node: Id) -> Option<TextRange> {
        let range = self.selection_ranges().first()?;
        let start = self.offset_within(node, range.start)?;
        let end = self.offset_within(node, range.end).unwrap_or(start);
        Some(TextRange::with_bounds(
            self.subtree_text_len(node),
            start,
            end,
        ))
    }

    fn select(&mut self, node: Id, range: &TextRange) {
        let start = text_boundary_at(self, node, range.start());
        let end = if range.is_collapsed() {
            start
        } else {
            text_boundary_at(self, node, range.end())
        };
        self.set_selection(TreeRange::new(start, end));
    }
}

impl EditableTree for Document {
    type Node = Id;

    fn first_range(&self) -> Option<TreeRange<Id>> {
        self.selection_ranges().first().copied()
    }

    fn stringify(&self, range: &TreeRange<Id>) -> String {
        self.range_text(range)
    }

    fn text_nodes(&self, root: Id) -> Box<dyn Iterator<Item = Id> + '_> {
        Box::new(Document::text_nodes(self, root))
    }

    fn text_length(&self, node: Id) -> usize {
        self.text_len(node)
    }

    fn remove_all_ranges(&mut self) {
        self.clear_selection();
    }

    fn add_range(&mut self, range: TreeRange<Id>) {
        self.push_range(range);
    }
}

impl CaretHost for Document {
    type Node = Id;

    fn editable(&mut self, node: Id) -> Option<Editable<'_, Id>> {
        let kind = match self.kind(node)? {
            NodeKind::Element {
                control: Some(_), ..
            } => EditableKind::TextEntry,
            NodeKind::Element {
                legacy_text_range: true,
                ..
            } => EditableKind::TextRange,
            NodeKind::Element { .. } | NodeKind::Document => EditableKind::Tree,
            NodeKind::Text { .. } => return None,
        };
        Some(match kind {
            EditableKind::TextEntry => Editable::TextEntry(self),
            EditableKind::TextRange => Editable::TextRange(self),
            EditableKind::Tree => Editable::Tree(self),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Layout;
    use caret::{CaretError, get_caret_position, save_caret_position, set_caret_position};

    fn editing_host(texts: &[&str]) -> (Document, Id, Vec<Id>) {
        let mut doc = Document::new();
        let html = doc
            .append_element(doc.root(), "html", Layout::default())
            .unwrap();
        let editor = doc.append_element(html, "div", Layout::default()).unwrap();
        let ids = texts
            .iter()
            .map(|t| doc.append_text(editor, t).unwrap())
            .collect();
        (doc, editor, ids)
    }

    #[test]
    fn boundary_positions_count_preceding_text() {
        let (doc, editor, ids) = editing_host(&["abc", "defgh", "ijkl"]);
        assert_eq!(doc.boundary_position(Boundary::new(editor, 0)), 0);
        assert_eq!(doc.boundary_position(Boundary::new(editor, 2)), 8);
        assert_eq!(doc.boundary_position(Boundary::new(ids[1], 4)), 7);
        assert_eq!(doc.boundary_position(Boundary::new(ids[2], 99)), 12);
    }

    #[test]
    fn range_text_spans_nodes_and_ignores_inverted_ranges() {
        let (doc, _, ids) = editing_host(&["abc", "defgh", "ijkl"]);
        let range = TreeRange::new(Boundary::new(ids[0], 1), Boundary::new(ids[2], 2));
        assert_eq!(doc.range_text(&range), "bcdefghij");

        let inverted = TreeRange::new(Boundary::new(ids[2], 2), Boundary::new(ids[0], 1));
        assert_eq!(doc.range_text(&inverted), "");
    }

    #[test]
    fn tree_round_trip_through_document_selection() {
        let (mut doc, editor, ids) = editing_host(&["abc", "defgh", "ijkl"]);
        set_caret_position(&mut doc, editor, 7).unwrap();
        assert_eq!(
            doc.selection_ranges(),
            &[TreeRange::collapsed(Boundary::new(ids[1], 4))]
        );
        assert_eq!(get_caret_position(&mut doc, editor), Ok(7));
    }

    #[test]
    fn caret_before_editor_reads_as_zero() {
        let mut doc = Document::new();
        let html = doc
            .append_element(doc.root(), "html", Layout::default())
            .unwrap();
        let label = doc.append_text(html, "label: ").unwrap();
        let editor = doc.append_element(html, "div", Layout::default()).unwrap();
        doc.append_text(editor, "body").unwrap();

        doc.set_selection(TreeRange::collapsed(Boundary::new(label, 2)));
        assert_eq!(get_caret_position(&mut doc, editor), Ok(0));
    }

    #[test]
    fn text_control_round_trip_focuses() {
        let mut doc = Document::new();
        let input = doc
            .append_text_control(doc.root(), "input", "hello world", Layout::default())
            .unwrap();
        set_caret_position(&mut doc, input, 5).unwrap();
        assert_eq!(get_caret_position(&mut doc, input), Ok(5));
        assert_eq!(doc.focused(), Some(input));
        assert!(doc.control(input).unwrap().selection.is_empty());

        doc.blur();
        assert_eq!(doc.focused(), None);
        set_caret_position(&mut doc, input, 2).unwrap();
        assert_eq!(doc.focused(), Some(input));
    }

    #[test]
    fn legacy_element_round_trip() {
        let (mut doc, editor, ids) = editing_host(&["abc", "defgh"]);
        doc.set_legacy_text_range(editor, true).unwrap();

        set_caret_position(&mut doc, editor, 5).unwrap();
        assert_eq!(
            doc.selection_ranges(),
            &[TreeRange::collapsed(Boundary::new(ids[1], 2))]
        );
        assert_eq!(get_caret_position(&mut doc, editor), Ok(5));

        set_caret_position(&mut doc, editor, 40).unwrap();
        assert_eq!(get_caret_position(&mut doc, editor), Ok(8));
    }

    #[test]
    fn legacy_element_without_selection_errors() {
        let (mut doc, editor, _) = editing_host(&["abc"]);
        doc.set_legacy_text_range(editor, true).unwrap();
        assert_eq!(
            get_caret_position(&mut doc, editor),
            Err(CaretError::NoActiveSelection)
        );
    }

    #[test]
    fn text_nodes_are_not_editable_targets() {
        let (mut doc, _, ids) = editing_host(&["abc"]);
        assert_eq!(
            get_caret_position(&mut doc, ids[0]),
            Err(CaretError::NotEditable)
        );
    }

    #[test]
    fn saved_caret_restores_after_selection_moves() {
        let (mut doc, editor, _) = editing_host(&["abc", "defgh", "ijkl"]);
        set_caret_position(&mut doc, editor, 9).unwrap();
        let saved = save_caret_position(&mut doc, editor).unwrap();

        set_caret_position(&mut doc, editor, 0).unwrap();
        saved.restore(&mut doc).unwrap();
        assert_eq!(get_caret_position(&mut doc, editor), Ok(9));
    }
}
