//! Single-element host used by this crate's unit tests.
//!
//! Node `0` is the element; in tree mode nodes `1..=n` are its text children.

use crate::range::{Boundary, TreeRange};
use crate::selection::SelectionRange;
use crate::text_range::TextRange;
use crate::traits::{CaretHost, Editable, EditableTree, TextEntry, TextRangeSource};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Surface {
    TextEntry,
    Legacy,
    Tree,
    None,
}

pub(crate) struct FakeHost {
    pub(crate) surface: Surface,
    pub(crate) value: String,
    pub(crate) selection: SelectionRange,
    pub(crate) focused: bool,
    pub(crate) texts: Vec<String>,
    pub(crate) ranges: Vec<TreeRange<usize>>,
    pub(crate) legacy_selection: Option<TextRange>,
}

impl FakeHost {
    fn with_surface(surface: Surface) -> Self {
        Self {
            surface,
            value: String::new(),
            selection: SelectionRange::default(),
            focused: false,
            texts: Vec::new(),
            ranges: Vec::new(),
            legacy_selection: None,
        }
    }

    pub(crate) fn text_entry(value: &str) -> Self {
        Self {
            value: value.to_string(),
            ..Self::with_surface(Surface::TextEntry)
        }
    }

    pub(crate) fn legacy(value: &str) -> Self {
        Self {
            value: value.to_string(),
            ..Self::with_surface(Surface::Legacy)
        }
    }

    pub(crate) fn tree(texts: &[&str]) -> Self {
        Self {
            texts: texts.iter().map(|t| t.to_string()).collect(),
            ..Self::with_surface(Surface::Tree)
        }
    }

    fn flat_position(&self, b: Boundary<usize>) -> usize {
        if b.node == 0 {
            return self.texts[..b.offset.min(self.texts.len())]
                .iter()
                .map(|t| t.chars().count())
                .sum();
        }
        let before: usize = self.texts[..b.node - 1]
            .iter()
            .map(|t| t.chars().count())
            .sum();
        before + b.offset
    }
}

impl TextEntry for FakeHost {
    type Node = usize;

    fn selection_start(&self, _node: usize) -> usize {
        self.selection.start
    }

    fn focus(&mut self, _node: usize) {
        self.focused = true;
    }

    fn set_selection_range(&mut self, _node: usize, start: usize, end: usize) {
        self.selection = SelectionRange::new(start, end).clamped(self.value.chars().count());
    }
}

impl TextRangeSource for FakeHost {
    type Node = usize;

    fn create_text_range(&self, _node: usize) -> TextRange {
        TextRange::spanning(self.value.chars().count())
    }

    fn selection_text_range(&self, _node: usize) -> Option<TextRange> {
        self.legacy_selection
    }

    fn select(&mut self, _node: usize, range: &TextRange) {
        self.legacy_selection = Some(*range);
    }
}

impl EditableTree for FakeHost {
    type Node = usize;

    fn first_range(&self) -> Option<TreeRange<usize>> {
        self.ranges.first().copied()
    }

    fn stringify(&self, range: &TreeRange<usize>) -> String {
        let start = self.flat_position(range.start);
        let end = self.flat_position(range.end);
        if end <= start {
            return String::new();
        }
        self.texts
            .concat()
            .chars()
            .skip(start)
            .take(end - start)
            .collect()
    }

    fn text_nodes(&self, _root: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(1..=self.texts.len())
    }

    fn text_length(&self, node: usize) -> usize {
        self.texts[node - 1].chars().count()
    }

    fn remove_all_ranges(&mut self) {
        self.ranges.clear();
    }

    fn add_range(&mut self, range: TreeRange<usize>) {
        self.ranges.push(range);
    }
}

impl CaretHost for FakeHost {
    type Node = usize;

    fn editable(&mut self, _node: usize) -> Option<Editable<'_, usize>> {
        match self.surface {
            Surface::TextEntry => Some(Editable::TextEntry(self)),
            Surface::Legacy => Some(Editable::TextRange(self)),
            Surface::Tree => Some(Editable::Tree(self)),
            Surface::None => None,
        }
    }
}
