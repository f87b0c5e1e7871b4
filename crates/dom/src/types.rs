use caret::SelectionRange;

pub type NodeId = u32;

/// Handle to a node in a [`Document`](crate::Document). `Id(0)` is always
/// the document node itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(pub NodeId);

impl Id {
    pub const DOCUMENT: Id = Id(0);

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Box geometry of one element, in px.
///
/// `offset_left`/`offset_top` are relative to the element's offset parent;
/// the client rectangle is derived from them by the document.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Layout {
    pub offset_left: f32,
    pub offset_top: f32,
    pub width: f32,
    pub height: f32,
    pub scroll_left: f32,
    pub scroll_top: f32,
    /// Establishes a positioning reference frame for descendants.
    pub positioned: bool,
    /// Descendants are not hit outside this element's box.
    pub clips: bool,
}

impl Layout {
    pub fn new(offset_left: f32, offset_top: f32, width: f32, height: f32) -> Self {
        Self {
            offset_left,
            offset_top,
            width,
            height,
            ..Self::default()
        }
    }

    pub fn positioned(mut self) -> Self {
        self.positioned = true;
        self
    }

    pub fn clipping(mut self) -> Self {
        self.clips = true;
        self
    }

    pub fn scrolled(mut self, scroll_left: f32, scroll_top: f32) -> Self {
        self.scroll_left = scroll_left;
        self.scroll_top = scroll_top;
        self
    }
}

/// Value and selection of a native text-entry control.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextControl {
    pub value: String,
    /// In characters, always within the value.
    pub selection: SelectionRange,
}

impl TextControl {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let end = value.chars().count();
        // A fresh control keeps its caret after the value.
        Self {
            value,
            selection: SelectionRange::caret(end),
        }
    }

    pub fn char_len(&self) -> usize {
        self.value.chars().count()
    }
}

#[derive(Clone, Debug)]
pub enum NodeKind {
    Document,
    Element {
        name: String,
        control: Option<TextControl>,
        /// Exposes the legacy per-element text-range API instead of the
        /// document selection.
        legacy_text_range: bool,
    },
    Text {
        text: String,
    },
}

impl NodeKind {
    pub fn is_element(&self) -> bool {
        matches!(self, NodeKind::Element { .. })
    }

    pub fn is_text(&self) -> bool {
        matches!(self, NodeKind::Text { .. })
    }

    pub(crate) fn allows_children(&self) -> bool {
        matches!(self, NodeKind::Document | NodeKind::Element { .. })
    }
}

/// Names whose elements are created as native text-entry controls.
pub fn is_text_control_name(name: &str) -> bool {
    name.eq_ignore_ascii_case("input") || name.eq_ignore_ascii_case("textarea")
}
