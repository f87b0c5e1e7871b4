//! # domkit
//!
//! Geometry and caret utilities for a retained element tree.
//!
//! - [`find_position`], [`is_obscured`], [`element_is_in_view`]: where an
//!   element is and whether the user can see it
//! - [`get_caret_position`], [`set_caret_position`], [`save_caret_position`]:
//!   caret access across text controls, legacy text ranges and editable trees
//!
//! The queries are generic over [`LayoutHost`] and [`CaretHost`]; [`Document`]
//! is the in-memory host shipped with the crate.
//!
//! ```
//! use domkit::{Document, Layout, get_caret_position, set_caret_position};
//!
//! let mut doc = Document::new();
//! let input = doc
//!     .append_text_control(doc.root(), "input", "hello world", Layout::default())
//!     .unwrap();
//! set_caret_position(&mut doc, input, 5).unwrap();
//! assert_eq!(get_caret_position(&mut doc, input), Ok(5));
//! ```

pub use caret::{
    Boundary, CaretError, CaretHost, Editable, EditableKind, EditableTree, SavedCaret,
    SelectionRange, TextEntry, TextRange, TextRangeSource, TextUnit, TreeRange,
    caret_position_from_f64, caret_position_from_i64, get_caret_position, save_caret_position,
    set_caret_position, text_boundary_at,
};
pub use dom::{Document, DomError, Id, Layout, NodeKind, TextControl, hit_test};
pub use geometry::{
    InViewOptions, LayoutHost, Position, Rectangle, VISIBILITY_TOLERANCE, element_is_in_view,
    element_is_in_view_with, find_position, is_obscured,
};
