//! Retained in-memory element tree with box layout, focus and a document
//! selection.
//!
//! [`Document`] is the reference host for the `geometry` and `caret` crates:
//! it implements [`geometry::LayoutHost`] (offset parents, scroll, client
//! rects and hit testing) and [`caret::CaretHost`] (text controls, legacy
//! text ranges and selection-driven editable trees).

mod document;
mod editing;
mod layout;
mod snapshot;
mod types;

pub use document::{Document, DomError, TextNodes};
pub use hit_test::hit_test;
pub use types::{Id, Layout, NodeId, NodeKind, TextControl, is_text_control_name};
