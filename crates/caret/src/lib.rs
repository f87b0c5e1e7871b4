//! # caret
//!
//! UI-agnostic caret reading, writing and restoration.
//!
//! A caret position is the number of characters preceding the cursor in an
//! element's flattened text. This crate maps that single integer onto three
//! editing surfaces a host tree may expose:
//! - [`TextEntry`]: native controls with a selection-start property
//! - [`TextRangeSource`]: legacy per-element text ranges
//! - [`EditableTree`]: contenteditable-style trees with a document selection
//!
//! ## Design Principles
//!
//! The crate owns no tree and no selection state. Hosts implement
//! [`CaretHost`] and get probed once per call; everything else is plain
//! function calls against the borrowed host.
//!
//! ```ignore
//! let saved = caret::save_caret_position(&mut doc, editor)?;
//! rerender(&mut doc);
//! saved.restore(&mut doc)?;
//! ```

mod error;
mod locator;
mod persistence;
mod range;
mod selection;
#[cfg(test)]
mod test_host;
mod text_range;
mod traits;

pub use error::{CaretError, caret_position_from_f64, caret_position_from_i64};
pub use locator::{get_caret_position, set_caret_position, text_boundary_at};
pub use persistence::{SavedCaret, save_caret_position};
pub use range::{Boundary, TreeRange};
pub use selection::SelectionRange;
pub use text_range::{TextRange, TextUnit};
pub use traits::{CaretHost, Editable, EditableKind, EditableTree, TextEntry, TextRangeSource};
