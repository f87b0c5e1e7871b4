//! # geometry
//!
//! Position and visibility queries over any retained UI tree.
//!
//! - [`find_position`]: page-relative offset of an element, optionally with
//!   accumulated ancestor scroll removed
//! - [`is_obscured`]: whether another element is painted over a point of an element
//! - [`element_is_in_view`]: whether an element is visible enough inside every ancestor
//!
//! The crate does not own a tree. Hosts implement [`LayoutHost`] and pass
//! their node handles in; every call borrows the host only for its duration.

mod host;
mod position;
mod rect;
#[cfg(test)]
mod test_host;
mod visibility;

pub use host::LayoutHost;
pub use position::find_position;
pub use rect::{Position, Rectangle};
pub use visibility::{
    InViewOptions, VISIBILITY_TOLERANCE, element_is_in_view, element_is_in_view_with, is_obscured,
};
