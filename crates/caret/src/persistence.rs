use crate::error::CaretError;
use crate::locator::{get_caret_position, set_caret_position};
use crate::traits::CaretHost;

/// A caret position captured from one node, ready to be put back.
///
/// Restoring re-applies the same character offset, so it is only faithful
/// while the node's text is unchanged since the capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SavedCaret<N> {
    node: N,
    position: usize,
}

impl<N: Copy + PartialEq + std::fmt::Debug> SavedCaret<N> {
    pub fn new(node: N, position: usize) -> Self {
        Self { node, position }
    }

    pub fn node(&self) -> N {
        self.node
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Put the caret back at the captured position. Safe to call repeatedly.
    pub fn restore<H>(&self, host: &mut H) -> Result<(), CaretError>
    where
        H: CaretHost<Node = N> + ?Sized,
    {
        log::trace!(
            target: "caret.persistence",
            "restoring caret {} in {:?}",
            self.position,
            self.node
        );
        set_caret_position(host, self.node, self.position)
    }
}

/// Capture the caret position of `node` now.
pub fn save_caret_position<H: CaretHost + ?Sized>(
    host: &mut H,
    node: H::Node,
) -> Result<SavedCaret<H::Node>, CaretError> {
    let position = get_caret_position(host, node)?;
    Ok(SavedCaret::new(node, position))
}
