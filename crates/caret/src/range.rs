//! Boundary points and ranges inside a generic editable tree.

/// A point in the tree: a character offset inside a text node, or a child
/// index inside an element or document node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Boundary<N> {
    pub node: N,
    pub offset: usize,
}

impl<N> Boundary<N> {
    pub const fn new(node: N, offset: usize) -> Self {
        Self { node, offset }
    }
}

/// A live-selection range between two boundary points.
///
/// Ordering is the host's business: hosts stringify a range whose start
/// lies after its end as empty, the same way a collapsed range would.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeRange<N> {
    pub start: Boundary<N>,
    pub end: Boundary<N>,
}

impl<N: Copy> TreeRange<N> {
    pub const fn new(start: Boundary<N>, end: Boundary<N>) -> Self {
        Self { start, end }
    }

    /// Zero-length range at `at`.
    pub const fn collapsed(at: Boundary<N>) -> Self {
        Self { start: at, end: at }
    }

    pub fn set_start(&mut self, start: Boundary<N>) {
        self.start = start;
    }
}

impl<N: PartialEq> TreeRange<N> {
    /// Both ends are the same boundary point.
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }
}
