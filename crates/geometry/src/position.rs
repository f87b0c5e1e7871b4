use crate::host::LayoutHost;
use crate::rect::Position;

/// Page-relative position of `element`.
///
/// Scroll is summed over every node from `element` up to the root, while
/// offsets are summed only over `element` and its chain of offset parents.
/// With `exclude_scroll` the accumulated scroll is subtracted, which yields
/// the element's position relative to the visible viewport.
///
/// A detached element simply stops the walk early; the partial totals are
/// returned as-is.
pub fn find_position<H: LayoutHost + ?Sized>(
    host: &H,
    element: H::Node,
    exclude_scroll: bool,
) -> Position {
    let mut offset = Position::ZERO;
    let mut scroll = Position::ZERO;

    let mut offset_parent = Some(element);
    let mut current = Some(element);
    let mut depth = 0usize;

    while let Some(node) = current {
        scroll += host.scroll_offset(node).unwrap_or_default();

        if offset_parent == Some(node) {
            offset += host.offset_position(node);
            offset_parent = host.offset_parent(node);
        }

        current = host.parent_node(node);
        depth += 1;
    }

    if let Some(pending) = offset_parent {
        // The offset-parent chain left the ancestor chain; its offsets are unreachable.
        log::debug!(
            target: "geometry.position",
            "offset parent {pending:?} is not an ancestor of {element:?}; offsets are partial"
        );
    }

    if exclude_scroll {
        offset = offset - scroll;
    }

    log::trace!(
        target: "geometry.position",
        "find_position({element:?}, {exclude_scroll}) = {offset:?} over {depth} nodes"
    );
    offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_host::FlatTree;

    #[test]
    fn offsets_add_along_offset_parent_chain() {
        let mut tree = FlatTree::new();
        let a = tree.push(None, (10.0, 1.0));
        let b = tree.push(Some(a), (20.0, 2.0));
        let c = tree.push(Some(b), (30.0, 3.0));
        tree.positioned_chain();

        let p = find_position(&tree, c, false);
        assert_eq!(p, Position::new(60.0, 6.0));
    }

    #[test]
    fn non_offset_parent_ancestors_do_not_contribute_offsets() {
        let mut tree = FlatTree::new();
        let a = tree.push(None, (10.0, 0.0));
        let b = tree.push(Some(a), (500.0, 0.0));
        let c = tree.push(Some(b), (30.0, 0.0));
        // `c` is positioned against `a`, skipping `b`.
        tree.set_offset_parent(c, Some(a));
        tree.set_offset_parent(b, Some(a));

        assert_eq!(find_position(&tree, c, false).top, 40.0);
    }

    #[test]
    fn scroll_counts_for_every_ancestor_including_self() {
        let mut tree = FlatTree::new();
        let a = tree.push(None, (0.0, 0.0));
        let b = tree.push(Some(a), (0.0, 0.0));
        let c = tree.push(Some(b), (100.0, 50.0));
        tree.positioned_chain();
        tree.set_scroll(a, (5.0, 1.0));
        tree.set_scroll(b, (7.0, 2.0));
        tree.set_scroll(c, (11.0, 3.0));

        let with = find_position(&tree, c, false);
        let without = find_position(&tree, c, true);
        assert_eq!(with, Position::new(100.0, 50.0));
        assert_eq!(without, Position::new(100.0 - 23.0, 50.0 - 6.0));
    }

    #[test]
    fn node_without_scroll_support_counts_as_zero() {
        let mut tree = FlatTree::new();
        let a = tree.push(None, (4.0, 4.0));
        tree.disable_scroll(a);
        assert_eq!(find_position(&tree, a, true), Position::new(4.0, 4.0));
    }

    #[test]
    fn lone_node_returns_its_own_offset() {
        let mut tree = FlatTree::new();
        let a = tree.push(None, (3.0, 9.0));
        assert_eq!(find_position(&tree, a, false), Position::new(3.0, 9.0));
    }
}
