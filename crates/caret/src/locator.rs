use crate::error::CaretError;
use crate::range::{Boundary, TreeRange};
use crate::text_range::TextUnit;
use crate::traits::{CaretHost, Editable, EditableTree};

/// Number of characters preceding the caret inside `node`.
///
/// - text entry: the control's selection start
/// - legacy text range: start of the active selection relative to the element
/// - editable tree: length of the text from the element's start to the caret
///
/// # Errors
///
/// [`CaretError::NoActiveSelection`] when a legacy range or editable tree
/// has nothing selected, and [`CaretError::NotEditable`] when the host
/// offers no editing surface for `node`.
pub fn get_caret_position<H: CaretHost + ?Sized>(
    host: &mut H,
    node: H::Node,
) -> Result<usize, CaretError> {
    let editable = host.editable(node).ok_or(CaretError::NotEditable)?;
    let kind = editable.kind();

    let position = match editable {
        Editable::TextEntry(entry) => entry.selection_start(node),
        Editable::TextRange(source) => source
            .selection_text_range(node)
            .map(|range| range.start())
            .ok_or(CaretError::NoActiveSelection)?,
        Editable::Tree(tree) => {
            let Some(mut range) = tree.first_range() else {
                log::debug!(target: "caret.locator", "no selection range while reading {node:?}");
                return Err(CaretError::NoActiveSelection);
            };
            range.set_start(Boundary::new(node, 0));
            tree.stringify(&range).chars().count()
        }
    };

    log::trace!(target: "caret.locator", "get_caret_position({node:?}) via {kind:?} = {position}");
    Ok(position)
}

/// Place a collapsed caret `position` characters into `node`.
///
/// Positions past the end of the content clamp to the end. An editable tree
/// without any text node receives the caret at `(node, 0)`.
///
/// # Errors
///
/// [`CaretError::NotEditable`] when the host offers no editing surface.
pub fn set_caret_position<H: CaretHost + ?Sized>(
    host: &mut H,
    node: H::Node,
    position: usize,
) -> Result<(), CaretError> {
    let editable = host.editable(node).ok_or(CaretError::NotEditable)?;
    let kind = editable.kind();

    match editable {
        Editable::TextEntry(entry) => {
            entry.focus(node);
            entry.set_selection_range(node, position, position);
        }
        Editable::TextRange(source) => {
            let mut range = source.create_text_range(node);
            range.collapse(true);
            range.move_end(TextUnit::Character, position);
            range.move_start(TextUnit::Character, position);
            source.select(node, &range);
        }
        Editable::Tree(tree) => {
            let target = text_boundary_at(&*tree, node, position);
            tree.remove_all_ranges();
            tree.add_range(TreeRange::collapsed(target));
        }
    }

    log::trace!(target: "caret.locator", "set_caret_position({node:?}, {position}) via {kind:?}");
    Ok(())
}

/// Resolve a flattened character offset under `root` to a concrete
/// `(text node, local offset)` boundary.
///
/// Text nodes shorter than the remaining count are skipped and their length
/// subtracted; the first node that can hold the remainder wins. An offset on
/// a node edge therefore lands at the end of the earlier node.
pub fn text_boundary_at<T>(tree: &T, root: T::Node, position: usize) -> Boundary<T::Node>
where
    T: EditableTree + ?Sized,
    T::Node: Copy + std::fmt::Debug,
{
    let mut remaining = position;
    let mut last = None;

    for text in tree.text_nodes(root) {
        let len = tree.text_length(text);
        if len < remaining {
            remaining -= len;
            last = Some((text, len));
            continue;
        }
        return Boundary::new(text, remaining);
    }

    match last {
        Some((text, len)) => {
            log::debug!(
                target: "caret.locator",
                "caret position {position} exceeds text under {root:?}; clamped to end of {text:?}"
            );
            Boundary::new(text, len)
        }
        None => Boundary::new(root, 0),
    }
}
