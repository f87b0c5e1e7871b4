use crate::host::LayoutHost;
use crate::position::find_position;
use crate::rect::{Position, Rectangle};

/// Rects reported by hosts carry sub-pixel noise; fractions within this
/// margin of the requested percentage still count as visible.
pub const VISIBILITY_TOLERANCE: f32 = 0.01;

/// Thresholds for [`element_is_in_view_with`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InViewOptions {
    /// Required visible fraction of the element's width, `0.0..=1.0`.
    pub percent_x: f32,
    /// Required visible fraction of the element's height, `0.0..=1.0`.
    pub percent_y: f32,
    pub tolerance: f32,
}

impl Default for InViewOptions {
    fn default() -> Self {
        Self {
            percent_x: 1.0,
            percent_y: 1.0,
            tolerance: VISIBILITY_TOLERANCE,
        }
    }
}

impl InViewOptions {
    pub fn with_percent(percent_x: f32, percent_y: f32) -> Self {
        Self {
            percent_x,
            percent_y,
            ..Self::default()
        }
    }
}

/// Whether the point at `offset` inside `element` is covered by something
/// that is neither `element` nor one of its descendants.
///
/// `offset` defaults to the rounded centre of the element's bounding box. A
/// point the host cannot resolve to any element counts as obscured.
pub fn is_obscured<H: LayoutHost + ?Sized>(
    host: &H,
    element: H::Node,
    offset: Option<Position>,
) -> bool {
    let offset = offset.unwrap_or_else(|| host.bounding_client_rect(element).center_offset());
    let point = find_position(host, element, true) + offset;

    let topmost = host.element_from_point(point.left, point.top);
    let obscured = match topmost {
        Some(hit) => !host.contains(element, hit),
        None => true,
    };

    log::trace!(
        target: "geometry.visibility",
        "is_obscured({element:?}) at ({}, {}): topmost={topmost:?} obscured={obscured}",
        point.left,
        point.top
    );
    obscured
}

/// Whether at least `percent_x` of the element's width and `percent_y` of its
/// height are visible inside every ancestor element.
pub fn element_is_in_view<H: LayoutHost + ?Sized>(
    host: &H,
    element: H::Node,
    percent_x: f32,
    percent_y: f32,
) -> bool {
    element_is_in_view_with(
        host,
        element,
        &InViewOptions::with_percent(percent_x, percent_y),
    )
}

/// [`element_is_in_view`] with an explicit tolerance.
///
/// Being clipped by any single ancestor fails the check; an element without
/// ancestors is trivially in view.
pub fn element_is_in_view_with<H: LayoutHost + ?Sized>(
    host: &H,
    element: H::Node,
    options: &InViewOptions,
) -> bool {
    let element_rect = host.bounding_client_rect(element);

    let mut ancestor_rects: Vec<Rectangle> = Vec::new();
    let mut current = host.parent_element(element);
    while let Some(ancestor) = current {
        ancestor_rects.push(host.bounding_client_rect(ancestor));
        current = host.parent_element(ancestor);
    }

    let in_view = ancestor_rects
        .iter()
        .all(|ancestor_rect| fits_within(&element_rect, ancestor_rect, options));

    log::trace!(
        target: "geometry.visibility",
        "element_is_in_view({element:?}, {}, {}) = {in_view} against {} ancestors",
        options.percent_x,
        options.percent_y,
        ancestor_rects.len()
    );
    in_view
}

// A zero-sized axis divides 0.0 by 0.0; NaN never compares greater, so such an
// element is never in view once it has an ancestor.
fn fits_within(element: &Rectangle, ancestor: &Rectangle, options: &InViewOptions) -> bool {
    let (visible_x, visible_y) = element.visible_extent_within(ancestor);
    let fraction_x = visible_x / element.width;
    let fraction_y = visible_y / element.height;
    fraction_x + options.tolerance > options.percent_x
        && fraction_y + options.tolerance > options.percent_y
}
