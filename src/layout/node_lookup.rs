use crate::render::Coordinate;

use super::LayoutContext;

/// Finds the first rendered coordinate whose node id equals `id`.
///
/// A miss is returned as `None`, and an unmounted renderer also reads as a
/// miss. Alignment callers turn a miss into a reference resolution error.
#[must_use]
pub fn find_node<'a>(context: &'a LayoutContext, id: &str) -> Option<&'a Coordinate> {
    context
        .renderer()
        .ok()?
        .coordinates()
        .iter()
        .find(|point| point.node().id() == id)
}
