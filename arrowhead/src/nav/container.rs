use super::axis::{axis_of, Axis};
use crate::element::{ancestors, Element};

/// Find the nearest ancestor container of the element with the given ID.
/// The element itself is never considered, even if it is a container.
pub fn find_container<'a>(root: &'a Element, id: &str) -> Option<(Axis, &'a Element)> {
    let found = ancestors(root, id)?
        .into_iter()
        .find_map(|el| axis_of(el).map(|axis| (axis, el)));

    log::trace!(
        "[find_container] {} -> {:?}",
        id,
        found.map(|(axis, el)| (axis, el.id.as_str()))
    );
    found
}
