use super::axis::{axis_of, Dir};
use super::items::{container_depth, find_items};
use super::markers;
use crate::config::NavConfig;
use crate::element::{find_element, Element};
use crate::event::Key;

/// Resolve a navigation target to the element that should receive focus.
///
/// Containers resolve to their first item (or last, if `key` moves backward
/// along the container's axis), recursively. Plain items resolve to
/// themselves. Returns None if the target leads to nothing focusable.
pub fn resolve_focus(root: &Element, target_id: &str, key: Key, config: &NavConfig) -> Option<String> {
    let target = find_element(root, target_id)?;
    let resolved = resolve_element(target, key, config).map(|el| el.id.clone());
    log::trace!("[resolve_focus] {} -> {:?}", target_id, resolved);
    resolved
}

fn resolve_element<'a>(element: &'a Element, key: Key, config: &NavConfig) -> Option<&'a Element> {
    if let Some(axis) = axis_of(element) {
        let depth = container_depth(element, config.default_depth);
        let mut items = find_items(element, depth, None);
        let edge = match axis.dir_for(key).unwrap_or(Dir::Fwd) {
            Dir::Fwd => items.next(),
            Dir::Bwd => items.last(),
        };
        if let Some(edge) = edge {
            return resolve_element(edge, key, config);
        }
    }

    element.has_attr(markers::ITEM).then_some(element)
}
