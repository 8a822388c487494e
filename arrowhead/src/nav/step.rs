use super::axis::{is_navigable, Dir};
use super::items::{container_depth, find_items};
use super::markers;
use crate::config::NavConfig;
use crate::element::{find_element, find_element_mut, Element};

/// Result of looking for the next item inside one container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Next {
    /// Sibling item to move to.
    Item(String),
    /// No item left in that direction; retry from the container's parent.
    Exit,
    /// The current element was not found among the container's items.
    None,
}

/// Temporarily marks an element as an item so it shows up in its
/// container's enumeration. The marker is removed on drop.
struct TransientItem<'a> {
    root: &'a mut Element,
    id: &'a str,
    marked: bool,
}

impl<'a> TransientItem<'a> {
    fn mark(root: &'a mut Element, id: &'a str) -> Self {
        let marked = match find_element_mut(root, id) {
            Some(el) if !is_navigable(el) => {
                el.set_attr(markers::ITEM, "");
                true
            }
            _ => false,
        };
        Self { root, id, marked }
    }

    fn tree(&self) -> &Element {
        self.root
    }
}

impl Drop for TransientItem<'_> {
    fn drop(&mut self) {
        if !self.marked {
            return;
        }
        if let Some(el) = find_element_mut(self.root, self.id) {
            el.remove_attr(markers::ITEM);
        }
    }
}

/// Find the item next to `current_id` within `container_id`, in `dir`.
pub fn find_next(
    root: &mut Element,
    container_id: &str,
    current_id: &str,
    dir: Dir,
    config: &NavConfig,
) -> Next {
    let guard = TransientItem::mark(root, current_id);
    let Some(container) = find_element(guard.tree(), container_id) else {
        return Next::None;
    };

    let depth = container_depth(container, config.default_depth);
    let mut items = find_items(container, depth, Some(current_id));
    let mut prev: Option<&Element> = None;

    while let Some(item) = items.next() {
        if item.id != current_id {
            prev = Some(item);
            continue;
        }

        let next = match dir {
            Dir::Fwd => items.next(),
            Dir::Bwd => prev,
        };
        return match next {
            Some(el) => Next::Item(el.id.clone()),
            None => Next::Exit,
        };
    }

    log::debug!(
        "[find_next] {} not found among items of {}",
        current_id,
        container_id
    );
    Next::None
}
