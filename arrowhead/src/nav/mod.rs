//! Spatial navigation over containers and items.
//!
//! Elements opt in through attribute markers (see [`markers`]). A container
//! has an axis, row or column, and arrow keys along that axis move focus
//! between the container's items. Keys that run off the end of a container,
//! or don't apply to its axis, bubble up to the enclosing container.

mod auto;
mod axis;
mod container;
mod items;
mod selector;
mod step;
mod vfocus;

pub use auto::{auto_register, auto_register_all};
pub use axis::{axis_of, is_navigable, Axis, Dir};
pub use container::find_container;
pub use items::{container_depth, find_items, Items};
pub use selector::Selector;
pub use step::{find_next, Next};
pub use vfocus::resolve_focus;

use crate::config::NavConfig;
use crate::element::Element;
use crate::event::Key;

/// Attribute names the engine reads and writes.
pub mod markers {
    /// Explicit axis: "row" or "col", any case.
    pub const LAYOUT: &str = "ah-layout";
    pub const ROW: &str = "ah-row";
    pub const COL: &str = "ah-col";
    /// Axis follows the element's computed flex direction.
    pub const FLEX: &str = "ah-flex";
    pub const ITEM: &str = "ah-item";
    /// Auto-registration region; value is a selector, empty for the default.
    pub const AUTO: &str = "ah-auto";
    /// Item search depth override.
    pub const DEPTH: &str = "ah-depth";
}

/// Resolve an arrow key pressed on `current_id` to the element that should
/// receive focus. Returns None if the key should be left to the host.
pub fn handle_key(root: &mut Element, current_id: &str, key: Key, config: &NavConfig) -> Option<String> {
    let mut current = current_id.to_string();

    loop {
        let Some((axis, container_id)) =
            find_container(root, &current).map(|(axis, el)| (axis, el.id.clone()))
        else {
            log::debug!("[handle_key] {:?} from {}: no container, ignored", key, current);
            return None;
        };

        let Some(dir) = axis.dir_for(key) else {
            log::trace!(
                "[handle_key] {:?} does not apply to {:?} container {}, bubbling",
                key,
                axis,
                container_id
            );
            current = container_id;
            continue;
        };

        match find_next(root, &container_id, &current, dir, config) {
            Next::Item(target) => {
                let focus = resolve_focus(root, &target, key, config);
                log::debug!(
                    "[handle_key] {:?} from {} in {}: target={} focus={:?}",
                    key,
                    current,
                    container_id,
                    target,
                    focus
                );
                return focus;
            }
            Next::Exit => {
                log::trace!("[handle_key] {} exhausted in {:?}, bubbling", container_id, dir);
                current = container_id;
            }
            Next::None => {
                log::debug!("[handle_key] {} not an item of {}, ignored", current, container_id);
                return None;
            }
        }
    }
}
