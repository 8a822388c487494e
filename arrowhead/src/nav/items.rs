use std::iter::FusedIterator;
use std::slice;

use super::axis::axis_of;
use super::markers;
use crate::element::Element;

/// Item search depth of a container: its `ah-depth` marker, or `default`
/// when the marker is missing or not a number. Negative values mean 0.
pub fn container_depth(container: &Element, default: u32) -> u32 {
    let Some(raw) = container.get_attr(markers::DEPTH) else {
        return default;
    };
    match raw.trim().parse::<i64>() {
        Ok(depth) => depth.clamp(0, u32::MAX as i64) as u32,
        Err(_) => {
            log::trace!("[container_depth] {} has invalid depth {:?}", container.id, raw);
            default
        }
    }
}

/// Enumerate the items of a container in document order.
///
/// Items and nested containers are yielded without descending into them.
/// Other elements are descended into while `depth` allows, except `exclude`.
pub fn find_items<'a>(container: &'a Element, depth: u32, exclude: Option<&'a str>) -> Items<'a> {
    Items {
        stack: vec![Frame {
            children: container.child_elements().iter(),
            depth,
        }],
        exclude,
    }
}

struct Frame<'a> {
    children: slice::Iter<'a, Element>,
    depth: u32,
}

/// Iterator returned by [`find_items`].
pub struct Items<'a> {
    stack: Vec<Frame<'a>>,
    exclude: Option<&'a str>,
}

impl<'a> Iterator for Items<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<&'a Element> {
        loop {
            let frame = self.stack.last_mut()?;
            let depth = frame.depth;
            let Some(child) = frame.children.next() else {
                self.stack.pop();
                continue;
            };

            if child.has_attr(markers::ITEM) || axis_of(child).is_some() {
                return Some(child);
            }

            if depth > 0 && self.exclude != Some(child.id.as_str()) {
                self.stack.push(Frame {
                    children: child.child_elements().iter(),
                    depth: depth - 1,
                });
            }
        }
    }
}

impl FusedIterator for Items<'_> {}
