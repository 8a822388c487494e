use super::markers;
use crate::element::Element;
use crate::event::Key;

/// Orientation of a navigation container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Col,
}

/// Movement along a container's axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Fwd,
    Bwd,
}

impl Axis {
    /// Direction a key moves along this axis, or None if the key doesn't
    /// apply (e.g. Up in a row).
    pub fn dir_for(&self, key: Key) -> Option<Dir> {
        match (self, key) {
            (Axis::Row, Key::Left) | (Axis::Col, Key::Up) => Some(Dir::Bwd),
            (Axis::Row, Key::Right) | (Axis::Col, Key::Down) => Some(Dir::Fwd),
            _ => None,
        }
    }
}

/// Get the navigation axis of an element, if it is a container.
///
/// Precedence: `ah-layout` ("row"/"col", any case), then `ah-row`, then
/// `ah-col`, then `ah-flex` (computed from the element's flex direction).
pub fn axis_of(element: &Element) -> Option<Axis> {
    if let Some(layout) = element.get_attr(markers::LAYOUT) {
        if layout.eq_ignore_ascii_case("row") {
            return Some(Axis::Row);
        }
        if layout.eq_ignore_ascii_case("col") {
            return Some(Axis::Col);
        }
    }
    if element.has_attr(markers::ROW) {
        return Some(Axis::Row);
    }
    if element.has_attr(markers::COL) {
        return Some(Axis::Col);
    }
    if element.has_attr(markers::FLEX) {
        if element.direction.as_str().starts_with("column") {
            return Some(Axis::Col);
        }
        return Some(Axis::Row);
    }
    None
}

/// True if the element is an item or a container.
pub fn is_navigable(element: &Element) -> bool {
    element.has_attr(markers::ITEM) || axis_of(element).is_some()
}
