use std::collections::HashSet;

mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
///
/// IDs are expected to be unique; with duplicates the first in document
/// order wins. See [`find_duplicate_id`].
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_elements() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_elements_mut() {
        if let Some(found) = find_element_mut(child, id) {
            return Some(found);
        }
    }

    None
}

/// The first ID seen a second time in a document-order walk, if any.
pub fn find_duplicate_id(root: &Element) -> Option<&str> {
    let mut seen = HashSet::new();
    let mut stack = vec![root];
    while let Some(element) = stack.pop() {
        if !seen.insert(element.id.as_str()) {
            return Some(element.id.as_str());
        }
        stack.extend(element.child_elements().iter().rev());
    }
    None
}

/// Ancestors of the element with the given ID, nearest first.
/// Returns None if the element is not in the tree; the root has no ancestors.
pub fn ancestors<'a>(root: &'a Element, id: &str) -> Option<Vec<&'a Element>> {
    let mut path = Vec::new();
    if !path_to(root, id, &mut path) {
        return None;
    }
    // path holds root..=target; drop the target and flip to nearest-first
    path.pop();
    path.reverse();
    Some(path)
}

fn path_to<'a>(element: &'a Element, id: &str, path: &mut Vec<&'a Element>) -> bool {
    path.push(element);
    if element.id == id {
        return true;
    }
    for child in element.child_elements() {
        if path_to(child, id, path) {
            return true;
        }
    }
    path.pop();
    false
}
