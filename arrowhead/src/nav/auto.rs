use super::markers;
use super::selector::Selector;
use crate::config::NavConfig;
use crate::element::{find_duplicate_id, find_element_mut, Element};
use crate::error::AutoRegisterError;

/// Mark every descendant of the region matching its `ah-auto` selector as an
/// item, then process nested `ah-auto` regions the same way.
///
/// Clears `ah-auto` from every region it processes.
/// Returns the number of elements that became items.
pub fn auto_register(
    root: &mut Element,
    region_id: &str,
    config: &NavConfig,
) -> Result<usize, AutoRegisterError> {
    let region = find_element_mut(root, region_id)
        .ok_or_else(|| AutoRegisterError::ElementNotFound(region_id.to_string()))?;
    register_region(region, config)
}

/// Process every `ah-auto` region in the tree.
///
/// Navigation identifies elements by ID, so the tree is rejected untouched
/// when an ID appears more than once.
pub fn auto_register_all(root: &mut Element, config: &NavConfig) -> Result<usize, AutoRegisterError> {
    if let Some(id) = find_duplicate_id(root) {
        return Err(AutoRegisterError::DuplicateId(id.to_string()));
    }
    if root.has_attr(markers::AUTO) {
        return register_region(root, config);
    }
    register_nested(root.child_elements_mut(), config)
}

fn register_region(region: &mut Element, config: &NavConfig) -> Result<usize, AutoRegisterError> {
    let source = match region.get_attr(markers::AUTO) {
        Some(value) if !value.trim().is_empty() => value,
        _ => config.auto_selector.as_str(),
    };
    let selector = Selector::parse(source).map_err(|source| AutoRegisterError::InvalidSelector {
        id: region.id.clone(),
        source,
    })?;

    let mut marked = 0;
    for path in matching_paths(region, &selector) {
        let Some(element) = element_at_mut(region, &path) else {
            continue;
        };
        if !element.has_attr(markers::ITEM) {
            element.set_attr(markers::ITEM, "");
            marked += 1;
        }
    }
    region.remove_attr(markers::AUTO);

    log::debug!("[auto_register] {} marked {} items", region.id, marked);

    Ok(marked + register_nested(region.child_elements_mut(), config)?)
}

/// Child-index paths, relative to the region, of every matching descendant.
///
/// Combinators see the region and the elements between it and the
/// candidate; elements above the region are out of scope.
fn matching_paths(region: &Element, selector: &Selector) -> Vec<Vec<usize>> {
    let mut found = Vec::new();
    collect_matching(region, selector, &mut Vec::new(), &mut Vec::new(), &mut found);
    found
}

fn collect_matching<'a>(
    element: &'a Element,
    selector: &Selector,
    ancestors: &mut Vec<&'a Element>,
    path: &mut Vec<usize>,
    found: &mut Vec<Vec<usize>>,
) {
    ancestors.push(element);
    for (index, child) in element.child_elements().iter().enumerate() {
        path.push(index);
        if selector.matches_in(child, ancestors) {
            found.push(path.clone());
        }
        collect_matching(child, selector, ancestors, path, found);
        path.pop();
    }
    ancestors.pop();
}

fn element_at_mut<'a>(element: &'a mut Element, path: &[usize]) -> Option<&'a mut Element> {
    path.iter()
        .try_fold(element, |current, &index| current.child_elements_mut().get_mut(index))
}

/// Regions handle their own subtree, so the walk stops at each one.
fn register_nested(children: &mut [Element], config: &NavConfig) -> Result<usize, AutoRegisterError> {
    let mut marked = 0;
    for child in children {
        if child.has_attr(markers::AUTO) {
            marked += register_region(child, config)?;
        } else {
            marked += register_nested(child.child_elements_mut(), config)?;
        }
    }
    Ok(marked)
}
