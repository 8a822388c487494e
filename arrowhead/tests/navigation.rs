use arrowhead::nav::resolve_focus;
use arrowhead::{
    find_element, handle_key, Element, FocusState, Key, KeyOutcome, Modifiers, NavConfig,
};

/// A catalog page: a column holding a header and two rows of titles.
fn catalog() -> Element {
    Element::col()
        .id("page")
        .ah_col()
        .child(Element::box_().id("header").child(Element::text("Popular")))
        .child(
            Element::row()
                .id("row1")
                .ah_row()
                .child(Element::box_().id("a").ah_item())
                .child(Element::box_().id("b").ah_item())
                .child(Element::box_().id("c").ah_item()),
        )
        .child(
            Element::row()
                .id("row2")
                .ah_row()
                .child(Element::box_().id("d").ah_item())
                .child(Element::box_().id("e").ah_item()),
        )
}

/// A row with a nested row between two items.
fn shelf() -> Element {
    Element::row()
        .id("shelf")
        .ah_row()
        .child(Element::box_().id("x").ah_item())
        .child(
            Element::row()
                .id("inner")
                .ah_row()
                .child(Element::box_().id("i1").ah_item())
                .child(Element::box_().id("i2").ah_item()),
        )
        .child(Element::box_().id("y").ah_item())
}

fn press(root: &mut Element, from: &str, key: Key) -> Option<String> {
    handle_key(root, from, key, &NavConfig::default())
}

// ============================================================================
// Key Handling
// ============================================================================

#[test]
fn test_right_moves_within_row() {
    let mut root = catalog();
    assert_eq!(press(&mut root, "b", Key::Right), Some("c".into()));
    assert_eq!(press(&mut root, "b", Key::Left), Some("a".into()));
}

#[test]
fn test_right_at_row_end_is_ignored() {
    // row1 is exhausted, the page column doesn't use Right, and the page
    // has no container above it.
    let mut root = catalog();
    assert_eq!(press(&mut root, "c", Key::Right), None);
    assert_eq!(press(&mut root, "d", Key::Left), None);
}

#[test]
fn test_down_bubbles_to_column() {
    let mut root = catalog();
    assert_eq!(press(&mut root, "a", Key::Down), Some("d".into()));
    assert_eq!(press(&mut root, "c", Key::Down), Some("d".into()));
    assert_eq!(press(&mut root, "e", Key::Up), Some("a".into()));
}

#[test]
fn test_column_edges_are_ignored() {
    let mut root = catalog();
    assert_eq!(press(&mut root, "a", Key::Up), None);
    assert_eq!(press(&mut root, "d", Key::Down), None);
}

#[test]
fn test_focused_container_moves_as_item() {
    let mut root = catalog();
    assert_eq!(press(&mut root, "row1", Key::Down), Some("d".into()));
}

#[test]
fn test_bubbles_through_nested_rows() {
    let mut root = shelf();
    assert_eq!(press(&mut root, "x", Key::Right), Some("i1".into()));
    assert_eq!(press(&mut root, "y", Key::Left), Some("i2".into()));
    assert_eq!(press(&mut root, "i1", Key::Right), Some("i2".into()));
    assert_eq!(press(&mut root, "i2", Key::Right), Some("y".into()));
    assert_eq!(press(&mut root, "i1", Key::Left), Some("x".into()));
}

#[test]
fn test_no_markers_left_behind() {
    let mut root = Element::row()
        .id("row")
        .ah_row()
        .child(Element::box_().id("a").ah_item())
        .child(Element::box_().id("plain"))
        .child(Element::box_().id("c").ah_item());

    assert_eq!(press(&mut root, "plain", Key::Right), Some("c".into()));
    assert_eq!(press(&mut root, "plain", Key::Up), None);
    assert!(!find_element(&root, "plain").unwrap().has_attr("ah-item"));
}

// ============================================================================
// Virtual Focus
// ============================================================================

#[test]
fn test_virtual_focus_first_and_last() {
    let root = shelf();
    let config = NavConfig::default();

    assert_eq!(
        resolve_focus(&root, "inner", Key::Right, &config),
        Some("i1".into())
    );
    assert_eq!(
        resolve_focus(&root, "inner", Key::Left, &config),
        Some("i2".into())
    );
    // Keys across the axis default to the first item
    assert_eq!(
        resolve_focus(&root, "inner", Key::Up, &config),
        Some("i1".into())
    );
    assert_eq!(resolve_focus(&root, "x", Key::Left, &config), Some("x".into()));
}

#[test]
fn test_virtual_focus_descends_recursively() {
    let root = Element::col().id("page").ah_col().child(
        Element::col()
            .id("section")
            .ah_col()
            .child(
                Element::row()
                    .id("top")
                    .ah_row()
                    .child(Element::box_().id("t1").ah_item())
                    .child(Element::box_().id("t2").ah_item()),
            )
            .child(
                Element::row()
                    .id("bottom")
                    .ah_row()
                    .child(Element::box_().id("b1").ah_item())
                    .child(Element::box_().id("b2").ah_item()),
            ),
    );
    let config = NavConfig::default();

    assert_eq!(
        resolve_focus(&root, "section", Key::Down, &config),
        Some("t1".into())
    );
    // Up picks the last row, then Up is across that row's axis
    assert_eq!(
        resolve_focus(&root, "section", Key::Up, &config),
        Some("b1".into())
    );
}

#[test]
fn test_virtual_focus_dead_ends() {
    let root = Element::row()
        .id("row")
        .ah_row()
        .child(Element::box_().id("a").ah_item())
        .child(Element::row().id("empty").ah_row())
        .child(Element::row().id("empty-item").ah_row().ah_item())
        .child(Element::box_().id("plain"));
    let config = NavConfig::default();

    assert_eq!(resolve_focus(&root, "empty", Key::Right, &config), None);
    assert_eq!(
        resolve_focus(&root, "empty-item", Key::Right, &config),
        Some("empty-item".into())
    );
    assert_eq!(resolve_focus(&root, "plain", Key::Right, &config), None);
    assert_eq!(resolve_focus(&root, "missing", Key::Right, &config), None);

    let mut root = root;
    assert_eq!(press(&mut root, "a", Key::Right), None);
}

// ============================================================================
// Focus State
// ============================================================================

#[test]
fn test_focus_state_moves_focus() {
    let mut root = catalog();
    let mut focus = FocusState::new();
    focus.focus("b");

    let outcome = focus.handle_key(&mut root, Key::Right, Modifiers::new());
    assert_eq!(
        outcome,
        KeyOutcome::Moved {
            from: "b".into(),
            to: "c".into()
        }
    );
    assert!(outcome.is_handled());
    assert_eq!(focus.focused(), Some("c"));

    let outcome = focus.handle_key(&mut root, Key::Right, Modifiers::new());
    assert_eq!(outcome, KeyOutcome::Ignored);
    assert_eq!(focus.focused(), Some("c"));
}

#[test]
fn test_focus_state_ignores_non_arrows_and_modifiers() {
    let mut root = catalog();
    let mut focus = FocusState::new();
    focus.focus("b");

    for (key, modifiers) in [
        (Key::Enter, Modifiers::new()),
        (Key::Tab, Modifiers::new()),
        (Key::Right, Modifiers::shift()),
        (Key::Right, Modifiers::ctrl()),
        (Key::Right, Modifiers::alt()),
        (Key::Right, Modifiers::meta()),
    ] {
        assert_eq!(focus.handle_key(&mut root, key, modifiers), KeyOutcome::Ignored);
    }
    assert_eq!(focus.focused(), Some("b"));
}

#[test]
fn test_focus_state_shift_only_policy() {
    let mut root = catalog();
    let mut focus = FocusState::with_config(NavConfig::new().block_on_shift_only());
    focus.focus("b");

    assert_eq!(
        focus.handle_key(&mut root, Key::Right, Modifiers::shift()),
        KeyOutcome::Ignored
    );
    assert!(focus
        .handle_key(&mut root, Key::Right, Modifiers::ctrl())
        .is_handled());
    assert_eq!(focus.focused(), Some("c"));
}

#[test]
fn test_focus_state_requires_navigable_focus() {
    let mut root = catalog();
    let mut focus = FocusState::new();

    // Nothing focused
    assert_eq!(
        focus.handle_key(&mut root, Key::Right, Modifiers::new()),
        KeyOutcome::Ignored
    );

    // Focused element without markers
    focus.focus("header");
    assert_eq!(
        focus.handle_key(&mut root, Key::Down, Modifiers::new()),
        KeyOutcome::Ignored
    );
    assert_eq!(focus.focused(), Some("header"));
}

#[test]
fn test_focus_state_focus_blur() {
    let mut focus = FocusState::new();

    assert_eq!(focus.focused(), None);
    assert!(focus.focus("a"));
    assert!(!focus.focus("a"));
    assert!(focus.blur());
    assert!(!focus.blur());
}

#[test]
fn test_focus_first() {
    let root = catalog();
    let mut focus = FocusState::new();

    assert_eq!(focus.focus_first(&root), Some("a".into()));
    assert_eq!(focus.focus_first(&root), None);
    assert_eq!(focus.focused(), Some("a"));
}
