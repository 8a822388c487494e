use crossterm::event::{Event as CrosstermEvent, KeyEventKind};

use crate::config::NavConfig;
use crate::element::{find_element, Element};
use crate::event::{Event, Key, Modifiers};
use crate::nav::{self, is_navigable, markers};

/// What happened to a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Focus moved; the host should suppress the key's default behavior.
    Moved { from: String, to: String },
    /// Navigation did not apply; default behavior proceeds.
    Ignored,
}

impl KeyOutcome {
    pub fn is_handled(&self) -> bool {
        matches!(self, KeyOutcome::Moved { .. })
    }
}

/// Tracks which element is currently focused and processes events.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
    config: NavConfig,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: NavConfig) -> Self {
        Self {
            focused: None,
            config,
        }
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        if self.focused.is_some() {
            self.focused = None;
            true
        } else {
            false
        }
    }

    /// Focus the first item in the tree.
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_first(&mut self, root: &Element) -> Option<String> {
        let first = collect_items(root).into_iter().next()?;
        self.focus(&first).then_some(first)
    }

    fn blocked_by(&self, modifiers: Modifiers) -> bool {
        if self.config.block_on_shift_only {
            modifiers.shift
        } else {
            !modifiers.none()
        }
    }

    /// Handle a key press on the focused element.
    ///
    /// Only plain arrow keys on a navigable focused element are considered.
    pub fn handle_key(&mut self, root: &mut Element, key: Key, modifiers: Modifiers) -> KeyOutcome {
        if !key.is_arrow() || self.blocked_by(modifiers) {
            return KeyOutcome::Ignored;
        }

        let Some(current) = self.focused.clone() else {
            return KeyOutcome::Ignored;
        };
        if !find_element(root, &current).is_some_and(is_navigable) {
            log::trace!("[focus] {} is not navigable, ignoring {:?}", current, key);
            return KeyOutcome::Ignored;
        }

        match nav::handle_key(root, &current, key, &self.config) {
            Some(target) if target != current => {
                log::debug!("[focus] {:?}: {} -> {}", key, current, target);
                self.focused = Some(target.clone());
                KeyOutcome::Moved {
                    from: current,
                    to: target,
                }
            }
            _ => KeyOutcome::Ignored,
        }
    }

    /// Process raw crossterm events and produce high-level events.
    ///
    /// Arrow keys that move focus become a Blur/Focus pair; every other key
    /// press is passed through as `Event::Key`.
    pub fn process_events(&mut self, raw: &[CrosstermEvent], root: &mut Element) -> Vec<Event> {
        let mut events = Vec::new();

        for raw_event in raw {
            match raw_event {
                CrosstermEvent::Key(key_event) => {
                    // Only process key press events (not release/repeat on some terminals)
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }

                    let key: Key = key_event.code.into();
                    let modifiers: Modifiers = key_event.modifiers.into();

                    if let KeyOutcome::Moved { from, to } = self.handle_key(root, key, modifiers) {
                        events.push(Event::Blur {
                            target: from,
                            new_target: Some(to.clone()),
                        });
                        events.push(Event::Focus { target: to });
                        continue;
                    }

                    events.push(Event::Key {
                        target: self.focused.clone(),
                        key,
                        modifiers,
                    });
                }

                CrosstermEvent::Resize(width, height) => {
                    events.push(Event::Resize {
                        width: *width,
                        height: *height,
                    });
                }

                _ => {}
            }
        }

        events
    }
}

/// Collect the IDs of all `ah-item` elements in tree order.
pub fn collect_items(element: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_items_recursive(element, &mut result);
    result
}

fn collect_items_recursive(element: &Element, result: &mut Vec<String>) {
    if element.has_attr(markers::ITEM) {
        result.push(element.id.clone());
    }
    for child in element.child_elements() {
        collect_items_recursive(child, result);
    }
}
