use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::nav::markers;
use crate::types::Direction;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Attribute names are case-insensitive; they are stored lowercase.
fn attr_key(name: &str) -> Cow<'_, str> {
    if name.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(name.to_ascii_lowercase())
    } else {
        Cow::Borrowed(name)
    }
}

#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: String,

    // Content
    pub content: Content,

    // Computed flex direction (read by `ah-flex` containers)
    pub direction: Direction,

    /// Attributes, keyed by lowercase name. Navigation markers live here.
    pub attrs: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: "div".to_string(),
            content: Content::None,
            direction: Direction::Column,
            attrs: HashMap::new(),
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            tag: "span".to_string(),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            direction: Direction::Row,
            ..Default::default()
        }
    }

    /// Create an element with an arbitrary tag name.
    pub fn tag(name: impl Into<String>) -> Self {
        let tag = name.into().to_ascii_lowercase();
        Self {
            id: generate_id(&tag),
            tag,
            ..Default::default()
        }
    }

    pub fn link(label: impl Into<String>) -> Self {
        Self {
            id: generate_id("a"),
            tag: "a".to_string(),
            content: Content::Text(label.into()),
            ..Default::default()
        }
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self {
            id: generate_id("button"),
            tag: "button".to_string(),
            content: Content::Text(label.into()),
            ..Default::default()
        }
    }

    pub fn input() -> Self {
        Self {
            id: generate_id("input"),
            tag: "input".to_string(),
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    // Attributes
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn class(self, classes: impl Into<String>) -> Self {
        self.attr("class", classes)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(&*attr_key(name)).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(&*attr_key(name))
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into().to_ascii_lowercase(), value.into());
    }

    /// Remove an attribute. Returns true if it was present.
    pub fn remove_attr(&mut self, name: &str) -> bool {
        self.attrs.remove(&*attr_key(name)).is_some()
    }

    // Navigation markers
    pub fn ah_item(self) -> Self {
        self.attr(markers::ITEM, "")
    }

    pub fn ah_row(self) -> Self {
        self.attr(markers::ROW, "")
    }

    pub fn ah_col(self) -> Self {
        self.attr(markers::COL, "")
    }

    pub fn ah_flex(self) -> Self {
        self.attr(markers::FLEX, "")
    }

    pub fn ah_layout(self, axis: impl Into<String>) -> Self {
        self.attr(markers::LAYOUT, axis)
    }

    pub fn ah_depth(self, depth: u32) -> Self {
        self.attr(markers::DEPTH, depth.to_string())
    }

    /// Mark as an auto-registration region. An empty selector means the
    /// configured default.
    pub fn ah_auto(self, selector: impl Into<String>) -> Self {
        self.attr(markers::AUTO, selector)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Child elements in document order. Empty for text and empty content.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children.as_slice(),
            _ => &[],
        }
    }

    pub fn child_elements_mut(&mut self) -> &mut [Element] {
        match &mut self.content {
            Content::Children(children) => children.as_mut_slice(),
            _ => &mut [],
        }
    }
}
