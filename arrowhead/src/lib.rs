pub mod config;
pub mod element;
pub mod error;
pub mod event;
pub mod focus;
pub mod listener;
pub mod nav;
pub mod types;

pub use config::{NavConfig, DEFAULT_AUTO_SELECTOR, DEFAULT_DEPTH};
pub use element::{find_duplicate_id, find_element, Element};
pub use error::{AutoRegisterError, SelectorError};
pub use event::{Event, Key, Modifiers};
pub use focus::{collect_items, FocusState, KeyOutcome};
pub use listener::KeyListener;
pub use nav::{auto_register, auto_register_all, axis_of, handle_key, is_navigable, Axis, Dir, Next};
pub use types::*;
