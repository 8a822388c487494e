//! Navigation configuration.

/// Selector used by `ah-auto` regions that don't name their own.
pub const DEFAULT_AUTO_SELECTOR: &str = "a, button, input, textarea, select, summary";

/// Item search depth for containers without an `ah-depth` marker.
pub const DEFAULT_DEPTH: u32 = 5;

/// Engine-wide navigation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavConfig {
    /// Depth used when a container has no (valid) `ah-depth` marker.
    pub default_depth: u32,

    /// Selector used by `ah-auto` regions with an empty value.
    pub auto_selector: String,

    /// If true, only Shift blocks arrow navigation; Ctrl and Alt chords
    /// navigate like plain arrows. By default any modifier blocks.
    pub block_on_shift_only: bool,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            default_depth: DEFAULT_DEPTH,
            auto_selector: DEFAULT_AUTO_SELECTOR.to_string(),
            block_on_shift_only: false,
        }
    }
}

impl NavConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default item search depth.
    pub fn default_depth(mut self, depth: u32) -> Self {
        self.default_depth = depth;
        self
    }

    /// Set the default auto-registration selector.
    pub fn auto_selector(mut self, selector: impl Into<String>) -> Self {
        self.auto_selector = selector.into();
        self
    }

    /// Only let Shift block navigation.
    pub fn block_on_shift_only(mut self) -> Self {
        self.block_on_shift_only = true;
        self
    }
}
