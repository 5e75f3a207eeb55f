//! Per-link focus state for navigation lists

use std::collections::HashMap;

/// Maps link identifiers to whether they currently hold focus.
///
/// Last event wins; unknown links are unfocused.
#[derive(Debug, Clone, Default)]
pub struct FocusTracker {
    focused: HashMap<String, bool>,
}

impl FocusTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a link as focused
    pub fn on_focus(&mut self, link_id: &str) {
        self.focused.insert(link_id.to_string(), true);
    }

    /// Mark a link as unfocused
    pub fn on_blur(&mut self, link_id: &str) {
        self.focused.insert(link_id.to_string(), false);
    }

    /// Whether a link is focused
    pub fn is_focused(&self, link_id: &str) -> bool {
        self.focused.get(link_id).copied().unwrap_or(false)
    }

    /// Some focused link id, if any.
    ///
    /// Focus and blur normally arrive in pairs so at most one link is
    /// focused at a time.
    pub fn focused(&self) -> Option<&str> {
        self.focused
            .iter()
            .find_map(|(id, focused)| focused.then_some(id.as_str()))
    }

    /// Forget all focus state
    pub fn reset(&mut self) {
        self.focused.clear();
    }
}
