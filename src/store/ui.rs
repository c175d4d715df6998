//! UI slice - editor/viewer mode, current tool, sidebar visibility.
//!
//! Gesture flags (drawing, moving, resizing) are not stored here; they live in
//! the interaction controller's state machine.

use crate::types::{ToolType, UiMode};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiState {
    pub mode: UiMode,
    pub current_tool: ToolType,
    pub show_sidebar: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            mode: UiMode::View,
            current_tool: ToolType::Select,
            show_sidebar: true,
        }
    }
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.show_sidebar = !self.show_sidebar;
    }
}
