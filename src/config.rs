//! Board Configuration
//!
//! Tunables read once at startup and shared through context.

use leptos_dragdrop::{CLICK_SUPPRESS_MS, DRAG_THRESHOLD_PX};

/// localStorage key; bump the suffix when the stored shape changes incompatibly
pub const STORAGE_KEY: &str = "papaly-bookmarks-v3";

#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    pub storage_key: String,
    /// Pointer travel before a press becomes a drag
    pub drag_threshold_px: i32,
    pub click_suppress_ms: u32,
    pub log_level: log::Level,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            drag_threshold_px: DRAG_THRESHOLD_PX,
            click_suppress_ms: CLICK_SUPPRESS_MS,
            log_level: if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info },
        }
    }
}
