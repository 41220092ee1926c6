//! Board Models
//!
//! Data structures for categories and their bookmarks, matching the stored layout.

use serde::{Deserialize, Serialize};

/// A single saved link
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Usage-limit note shown under the card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_info: Option<String>,
    /// Secondary link surfaced as a button on the card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_url: Option<String>,
}

/// A named, colored, ordered group of bookmarks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    /// Style class for the column's color bar
    pub color: String,
    #[serde(default)]
    pub bookmarks: Vec<Bookmark>,
}

impl Category {
    pub fn bookmark(&self, bookmark_id: &str) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| b.id == bookmark_id)
    }

    pub fn position(&self, bookmark_id: &str) -> Option<usize> {
        self.bookmarks.iter().position(|b| b.id == bookmark_id)
    }
}

/// Bookmark fields supplied by a form; the id is assigned by the store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkDraft {
    pub title: String,
    pub url: String,
    pub favicon: Option<String>,
    pub description: Option<String>,
    pub quota_info: Option<String>,
    pub app_url: Option<String>,
}

impl BookmarkDraft {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            ..Default::default()
        }
    }
}

/// Category fields supplied by a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDraft {
    pub title: String,
    pub color: String,
}

/// Partial update for a bookmark.
///
/// `None` leaves a field untouched. Optional bookmark fields take
/// `Some(None)` to clear and `Some(Some(v))` to set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkPatch {
    pub title: Option<String>,
    pub url: Option<String>,
    pub favicon: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub quota_info: Option<Option<String>>,
    pub app_url: Option<Option<String>>,
}

impl BookmarkPatch {
    /// Patch submitted by the edit form. Blank optional fields are cleared;
    /// the cached favicon is left alone.
    pub fn from_edit_form(title: &str, url: &str, description: &str, app_url: &str) -> Self {
        Self {
            title: Some(title.trim().to_string()),
            url: Some(url.trim().to_string()),
            description: Some(non_blank(description)),
            app_url: Some(non_blank(app_url)),
            ..Default::default()
        }
    }

    /// Merge into `bookmark`, leaving unspecified fields untouched
    pub fn apply_to(&self, bookmark: &mut Bookmark) {
        if let Some(title) = &self.title {
            bookmark.title = title.clone();
        }
        if let Some(url) = &self.url {
            bookmark.url = url.clone();
        }
        if let Some(favicon) = &self.favicon {
            bookmark.favicon = favicon.clone();
        }
        if let Some(description) = &self.description {
            bookmark.description = description.clone();
        }
        if let Some(quota_info) = &self.quota_info {
            bookmark.quota_info = quota_info.clone();
        }
        if let Some(app_url) = &self.app_url {
            bookmark.app_url = app_url.clone();
        }
    }
}

/// Color choices offered when creating a category
pub const CATEGORY_COLORS: &[(&str, &str)] = &[
    ("bg-blue-500", "Blue"),
    ("bg-orange-500", "Orange"),
    ("bg-emerald-600", "Emerald"),
    ("bg-violet-500", "Violet"),
    ("bg-indigo-500", "Indigo"),
    ("bg-slate-600", "Slate"),
    ("bg-amber-500", "Amber"),
    ("bg-rose-500", "Rose"),
    ("bg-teal-500", "Teal"),
];

/// Trim and turn blank form input into `None`
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
