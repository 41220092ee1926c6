//! Stored Data Migration
//!
//! Records written by older builds lack `quotaInfo` / `appUrl`. On load those
//! are filled from the built-in dataset entry with the same category and
//! bookmark id. Values the user already has are never replaced.

use crate::models::{Bookmark, Category};

fn is_missing(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

/// Backfill missing fields using `lookup(category_id, bookmark_id)`
pub fn migrate_bookmarks<F>(categories: Vec<Category>, lookup: F) -> Vec<Category>
where
    F: Fn(&str, &str) -> Option<Bookmark>,
{
    categories
        .into_iter()
        .map(|mut category| {
            for bookmark in category.bookmarks.iter_mut() {
                if !is_missing(&bookmark.quota_info) && !is_missing(&bookmark.app_url) {
                    continue;
                }
                let Some(reference) = lookup(&category.id, &bookmark.id) else {
                    continue;
                };
                if is_missing(&bookmark.quota_info) && reference.quota_info.is_some() {
                    bookmark.quota_info = reference.quota_info;
                }
                if is_missing(&bookmark.app_url) && reference.app_url.is_some() {
                    bookmark.app_url = reference.app_url;
                }
            }
            category
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::{default_bookmark, default_categories};

    fn stored_chat(quota_info: Option<&str>) -> Vec<Category> {
        vec![Category {
            id: "ai-chat".to_string(),
            title: "Chat & Assistant".to_string(),
            color: "bg-blue-500".to_string(),
            bookmarks: vec![Bookmark {
                id: "chatgpt".to_string(),
                title: "ChatGPT".to_string(),
                url: "https://chat.openai.com".to_string(),
                favicon: None,
                description: None,
                quota_info: quota_info.map(str::to_string),
                app_url: None,
            }],
        }]
    }

    #[test]
    fn test_backfills_missing_quota() {
        let migrated = migrate_bookmarks(stored_chat(None), default_bookmark);
        assert_eq!(
            migrated[0].bookmarks[0].quota_info.as_deref(),
            Some("免費版每月有使用限制")
        );
        // No default appUrl for chatgpt: stays absent
        assert_eq!(migrated[0].bookmarks[0].app_url, None);
    }

    #[test]
    fn test_keeps_user_value() {
        let migrated = migrate_bookmarks(stored_chat(Some("custom")), default_bookmark);
        assert_eq!(migrated[0].bookmarks[0].quota_info.as_deref(), Some("custom"));
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let migrated = migrate_bookmarks(stored_chat(Some("")), default_bookmark);
        assert_eq!(
            migrated[0].bookmarks[0].quota_info.as_deref(),
            Some("免費版每月有使用限制")
        );
    }

    #[test]
    fn test_backfills_app_url() {
        let mut stored = default_categories();
        for category in stored.iter_mut() {
            for bookmark in category.bookmarks.iter_mut() {
                bookmark.app_url = None;
            }
        }
        let migrated = migrate_bookmarks(stored, default_bookmark);
        let glide = migrated
            .iter()
            .find(|c| c.id == "no-code")
            .and_then(|c| c.bookmark("glide"))
            .unwrap();
        assert_eq!(glide.app_url.as_deref(), Some("https://shareholder-gift.glide.page"));
    }

    #[test]
    fn test_unknown_bookmark_untouched() {
        let mut stored = stored_chat(None);
        stored[0].bookmarks[0].id = "1700000000000".to_string();
        let migrated = migrate_bookmarks(stored.clone(), default_bookmark);
        assert_eq!(migrated, stored);
    }

    #[test]
    fn test_idempotent() {
        let once = migrate_bookmarks(stored_chat(None), default_bookmark);
        let twice = migrate_bookmarks(once.clone(), default_bookmark);
        assert_eq!(once, twice);
    }
}
