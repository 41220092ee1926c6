//! Snapshot Operations
//!
//! Pure functions from the current board to the next one. Each returns
//! `None` when the call is a no-op, so the caller keeps (and does not
//! re-persist) the current snapshot. Untouched categories are cloned as-is.

use crate::models::{Bookmark, BookmarkPatch, Category};

fn find_category<'a>(categories: &'a [Category], category_id: &str) -> Option<&'a Category> {
    categories.iter().find(|c| c.id == category_id)
}

/// Rebuild the board with one category replaced
fn replace_category(categories: &[Category], updated: Category) -> Vec<Category> {
    categories
        .iter()
        .map(|c| if c.id == updated.id { updated.clone() } else { c.clone() })
        .collect()
}

/// Append `bookmark` to the end of the category
pub fn with_bookmark_added(categories: &[Category], category_id: &str, bookmark: Bookmark) -> Option<Vec<Category>> {
    let category = find_category(categories, category_id)?;
    if category.bookmark(&bookmark.id).is_some() {
        return None;
    }
    let mut updated = category.clone();
    updated.bookmarks.push(bookmark);
    Some(replace_category(categories, updated))
}

pub fn without_bookmark(categories: &[Category], category_id: &str, bookmark_id: &str) -> Option<Vec<Category>> {
    let category = find_category(categories, category_id)?;
    let index = category.position(bookmark_id)?;
    let mut updated = category.clone();
    updated.bookmarks.remove(index);
    Some(replace_category(categories, updated))
}

/// Merge `patch` into the bookmark. `finish` runs on the merged bookmark
/// before it is stored (used to fill derived fields).
pub fn with_bookmark_updated(
    categories: &[Category],
    category_id: &str,
    bookmark_id: &str,
    patch: &BookmarkPatch,
    finish: impl FnOnce(&mut Bookmark),
) -> Option<Vec<Category>> {
    let category = find_category(categories, category_id)?;
    let index = category.position(bookmark_id)?;
    let mut updated = category.clone();
    let bookmark = &mut updated.bookmarks[index];
    patch.apply_to(bookmark);
    finish(bookmark);
    if updated == *category {
        return None;
    }
    Some(replace_category(categories, updated))
}

/// Remove the bookmark from `from` and append it, unchanged, to `to`.
///
/// No-op when the ids are equal, either category is missing, the bookmark
/// is not in `from`, or `to` already holds a bookmark with that id.
pub fn with_bookmark_moved(
    categories: &[Category],
    from_category_id: &str,
    to_category_id: &str,
    bookmark_id: &str,
) -> Option<Vec<Category>> {
    if from_category_id == to_category_id {
        return None;
    }
    let from = find_category(categories, from_category_id)?;
    let to = find_category(categories, to_category_id)?;
    let index = from.position(bookmark_id)?;
    if to.bookmark(bookmark_id).is_some() {
        return None;
    }

    let mut from = from.clone();
    let bookmark = from.bookmarks.remove(index);
    let mut to = to.clone();
    to.bookmarks.push(bookmark);

    Some(
        categories
            .iter()
            .map(|c| {
                if c.id == from.id {
                    from.clone()
                } else if c.id == to.id {
                    to.clone()
                } else {
                    c.clone()
                }
            })
            .collect(),
    )
}

/// Move `active_id` to the index `over_id` occupies, shifting the rest.
pub fn with_bookmarks_reordered(
    categories: &[Category],
    category_id: &str,
    active_id: &str,
    over_id: &str,
) -> Option<Vec<Category>> {
    if active_id == over_id {
        return None;
    }
    let category = find_category(categories, category_id)?;
    let active_index = category.position(active_id)?;
    let over_index = category.position(over_id)?;

    let mut updated = category.clone();
    let moved = updated.bookmarks.remove(active_index);
    updated.bookmarks.insert(over_index, moved);
    Some(replace_category(categories, updated))
}

pub fn with_category_added(categories: &[Category], category: Category) -> Option<Vec<Category>> {
    if find_category(categories, &category.id).is_some() {
        return None;
    }
    let mut next = categories.to_vec();
    next.push(category);
    Some(next)
}

pub fn without_category(categories: &[Category], category_id: &str) -> Option<Vec<Category>> {
    find_category(categories, category_id)?;
    Some(categories.iter().filter(|c| c.id != category_id).cloned().collect())
}
