//! Drop Classification
//!
//! Turns a finished drag gesture into at most one store mutation.

use leptos_dragdrop::{DragEnd, DropTarget};

/// The single mutation a drop resolves to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropAction {
    /// Append the bookmark to another category
    Move {
        from_category_id: String,
        to_category_id: String,
        bookmark_id: String,
    },
    /// Put `active_id` where `over_id` is, within one category
    Reorder {
        category_id: String,
        active_id: String,
        over_id: String,
    },
}

/// Classify a drop. `None` means the gesture changes nothing.
///
/// - nothing under the pointer: discarded
/// - another column: move to its end
/// - own column: nothing (reordering needs a bookmark target)
/// - bookmark in the same column: reorder onto it
/// - bookmark in another column: move to that column's end
pub fn classify_drop(end: &DragEnd) -> Option<DropAction> {
    let source = &end.source;
    let move_to = |to: &str| DropAction::Move {
        from_category_id: source.category_id.clone(),
        to_category_id: to.to_string(),
        bookmark_id: source.bookmark_id.clone(),
    };

    let over = end.over.as_ref()?;
    if over.category_id() != source.category_id {
        return Some(move_to(over.category_id()));
    }

    match over {
        DropTarget::Category { .. } => None,
        DropTarget::Bookmark { bookmark_id, .. } if *bookmark_id == source.bookmark_id => None,
        DropTarget::Bookmark { category_id, bookmark_id } => Some(DropAction::Reorder {
            category_id: category_id.clone(),
            active_id: source.bookmark_id.clone(),
            over_id: bookmark_id.clone(),
        }),
    }
}
