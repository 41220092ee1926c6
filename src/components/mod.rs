//! UI Components
//!
//! Reusable Leptos components for the bookmark board.

mod add_bookmark_modal;
mod bookmark_card;
mod category_section;
mod delete_confirm_button;
mod drag_preview;
mod edit_bookmark_modal;
mod new_category_form;

pub use add_bookmark_modal::{AddBookmarkModal, FaviconPreview};
pub use bookmark_card::{BookmarkCard, Favicon};
pub use category_section::CategorySection;
pub use delete_confirm_button::DeleteConfirmButton;
pub use drag_preview::DragPreview;
pub use edit_bookmark_modal::EditBookmarkModal;
pub use new_category_form::NewCategoryForm;
