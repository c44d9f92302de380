pub mod not_found;
pub mod user_bookmarks;
