// Reusable components live here.

pub mod bookmark_card;
pub mod button;
pub mod carousel_bookmarks;
pub mod icons;
pub mod loading_spinner;
