//! Data model and view logic shared by the bookmark shelf frontend.
//!
//! Everything here is target independent so it can be unit tested on the
//! host and compiled into the WASM frontend unchanged.

use serde::{Deserialize, Serialize};

pub mod carousel;
pub mod display;
pub mod gesture;
pub mod query;

pub use carousel::{CarouselConfig, CarouselState, Direction, PageState, SwipeIntent};
pub use gesture::{DragRelease, DragTracker};
pub use query::BookmarkQuery;

/// A bookmarked article as returned by the article list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkArticle {
    /// Primary key, also used in the question detail link.
    pub article_id: i64,
    /// Board category, `INFO` for bookmarks.
    #[serde(default)]
    pub category: String,
    /// Full title; cards truncate it.
    pub title: String,
    /// View count.
    #[serde(default)]
    pub clicks: i64,
    /// Like count.
    #[serde(default)]
    pub likes: i64,
    /// Whether the article is closed to new answers.
    #[serde(default)]
    pub is_closed: bool,
    /// Attached tags in display order.
    #[serde(default)]
    pub tags: Vec<ArticleTag>,
    /// Number of comments.
    #[serde(default)]
    pub comment_count: i64,
    /// Number of answers.
    #[serde(default)]
    pub answer_count: i64,
    /// ISO-8601 creation timestamp.
    pub created_at: String,
    /// ISO-8601 last modification timestamp.
    #[serde(default)]
    pub last_modified_at: String,
    /// Author summary.
    #[serde(default)]
    pub user_info: Option<AuthorInfo>,
    /// Author avatar, absent when the author never uploaded one.
    #[serde(default)]
    pub avatar: Option<Avatar>,
}

/// Tag attached to an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleTag {
    /// Tag id, used as the render key.
    pub tag_id: i64,
    /// Label shown in the pill.
    pub name: String,
}

/// Author summary embedded in list items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorInfo {
    /// Author id.
    pub user_id: i64,
    /// Display name.
    pub nickname: String,
    /// Activity grade label.
    #[serde(default)]
    pub grade: String,
}

/// Avatar file reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Avatar {
    /// Avatar id.
    pub avatar_id: i64,
    /// Stored file name.
    pub filename: String,
    /// Public URL of the image.
    pub remote_path: String,
}

/// Envelope of the article list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListResponse {
    /// Articles on the requested page.
    #[serde(default)]
    pub data: Vec<BookmarkArticle>,
    /// Paging metadata, ignored by the carousel.
    #[serde(default)]
    pub page_info: Option<PageInfo>,
}

/// Server side paging metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// 1-based page number.
    pub page: u32,
    /// Page size.
    pub size: u32,
    /// Total matching elements.
    pub total_elements: u64,
    /// Total pages.
    pub total_pages: u32,
}
