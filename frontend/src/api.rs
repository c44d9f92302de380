#[cfg(not(feature = "mock"))]
use bookmark_shelf_shared::ArticleListResponse;
use bookmark_shelf_shared::{BookmarkArticle, BookmarkQuery};
#[cfg(not(feature = "mock"))]
use gloo_net::http::Request;
#[cfg(not(feature = "mock"))]
use js_sys::Date;

#[cfg(feature = "mock")]
use crate::models;

// API base URL - 编译时从环境变量读取，默认本地开发地址
#[cfg(not(feature = "mock"))]
pub const API_BASE: &str = match option_env!("BOOKMARK_SHELF_API_BASE") {
    Some(url) => url,
    None => "http://localhost:8080/api",
};

/// 获取用户收藏的文章，最新的在前
pub async fn fetch_bookmarks(user_id: &str) -> Result<Vec<BookmarkArticle>, String> {
    let query = BookmarkQuery::for_user(user_id).map_err(|e| format!("Invalid query: {}", e))?;

    #[cfg(feature = "mock")]
    {
        return Ok(models::get_mock_bookmarks(query.user_id()));
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!(
            "{}/articles?{}&_ts={}",
            API_BASE,
            query.to_query_string(),
            Date::now() as u64
        );

        let response = Request::get(&url)
            .header("Cache-Control", "no-cache, no-store, max-age=0")
            .header("Pragma", "no-cache")
            .send()
            .await
            .map_err(|e| format!("Network error: {:?}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        let json_response: ArticleListResponse = response
            .json()
            .await
            .map_err(|e| format!("Parse error: {:?}", e))?;

        Ok(json_response.data)
    }
}
