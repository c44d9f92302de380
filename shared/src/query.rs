//! Query string for the bookmark listing.

use thiserror::Error;

/// Rejected query input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Route did not carry a user id yet.
    #[error("user id is empty")]
    EmptyUserId,
}

/// Parameters of `GET /articles` when listing a user's bookmarks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkQuery {
    user_id: String,
    /// Board category.
    pub category: String,
    /// Sort order, `desc` is newest first.
    pub sort: String,
    /// 1-based page.
    pub page: u32,
    /// Page size.
    pub size: u32,
}

impl BookmarkQuery {
    /// Newest 50 `INFO` bookmarks of `user_id`.
    pub fn for_user(user_id: &str) -> Result<Self, QueryError> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(QueryError::EmptyUserId);
        }
        Ok(Self {
            user_id: user_id.to_string(),
            category: "INFO".to_string(),
            sort: "desc".to_string(),
            page: 1,
            size: 50,
        })
    }

    /// The user whose bookmarks are listed.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Encoded parameters in the order the endpoint documents them.
    pub fn to_query_string(&self) -> String {
        format!(
            "category={}&keyword={}&target=bookmark&sort={}&page={}&size={}",
            urlencoding::encode(&self.category),
            urlencoding::encode(&self.user_id),
            urlencoding::encode(&self.sort),
            self.page,
            self.size
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_default_bookmark_query() {
        let query = BookmarkQuery::for_user("42").expect("valid user");
        assert_eq!(
            query.to_query_string(),
            "category=INFO&keyword=42&target=bookmark&sort=desc&page=1&size=50"
        );
    }

    #[test]
    fn encodes_user_id() {
        let query = BookmarkQuery::for_user("a b&c").expect("valid user");
        assert!(query.to_query_string().contains("keyword=a%20b%26c&"));
    }

    #[test]
    fn rejects_blank_user_id() {
        assert_eq!(BookmarkQuery::for_user("  "), Err(QueryError::EmptyUserId));
    }
}
