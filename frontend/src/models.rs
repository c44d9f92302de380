// 重新导出shared crate的数据模型
#[cfg_attr(not(feature = "mock"), allow(unused_imports, reason = "only the mock builder needs the tag and author types"))]
pub use bookmark_shelf_shared::{ArticleTag, AuthorInfo, BookmarkArticle};

// =============== Mock 数据 ===============

/// 返回给定用户的 5 篇示例收藏，奇数个用来覆盖轮播末尾只剩一张卡片的情况。
#[cfg(feature = "mock")]
pub fn get_mock_bookmarks(user_id: &str) -> Vec<BookmarkArticle> {
    let titles = [
        "Rust 소유권과 빌림 규칙을 한 번에 정리해 보기",
        "Yew 컴포넌트에서 상태 관리하기",
        "WASM 번들 크기 줄이기",
        "Spring Security 필터 체인 동작 원리와 커스텀 필터 작성법 정리",
        "JPA N+1 문제",
    ];
    let tag_names = [["RUST", "WASM"], ["YEW", "FRONTEND"], ["WASM", "BUILD"], ["JAVA", "SPRING"], ["JAVA", "JPA"]];

    titles
        .iter()
        .zip(tag_names.iter())
        .enumerate()
        .map(|(i, (title, tags))| {
            let id = i as i64 + 1;
            BookmarkArticle {
                article_id: id,
                category: "INFO".to_string(),
                title: title.to_string(),
                clicks: 10 * id,
                likes: id,
                is_closed: false,
                tags: tags
                    .iter()
                    .enumerate()
                    .map(|(j, name)| ArticleTag {
                        tag_id: id * 10 + j as i64,
                        name: name.to_string(),
                    })
                    .collect(),
                comment_count: id % 3,
                answer_count: 0,
                created_at: format!("2022-11-{:02}T{:02}:{:02}:00", 20 + i, 9 + i * 2, i * 7),
                last_modified_at: format!("2022-11-{:02}T{:02}:{:02}:00", 20 + i, 9 + i * 2, i * 7),
                user_info: Some(AuthorInfo {
                    user_id: 1,
                    nickname: format!("reader-{}", user_id),
                    grade: "BRONZE".to_string(),
                }),
                avatar: None,
            }
        })
        .collect()
}
