pub mod common {
    pub const LOADING: &str = "불러오는 중...";
}

pub mod loading_spinner {
    pub const ARIA_LABEL: &str = "로딩 중";
}

pub mod carousel {
    pub const EMPTY: &str = "등록된 북마크가 아직 없습니다";
    pub const RETRY: &str = "다시 불러오기";
    pub const ARIA_REGION: &str = "북마크 캐러셀";
    pub const ARIA_PREV: &str = "이전 북마크";
    pub const ARIA_NEXT: &str = "다음 북마크";
}

pub mod bookmark_card {
    pub const TITLE_PREFIX: &str = "B. ";
    pub const COMMENTS_ARIA_TEMPLATE: &str = "댓글 {}개";
}

pub mod user_bookmarks_page {
    pub const HEADING: &str = "북마크";
}

pub mod not_found {
    pub const TITLE: &str = "404 - 페이지를 찾을 수 없습니다";
    pub const DESCRIPTION: &str = "요청하신 페이지가 존재하지 않습니다.";
}
