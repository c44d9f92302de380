//! Carousel behaviour against a realistic bookmark payload.

use anyhow::{Context, Result};
use bookmark_shelf_shared::{
    carousel::{classify_swipe, resolve_visible_index, visible_range, GROUP_SIZE},
    ArticleListResponse, CarouselState, Direction, SwipeIntent,
};

fn sample_response() -> Result<ArticleListResponse> {
    let body = serde_json::json!({
        "data": (0..5).map(|i| serde_json::json!({
            "articleId": i,
            "title": format!("bookmark {i}"),
            "createdAt": "2022-11-27T10:00:00",
            "tags": [{ "tagId": i, "name": "rust" }],
        })).collect::<Vec<_>>(),
    });
    serde_json::from_value(body).context("sample payload must deserialize")
}

#[test]
fn first_page_shows_first_pair() -> Result<()> {
    let mut state = CarouselState::default();
    state.set_items(sample_response()?.data);

    assert_eq!(resolve_visible_index(0, 5, GROUP_SIZE), Some(0));
    let ids: Vec<i64> = state.visible_items().iter().map(|a| a.article_id).collect();
    assert_eq!(ids, vec![0, 1]);
    Ok(())
}

#[test]
fn odd_page_starts_mid_list() {
    assert_eq!(resolve_visible_index(3, 5, GROUP_SIZE), Some(3));
    assert_eq!(visible_range(3, 5, GROUP_SIZE), Some(3..5));
}

#[test]
fn empty_list_computes_no_index() {
    let state: CarouselState<u32> = CarouselState::default();
    assert!(state.is_empty());
    assert_eq!(state.visible_index(), None);
}

#[test]
fn fast_leftward_flick_pages_forward() {
    assert_eq!(classify_swipe(2.0, -6000.0), SwipeIntent::PageForward);
}

#[test]
fn slow_short_drag_is_ignored() {
    assert_eq!(classify_swipe(50.0, 1.0), SwipeIntent::NoOp);
}

#[test]
fn buttons_and_swipes_share_the_group_step() -> Result<()> {
    let mut state = CarouselState::default();
    state.set_items(sample_response()?.data);

    state.release_swipe(-120.0, -900.0);
    assert_eq!(state.page_state().page, 2);
    state.prev_page();
    state.prev_page();
    assert_eq!(state.page_state().page, -2);
    assert_eq!(state.page_state().direction, Direction::Backward);

    let first = state.visible_items().first().context("wrapped slice is non-empty")?;
    assert_eq!(first.article_id, 4);
    Ok(())
}
