use std::rc::Rc;

use bookmark_shelf_shared::{CarouselState, PageState};
use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::{config::carousel_config, models::BookmarkArticle};

/// Carousel state owned by one component instance.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselModel(CarouselState<BookmarkArticle>);

impl Default for CarouselModel {
    fn default() -> Self {
        Self(CarouselState::new(carousel_config()))
    }
}

impl CarouselModel {
    pub fn state(&self) -> &CarouselState<BookmarkArticle> {
        &self.0
    }
}

pub enum CarouselAction {
    /// Move by an explicit number of pages.
    Paginate(i64),
    /// Drag released with this offset (px) and velocity (px/s).
    Release { offset: f64, velocity: f64 },
    /// Fetch finished; an empty list covers failures too.
    SetItems(Vec<BookmarkArticle>),
}

impl Reducible for CarouselModel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        match action {
            CarouselAction::Paginate(step) => {
                next.paginate(step);
            },
            CarouselAction::Release {
                offset,
                velocity,
            } => {
                let before = next.page_state();
                if next.release_swipe(offset, velocity) == before {
                    return self;
                }
            },
            CarouselAction::SetItems(items) => next.set_items(items),
        }
        Rc::new(Self(next))
    }
}

/// Everything the bookmark carousel renders from.
#[derive(Clone)]
pub struct BookmarkCarouselHandle {
    model: UseReducerHandle<CarouselModel>,
    pub loading: bool,
    pub reload: Callback<()>,
}

impl BookmarkCarouselHandle {
    pub fn page_state(&self) -> PageState {
        self.model.state().page_state()
    }

    pub fn visible_items(&self) -> Vec<BookmarkArticle> {
        self.model.state().visible_items().to_vec()
    }

    pub fn is_empty(&self) -> bool {
        self.model.state().is_empty()
    }

    /// Page step of one group, positive.
    pub fn group_step(&self) -> i64 {
        i64::try_from(self.model.state().config().group_size.max(1)).unwrap_or(1)
    }

    pub fn paginate(&self) -> Callback<i64> {
        let dispatcher = self.model.dispatcher();
        Callback::from(move |step: i64| dispatcher.dispatch(CarouselAction::Paginate(step)))
    }

    pub fn release(&self) -> Callback<(f64, f64)> {
        let dispatcher = self.model.dispatcher();
        Callback::from(move |(offset, velocity): (f64, f64)| {
            dispatcher.dispatch(CarouselAction::Release {
                offset,
                velocity,
            })
        })
    }
}

/// Fetch the bookmarks of `user_id` and paginate them.
///
/// Refetches whenever `user_id` changes or `reload` is emitted. A response
/// that arrives after a newer request was started is dropped.
///
/// # Example
/// ```rust
/// use crate::hooks::use_bookmark_carousel;
///
/// #[function_component(Shelf)]
/// fn shelf() -> Html {
///     let carousel = use_bookmark_carousel(AttrValue::from("42"));
///     html! { <div>{ format!("page {}", carousel.page_state().page) }</div> }
/// }
/// ```
#[hook]
pub fn use_bookmark_carousel(user_id: AttrValue) -> BookmarkCarouselHandle {
    let model = use_reducer(CarouselModel::default);
    let loading = use_state(|| true);
    let refresh = use_state(|| 0u32);
    let generation = use_mut_ref(|| 0u64);
    let fetched_for = use_mut_ref(|| None::<AttrValue>);

    {
        let dispatcher = model.dispatcher();
        let loading = loading.clone();
        let generation = generation.clone();
        let fetched_for = fetched_for.clone();
        use_effect_with((user_id, *refresh), move |(user_id, _)| {
            let previous = fetched_for.replace(Some(user_id.clone()));
            if switches_user(previous.as_deref(), user_id) {
                dispatcher.dispatch(CarouselAction::SetItems(Vec::new()));
            }
            let ticket = {
                let mut current = generation.borrow_mut();
                *current += 1;
                *current
            };
            let user_id = user_id.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = crate::api::fetch_bookmarks(&user_id).await;
                if *generation.borrow() != ticket {
                    return;
                }
                match result {
                    Ok(items) => dispatcher.dispatch(CarouselAction::SetItems(items)),
                    Err(e) => {
                        web_sys::console::error_1(&JsValue::from_str(&format!(
                            "Failed to fetch bookmarks: {}",
                            e
                        )));
                        dispatcher.dispatch(CarouselAction::SetItems(Vec::new()));
                    },
                }
                loading.set(false);
            });
            || ()
        });
    }

    let reload = {
        let refresh = refresh.clone();
        Callback::from(move |_| refresh.set(refresh.wrapping_add(1)))
    };

    BookmarkCarouselHandle {
        model,
        loading: *loading,
        reload,
    }
}

/// True when a fetch is for a different user than the last one, so the old
/// list must not stay on screen while it loads.
fn switches_user(previous: Option<&str>, next: &str) -> bool {
    previous.is_some_and(|previous| previous != next)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use yew::Reducible;

    use super::{switches_user, CarouselAction, CarouselModel};
    use crate::models::BookmarkArticle;

    fn article(id: i64) -> BookmarkArticle {
        BookmarkArticle {
            article_id: id,
            category: "INFO".to_string(),
            title: format!("bookmark {id}"),
            clicks: 0,
            likes: 0,
            is_closed: false,
            tags: Vec::new(),
            comment_count: 0,
            answer_count: 0,
            created_at: "2022-11-27T10:00:00".to_string(),
            last_modified_at: "2022-11-27T10:00:00".to_string(),
            user_info: None,
            avatar: None,
        }
    }

    #[test]
    fn only_a_different_user_clears_the_list() {
        assert!(!switches_user(None, "42"));
        assert!(!switches_user(Some("42"), "42"));
        assert!(switches_user(Some("42"), "7"));
    }

    #[test]
    fn clearing_for_a_new_user_empties_the_carousel_but_keeps_the_page() {
        let model = Rc::new(CarouselModel::default())
            .reduce(CarouselAction::SetItems((1..=3).map(article).collect()))
            .reduce(CarouselAction::Paginate(2));
        assert!(!model.state().is_empty());

        let cleared = model.reduce(CarouselAction::SetItems(Vec::new()));
        assert!(cleared.state().is_empty());
        assert!(cleared.state().visible_items().is_empty());
        assert_eq!(cleared.state().page_state().page, 2);
    }

    #[test]
    fn weak_release_keeps_the_same_model() {
        let model = Rc::new(CarouselModel::default())
            .reduce(CarouselAction::SetItems(vec![article(1)]));
        let released = model.clone().reduce(CarouselAction::Release {
            offset: 50.0,
            velocity: 1.0,
        });
        assert!(Rc::ptr_eq(&model, &released));
    }
}
