use yew::prelude::*;

use crate::{
    components::carousel_bookmarks::CarouselBookmarks,
    i18n::current::user_bookmarks_page as t,
};

#[derive(Properties, Clone, PartialEq)]
pub struct UserBookmarksPageProps {
    pub user_id: String,
}

#[function_component(UserBookmarksPage)]
pub fn user_bookmarks_page(props: &UserBookmarksPageProps) -> Html {
    html! {
        <main class={classes!("mx-auto", "w-full", "max-w-5xl", "px-4", "py-10")}>
            <h2 class={classes!("mb-6", "text-2xl", "font-bold")}>{ t::HEADING }</h2>
            <CarouselBookmarks user_id={AttrValue::from(props.user_id.clone())} />
        </main>
    }
}
