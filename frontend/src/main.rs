//! Bookmark shelf frontend: a Yew app showing a user's bookmarked articles
//! in a swipeable carousel.

mod api;
mod components;
mod config;
mod hooks;
mod i18n;
mod models;
mod pages;
mod router;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <router::AppRouter />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
