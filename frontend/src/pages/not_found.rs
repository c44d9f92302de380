use yew::prelude::*;

use crate::i18n::current::not_found as t;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main>
            <h2>{ t::TITLE }</h2>
            <p>{ t::DESCRIPTION }</p>
        </main>
    }
}
