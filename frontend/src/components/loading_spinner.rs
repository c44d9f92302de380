use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    i18n::current::loading_spinner as t,
};

#[derive(Clone, PartialEq)]
pub enum SpinnerSize {
    Medium,
    Large,
}

impl SpinnerSize {
    fn dimension(&self) -> u32 {
        match self {
            SpinnerSize::Medium => 24,
            SpinnerSize::Large => 48,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoaderProps {
    #[prop_or(SpinnerSize::Medium)]
    pub size: SpinnerSize,
}

/// Spinning circle-notch shown while data is loading.
#[function_component(Loader)]
pub fn loader(props: &LoaderProps) -> Html {
    html! {
        <span
            class={classes!("inline-flex", "items-center", "justify-center")}
            role="status"
            aria-live="polite"
            aria-busy="true"
            aria-label={t::ARIA_LABEL}
        >
            <Icon
                name={IconName::LoaderCircle}
                size={props.size.dimension()}
                class={classes!("animate-[spin_0.9s_linear_infinite]")}
            />
            <span class={classes!("sr-only")}>{ crate::i18n::current::common::LOADING }</span>
        </span>
    }
}
