use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub children: Html,
    /// Click handler; the button is inert without one.
    #[prop_or_default]
    pub on_click: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let onclick = {
        let on_click = props.on_click.clone();
        Callback::from(move |event: MouseEvent| {
            if let Some(cb) = on_click.as_ref() {
                cb.emit(event);
            }
        })
    };

    html! {
        <button
            class={classes!(
                "bg-main-yellow",
                "text-[16px]",
                "px-5",
                "py-[6px]",
                "rounded-full",
                "transition-all",
                "duration-200",
                "hover:-translate-y-[1px]",
                "hover:shadow-[var(--shadow)]",
                props.class.clone()
            )}
            type="submit"
            onclick={onclick}
        >
            { props.children.clone() }
        </button>
    }
}
