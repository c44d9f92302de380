use yew::prelude::*;

/// Lucide Icons, stroke-only line icons.
/// SVG paths from <https://lucide.dev>
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconName {
    // Navigation
    ChevronLeft,
    ChevronRight,

    // Content
    MessageCircle,

    // Status
    LoaderCircle,
}

impl IconName {
    pub fn path(&self) -> &'static str {
        match self {
            IconName::ChevronLeft => "m15 18-6-6 6-6",
            IconName::ChevronRight => "m9 18 6-6-6-6",
            IconName::MessageCircle => "M7.9 20A9 9 0 1 0 4 16.1L2 22Z",
            IconName::LoaderCircle => "M21 12a9 9 0 1 1-6.219-8.56",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: IconName,

    #[prop_or(24)]
    pub size: u32,

    #[prop_or_else(|| "currentColor".to_string())]
    pub color: String,

    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let IconProps {
        name,
        size,
        color,
        class,
    } = props;

    let stroke_width = if *size <= 16 { 2.5 } else { 2.0 };

    html! {
        <svg
            class={classes!(
                "inline-flex",
                "items-center",
                "justify-center",
                "shrink-0",
                class.clone()
            )}
            width={size.to_string()}
            height={size.to_string()}
            viewBox="0 0 24 24"
            fill="none"
            stroke={color.clone()}
            stroke-width={stroke_width.to_string()}
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path d={name.path()} />
        </svg>
    }
}

/// Bare icon button for carousel controls.
#[derive(Properties, PartialEq)]
pub struct IconButtonProps {
    pub icon: IconName,

    #[prop_or(24)]
    pub size: u32,

    pub aria_label: AttrValue,

    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,

    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconButton)]
pub fn icon_button(props: &IconButtonProps) -> Html {
    let IconButtonProps {
        icon,
        size,
        aria_label,
        onclick,
        class,
    } = props;

    let button_class = classes!(
        "inline-flex",
        "items-center",
        "justify-center",
        "min-w-[44px]",
        "min-h-[44px]",
        "bg-transparent",
        "text-[var(--text)]",
        "hover:cursor-pointer",
        "hover:text-[var(--primary)]",
        "transition-colors",
        "duration-100",
        class.clone()
    );

    html! {
        <button
            class={button_class}
            onclick={onclick}
            aria-label={aria_label.clone()}
            type="button"
        >
            <Icon name={*icon} size={*size} />
        </button>
    }
}
