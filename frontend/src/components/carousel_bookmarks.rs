use bookmark_shelf_shared::{carousel::SlideVariant, Direction, DragTracker, PageState};
use gloo_timers::callback::Timeout;
use web_sys::Element;
use yew::prelude::*;

use crate::{
    components::{
        bookmark_card::BookmarkCard,
        button::Button,
        icons::{IconButton, IconName},
        loading_spinner::{Loader, SpinnerSize},
    },
    config::{SLIDE_TRANSITION_MS, SNAP_BACK_MS},
    hooks::use_bookmark_carousel,
    i18n::current::carousel as t,
    models::BookmarkArticle,
};

#[derive(Properties, PartialEq)]
pub struct CarouselBookmarksProps {
    pub user_id: AttrValue,
}

/// Slide that is animating out after a page change.
#[derive(Clone, PartialEq)]
struct ExitingSlide {
    page: i64,
    direction: Direction,
    items: Vec<BookmarkArticle>,
}

/// Rendered horizontal displacement of a slide relative to its container.
fn live_translate_x(slide: &Element) -> f64 {
    match slide.parent_element() {
        Some(parent) => {
            slide.get_bounding_client_rect().left() - parent.get_bounding_client_rect().left()
        },
        None => 0.0,
    }
}

#[function_component(CarouselBookmarks)]
pub fn carousel_bookmarks(props: &CarouselBookmarksProps) -> Html {
    let carousel = use_bookmark_carousel(props.user_id.clone());
    let page_state = carousel.page_state();
    let visible = carousel.visible_items();

    let tracker = use_mut_ref(DragTracker::new);
    let slide_ref = use_node_ref();
    let drag_offset = use_state(|| 0.0f64);
    let dragging = use_state(|| false);

    let last_rendered = use_mut_ref(|| None::<(PageState, Vec<BookmarkArticle>)>);
    let exiting = use_state(|| None::<ExitingSlide>);
    let exit_timer = use_mut_ref(|| None::<Timeout>);

    {
        let last_rendered = last_rendered.clone();
        let exiting = exiting.clone();
        let exit_timer = exit_timer.clone();
        use_effect_with((page_state, visible.clone()), move |(pages, items)| {
            let previous = last_rendered.replace(Some((*pages, items.clone())));
            if let Some((prev_pages, prev_items)) = previous {
                if prev_pages.page != pages.page && !prev_items.is_empty() {
                    exiting.set(Some(ExitingSlide {
                        page: prev_pages.page,
                        direction: pages.direction,
                        items: prev_items,
                    }));
                    let exiting = exiting.clone();
                    // replacing the timer cancels the previous one
                    *exit_timer.borrow_mut() =
                        Some(Timeout::new(SLIDE_TRANSITION_MS, move || exiting.set(None)));
                }
            }
            || ()
        });
    }

    if carousel.is_empty() {
        return html! {
            <div class="relative h-[440px] w-full">
                <div class="flex h-full w-full flex-col items-center justify-center gap-4">
                    {
                        if carousel.loading {
                            html! { <Loader size={SpinnerSize::Large} /> }
                        } else {
                            let reload = carousel.reload.clone();
                            html! {
                                <>
                                    <span>{ t::EMPTY }</span>
                                    <Button on_click={Callback::from(move |_: MouseEvent| reload.emit(()))}>
                                        { t::RETRY }
                                    </Button>
                                </>
                            }
                        }
                    }
                </div>
            </div>
        };
    }

    let on_pointer_down = {
        let tracker = tracker.clone();
        let dragging = dragging.clone();
        let drag_offset = drag_offset.clone();
        let slide_ref = slide_ref.clone();
        Callback::from(move |e: PointerEvent| {
            let slide = slide_ref.cast::<Element>();
            // a slide grabbed mid snap-back is still displaced
            let live_offset = slide.as_ref().map(live_translate_x).unwrap_or_default();
            if let Some(slide) = slide {
                let _ = slide.set_pointer_capture(e.pointer_id());
            }
            tracker
                .borrow_mut()
                .begin_from(f64::from(e.client_x()), e.time_stamp(), live_offset);
            drag_offset.set(live_offset);
            dragging.set(true);
        })
    };

    let on_pointer_move = {
        let tracker = tracker.clone();
        let drag_offset = drag_offset.clone();
        Callback::from(move |e: PointerEvent| {
            let sampled = tracker.borrow_mut().sample(f64::from(e.client_x()), e.time_stamp());
            if let Some(offset) = sampled {
                drag_offset.set(offset);
            }
        })
    };

    let on_pointer_up = {
        let tracker = tracker.clone();
        let drag_offset = drag_offset.clone();
        let dragging = dragging.clone();
        let release = carousel.release();
        Callback::from(move |e: PointerEvent| {
            let released = tracker.borrow_mut().release(f64::from(e.client_x()), e.time_stamp());
            drag_offset.set(0.0);
            dragging.set(false);
            if let Some(drag) = released {
                release.emit((drag.offset, drag.velocity));
            }
        })
    };

    let on_pointer_cancel = {
        let tracker = tracker.clone();
        let drag_offset = drag_offset.clone();
        let dragging = dragging.clone();
        Callback::from(move |_: PointerEvent| {
            tracker.borrow_mut().cancel();
            drag_offset.set(0.0);
            dragging.set(false);
        })
    };

    let step = carousel.group_step();
    let paginate = carousel.paginate();
    let on_next = {
        let paginate = paginate.clone();
        Callback::from(move |_: MouseEvent| paginate.emit(step))
    };
    let on_prev = Callback::from(move |_: MouseEvent| paginate.emit(-step));

    let slide_classes = classes!(
        "absolute",
        "inset-0",
        "flex",
        "flex-col",
        "px-24",
        "select-none",
        "touch-pan-y"
    );

    let active_style = {
        let transform = format!("transform: translateX({}px);", *drag_offset);
        let transition = if *dragging {
            "transition: none;".to_string()
        } else {
            format!("transition: transform {}ms ease-out;", SNAP_BACK_MS)
        };
        let enter = if page_state.direction == Direction::Still {
            String::new()
        } else {
            let from = SlideVariant::enter(page_state.direction);
            format!(
                "--enter-x: {}px; --enter-opacity: {}; animation: carousel-enter {}ms backwards;",
                from.x, from.opacity, SLIDE_TRANSITION_MS
            )
        };
        format!("z-index: 1; {}{}{}", transform, transition, enter)
    };

    let mut slides: Vec<Html> = Vec::with_capacity(2);
    if let Some(slide) = (*exiting).clone().filter(|slide| slide.page != page_state.page) {
        let to = SlideVariant::exit(slide.direction);
        let style = format!(
            "z-index: 0; pointer-events: none; --exit-x: {}px; --exit-opacity: {}; animation: \
             carousel-exit {}ms both;",
            to.x, to.opacity, SLIDE_TRANSITION_MS
        );
        slides.push(html! {
            <div key={format!("slide-{}", slide.page)} class={slide_classes.clone()} style={style} aria-hidden="true">
                { for slide.items.iter().map(|article| html! {
                    <BookmarkCard key={article.article_id} article={article.clone()} />
                }) }
            </div>
        });
    }
    slides.push(html! {
        <div
            key={format!("slide-{}", page_state.page)}
            ref={slide_ref}
            class={slide_classes}
            style={active_style}
            onpointerdown={on_pointer_down}
            onpointermove={on_pointer_move}
            onpointerup={on_pointer_up}
            onpointercancel={on_pointer_cancel}
        >
            { for visible.iter().map(|article| html! {
                <BookmarkCard key={article.article_id} article={article.clone()} />
            }) }
        </div>
    });

    html! {
        <div class="relative h-[440px] w-full overflow-hidden" role="region" aria-label={t::ARIA_REGION}>
            <div class="absolute inset-0">
                { for slides }
            </div>
            <IconButton
                icon={IconName::ChevronRight}
                size={48}
                aria_label={t::ARIA_NEXT}
                onclick={on_next}
                class={classes!("absolute", "right-0", "top-[45%]", "z-10")}
            />
            <IconButton
                icon={IconName::ChevronLeft}
                size={48}
                aria_label={t::ARIA_PREV}
                onclick={on_prev}
                class={classes!("absolute", "left-0", "top-[45%]", "z-10")}
            />
        </div>
    }
}
