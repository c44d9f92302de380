use bookmark_shelf_shared::display::{created_at_label, truncate_title};
use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    i18n::{current::bookmark_card as t, fill_one},
    models::BookmarkArticle,
};

#[derive(Properties, PartialEq, Clone)]
pub struct BookmarkCardProps {
    pub article: BookmarkArticle,
}

#[function_component(BookmarkCard)]
pub fn bookmark_card(props: &BookmarkCardProps) -> Html {
    let article = &props.article;
    let detail_href = format!("/questions/{}", article.article_id);
    let comments_label = fill_one(t::COMMENTS_ARIA_TEMPLATE, article.comment_count);

    html! {
        <article
            class={classes!(
                "bookmark-card",
                "relative",
                "mb-[72px]",
                "h-[190px]",
                "w-full",
                "max-w-[793px]",
                "rounded-2xl",
                "bg-main-yellow/20",
                "p-8"
            )}
        >
            <div class="flex items-start justify-between">
                <a href={detail_href} draggable="false">
                    <span class="text-2xl text-main-orange">{ t::TITLE_PREFIX }</span>
                    <span class="text-2xl hover:cursor-pointer">{ truncate_title(&article.title) }</span>
                </a>
                <div class="flex gap-2" aria-label={comments_label}>
                    <Icon name={IconName::MessageCircle} size={14} />
                    <span class="text-xs">{ article.comment_count }</span>
                </div>
            </div>
            <div class="mb-2 flex justify-end">
                <time class="text-[15px] text-main-gray" datetime={article.created_at.clone()}>
                    { created_at_label(&article.created_at) }
                </time>
            </div>
            <ul class="flex h-16 items-end justify-end gap-4">
                { for article.tags.iter().map(|tag| html! {
                    <li key={tag.tag_id}>
                        <button type="button" class="w-32 rounded-full bg-main-yellow py-[6px]">
                            { &tag.name }
                        </button>
                    </li>
                }) }
            </ul>
        </article>
    }
}
