//! Post page - fetches the provider's current post and renders it as an
//! interleaved article with a lightbox viewer.

use dioxus::prelude::*;

use crate::components::{AuthorBlock, GalleryEntry, GalleryGroup, LightboxOverlay};
use crate::content::{self, BodySegment};
use crate::hooks::{use_post_reload, use_post_resource};
use crate::lightbox::Lightbox;
use crate::models::PostContent;

#[component]
pub fn PostView() -> Element {
    let post = use_post_resource();
    let mut reload = use_post_reload();

    let mut viewer = use_signal(Lightbox::default);

    let post = post.read();
    match post.as_ref() {
        Some(Ok(post)) => {
            let count = post.images.len();
            let published =
                content::short_date(post.published_time, &chrono::Local).unwrap_or_default();

            rsx! {
                div {
                    class: "Template min-h-screen pb-16",
                    style: "background-image: {post.gradient};",
                    if let Some(header) = post.header_image() {
                        img {
                            class: "Title-Image",
                            src: "{header.url}",
                            alt: "{post.title}",
                            onclick: move |_| viewer.write().open(0, count),
                        }
                    }
                    div { class: "max-w-2xl mx-auto px-4",
                        div { class: "Title-Text py-8",
                            p { class: "text-4xl font-bold mb-4", "{post.title}" }
                            AuthorBlock { author: post.author.clone() }
                            if !published.is_empty() {
                                div { class: "text-sm text-gray-600 mt-2", "{published}" }
                            }
                        }
                        div { class: "Body-Text",
                            for (i , segment) in post.body.iter().enumerate() {
                                {render_segment(i, segment, post, count, viewer)}
                            }
                        }
                    }
                    if let Some(index) = viewer.read().current() {
                        LightboxOverlay {
                            images: post.images.clone(),
                            index,
                            on_close: move |_| viewer.write().close(),
                            on_previous: move |_| viewer.write().previous(count),
                            on_next: move |_| viewer.write().next(count),
                        }
                    }
                }
            }
        }
        Some(Err(message)) => rsx! {
            div { class: "flex flex-col items-center justify-center min-h-screen gap-3",
                p { class: "text-lg font-semibold text-gray-800", "Couldn't load this post" }
                p { class: "text-sm text-gray-500", "{message}" }
                button {
                    class: "px-4 py-2 bg-indigo-500 hover:bg-indigo-600 text-white rounded-lg transition-colors",
                    onclick: move |_| {
                        reload.write();
                    },
                    "Try again"
                }
            }
        },
        None => rsx! {
            div { class: "flex items-center justify-center min-h-screen text-gray-500",
                "Loading post..."
            }
        },
    }
}

fn render_segment(
    key: usize,
    segment: &BodySegment,
    post: &PostContent,
    count: usize,
    mut viewer: Signal<Lightbox>,
) -> Element {
    match segment {
        BodySegment::Opener { initial, rest } => rsx! {
            p { key: "{key}",
                span { class: "First-Character", "{initial}" }
                "{rest}"
            }
        },
        BodySegment::Paragraph { text } => rsx! {
            p { key: "{key}", "{text}" }
        },
        BodySegment::Illustrated { image, text } => {
            let index = *image;
            let url = post
                .images
                .get(index)
                .map(|i| i.url.clone())
                .unwrap_or_default();
            rsx! {
                p { key: "{key}",
                    img {
                        class: "Inline-Image",
                        src: "{url}",
                        onclick: move |_| viewer.write().open(index, count),
                    }
                    "{text}"
                }
            }
        }
        BodySegment::Gallery { images } => {
            let entries: Vec<GalleryEntry> = images
                .iter()
                .filter_map(|&index| {
                    post.images.get(index).map(|i| GalleryEntry {
                        index,
                        url: i.url.clone(),
                        caption: i.caption.clone(),
                    })
                })
                .collect();
            rsx! {
                GalleryGroup {
                    key: "{key}",
                    entries,
                    on_select: move |index| viewer.write().open(index, count),
                }
            }
        }
    }
}
