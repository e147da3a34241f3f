//! Author block component - the post byline.

use dioxus::prelude::*;

use crate::models::Creator;

#[component]
pub fn AuthorBlock(author: Creator) -> Element {
    let initial = author
        .name
        .chars()
        .next()
        .unwrap_or('?')
        .to_uppercase()
        .to_string();

    rsx! {
        div { class: "flex items-center gap-3",
            if author.profile_image_url.is_empty() {
                div { class: "w-10 h-10 rounded-full bg-gradient-to-br from-indigo-500 to-purple-600 flex items-center justify-center text-white font-semibold flex-shrink-0 shadow-lg",
                    "{initial}"
                }
            } else {
                img {
                    class: "w-10 h-10 rounded-full object-cover flex-shrink-0",
                    src: "{author.profile_image_url}",
                    alt: "{author.name}",
                }
            }
            span { class: "font-semibold", "{author.name}" }
        }
    }
}
