//! Lightbox overlay component - full-screen modal image viewer.

use dioxus::prelude::*;

use crate::models::PostImage;

/// LightboxOverlay - Full-screen overlay for viewing a single image with
/// circular next/previous navigation.
///
/// ```text
/// +---------------------------------------------------------------+
/// |                                                    [X] Close  |
/// |                                                               |
/// |   <        [        current image        ]               >    |
/// |                                                               |
/// |                  caption            3 / 7                     |
/// +---------------------------------------------------------------+
/// ```
#[component]
pub fn LightboxOverlay(
    images: Vec<PostImage>,
    index: usize,
    on_close: EventHandler<()>,
    on_previous: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    // The viewer state machine only opens at valid indices; this guards
    // against a stale index if the rendered post ever changes under us.
    let Some(image) = images.get(index) else {
        return rsx! {};
    };
    let count = images.len();

    rsx! {
        // Backdrop
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center bg-black/85",
            onclick: move |_| on_close.call(()),
            // Close button
            button {
                class: "absolute top-4 right-4 flex items-center gap-2 text-gray-300 hover:text-white transition-colors",
                onclick: move |e| {
                    e.stop_propagation();
                    on_close.call(());
                },
                svg {
                    class: "w-6 h-6",
                    fill: "none",
                    stroke: "currentColor",
                    view_box: "0 0 24 24",
                    path {
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        stroke_width: "2",
                        d: "M6 18L18 6M6 6l12 12",
                    }
                }
                span { class: "text-sm font-medium", "Close" }
            }
            // Previous
            button {
                class: "absolute left-4 p-2 text-gray-300 hover:text-white transition-colors",
                onclick: move |e| {
                    e.stop_propagation();
                    on_previous.call(());
                },
                svg {
                    class: "w-10 h-10",
                    fill: "none",
                    stroke: "currentColor",
                    view_box: "0 0 24 24",
                    path {
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        stroke_width: "2",
                        d: "M15 19l-7-7 7-7",
                    }
                }
            }
            // Image and caption
            div {
                class: "max-w-[85vw] max-h-[85vh] flex flex-col items-center gap-3",
                onclick: move |e| e.stop_propagation(),
                img {
                    class: "max-w-full max-h-[75vh] object-contain rounded shadow-2xl",
                    src: "{image.url}",
                    alt: "{image.caption}",
                }
                div { class: "flex items-center gap-4 text-gray-300 text-sm",
                    if !image.caption.is_empty() {
                        span { "{image.caption}" }
                    }
                    span { class: "text-gray-500", "{index + 1} / {count}" }
                }
            }
            // Next
            button {
                class: "absolute right-4 p-2 text-gray-300 hover:text-white transition-colors",
                onclick: move |e| {
                    e.stop_propagation();
                    on_next.call(());
                },
                svg {
                    class: "w-10 h-10",
                    fill: "none",
                    stroke: "currentColor",
                    view_box: "0 0 24 24",
                    path {
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        stroke_width: "2",
                        d: "M9 5l7 7-7 7",
                    }
                }
            }
        }
    }
}
