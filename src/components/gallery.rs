//! Gallery group component - the trailing cluster of images that did not fit
//! between paragraphs.

use dioxus::prelude::*;

/// One gallery thumbnail. `index` is the image's position in the post's full
/// image list, so selecting it opens the lightbox at the right place.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryEntry {
    pub index: usize,
    pub url: String,
    pub caption: String,
}

#[component]
pub fn GalleryGroup(entries: Vec<GalleryEntry>, on_select: EventHandler<usize>) -> Element {
    rsx! {
        div { class: "flex flex-wrap justify-center gap-3 my-6",
            for entry in entries.iter() {
                img {
                    key: "{entry.index}",
                    class: "Gallery-Image",
                    src: "{entry.url}",
                    alt: "{entry.caption}",
                    onclick: {
                        let index = entry.index;
                        move |_| on_select.call(index)
                    },
                }
            }
        }
    }
}
