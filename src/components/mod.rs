//! Presentation components for the post page.

pub mod author;
pub mod gallery;
pub mod lightbox_overlay;

pub use author::AuthorBlock;
pub use gallery::{GalleryEntry, GalleryGroup};
pub use lightbox_overlay::LightboxOverlay;
