//! Custom Dioxus hooks.

pub mod post_resource;

pub use post_resource::{use_post_reload, use_post_resource, PostResource};
