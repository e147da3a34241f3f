//! Postpage - Dioxus post reader
//!
//! This crate renders a single hosted blog-style post fetched from a
//! third-party content provider: title, author byline, published date, body
//! paragraphs interleaved with inline images, a trailing gallery for images
//! that do not fit between paragraphs, and a modal lightbox viewer.

pub mod api_client;
pub mod config;
pub mod content;
pub mod error;
pub mod lightbox;
pub mod logging;
pub mod models;
pub mod provider;

pub mod components;
pub mod hooks;
pub mod routes;
pub mod views;

pub use api_client::ApiClient;
pub use error::ApiError;
pub use lightbox::Lightbox;
pub use models::{Creator, Post, PostContent, PostImage};
pub use provider::{ContentContext, ContentProvider};
pub use routes::Route;
