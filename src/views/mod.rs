//! View components for the application.

pub mod post_view;

pub use post_view::PostView;
