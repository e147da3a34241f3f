//! Postpage - Main entry point
//!
//! A Dioxus application that renders the content provider's current post.
//! Supports both web (WASM) and desktop platforms.

#![allow(non_snake_case)]

use dioxus::prelude::*;
use postpage::{provider::ContentProvider, routes::Route};

// Assets
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    // Initialize tracing for desktop
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::EnvFilter;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("postpage=debug")),
            )
            .init();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ContentProvider {
            Router::<Route> {}
        }
    }
}
