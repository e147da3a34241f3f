//! Application routing configuration.

use dioxus::prelude::*;

use crate::views::PostView;

// Router configuration
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    // The reader renders whatever post the provider currently publishes
    #[route("/")]
    PostView {},
}
