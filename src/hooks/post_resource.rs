//! Post fetch hook with an app-scoped reload signal.
//!
//! Wraps `use_resource` around the provider fetch and parks a reload signal
//! in the context, so the error state's retry control can re-run the fetch
//! without threading a callback down the tree.

use dioxus::{
    hooks::{use_context, use_context_provider, use_resource, Resource},
    signals::{ReadableExt, Signal},
};

use crate::models::PostContent;
use crate::provider::ContentContext;
use crate::{log_debug, log_error};

/// The current post, fetched once per mount and re-fetched on reload.
/// Errors arrive already flattened to a display message.
pub type PostResource = Resource<Result<PostContent, String>>;

/// Context handle for re-running the post fetch.
#[derive(Clone, Copy)]
pub struct PostReload(Signal<()>);

/// Fetch the provider's current post and derive its display content.
///
/// Failures are logged with the full API error before being reduced to the
/// user-facing message the error state renders. The resource re-runs
/// whenever the signal from [`use_post_reload`] is written.
pub fn use_post_resource() -> PostResource {
    let ctx = use_context::<ContentContext>();
    let reload = use_context_provider(|| PostReload(Signal::new(())));

    use_resource(move || {
        reload.0.read();
        async move {
            log_debug!("fetching current post");
            ctx.client()
                .current_post()
                .await
                .map(PostContent::from_post)
                .map_err(|err| {
                    log_error!("current post fetch failed: {err}");
                    err.user_message()
                })
        }
    })
}

/// The reload signal behind [`use_post_resource`]; writing it re-runs the
/// fetch.
pub fn use_post_reload() -> Signal<()> {
    use_context::<PostReload>().0
}
