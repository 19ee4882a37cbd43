//! Main file browser component.
//!
//! Lists the directory named by the current files route. The listing comes
//! from the shared query cache, so after a hover preload it renders without
//! a loading state.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::{FileList, PathBar};
use crate::app::AppContext;
use crate::components::error_view::ErrorView;
use crate::components::icons as ic;
use crate::components::layout::{Loading, restore_scroll};
use crate::core::api::{files_query_key, remote_query_key};
use crate::core::error::RouteError;
use crate::models::{AppRoute, FileEntry, FileListing};

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

/// File browser view for the files route.
#[component]
pub fn FileBrowser() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let route = Memo::new(move |_| ctx.view.with(|v| v.files_route().cloned()));

    let listing = LocalResource::new(move || {
        let parts = route.get().and_then(|r| r.path_ref());
        let router = ctx.router();
        async move {
            let Some(parts) = parts else {
                return Ok(Vec::new());
            };
            let options = router.files.files_query(&parts);
            router
                .query_client
                .fetch_query(&options)
                .await
                .map(|listing| listing.sorted())
                .map_err(RouteError::from)
        }
    });

    // Scroll back once the listing is on screen.
    Effect::new(move || {
        if listing.with(Option::is_some) {
            restore_scroll(&ctx);
        }
    });

    // Listing already in the cache for a route, fresh or not.
    let cached = move |route: &AppRoute| -> Option<Vec<FileEntry>> {
        let parts = route.path_ref()?;
        ctx.router()
            .query_client
            .get_query_data::<FileListing>(&files_query_key(&parts))
            .map(|listing| listing.sorted())
    };

    // Refresh marks every listing of the current remote stale.
    let on_refresh = move |_: leptos::ev::MouseEvent| {
        if let Some(parts) = route.get_untracked().and_then(|r| r.path_ref()) {
            ctx.router()
                .query_client
                .invalidate(&remote_query_key(&parts.remote));
        }
        listing.refetch();
    };

    view! {
        <section class=css::browser>
            <div class=css::toolbar>
                <PathBar route=route />
                <button class=css::refresh title="Refresh" on:click=on_refresh>
                    <Icon icon=ic::REFRESH />
                </button>
            </div>
            {move || match (route.get(), listing.get()) {
                (Some(base), None) => match cached(&base) {
                    Some(entries) => view! { <FileList base=base entries=entries /> }.into_any(),
                    None => view! { <Loading /> }.into_any(),
                },
                (Some(base), Some(Ok(entries))) => {
                    view! { <FileList base=base entries=entries /> }.into_any()
                }
                (None, None | Some(Ok(_))) => view! { <Loading /> }.into_any(),
                (_, Some(Err(err))) => view! { <ErrorView message=err.to_string() /> }.into_any(),
            }}
        </section>
    }
}
