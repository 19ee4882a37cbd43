//! Root layout shell.
//!
//! Header with the connected host, scroll restoration, and the outlet the
//! matched route renders into.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, APP_VERSION};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/layout.module.css");

/// Layout wrapping every route.
#[component]
pub fn RootLayout(children: Children) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let on_change_host = move |_: leptos::ev::MouseEvent| {
        if let Err(err) = ctx.clear_host() {
            leptos::logging::warn!("failed to clear host: {}", err);
        }
    };

    view! {
        <div class=css::layout>
            <header class=css::header>
                <span class=css::title>{APP_NAME}</span>
                <span class=css::version>{format!("v{}", APP_VERSION)}</span>
                <div class=css::spacer></div>
                <Show when=move || ctx.host.with(Option::is_some)>
                    <span class=css::host>
                        <Icon icon=ic::NETWORK />
                        <span>{move || ctx.host.get().unwrap_or_default()}</span>
                    </span>
                    <button class=css::action title="Change host" on:click=on_change_host>
                        <Icon icon=ic::EDIT />
                    </button>
                </Show>
            </header>
            <main class=css::outlet>{children()}</main>
        </div>
    }
}

/// Scroll to the offset remembered for the shown location, once per visit.
pub fn restore_scroll(ctx: &AppContext) {
    let key = ctx.location_key.get_untracked();
    if let Some(offset) = ctx.scroll.try_update_value(|memory| memory.take(&key)).flatten() {
        dom::scroll_to_y(offset);
    }
}

/// Restores the scroll offset remembered for the location being shown.
///
/// Offsets are saved by the router when the hash changes. The file browser
/// restores its own offset once the listing has rendered.
#[component]
pub fn ScrollRestoration() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    Effect::new(move || {
        ctx.location_key.track();
        if ctx.view.with_untracked(|v| v.files_route().is_none()) {
            restore_scroll(&ctx);
        }
    });
}

/// Placeholder while a route is loading.
#[component]
pub fn Loading() -> impl IntoView {
    view! { <div class=css::loading>"Loading..."</div> }
}
