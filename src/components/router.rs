//! Application router component.
//!
//! Handles URL-based routing with hash history.
//! Uses native hashchange events instead of leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: every hash change starts a
//!   navigation attempt through the [`Navigator`](crate::core::Navigator)
//! - **Guards redirect by replacing history**: the router follows redirects
//!   itself since `replaceState` fires no hashchange
//! - **Most recent wins**: an attempt that settles after a newer one started
//!   is dropped
//! - **File browser loads lazily**: its view constructor is resolved on the
//!   first visit to a files route and reused afterwards

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::{AppContext, RouteView};
use crate::components::browser::FileBrowser;
use crate::components::error_view::ErrorView;
use crate::components::host_form::HostForm;
use crate::components::layout::{Loading, RootLayout, ScrollRestoration};
use crate::core::Lazy;
use crate::core::Navigation;
use crate::core::router::Redirect;
use crate::models::{AppRoute, Location};

/// Constructor of a route view.
type ViewFn = fn() -> AnyView;

fn file_browser_view() -> AnyView {
    view! { <FileBrowser /> }.into_any()
}

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// - `#/` → Host form (redirects to `#/fs` when a host is set)
/// - `#/<remote>/<path>` → File browser (redirects to `#/?redirect=` without a host)
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let browser = StoredValue::new_local(Rc::new(Lazy::new(|| async {
        file_browser_view as ViewFn
    })));

    // Run a navigation attempt for the current URL.
    let sync = move || {
        let navigator = ctx.navigator.get_value();
        let browser = browser.get_value();
        let location = Location::current();

        spawn_local(async move {
            let Some(outcome) = navigator
                .navigate_following(location, Redirect::apply)
                .await
            else {
                return;
            };
            let generation = navigator.generation();

            let view = match outcome {
                Navigation::Render(route @ AppRoute::Files { .. }) => {
                    browser.load().await;
                    RouteView::Route(route)
                }
                Navigation::Render(route) => RouteView::Route(route),
                Navigation::Failed { route, error } => RouteView::Failed { route, error },
                Navigation::Redirect(redirect) => {
                    leptos::logging::warn!("unsettled redirect to {}", redirect.to.to_hash());
                    return;
                }
            };

            // A newer attempt started while the view was loading.
            if navigator.generation() != generation {
                return;
            }

            let key = Location::current().key().to_string();
            ctx.scroll.update_value(|memory| memory.arm(&key));
            ctx.view.set(view);
            ctx.location_key.set(key);
        });
    };

    sync();

    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            let key = ctx.location_key.get_untracked();
            let offset = crate::utils::dom::scroll_y();
            ctx.scroll.update_value(|memory| memory.save(&key, offset));
            sync();
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    view! {
        <RootLayout>
            <ScrollRestoration />
            {move || match ctx.view.get() {
                RouteView::Pending => view! { <Loading /> }.into_any(),
                RouteView::Route(AppRoute::Index { redirect }) => {
                    view! { <HostForm redirect=redirect /> }.into_any()
                }
                RouteView::Route(AppRoute::Files { .. }) => browser
                    .with_value(|lazy| lazy.get())
                    .map(|render| render())
                    .unwrap_or_else(|| view! { <Loading /> }.into_any()),
                RouteView::Failed { route, error } => {
                    view! { <ErrorView message=error.to_string() route=route /> }.into_any()
                }
            }}
        </RootLayout>
    }
}
