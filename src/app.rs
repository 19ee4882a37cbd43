//! Root application module.
//!
//! Contains the main App component, the AppContext definition, and the
//! construction of the router context shared by guards and loaders.

use std::rc::Rc;

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::core::error::{HostError, RouteError};
use crate::core::scroll::ScrollMemory;
use crate::core::{
    HostStore, LocalHostStore, Navigator, QueryClient, RcloneApi, RouteTree, RouterContext,
};
use crate::models::AppRoute;

// ============================================================================
// RouteView
// ============================================================================

/// What the root outlet currently shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RouteView {
    /// First navigation has not settled yet
    #[default]
    Pending,
    /// A route that passed its guard and loader
    Route(AppRoute),
    /// A route whose loader failed
    Failed { route: AppRoute, error: RouteError },
}

impl RouteView {
    /// Files route currently shown, if any.
    pub fn files_route(&self) -> Option<&AppRoute> {
        match self {
            Self::Route(route @ AppRoute::Files { .. }) => Some(route),
            _ => None,
        }
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// with `use_context::<AppContext>()`.
///
/// The [`Navigator`] holds non-`Send` state (`Rc`, browser handles), so it
/// lives in local arena storage.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Route tree, guards, loaders, and the shared [`RouterContext`].
    pub navigator: StoredValue<Navigator, LocalStorage>,

    /// Current outlet contents.
    pub view: RwSignal<RouteView>,

    /// Key of the location currently rendered (used for scroll restoration).
    pub location_key: RwSignal<String>,

    /// Configured backend host, mirrored for display.
    pub host: RwSignal<Option<String>>,

    /// Scroll offsets per visited location.
    pub scroll: StoredValue<ScrollMemory>,
}

impl AppContext {
    /// Creates the context around a navigator.
    pub fn new(navigator: Navigator) -> Self {
        let host = navigator.context().host.get();
        Self {
            navigator: StoredValue::new_local(navigator),
            view: RwSignal::new(RouteView::Pending),
            location_key: RwSignal::new(String::new()),
            host: RwSignal::new(host),
            scroll: StoredValue::new(ScrollMemory::default()),
        }
    }

    /// Shared router context (query client, host store, files source).
    pub fn router(&self) -> RouterContext {
        self.navigator.with_value(|n| n.context().clone())
    }

    /// Persist a new host and drop data cached for the previous one.
    pub fn set_host(&self, host: &str) -> Result<(), HostError> {
        let router = self.router();
        router.host.set(host)?;
        router.query_client.clear();
        self.host.set(Some(host.to_string()));
        Ok(())
    }

    /// Forget the host and go back to the host form.
    pub fn clear_host(&self) -> Result<(), HostError> {
        let router = self.router();
        router.host.clear()?;
        router.query_client.clear();
        self.host.set(None);
        AppRoute::index().push();
        Ok(())
    }
}

/// Build the production navigator: localStorage host, rclone files API.
fn build_navigator() -> Navigator {
    let host: Rc<dyn HostStore> = Rc::new(LocalHostStore);
    let ctx = RouterContext {
        query_client: QueryClient::new(),
        files: Rc::new(RcloneApi::new(Rc::clone(&host))),
        host,
    };
    Navigator::new(RouteTree::new(), ctx)
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(build_navigator());
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #0a0e27;
                    color: #e0e0e0;
                    font-family: 'Courier New', monospace;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #ff6b6b; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #a0a0a0; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <ul style="
                            text-align: left;
                            color: #ff6b6b;
                            font-size: 0.9rem;
                        ">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #4a90e2;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
