//! Error display used by route error boundaries.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/error_view.module.css");

/// Shows a single error message with a way back to the default listing.
///
/// `route` names the location that failed, when known.
#[component]
pub fn ErrorView(
    #[prop(into)] message: String,
    #[prop(optional)] route: Option<AppRoute>,
) -> impl IntoView {
    let location = route
        .and_then(|r| r.path_ref())
        .map(|parts| format!("{}{}", parts.fs(), parts.path));

    view! {
        <div class=css::error role="alert">
            <span class=css::icon><Icon icon=ic::ALERT /></span>
            <p class=css::message>{message}</p>
            {location.map(|loc| view! { <code class=css::location>{loc}</code> })}
            <a class=css::back href=AppRoute::default_files().to_hash()>"Back to files"</a>
        </div>
    }
}
