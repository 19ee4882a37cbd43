//! Host entry form shown on the index route.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::HOST_PLACEHOLDER;
use crate::core::RouteTree;
use crate::models::{AppRoute, Location};
use crate::utils::dom;
use crate::utils::url::{is_same_origin, validate_host};

stylance::import_crate_style!(css, "src/components/host_form.module.css");

/// Where to go after a host has been saved.
///
/// Resumes to `redirect` when it is a files location on this page's origin;
/// everything else lands on the default files route.
pub fn resume_target(redirect: Option<&str>, origin: &str) -> AppRoute {
    redirect
        .filter(|href| is_same_origin(href, origin))
        .and_then(|href| RouteTree::new().resolve(&Location::parse(href)))
        .filter(|route| matches!(route, AppRoute::Files { .. }))
        .unwrap_or_else(AppRoute::default_files)
}

/// Form asking for the rclone remote-control address.
#[component]
pub fn HostForm(redirect: Option<String>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let input = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let host = match validate_host(&input.get_untracked()) {
            Ok(host) => host,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };

        if let Err(err) = ctx.set_host(&host) {
            error.set(Some(err.to_string()));
            return;
        }

        error.set(None);
        resume_target(redirect.as_deref(), &dom::get_origin()).push();
    };

    view! {
        <form class=css::form on:submit=on_submit>
            <h1 class=css::heading>"Connect to rclone"</h1>
            <p class=css::hint>
                "Enter the address of a running "
                <code>"rclone rcd"</code>
                " server."
            </p>
            <input
                class=css::input
                type="url"
                placeholder=HOST_PLACEHOLDER
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
            />
            <Show when=move || error.with(Option::is_some)>
                <p class=css::error>{move || error.get().unwrap_or_default()}</p>
            </Show>
            <button class=css::submit type="submit">"Connect"</button>
        </form>
    }
}
