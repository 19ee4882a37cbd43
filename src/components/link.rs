//! Route links that preload their target on hover.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::AppContext;
use crate::models::AppRoute;
use crate::utils::dom;

/// Anchor to an application route.
///
/// Hovering (or focusing) the link runs the target's guard and loader in
/// preload mode so the listing is usually cached before the click lands.
#[component]
pub fn RouteLink(
    to: AppRoute,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] title: String,
    children: Children,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let href = to.to_hash();

    let preload = move || {
        let navigator = ctx.navigator.get_value();
        let location = to.location_on(&dom::get_href());
        spawn_local(async move { navigator.preload(location).await });
    };
    let on_hover = preload.clone();

    view! {
        <a
            href=href
            class=class
            title=title
            on:mouseenter=move |_| on_hover()
            on:focus=move |_| preload()
        >
            {children()}
        </a>
    }
}
