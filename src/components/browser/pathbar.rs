//! Breadcrumb bar for the current files route.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::link::RouteLink;
use crate::models::{AppRoute, PathRef};

stylance::import_crate_style!(css, "src/components/browser/pathbar.module.css");

/// Crumbs for `parts`: the remote first, then one per path segment, each
/// paired with the route that lists it.
pub fn breadcrumbs(parts: &PathRef) -> Vec<(String, AppRoute)> {
    let mut route = AppRoute::files(parts.remote.clone());
    let mut crumbs = vec![(parts.remote.clone(), route.clone())];
    for segment in parts.segments() {
        route = route.join(segment);
        crumbs.push((segment.to_string(), route.clone()));
    }
    crumbs
}

#[component]
pub fn PathBar(#[prop(into)] route: Signal<Option<AppRoute>>) -> impl IntoView {
    let crumbs = Memo::new(move |_| {
        route
            .get()
            .and_then(|r| r.path_ref())
            .map(|parts| breadcrumbs(&parts))
            .unwrap_or_default()
    });

    view! {
        <nav class=css::pathbar aria-label="Path">
            {move || {
                let crumbs = crumbs.get();
                let last = crumbs.len().saturating_sub(1);
                crumbs
                    .into_iter()
                    .enumerate()
                    .map(|(i, (label, to))| {
                        let icon = (i == 0)
                            .then(|| view! { <span class=css::remote><Icon icon=ic::REMOTE /></span> });
                        let separator = (i > 0)
                            .then(|| view! { <span class=css::separator><Icon icon=ic::CHEVRON_RIGHT /></span> });
                        let crumb = if i == last {
                            view! { <span class=css::current>{label}</span> }.into_any()
                        } else {
                            view! { <RouteLink to=to class=css::crumb>{label}</RouteLink> }.into_any()
                        };
                        view! { {separator} {icon} {crumb} }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
