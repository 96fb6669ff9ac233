//! Breadcrumb trail for the admin area.

#[cfg(test)]
#[path = "breadcrumbs_test.rs"]
mod breadcrumbs_test;

use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub label: &'static str,
    pub href: &'static str,
}

const HOME: Crumb = Crumb { label: "Home", href: "/" };
const ADMIN: Crumb = Crumb { label: "Admin", href: "/admin" };
const NEWSLETTERS: Crumb = Crumb { label: "Publish newsletter", href: "/admin/newsletters" };
const PASSWORD: Crumb = Crumb { label: "Change password", href: "/admin/password" };

/// Trail from the home page to `path`, ending with the current page.
pub fn trail_for(path: &str) -> Vec<Crumb> {
    match path.trim_end_matches('/') {
        "/admin" => vec![HOME, ADMIN],
        "/admin/newsletters" => vec![HOME, ADMIN, NEWSLETTERS],
        "/admin/password" => vec![HOME, ADMIN, PASSWORD],
        _ => vec![HOME],
    }
}

/// Links for every ancestor; the last crumb is plain text.
#[component]
pub fn Breadcrumbs(path: &'static str) -> impl IntoView {
    let trail = trail_for(path);
    let last = trail.len().saturating_sub(1);
    let items = trail
        .into_iter()
        .enumerate()
        .map(|(i, crumb)| {
            if i == last {
                view! { <li class="breadcrumbs__item breadcrumbs__item--current">{crumb.label}</li> }.into_any()
            } else {
                view! {
                    <li class="breadcrumbs__item">
                        <A href=crumb.href>{crumb.label}</A>
                    </li>
                }
                .into_any()
            }
        })
        .collect_view();

    view! {
        <nav class="breadcrumbs" aria-label="Breadcrumb">
            <ol>{items}</ol>
        </nav>
    }
}
