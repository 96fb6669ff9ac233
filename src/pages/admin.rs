//! Admin dashboard: greeting, links to admin actions, logout.
//! Redirects to `/login` if nobody is logged in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::breadcrumbs::Breadcrumbs;
use crate::net::api::BrowserTransport;
use crate::state::session::{self, SessionState};
use crate::util::auth::install_login_redirect;

pub const ADMIN_ROUTE: &str = "/admin";

#[component]
pub fn AdminPage() -> impl IntoView {
    let transport = expect_context::<BrowserTransport>();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    install_login_redirect(session, ADMIN_ROUTE, navigate.clone());
    on_cleanup(move || session::finish_logout(&session));

    let on_logout = move |_: leptos::ev::MouseEvent| {
        let transport = transport.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            session::logout(&transport, &session).await;
            navigate("/", NavigateOptions::default());
        });
    };

    let username = move || session.with(|s| s.username.clone().unwrap_or_default());

    view! {
        <Show
            when=move || session.with(SessionState::is_logged_in)
            fallback=move || view! { <p class="admin-page__pending">"Loading..."</p> }
        >
            <div class="admin-page">
                <Breadcrumbs path=ADMIN_ROUTE/>
                <h1 class="app-form__heading">"Admin dashboard"</h1>
                <p>"Welcome " {username} "!"</p>
                <ul class="admin-page__actions">
                    <li><A href="/admin/newsletters">"Publish a newsletter"</A></li>
                    <li><A href="/admin/password">"Change password"</A></li>
                </ul>
                <button class="submit-button" type="button" on:click=on_logout.clone()>
                    "Log out"
                </button>
            </div>
        </Show>
    }
}
