//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{A, Route, Router, Routes};
use leptos_router::{StaticSegment, path};

use crate::config::ApiConfig;
use crate::net::api::BrowserTransport;
use crate::pages::{
    admin::AdminPage, login::LoginPage, newsletter::NewsletterPage, password::PasswordPage, subscribe::SubscribePage,
};
use crate::state::session::{SessionState, fetch_username};

/// Root application component.
///
/// Provides the transport and the single session context, kicks off the
/// initial user lookup, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let transport = BrowserTransport::new(ApiConfig::from_build_env());
    let session = RwSignal::new(SessionState::pending());

    provide_context(transport.clone());
    provide_context(session);

    leptos::task::spawn_local(async move {
        fetch_username(&transport, &session).await;
    });

    view! {
        <Title text="Newsletter"/>

        <Router>
            <Navbar session=session/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=SubscribePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                    <Route path=path!("/admin/newsletters") view=NewsletterPage/>
                    <Route path=path!("/admin/password") view=PasswordPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Shared navbar: home link plus login/admin depending on the session.
#[component]
fn Navbar(session: RwSignal<SessionState>) -> impl IntoView {
    view! {
        <nav id="navbar">
            <A href="/">"Home"</A>
            <Show
                when=move || session.with(SessionState::is_logged_in)
                fallback=|| view! { <A href="/login">"Log in"</A> }
            >
                <A href="/admin">"Admin"</A>
            </Show>
        </nav>
    }
}
