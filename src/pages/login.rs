//! Administrator login form.
//!
//! On success the session is refreshed and the user is sent back to the
//! route that redirected them here, or to the dashboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form::{AppForm, FormTextField, SubmitButton};
use crate::components::message_display::MessageDisplay;
use crate::net::api::BrowserTransport;
use crate::net::outcome;
use crate::state::messages::Messages;
use crate::state::session::{SessionState, fetch_username, take_login_source};
use crate::util::auth::post_login_destination;

#[component]
pub fn LoginPage() -> impl IntoView {
    let transport = expect_context::<BrowserTransport>();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let messages = RwSignal::new(Messages::default());
    let busy = RwSignal::new(false);

    let on_submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let transport = transport.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let logged_in =
                outcome::login(&transport, &messages, &username.get_untracked(), &password.get_untracked()).await;
            password.set(String::new());
            if logged_in {
                fetch_username(&transport, &session).await;
                let destination = post_login_destination(take_login_source(&session));
                navigate(&destination, NavigateOptions::default());
            }
            busy.set(false);
        });
    });

    view! {
        <AppForm heading="Log in" on_submit=on_submit>
            <FormTextField
                value=username
                name="username"
                label="Username"
                autocomplete="username"
                placeholder="Enter your username"
            />
            <FormTextField
                value=password
                name="password"
                label="Password"
                input_type="password"
                autocomplete="current-password"
                placeholder="Enter your password"
            />
            <SubmitButton busy=busy>"Log in"</SubmitButton>
            <MessageDisplay messages=messages/>
        </AppForm>
    }
}
