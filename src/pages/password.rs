//! Change-password form for the logged-in administrator.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::breadcrumbs::Breadcrumbs;
use crate::components::form::{AppForm, FormTextField, SubmitButton};
use crate::components::message_display::MessageDisplay;
use crate::net::api::BrowserTransport;
use crate::net::outcome;
use crate::state::messages::Messages;
use crate::state::session::SessionState;
use crate::util::auth::install_login_redirect;

pub const PASSWORD_ROUTE: &str = "/admin/password";

#[component]
pub fn PasswordPage() -> impl IntoView {
    let transport = expect_context::<BrowserTransport>();
    let session = expect_context::<RwSignal<SessionState>>();
    install_login_redirect(session, PASSWORD_ROUTE, use_navigate());

    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let new_password_check = RwSignal::new(String::new());
    let messages = RwSignal::new(Messages::default());
    let busy = RwSignal::new(false);

    let on_submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let transport = transport.clone();
        leptos::task::spawn_local(async move {
            let changed = outcome::change_password(
                &transport,
                &messages,
                &current_password.get_untracked(),
                &new_password.get_untracked(),
                &new_password_check.get_untracked(),
            )
            .await;
            if changed {
                current_password.set(String::new());
                new_password.set(String::new());
                new_password_check.set(String::new());
            }
            busy.set(false);
        });
    });

    view! {
        <Breadcrumbs path=PASSWORD_ROUTE/>
        <AppForm heading="Change password" on_submit=on_submit>
            <FormTextField
                value=current_password
                name="current_password"
                label="Current password"
                input_type="password"
                autocomplete="current-password"
            />
            <FormTextField
                value=new_password
                name="new_password"
                label="New password"
                input_type="password"
                autocomplete="new-password"
            />
            <FormTextField
                value=new_password_check
                name="new_password_check"
                label="Confirm new password"
                input_type="password"
                autocomplete="new-password"
            />
            <SubmitButton busy=busy>"Change password"</SubmitButton>
            <MessageDisplay messages=messages/>
        </AppForm>
    }
}
