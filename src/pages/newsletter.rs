//! Newsletter publishing form.
//!
//! One idempotency key covers one logical publish attempt: it survives
//! resubmits of the same form and is replaced after a successful publish.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::breadcrumbs::Breadcrumbs;
use crate::components::form::{AppForm, FormTextArea, FormTextField, SubmitButton};
use crate::components::message_display::MessageDisplay;
use crate::net::api::{BrowserTransport, new_idempotency_key};
use crate::net::outcome;
use crate::state::messages::Messages;
use crate::state::session::SessionState;
use crate::util::auth::install_login_redirect;

pub const NEWSLETTERS_ROUTE: &str = "/admin/newsletters";

#[component]
pub fn NewsletterPage() -> impl IntoView {
    let transport = expect_context::<BrowserTransport>();
    let session = expect_context::<RwSignal<SessionState>>();
    install_login_redirect(session, NEWSLETTERS_ROUTE, use_navigate());

    let title = RwSignal::new(String::new());
    let content_text = RwSignal::new(String::new());
    let content_html = RwSignal::new(String::new());
    let idempotency_key = RwSignal::new(new_idempotency_key());
    let messages = RwSignal::new(Messages::default());
    let busy = RwSignal::new(false);

    let on_submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let transport = transport.clone();
        leptos::task::spawn_local(async move {
            let published = outcome::publish_newsletter(
                &transport,
                &messages,
                &title.get_untracked(),
                &content_text.get_untracked(),
                &content_html.get_untracked(),
                &idempotency_key.get_untracked(),
            )
            .await;
            if published {
                title.set(String::new());
                content_text.set(String::new());
                content_html.set(String::new());
                idempotency_key.set(new_idempotency_key());
            }
            busy.set(false);
        });
    });

    view! {
        <Breadcrumbs path=NEWSLETTERS_ROUTE/>
        <AppForm heading="Publish a newsletter" on_submit=on_submit>
            <FormTextField value=title name="title" label="Title" placeholder="Newsletter title"/>
            <FormTextArea value=content_text name="content_text" label="Plain text content"/>
            <FormTextArea value=content_html name="content_html" label="HTML content"/>
            <SubmitButton busy=busy>"Publish"</SubmitButton>
            <MessageDisplay messages=messages/>
        </AppForm>
    }
}
