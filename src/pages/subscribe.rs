//! Public landing page: newsletter sign-up form.

use leptos::prelude::*;

use crate::components::form::{AppForm, FormTextField, SubmitButton};
use crate::components::message_display::MessageDisplay;
use crate::net::api::BrowserTransport;
use crate::net::outcome;
use crate::state::messages::Messages;

#[component]
pub fn SubscribePage() -> impl IntoView {
    let transport = expect_context::<BrowserTransport>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let messages = RwSignal::new(Messages::default());
    let busy = RwSignal::new(false);

    let on_submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let transport = transport.clone();
        leptos::task::spawn_local(async move {
            let subscribed =
                outcome::subscribe(&transport, &messages, &name.get_untracked(), &email.get_untracked()).await;
            if subscribed {
                name.set(String::new());
                email.set(String::new());
            }
            busy.set(false);
        });
    });

    view! {
        <AppForm heading="Welcome to our newsletter" on_submit=on_submit>
            <p>"To subscribe to our newsletter, enter your information here."</p>
            <FormTextField
                value=name
                name="name"
                label="Name"
                autocomplete="name"
                placeholder="Enter your name"
            />
            <FormTextField
                value=email
                name="email"
                label="Email address"
                input_type="email"
                autocomplete="email"
                placeholder="Enter your email address"
            />
            <SubmitButton busy=busy>"Subscribe"</SubmitButton>
            <MessageDisplay messages=messages/>
        </AppForm>
    }
}
