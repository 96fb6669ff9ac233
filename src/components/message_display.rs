//! Renders a form's error/info slot pair.

use leptos::prelude::*;

use crate::state::messages::Messages;

#[component]
pub fn MessageDisplay(messages: RwSignal<Messages>) -> impl IntoView {
    let error = move || messages.with(|m| m.error.map(|message| message.as_str()));
    let info = move || messages.with(|m| m.info.map(|message| message.as_str()));

    view! {
        <Show when=move || error().is_some()>
            <div class="message message--error" role="alert">{move || error().unwrap_or_default()}</div>
        </Show>
        <Show when=move || info().is_some()>
            <div class="message message--info" role="status">{move || info().unwrap_or_default()}</div>
        </Show>
    }
}
