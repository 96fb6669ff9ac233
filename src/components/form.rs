//! Form chrome shared by every page: heading, labelled inputs, submit button.

use leptos::prelude::*;

/// Page heading plus a `<form>` whose submit calls `on_submit`.
#[component]
pub fn AppForm(#[prop(into)] heading: String, on_submit: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <div class="app-form">
            <h1 class="app-form__heading">{heading}</h1>
            <form
                class="app-form__body"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    on_submit.run(());
                }
            >
                {children()}
            </form>
        </div>
    }
}

/// Labelled single-line input bound to `value`.
#[component]
pub fn FormTextField(
    value: RwSignal<String>,
    #[prop(into)] name: String,
    #[prop(into)] label: String,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] autocomplete: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_owned());
    view! {
        <div class="form-field">
            <label class="form-field__label" for=name.clone()>{label}</label>
            <input
                class="form-field__input"
                id=name.clone()
                name=name
                type=input_type
                autocomplete=autocomplete
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

/// Labelled multi-line input bound to `value`.
#[component]
pub fn FormTextArea(value: RwSignal<String>, #[prop(into)] name: String, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-field__label" for=name.clone()>{label}</label>
            <textarea
                class="form-field__input form-field__input--multiline"
                id=name.clone()
                name=name
                rows="8"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </div>
    }
}

#[component]
pub fn SubmitButton(#[prop(into)] busy: Signal<bool>, children: Children) -> impl IntoView {
    view! {
        <div>
            <button class="submit-button" type="submit" disabled=move || busy.get()>
                {children()}
            </button>
        </div>
    }
}
