//! Response interpreter: turns one API call into one message-slot update.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is absorbed here. Callers only see a `bool` and whatever
//! landed in their [`Messages`] slots; raw errors are logged, never returned.
//!
//! Both slots are cleared before the request is issued. Overlapping calls on
//! the same slots are last-write-wins.

#[cfg(test)]
#[path = "outcome_test.rs"]
mod outcome_test;

use super::api::{self, ApiRequest, ApiResponse, Transport};
use super::types::ErrorBody;
use crate::state::StateHandle;
use crate::state::messages::{Message, Messages};

/// Issue `request` and record its outcome in `messages`.
///
/// Returns `true` on a 2xx response, in which case the info slot holds
/// `success` (or stays empty when `success` is `None`).
pub async fn submit<T, S>(transport: &T, messages: &S, request: ApiRequest, success: Option<Message>) -> bool
where
    T: Transport,
    S: StateHandle<Messages>,
{
    messages.modify(Messages::clear);

    let path = request.path;
    match transport.send(request).await {
        Ok(response) if response.is_success() => {
            messages.modify(|m| m.set_info(success));
            true
        }
        Ok(response) => {
            let message = failure_message(path, &response);
            messages.modify(|m| m.set_error(message));
            false
        }
        Err(e) => {
            leptos::logging::error!("{path} request failed: {e}");
            messages.modify(|m| m.set_error(Message::InternalError));
            false
        }
    }
}

/// Map a non-2xx response body to the message shown to the user.
pub fn failure_message(path: &str, response: &ApiResponse) -> Message {
    let body = match serde_json::from_str::<ErrorBody>(&response.body) {
        Ok(body) => body,
        Err(e) => {
            leptos::logging::warn!("{path} returned {} with unreadable error body: {e}", response.status);
            ErrorBody::default()
        }
    };
    let Some(error_id) = body.error_id else {
        leptos::logging::warn!("{path} returned {} without an error_id", response.status);
        return Message::SubmissionFailed;
    };
    Message::from_error_id(&error_id).unwrap_or_else(|| {
        leptos::logging::error!("Unrecognized error ID from {path}: {error_id}");
        Message::SubmissionFailed
    })
}

pub async fn subscribe<T, S>(transport: &T, messages: &S, name: &str, email: &str) -> bool
where
    T: Transport,
    S: StateHandle<Messages>,
{
    let request = api::subscribe_request(name, email);
    submit(transport, messages, request, Some(Message::AddSubscriberSucceeded)).await
}

/// Log in. The session is not touched here; callers refresh it on success.
pub async fn login<T, S>(transport: &T, messages: &S, username: &str, password: &str) -> bool
where
    T: Transport,
    S: StateHandle<Messages>,
{
    submit(transport, messages, api::login_request(username, password), None).await
}

pub async fn publish_newsletter<T, S>(
    transport: &T,
    messages: &S,
    title: &str,
    content_text: &str,
    content_html: &str,
    idempotency_key: &str,
) -> bool
where
    T: Transport,
    S: StateHandle<Messages>,
{
    let request = api::publish_newsletter_request(title, content_text, content_html, idempotency_key);
    submit(transport, messages, request, Some(Message::PublishNewsletterSucceeded)).await
}

pub async fn change_password<T, S>(
    transport: &T,
    messages: &S,
    current_password: &str,
    new_password: &str,
    new_password_check: &str,
) -> bool
where
    T: Transport,
    S: StateHandle<Messages>,
{
    let request = api::change_password_request(current_password, new_password, new_password_check);
    submit(transport, messages, request, Some(Message::ChangePasswordSucceeded)).await
}
