//! REST request layer for the newsletter backend.
//!
//! Browser (csr): real HTTP calls via `gloo-net`; cookies ride along with
//! every same-origin fetch.
//! Native builds: the transport reports [`TransportError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! Each backend action has a pure request builder so the exact method, path
//! and JSON body can be checked without a network.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

use super::types::{ChangePasswordParams, LoginParams, PublishNewsletterParams, SubscribeParams};
use crate::config::ApiConfig;

pub const SUBSCRIPTIONS_PATH: &str = "/api/subscriptions";
pub const CURRENT_USER_PATH: &str = "/api/admin/user";
pub const LOGIN_PATH: &str = "/api/login";
pub const LOGOUT_PATH: &str = "/api/admin/logout";
pub const NEWSLETTERS_PATH: &str = "/api/admin/newsletters";
pub const PASSWORD_PATH: &str = "/api/admin/password";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One outbound API call. POST bodies are sent as `application/json`.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: &'static str,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(path: &'static str) -> Self {
        Self { method: Method::Get, path, body: None }
    }

    pub fn post(path: &'static str, body: &impl Serialize) -> Self {
        let body = serde_json::to_value(body).unwrap_or_else(|e| {
            leptos::logging::error!("Unable to encode request body for {path}: {e}");
            serde_json::Value::Null
        });
        Self { method: Method::Post, path, body: Some(body) }
    }
}

/// Status and raw body of a received response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure to obtain any response at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("http transport not available outside the browser")]
    Unavailable,
}

/// Sends an [`ApiRequest`] and yields the raw response.
///
/// Futures are not required to be `Send`; everything runs on the browser's
/// single-threaded event loop.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// `fetch`-backed transport used by the running app.
#[derive(Clone, Debug, Default)]
pub struct BrowserTransport {
    config: ApiConfig,
}

impl BrowserTransport {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            let network = |e: gloo_net::Error| TransportError::Network(e.to_string());

            let url = self.config.url(request.path);
            let builder = match request.method {
                Method::Get => gloo_net::http::Request::get(&url),
                Method::Post => gloo_net::http::Request::post(&url),
            };
            let pending = match &request.body {
                Some(body) => builder.json(body).map_err(network)?,
                None => builder.build().map_err(network)?,
            };
            let resp = pending.send().await.map_err(network)?;
            let status = resp.status();
            let body = resp.text().await.map_err(network)?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&self.config, request);
            Err(TransportError::Unavailable)
        }
    }
}

pub fn subscribe_request(name: &str, email: &str) -> ApiRequest {
    let params = SubscribeParams { name: name.to_owned(), email: email.to_owned() };
    ApiRequest::post(SUBSCRIPTIONS_PATH, &params)
}

pub fn current_user_request() -> ApiRequest {
    ApiRequest::get(CURRENT_USER_PATH)
}

pub fn login_request(username: &str, password: &str) -> ApiRequest {
    let params = LoginParams { username: username.to_owned(), password: password.to_owned() };
    ApiRequest::post(LOGIN_PATH, &params)
}

pub fn logout_request() -> ApiRequest {
    ApiRequest::get(LOGOUT_PATH)
}

pub fn publish_newsletter_request(
    title: &str,
    content_text: &str,
    content_html: &str,
    idempotency_key: &str,
) -> ApiRequest {
    let params = PublishNewsletterParams {
        title: title.to_owned(),
        content_text: content_text.to_owned(),
        content_html: content_html.to_owned(),
        idempotency_key: idempotency_key.to_owned(),
    };
    ApiRequest::post(NEWSLETTERS_PATH, &params)
}

pub fn change_password_request(
    current_password: &str,
    new_password: &str,
    new_password_check: &str,
) -> ApiRequest {
    let params = ChangePasswordParams {
        current_password: current_password.to_owned(),
        new_password: new_password.to_owned(),
        new_password_check: new_password_check.to_owned(),
    };
    ApiRequest::post(PASSWORD_PATH, &params)
}

/// Fresh idempotency key for a new logical publish attempt.
pub fn new_idempotency_key() -> String {
    uuid::Uuid::new_v4().to_string()
}
