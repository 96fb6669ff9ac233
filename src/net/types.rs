//! Wire DTOs for the newsletter REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON exactly; request bodies are only
//! serialized and response bodies only deserialized.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/subscriptions`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SubscribeParams {
    pub name: String,
    pub email: String,
}

/// Body of `POST /api/login`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginParams {
    pub username: String,
    pub password: String,
}

/// Body of `POST /api/admin/newsletters`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PublishNewsletterParams {
    pub title: String,
    pub content_text: String,
    pub content_html: String,
    /// Client-generated, one per logical publish attempt.
    pub idempotency_key: String,
}

/// Body of `POST /api/admin/password`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChangePasswordParams {
    pub current_password: String,
    pub new_password: String,
    pub new_password_check: String,
}

/// Success body of `GET /api/admin/user`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CurrentUser {
    pub username: String,
}

/// Failure body shared by every POST endpoint.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error_id: Option<String>,
}
