//! Session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component provides a single `RwSignal<SessionState>`. Only the
//! operations in this module write it; route guards and user-aware views
//! read it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::StateHandle;
use crate::net::api::{self, Transport};
use crate::net::types::CurrentUser;

/// Who is logged in and where to resume navigation after login.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub username: Option<String>,
    /// Route to return to after an interrupting login.
    pub login_source: Option<String>,
    /// True until the first `fetch_username` has finished.
    pub loading: bool,
    /// Set by `logout` until the page that requested it has gone away.
    /// Route guards stay quiet meanwhile.
    pub logging_out: bool,
}

impl SessionState {
    /// Startup state: nobody logged in, user lookup still pending.
    pub fn pending() -> Self {
        Self { loading: true, ..Self::default() }
    }

    pub fn is_logged_in(&self) -> bool {
        self.username.is_some()
    }
}

/// Refresh `username` from `GET /api/admin/user`.
///
/// Any failure (transport, non-2xx, unreadable body) is treated as logged out.
pub async fn fetch_username<T, S>(transport: &T, session: &S)
where
    T: Transport,
    S: StateHandle<SessionState>,
{
    let username = match transport.send(api::current_user_request()).await {
        Ok(response) if response.is_success() => match serde_json::from_str::<CurrentUser>(&response.body) {
            Ok(user) => Some(user.username),
            Err(e) => {
                leptos::logging::error!("Unable to read response from {}: {e}", api::CURRENT_USER_PATH);
                None
            }
        },
        // Not logged in: the backend answers 401.
        Ok(_) => None,
        Err(e) => {
            leptos::logging::error!("{} request failed: {e}", api::CURRENT_USER_PATH);
            None
        }
    };
    session.modify(|s| {
        s.username = username;
        s.loading = false;
    });
}

/// Request logout, then clear `username` whatever the backend said.
///
/// Also drops any resume pointer and leaves `logging_out` set; the caller
/// navigates away and then calls [`finish_logout`].
pub async fn logout<T, S>(transport: &T, session: &S)
where
    T: Transport,
    S: StateHandle<SessionState>,
{
    session.modify(|s| s.logging_out = true);
    match transport.send(api::logout_request()).await {
        Ok(response) if !response.is_success() => {
            leptos::logging::warn!("{} returned {}", api::LOGOUT_PATH, response.status);
        }
        Ok(_) => {}
        Err(e) => leptos::logging::warn!("{} request failed: {e}", api::LOGOUT_PATH),
    }
    session.modify(|s| {
        s.username = None;
        s.login_source = None;
    });
}

/// Re-arm route guards once the logged-out page is gone.
pub fn finish_logout(session: &impl StateHandle<SessionState>) {
    session.modify(|s| s.logging_out = false);
}

/// Remember `route` so a successful login can return to it.
pub fn set_login_source(session: &impl StateHandle<SessionState>, route: &str) {
    let route = route.to_owned();
    session.modify(|s| s.login_source = Some(route));
}

/// Consume the resume pointer.
pub fn take_login_source(session: &impl StateHandle<SessionState>) -> Option<String> {
    let mut source = None;
    session.modify(|s| source = s.login_source.take());
    source
}
