//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Admin routes apply identical unauthenticated redirect behavior, and the
//! login page resumes wherever that redirect interrupted the user.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{SessionState, set_login_source};

pub const LOGIN_ROUTE: &str = "/login";
pub const DEFAULT_AFTER_LOGIN: &str = "/admin";

/// Whether a guarded route should bounce to the login form.
///
/// Never while the user lookup is pending or a logout is navigating away.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && !state.logging_out && state.username.is_none()
}

/// Absolute in-app path: one leading `/`, not a protocol-relative URL.
fn is_in_app_path(route: &str) -> bool {
    route.starts_with('/') && !route.starts_with("//") && !route.starts_with("/\\")
}

/// Where to go once login succeeds.
pub fn post_login_destination(login_source: Option<String>) -> String {
    login_source
        .filter(|route| is_in_app_path(route) && route != LOGIN_ROUTE)
        .unwrap_or_else(|| DEFAULT_AFTER_LOGIN.to_owned())
}

/// Record `route` as the resume pointer and redirect to `/login` whenever
/// the session has loaded and no user is present.
pub fn install_login_redirect<F>(session: RwSignal<SessionState>, route: &'static str, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    // Memoized so writing the resume pointer does not re-run the effect.
    let must_login = Memo::new(move |_| session.with(should_redirect_unauth));
    Effect::new(move || {
        if must_login.get() {
            set_login_source(&session, route);
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });
}
