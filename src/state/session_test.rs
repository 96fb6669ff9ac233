use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::net::api::{Method, TransportError};
use crate::net::scripted::{ScriptedTransport, network_failure, reply};

fn logged_in_as(name: &str) -> RefCell<SessionState> {
    RefCell::new(SessionState { username: Some(name.to_owned()), ..SessionState::default() })
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn default_session_is_logged_out() {
    let state = SessionState::default();
    assert!(!state.is_logged_in());
    assert!(state.login_source.is_none());
    assert!(!state.loading);
    assert!(!state.logging_out);
}

#[test]
fn pending_session_is_loading_and_logged_out() {
    let state = SessionState::pending();
    assert!(state.loading);
    assert!(state.username.is_none());
}

// =============================================================
// fetch_username
// =============================================================

#[test]
fn fetch_username_sets_name_from_success_body() {
    let session = RefCell::new(SessionState::pending());
    let transport = ScriptedTransport::new([reply(200, r#"{"username":"alice"}"#)]);

    block_on(fetch_username(&transport, &session));

    let sent = transport.sent();
    assert_eq!(sent[0].method, Method::Get);
    assert_eq!(sent[0].path, "/api/admin/user");
    let state = session.into_inner();
    assert_eq!(state.username.as_deref(), Some("alice"));
    assert!(!state.loading);
}

#[test]
fn fetch_username_clears_name_on_unauthorized() {
    let session = logged_in_as("alice");
    let transport = ScriptedTransport::new([reply(401, r#"{"error_id":"not_logged_in"}"#)]);

    block_on(fetch_username(&transport, &session));

    assert_eq!(session.into_inner().username, None);
}

#[test]
fn fetch_username_clears_name_on_transport_failure() {
    let session = logged_in_as("alice");
    let transport = ScriptedTransport::new([network_failure()]);

    block_on(fetch_username(&transport, &session));

    assert_eq!(session.into_inner().username, None);
}

#[test]
fn fetch_username_clears_name_on_unreadable_body() {
    let session = logged_in_as("alice");
    let transport = ScriptedTransport::new([reply(200, "not json")]);

    block_on(fetch_username(&transport, &session));

    assert_eq!(session.into_inner().username, None);
}

#[test]
fn fetch_username_keeps_login_source() {
    let session = RefCell::new(SessionState { login_source: Some("/admin/password".to_owned()), ..SessionState::pending() });
    let transport = ScriptedTransport::new([reply(200, r#"{"username":"bob"}"#)]);

    block_on(fetch_username(&transport, &session));

    assert_eq!(session.into_inner().login_source.as_deref(), Some("/admin/password"));
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_name_after_success() {
    let session = logged_in_as("alice");
    let transport = ScriptedTransport::new([reply(200, "")]);

    block_on(logout(&transport, &session));

    assert_eq!(transport.sent()[0].path, "/api/admin/logout");
    assert_eq!(session.into_inner().username, None);
}

#[test]
fn logout_clears_name_even_when_request_fails() {
    let session = logged_in_as("alice");
    let transport = ScriptedTransport::new([Err(TransportError::Network("offline".to_owned()))]);

    block_on(logout(&transport, &session));

    assert_eq!(session.into_inner().username, None);
}

#[test]
fn logout_clears_name_on_error_status() {
    let session = logged_in_as("alice");
    let transport = ScriptedTransport::new([reply(500, "")]);

    block_on(logout(&transport, &session));

    assert_eq!(session.into_inner().username, None);
}

#[test]
fn logout_holds_guards_and_drops_resume_pointer() {
    let session = RefCell::new(SessionState {
        username: Some("alice".to_owned()),
        login_source: Some("/admin".to_owned()),
        ..SessionState::default()
    });
    let transport = ScriptedTransport::new([reply(200, "")]);

    block_on(logout(&transport, &session));

    let state = session.borrow().clone();
    assert!(state.logging_out);
    assert_eq!(state.login_source, None);

    finish_logout(&session);
    assert!(!session.borrow().logging_out);
}

#[test]
fn logout_marks_logging_out_before_request_is_sent() {
    let session = Rc::new(logged_in_as("alice"));
    let seen = Rc::new(RefCell::new(Vec::new()));

    let (watched, record) = (Rc::clone(&session), Rc::clone(&seen));
    let transport =
        ScriptedTransport::new([reply(200, "")]).on_send(move || record.borrow_mut().push(watched.borrow().logging_out));

    block_on(logout(&transport, &*session));

    assert_eq!(*seen.borrow(), vec![true]);
}

// =============================================================
// Resume pointer
// =============================================================

#[test]
fn login_source_round_trips_once() {
    let session = RefCell::new(SessionState::default());

    set_login_source(&session, "/admin/newsletters");

    assert_eq!(take_login_source(&session).as_deref(), Some("/admin/newsletters"));
    assert_eq!(take_login_source(&session), None);
}

#[test]
fn later_login_source_replaces_earlier() {
    let session = RefCell::new(SessionState::default());

    set_login_source(&session, "/admin");
    set_login_source(&session, "/admin/password");

    assert_eq!(session.borrow().login_source.as_deref(), Some("/admin/password"));
}
