//! Shared client state: the login session and the per-form message slots.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component provides one `RwSignal<SessionState>`; each form owns
//! its own `RwSignal<Messages>`. Operations in `net::outcome` and `session`
//! write through [`StateHandle`] so they run unchanged against a plain
//! `RefCell` in tests.

pub mod messages;
pub mod session;

use std::cell::RefCell;

use leptos::prelude::{RwSignal, Update};

/// Write access to a piece of shared state.
pub trait StateHandle<T> {
    fn modify(&self, f: impl FnOnce(&mut T));
}

impl<T: Send + Sync + 'static> StateHandle<T> for RwSignal<T> {
    fn modify(&self, f: impl FnOnce(&mut T)) {
        Update::update(self, f);
    }
}

impl<T> StateHandle<T> for RefCell<T> {
    fn modify(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.borrow_mut());
    }
}
