//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form signals and message slots and delegates the API
//! call to `net::outcome`. Admin pages install the login redirect guard.

pub mod admin;
pub mod login;
pub mod newsletter;
pub mod password;
pub mod subscribe;
