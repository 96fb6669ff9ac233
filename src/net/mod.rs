//! Networking modules for the newsletter REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds and sends requests, `outcome` interprets responses into
//! message slots, and `types` defines the JSON wire schema.

pub mod api;
pub mod outcome;
pub mod types;

#[cfg(test)]
pub(crate) mod scripted;
