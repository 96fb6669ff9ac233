//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form chrome and message slots; pages own the signals
//! they bind to.

pub mod breadcrumbs;
pub mod form;
pub mod message_display;
