//! Route-scoped state shared through Leptos context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The record service stays the sole source of truth; everything here is a
//! transient, request-scoped copy (a form's working draft, a page's
//! currently displayed record, the toast queue).

pub mod auth;
pub mod hero_detail;
pub mod hero_form;
pub mod toast;
