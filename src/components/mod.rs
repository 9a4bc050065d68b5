//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form chrome and notification surfaces while the pages
//! own route-scoped orchestration.

pub mod confirm_dialog;
pub mod hero_card;
pub mod snackbar;
