//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration — reading params, driving the
//! flow functions, holding its state signals — and delegates rendering
//! details to `components`.

pub mod hero_detail;
pub mod hero_form;
pub mod hero_list;
pub mod login;
