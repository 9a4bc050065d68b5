//! Networking modules for the REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles HTTP calls against the record and auth services; `types`
//! defines the shared wire schema. Both services are external collaborators;
//! nothing on this side caches their data.

pub mod api;
pub mod types;
