//! HTTP/REST application layer for Hospicare.
//!
//! Axum-based JSON API over the patient-care store, plus the `hospicare`
//! binary entry point.

pub mod http;
pub mod state;
