//! Shared domain types for Hospicare.
//!
//! This crate contains the record and request types exchanged between the
//! HTTP layer and the store: Patient, Admission, Treatment, and their
//! associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod admission;
pub mod config;
pub mod error;
pub mod patient;
pub mod treatment;
