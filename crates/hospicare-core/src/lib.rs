//! Validators, services, and repository trait definitions for Hospicare.
//!
//! This crate defines the "ports" (repository traits) that the
//! infrastructure layer implements. It depends only on `hospicare-types`
//! -- never on `hospicare-infra` or any database/IO crate.

pub mod repository;
pub mod service;
