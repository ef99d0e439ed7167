//! Services composing validation with single-statement repository calls.
//!
//! Each service is generic over its repository trait so the HTTP layer can
//! pin it to the SQLite implementations while tests substitute stubs.

pub mod admission;
pub mod patient;
pub mod treatment;
