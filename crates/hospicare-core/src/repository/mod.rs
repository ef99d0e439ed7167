//! Repository trait definitions (ports).
//!
//! These traits define the storage interface that the infrastructure layer
//! (hospicare-infra) implements. The core crate never depends on any
//! specific storage technology.
//!
//! Write operations return the affected-row count. A write that matches
//! zero rows is a success with a count of 0, never an error.

pub mod admission;
pub mod patient;
pub mod treatment;
