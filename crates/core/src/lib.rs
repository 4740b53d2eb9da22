//! Shared primitive types for the beatstore backend.

pub mod types;
