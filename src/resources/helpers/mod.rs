//! Shared helpers for the resource primitives.
pub mod fs;
