//! Top-level operations.

pub mod rename;
