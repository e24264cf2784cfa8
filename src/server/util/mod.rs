//! Shared helpers for the server layers.

pub mod time;
