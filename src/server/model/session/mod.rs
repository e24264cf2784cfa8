//! Typed wrappers over tower-sessions storage.
//!
//! Each submodule owns one session key: the logged in user, and the CSRF state and PKCE
//! verifier that live in the session between login and callback.

pub mod auth;
pub mod user;
