//! OAuth login flow.
//!
//! `login` builds the provider authorization URL with a CSRF state and PKCE challenge,
//! `callback` exchanges the returned code and resolves the signed in user and role.

pub mod callback;
pub mod login;
