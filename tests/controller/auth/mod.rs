//! Tests for the OAuth login flow and session user endpoints.

mod callback;
mod login;
mod logout;
mod user;

use super::*;
