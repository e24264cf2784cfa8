//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with a [`TestContext`]-backed state and session so each
//! test controls exactly which user, if any, is logged in.

mod auth;
mod health;

use compass_test_utils::prelude::*;

use crate::util::TestContextExt;
