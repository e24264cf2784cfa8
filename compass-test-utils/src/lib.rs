//! Shared test harness for the Compass workspace.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares the tables, fixtures and
//! mock OAuth provider endpoints a test needs, then `build()` produces a [`TestContext`]
//! holding an in-memory SQLite database, a memory-backed session and the mock server.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_EDITOR_EMAIL, TEST_VIEWER_EMAIL},
        test_setup_with_tables, TestBuilder, TestContext, TestError,
    };
}
