//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::{
    constant::{TEST_AUTH_PATH, TEST_TOKEN_PATH, TEST_USERINFO_PATH},
    error::TestError,
};

/// Test environment produced by `TestBuilder::build()`.
///
/// Holds an in-memory SQLite database, a session backed by a [`MemoryStore`] and a
/// mockito server standing in for the OAuth provider.
///
/// ```ignore
/// let test = TestBuilder::new().with_all_tables().build().await?;
///
/// let milestone = test.roadmap().insert_milestone("Q1", date(2026, 1, 1)).await?;
/// let user = test.user().insert_user(TEST_EDITOR_EMAIL).await?;
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session for test authentication flows
    pub session: Session,

    /// Mock HTTP server for the OAuth provider endpoints
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            session,
            server,
            mocks: Vec::new(),
        })
    }

    pub fn auth_url(&self) -> String {
        format!("{}{}", self.server.url(), TEST_AUTH_PATH)
    }

    pub fn token_url(&self) -> String {
        format!("{}{}", self.server.url(), TEST_TOKEN_PATH)
    }

    pub fn userinfo_url(&self) -> String {
        format!("{}{}", self.server.url(), TEST_USERINFO_PATH)
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
