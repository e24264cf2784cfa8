//! Declarative test builder.
//!
//! Configuration methods only queue work; tables, fixtures and mock endpoints are created
//! in order during the final `build()` call.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_all_tables: bool,

    users: Vec<String>,
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    oauth_configs: Vec<(String, Option<String>)>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_all_tables: false,
            users: Vec::new(),
            mock_builders: Vec::new(),
            oauth_configs: Vec::new(),
        }
    }

    /// Create every table in the schema, in dependency order.
    pub fn with_all_tables(mut self) -> Self {
        self.include_all_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// ```no_run
    /// use compass_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), compass_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Milestone)
    ///     .with_table(RoadmapItem)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user record with the provided e-mail.
    pub fn with_user(mut self, email: &str) -> Self {
        self.users.push(email.to_string());
        self
    }

    /// Mock the OAuth token exchange and userinfo endpoints so a callback resolves to
    /// the provided identity.
    pub fn with_oauth_endpoints(mut self, email: &str, name: Option<&str>) -> Self {
        self.oauth_configs
            .push((email.to_string(), name.map(|n| n.to_string())));
        self
    }

    /// Add a custom mock endpoint.
    ///
    /// ```no_run
    /// # use compass_test_utils::TestBuilder;
    /// # async fn example() -> Result<(), compass_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_mock_endpoint(|server| {
    ///         server.mock("POST", "/token").with_status(500).create()
    ///     })
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context.
    ///
    /// Creates tables first, then inserts fixtures, then registers mock endpoints.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_all_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::RoadmapUser),
                schema.create_table_from_entity(entity::prelude::Milestone),
                schema.create_table_from_entity(entity::prelude::RoadmapItem),
                schema.create_table_from_entity(entity::prelude::RoadmapItemRelation),
                schema.create_table_from_entity(entity::prelude::Acquisition),
                schema.create_table_from_entity(entity::prelude::Project),
                schema.create_table_from_entity(entity::prelude::AcquisitionProject),
                schema.create_table_from_entity(entity::prelude::AcquisitionProgress),
                schema.create_table_from_entity(entity::prelude::FunctionalityEpic),
                schema.create_table_from_entity(entity::prelude::AcquisitionClientCount),
            ]);
        }

        all_tables.extend(self.tables);
        context.with_tables(all_tables).await?;

        for email in self.users {
            context.user().insert_user(&email).await?;
        }

        for (email, name) in self.oauth_configs {
            let mocks = context.auth().create_oauth_endpoints(&email, name.as_deref())?;
            context.mocks.extend(mocks);
        }

        for builder in self.mock_builders {
            let mock = builder(&mut context.server);
            context.mocks.push(mock);
        }

        Ok(context)
    }
}
