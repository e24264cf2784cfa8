/// Build a [`TestContext`](crate::TestContext) with the provided entity tables.
///
/// ```ignore
/// let test = test_setup_with_tables!()?;
/// let test = test_setup_with_tables!(entity::prelude::Milestone, entity::prelude::RoadmapItem)?;
/// ```
#[macro_export]
macro_rules! test_setup_with_tables {
    () => {{
        $crate::TestBuilder::new().build().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            $(.with_table($entity))+
            .build()
            .await
    }};
}
