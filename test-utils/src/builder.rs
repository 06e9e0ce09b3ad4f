use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables, then call `build()` to create the configured context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{School, Role};
///
/// let test = TestBuilder::new()
///     .with_table(School)
///     .with_table(Role)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys must be added after the tables they
    /// reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an entity table carrying a composite unique index.
    ///
    /// Entities only describe single-column uniqueness, so multi-column keys the
    /// migrations declare have to be added here for upserts to conflict.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create the table for
    /// - `name` - Index name, matching the migration's
    /// - `columns` - Columns forming the unique key
    pub fn with_unique_table<E, I>(mut self, entity: E, name: &str, columns: I) -> Self
    where
        E: EntityTrait,
        I: IntoIterator<Item = E::Column>,
    {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        let mut table = schema.create_table_from_entity(entity);

        let mut index = Index::create();
        index.unique().name(name);
        for column in columns {
            index.col(column);
        }
        table.index(&mut index);

        self.tables.push(table);
        self
    }

    /// Adds the institution tables: schools, roles, contacts, persons and vinculos.
    ///
    /// Enough for token resolution and profile lookups.
    pub fn with_institution_tables(self) -> Self {
        self.with_table(School)
            .with_table(Role)
            .with_table(Contact)
            .with_table(Person)
            .with_table(Vinculo)
    }

    /// Adds every table of the school schema in dependency order.
    ///
    /// Most repository and service tests touch several record tables at once, so
    /// this is the default choice outside of narrow entity tests.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_school_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_school_tables(self) -> Self {
        self.with_institution_tables()
            .with_table(Course)
            .with_table(Subject)
            .with_table(CourseSubject)
            .with_table(TeacherSubject)
            .with_table(Room)
            .with_table(Schedule)
            .with_table(ClassSession)
            .with_table(Enrollment)
            .with_unique_table(
                DailyAttendance,
                "idx_daily_attendance_unique",
                [
                    entity::daily_attendance::Column::StudentVinculoId,
                    entity::daily_attendance::Column::CourseId,
                    entity::daily_attendance::Column::Date,
                ],
            )
            .with_table(Evaluation)
            .with_unique_table(
                Grade,
                "idx_grade_unique",
                [
                    entity::grade::Column::EvaluationId,
                    entity::grade::Column::StudentVinculoId,
                ],
            )
            .with_table(Observation)
            .with_table(Notification)
            .with_table(NotificationRecipient)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
