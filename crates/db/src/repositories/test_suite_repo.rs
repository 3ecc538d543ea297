//! Repository for the `test_suites` table.

use kortex_core::types::DbId;
use sqlx::PgPool;

use crate::models::test_suite::{CreateTestSuite, TestSuite};

const COLUMNS: &str = "id, workflow_id, name, description, created_at, updated_at";

/// Provides insert and lookup operations for test suites.
pub struct TestSuiteRepo;

impl TestSuiteRepo {
    pub async fn create(pool: &PgPool, input: &CreateTestSuite) -> Result<TestSuite, sqlx::Error> {
        let query = format!(
            "INSERT INTO test_suites (workflow_id, name, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TestSuite>(&query)
            .bind(input.workflow_id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TestSuite>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM test_suites WHERE id = $1");
        sqlx::query_as::<_, TestSuite>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_by_workflow(
        pool: &PgPool,
        workflow_id: DbId,
    ) -> Result<Vec<TestSuite>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM test_suites WHERE workflow_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, TestSuite>(&query)
            .bind(workflow_id)
            .fetch_all(pool)
            .await
    }
}
