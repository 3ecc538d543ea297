//! Repository for the `test_cases` table.

use kortex_core::types::DbId;
use sqlx::PgPool;

use crate::models::test_case::{CreateTestCase, TestCase};

const COLUMNS: &str =
    "id, test_suite_id, input_data, expected_output, metadata, created_at, updated_at";

/// Provides insert and lookup operations for test cases.
pub struct TestCaseRepo;

impl TestCaseRepo {
    pub async fn create(pool: &PgPool, input: &CreateTestCase) -> Result<TestCase, sqlx::Error> {
        let query = format!(
            "INSERT INTO test_cases (test_suite_id, input_data, expected_output, metadata)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TestCase>(&query)
            .bind(input.test_suite_id)
            .bind(&input.input_data)
            .bind(&input.expected_output)
            .bind(&input.metadata)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TestCase>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM test_cases WHERE id = $1");
        sqlx::query_as::<_, TestCase>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_by_suite(
        pool: &PgPool,
        test_suite_id: DbId,
    ) -> Result<Vec<TestCase>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM test_cases WHERE test_suite_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, TestCase>(&query)
            .bind(test_suite_id)
            .fetch_all(pool)
            .await
    }
}
