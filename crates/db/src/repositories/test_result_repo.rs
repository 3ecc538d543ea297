//! Repository for the `test_results` table.

use kortex_core::types::DbId;
use sqlx::PgPool;

use crate::models::test_result::{CreateTestResult, TestResult};

const COLUMNS: &str =
    "id, test_case_id, actual_output, is_passed, error_message, execution_time, created_at";

/// Provides insert and lookup operations for test results.
pub struct TestResultRepo;

impl TestResultRepo {
    pub async fn create(pool: &PgPool, input: &CreateTestResult) -> Result<TestResult, sqlx::Error> {
        let query = format!(
            "INSERT INTO test_results
                (test_case_id, actual_output, is_passed, error_message, execution_time)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TestResult>(&query)
            .bind(input.test_case_id)
            .bind(&input.actual_output)
            .bind(input.is_passed)
            .bind(&input.error_message)
            .bind(input.execution_time)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TestResult>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM test_results WHERE id = $1");
        sqlx::query_as::<_, TestResult>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List results for a case, oldest first.
    pub async fn list_by_case(
        pool: &PgPool,
        test_case_id: DbId,
    ) -> Result<Vec<TestResult>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM test_results WHERE test_case_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, TestResult>(&query)
            .bind(test_case_id)
            .fetch_all(pool)
            .await
    }
}
