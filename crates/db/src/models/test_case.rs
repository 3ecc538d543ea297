//! Test case entity model and DTOs.

use kortex_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `test_cases` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TestCase {
    pub id: DbId,
    pub test_suite_id: DbId,
    pub input_data: serde_json::Value,
    pub expected_output: Option<serde_json::Value>,
    pub metadata: Option<serde_json::Value>,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

/// DTO for creating a test case. `input_data` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTestCase {
    pub test_suite_id: DbId,
    pub input_data: serde_json::Value,
    pub expected_output: Option<serde_json::Value>,
    pub metadata: Option<serde_json::Value>,
}
