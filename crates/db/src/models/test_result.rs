//! Test result entity model and DTOs.

use kortex_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `test_results` table: the outcome of running one case.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TestResult {
    pub id: DbId,
    pub test_case_id: DbId,
    pub actual_output: Option<serde_json::Value>,
    pub is_passed: bool,
    pub error_message: Option<String>,
    /// Wall-clock execution time in seconds.
    pub execution_time: Option<f64>,
    pub created_at: Timestamp,
}

/// DTO for recording a test result.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTestResult {
    pub test_case_id: DbId,
    pub actual_output: Option<serde_json::Value>,
    pub is_passed: bool,
    pub error_message: Option<String>,
    pub execution_time: Option<f64>,
}
