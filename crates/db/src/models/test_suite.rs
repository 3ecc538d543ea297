//! Test suite entity model and DTOs.

use kortex_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `test_suites` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TestSuite {
    pub id: DbId,
    pub workflow_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

/// DTO for creating a test suite under a workflow.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTestSuite {
    pub workflow_id: DbId,
    pub name: String,
    pub description: Option<String>,
}
