//! Prompt evaluation entity model and DTOs.

use kortex_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `prompt_evaluations` table: one scored run of a workflow.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PromptEvaluation {
    pub id: DbId,
    pub workflow_id: DbId,
    pub input_data: Option<serde_json::Value>,
    pub output_data: Option<serde_json::Value>,
    pub metrics: Option<serde_json::Value>,
    pub score: Option<f64>,
    pub created_at: Timestamp,
}

/// DTO for recording a new evaluation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePromptEvaluation {
    pub workflow_id: DbId,
    pub input_data: Option<serde_json::Value>,
    pub output_data: Option<serde_json::Value>,
    pub metrics: Option<serde_json::Value>,
    pub score: Option<f64>,
}
