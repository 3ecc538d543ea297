//! Prompt workflow entity model.
//!
//! Inserts and full replacements take
//! [`WorkflowFields`](kortex_core::workflow::WorkflowFields), which only exists
//! once a request payload has passed validation.

use kortex_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `prompt_workflows` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PromptWorkflow {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub prompt_template: String,
    pub parameters: Option<serde_json::Value>,
    pub created_at: Timestamp,
    /// `None` until the row is first replaced.
    pub updated_at: Option<Timestamp>,
}
