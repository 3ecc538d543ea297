//! Repository for the `prompt_evaluations` table.

use kortex_core::types::DbId;
use sqlx::PgPool;

use crate::models::prompt_evaluation::{CreatePromptEvaluation, PromptEvaluation};

const COLUMNS: &str = "id, workflow_id, input_data, output_data, metrics, score, created_at";

/// Provides insert and lookup operations for prompt evaluations.
pub struct PromptEvaluationRepo;

impl PromptEvaluationRepo {
    /// Record a new evaluation. Fails with a foreign key violation if the
    /// workflow does not exist.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePromptEvaluation,
    ) -> Result<PromptEvaluation, sqlx::Error> {
        let query = format!(
            "INSERT INTO prompt_evaluations (workflow_id, input_data, output_data, metrics, score)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PromptEvaluation>(&query)
            .bind(input.workflow_id)
            .bind(&input.input_data)
            .bind(&input.output_data)
            .bind(&input.metrics)
            .bind(input.score)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PromptEvaluation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM prompt_evaluations WHERE id = $1");
        sqlx::query_as::<_, PromptEvaluation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List evaluations for a workflow, oldest first.
    pub async fn list_by_workflow(
        pool: &PgPool,
        workflow_id: DbId,
    ) -> Result<Vec<PromptEvaluation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM prompt_evaluations WHERE workflow_id = $1 ORDER BY id ASC"
        );
        sqlx::query_as::<_, PromptEvaluation>(&query)
            .bind(workflow_id)
            .fetch_all(pool)
            .await
    }
}
