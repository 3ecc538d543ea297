//! Repository for the `prompt_workflows` table.

use kortex_core::types::DbId;
use kortex_core::workflow::WorkflowFields;
use sqlx::PgPool;

use crate::models::prompt_workflow::PromptWorkflow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, description, prompt_template, parameters, created_at, updated_at";

/// Provides CRUD operations for prompt workflows.
pub struct PromptWorkflowRepo;

impl PromptWorkflowRepo {
    /// Insert a new workflow, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &WorkflowFields,
    ) -> Result<PromptWorkflow, sqlx::Error> {
        let query = format!(
            "INSERT INTO prompt_workflows (name, description, prompt_template, parameters)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PromptWorkflow>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.prompt_template)
            .bind(&input.parameters)
            .fetch_one(pool)
            .await
    }

    /// Find a workflow by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PromptWorkflow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM prompt_workflows WHERE id = $1");
        sqlx::query_as::<_, PromptWorkflow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List workflows in insertion order, skipping `offset` rows and
    /// returning at most `limit`. Callers clamp both values.
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<PromptWorkflow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM prompt_workflows
             ORDER BY id ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, PromptWorkflow>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total number of workflows.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM prompt_workflows")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Overwrite all mutable columns of a workflow and stamp `updated_at`.
    ///
    /// Fields absent from `input` are written as NULL; this is a full
    /// replacement, not a patch. Returns `None` if no row with `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &WorkflowFields,
    ) -> Result<Option<PromptWorkflow>, sqlx::Error> {
        let query = format!(
            "UPDATE prompt_workflows SET
                name = $2,
                description = $3,
                prompt_template = $4,
                parameters = $5,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PromptWorkflow>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.prompt_template)
            .bind(&input.parameters)
            .fetch_optional(pool)
            .await
    }

    /// Delete a workflow by ID. Returns `true` if a row was removed.
    ///
    /// Evaluations and test suites (and, through them, cases and results)
    /// are removed by `ON DELETE CASCADE`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM prompt_workflows WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
