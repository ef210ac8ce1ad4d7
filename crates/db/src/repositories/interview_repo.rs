//! Repository for the `interviews` table.

use sqlx::PgPool;

use crate::models::interview::{Interview, NewInterview};

/// Column list for interview queries.
const COLUMNS: &str = "id, mock_id, job_position, tech_stacks, job_description, \
    job_experience, questions_json, created_by, created_at";

/// Provides CRUD operations for interviews.
pub struct InterviewRepo;

impl InterviewRepo {
    /// Insert a new interview, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewInterview) -> Result<Interview, sqlx::Error> {
        let query = format!(
            "INSERT INTO interviews
                (mock_id, job_position, tech_stacks, job_description,
                 job_experience, questions_json, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Interview>(&query)
            .bind(&input.mock_id)
            .bind(&input.job_position)
            .bind(&input.tech_stacks)
            .bind(&input.job_description)
            .bind(&input.job_experience)
            .bind(&input.questions_json)
            .bind(&input.created_by)
            .fetch_one(pool)
            .await
    }

    /// Find an interview by its public identifier.
    pub async fn find_by_mock_id(
        pool: &PgPool,
        mock_id: &str,
    ) -> Result<Option<Interview>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM interviews WHERE mock_id = $1");
        sqlx::query_as::<_, Interview>(&query)
            .bind(mock_id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's interviews, most recent first (descending id).
    pub async fn list_by_creator(
        pool: &PgPool,
        created_by: &str,
    ) -> Result<Vec<Interview>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM interviews
             WHERE created_by = $1
             ORDER BY id DESC"
        );
        sqlx::query_as::<_, Interview>(&query)
            .bind(created_by)
            .fetch_all(pool)
            .await
    }

    /// Delete an interview and all answers referencing it.
    ///
    /// There is no foreign-key cascade, so the answers are removed first;
    /// both statements run in one transaction so a failed second step
    /// cannot leave the interview gone with its answers orphaned, or get
    /// reported as a partial success. Returns `false` when no interview
    /// row existed.
    pub async fn delete_cascade(pool: &PgPool, mock_id: &str) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let answers = sqlx::query("DELETE FROM user_answers WHERE mock_id = $1")
            .bind(mock_id)
            .execute(&mut *tx)
            .await?;

        let interviews = sqlx::query("DELETE FROM interviews WHERE mock_id = $1")
            .bind(mock_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            mock_id,
            answers_deleted = answers.rows_affected(),
            "Deleted interview with its answers",
        );
        Ok(interviews.rows_affected() > 0)
    }
}
