//! Repository for the `user_answers` table.
//!
//! Answers are insert-only: a row is written once per submitted answer and
//! removed only when the parent interview is deleted.

use sqlx::PgPool;

use crate::models::answer::{Answer, NewAnswer};

/// Column list for answer queries.
const COLUMNS: &str = "id, mock_id, question, correct_answer, user_answer, \
    feedback, rating, user_email, created_at";

/// Provides insert and lookup operations for user answers.
pub struct AnswerRepo;

impl AnswerRepo {
    /// Insert a new answer, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewAnswer) -> Result<Answer, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_answers
                (mock_id, question, correct_answer, user_answer,
                 feedback, rating, user_email)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Answer>(&query)
            .bind(&input.mock_id)
            .bind(&input.question)
            .bind(&input.correct_answer)
            .bind(&input.user_answer)
            .bind(&input.feedback)
            .bind(&input.rating)
            .bind(&input.user_email)
            .fetch_one(pool)
            .await
    }

    /// List all answers for an interview in insertion order (ascending id).
    pub async fn list_by_mock_id(
        pool: &PgPool,
        mock_id: &str,
    ) -> Result<Vec<Answer>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_answers
             WHERE mock_id = $1
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Answer>(&query)
            .bind(mock_id)
            .fetch_all(pool)
            .await
    }
}
