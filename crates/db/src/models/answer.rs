//! User-answer entity model and DTOs.

use prepdeck_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `user_answers` table.
///
/// `rating` is free-form text ("4/5", "N/A", a bare number); consumers go
/// through `prepdeck_core::rating::normalize` and never trust it raw.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Answer {
    pub id: DbId,
    /// Public identifier of the parent interview (logical FK).
    pub mock_id: String,
    pub question: String,
    pub correct_answer: Option<String>,
    pub user_answer: Option<String>,
    pub feedback: Option<String>,
    pub rating: Option<String>,
    pub user_email: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for submitting an answer to one interview question.
#[derive(Debug, Deserialize)]
pub struct SubmitAnswer {
    pub question: String,
    #[serde(default)]
    pub correct_answer: Option<String>,
    pub user_answer: String,
}

/// Fully-resolved insert payload for a new answer row. Only `mock_id` and
/// `question` are mandatory.
#[derive(Debug)]
pub struct NewAnswer {
    pub mock_id: String,
    pub question: String,
    pub correct_answer: Option<String>,
    pub user_answer: Option<String>,
    pub feedback: Option<String>,
    pub rating: Option<String>,
    pub user_email: Option<String>,
}
