//! Interview entity model and DTOs.

use prepdeck_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `interviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Interview {
    pub id: DbId,
    /// Public identifier used in URLs and as the answers join value.
    pub mock_id: String,
    pub job_position: String,
    pub tech_stacks: String,
    pub job_description: String,
    pub job_experience: String,
    /// AI-generated question blob, stored verbatim.
    pub questions_json: String,
    /// Email of the creating user.
    pub created_by: String,
    pub created_at: Timestamp,
}

/// DTO for creating an interview (the question blob is generated
/// server-side, not supplied by the caller).
#[derive(Debug, Deserialize)]
pub struct CreateInterview {
    pub job_position: String,
    pub tech_stacks: String,
    pub job_description: String,
    pub job_experience: String,
}

/// Fully-resolved insert payload for a new interview row.
#[derive(Debug)]
pub struct NewInterview {
    pub mock_id: String,
    pub job_position: String,
    pub tech_stacks: String,
    pub job_description: String,
    pub job_experience: String,
    pub questions_json: String,
    pub created_by: String,
}
