//! Handlers for the `/interviews` resource.
//!
//! All endpoints require authentication via [`AuthUser`]; every query is
//! scoped to the signed-in user's email where ownership matters.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use prepdeck_core::error::CoreError;
use prepdeck_core::questions::{self, Question};
use prepdeck_db::models::interview::{CreateInterview, Interview, NewInterview};
use prepdeck_db::repositories::InterviewRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Session-view payload: the interview row plus its parsed question list.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub interview: Interview,
    pub questions: Vec<Question>,
}

/// POST /api/v1/interviews
///
/// Generate a new mock interview: builds the question-generation prompt
/// from the job fields, asks the model for a question set, and stores the
/// raw response blob verbatim under a fresh public identifier.
pub async fn create_interview(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateInterview>,
) -> AppResult<impl IntoResponse> {
    validate_create(&input)?;

    let prompt = questions::generation_prompt(
        input.job_position.trim(),
        input.tech_stacks.trim(),
        input.job_description.trim(),
        input.job_experience.trim(),
        state.config.ai.question_count,
    );
    let blob = state.ai.generate(&prompt).await?;

    let new_interview = NewInterview {
        mock_id: uuid::Uuid::new_v4().to_string(),
        job_position: input.job_position.trim().to_string(),
        tech_stacks: input.tech_stacks.trim().to_string(),
        job_description: input.job_description.trim().to_string(),
        job_experience: input.job_experience.trim().to_string(),
        questions_json: blob,
        created_by: auth.email.clone(),
    };
    let interview = InterviewRepo::create(&state.pool, &new_interview).await?;

    tracing::info!(
        mock_id = %interview.mock_id,
        created_by = %auth.email,
        "Interview created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: interview })))
}

/// GET /api/v1/interviews
///
/// List the caller's interviews, most recent first.
pub async fn list_interviews(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let interviews = InterviewRepo::list_by_creator(&state.pool, &auth.email).await?;
    Ok(Json(DataResponse { data: interviews }))
}

/// GET /api/v1/interviews/{mock_id}
///
/// Fetch one interview with its question list parsed out of the stored
/// blob. A malformed blob yields an empty question list, not an error.
pub async fn get_interview(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(mock_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let interview = find_interview(&state.pool, &mock_id).await?;
    let questions = questions::parse_question_blob(&interview.questions_json);

    Ok(Json(DataResponse {
        data: SessionView {
            interview,
            questions,
        },
    }))
}

/// DELETE /api/v1/interviews/{mock_id}
///
/// Remove an interview and all answers referencing it. Only the creator
/// may delete; the answers are removed first (no foreign-key cascade).
pub async fn delete_interview(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(mock_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let interview = find_interview(&state.pool, &mock_id).await?;
    if interview.created_by != auth.email {
        return Err(AppError::Core(CoreError::Forbidden(
            "Cannot delete another user's interview".into(),
        )));
    }

    InterviewRepo::delete_cascade(&state.pool, &mock_id).await?;

    tracing::info!(%mock_id, deleted_by = %auth.email, "Interview deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Fetch an interview by public identifier or return `NotFound`.
pub(crate) async fn find_interview(
    pool: &sqlx::PgPool,
    mock_id: &str,
) -> AppResult<Interview> {
    InterviewRepo::find_by_mock_id(pool, mock_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Interview",
                id: mock_id.to_string(),
            })
        })
}

fn validate_create(input: &CreateInterview) -> AppResult<()> {
    for (field, value) in [
        ("job_position", &input.job_position),
        ("tech_stacks", &input.tech_stacks),
        ("job_description", &input.job_description),
        ("job_experience", &input.job_experience),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(format!(
                "{field} must not be empty"
            ))));
        }
    }
    Ok(())
}
