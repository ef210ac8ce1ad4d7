//! Handlers for answer submission and the feedback view.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use prepdeck_core::error::CoreError;
use prepdeck_core::feedback::{self, ScoredFeedback};
use prepdeck_core::rating::{self, RatingTier};
use prepdeck_core::recorder::MIN_ANSWER_LEN;
use prepdeck_db::models::answer::{Answer, NewAnswer, SubmitAnswer};
use prepdeck_db::repositories::AnswerRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::interviews::find_interview;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// One feedback entry: the stored answer plus its normalized rating.
#[derive(Debug, Serialize)]
pub struct FeedbackItem {
    #[serde(flatten)]
    pub answer: Answer,
    pub normalized_rating: f64,
    pub tier: RatingTier,
}

/// Feedback-view payload for one interview.
#[derive(Debug, Serialize)]
pub struct FeedbackView {
    /// Mean of the normalized ratings, one decimal place; `"0.0"` when
    /// there are no answers.
    pub overall_rating: String,
    pub items: Vec<FeedbackItem>,
}

/// POST /api/v1/interviews/{mock_id}/answers
///
/// The scoring/persist operation: score the transcript with one model
/// call, then insert the answer row. Scoring failure degrades to the
/// sentinel feedback pair; it never blocks persistence. Exactly one
/// scoring attempt and one insert happen, in that order.
pub async fn submit_answer(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(mock_id): Path<String>,
    Json(input): Json<SubmitAnswer>,
) -> AppResult<impl IntoResponse> {
    // The interview reference and the question text are the two mandatory
    // fields; everything else on the row is nullable.
    if mock_id.trim().is_empty() || input.question.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Missing required information. Please try again.".into(),
        )));
    }
    if input.user_answer.trim().len() <= MIN_ANSWER_LEN {
        return Err(AppError::Core(CoreError::Validation(
            "Answer text too short or empty!".into(),
        )));
    }

    find_interview(&state.pool, &mock_id).await?;

    let prompt = feedback::feedback_prompt(&input.question, &input.user_answer);
    let scored = match state.ai.generate(&prompt).await {
        Ok(raw) => feedback::parse_feedback(&raw),
        Err(err) => {
            // The user's answer is worth more than the score.
            tracing::warn!(error = %err, %mock_id, "Scoring failed, recording answer with sentinel feedback");
            ScoredFeedback::sentinel()
        }
    };

    let new_answer = NewAnswer {
        mock_id: mock_id.clone(),
        question: input.question,
        correct_answer: input.correct_answer,
        user_answer: Some(input.user_answer),
        feedback: scored.feedback,
        rating: scored.rating,
        user_email: Some(auth.email),
    };
    let answer = AnswerRepo::create(&state.pool, &new_answer).await?;

    tracing::info!(
        %mock_id,
        answer_id = answer.id,
        rating = answer.rating.as_deref().unwrap_or("-"),
        "Answer recorded",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: answer })))
}

/// GET /api/v1/interviews/{mock_id}/feedback
///
/// All answers for an interview in insertion order, each with its
/// normalized rating and color tier, plus the overall mean. An interview
/// with no answers yields an empty item list and `"0.0"`.
pub async fn get_feedback(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(mock_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let answers = AnswerRepo::list_by_mock_id(&state.pool, &mock_id).await?;

    let overall = rating::overall(answers.iter().map(|a| a.rating.as_deref()));
    let items = answers
        .into_iter()
        .map(|answer| {
            let normalized = rating::normalize(answer.rating.as_deref());
            FeedbackItem {
                answer,
                normalized_rating: normalized,
                tier: RatingTier::for_rating(normalized),
            }
        })
        .collect();

    Ok(Json(DataResponse {
        data: FeedbackView {
            overall_rating: rating::format_overall(overall),
            items,
        },
    }))
}
