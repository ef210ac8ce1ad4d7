//! Scoring prompt construction and feedback-response recovery.
//!
//! The model is instructed to answer with a bare JSON object, but in
//! practice it sometimes wraps the object in a markdown code fence or
//! returns something unparseable. Recovery is layered: direct parse,
//! then fenced-block extraction, then a sentinel pair. The sentinel keeps
//! the user's answer persistable even when scoring is lost.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Feedback used when the model response cannot be parsed at all.
pub const SENTINEL_FEEDBACK: &str = "Could not parse feedback. The answer was recorded.";
/// Rating used when the model response cannot be parsed at all.
pub const SENTINEL_RATING: &str = "N/A";

/// A scored answer as recovered from the model response. Both fields are
/// optional; the rating is kept verbatim as text (see [`crate::rating`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredFeedback {
    pub rating: Option<String>,
    pub feedback: Option<String>,
}

impl ScoredFeedback {
    /// The fallback pair recorded when scoring is unavailable.
    pub fn sentinel() -> Self {
        Self {
            rating: Some(SENTINEL_RATING.to_string()),
            feedback: Some(SENTINEL_FEEDBACK.to_string()),
        }
    }
}

/// Build the scoring prompt for one question/answer pair.
///
/// The formatting constraints (no fences, single-line escaped values, no
/// embedded line breaks) reduce -- but do not eliminate -- the need for
/// the recovery layers in [`parse_feedback`].
pub fn feedback_prompt(question: &str, answer: &str) -> String {
    format!(
        "Question: {question}, User Answer: {answer}, \
         Depending on question and user answer for given interview question \
         Please give us rating for answer and feedback as area of improvement if any. \
         The rating should be upon 5. \
         In Just 3 to 5 lines to improve it in JSON format with rating field and feedback field. \
         Strictly follow these JSON rules: \
         1. **Do not include any markdown formatting** (like ```json or ```). \
         2. Ensure that all answers are **single-line or properly escaped**. \
         3. Do **not** use line breaks (\\n) or extra spaces inside the JSON values."
    )
}

fn fenced_json_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)```json(.*?)```").expect("valid regex"))
}

/// Recover a [`ScoredFeedback`] from a raw model response.
///
/// 1. Parse the trimmed response as JSON directly.
/// 2. Failing that, extract a ```` ```json ```` fenced block and parse its
///    contents.
/// 3. Failing that, return [`ScoredFeedback::sentinel`].
///
/// A numeric `rating` field is stringified; the stored representation is
/// always text.
pub fn parse_feedback(raw: &str) -> ScoredFeedback {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(raw.trim()) {
        return from_value(&value);
    }

    if let Some(captures) = fenced_json_re().captures(raw) {
        let inner = captures[1].trim();
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(inner) {
            return from_value(&value);
        }
    }

    ScoredFeedback::sentinel()
}

fn from_value(value: &serde_json::Value) -> ScoredFeedback {
    let rating = match value.get("rating") {
        Some(serde_json::Value::String(s)) => Some(s.clone()),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    };
    let feedback = value
        .get("feedback")
        .and_then(|v| v.as_str())
        .map(str::to_string);

    ScoredFeedback { rating, feedback }
}
