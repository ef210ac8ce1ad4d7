//! Parsing of the AI-generated interview question blob.
//!
//! Each interview row stores the raw model response verbatim. The blob is
//! a JSON object whose question list has appeared under two different key
//! names over time, so the reader tolerates both and treats any malformed
//! shape as an empty list rather than failing the session view.

use serde::{Deserialize, Serialize};

/// Key the question list is expected under.
const QUESTIONS_KEY: &str = "interview_questions";
/// Fallback key observed in older blobs (camelCase drift).
const QUESTIONS_KEY_CAMEL: &str = "interviewQuestions";

/// One generated interview question with its reference answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The question text.
    pub ques: String,
    /// The model's reference answer, when one was generated.
    #[serde(default)]
    pub ans: Option<String>,
}

/// Extract the question list from a stored blob.
///
/// Tries `interview_questions` first, then `interviewQuestions`. Returns
/// an empty list when the blob is not valid JSON, neither key is present,
/// or the value under the key is not an array. Entries that do not have a
/// `ques` field are skipped.
pub fn parse_question_blob(blob: &str) -> Vec<Question> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(blob) else {
        return Vec::new();
    };

    let list = value
        .get(QUESTIONS_KEY)
        .or_else(|| value.get(QUESTIONS_KEY_CAMEL))
        .and_then(|v| v.as_array());

    let Some(list) = list else {
        return Vec::new();
    };

    list.iter()
        .filter_map(|item| serde_json::from_value(item.clone()).ok())
        .collect()
}

/// Build the question-generation prompt for a new interview.
///
/// Asks for a JSON object so the response can be stored verbatim and
/// later read back through [`parse_question_blob`].
pub fn generation_prompt(
    job_position: &str,
    tech_stacks: &str,
    job_description: &str,
    job_experience: &str,
    question_count: usize,
) -> String {
    format!(
        "Job Position: {job_position}, Tech Stacks: {tech_stacks}, \
         Job Description: {job_description}, Years of Experience: {job_experience}. \
         Based on this information, give us {question_count} interview questions \
         with answers in JSON format. Return a single JSON object with an \
         \"interview_questions\" array whose items have \"ques\" and \"ans\" fields. \
         Do not include any markdown formatting."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_key() {
        let blob = r#"{"interview_questions":[{"ques":"What is Rust?","ans":"A language"}]}"#;
        let questions = parse_question_blob(blob);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].ques, "What is Rust?");
        assert_eq!(questions[0].ans.as_deref(), Some("A language"));
    }

    #[test]
    fn camel_case_fallback() {
        let blob = r#"{"interviewQuestions":[{"ques":"Tell me about borrowing"}]}"#;
        let questions = parse_question_blob(blob);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].ques, "Tell me about borrowing");
        assert_eq!(questions[0].ans, None);
    }

    #[test]
    fn snake_case_wins_when_both_present() {
        let blob = r#"{
            "interview_questions":[{"ques":"a"}],
            "interviewQuestions":[{"ques":"b"}]
        }"#;
        let questions = parse_question_blob(blob);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].ques, "a");
    }

    #[test]
    fn invalid_json_is_empty() {
        assert!(parse_question_blob("not json").is_empty());
        assert!(parse_question_blob("").is_empty());
    }

    #[test]
    fn missing_key_is_empty() {
        assert!(parse_question_blob(r#"{"other":[]}"#).is_empty());
        assert!(parse_question_blob("{}").is_empty());
    }

    #[test]
    fn non_array_value_is_empty() {
        assert!(parse_question_blob(r#"{"interview_questions":"oops"}"#).is_empty());
        assert!(parse_question_blob(r#"{"interview_questions":{"ques":"x"}}"#).is_empty());
    }

    #[test]
    fn entries_without_question_text_are_skipped() {
        let blob = r#"{"interview_questions":[{"ques":"ok"},{"ans":"orphan"},42]}"#;
        let questions = parse_question_blob(blob);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].ques, "ok");
    }
}
