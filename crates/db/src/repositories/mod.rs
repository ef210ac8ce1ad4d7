//! Query builders, one unit struct per table.

mod answer_repo;
mod interview_repo;

pub use answer_repo::AnswerRepo;
pub use interview_repo::InterviewRepo;
