pub mod answers;
pub mod interviews;
