//! Client for the generative-language API.
//!
//! One request in, one plain-text response out. The service is used as a
//! single-shot request/response channel: no streaming, no multi-turn
//! state, no cancellation once issued.

mod client;

pub use client::{GeminiClient, GeminiError, GenerationConfig, DEFAULT_MODEL};
