//! Answer analysis: scoring a transcript against the persona's hiring
//! signals through an `AnswerAnalyzer` backend.

pub mod analyzer;
pub mod handlers;
pub mod models;
pub mod prompts;
