//! Interview rehearsal service: role classification, question generation
//! and answer analysis, plus the axum surface that serves them.

pub mod analysis;
pub mod config;
pub mod constants;
pub mod errors;
pub mod interview;
pub mod llm_client;
pub mod rate_limit;
pub mod routes;
pub mod state;
