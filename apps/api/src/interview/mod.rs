//! Interview preparation: role classification, question generation and the
//! persona vocabulary shared with the analysis endpoints.

pub mod display;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod question_bank;
pub mod role_classifier;
pub mod roles_catalog;
pub mod signals;
pub mod validation;
