use async_trait::async_trait;
use tracing::info;

use crate::analysis::models::{AnalysisInput, AnswerAnalysis, RawAnalysis};
use crate::analysis::prompts::build_analysis_prompt;
use crate::errors::AppError;
use crate::interview::signals::signals_for_persona;
use crate::llm_client::{prompts::JSON_ONLY_SYSTEM, LlmClient};

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores a transcript against the persona's hiring signals.
///
/// Carried in `AppState` as `Option<Arc<dyn AnswerAnalyzer>>`; `None` when no
/// provider is configured.
#[async_trait]
pub trait AnswerAnalyzer: Send + Sync {
    async fn analyze(&self, input: &AnalysisInput) -> Result<AnswerAnalysis, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// LlmAnswerAnalyzer
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmAnswerAnalyzer(pub LlmClient);

#[async_trait]
impl AnswerAnalyzer for LlmAnswerAnalyzer {
    async fn analyze(&self, input: &AnalysisInput) -> Result<AnswerAnalysis, AppError> {
        let signals = signals_for_persona(input.persona);
        let prompt = build_analysis_prompt(input, signals);

        let raw: RawAnalysis = self
            .0
            .call_json(&prompt, JSON_ONLY_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Answer analysis failed: {e}")))?;

        let analysis = AnswerAnalysis::from_raw(raw, input.persona);
        info!(
            persona = %input.persona,
            overall = analysis.overall_score,
            passed = analysis.passed,
            "answer analyzed"
        );
        Ok(analysis)
    }
}
