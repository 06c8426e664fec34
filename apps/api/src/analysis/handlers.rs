//! Axum route handlers for the Analysis API.

use axum::{extract::State, http::HeaderMap, Json};

use crate::analysis::models::{AnalysisInput, AnalysisRequest, AnswerAnalysis};
use crate::errors::AppError;
use crate::interview::validation::{
    parse_persona, validate_question, validate_role_description, validate_transcript,
};
use crate::state::AppState;

/// POST /api/v1/answers/analyze
///
/// Scores one answer transcript against the persona's hiring signals.
pub async fn handle_analyze_answer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<AnalysisRequest>,
) -> Result<(HeaderMap, Json<AnswerAnalysis>), AppError> {
    let decision = state.enforce_rate_limit(&headers)?;

    let input = AnalysisInput {
        transcript: validate_transcript(&request.transcript)?,
        role_description: validate_role_description(&request.role_description)?,
        persona: parse_persona(&request.persona)?,
        question: validate_question(&request.question)?,
    };

    let analyzer = state.analyzer.as_ref().ok_or_else(|| {
        AppError::ServiceUnavailable("Answer analysis is not configured".to_string())
    })?;

    let analysis = analyzer.analyze(&input).await?;

    Ok((decision.headers(), Json(analysis)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    use crate::analysis::analyzer::AnswerAnalyzer;
    use crate::analysis::models::{RawAnalysis, RawSignal};
    use crate::config::Config;
    use crate::errors::AppError;
    use crate::routes::build_router;
    use crate::state::AppState;

    use super::*;

    /// Returns a fixed score for every signal of the requested persona.
    struct FixedAnalyzer(f64);

    #[async_trait]
    impl AnswerAnalyzer for FixedAnalyzer {
        async fn analyze(&self, input: &AnalysisInput) -> Result<AnswerAnalysis, AppError> {
            let raw = RawAnalysis {
                signals: crate::interview::signals::signals_for_persona(input.persona)
                    .iter()
                    .map(|s| RawSignal {
                        name: s.name.to_string(),
                        score: self.0,
                        reason: "stub".to_string(),
                    })
                    .collect(),
                strengths: vec!["Direct".to_string()],
                ..Default::default()
            };
            Ok(AnswerAnalysis::from_raw(raw, input.persona))
        }
    }

    fn body(persona: &str, transcript: &str) -> Body {
        Body::from(
            json!({
                "transcript": transcript,
                "roleDescription": "Backend Engineer",
                "persona": persona,
                "question": "Tell me about a hard bug."
            })
            .to_string(),
        )
    }

    async fn post(state: AppState, payload: Body) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/answers/analyze")
            .header("content-type", "application/json")
            .body(payload)
            .unwrap();
        let response = build_router(state).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_analyze_with_stub() {
        let state = AppState::new(Config::default(), Some(Arc::new(FixedAnalyzer(8.0))));
        let (status, json) = post(state, body("technical", "I bisected the commits.")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["signals"].as_array().unwrap().len(), 5);
        assert_eq!(json["overallScore"], 8.0);
        assert_eq!(json["passed"], true);
        assert_eq!(json["persona"], "technical");
    }

    #[tokio::test]
    async fn test_analyze_without_analyzer_is_503() {
        let state = AppState::new(Config::default(), None);
        let (status, json) = post(state, body("technical", "I bisected the commits.")).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json["error"]["code"], "SERVICE_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_analyze_rejects_empty_transcript() {
        let state = AppState::new(Config::default(), Some(Arc::new(FixedAnalyzer(5.0))));
        let (status, json) = post(state, body("technical", "   ")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_analyze_rejects_unknown_persona() {
        let state = AppState::new(Config::default(), Some(Arc::new(FixedAnalyzer(5.0))));
        let (status, _) = post(state, body("pirate", "An answer.")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
