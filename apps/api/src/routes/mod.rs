pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::errors::AppError;
use crate::interview::handlers as interview;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog
        .route("/api/v1/personas", get(interview::handle_list_personas))
        .route(
            "/api/v1/question-types",
            get(interview::handle_list_question_types),
        )
        // Interview
        .route("/api/v1/roles", get(interview::handle_suggest_roles))
        .route("/api/v1/roles/classify", post(interview::handle_classify_role))
        .route(
            "/api/v1/interviews/start",
            post(interview::handle_start_interview),
        )
        // Analysis
        .route(
            "/api/v1/answers/analyze",
            post(analysis::handle_analyze_answer),
        )
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    use super::*;
    use crate::config::Config;

    fn test_state() -> AppState {
        AppState::new(Config::default(), None)
    }

    async fn read_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, payload: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .header("x-forwarded-for", "198.51.100.4")
            .body(Body::from(payload.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = build_router(test_state())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = read_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "prepscore-api");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let response = build_router(test_state())
            .oneshot(Request::get("/api/v1/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = read_json(response).await;
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_list_personas_includes_signals() {
        let response = build_router(test_state())
            .oneshot(Request::get("/api/v1/personas").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let json = read_json(response).await;
        let personas = json.as_array().unwrap();
        assert_eq!(personas.len(), 4);
        assert_eq!(personas[1]["persona"], "skeptic");
        assert_eq!(personas[1]["label"], "The Skeptic");
        assert_eq!(personas[1]["signals"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_list_question_types() {
        let response = build_router(test_state())
            .oneshot(
                Request::get("/api/v1/question-types")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = read_json(response).await;
        let types = json.as_array().unwrap();
        assert_eq!(types.len(), 7);
        assert_eq!(types[0]["questionType"], "technical");
        assert_eq!(types[0]["label"], "Role-Specific");
    }

    #[tokio::test]
    async fn test_suggest_roles() {
        let response = build_router(test_state())
            .oneshot(
                Request::get("/api/v1/roles?q=counsel&limit=2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = read_json(response).await;
        let roles = json.as_array().unwrap();
        assert_eq!(roles.len(), 2);
        for role in roles {
            let title = role["title"].as_str().unwrap().to_lowercase();
            assert!(title.contains("counsel"), "{title}");
            assert_eq!(role["roleCategory"], "legal");
        }
    }

    #[tokio::test]
    async fn test_suggest_roles_without_query_is_empty() {
        let response = build_router(test_state())
            .oneshot(Request::get("/api/v1/roles").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_classify_role() {
        let response = build_router(test_state())
            .oneshot(post_json(
                "/api/v1/roles/classify",
                json!({ "roleDescription": "  Senior <b>Data Scientist</b> " }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = read_json(response).await;
        assert_eq!(json["roleDescription"], "Senior bData Scientist/b");
        assert_eq!(json["roleCategory"], "data");
    }

    #[tokio::test]
    async fn test_start_interview() {
        let response = build_router(test_state())
            .oneshot(post_json(
                "/api/v1/interviews/start",
                json!({
                    "roleDescription": "Backend Engineer (Go, Postgres)",
                    "persona": "skeptic",
                    "focusCategory": "behavioral"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["x-ratelimit-limit"], "20");
        assert_eq!(response.headers()["x-ratelimit-remaining"], "19");

        let json = read_json(response).await;
        assert_eq!(json["roleCategory"], "backend");
        assert_eq!(json["persona"], "skeptic");
        assert_eq!(json["focusCategory"], "behavioral");
        assert!(uuid::Uuid::parse_str(json["interviewId"].as_str().unwrap()).is_ok());

        let questions = json["questions"].as_array().unwrap();
        assert_eq!(questions.len(), 5);
        let numbers: Vec<u64> = questions
            .iter()
            .map(|q| q["questionNumber"].as_u64().unwrap())
            .collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
        let texts: HashSet<&str> = questions
            .iter()
            .map(|q| q["questionText"].as_str().unwrap())
            .collect();
        assert_eq!(texts.len(), 5);
    }

    #[tokio::test]
    async fn test_start_interview_without_focus() {
        let response = build_router(test_state())
            .oneshot(post_json(
                "/api/v1/interviews/start",
                json!({ "roleDescription": "Product Manager", "persona": "friendly" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = read_json(response).await;
        assert_eq!(json["roleCategory"], "product");
        assert!(json["focusCategory"].is_null());
    }

    #[tokio::test]
    async fn test_start_interview_validation() {
        let router = build_router(test_state());

        let short = router
            .clone()
            .oneshot(post_json(
                "/api/v1/interviews/start",
                json!({ "roleDescription": "<>", "persona": "technical" }),
            ))
            .await
            .unwrap();
        assert_eq!(short.status(), StatusCode::BAD_REQUEST);

        let bad_persona = router
            .clone()
            .oneshot(post_json(
                "/api/v1/interviews/start",
                json!({ "roleDescription": "Nurse", "persona": "pirate" }),
            ))
            .await
            .unwrap();
        assert_eq!(bad_persona.status(), StatusCode::BAD_REQUEST);

        let bad_focus = router
            .oneshot(post_json(
                "/api/v1/interviews/start",
                json!({
                    "roleDescription": "Nurse",
                    "persona": "technical",
                    "focusCategory": "system_design"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(bad_focus.status(), StatusCode::BAD_REQUEST);
        let json = read_json(bad_focus).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_start_interview_rate_limited() {
        let config = Config {
            rate_limit_requests: 2,
            ..Config::default()
        };
        let router = build_router(AppState::new(config, None));
        let payload = json!({ "roleDescription": "Chef", "persona": "rushed" });

        for _ in 0..2 {
            let ok = router
                .clone()
                .oneshot(post_json("/api/v1/interviews/start", payload.clone()))
                .await
                .unwrap();
            assert_eq!(ok.status(), StatusCode::OK);
        }

        let limited = router
            .oneshot(post_json("/api/v1/interviews/start", payload))
            .await
            .unwrap();
        assert_eq!(limited.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(limited.headers()["x-ratelimit-remaining"], "0");
        assert!(limited.headers().contains_key("retry-after"));
        let json = read_json(limited).await;
        assert_eq!(json["error"]["code"], "RATE_LIMITED");
    }
}
