//! Axum route handlers for the Interview API.

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::display::{persona_catalog, question_type_catalog};
use crate::interview::generator::generate_interview;
use crate::interview::models::{FocusCategory, GeneratedQuestion, Persona, QuestionType};
use crate::interview::role_classifier::{classify, RoleCategory};
use crate::interview::roles_catalog::{suggest_roles, CatalogRole, DEFAULT_SUGGESTION_LIMIT};
use crate::interview::signals::{signals_for_persona, HiringSignal};
use crate::interview::validation::{parse_focus, parse_persona, validate_role_description};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaEntry {
    pub persona: Persona,
    pub emoji: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub signals: &'static [HiringSignal],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionTypeEntry {
    pub question_type: QuestionType,
    pub emoji: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct RoleSuggestionQuery {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyRequest {
    pub role_description: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyResponse {
    pub role_description: String,
    pub role_category: RoleCategory,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartInterviewRequest {
    pub role_description: String,
    pub persona: String,
    #[serde(default)]
    pub focus_category: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartInterviewResponse {
    pub interview_id: Uuid,
    pub role_description: String,
    pub role_category: RoleCategory,
    pub persona: Persona,
    pub focus_category: Option<FocusCategory>,
    pub questions: Vec<GeneratedQuestion>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/personas
pub async fn handle_list_personas() -> Json<Vec<PersonaEntry>> {
    Json(
        persona_catalog()
            .map(|(persona, d)| PersonaEntry {
                persona,
                emoji: d.emoji,
                label: d.label,
                description: d.description,
                signals: signals_for_persona(persona),
            })
            .collect(),
    )
}

/// GET /api/v1/question-types
pub async fn handle_list_question_types() -> Json<Vec<QuestionTypeEntry>> {
    Json(
        question_type_catalog()
            .map(|(question_type, d)| QuestionTypeEntry {
                question_type,
                emoji: d.emoji,
                label: d.label,
            })
            .collect(),
    )
}

/// GET /api/v1/roles?q=&limit=
///
/// Autocomplete over the catalog of common titles.
pub async fn handle_suggest_roles(
    Query(query): Query<RoleSuggestionQuery>,
) -> Json<Vec<&'static CatalogRole>> {
    let limit = query.limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT);
    Json(suggest_roles(&query.q, limit))
}

/// POST /api/v1/roles/classify
pub async fn handle_classify_role(
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, AppError> {
    let role_description = validate_role_description(&request.role_description)?;
    let role_category = classify(&role_description);

    Ok(Json(ClassifyResponse {
        role_description,
        role_category,
    }))
}

/// POST /api/v1/interviews/start
///
/// Classifies the role and generates five questions. Nothing is stored; the
/// returned id only correlates client-side recordings.
pub async fn handle_start_interview(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<StartInterviewRequest>,
) -> Result<(HeaderMap, Json<StartInterviewResponse>), AppError> {
    let decision = state.enforce_rate_limit(&headers)?;

    let role_description = validate_role_description(&request.role_description)?;
    let persona = parse_persona(&request.persona)?;
    let focus_category = parse_focus(request.focus_category.as_deref())?;

    let interview = generate_interview(&role_description, persona, focus_category);
    let interview_id = Uuid::new_v4();

    info!(
        %interview_id,
        category = %interview.role_category,
        %persona,
        "interview started"
    );

    Ok((
        decision.headers(),
        Json(StartInterviewResponse {
            interview_id,
            role_description,
            role_category: interview.role_category,
            persona,
            focus_category,
            questions: interview.questions,
        }),
    ))
}
