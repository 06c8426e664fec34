//! Request-level checks shared by the interview and analysis endpoints.
//!
//! The generator itself never rejects input (unknown values are coerced);
//! these functions are the strict layer in front of it.

use crate::constants::{
    MAX_QUESTION_LENGTH, MAX_ROLE_DESCRIPTION_LENGTH, MAX_TRANSCRIPT_LENGTH,
    MIN_ROLE_DESCRIPTION_LENGTH,
};
use crate::errors::AppError;
use crate::interview::models::{FocusCategory, Persona};

/// Removes angle brackets and surrounding whitespace.
pub fn sanitize_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '<' | '>'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Sanitizes then checks the length bounds, counted in characters.
pub fn validate_role_description(raw: &str) -> Result<String, AppError> {
    let cleaned = sanitize_text(raw);
    let len = cleaned.chars().count();
    if len < MIN_ROLE_DESCRIPTION_LENGTH {
        return Err(AppError::Validation(format!(
            "roleDescription must be at least {MIN_ROLE_DESCRIPTION_LENGTH} characters"
        )));
    }
    if len > MAX_ROLE_DESCRIPTION_LENGTH {
        return Err(AppError::Validation(format!(
            "roleDescription must be at most {MAX_ROLE_DESCRIPTION_LENGTH} characters"
        )));
    }
    Ok(cleaned)
}

pub fn parse_persona(raw: &str) -> Result<Persona, AppError> {
    raw.parse::<Persona>().map_err(|_| {
        AppError::Validation(
            "persona must be one of: technical, skeptic, friendly, rushed".to_string(),
        )
    })
}

/// `None` and blank strings mean "no focus".
pub fn parse_focus(raw: Option<&str>) -> Result<Option<FocusCategory>, AppError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(value) => value
            .parse::<FocusCategory>()
            .map(Some)
            .map_err(|e| AppError::Validation(e.to_string())),
    }
}

pub fn validate_transcript(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("transcript cannot be empty".to_string()));
    }
    if trimmed.chars().count() > MAX_TRANSCRIPT_LENGTH {
        return Err(AppError::Validation(format!(
            "transcript must be at most {MAX_TRANSCRIPT_LENGTH} characters"
        )));
    }
    Ok(trimmed.to_string())
}

pub fn validate_question(raw: &str) -> Result<String, AppError> {
    let cleaned = sanitize_text(raw);
    if cleaned.is_empty() {
        return Err(AppError::Validation("question cannot be empty".to_string()));
    }
    if cleaned.chars().count() > MAX_QUESTION_LENGTH {
        return Err(AppError::Validation(format!(
            "question must be at most {MAX_QUESTION_LENGTH} characters"
        )));
    }
    Ok(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_angle_brackets() {
        assert_eq!(
            sanitize_text("  <script>Backend Engineer</script> "),
            "scriptBackend Engineer/script"
        );
    }

    #[test]
    fn test_role_description_bounds() {
        assert!(validate_role_description("QA").is_err());
        assert!(validate_role_description("<<QA>>").is_err());
        assert_eq!(validate_role_description(" SRE ").unwrap(), "SRE");
        assert!(validate_role_description(&"a".repeat(500)).is_ok());
        assert!(validate_role_description(&"a".repeat(501)).is_err());
    }

    #[test]
    fn test_persona_is_strict() {
        assert_eq!(parse_persona("rushed").unwrap(), Persona::Rushed);
        assert!(matches!(parse_persona("pirate"), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_focus_blank_is_none() {
        assert_eq!(parse_focus(None).unwrap(), None);
        assert_eq!(parse_focus(Some("  ")).unwrap(), None);
        assert_eq!(
            parse_focus(Some("soft_skills")).unwrap(),
            Some(FocusCategory::SoftSkills)
        );
        assert!(parse_focus(Some("system_design")).is_err());
    }

    #[test]
    fn test_transcript_limits() {
        assert!(validate_transcript("   ").is_err());
        assert!(validate_transcript(&"x".repeat(MAX_TRANSCRIPT_LENGTH + 1)).is_err());
        assert_eq!(validate_transcript(" I led it. ").unwrap(), "I led it.");
    }

    #[test]
    fn test_question_required() {
        assert!(validate_question("<>").is_err());
        assert_eq!(validate_question("Why us?").unwrap(), "Why us?");
    }
}
