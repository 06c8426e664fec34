//! Interview vocabulary: personas, focus categories, question types and the
//! generated question record returned to callers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::interview::role_classifier::RoleCategory;

/// Returned by strict `FromStr` parsing of the interview enums.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Persona
// ────────────────────────────────────────────────────────────────────────────

/// Interviewer style. Drives the default question mix and the text modifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    #[default]
    Technical,
    Skeptic,
    Friendly,
    Rushed,
}

impl Persona {
    pub const ALL: [Persona; 4] = [
        Persona::Technical,
        Persona::Skeptic,
        Persona::Friendly,
        Persona::Rushed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::Technical => "technical",
            Persona::Skeptic => "skeptic",
            Persona::Friendly => "friendly",
            Persona::Rushed => "rushed",
        }
    }

    /// Unknown keys coerce to `Technical`.
    pub fn from_str_lossy(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl FromStr for Persona {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Persona::ALL
            .into_iter()
            .find(|p| p.as_str() == s.trim())
            .ok_or_else(|| ParseEnumError::new("persona", s))
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// FocusCategory
// ────────────────────────────────────────────────────────────────────────────

/// Optional explicit override of the question mix, independent of persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusCategory {
    Technical,
    Behavioral,
    Leadership,
    ProblemSolving,
    SoftSkills,
    CultureFit,
    Situational,
    Mixed,
}

impl FocusCategory {
    pub const ALL: [FocusCategory; 8] = [
        FocusCategory::Technical,
        FocusCategory::Behavioral,
        FocusCategory::Leadership,
        FocusCategory::ProblemSolving,
        FocusCategory::SoftSkills,
        FocusCategory::CultureFit,
        FocusCategory::Situational,
        FocusCategory::Mixed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FocusCategory::Technical => "technical",
            FocusCategory::Behavioral => "behavioral",
            FocusCategory::Leadership => "leadership",
            FocusCategory::ProblemSolving => "problem_solving",
            FocusCategory::SoftSkills => "soft_skills",
            FocusCategory::CultureFit => "culture_fit",
            FocusCategory::Situational => "situational",
            FocusCategory::Mixed => "mixed",
        }
    }

    /// Unknown keys are treated as "no focus", so the persona mix applies.
    pub fn from_str_lossy(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}

impl FromStr for FocusCategory {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FocusCategory::ALL
            .into_iter()
            .find(|f| f.as_str() == s.trim())
            .ok_or_else(|| ParseEnumError::new("focus category", s))
    }
}

impl fmt::Display for FocusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// QuestionType
// ────────────────────────────────────────────────────────────────────────────

/// Kind of question in one slot. Each maps to exactly one question bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Technical,
    Behavioral,
    Situational,
    Leadership,
    ProblemSolving,
    CultureFit,
    SoftSkills,
}

impl QuestionType {
    pub const ALL: [QuestionType; 7] = [
        QuestionType::Technical,
        QuestionType::Behavioral,
        QuestionType::Situational,
        QuestionType::Leadership,
        QuestionType::ProblemSolving,
        QuestionType::CultureFit,
        QuestionType::SoftSkills,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Technical => "technical",
            QuestionType::Behavioral => "behavioral",
            QuestionType::Situational => "situational",
            QuestionType::Leadership => "leadership",
            QuestionType::ProblemSolving => "problem_solving",
            QuestionType::CultureFit => "culture_fit",
            QuestionType::SoftSkills => "soft_skills",
        }
    }

    /// Technical and situational banks are partitioned by role category;
    /// every other type draws from one shared bank.
    pub fn is_role_specific(&self) -> bool {
        matches!(self, QuestionType::Technical | QuestionType::Situational)
    }
}

impl FromStr for QuestionType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionType::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| ParseEnumError::new("question type", s))
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Generated output
// ────────────────────────────────────────────────────────────────────────────

/// One generated question. Created fresh per call, never persisted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuestion {
    pub question_number: u8,
    pub question_type: QuestionType,
    pub question_text: String,
}

/// A full question set together with the category the role resolved to.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedInterview {
    pub role_category: RoleCategory,
    pub questions: Vec<GeneratedQuestion>,
}
