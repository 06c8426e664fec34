//! Presentation lookups for question types and personas.
//!
//! Keyed lookups by raw string never fail: unknown question types get a
//! generic entry, unknown personas get the technical entry.

use serde::Serialize;

use crate::interview::models::{Persona, QuestionType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeDisplay {
    pub emoji: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersonaDisplay {
    pub emoji: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// Shown for question types the client does not recognise.
pub const UNKNOWN_TYPE_DISPLAY: TypeDisplay = TypeDisplay {
    emoji: "❓",
    label: "General",
};

pub fn question_type_display(question_type: QuestionType) -> TypeDisplay {
    let (emoji, label) = match question_type {
        QuestionType::Technical => ("💼", "Role-Specific"),
        QuestionType::Behavioral => ("💬", "Behavioral"),
        QuestionType::Situational => ("🎯", "Situational"),
        QuestionType::Leadership => ("👥", "Leadership"),
        QuestionType::ProblemSolving => ("🧩", "Problem Solving"),
        QuestionType::CultureFit => ("🤝", "Culture Fit"),
        QuestionType::SoftSkills => ("🗣️", "Soft Skills"),
    };
    TypeDisplay { emoji, label }
}

pub fn question_type_display_for(key: &str) -> TypeDisplay {
    key.parse::<QuestionType>()
        .map(question_type_display)
        .unwrap_or(UNKNOWN_TYPE_DISPLAY)
}

pub fn persona_display(persona: Persona) -> PersonaDisplay {
    match persona {
        Persona::Technical => PersonaDisplay {
            emoji: "💻",
            label: "Technical Expert",
            description: "Deep role-specific questions, expects specific details and trade-offs",
        },
        Persona::Skeptic => PersonaDisplay {
            emoji: "🤨",
            label: "The Skeptic",
            description: "Challenges your answers, tests composure under pressure",
        },
        Persona::Friendly => PersonaDisplay {
            emoji: "😊",
            label: "Friendly Coach",
            description: "Conversational, focuses on culture fit and collaboration",
        },
        Persona::Rushed => PersonaDisplay {
            emoji: "⏱️",
            label: "Rushed Manager",
            description: "Fast-paced, tests your ability to be concise",
        },
    }
}

pub fn persona_display_for(key: &str) -> PersonaDisplay {
    persona_display(Persona::from_str_lossy(key))
}

pub fn question_type_catalog() -> impl Iterator<Item = (QuestionType, TypeDisplay)> {
    QuestionType::ALL
        .into_iter()
        .map(|t| (t, question_type_display(t)))
}

pub fn persona_catalog() -> impl Iterator<Item = (Persona, PersonaDisplay)> {
    Persona::ALL.into_iter().map(|p| (p, persona_display(p)))
}
