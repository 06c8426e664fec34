//! Hiring signals an answer is scored against, per interviewer persona.

use serde::Serialize;

use crate::interview::models::Persona;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HiringSignal {
    pub name: &'static str,
    pub definition: &'static str,
}

const fn signal(name: &'static str, definition: &'static str) -> HiringSignal {
    HiringSignal { name, definition }
}

const TECHNICAL_SIGNALS: &[HiringSignal] = &[
    signal(
        "Problem Framing",
        "Ability to break down complex problems into clear components",
    ),
    signal(
        "Technical Depth",
        "Understanding of technical concepts and ability to explain them clearly",
    ),
    signal(
        "Trade-off Discussion",
        "Awareness of pros/cons and ability to justify technical decisions",
    ),
    signal(
        "Code Quality Awareness",
        "Consideration for maintainability, testing, and best practices",
    ),
    signal(
        "Communication Clarity",
        "Ability to explain technical concepts to different audiences",
    ),
];

const SKEPTIC_SIGNALS: &[HiringSignal] = &[
    signal(
        "Defensiveness Under Pressure",
        "Ability to remain composed when challenged or questioned",
    ),
    signal(
        "Evidence-Based Reasoning",
        "Supporting claims with data, examples, or concrete reasoning",
    ),
    signal(
        "Receptiveness to Feedback",
        "Openness to alternative viewpoints and constructive criticism",
    ),
    signal(
        "Problem Ownership",
        "Taking responsibility for challenges and demonstrating learning",
    ),
    signal(
        "Confidence Without Arrogance",
        "Asserting expertise while remaining humble and curious",
    ),
];

const FRIENDLY_SIGNALS: &[HiringSignal] = &[
    signal(
        "Storytelling",
        "Ability to share experiences in a structured and engaging way",
    ),
    signal(
        "Collaboration Examples",
        "Demonstrating teamwork and interpersonal skills",
    ),
    signal(
        "Self-Awareness",
        "Honest reflection on strengths, weaknesses, and growth areas",
    ),
    signal(
        "Cultural Fit",
        "Values alignment and enthusiasm for the role and company",
    ),
    signal(
        "Curiosity",
        "Asking thoughtful questions and showing genuine interest",
    ),
];

const RUSHED_SIGNALS: &[HiringSignal] = &[
    signal(
        "Conciseness",
        "Ability to communicate key points quickly without rambling",
    ),
    signal(
        "Prioritization",
        "Focus on the most important information first",
    ),
    signal(
        "Composure Under Time Pressure",
        "Remaining calm and organized when rushed",
    ),
    signal(
        "Impact Focus",
        "Emphasizing results and outcomes over process details",
    ),
    signal(
        "Adaptability",
        "Adjusting communication style to match interviewer's pace",
    ),
];

pub fn signals_for_persona(persona: Persona) -> &'static [HiringSignal] {
    match persona {
        Persona::Technical => TECHNICAL_SIGNALS,
        Persona::Skeptic => SKEPTIC_SIGNALS,
        Persona::Friendly => FRIENDLY_SIGNALS,
        Persona::Rushed => RUSHED_SIGNALS,
    }
}

/// Unknown keys get the technical set.
pub fn signals_for_persona_key(key: &str) -> &'static [HiringSignal] {
    signals_for_persona(Persona::from_str_lossy(key))
}

/// The persona whose signal set contains `signal_name` (case-insensitive).
pub fn persona_for_signal(signal_name: &str) -> Option<Persona> {
    Persona::ALL.into_iter().find(|p| {
        signals_for_persona(*p)
            .iter()
            .any(|s| s.name.eq_ignore_ascii_case(signal_name.trim()))
    })
}
