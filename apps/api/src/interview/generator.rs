//! Question generator: role + persona (+ optional focus) → five questions.
//!
//! Flow: classify role → resolve type mix → per slot: shuffle pool, take the
//! first unused entry, apply persona modifier.
//!
//! Pure and stateless. The only non-determinism is the injected `Rng`; tests
//! pass a seeded `StdRng`.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::constants::MAX_QUESTIONS;
use crate::interview::models::{
    FocusCategory, GeneratedInterview, GeneratedQuestion, Persona, QuestionType,
};
use crate::interview::question_bank::pool_for;
use crate::interview::role_classifier::classify;

/// Ordered question types for the five slots.
pub type TypeMix = [QuestionType; MAX_QUESTIONS];

use QuestionType::{
    Behavioral, CultureFit, Leadership, ProblemSolving, Situational, SoftSkills, Technical,
};

/// Prefix applied by the rushed persona.
pub const RUSHED_PREFIX: &str = "Keep it brief: ";

/// One of these is appended by the skeptic persona.
pub const SKEPTIC_CHALLENGES: [&str; 4] = [
    " And what could go wrong with that approach?",
    " How would you handle the edge cases?",
    " What's the main weakness of that approach?",
    " Why should I believe that would work?",
];

/// Used only if a pool is ever empty; banks are non-empty by construction.
const FALLBACK_QUESTION: &str = "Tell me about your experience in this field.";

/// Default mix when no focus category is given.
pub fn persona_mix(persona: Persona) -> TypeMix {
    match persona {
        Persona::Technical => [Technical, Technical, Situational, ProblemSolving, Leadership],
        Persona::Skeptic => [Technical, Behavioral, ProblemSolving, Behavioral, Situational],
        Persona::Friendly => [Behavioral, CultureFit, Behavioral, Leadership, CultureFit],
        Persona::Rushed => [Technical, Behavioral, ProblemSolving, Leadership, CultureFit],
    }
}

/// Mix for an explicit focus. Overrides the persona mix.
pub fn focus_mix(focus: FocusCategory) -> TypeMix {
    match focus {
        FocusCategory::Technical => [Technical, Technical, Technical, ProblemSolving, Situational],
        FocusCategory::Behavioral => [Behavioral, Behavioral, Behavioral, Behavioral, Situational],
        FocusCategory::Leadership => [Leadership, Leadership, Behavioral, Leadership, Situational],
        FocusCategory::ProblemSolving => {
            [ProblemSolving, ProblemSolving, Technical, ProblemSolving, Situational]
        }
        FocusCategory::SoftSkills => [SoftSkills, SoftSkills, SoftSkills, Behavioral, CultureFit],
        FocusCategory::CultureFit => [CultureFit, CultureFit, Behavioral, CultureFit, Behavioral],
        FocusCategory::Situational => {
            [Situational, Situational, Behavioral, Situational, ProblemSolving]
        }
        FocusCategory::Mixed => [Technical, Behavioral, Leadership, ProblemSolving, CultureFit],
    }
}

/// Focus wins over persona.
pub fn resolve_mix(persona: Persona, focus: Option<FocusCategory>) -> TypeMix {
    focus.map(focus_mix).unwrap_or_else(|| persona_mix(persona))
}

/// Persona-specific rewrite of a selected bank entry.
pub fn apply_persona_modifier<R: Rng + ?Sized>(
    question: &str,
    persona: Persona,
    rng: &mut R,
) -> String {
    match persona {
        Persona::Skeptic => {
            let challenge = SKEPTIC_CHALLENGES
                .choose(rng)
                .copied()
                .unwrap_or(SKEPTIC_CHALLENGES[0]);
            format!("{question}{challenge}")
        }
        Persona::Rushed => format!("{RUSHED_PREFIX}{question}"),
        Persona::Technical | Persona::Friendly => question.to_string(),
    }
}

/// Shuffles `pool` and returns the first entry not in `used`. When every entry
/// is used the first shuffled entry is returned, so the result may repeat.
pub fn pick_question<R: Rng + ?Sized>(
    pool: &'static [&'static str],
    used: &HashSet<&'static str>,
    rng: &mut R,
) -> &'static str {
    let mut shuffled = pool.to_vec();
    shuffled.shuffle(rng);

    shuffled
        .iter()
        .find(|q| !used.contains(**q))
        .or_else(|| shuffled.first())
        .copied()
        .unwrap_or(FALLBACK_QUESTION)
}

/// Generates the full interview using the caller's random source.
pub fn generate_interview_with_rng<R: Rng + ?Sized>(
    role_description: &str,
    persona: Persona,
    focus: Option<FocusCategory>,
    rng: &mut R,
) -> GeneratedInterview {
    let role_category = classify(role_description);
    let mix = resolve_mix(persona, focus);

    debug!(
        "Role {:?} -> category {}, persona {}, focus {}",
        role_description,
        role_category,
        persona,
        focus.map(|f| f.as_str()).unwrap_or("default")
    );

    let mut used: HashSet<&'static str> = HashSet::with_capacity(MAX_QUESTIONS);
    let mut questions = Vec::with_capacity(MAX_QUESTIONS);

    for (i, question_type) in mix.into_iter().enumerate() {
        let selected = pick_question(pool_for(question_type, role_category), &used, rng);
        used.insert(selected);

        questions.push(GeneratedQuestion {
            question_number: (i + 1) as u8,
            question_type,
            question_text: apply_persona_modifier(selected, persona, rng),
        });
    }

    GeneratedInterview {
        role_category,
        questions,
    }
}

/// Same as [`generate_interview_with_rng`] with the thread-local RNG.
pub fn generate_interview(
    role_description: &str,
    persona: Persona,
    focus: Option<FocusCategory>,
) -> GeneratedInterview {
    generate_interview_with_rng(role_description, persona, focus, &mut rand::thread_rng())
}

/// Just the five questions, using the caller's random source.
pub fn generate_questions_with_rng<R: Rng + ?Sized>(
    role_description: &str,
    persona: Persona,
    focus: Option<FocusCategory>,
    rng: &mut R,
) -> Vec<GeneratedQuestion> {
    generate_interview_with_rng(role_description, persona, focus, rng).questions
}

/// Just the five questions, using the thread-local RNG.
pub fn generate_questions(
    role_description: &str,
    persona: Persona,
    focus: Option<FocusCategory>,
) -> Vec<GeneratedQuestion> {
    generate_questions_with_rng(role_description, persona, focus, &mut rand::thread_rng())
}

/// Entry point for untyped callers: unknown persona → technical, unknown
/// focus → persona mix.
pub fn generate_questions_lossy(
    role_description: &str,
    persona: &str,
    focus: Option<&str>,
) -> Vec<GeneratedQuestion> {
    generate_questions(
        role_description,
        Persona::from_str_lossy(persona),
        focus.and_then(FocusCategory::from_str_lossy),
    )
}
