use crate::analysis::models::AnalysisInput;
use crate::interview::display::persona_display;
use crate::interview::signals::HiringSignal;
use crate::llm_client::prompts::SCORING_INSTRUCTION;

pub fn build_analysis_prompt(input: &AnalysisInput, signals: &[HiringSignal]) -> String {
    let signal_list = signals
        .iter()
        .map(|s| format!("- {}: {}", s.name, s.definition))
        .collect::<Vec<_>>()
        .join("\n");
    let persona = persona_display(input.persona);

    format!(
        r#"You are an expert interview coach reviewing a candidate's spoken answer.

Target role: {role}
Question asked: {question}
Interviewer persona: {label} ({description})

Candidate's answer:
"""
{transcript}
"""

Rate the answer on each of these hiring signals:
{signal_list}

{SCORING_INSTRUCTION}

Also give 3-4 specific strengths, 3-4 specific improvements, and recommend
which interviewer persona (technical, skeptic, friendly, rushed) the
candidate should practice with next, based on their weakest signals.

Respond with JSON in exactly this shape:
{{
  "signals": [{{"name": "", "score": 0, "reason": ""}}],
  "strengths": [""],
  "improvements": [""],
  "nextRecommendation": ""
}}"#,
        role = input.role_description,
        question = input.question,
        label = persona.label,
        description = persona.description,
        transcript = input.transcript,
    )
}
