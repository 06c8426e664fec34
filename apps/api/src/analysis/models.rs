//! Analysis request/response shapes and the normalization applied to raw
//! model output before it reaches a client.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_SCORE, MIN_SCORE, PASSING_SCORE};
use crate::interview::display::persona_display;
use crate::interview::models::Persona;
use crate::interview::signals::persona_for_signal;

/// Body of `POST /api/v1/answers/analyze`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub transcript: String,
    pub role_description: String,
    pub persona: String,
    pub question: String,
}

/// A validated request, ready for an analyzer.
#[derive(Debug, Clone)]
pub struct AnalysisInput {
    pub transcript: String,
    pub role_description: String,
    pub persona: Persona,
    pub question: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Model output (lenient)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAnalysis {
    #[serde(default)]
    pub signals: Vec<RawSignal>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
    #[serde(default)]
    pub next_recommendation: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSignal {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub reason: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Normalized output
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalScore {
    pub name: String,
    pub score: f64,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerAnalysis {
    pub persona: Persona,
    pub signals: Vec<SignalScore>,
    pub overall_score: f64,
    pub passed: bool,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub next_recommendation: String,
}

impl AnswerAnalysis {
    pub fn from_raw(raw: RawAnalysis, persona: Persona) -> Self {
        let signals: Vec<SignalScore> = raw
            .signals
            .into_iter()
            .filter(|s| !s.name.trim().is_empty())
            .map(|s| SignalScore {
                name: s.name.trim().to_string(),
                score: clamp_score(s.score),
                reason: s.reason.trim().to_string(),
            })
            .collect();

        let overall_score = overall_score(&signals);
        let next_recommendation = match raw.next_recommendation.trim() {
            "" => recommend_next(&signals),
            given => given.to_string(),
        };

        AnswerAnalysis {
            persona,
            overall_score,
            passed: overall_score >= PASSING_SCORE,
            signals,
            strengths: non_empty(raw.strengths),
            improvements: non_empty(raw.improvements),
            next_recommendation,
        }
    }
}

fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        MIN_SCORE
    } else {
        score.clamp(MIN_SCORE, MAX_SCORE)
    }
}

/// Mean of the signal scores rounded to one decimal; 0 with no signals.
pub fn overall_score(signals: &[SignalScore]) -> f64 {
    if signals.is_empty() {
        return 0.0;
    }
    let mean = signals.iter().map(|s| s.score).sum::<f64>() / signals.len() as f64;
    (mean * 10.0).round() / 10.0
}

fn non_empty(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Suggests the persona that drills the weakest signal. Signals that belong
/// to no persona, or an empty list, point at the skeptic.
fn recommend_next(signals: &[SignalScore]) -> String {
    let weakest = signals
        .iter()
        .min_by(|a, b| a.score.total_cmp(&b.score));

    let persona = weakest
        .and_then(|s| persona_for_signal(&s.name))
        .unwrap_or(Persona::Skeptic);
    let label = persona_display(persona).label;

    match weakest {
        Some(signal) => format!(
            "Practice with {label} next to work on {}.",
            signal.name.to_lowercase()
        ),
        None => format!("Practice with {label} next."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_signal(name: &str, score: f64) -> RawSignal {
        RawSignal {
            name: name.to_string(),
            score,
            reason: "because".to_string(),
        }
    }

    #[test]
    fn test_scores_clamped_and_averaged() {
        let raw = RawAnalysis {
            signals: vec![
                raw_signal("Problem Framing", 12.0),
                raw_signal("Technical Depth", -3.0),
                raw_signal("Trade-off Discussion", 8.0),
            ],
            next_recommendation: "Try skeptic".to_string(),
            ..Default::default()
        };
        let analysis = AnswerAnalysis::from_raw(raw, Persona::Technical);
        let scores: Vec<f64> = analysis.signals.iter().map(|s| s.score).collect();
        assert_eq!(scores, vec![10.0, 0.0, 8.0]);
        assert_eq!(analysis.overall_score, 6.0);
        assert!(!analysis.passed);
        assert_eq!(analysis.next_recommendation, "Try skeptic");
    }

    #[test]
    fn test_overall_rounds_to_one_decimal() {
        let signals = vec![
            SignalScore { name: "a".into(), score: 7.0, reason: String::new() },
            SignalScore { name: "b".into(), score: 8.0, reason: String::new() },
            SignalScore { name: "c".into(), score: 8.0, reason: String::new() },
        ];
        assert_eq!(overall_score(&signals), 7.7);
        assert_eq!(overall_score(&[]), 0.0);
    }

    #[test]
    fn test_passing_threshold_inclusive() {
        let raw = RawAnalysis {
            signals: vec![raw_signal("Storytelling", 7.0)],
            ..Default::default()
        };
        assert!(AnswerAnalysis::from_raw(raw, Persona::Friendly).passed);
    }

    #[test]
    fn test_blank_strings_dropped() {
        let raw = RawAnalysis {
            strengths: vec!["Clear structure".into(), "  ".into()],
            improvements: vec![String::new(), " Quantify impact ".into()],
            ..Default::default()
        };
        let analysis = AnswerAnalysis::from_raw(raw, Persona::Technical);
        assert_eq!(analysis.strengths, vec!["Clear structure"]);
        assert_eq!(analysis.improvements, vec!["Quantify impact"]);
    }

    #[test]
    fn test_recommendation_from_weakest_signal() {
        let raw = RawAnalysis {
            signals: vec![raw_signal("Storytelling", 9.0), raw_signal("Conciseness", 2.0)],
            ..Default::default()
        };
        let analysis = AnswerAnalysis::from_raw(raw, Persona::Friendly);
        assert_eq!(
            analysis.next_recommendation,
            "Practice with Rushed Manager next to work on conciseness."
        );
    }

    #[test]
    fn test_recommendation_defaults_to_skeptic() {
        let analysis = AnswerAnalysis::from_raw(RawAnalysis::default(), Persona::Technical);
        assert_eq!(analysis.next_recommendation, "Practice with The Skeptic next.");
        assert_eq!(analysis.overall_score, 0.0);
        assert!(!analysis.passed);
    }

    #[test]
    fn test_raw_analysis_tolerates_missing_fields() {
        let raw: RawAnalysis =
            serde_json::from_str(r#"{"signals":[{"name":"Curiosity","score":6}]}"#).unwrap();
        assert_eq!(raw.signals.len(), 1);
        assert!(raw.strengths.is_empty());
        assert!(raw.next_recommendation.is_empty());
    }
}
