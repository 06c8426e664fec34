// Prompt fragments shared by every caller of `LlmClient`.
// Feature-specific prompts live next to the feature (see analysis/prompts.rs).

/// System prompt requiring a bare JSON reply.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise interview evaluation assistant. \
    Reply with a single valid JSON object and nothing else. \
    No markdown, no commentary before or after the object.";

/// Appended to prompts that ask for numeric ratings.
pub const SCORING_INSTRUCTION: &str = "\
    Scores are integers from 0 (absent) to 10 (exceptional). \
    Judge only what the candidate actually said; do not reward intent \
    that is not stated in the response.";
