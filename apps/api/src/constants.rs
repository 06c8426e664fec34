//! Application-wide limits and defaults.

/// Questions per generated interview.
pub const MAX_QUESTIONS: usize = 5;

// Role description bounds (characters, after trimming)
pub const MIN_ROLE_DESCRIPTION_LENGTH: usize = 3;
pub const MAX_ROLE_DESCRIPTION_LENGTH: usize = 500;

pub const MAX_TRANSCRIPT_LENGTH: usize = 50_000;
pub const MAX_QUESTION_LENGTH: usize = 1_000;

// Signal scores
pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 10.0;
pub const PASSING_SCORE: f64 = 7.0;

// Rate limiting defaults, overridable via config
pub const DEFAULT_RATE_LIMIT_REQUESTS: u32 = 20;
pub const DEFAULT_RATE_LIMIT_WINDOW_SECONDS: u64 = 60;
pub const RATE_LIMIT_SWEEP_INTERVAL_SECONDS: u64 = 60;
