//! Fixed-window request limiter kept in process memory.
//!
//! Each identifier gets a counter and a window end. The first request after
//! the window ends opens a new one. Expired windows are swept periodically
//! from `main`.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use chrono::{DateTime, Duration, Utc};
use tracing::debug;

const KEY_PREFIX: &str = "ratelimit:";
/// Longer windows are clamped to one year.
const MAX_WINDOW_SECS: u64 = 365 * 24 * 60 * 60;

pub const HEADER_LIMIT: &str = "x-ratelimit-limit";
pub const HEADER_REMAINING: &str = "x-ratelimit-remaining";
pub const HEADER_RESET: &str = "x-ratelimit-reset";

#[derive(Debug, Clone, Copy)]
struct Window {
    count: u32,
    reset_at: DateTime<Utc>,
}

/// Outcome of a single `check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    pub allowed: bool,
    pub limit: u32,
    pub remaining: u32,
    pub reset_at: DateTime<Utc>,
}

impl RateLimitDecision {
    /// Unix seconds at which the window resets, rounded up.
    pub fn reset_unix_secs(&self) -> i64 {
        let secs = self.reset_at.timestamp();
        if self.reset_at.timestamp_subsec_nanos() > 0 {
            secs + 1
        } else {
            secs
        }
    }

    /// Seconds until the window resets, rounded up, never negative.
    pub fn retry_after_secs(&self, now: DateTime<Utc>) -> u64 {
        let millis = (self.reset_at - now).num_milliseconds().max(0) as u64;
        millis.div_ceil(1000)
    }

    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(HEADER_LIMIT),
            HeaderValue::from(self.limit),
        );
        headers.insert(
            HeaderName::from_static(HEADER_REMAINING),
            HeaderValue::from(self.remaining),
        );
        headers.insert(
            HeaderName::from_static(HEADER_RESET),
            HeaderValue::from(self.reset_unix_secs()),
        );
        headers
    }
}

#[derive(Debug, Default)]
pub struct RateLimiter {
    windows: Mutex<HashMap<String, Window>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(&self, identifier: &str, limit: u32, window_secs: u64) -> RateLimitDecision {
        self.check_at(identifier, limit, window_secs, Utc::now())
    }

    pub fn check_at(
        &self,
        identifier: &str,
        limit: u32,
        window_secs: u64,
        now: DateTime<Utc>,
    ) -> RateLimitDecision {
        let key = format!("{KEY_PREFIX}{identifier}");
        let window_len = Duration::seconds(window_secs.min(MAX_WINDOW_SECS) as i64);

        let mut windows = self.lock();
        let window = windows
            .entry(key)
            .and_modify(|w| {
                if w.reset_at <= now {
                    *w = Window {
                        count: 0,
                        reset_at: now + window_len,
                    };
                }
            })
            .or_insert(Window {
                count: 0,
                reset_at: now + window_len,
            });
        window.count = window.count.saturating_add(1);

        let decision = RateLimitDecision {
            allowed: window.count <= limit,
            limit,
            remaining: limit.saturating_sub(window.count),
            reset_at: window.reset_at,
        };
        if !decision.allowed {
            debug!(identifier, count = window.count, limit, "rate limit exceeded");
        }
        decision
    }

    /// Drops every window that has already ended. Returns how many were removed.
    pub fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let mut windows = self.lock();
        let before = windows.len();
        windows.retain(|_, w| w.reset_at > now);
        before - windows.len()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A poisoned map only holds counters, so keep using it.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Window>> {
        self.windows
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Picks the key a request is limited under: an authenticated user id, then
/// the first `x-forwarded-for` hop, then `x-real-ip`.
pub fn client_identifier(headers: &HeaderMap, user_id: Option<&str>) -> String {
    if let Some(id) = user_id.map(str::trim).filter(|id| !id.is_empty()) {
        return format!("user:{id}");
    }

    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());
    if let Some(addr) = forwarded {
        return format!("ip:{addr}");
    }

    let real_ip = headers
        .get("x-real-ip")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty());
    match real_ip {
        Some(addr) => format!("ip:{addr}"),
        None => "ip:unknown".to_string(),
    }
}
