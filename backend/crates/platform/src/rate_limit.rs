//! Rate Limiting Infrastructure
//!
//! Fixed-window request counting keyed by client origin. The store is
//! process-local; counters do not survive a restart and are not shared
//! between nodes.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use chrono::Utc;
use thiserror::Error;

/// Rate limit configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests allowed in the window
    pub max_requests: u32,
    /// Time window duration
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 20,
            window: Duration::from_secs(3600),
        }
    }
}

impl RateLimitConfig {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window: Duration::from_secs(window_secs),
        }
    }

    pub fn window_ms(&self) -> i64 {
        self.window.as_millis() as i64
    }
}

/// Rate limit check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitResult {
    pub allowed: bool,
    pub limit: u32,
    pub remaining: u32,
    pub reset_at_ms: i64,
}

impl RateLimitResult {
    /// Whole seconds until the window resets (rounded up, never negative)
    pub fn reset_after_secs(&self, now_ms: i64) -> u64 {
        let delta = (self.reset_at_ms - now_ms).max(0) as u64;
        delta.div_ceil(1000)
    }
}

#[derive(Debug, Error)]
pub enum RateLimitError {
    #[error("rate limit store is unavailable: {0}")]
    Unavailable(String),
}

/// Trait for rate limit storage backends
#[trait_variant::make(RateLimitStore: Send)]
pub trait LocalRateLimitStore {
    /// Count one request against `key` and report whether it is admitted
    async fn check_and_increment(
        &self,
        key: &str,
        config: &RateLimitConfig,
    ) -> Result<RateLimitResult, RateLimitError>;

    /// Forget the window for `key`, so its next request starts fresh
    async fn reset(&self, key: &str) -> Result<(), RateLimitError>;
}

#[derive(Debug, Clone, Copy)]
struct Window {
    count: u32,
    started_at_ms: i64,
}

/// In-process rate limit store
///
/// The mutex is only held for the map update and never across an await.
#[derive(Debug, Default)]
pub struct InMemoryRateLimitStore {
    windows: Mutex<HashMap<String, Window>>,
}

impl InMemoryRateLimitStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed-window check at an explicit instant
    ///
    /// The first request (or the first after the window elapsed) opens a new
    /// window with count 1. Later requests increment; the request is rejected
    /// once the count exceeds `max_requests`.
    pub fn check_at(
        &self,
        key: &str,
        config: &RateLimitConfig,
        now_ms: i64,
    ) -> Result<RateLimitResult, RateLimitError> {
        let mut windows = self
            .windows
            .lock()
            .map_err(|e| RateLimitError::Unavailable(e.to_string()))?;

        let window_ms = config.window_ms();
        let window = windows
            .entry(key.to_string())
            .and_modify(|w| {
                if now_ms - w.started_at_ms >= window_ms {
                    w.count = 1;
                    w.started_at_ms = now_ms;
                } else {
                    w.count = w.count.saturating_add(1);
                }
            })
            .or_insert(Window {
                count: 1,
                started_at_ms: now_ms,
            });

        Ok(RateLimitResult {
            allowed: window.count <= config.max_requests,
            limit: config.max_requests,
            remaining: config.max_requests.saturating_sub(window.count),
            reset_at_ms: window.started_at_ms + window_ms,
        })
    }

    /// Drop windows that have fully elapsed; returns how many were removed
    pub fn sweep_expired(&self, config: &RateLimitConfig, now_ms: i64) -> usize {
        let Ok(mut windows) = self.windows.lock() else {
            return 0;
        };
        let window_ms = config.window_ms();
        let before = windows.len();
        windows.retain(|_, w| now_ms - w.started_at_ms < window_ms);
        before - windows.len()
    }

    /// Drop the window for one key; returns whether it was tracked
    pub fn remove(&self, key: &str) -> Result<bool, RateLimitError> {
        let mut windows = self
            .windows
            .lock()
            .map_err(|e| RateLimitError::Unavailable(e.to_string()))?;
        Ok(windows.remove(key).is_some())
    }

    pub fn tracked_origins(&self) -> usize {
        self.windows.lock().map(|w| w.len()).unwrap_or(0)
    }
}

impl RateLimitStore for InMemoryRateLimitStore {
    async fn check_and_increment(
        &self,
        key: &str,
        config: &RateLimitConfig,
    ) -> Result<RateLimitResult, RateLimitError> {
        self.check_at(key, config, Utc::now().timestamp_millis())
    }

    async fn reset(&self, key: &str) -> Result<(), RateLimitError> {
        self.remove(key).map(|_| ())
    }
}
