//! Client configuration parsed from environment variables.

use crate::error::GridError;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// What to do with a numeric filter widget left at zero.
///
/// Two variants of the page script disagreed: one rewrote a literal `0` on
/// `*number`/`*year`/`*value` filter keys to the empty string before the
/// request, the other sent the filter unmodified. The behavior is a policy
/// here rather than a silent pick; the shipped script's rewrite is the
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroFilterPolicy {
    /// Rewrite a literal numeric zero to the empty string on matching keys.
    #[default]
    RewriteToEmpty,
    /// Send the filter exactly as given.
    SendVerbatim,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for HttpTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

/// Settings shared by every bound table's controller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClientConfig {
    /// Origin prepended to the table URLs. Empty means same-origin relative
    /// requests; never carries a trailing slash.
    pub base_url: String,
    pub zero_filter: ZeroFilterPolicy,
    pub timeouts: HttpTimeouts,
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `GRID_BASE_URL`: backend origin (default empty, same-origin)
    /// - `GRID_ZERO_FILTER`: `rewrite` (default) or `verbatim`
    /// - `GRID_REQUEST_TIMEOUT_SECS`: default 30
    /// - `GRID_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ConfigParse`] for an unknown `GRID_ZERO_FILTER`.
    pub fn from_env() -> Result<Self, GridError> {
        let base_url = std::env::var("GRID_BASE_URL")
            .unwrap_or_default()
            .trim_end_matches('/')
            .to_string();
        let zero_filter = parse_zero_filter(std::env::var("GRID_ZERO_FILTER").ok().as_deref())?;
        let timeouts = HttpTimeouts {
            request_secs: env_parse_u64("GRID_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("GRID_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        Ok(Self { base_url, zero_filter, timeouts })
    }

    /// Config pointed at an explicit backend origin, other settings default.
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_string(), ..Self::default() }
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_zero_filter(raw: Option<&str>) -> Result<ZeroFilterPolicy, GridError> {
    match raw.unwrap_or("rewrite") {
        "rewrite" => Ok(ZeroFilterPolicy::RewriteToEmpty),
        "verbatim" => Ok(ZeroFilterPolicy::SendVerbatim),
        other => Err(GridError::ConfigParse(format!(
            "unknown GRID_ZERO_FILTER: {other} (expected 'rewrite' or 'verbatim')"
        ))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
