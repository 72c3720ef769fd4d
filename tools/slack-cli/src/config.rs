//! Runtime settings resolved from global flags and the environment.

use std::time::Duration;

use crate::error::CommandError;

/// Default Slack Web API base URL.
pub const DEFAULT_API_URL: &str = "https://slack.com/api";

/// Validated settings for a single invocation.
#[derive(Clone)]
pub struct Settings {
    pub token: String,
    pub api_url: String,
    pub timeout: Duration,
}

impl Settings {
    /// Builds settings, rejecting a missing or blank bot token.
    pub fn new(
        token: Option<String>,
        api_url: &str,
        timeout_secs: u64,
    ) -> Result<Self, CommandError> {
        let token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(CommandError::MissingToken)?;

        Ok(Self {
            token,
            api_url: api_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

// Keep the token out of debug output.
impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("token", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
