//! Error types for the Slack client and the message commands.

use thiserror::Error;

/// Failure talking to the Slack Web API.
#[derive(Debug, Error)]
pub enum SlackError {
    /// Transport failure, non-2xx status, or an undecodable body.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Slack answered with `"ok": false`.
    #[error("{method} returned error: {error}")]
    Api { method: String, error: String },
}

/// Failure of a `message` command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("SLACK_BOT_TOKEN environment variable is not set")]
    MissingToken,

    #[error("channel ID must not be empty")]
    EmptyChannel,

    #[error("failed to create Slack client")]
    Client(#[source] SlackError),

    #[error("failed to get message(s)")]
    FetchMessages(#[source] SlackError),

    #[error("failed to get replies")]
    FetchReplies(#[source] SlackError),

    #[error("no messages found in channel {channel}")]
    NoMessages { channel: String },

    #[error("no message found with timestamp {timestamp} in channel {channel}")]
    MessageNotFound { timestamp: String, channel: String },

    #[error("no message found with exact timestamp {timestamp} in channel {channel}")]
    NoExactMatch { timestamp: String, channel: String },

    #[error("failed to render result as JSON")]
    Serialize(#[source] serde_json::Error),
}

impl CommandError {
    /// Returns true for the expected "nothing there" outcomes.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NoMessages { .. } | Self::MessageNotFound { .. } | Self::NoExactMatch { .. }
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_message_names_timestamp_and_channel() {
        let err = CommandError::NoExactMatch {
            timestamp: "111.222".to_string(),
            channel: "C123".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no message found with exact timestamp 111.222 in channel C123"
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn api_error_is_not_a_not_found() {
        let err = CommandError::FetchReplies(SlackError::Api {
            method: "conversations.replies".to_string(),
            error: "thread_not_found".to_string(),
        });
        assert!(!err.is_not_found());
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("conversations.replies returned error: thread_not_found")
        );
    }
}
