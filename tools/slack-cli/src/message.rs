//! The `message get` command.
//!
//! Without a timestamp the command returns the latest messages of a channel.
//! With a timestamp it returns exactly that message (optionally with its
//! thread), rejecting the nearest-preceding message Slack falls back to when
//! nothing sits at the requested `ts`.

use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    error::CommandError,
    slack::{ConversationsApi, HistoryParams, Message, RepliesParams},
};

/// How many messages to return when no timestamp is given.
pub const LATEST_LIMIT: u32 = 100;

/// How many thread entries to request alongside a message.
pub const REPLIES_LIMIT: u32 = 100;

/// Validated input for `message get`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageQuery {
    channel: String,
    timestamp: Option<String>,
    with_replies: bool,
}

impl MessageQuery {
    /// Validates the channel and treats an empty timestamp as absent.
    pub fn new(
        channel: impl Into<String>,
        timestamp: Option<String>,
        with_replies: bool,
    ) -> Result<Self, CommandError> {
        let channel = channel.into().trim().to_string();
        if channel.is_empty() {
            return Err(CommandError::EmptyChannel);
        }

        let timestamp = timestamp
            .map(|ts| ts.trim().to_string())
            .filter(|ts| !ts.is_empty());

        if with_replies && timestamp.is_none() {
            warn!("--with-replies has no effect without --timestamp");
        }

        Ok(Self {
            channel,
            timestamp,
            with_replies,
        })
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    pub fn with_replies(&self) -> bool {
        self.with_replies
    }

    fn history_params(&self) -> HistoryParams {
        match &self.timestamp {
            Some(ts) => HistoryParams {
                channel: self.channel.clone(),
                latest: Some(ts.clone()),
                inclusive: true,
                limit: 1,
                include_all_metadata: true,
            },
            None => HistoryParams {
                channel: self.channel.clone(),
                latest: None,
                inclusive: false,
                limit: LATEST_LIMIT,
                include_all_metadata: true,
            },
        }
    }
}

/// What `message get` prints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MessageOutput {
    /// Latest messages of a channel.
    Messages(Vec<Message>),
    /// The message at the requested timestamp.
    Single(Message),
    /// The message at the requested timestamp and its thread.
    Thread {
        message: Message,
        replies: Vec<Message>,
    },
}

/// Runs `message get` against `api`.
pub async fn get_message<A>(api: &A, query: &MessageQuery) -> Result<MessageOutput, CommandError>
where
    A: ConversationsApi + ?Sized,
{
    let messages = api
        .history(&query.history_params())
        .await
        .map_err(CommandError::FetchMessages)?;

    let Some(timestamp) = query.timestamp() else {
        if messages.is_empty() {
            return Err(CommandError::NoMessages {
                channel: query.channel.clone(),
            });
        }
        return Ok(MessageOutput::Messages(messages));
    };

    let Some(message) = messages.into_iter().next() else {
        return Err(CommandError::MessageNotFound {
            timestamp: timestamp.to_string(),
            channel: query.channel.clone(),
        });
    };

    if message.ts() != Some(timestamp) {
        debug!(requested = timestamp, found = ?message.ts(), "timestamp mismatch");
        return Err(CommandError::NoExactMatch {
            timestamp: timestamp.to_string(),
            channel: query.channel.clone(),
        });
    }

    if !query.with_replies {
        return Ok(MessageOutput::Single(message));
    }

    let replies = api
        .replies(&RepliesParams {
            channel: query.channel.clone(),
            ts: timestamp.to_string(),
            inclusive: true,
            limit: REPLIES_LIMIT,
            include_all_metadata: true,
        })
        .await
        .map_err(CommandError::FetchReplies)?;

    Ok(MessageOutput::Thread { message, replies })
}

/// Renders the output as two-space indented JSON.
pub fn render(output: &MessageOutput) -> Result<String, CommandError> {
    serde_json::to_string_pretty(output).map_err(CommandError::Serialize)
}
