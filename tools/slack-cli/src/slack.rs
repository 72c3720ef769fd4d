//! Slack Web API access for the `conversations.*` methods.
//!
//! [`ConversationsApi`] is the seam the commands are written against;
//! [`SlackClient`] is the HTTP implementation used by the binary.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::{config::Settings, error::SlackError};

/// A message record exactly as Slack returned it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Message(pub Value);

impl Message {
    /// The message timestamp (`ts`), if present.
    pub fn ts(&self) -> Option<&str> {
        self.0.get("ts").and_then(Value::as_str)
    }
}

/// Query for `conversations.history`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryParams {
    pub channel: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<String>,
    pub inclusive: bool,
    pub limit: u32,
    pub include_all_metadata: bool,
}

/// Query for `conversations.replies`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepliesParams {
    pub channel: String,
    pub ts: String,
    pub inclusive: bool,
    pub limit: u32,
    pub include_all_metadata: bool,
}

/// The two conversation reads the message commands need.
#[async_trait]
pub trait ConversationsApi: Send + Sync {
    /// Fetches channel history, newest first.
    async fn history(&self, params: &HistoryParams) -> Result<Vec<Message>, SlackError>;

    /// Fetches a thread: the parent message followed by its replies.
    async fn replies(&self, params: &RepliesParams) -> Result<Vec<Message>, SlackError>;
}

#[derive(Debug, Deserialize)]
struct ConversationsResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    messages: Vec<Message>,
    #[serde(default)]
    has_more: bool,
}

/// HTTP client for the Slack Web API.
pub struct SlackClient {
    http: Client,
    api_url: String,
    token: String,
}

impl SlackClient {
    /// Creates a client from validated settings.
    pub fn new(settings: &Settings) -> Result<Self, SlackError> {
        let http = Client::builder()
            .timeout(settings.timeout)
            .user_agent(concat!("slack-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_url: settings.api_url.clone(),
            token: settings.token.clone(),
        })
    }

    async fn call<P: Serialize + Sync>(
        &self,
        method: &str,
        params: &P,
    ) -> Result<Vec<Message>, SlackError> {
        let url = format!("{}/{method}", self.api_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .query(params)
            .send()
            .await?
            .error_for_status()?;

        let body: ConversationsResponse = response.json().await?;

        if !body.ok {
            return Err(SlackError::Api {
                method: method.to_string(),
                error: body.error.unwrap_or_else(|| "unknown_error".to_string()),
            });
        }

        debug!(
            method,
            count = body.messages.len(),
            has_more = body.has_more,
            "received messages"
        );

        Ok(body.messages)
    }
}

#[async_trait]
impl ConversationsApi for SlackClient {
    async fn history(&self, params: &HistoryParams) -> Result<Vec<Message>, SlackError> {
        debug!(channel = %params.channel, limit = params.limit, "fetching conversation history");
        self.call("conversations.history", params).await
    }

    async fn replies(&self, params: &RepliesParams) -> Result<Vec<Message>, SlackError> {
        debug!(channel = %params.channel, ts = %params.ts, "fetching conversation replies");
        self.call("conversations.replies", params).await
    }
}
