//! Command-line surface and dispatch.

use clap::{Args, Parser, Subcommand};

use crate::{
    config::{DEFAULT_API_URL, Settings},
    error::CommandError,
    message::{MessageQuery, get_message, render},
    slack::SlackClient,
};

/// A CLI tool for interacting with the Slack API.
#[derive(Parser, Debug)]
#[command(name = "slack-cli", version)]
#[command(about = "A CLI tool for interacting with the Slack API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Slack bot token.
    #[arg(long, global = true, env = "SLACK_BOT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Slack Web API base URL.
    #[arg(long, global = true, env = "SLACK_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Request timeout in seconds.
    #[arg(long, global = true, env = "SLACK_TIMEOUT", default_value = "30")]
    pub timeout: u64,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interact with Slack messages.
    Message {
        #[command(subcommand)]
        command: MessageCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum MessageCommand {
    /// Get a message by timestamp and channel ID, or the latest messages.
    Get(GetArgs),
}

#[derive(Args, Debug, Clone)]
pub struct GetArgs {
    /// Channel ID.
    #[arg(short, long)]
    pub channel: String,

    /// Message timestamp. Without it the latest 100 messages are returned.
    #[arg(short, long)]
    pub timestamp: Option<String>,

    /// Also retrieve replies to the message (only if timestamp is specified).
    #[arg(short = 'r', long)]
    pub with_replies: bool,
}

impl Cli {
    /// Runs the selected command and returns the text to print.
    pub async fn run(self) -> Result<String, CommandError> {
        let settings = Settings::new(self.token, &self.api_url, self.timeout)?;

        match self.command {
            Commands::Message {
                command: MessageCommand::Get(args),
            } => {
                let query = MessageQuery::new(args.channel, args.timestamp, args.with_replies)?;
                let client = SlackClient::new(&settings).map_err(CommandError::Client)?;
                let output = get_message(&client, &query).await?;
                render(&output)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_message_get_short_flags() {
        let cli =
            Cli::try_parse_from(["slack-cli", "message", "get", "-c", "C123", "-t", "111.222", "-r"])
                .unwrap();

        let Commands::Message {
            command: MessageCommand::Get(args),
        } = cli.command;
        assert_eq!(args.channel, "C123");
        assert_eq!(args.timestamp.as_deref(), Some("111.222"));
        assert!(args.with_replies);
    }

    #[test]
    fn timestamp_and_replies_are_optional() {
        let cli = Cli::try_parse_from(["slack-cli", "message", "get", "--channel", "C123"]).unwrap();

        let Commands::Message {
            command: MessageCommand::Get(args),
        } = cli.command;
        assert_eq!(args.timestamp, None);
        assert!(!args.with_replies);
    }

    #[test]
    fn channel_is_required() {
        let err = Cli::try_parse_from(["slack-cli", "message", "get"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[tokio::test]
    async fn blank_token_fails_before_any_request() {
        let cli = Cli::try_parse_from([
            "slack-cli",
            "message",
            "get",
            "-c",
            "C123",
            "--token",
            "",
            "--api-url",
            "http://127.0.0.1:9",
        ])
        .unwrap();

        let err = cli.run().await.unwrap_err();
        assert!(matches!(err, CommandError::MissingToken));
    }
}
