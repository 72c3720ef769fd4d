//! Slack CLI - read messages from the Slack Web API and print them as JSON.

pub mod cli;
pub mod config;
pub mod error;
pub mod message;
pub mod slack;

pub use error::{CommandError, SlackError};
pub use message::{MessageOutput, MessageQuery, get_message, render};
pub use slack::{ConversationsApi, Message, SlackClient};
