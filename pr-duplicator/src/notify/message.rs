//! Slack Block Kit message payloads.

use serde::Serialize;

/// A message posted to a Slack incoming webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlackMessage {
    /// Message blocks, rendered top to bottom.
    pub blocks: Vec<Block>,
}

/// A single Block Kit block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A section with a text object.
    Section {
        /// Section text.
        text: Text,
    },
}

/// A Block Kit text object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Text {
    /// Text in Slack's markdown dialect.
    Mrkdwn {
        /// The text.
        text: String,
    },
}

impl SlackMessage {
    /// Builds a message with one markdown section per line.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            blocks: lines
                .into_iter()
                .map(|line| Block::Section {
                    text: Text::Mrkdwn { text: line.into() },
                })
                .collect(),
        }
    }
}
