//! # Command Layer
//!
//! One module per `nutil` subcommand. Each `run` takes plain Rust values and
//! returns a [`CmdResult`]; printing and exit codes are left to `main.rs`.

use crate::config::NotionConfig;

pub mod config;
pub mod get;
pub mod id;
pub mod sign;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Output of a command: `values` go to stdout one per line, `messages` are
/// status lines for the user.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub values: Vec<String>,
    pub config: Option<NotionConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_values(mut self, values: Vec<String>) -> Self {
        self.values = values;
        self
    }

    pub fn with_config(mut self, config: NotionConfig) -> Self {
        self.config = Some(config);
        self
    }
}
