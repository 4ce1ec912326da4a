//! Chat message model

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Who sent a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    /// Message text; assistant messages may contain markdown
    pub content: String,
    pub timestamp: DateTime<Local>,
    /// Seconds the assistant spent thinking before responding
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thought_time: Option<u64>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl ChatMessage {
    /// Create a message stamped with the current time and a fresh id
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Local::now(),
            thought_time: None,
            metadata: HashMap::new(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    #[must_use]
    pub fn with_thought_time(mut self, seconds: u64) -> Self {
        self.thought_time = Some(seconds);
        self
    }

    /// "Thought for N second(s)" when the assistant reported a thinking time
    pub fn thought_summary(&self) -> Option<String> {
        match self.thought_time {
            Some(0) | None => None,
            Some(1) => Some("Thought for 1 second".to_string()),
            Some(secs) => Some(format!("Thought for {secs} seconds")),
        }
    }
}

/// Actions offered on assistant messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageActionType {
    Regenerate,
    Copy,
    Love,
    Improve,
}

impl MessageActionType {
    pub const ALL: [MessageActionType; 4] = [
        MessageActionType::Regenerate,
        MessageActionType::Copy,
        MessageActionType::Love,
        MessageActionType::Improve,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MessageActionType::Regenerate => "Regenerate response",
            MessageActionType::Copy => "Copy response",
            MessageActionType::Love => "Love this response",
            MessageActionType::Improve => "Need improvement",
        }
    }
}

/// An action performed on a message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageAction {
    pub kind: MessageActionType,
    pub message_id: String,
    pub timestamp: DateTime<Local>,
}

impl MessageAction {
    pub fn new(kind: MessageActionType, message_id: impl Into<String>) -> Self {
        Self {
            kind,
            message_id: message_id.into(),
            timestamp: Local::now(),
        }
    }
}
