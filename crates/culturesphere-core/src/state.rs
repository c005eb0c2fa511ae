//! UI-agnostic interaction state types
//!
//! Shared by every front end; nothing here depends on a UI framework.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ClientError;

/// Where a single request/response cycle currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Loading,
    Success(String),
    Failure(ClientError),
}

impl InteractionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, InteractionState::Loading)
    }

    pub fn result(&self) -> Option<&str> {
        match self {
            InteractionState::Success(text) => Some(text),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ClientError> {
        match self {
            InteractionState::Failure(err) => Some(err),
            _ => None,
        }
    }
}

/// A message in the assistant conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub id: Uuid,
    pub text: String,
    pub author: Author,
    pub created_at: DateTime<Utc>,
}

impl ConversationMessage {
    pub fn new(author: Author, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            author,
            created_at: Utc::now(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.author == Author::User
    }
}

/// Who wrote a conversation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    User,
    Assistant,
}
