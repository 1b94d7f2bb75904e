use serde::{Deserialize, Serialize};

use personachat_common::{get_current_timestamp_ms, CryptoHash};
use personachat_database::UserRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl std::fmt::Display for ChatRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatRole::System => write!(f, "system"),
            ChatRole::User => write!(f, "user"),
            ChatRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// One turn of the conversation. Insertion order is conversation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: ChatRole::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: ChatRole::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: ChatRole::Assistant, content: content.into() }
    }
}

/// One full transcript flush. Every save inserts a new record; the latest
/// record for an owner is the live conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatHistoryRecord {
    #[serde(rename = "_id")]
    pub id: CryptoHash,
    pub owner: CryptoHash,
    pub history: Vec<ChatMessage>,
    pub timestamp: i64,
}

impl ChatHistoryRecord {
    pub fn new(owner: CryptoHash, history: Vec<ChatMessage>) -> Self {
        Self {
            id: CryptoHash::random(),
            owner,
            history,
            timestamp: get_current_timestamp_ms(),
        }
    }
}

impl UserRecord for ChatHistoryRecord {
    const COLLECTION_NAME: &'static str = "chats";

    fn id(&self) -> &CryptoHash {
        &self.id
    }

    fn owner(&self) -> &CryptoHash {
        &self.owner
    }
}
