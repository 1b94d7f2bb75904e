mod character;
mod completion;
mod message;

pub use character::{CharacterConfig, CharacterConfigRecord};
pub use completion::{complete, pack_messages, ChatReply, ChatRequest, CompletionModel};
pub use message::{ChatHistoryRecord, ChatMessage, ChatRole};
