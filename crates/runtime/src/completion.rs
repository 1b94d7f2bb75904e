use anyhow::{anyhow, bail, Result};
use async_openai::types::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use serde::{Deserialize, Serialize};

use personachat_clients::{
    LlmClient, CHAT_MODEL, COMPLETION_TEMPERATURE, MAX_TOKENS_CEILING, REASONER_MODEL,
};
use personachat_common::ModuleClient;

use crate::message::{ChatMessage, ChatRole};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompletionModel {
    #[default]
    #[serde(rename = "deepseek-chat")]
    Chat,
    #[serde(rename = "deepseek-reasoner")]
    Reasoner,
}

impl CompletionModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionModel::Chat => CHAT_MODEL,
            CompletionModel::Reasoner => REASONER_MODEL,
        }
    }
}

/// Caller-facing completion request. `model` defaults to the chat variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    #[serde(default)]
    pub model: Option<CompletionModel>,
}

impl ChatRequest {
    pub fn validate(&self) -> Result<()> {
        if self.messages.is_empty() {
            bail!("messages must not be empty");
        }
        if self.max_tokens > MAX_TOKENS_CEILING {
            bail!("maxTokens must not exceed {}", MAX_TOKENS_CEILING);
        }
        Ok(())
    }
}

/// Normalized completion: the answer text plus the reasoning trace some
/// model variants attach, empty when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub content: String,
    pub reasoning: String,
}

// The provider attaches `reasoning_content` to the choice message, which
// async-openai's typed response does not model, so the response is parsed
// into our own shape.
#[derive(Debug, Deserialize)]
struct CompletionResponseMessage {
    content: Option<String>,
    reasoning_content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionResponseMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

pub fn pack_messages(messages: &[ChatMessage]) -> Result<Vec<ChatCompletionRequestMessage>> {
    messages
        .iter()
        .map(|m| {
            let content = m.content.clone();
            Ok(match m.role {
                ChatRole::System => ChatCompletionRequestMessage::System(
                    ChatCompletionRequestSystemMessageArgs::default()
                        .content(content)
                        .build()
                        .map_err(|e| anyhow!("[pack_messages] failed to pack message: {}", e))?,
                ),
                ChatRole::User => ChatCompletionRequestMessage::User(
                    ChatCompletionRequestUserMessageArgs::default()
                        .content(content)
                        .build()
                        .map_err(|e| anyhow!("[pack_messages] failed to pack message: {}", e))?,
                ),
                ChatRole::Assistant => ChatCompletionRequestMessage::Assistant(
                    ChatCompletionRequestAssistantMessageArgs::default()
                        .content(content)
                        .build()
                        .map_err(|e| anyhow!("[pack_messages] failed to pack message: {}", e))?,
                ),
            })
        })
        .collect()
}

/// Forwards a validated request to the completion provider and normalizes
/// the first choice. Single attempt, non-streaming, no retry.
pub async fn complete(llm: &LlmClient, request: &ChatRequest) -> Result<ChatReply> {
    request.validate()?;

    let model = request.model.unwrap_or_default();
    tracing::debug!(
        "[complete] forwarding {} message(s) to {}",
        request.messages.len(),
        model.as_str()
    );
    let llm_messages = pack_messages(&request.messages)?;

    let base_request = CreateChatCompletionRequestArgs::default()
        .model(model.as_str())
        .messages(llm_messages)
        .max_tokens(request.max_tokens)
        .temperature(COMPLETION_TEMPERATURE)
        .build()?;

    use async_openai::config::Config;
    let config = llm.get_client().config();
    let request_body = serde_json::to_value(&base_request)?;

    let client = reqwest::Client::new();
    let mut http_request = client
        .post(format!("{}/chat/completions", config.api_base()))
        .header("Content-Type", "application/json")
        .json(&request_body);

    for (key, value) in config.headers().iter() {
        http_request = http_request.header(key, value);
    }

    let response = http_request.send().await?;
    let response_text = response.text().await?;

    let response: CompletionResponse = serde_json::from_str(&response_text)
        .map_err(|e| anyhow!("failed to parse completion response: {}", e))?;

    let choice = response
        .choices
        .first()
        .ok_or(anyhow!("no choices in completion response for model {}", model.as_str()))?;

    Ok(ChatReply {
        content: choice.message.content.clone().unwrap_or_default(),
        reasoning: choice.message.reasoning_content.clone().unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(messages: Vec<ChatMessage>, max_tokens: u32) -> ChatRequest {
        ChatRequest { messages, max_tokens, model: None }
    }

    #[test]
    fn empty_messages_rejected() {
        assert!(request(vec![], 256).validate().is_err());
    }

    #[test]
    fn token_ceiling_is_inclusive() {
        let messages = vec![ChatMessage::user("hi")];
        assert!(request(messages.clone(), MAX_TOKENS_CEILING).validate().is_ok());
        assert!(request(messages, MAX_TOKENS_CEILING + 1).validate().is_err());
    }

    #[test]
    fn model_defaults_to_chat_variant() {
        let parsed: ChatRequest = serde_json::from_value(serde_json::json!({
            "messages": [{ "role": "user", "content": "hi" }],
            "maxTokens": 256
        })).unwrap();
        assert_eq!(parsed.model, None);
        assert_eq!(parsed.model.unwrap_or_default(), CompletionModel::Chat);
        assert_eq!(parsed.max_tokens, 256);
    }

    #[test]
    fn model_names_match_provider() {
        assert_eq!(
            serde_json::to_value(CompletionModel::Reasoner).unwrap(),
            serde_json::json!("deepseek-reasoner")
        );
        let parsed: CompletionModel = serde_json::from_value(
            serde_json::json!("deepseek-chat")
        ).unwrap();
        assert_eq!(parsed, CompletionModel::Chat);
    }

    #[test]
    fn packs_roles_in_order() {
        let packed = pack_messages(&[
            ChatMessage::system("persona"),
            ChatMessage::user("hi"),
            ChatMessage::assistant("hello"),
        ]).unwrap();
        assert_eq!(packed.len(), 3);
        assert!(matches!(packed[0], ChatCompletionRequestMessage::System(_)));
        assert!(matches!(packed[1], ChatCompletionRequestMessage::User(_)));
        assert!(matches!(packed[2], ChatCompletionRequestMessage::Assistant(_)));
    }
}
