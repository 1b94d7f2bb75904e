use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};

use personachat_common::{encrypt, get_current_timestamp};
use personachat_runtime::{CharacterConfig, ChatMessage, ChatReply, CompletionModel};

#[derive(Debug, Deserialize)]
struct Envelope {
    #[allow(dead_code)]
    status: u16,
    #[allow(dead_code)]
    message: String,
    data: Value,
}

/// Thin caller for the personachat API: bearer-token auth, envelope
/// unwrapping, nothing else.
pub struct ApiClient {
    client: Client,
    base_url: String,
    auth_token: String,
}

impl ApiClient {
    pub fn new(base_url: String, auth_token: String, client: Client) -> Self {
        Self {
            client,
            base_url,
            auth_token,
        }
    }

    /// Mints a bearer token for `user_id` the way the auth layer expects.
    pub fn login_token(user_id: &str, secret_salt: &str) -> Result<String> {
        let payload = json!({
            "user_id": user_id,
            "timestamp": get_current_timestamp(),
            "origin": "session",
        });
        encrypt(&payload.to_string(), secret_salt)
    }

    async fn unwrap_data(response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "could not read error body".to_string());
            return Err(anyhow!("request failed with status {}: {}", status, text));
        }
        let envelope: Envelope = response.json().await?;
        Ok(envelope.data)
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(&body)
            .header("Authorization", format!("Bearer {}", self.auth_token))
            .send()
            .await?;
        Self::unwrap_data(response).await
    }

    async fn get(&self, path: &str) -> Result<Value> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .header("Authorization", format!("Bearer {}", self.auth_token))
            .send()
            .await?;
        Self::unwrap_data(response).await
    }

    pub async fn chat_completion(
        &self,
        messages: &[ChatMessage],
        max_tokens: u32,
        model: Option<CompletionModel>,
    ) -> Result<ChatReply> {
        let data = self
            .post("/chat/completion", json!({
                "messages": messages,
                "maxTokens": max_tokens,
                "model": model,
            }))
            .await?;
        Ok(serde_json::from_value(data)?)
    }

    pub async fn save_chat_history(&self, history: &[ChatMessage]) -> Result<String> {
        let data = self.post("/chat/history", json!({ "history": history })).await?;
        data["chatId"]
            .as_str()
            .map(str::to_string)
            .ok_or(anyhow!("missing chatId in response"))
    }

    /// `None` when the caller has no transcript yet.
    pub async fn load_chat_history(&self) -> Result<Option<Vec<ChatMessage>>> {
        let data = self.get("/chat/history").await?;
        if data["status"] == "no-history" {
            return Ok(None);
        }
        Ok(Some(serde_json::from_value(data["history"].clone())?))
    }

    pub async fn save_character_config(&self, config: &CharacterConfig) -> Result<String> {
        let data = self.post("/character/config", serde_json::to_value(config)?).await?;
        data["configId"]
            .as_str()
            .map(str::to_string)
            .ok_or(anyhow!("missing configId in response"))
    }

    /// `None` when the caller has never saved a config.
    pub async fn load_character_config(&self) -> Result<Option<CharacterConfig>> {
        let data = self.get("/character/config").await?;
        if data["status"] == "no-config" {
            return Ok(None);
        }
        Ok(Some(serde_json::from_value(data)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use personachat_common::decrypt;

    #[test]
    fn login_token_carries_a_fresh_identity() {
        let token = ApiClient::login_token("email_u1", "salt").unwrap();
        let opened = decrypt(&token, "salt").unwrap();
        let payload: Value = serde_json::from_str(&opened).unwrap();

        assert_eq!(payload["user_id"], "email_u1");
        assert_eq!(payload["origin"], "session");
        let age = get_current_timestamp() - payload["timestamp"].as_i64().unwrap();
        assert!(age >= 0 && age < 5);
    }
}
