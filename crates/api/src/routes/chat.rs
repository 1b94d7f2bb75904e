use anyhow::anyhow;
use axum::{
    extract::{Extension, State},
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use personachat_common::{CryptoHash, ModuleClient};
use personachat_database::UserRecord;
use personachat_runtime::{complete, ChatHistoryRecord, ChatMessage, ChatRequest};

use crate::global_state::AppState;
use crate::middleware::authenticate;
use crate::response::{AppError, AppSuccess};

pub fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/chat/completion",
            post(chat_completion)
            .route_layer(middleware::from_fn(authenticate))
        )
        .route("/chat/history",
            post(save_chat_history)
            .route_layer(middleware::from_fn(authenticate))
        )
        .route("/chat/history",
            get(load_chat_history)
            .route_layer(middleware::from_fn(authenticate))
        )
}

async fn chat_completion(
    State(state): State<AppState>,
    Extension(user_id): Extension<CryptoHash>,
    Json(payload): Json<ChatRequest>,
) -> Result<AppSuccess, AppError> {
    payload.validate().map_err(AppError::invalid_argument)?;

    tracing::debug!("[chat_completion] {} message(s) from {}", payload.messages.len(), user_id);
    let reply = complete(&state.llm, &payload).await?;

    Ok(AppSuccess::new(StatusCode::OK, "Completion generated", json!(reply)))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SaveHistoryRequest {
    pub history: Vec<ChatMessage>,
}

async fn save_chat_history(
    State(state): State<AppState>,
    Extension(user_id): Extension<CryptoHash>,
    Json(payload): Json<SaveHistoryRequest>,
) -> Result<AppSuccess, AppError> {
    if payload.history.is_empty() {
        return Err(AppError::invalid_argument(anyhow!("history must not be empty")));
    }

    let record = ChatHistoryRecord::new(user_id, payload.history);
    let chat_id = record.save(state.mongo.get_client().as_ref()).await?;

    Ok(AppSuccess::new(StatusCode::CREATED, "Chat history saved", json!({
        "status": "success",
        "chatId": chat_id.to_hex_string(),
    })))
}

async fn load_chat_history(
    State(state): State<AppState>,
    Extension(user_id): Extension<CryptoHash>,
) -> Result<AppSuccess, AppError> {
    let record = ChatHistoryRecord::latest_for(state.mongo.get_client().as_ref(), &user_id).await?;

    // absence of a transcript is a normal outcome, not an error
    let data = match record {
        Some(record) => json!(record),
        None => json!({ "status": "no-history" }),
    };

    Ok(AppSuccess::new(StatusCode::OK, "Chat history fetched", data))
}
