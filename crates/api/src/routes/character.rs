use axum::{
    extract::{Extension, State},
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use personachat_common::{CryptoHash, ModuleClient};
use personachat_database::UserRecord;
use personachat_runtime::{CharacterConfig, CharacterConfigRecord};

use crate::global_state::AppState;
use crate::middleware::authenticate;
use crate::response::{AppError, AppSuccess};

pub fn character_routes() -> Router<AppState> {
    Router::new()
        .route("/character/config",
            post(save_character_config)
            .route_layer(middleware::from_fn(authenticate))
        )
        .route("/character/config",
            get(load_character_config)
            .route_layer(middleware::from_fn(authenticate))
        )
}

async fn save_character_config(
    State(state): State<AppState>,
    Extension(user_id): Extension<CryptoHash>,
    Json(payload): Json<CharacterConfig>,
) -> Result<AppSuccess, AppError> {
    payload.validate().map_err(AppError::invalid_argument)?;

    let record = CharacterConfigRecord::new(user_id, payload);
    let config_id = record.save(state.mongo.get_client().as_ref()).await?;

    Ok(AppSuccess::new(StatusCode::CREATED, "Character config saved", json!({
        "status": "success",
        "configId": config_id.to_hex_string(),
    })))
}

async fn load_character_config(
    State(state): State<AppState>,
    Extension(user_id): Extension<CryptoHash>,
) -> Result<AppSuccess, AppError> {
    let record = CharacterConfigRecord::latest_for(state.mongo.get_client().as_ref(), &user_id).await?;

    let data = match record {
        Some(record) => json!(record),
        None => json!({ "status": "no-config" }),
    };

    Ok(AppSuccess::new(StatusCode::OK, "Character config fetched", data))
}
