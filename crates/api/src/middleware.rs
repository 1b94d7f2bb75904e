use anyhow::anyhow;
use axum::body::Body;
use axum::middleware::Next;
use axum::{extract::Request, response::Response};
use serde::{Deserialize, Serialize};

use personachat_common::{blake3_hash, decrypt, get_current_timestamp, EnvVars};

use crate::env::ApiServerEnv;
use crate::response::AppError;
use crate::utils::extract_bearer_token;

/// Seconds a bearer token stays valid after issuance.
const TOKEN_FRESHNESS_WINDOW: i64 = 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedRequest {
    pub user_id: String,
    pub timestamp: i64,
    pub origin: String,
}

/// Every route behind this layer is identity-scoped: a missing, garbled or
/// stale token is rejected outright, and the caller's hashed identity is
/// injected as a request extension.
pub async fn authenticate(mut req: Request, next: Next) -> Result<Response<Body>, AppError> {
    let env = ApiServerEnv::load();

    let token = extract_bearer_token(&req)?;
    let decrypted = decrypt(&token, &env.get_env_var("SECRET_SALT"))
        .map_err(|_| AppError::unauthenticated(anyhow!("invalid auth token")))?;
    let authenticated: AuthenticatedRequest = serde_json::from_str(&decrypted)
        .map_err(|_| AppError::unauthenticated(anyhow!("malformed auth token")))?;

    if authenticated.timestamp < get_current_timestamp() - TOKEN_FRESHNESS_WINDOW {
        return Err(AppError::unauthenticated(anyhow!("auth token expired")));
    }

    let user_id = blake3_hash(authenticated.user_id.as_bytes());
    req.extensions_mut().insert(user_id);
    Ok(next.run(req).await)
}
