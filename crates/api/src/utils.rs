use anyhow::anyhow;
use axum::extract::Request;
use axum::http::header;

use crate::response::AppError;

pub fn extract_bearer_token(req: &Request) -> Result<String, AppError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AppError::unauthenticated(anyhow!("missing authorization header")))?;

    let value = auth_header
        .to_str()
        .map_err(|_| AppError::unauthenticated(anyhow!("invalid authorization header")))?
        .split_whitespace()
        .collect::<Vec<_>>();

    match value.as_slice() {
        ["Bearer", token] => Ok(token.to_string()),
        _ => Err(AppError::unauthenticated(anyhow!("invalid authorization header"))),
    }
}

pub fn setup_tracing() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}
