use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

pub type AppSuccess = GenericResponse;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenericResponse {
    pub status: u16,
    pub message: String,
    pub data: serde_json::Value,
}

impl GenericResponse {
    pub fn new(status: StatusCode, message: &str, data: serde_json::Value) -> Self {
        Self {
            status: status.as_u16(),
            message: message.to_string(),
            data,
        }
    }
}

impl IntoResponse for GenericResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

// Wraps `anyhow::Error` with the status it should surface as.
#[derive(Debug)]
pub struct AppError(pub StatusCode, pub anyhow::Error);

impl AppError {
    pub fn new(status: StatusCode, err: anyhow::Error) -> Self {
        Self(status, err)
    }

    pub fn unauthenticated(err: anyhow::Error) -> Self {
        Self(StatusCode::UNAUTHORIZED, err)
    }

    pub fn invalid_argument(err: anyhow::Error) -> Self {
        Self(StatusCode::BAD_REQUEST, err)
    }
}

// Full detail is logged server-side; 5xx responses carry a fixed message so
// provider and database errors never reach callers.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("CODE: {}, MESSAGE: {:#}", self.0.as_u16(), self.1);
        let message = if self.0.is_server_error() {
            "internal error".to_string()
        } else {
            self.1.to_string()
        };
        GenericResponse::new(self.0, &message, json!({})).into_response()
    }
}

// `?` on `Result<_, anyhow::Error>` inside handlers: anything a handler did
// not map explicitly is a downstream failure and surfaces as internal.
impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(StatusCode::INTERNAL_SERVER_ERROR, err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    async fn body_of(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn internal_errors_hide_detail() {
        let err: AppError = anyhow!("provider exploded: secret detail").into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_of(response).await;
        assert_eq!(body["message"], "internal error");
    }

    #[tokio::test]
    async fn client_errors_keep_their_message() {
        let err = AppError::invalid_argument(anyhow!("maxTokens must not exceed 4096"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_of(response).await;
        assert_eq!(body["message"], "maxTokens must not exceed 4096");
    }
}
