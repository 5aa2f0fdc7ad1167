use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// Application failure taxonomy. Every fallible operation below the HTTP
/// edge returns one of these; the [`IntoResponse`] impl is the single place
/// that maps them onto the wire.
#[derive(Debug)]
pub enum AppError {
    /// Malformed or missing input, including uniqueness violations.
    Validation(String),
    /// Missing, invalid, or expired credentials.
    Unauthorized(String),
    /// Resource absent, or present but not owned by the caller.
    NotFound(String),
    /// Anything else. The detail is logged, never sent to the client.
    Internal(Error),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> String {
        match self {
            Self::Validation(msg) | Self::Unauthorized(msg) | Self::NotFound(msg) => msg.clone(),
            Self::Internal(_) => {
                "An unexpected error occurred while processing your request".to_string()
            }
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    message: String,
    status_code: u16,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Self::Internal(err) = &self {
            error!(error = ?err, "Unhandled internal error");
        }

        let status = self.status_code();
        let body = Json(ErrorBody {
            message: self.public_message(),
            status_code: status.as_u16(),
        });

        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::Internal(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use http_body_util::BodyExt;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::validation("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::unauthorized("nope").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::not_found("gone").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(anyhow!("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let response = AppError::not_found("Student not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Student not found");
        assert_eq!(body["statusCode"], 404);
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let response = AppError::from(anyhow!("connection refused")).into_response();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        let message = body["message"].as_str().unwrap();
        assert!(!message.contains("connection refused"));
        assert_eq!(body["statusCode"], 500);
    }
}
