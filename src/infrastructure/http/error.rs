//! HTTP Error Handling
//!
//! 错误响应体是通用的，不暴露字段级信息或存储层细节

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应格式 `{"Error": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(rename = "Error")]
    pub error: &'static str,
}

impl ErrorResponse {
    pub fn new(error: &'static str) -> Self {
        Self { error }
    }
}

/// 对外错误信息
pub mod message {
    pub const INVALID_REQUEST: &str = "Invalid request";
    pub const NOT_FOUND: &str = "Not found";
    pub const INTERNAL_ERROR: &str = "Internal server error";
}

/// API 错误
///
/// 内部的 String 只用于服务端日志
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, response) = match &self {
            ApiError::NotFound(msg) => {
                tracing::warn!(error = %msg, "Resource not found");
                (StatusCode::NOT_FOUND, ErrorResponse::new(message::NOT_FOUND))
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(message::INVALID_REQUEST),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(message::INTERNAL_ERROR),
                )
            }
        };

        (status, Json(response)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { resource_type, id } => {
                ApiError::NotFound(format!("{} not found: {}", resource_type, id))
            }
            ApplicationError::Validation(err) => ApiError::BadRequest(err.to_string()),
            ApplicationError::RepositoryError(msg) => ApiError::Internal(msg),
        }
    }
}
