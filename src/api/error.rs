use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

use crate::models::ValidationError;
use crate::services::SettingsError;

/// 统一的API错误类型
#[derive(Debug)]
pub enum ApiError {
    /// 未找到资源
    NotFound(String),
    /// 验证错误
    Validation(String),
    /// 内部服务器错误
    Internal(String),
    /// 请求参数错误
    BadRequest(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// 从ValidationError转换
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

/// 从SettingsError转换
impl From<SettingsError> for ApiError {
    fn from(err: SettingsError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

/// 从请求体解析错误转换；字段内容不合法为验证错误，其余为请求错误
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => ApiError::Validation(err.body_text()),
            other => ApiError::BadRequest(other.body_text()),
        }
    }
}

/// 从查询参数解析错误转换
impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// 实现IntoResponse，将错误转换为HTTP响应
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::NotFound(ref msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            ApiError::Validation(ref msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg.clone())
            }
            ApiError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal server error occurred".to_string(),
                )
            }
            ApiError::BadRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", msg.clone())
            }
        };

        let body = Json(json!({
            "success": false,
            "error": {
                "type": error_type,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result类型别名
pub type ApiResult<T> = Result<T, ApiError>;

/// 辅助宏：快速创建错误
#[macro_export]
macro_rules! api_error {
    (NotFound, $msg:expr) => {
        $crate::api::error::ApiError::NotFound($msg.to_string())
    };
    (Validation, $msg:expr) => {
        $crate::api::error::ApiError::Validation($msg.to_string())
    };
    (BadRequest, $msg:expr) => {
        $crate::api::error::ApiError::BadRequest($msg.to_string())
    };
    (Internal, $msg:expr) => {
        $crate::api::error::ApiError::Internal($msg.to_string())
    };
}
