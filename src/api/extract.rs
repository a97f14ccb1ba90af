use axum::extract::{FromRequest, FromRequestParts};

use super::error::ApiError;

/// 请求体解析失败时返回统一的错误格式
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// 查询参数解析失败时返回统一的错误格式
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);
