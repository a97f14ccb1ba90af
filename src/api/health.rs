use axum::{extract::State, http::Uri, response::IntoResponse};
use serde_json::json;

use super::error::{ApiError, ApiResult};
use super::response::success;
use super::AppState;

/// 健康检查端点
pub async fn health_check(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    Ok(success(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "current_year": state.current_year(),
        "settings_path": state.settings.path().display().to_string(),
    })))
}

/// 未匹配的路由
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
