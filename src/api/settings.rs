use axum::{extract::State, response::IntoResponse};

use super::error::ApiResult;
use super::extract::ApiJson;
use super::response::{success, ApiResponse};
use super::AppState;
use crate::models::{SettingDescriptor, SettingKey, SettingsPatch};

/// 获取当前设置
pub async fn get_settings(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    Ok(success(state.settings.get().await))
}

/// 部分更新设置
pub async fn update_settings(
    State(state): State<AppState>,
    ApiJson(patch): ApiJson<SettingsPatch>,
) -> ApiResult<impl IntoResponse> {
    let update = state.settings.update(&patch).await?;
    Ok(success(update))
}

/// 恢复默认设置
pub async fn reset_settings(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let settings = state.settings.reset().await?;
    Ok(ApiResponse::success_with_message(settings, "Settings reset to defaults"))
}

/// 列出全部设置项（键名、存储键、持久化范围、默认值）
pub async fn list_setting_keys() -> ApiResult<impl IntoResponse> {
    let keys: Vec<SettingDescriptor> = SettingKey::ALL.iter().map(SettingKey::descriptor).collect();
    Ok(success(keys))
}
