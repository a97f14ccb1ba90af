use axum::{
    extract::{Path, RawQuery, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use super::error::{ApiError, ApiResult};
use super::extract::ApiJson;
use super::response::success;
use super::AppState;
use crate::api_error;
use crate::models::{
    FilterCatalog, FilterSelection, FilterValidator, MediaKind, MultiSelectField, QueryParams,
};
use crate::services::FilterStateMapper;

/// 筛选状态及其对应的查询参数
#[derive(Debug, Serialize)]
pub struct FilterStateResponse {
    pub selection: FilterSelection,
    pub params: QueryParams,
    /// 可直接拼到 URL 上的查询字符串（不带 `?`）
    pub search: String,
}

impl FilterStateResponse {
    fn from_selection(selection: FilterSelection) -> Self {
        let params = FilterStateMapper::encode(&selection);
        let search = params.to_query_string();
        Self {
            selection,
            params,
            search,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub selection: FilterSelection,
    pub field: MultiSelectField,
    pub id: String,
}

fn parse_kind(kind: &str) -> ApiResult<MediaKind> {
    kind.parse::<MediaKind>().map_err(ApiError::BadRequest)
}

fn ensure_kind(kind: MediaKind, selection: &FilterSelection) -> ApiResult<()> {
    if selection.kind() != kind {
        return Err(api_error!(
            BadRequest,
            format!("selection is for {}, expected {}", selection.kind(), kind)
        ));
    }
    Ok(())
}

/// 打开筛选面板：从当前 URL 参数解析筛选状态
pub async fn decode_filters(
    Path(kind): Path<String>,
    RawQuery(query): RawQuery,
) -> ApiResult<impl IntoResponse> {
    let kind = parse_kind(&kind)?;
    let params = QueryParams::parse(query.as_deref().unwrap_or_default());
    let selection = FilterStateMapper::decode(&params, kind);

    tracing::debug!("Decoded {} filters from {} params", kind, params.len());

    Ok(success(FilterStateResponse::from_selection(selection)))
}

/// 提交筛选面板：校验后生成新的查询参数
pub async fn encode_filters(
    Path(kind): Path<String>,
    State(state): State<AppState>,
    ApiJson(selection): ApiJson<FilterSelection>,
) -> ApiResult<impl IntoResponse> {
    let kind = parse_kind(&kind)?;
    ensure_kind(kind, &selection)?;

    FilterValidator::new(state.current_year()).validate(&selection)?;

    let response = FilterStateResponse::from_selection(selection);
    tracing::info!("Encoded {} filters: ?{}", kind, response.search);

    Ok(success(response))
}

/// 重置筛选面板
pub async fn reset_filters(Path(kind): Path<String>) -> ApiResult<impl IntoResponse> {
    let kind = parse_kind(&kind)?;
    Ok(success(FilterStateResponse::from_selection(
        FilterStateMapper::reset(kind),
    )))
}

/// 切换多选字段中的成员
pub async fn toggle_filter_member(
    Path(kind): Path<String>,
    ApiJson(request): ApiJson<ToggleRequest>,
) -> ApiResult<impl IntoResponse> {
    let kind = parse_kind(&kind)?;
    ensure_kind(kind, &request.selection)?;

    let selection =
        FilterStateMapper::toggle_member(&request.selection, request.field, &request.id);

    Ok(success(FilterStateResponse::from_selection(selection)))
}

/// 获取筛选面板的可选项
pub async fn get_filter_options(
    Path(kind): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<impl IntoResponse> {
    let kind = parse_kind(&kind)?;
    Ok(success(FilterCatalog::for_kind(kind, state.current_year())))
}
