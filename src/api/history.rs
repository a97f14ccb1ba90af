use axum::{extract::RawQuery, response::IntoResponse};
use serde::{Deserialize, Serialize};

use super::error::ApiResult;
use super::extract::ApiQuery;
use crate::api_error;
use super::response::success;
use crate::models::{HistoryFilter, QueryParams};
use crate::services::{
    page_window, total_pages, PageItem, PageRequest, HISTORY_PAGE_SIZE, MAX_PAGE_SIBLINGS,
};

#[derive(Debug, Serialize)]
pub struct HistoryFilterResponse {
    pub filter: HistoryFilter,
    pub params: QueryParams,
    pub search: String,
    pub page_size: u32,
}

/// 解析观看历史的筛选参数并输出规范化后的查询字符串
pub async fn decode_history_filters(RawQuery(query): RawQuery) -> ApiResult<impl IntoResponse> {
    let filter = HistoryFilter::decode(&QueryParams::parse(query.as_deref().unwrap_or_default()));
    let params = filter.encode();
    let search = params.to_query_string();

    Ok(success(HistoryFilterResponse {
        filter,
        params,
        search,
        page_size: HISTORY_PAGE_SIZE,
    }))
}

#[derive(Debug, Deserialize)]
pub struct PageWindowParams {
    pub page: Option<String>,
    pub total: u64,
    pub per_page: Option<u32>,
    pub siblings: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct PageWindowResponse {
    pub page: u32,
    pub total_pages: u32,
    pub items: Vec<PageItem>,
}

/// 根据条目总数计算分页器页码
pub async fn get_page_window(ApiQuery(params): ApiQuery<PageWindowParams>) -> ApiResult<impl IntoResponse> {
    let siblings = params.siblings.unwrap_or(1);
    if siblings > MAX_PAGE_SIBLINGS {
        return Err(api_error!(
            BadRequest,
            format!("siblings must be at most {}", MAX_PAGE_SIBLINGS)
        ));
    }

    let per_page = params.per_page.unwrap_or(HISTORY_PAGE_SIZE);
    let pages = total_pages(params.total, per_page);
    let page = PageRequest::from_param(params.page.as_deref()).page.min(pages.max(1));

    Ok(success(PageWindowResponse {
        page,
        total_pages: pages,
        items: page_window(page, pages, siblings),
    }))
}
