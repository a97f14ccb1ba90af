// 分页工具
//
// - 页码参数解析（非法值回退到第 1 页）
// - 总页数计算
// - 分页器显示的页码窗口

use serde::Serialize;

/// 观看历史每页条数
pub const HISTORY_PAGE_SIZE: u32 = 20;

/// TMDB 列表接口允许的最大页码
pub const TMDB_MAX_PAGE: u32 = 1000;

/// 当前页每侧最多显示的页数
pub const MAX_PAGE_SIBLINGS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PageRequest {
    pub page: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl PageRequest {
    /// 解析 `page` 参数；缺失、非正整数或无法解析时为第 1 页
    pub fn from_param(raw: Option<&str>) -> Self {
        raw.and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|page| *page > 0)
            .map(|page| Self { page })
            .unwrap_or_default()
    }

    /// 带上限的页码；不在 1..=max 内时返回 None，由调用方请求不分页的首屏数据
    pub fn bounded(raw: Option<&str>, max: u32) -> Option<Self> {
        raw.and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|page| (1..=max).contains(page))
            .map(|page| Self { page })
    }

    pub fn offset(&self, per_page: u32) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(per_page)
    }
}

/// 总页数（向上取整）；每页条数为 0 时返回 0
pub fn total_pages(total_items: u64, per_page: u32) -> u32 {
    if per_page == 0 {
        return 0;
    }
    let pages = total_items.div_ceil(u64::from(per_page));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// 分页器中的一项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "page", rename_all = "snake_case")]
pub enum PageItem {
    Page(u32),
    /// 省略号
    Gap,
}

/// 计算页码窗口
///
/// 首页与末页始终出现，当前页两侧各保留 `siblings` 页（最多 `MAX_PAGE_SIBLINGS`）；
/// 只缺一页时直接补上该页而不是显示省略号
pub fn page_window(current: u32, total: u32, siblings: u32) -> Vec<PageItem> {
    if total == 0 {
        return Vec::new();
    }

    let siblings = siblings.min(MAX_PAGE_SIBLINGS);
    let current = current.clamp(1, total);
    let start = current.saturating_sub(siblings).max(1);
    let end = current.saturating_add(siblings).min(total);

    let span = usize::try_from(end - start).unwrap_or(usize::MAX);
    let mut pages: Vec<u32> = Vec::with_capacity(span.saturating_add(3));
    pages.push(1);
    pages.extend((start..=end).filter(|&page| page != 1 && page != total));
    if total != 1 {
        pages.push(total);
    }

    let mut items = Vec::with_capacity(pages.len() + 2);
    let mut previous: Option<u32> = None;
    for page in pages {
        if let Some(prev) = previous {
            match page - prev {
                1 => {}
                2 => items.push(PageItem::Page(prev + 1)),
                _ => items.push(PageItem::Gap),
            }
        }
        items.push(PageItem::Page(page));
        previous = Some(page);
    }

    items
}
