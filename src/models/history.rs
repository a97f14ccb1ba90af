// 观看历史筛选条件
//
// 查询参数：
// - types: 逗号分隔的媒体类别；只选了 1~2 种时才输出，3 种等同于不筛选
// - from / to: 日期区间，原样透传
// - page: 页码，第 1 页不输出

use serde::Serialize;

use super::filter::MediaKind;
use super::query::QueryParams;
use crate::services::pagination::PageRequest;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct HistoryFilter {
    pub types: Vec<MediaKind>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub page: PageRequest,
}

impl HistoryFilter {
    pub fn decode(params: &QueryParams) -> Self {
        let mut types: Vec<MediaKind> = Vec::new();
        for kind in params
            .get("types")
            .unwrap_or_default()
            .split(',')
            .filter_map(|raw| raw.parse::<MediaKind>().ok())
        {
            if !types.contains(&kind) {
                types.push(kind);
            }
        }

        Self {
            types,
            from: non_empty(params.get("from")),
            to: non_empty(params.get("to")),
            page: PageRequest::from_param(params.get("page")),
        }
    }

    pub fn encode(&self) -> QueryParams {
        let mut params = QueryParams::new();

        if self.filters_by_type() {
            let types: Vec<&str> = self.types.iter().map(MediaKind::as_str).collect();
            params.insert("types", types.join(","));
        }
        if let Some(from) = &self.from {
            params.insert("from", from.clone());
        }
        if let Some(to) = &self.to {
            params.insert("to", to.clone());
        }
        if self.page.page != 1 {
            params.insert("page", self.page.page.to_string());
        }

        params
    }

    /// 只选了部分类别时才真正筛选
    pub fn filters_by_type(&self) -> bool {
        matches!(self.types.len(), 1 | 2)
    }
}

fn non_empty(raw: Option<&str>) -> Option<String> {
    raw.filter(|value| !value.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_defaults() {
        let filter = HistoryFilter::decode(&QueryParams::new());
        assert_eq!(filter, HistoryFilter::default());
        assert_eq!(filter.page.page, 1);
        assert!(filter.encode().is_empty());
    }

    #[test]
    fn test_decode_drops_unknown_types() {
        let params = QueryParams::parse("types=movie,people,tv,movie&from=2023-01-01&to=&page=2");
        let filter = HistoryFilter::decode(&params);
        assert_eq!(filter.types, vec![MediaKind::Movie, MediaKind::Tv]);
        assert_eq!(filter.from.as_deref(), Some("2023-01-01"));
        assert_eq!(filter.to, None);
        assert_eq!(filter.page.page, 2);
        assert_eq!(
            filter.encode().to_query_string(),
            "types=movie%2Ctv&from=2023-01-01&page=2"
        );
    }

    #[test]
    fn test_all_types_means_no_type_filter() {
        let params = QueryParams::parse("types=movie,tv,anime");
        let filter = HistoryFilter::decode(&params);
        assert_eq!(filter.types.len(), 3);
        assert!(!filter.filters_by_type());
        assert!(!filter.encode().contains_key("types"));
    }
}
