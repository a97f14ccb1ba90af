// 筛选状态与查询参数的双向映射
//
// - decode: 查询参数 -> 筛选状态，缺失或无法解析的值一律回退默认值
// - encode: 筛选状态 -> 查询参数，等于默认值的字段不输出
// - reset / toggle_member: 面板上的重置与多选切换
//
// 所有函数均为纯函数，不会返回错误

use std::str::FromStr;

use crate::models::{
    AnimeFilter, Bounds, Choice, FilterSelection, MediaKind, MultiSelectField, QueryParams,
    SelectionSet, TmdbFilter,
};

/// 查询参数键名
pub mod keys {
    pub const WITH_GENRES: &str = "with_genres";
    pub const WITH_ORIGINAL_LANGUAGE: &str = "with_original_language";
    pub const WITH_STATUS: &str = "with_status";
    pub const VOTE_COUNT_GTE: &str = "vote_count.gte";
    pub const VOTE_AVERAGE_GTE: &str = "vote_average.gte";
    pub const VOTE_AVERAGE_LTE: &str = "vote_average.lte";
    pub const WITH_RUNTIME_GTE: &str = "with_runtime.gte";
    pub const WITH_RUNTIME_LTE: &str = "with_runtime.lte";

    pub const GENRES: &str = "genres";
    pub const YEAR: &str = "year";
    pub const SEASON: &str = "season";
    pub const FORMAT: &str = "format";
    pub const STATUS: &str = "status";
    pub const QUERY: &str = "query";
}

/// 筛选状态映射器
pub struct FilterStateMapper;

impl FilterStateMapper {
    /// 从查询参数构造完整的筛选状态
    pub fn decode(params: &QueryParams, kind: MediaKind) -> FilterSelection {
        match kind {
            MediaKind::Movie => FilterSelection::Movie(Self::decode_tmdb(params, false)),
            MediaKind::Tv => FilterSelection::Tv(Self::decode_tmdb(params, true)),
            MediaKind::Anime => FilterSelection::Anime(Self::decode_anime(params)),
        }
    }

    /// 生成新的查询参数（整体替换，不与旧参数合并）
    pub fn encode(selection: &FilterSelection) -> QueryParams {
        match selection {
            FilterSelection::Movie(filter) => Self::encode_tmdb(filter, false),
            FilterSelection::Tv(filter) => Self::encode_tmdb(filter, true),
            FilterSelection::Anime(filter) => Self::encode_anime(filter),
        }
    }

    /// 全默认状态，等价于 `decode(&QueryParams::new(), kind)`
    pub fn reset(kind: MediaKind) -> FilterSelection {
        FilterSelection::default_for(kind)
    }

    /// 切换多选字段中的成员；其他字段不受影响
    ///
    /// 字段不属于当前类别，或 `id` 无法写入参数（空串、含 `,`）时原样返回
    pub fn toggle_member(
        selection: &FilterSelection,
        field: MultiSelectField,
        id: &str,
    ) -> FilterSelection {
        let mut next = selection.clone();
        if let Some(members) = next.members_mut(field) {
            members.toggle(id);
        }
        next
    }

    fn decode_tmdb(params: &QueryParams, with_status: bool) -> TmdbFilter {
        let defaults = TmdbFilter::default();

        TmdbFilter {
            genre_ids: SelectionSet::from_param(params.get(keys::WITH_GENRES)),
            original_language: Choice::from_param(params.get(keys::WITH_ORIGINAL_LANGUAGE)),
            status: if with_status {
                Choice::from_param(params.get(keys::WITH_STATUS))
            } else {
                Choice::All
            },
            minimum_vote_count: parse_count(params.get(keys::VOTE_COUNT_GTE))
                .unwrap_or(defaults.minimum_vote_count),
            // 上下界分别解析，缺失的一端取自身默认值
            user_score: Bounds::new(
                parse_score(params.get(keys::VOTE_AVERAGE_GTE)).unwrap_or(defaults.user_score.low),
                parse_score(params.get(keys::VOTE_AVERAGE_LTE)).unwrap_or(defaults.user_score.high),
            ),
            runtime: Bounds::new(
                parse_count(params.get(keys::WITH_RUNTIME_GTE)).unwrap_or(defaults.runtime.low),
                parse_count(params.get(keys::WITH_RUNTIME_LTE)).unwrap_or(defaults.runtime.high),
            ),
        }
    }

    fn decode_anime(params: &QueryParams) -> AnimeFilter {
        AnimeFilter {
            genres: SelectionSet::from_param(params.get(keys::GENRES)),
            year: Choice::from_param(params.get(keys::YEAR)),
            season: Choice::from_param(params.get(keys::SEASON)),
            format: Choice::from_param(params.get(keys::FORMAT)),
            airing_status: Choice::from_param(params.get(keys::STATUS)),
            title_query: params.get(keys::QUERY).unwrap_or_default().to_string(),
        }
    }

    fn encode_tmdb(filter: &TmdbFilter, with_status: bool) -> QueryParams {
        let defaults = TmdbFilter::default();
        let mut params = QueryParams::new();

        if let Some(genres) = filter.genre_ids.to_param() {
            params.insert(keys::WITH_GENRES, genres);
        }
        if let Some(language) = filter.original_language.to_param() {
            params.insert(keys::WITH_ORIGINAL_LANGUAGE, language);
        }
        if with_status {
            if let Some(status) = filter.status.to_param() {
                params.insert(keys::WITH_STATUS, status);
            }
        }
        if filter.minimum_vote_count != defaults.minimum_vote_count {
            params.insert(keys::VOTE_COUNT_GTE, filter.minimum_vote_count.to_string());
        }
        if filter.user_score.low != defaults.user_score.low {
            params.insert(keys::VOTE_AVERAGE_GTE, filter.user_score.low.to_string());
        }
        if filter.user_score.high != defaults.user_score.high {
            params.insert(keys::VOTE_AVERAGE_LTE, filter.user_score.high.to_string());
        }
        if filter.runtime.low != defaults.runtime.low {
            params.insert(keys::WITH_RUNTIME_GTE, filter.runtime.low.to_string());
        }
        if filter.runtime.high != defaults.runtime.high {
            params.insert(keys::WITH_RUNTIME_LTE, filter.runtime.high.to_string());
        }

        params
    }

    fn encode_anime(filter: &AnimeFilter) -> QueryParams {
        let mut params = QueryParams::new();

        if let Some(genres) = filter.genres.to_param() {
            params.insert(keys::GENRES, genres);
        }
        if let Some(year) = filter.year.to_param() {
            params.insert(keys::YEAR, year);
        }
        if let Some(season) = filter.season.to_param() {
            params.insert(keys::SEASON, season);
        }
        if let Some(format) = filter.format.to_param() {
            params.insert(keys::FORMAT, format);
        }
        if let Some(status) = filter.airing_status.to_param() {
            params.insert(keys::STATUS, status);
        }
        if !filter.title_query.trim().is_empty() {
            params.insert(keys::QUERY, filter.title_query.clone());
        }

        params
    }
}

/// 非负整数；空串与无法解析的值视为缺失
fn parse_count(raw: Option<&str>) -> Option<u32> {
    parse_trimmed(raw)
}

/// 有限且非负的小数；NaN / inf 视为缺失
fn parse_score(raw: Option<&str>) -> Option<f64> {
    parse_trimmed::<f64>(raw).filter(|value| value.is_finite() && *value >= 0.0)
}

fn parse_trimmed<T: FromStr>(raw: Option<&str>) -> Option<T> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse().ok()
}
