// 筛选面板的可选项目录
//
// 包括：
// - 滑块的取值范围与步长
// - 动画年份（下限 1940，上限为注入的当前年份）
// - 动画季度 / 格式 / 播出状态 / 类型
// - 剧集状态

use chrono::Datelike;
use serde::Serialize;

use super::filter::{AnimeFormat, AnimeSeason, AnimeStatus, MediaKind, TvStatus, ALL};

/// 动画年份下限
pub const ANIME_YEAR_FLOOR: u16 = 1940;

/// 最少投票数的默认值
pub const DEFAULT_MINIMUM_VOTE_COUNT: u32 = 200;

/// 滑块取值范围
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SliderDomain<T> {
    pub min: T,
    pub max: T,
    pub step: T,
}

pub const VOTE_COUNT_DOMAIN: SliderDomain<u32> = SliderDomain { min: 0, max: 500, step: 50 };

pub const USER_SCORE_DOMAIN: SliderDomain<f64> = SliderDomain { min: 0.0, max: 10.0, step: 0.5 };

/// 单位：分钟
pub const RUNTIME_DOMAIN: SliderDomain<u32> = SliderDomain { min: 0, max: 400, step: 15 };

pub const ANIME_GENRES: [&str; 18] = [
    "Action",
    "Adventure",
    "Comedy",
    "Drama",
    "Ecchi",
    "Fantasy",
    "Horror",
    "Mahou Shoujo",
    "Mecha",
    "Music",
    "Mystery",
    "Psychological",
    "Romance",
    "Sci-Fi",
    "Slice of Life",
    "Sports",
    "Supernatural",
    "Thriller",
];

/// 当前年份来源（用于限定动画年份列表）
pub trait YearSource: Send + Sync {
    fn current_year(&self) -> u16;
}

/// 系统时钟
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemYear;

impl YearSource for SystemYear {
    fn current_year(&self) -> u16 {
        u16::try_from(chrono::Local::now().year()).unwrap_or(ANIME_YEAR_FLOOR)
    }
}

/// 固定年份（测试用）
#[derive(Debug, Clone, Copy)]
pub struct FixedYear(pub u16);

impl YearSource for FixedYear {
    fn current_year(&self) -> u16 {
        self.0
    }
}

/// 动画年份列表，从当前年份倒序到 1940（含）
pub fn anime_years(current_year: u16) -> Vec<u16> {
    (ANIME_YEAR_FLOOR..=current_year).rev().collect()
}

/// 下拉框选项
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionItem {
    pub value: String,
    pub label: String,
}

impl OptionItem {
    fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    fn all() -> Self {
        Self::new(ALL, ALL)
    }

    /// 首项为 "All"，其余为具体值
    fn list_with_all<I, S>(values: I) -> Vec<OptionItem>
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        std::iter::once(Self::all())
            .chain(values.into_iter().map(|(value, label)| Self::new(value, label)))
            .collect()
    }
}

/// 某一媒体类别的全部可选项
///
/// 电影 / 剧集的类型与语言字典由调用方提供，不在此处
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "media_kind", rename_all = "lowercase")]
pub enum FilterCatalog {
    Movie(TmdbCatalog),
    Tv(TmdbCatalog),
    Anime(AnimeCatalog),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TmdbCatalog {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub statuses: Vec<OptionItem>,
    pub minimum_vote_count: SliderDomain<u32>,
    pub default_minimum_vote_count: u32,
    pub user_score: SliderDomain<f64>,
    pub runtime: SliderDomain<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimeCatalog {
    pub genres: Vec<String>,
    pub years: Vec<OptionItem>,
    pub seasons: Vec<OptionItem>,
    pub formats: Vec<OptionItem>,
    pub airing_statuses: Vec<OptionItem>,
}

impl FilterCatalog {
    pub fn for_kind(kind: MediaKind, current_year: u16) -> Self {
        match kind {
            MediaKind::Movie => FilterCatalog::Movie(TmdbCatalog::new(false)),
            MediaKind::Tv => FilterCatalog::Tv(TmdbCatalog::new(true)),
            MediaKind::Anime => FilterCatalog::Anime(AnimeCatalog::new(current_year)),
        }
    }
}

impl TmdbCatalog {
    fn new(with_statuses: bool) -> Self {
        let statuses = if with_statuses {
            OptionItem::list_with_all(TvStatus::ALL.iter().map(|s| (s.code(), s.label())))
        } else {
            Vec::new()
        };

        Self {
            statuses,
            minimum_vote_count: VOTE_COUNT_DOMAIN,
            default_minimum_vote_count: DEFAULT_MINIMUM_VOTE_COUNT,
            user_score: USER_SCORE_DOMAIN,
            runtime: RUNTIME_DOMAIN,
        }
    }
}

impl AnimeCatalog {
    fn new(current_year: u16) -> Self {
        let years = anime_years(current_year)
            .into_iter()
            .map(|year| (year.to_string(), year.to_string()));

        Self {
            genres: ANIME_GENRES.iter().map(|g| g.to_string()).collect(),
            years: OptionItem::list_with_all(years),
            seasons: OptionItem::list_with_all(AnimeSeason::ALL.iter().map(|s| (s.as_str(), s.as_str()))),
            formats: OptionItem::list_with_all(AnimeFormat::ALL.iter().map(|f| (f.as_str(), f.as_str()))),
            airing_statuses: OptionItem::list_with_all(
                AnimeStatus::ALL.iter().map(|s| (s.as_str(), s.as_str())),
            ),
        }
    }
}
