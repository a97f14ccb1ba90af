// 发现页筛选条件的数据结构
//
// 包括：
// - 媒体类别（电影 / 剧集 / 动画）
// - "全部" 哨兵值的显式表示 `Choice`
// - 多选集合 `SelectionSet`
// - 各类别的筛选字段及其默认值

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use super::catalog::{
    DEFAULT_MINIMUM_VOTE_COUNT, RUNTIME_DOMAIN, USER_SCORE_DOMAIN,
};

/// 哨兵值：表示不筛选
pub const ALL: &str = "All";

/// 筛选面板所属的媒体类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Tv,
    Anime,
}

impl MediaKind {
    pub const ALL: [MediaKind; 3] = [MediaKind::Movie, MediaKind::Tv, MediaKind::Anime];

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
            MediaKind::Anime => "anime",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(MediaKind::Movie),
            "tv" => Ok(MediaKind::Tv),
            "anime" => Ok(MediaKind::Anime),
            _ => Err(format!("Invalid media kind: {}", s)),
        }
    }
}

/// 可以写入查询参数的单值字段
///
/// `from_param` 对无法识别的值返回 None，调用方据此回退到默认值
pub trait FilterValue: Sized {
    fn from_param(raw: &str) -> Option<Self>;
    fn to_param(&self) -> String;
}

impl FilterValue for String {
    fn from_param(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            None
        } else {
            Some(raw.to_string())
        }
    }

    fn to_param(&self) -> String {
        self.clone()
    }
}

/// 年份：四位数字
impl FilterValue for u16 {
    fn from_param(raw: &str) -> Option<Self> {
        if raw.len() == 4 && raw.bytes().all(|b| b.is_ascii_digit()) {
            raw.parse().ok()
        } else {
            None
        }
    }

    fn to_param(&self) -> String {
        format!("{:04}", self)
    }
}

/// 单选字段：`All` 表示不筛选，`Only` 表示选中了具体的值
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::All
    }
}

impl<T: FilterValue> Choice<T> {
    /// 从查询参数解析；缺失、`All` 或无法识别时均为 `All`
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            None | Some(ALL) => Choice::All,
            Some(raw) => T::from_param(raw).map(Choice::Only).unwrap_or(Choice::All),
        }
    }

    /// `All` 不输出
    pub fn to_param(&self) -> Option<String> {
        match self {
            Choice::All => None,
            Choice::Only(value) => Some(value.to_param()),
        }
    }
}

impl<T> Choice<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Choice::All)
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Choice::All => None,
            Choice::Only(value) => Some(value),
        }
    }
}

impl<T: FilterValue> Serialize for Choice<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Choice::All => serializer.serialize_str(ALL),
            Choice::Only(value) => serializer.serialize_str(&value.to_param()),
        }
    }
}

impl<'de, T: FilterValue> Deserialize<'de> for Choice<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() || raw == ALL {
            return Ok(Choice::All);
        }
        T::from_param(&raw)
            .map(Choice::Only)
            .ok_or_else(|| de::Error::custom(format!("invalid filter value: {}", raw)))
    }
}

/// 多选集合
///
/// 迭代顺序为插入顺序（即用户点击顺序），相等性按集合语义比较
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SelectionSet(Vec<String>);

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按 `,` 拆分参数值，丢弃空段，重复项保留第一次出现
    pub fn from_param(raw: Option<&str>) -> Self {
        raw.map(|raw| raw.split(',').map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn to_param(&self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.join(","))
        }
    }

    /// 能否作为成员写入参数（不能为空，不能含分隔符）
    pub fn is_valid_member(id: &str) -> bool {
        !id.is_empty() && !id.contains(',')
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|member| member == id)
    }

    /// 存在则移除，否则追加到末尾；返回操作后是否包含该成员
    pub fn toggle(&mut self, id: &str) -> bool {
        if !Self::is_valid_member(id) {
            return false;
        }
        match self.0.iter().position(|member| member == id) {
            Some(index) => {
                self.0.remove(index);
                false
            }
            None => {
                self.0.push(id.to_string());
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl PartialEq for SelectionSet {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().all(|member| other.contains(member))
    }
}

impl Eq for SelectionSet {}

impl FromIterator<String> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut members: Vec<String> = Vec::new();
        for id in iter {
            if Self::is_valid_member(&id) && !members.contains(&id) {
                members.push(id);
            }
        }
        SelectionSet(members)
    }
}

impl<'a> FromIterator<&'a str> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}

impl From<Vec<String>> for SelectionSet {
    fn from(members: Vec<String>) -> Self {
        members.into_iter().collect()
    }
}

impl From<SelectionSet> for Vec<String> {
    fn from(set: SelectionSet) -> Self {
        set.0
    }
}

/// 闭区间选择（双滑块）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds<T> {
    pub low: T,
    pub high: T,
}

impl<T> Bounds<T> {
    pub const fn new(low: T, high: T) -> Self {
        Self { low, high }
    }
}

impl<T: PartialOrd> Bounds<T> {
    pub fn is_ordered(&self) -> bool {
        self.low <= self.high
    }
}

/// 剧集状态（TMDB `with_status` 编码）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TvStatus {
    ReturningSeries,
    Planned,
    InProduction,
    Ended,
    Cancelled,
    Pilot,
}

impl TvStatus {
    pub const ALL: [TvStatus; 6] = [
        TvStatus::ReturningSeries,
        TvStatus::Planned,
        TvStatus::InProduction,
        TvStatus::Ended,
        TvStatus::Cancelled,
        TvStatus::Pilot,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            TvStatus::ReturningSeries => "0",
            TvStatus::Planned => "1",
            TvStatus::InProduction => "2",
            TvStatus::Ended => "3",
            TvStatus::Cancelled => "4",
            TvStatus::Pilot => "5",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TvStatus::ReturningSeries => "Returning Series",
            TvStatus::Planned => "Planned",
            TvStatus::InProduction => "In Production",
            TvStatus::Ended => "Ended",
            TvStatus::Cancelled => "Cancelled",
            TvStatus::Pilot => "Pilot",
        }
    }
}

impl FilterValue for TvStatus {
    fn from_param(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == raw)
    }

    fn to_param(&self) -> String {
        self.code().to_string()
    }
}

/// 动画播出季度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnimeSeason {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl AnimeSeason {
    pub const ALL: [AnimeSeason; 4] = [
        AnimeSeason::Winter,
        AnimeSeason::Spring,
        AnimeSeason::Summer,
        AnimeSeason::Fall,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnimeSeason::Winter => "WINTER",
            AnimeSeason::Spring => "SPRING",
            AnimeSeason::Summer => "SUMMER",
            AnimeSeason::Fall => "FALL",
        }
    }
}

impl FilterValue for AnimeSeason {
    fn from_param(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|season| season.as_str() == raw)
    }

    fn to_param(&self) -> String {
        self.as_str().to_string()
    }
}

/// 动画格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnimeFormat {
    Tv,
    TvShort,
    Movie,
    Special,
    Ova,
    Ona,
    Music,
}

impl AnimeFormat {
    pub const ALL: [AnimeFormat; 7] = [
        AnimeFormat::Tv,
        AnimeFormat::TvShort,
        AnimeFormat::Movie,
        AnimeFormat::Special,
        AnimeFormat::Ova,
        AnimeFormat::Ona,
        AnimeFormat::Music,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnimeFormat::Tv => "TV",
            AnimeFormat::TvShort => "TV_SHORT",
            AnimeFormat::Movie => "MOVIE",
            AnimeFormat::Special => "SPECIAL",
            AnimeFormat::Ova => "OVA",
            AnimeFormat::Ona => "ONA",
            AnimeFormat::Music => "MUSIC",
        }
    }
}

impl FilterValue for AnimeFormat {
    fn from_param(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.as_str() == raw)
    }

    fn to_param(&self) -> String {
        self.as_str().to_string()
    }
}

/// 动画播出状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnimeStatus {
    Releasing,
    Finished,
    NotYetReleased,
    Cancelled,
    Hiatus,
}

impl AnimeStatus {
    pub const ALL: [AnimeStatus; 5] = [
        AnimeStatus::Releasing,
        AnimeStatus::Finished,
        AnimeStatus::NotYetReleased,
        AnimeStatus::Cancelled,
        AnimeStatus::Hiatus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnimeStatus::Releasing => "RELEASING",
            AnimeStatus::Finished => "FINISHED",
            AnimeStatus::NotYetReleased => "NOT_YET_RELEASED",
            AnimeStatus::Cancelled => "CANCELLED",
            AnimeStatus::Hiatus => "HIATUS",
        }
    }
}

impl FilterValue for AnimeStatus {
    fn from_param(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == raw)
    }

    fn to_param(&self) -> String {
        self.as_str().to_string()
    }
}

/// 电影 / 剧集筛选条件（TMDB discover 参数）
///
/// `status` 只对剧集生效，电影忽略该字段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TmdbFilter {
    pub genre_ids: SelectionSet,
    pub original_language: Choice<String>,
    pub status: Choice<TvStatus>,
    pub minimum_vote_count: u32,
    pub user_score: Bounds<f64>,
    pub runtime: Bounds<u32>,
}

impl Default for TmdbFilter {
    fn default() -> Self {
        Self {
            genre_ids: SelectionSet::new(),
            original_language: Choice::All,
            status: Choice::All,
            minimum_vote_count: DEFAULT_MINIMUM_VOTE_COUNT,
            user_score: Bounds::new(USER_SCORE_DOMAIN.min, USER_SCORE_DOMAIN.max),
            runtime: Bounds::new(RUNTIME_DOMAIN.min, RUNTIME_DOMAIN.max),
        }
    }
}

/// 动画筛选条件（AniList 参数）
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimeFilter {
    pub genres: SelectionSet,
    pub year: Choice<u16>,
    pub season: Choice<AnimeSeason>,
    pub format: Choice<AnimeFormat>,
    pub airing_status: Choice<AnimeStatus>,
    pub title_query: String,
}

/// 一次筛选面板会话中的完整筛选状态
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "media_kind", rename_all = "lowercase")]
pub enum FilterSelection {
    Movie(TmdbFilter),
    Tv(TmdbFilter),
    Anime(AnimeFilter),
}

impl FilterSelection {
    /// 指定类别的全默认筛选状态
    pub fn default_for(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Movie => FilterSelection::Movie(TmdbFilter::default()),
            MediaKind::Tv => FilterSelection::Tv(TmdbFilter::default()),
            MediaKind::Anime => FilterSelection::Anime(AnimeFilter::default()),
        }
    }

    pub fn kind(&self) -> MediaKind {
        match self {
            FilterSelection::Movie(_) => MediaKind::Movie,
            FilterSelection::Tv(_) => MediaKind::Tv,
            FilterSelection::Anime(_) => MediaKind::Anime,
        }
    }

    /// 多选字段的可变引用；字段不属于当前类别时返回 None
    pub fn members_mut(&mut self, field: MultiSelectField) -> Option<&mut SelectionSet> {
        match (self, field) {
            (FilterSelection::Movie(filter), MultiSelectField::GenreIds)
            | (FilterSelection::Tv(filter), MultiSelectField::GenreIds) => Some(&mut filter.genre_ids),
            (FilterSelection::Anime(filter), MultiSelectField::Genres) => Some(&mut filter.genres),
            _ => None,
        }
    }
}

/// 可切换成员的多选字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiSelectField {
    /// 电影 / 剧集的类型 ID
    GenreIds,
    /// 动画的类型名称
    Genres,
}
