// 数据模型
//
// - filter: 发现页筛选条件
// - query: 查询参数集合
// - catalog: 筛选面板的可选项目录
// - validation: 提交时的校验
// - settings: 用户设置注册表
// - history: 观看历史筛选条件

pub mod catalog;
pub mod filter;
pub mod history;
pub mod query;
pub mod settings;
pub mod validation;

pub use catalog::{
    anime_years, FilterCatalog, FixedYear, OptionItem, SliderDomain, SystemYear, YearSource,
    ANIME_YEAR_FLOOR,
};
pub use filter::{
    AnimeFilter, AnimeFormat, AnimeSeason, AnimeStatus, Bounds, Choice, FilterSelection,
    FilterValue, MediaKind, MultiSelectField, SelectionSet, TmdbFilter, TvStatus, ALL,
};
pub use history::HistoryFilter;
pub use query::QueryParams;
pub use settings::{
    ListLoadingType, ListViewType, PersistenceScope, SettingDescriptor, SettingKey, Settings,
    SettingsPatch, SidebarStyleMode,
};
pub use validation::{FilterValidator, ValidationError};
