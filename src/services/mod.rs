pub mod filter_mapper;
pub mod pagination;
pub mod settings;

pub use filter_mapper::FilterStateMapper;
pub use pagination::{
    page_window, total_pages, PageItem, PageRequest, HISTORY_PAGE_SIZE, MAX_PAGE_SIBLINGS,
    TMDB_MAX_PAGE,
};
pub use settings::{SettingsError, SettingsStore, SettingsUpdate};
