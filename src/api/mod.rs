pub mod discover;
pub mod error;
pub mod extract;
pub mod health;
pub mod history;
pub mod response;
pub mod settings;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::models::YearSource;
use crate::services::SettingsStore;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<SettingsStore>,
    pub year_source: Arc<dyn YearSource>,
}

impl AppState {
    pub fn new(settings: SettingsStore, year_source: impl YearSource + 'static) -> Self {
        Self {
            settings: Arc::new(settings),
            year_source: Arc::new(year_source),
        }
    }

    pub fn current_year(&self) -> u16 {
        self.year_source.current_year()
    }
}

/// 构建全部路由
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "Media Discovery Backend API v1.0" }))
        // Health
        .route("/api/health", get(health::health_check))
        // Discover filters
        .route(
            "/api/discover/:kind/filters",
            get(discover::decode_filters).post(discover::encode_filters),
        )
        .route("/api/discover/:kind/filters/reset", get(discover::reset_filters))
        .route("/api/discover/:kind/filters/toggle", post(discover::toggle_filter_member))
        .route("/api/discover/:kind/options", get(discover::get_filter_options))
        // Settings
        .route(
            "/api/settings",
            get(settings::get_settings).put(settings::update_settings),
        )
        .route("/api/settings/reset", post(settings::reset_settings))
        .route("/api/settings/keys", get(settings::list_setting_keys))
        // Watch history
        .route("/api/history/filters", get(history::decode_history_filters))
        .route("/api/pagination", get(history::get_page_window))
        .fallback(health::not_found)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
