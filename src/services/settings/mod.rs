// 设置模块 - 用户设置的持久化管理
//
// 本模块提供：
// - 从 JSON 文件加载设置
// - 部分更新与重置
// - 按持久化范围决定是否写盘

pub mod error;
pub mod store;

pub use error::SettingsError;
pub use store::{SettingsStore, SettingsUpdate};
