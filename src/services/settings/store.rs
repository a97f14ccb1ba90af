// 设置存储 - 管理用户设置的读写和更新
//
// 持久设置写入 JSON 文件；会话设置只保存在内存中，
// 写盘时以默认值代替，重启后恢复默认

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::RwLock;

use super::SettingsError;
use crate::models::{PersistenceScope, SettingKey, Settings, SettingsPatch};

/// 一次更新的结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingsUpdate {
    pub settings: Settings,
    pub changed: Vec<SettingKey>,
    /// 是否写入了设置文件
    pub persisted: bool,
}

/// 设置存储
///
/// 使用 Arc<RwLock> 保证线程安全
pub struct SettingsStore {
    /// 设置文件路径
    settings_path: PathBuf,

    settings: Arc<RwLock<Settings>>,
}

impl SettingsStore {
    /// 默认设置文件路径
    pub const DEFAULT_SETTINGS_PATH: &'static str = "settings.json";

    /// 从设置文件加载
    ///
    /// # 行为
    /// - 文件不存在：使用默认设置并创建文件
    /// - 文件损坏：备份为 `*.json.backup` 后使用默认设置
    /// - 文件中缺失的字段取默认值，会话级字段一律取默认值
    pub async fn load(settings_path: Option<PathBuf>) -> Result<Self, SettingsError> {
        let settings_path =
            settings_path.unwrap_or_else(|| PathBuf::from(Self::DEFAULT_SETTINGS_PATH));

        let settings = if settings_path.exists() {
            match fs::read_to_string(&settings_path).await {
                Ok(content) => match serde_json::from_str::<Settings>(&content) {
                    Ok(settings) => {
                        tracing::info!("成功加载用户设置: {:?}", settings_path);
                        settings.durable_snapshot()
                    }
                    Err(e) => {
                        tracing::warn!("设置文件损坏，使用默认设置: {}", e);
                        Self::backup_corrupted_settings(&settings_path).await;
                        Settings::default()
                    }
                },
                Err(e) => {
                    tracing::warn!("读取设置文件失败，使用默认设置: {}", e);
                    Settings::default()
                }
            }
        } else {
            tracing::info!("设置文件不存在，使用默认设置");
            Settings::default()
        };

        let store = Self {
            settings_path,
            settings: Arc::new(RwLock::new(settings)),
        };

        if !store.settings_path.exists() {
            store.save().await?;
        }

        Ok(store)
    }

    /// 保存设置到文件（仅持久字段）
    pub async fn save(&self) -> Result<(), SettingsError> {
        let snapshot = self.settings.read().await.durable_snapshot();
        let json = serde_json::to_string_pretty(&snapshot)?;

        if let Some(parent) = self.settings_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).await.map_err(|e| {
                    SettingsError::Config(format!("创建设置目录失败: {}", e))
                })?;
            }
        }

        fs::write(&self.settings_path, json).await.map_err(|e| {
            SettingsError::Config(format!("写入设置文件失败: {}", e))
        })?;

        tracing::debug!("成功保存用户设置: {:?}", self.settings_path);
        Ok(())
    }

    /// 获取当前设置（克隆）
    pub async fn get(&self) -> Settings {
        self.settings.read().await.clone()
    }

    /// 部分更新
    ///
    /// 只有持久字段发生变化时才写盘
    pub async fn update(&self, patch: &SettingsPatch) -> Result<SettingsUpdate, SettingsError> {
        let mut settings = self.settings.write().await;
        let changed = patch.apply(&mut settings);
        let snapshot = settings.clone();

        // 释放写锁
        drop(settings);

        let persisted = changed
            .iter()
            .any(|key| key.scope() == PersistenceScope::Durable);
        if persisted {
            self.save().await?;
        }

        if !changed.is_empty() {
            tracing::info!("更新用户设置: {:?}", changed);
        }

        Ok(SettingsUpdate {
            settings: snapshot,
            changed,
            persisted,
        })
    }

    /// 全部恢复默认值并写盘
    pub async fn reset(&self) -> Result<Settings, SettingsError> {
        *self.settings.write().await = Settings::default();
        self.save().await?;

        tracing::info!("用户设置已重置");
        Ok(Settings::default())
    }

    pub fn path(&self) -> &Path {
        &self.settings_path
    }

    /// 备份损坏的设置文件；备份失败不影响主流程
    async fn backup_corrupted_settings(settings_path: &Path) {
        let backup_path = settings_path.with_extension("json.backup");

        match fs::rename(settings_path, &backup_path).await {
            Ok(_) => tracing::info!("已备份损坏的设置文件到: {:?}", backup_path),
            Err(e) => tracing::warn!("备份设置文件失败: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ListViewType;
    use tempfile::TempDir;

    /// 创建临时设置文件路径
    fn create_temp_settings_path() -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let settings_path = temp_dir.path().join("test_settings.json");
        (temp_dir, settings_path)
    }

    #[tokio::test]
    async fn test_load_with_nonexistent_file() {
        let (_temp_dir, settings_path) = create_temp_settings_path();

        let store = SettingsStore::load(Some(settings_path.clone())).await.unwrap();

        assert_eq!(store.get().await, Settings::default());
        // 应该创建设置文件
        assert!(settings_path.exists());
    }

    #[tokio::test]
    async fn test_durable_update_is_persisted() {
        let (_temp_dir, settings_path) = create_temp_settings_path();
        let store = SettingsStore::load(Some(settings_path.clone())).await.unwrap();

        let patch = SettingsPatch {
            player_loop: Some(true),
            subtitle_font_size: Some("150%".to_string()),
            ..SettingsPatch::default()
        };
        let update = store.update(&patch).await.unwrap();
        assert!(update.persisted);
        assert_eq!(update.changed.len(), 2);

        // 重新加载
        let reloaded = SettingsStore::load(Some(settings_path)).await.unwrap();
        let settings = reloaded.get().await;
        assert!(settings.player_loop);
        assert_eq!(settings.subtitle_font_size, "150%");
    }

    #[tokio::test]
    async fn test_session_update_is_not_persisted() {
        let (_temp_dir, settings_path) = create_temp_settings_path();
        let store = SettingsStore::load(Some(settings_path.clone())).await.unwrap();

        let patch = SettingsPatch {
            list_view: Some(ListViewType::Table),
            ..SettingsPatch::default()
        };
        let update = store.update(&patch).await.unwrap();
        assert!(!update.persisted);
        assert_eq!(store.get().await.list_view, ListViewType::Table);

        let reloaded = SettingsStore::load(Some(settings_path)).await.unwrap();
        assert_eq!(reloaded.get().await.list_view, ListViewType::Card);
    }

    #[tokio::test]
    async fn test_session_fields_in_file_are_ignored() {
        let (_temp_dir, settings_path) = create_temp_settings_path();
        std::fs::write(
            &settings_path,
            r#"{"sidebar_mini_mode": true, "player_mute": true}"#,
        )
        .unwrap();

        let store = SettingsStore::load(Some(settings_path)).await.unwrap();
        let settings = store.get().await;
        assert!(!settings.sidebar_mini_mode);
        assert!(settings.player_mute);
    }

    #[tokio::test]
    async fn test_corrupted_file_is_backed_up() {
        let (temp_dir, settings_path) = create_temp_settings_path();
        std::fs::write(&settings_path, "{ not json").unwrap();

        let store = SettingsStore::load(Some(settings_path.clone())).await.unwrap();
        assert_eq!(store.get().await, Settings::default());

        let backup_path = temp_dir.path().join("test_settings.json.backup");
        assert!(backup_path.exists());
        // 默认设置重新写入
        assert!(settings_path.exists());
    }

    #[tokio::test]
    async fn test_noop_update() {
        let (_temp_dir, settings_path) = create_temp_settings_path();
        let store = SettingsStore::load(Some(settings_path)).await.unwrap();

        let update = store.update(&SettingsPatch::default()).await.unwrap();
        assert!(update.changed.is_empty());
        assert!(!update.persisted);
    }

    #[tokio::test]
    async fn test_reset() {
        let (_temp_dir, settings_path) = create_temp_settings_path();
        let store = SettingsStore::load(Some(settings_path.clone())).await.unwrap();

        let patch = SettingsPatch {
            player_auto_play: Some(true),
            sidebar_sheet_mode: Some(true),
            ..SettingsPatch::default()
        };
        store.update(&patch).await.unwrap();

        let settings = store.reset().await.unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(store.get().await, Settings::default());

        let reloaded = SettingsStore::load(Some(settings_path)).await.unwrap();
        assert!(!reloaded.get().await.player_auto_play);
    }
}
