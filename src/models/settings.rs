// 用户设置注册表
//
// 所有设置项集中声明在 `settings_registry!` 中，每一项包括：
// - 字段名与类型
// - 默认值
// - 枚举键 `SettingKey`
// - 浏览器端存储键（兼容旧版 localStorage 键名）
// - 持久化范围（会话 / 持久）
//
// 新增设置项只需在宏调用中加一行，结构体、补丁、键列表会一起生成

use serde::{Deserialize, Serialize};

/// 持久化范围
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersistenceScope {
    /// 仅在当前进程内有效，重启后恢复默认值
    Session,
    /// 写入设置文件
    Durable,
}

/// 侧边栏样式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SidebarStyleMode {
    RoundedAll,
    RoundedTop,
    RoundedNone,
}

/// 列表展示方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListViewType {
    Card,
    Table,
}

/// 列表加载方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListLoadingType {
    Pagination,
    InfiniteScroll,
}

/// 设置项描述（用于 API 输出）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingDescriptor {
    pub key: SettingKey,
    pub storage_key: &'static str,
    pub scope: PersistenceScope,
    pub default: serde_json::Value,
}

macro_rules! settings_registry {
    (
        $(
            $(#[$doc:meta])*
            $field:ident : $ty:ty = $default:expr, $variant:ident, $storage:literal, $scope:ident;
        )*
    ) => {
        /// 全部用户设置
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct Settings {
            $(
                $(#[$doc])*
                pub $field: $ty,
            )*
        }

        impl Default for Settings {
            fn default() -> Self {
                Self {
                    $( $field: $default, )*
                }
            }
        }

        /// 设置项键（封闭集合）
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum SettingKey {
            $( $variant, )*
        }

        impl SettingKey {
            pub const ALL: &'static [SettingKey] = &[ $( SettingKey::$variant, )* ];

            /// 浏览器端 localStorage 键名
            pub fn storage_key(&self) -> &'static str {
                match self {
                    $( SettingKey::$variant => $storage, )*
                }
            }

            pub fn scope(&self) -> PersistenceScope {
                match self {
                    $( SettingKey::$variant => PersistenceScope::$scope, )*
                }
            }

            pub fn field_name(&self) -> &'static str {
                match self {
                    $( SettingKey::$variant => stringify!($field), )*
                }
            }

            pub fn default_value(&self) -> serde_json::Value {
                let defaults = Settings::default();
                match self {
                    $(
                        SettingKey::$variant => serde_json::to_value(&defaults.$field)
                            .unwrap_or(serde_json::Value::Null),
                    )*
                }
            }

            pub fn descriptor(&self) -> SettingDescriptor {
                SettingDescriptor {
                    key: *self,
                    storage_key: self.storage_key(),
                    scope: self.scope(),
                    default: self.default_value(),
                }
            }
        }

        /// 部分更新；未提供的字段保持不变
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(default, deny_unknown_fields)]
        pub struct SettingsPatch {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl SettingsPatch {
            /// 应用到设置上，返回实际发生变化的键
            pub fn apply(&self, settings: &mut Settings) -> Vec<SettingKey> {
                let mut changed = Vec::new();
                $(
                    if let Some(value) = &self.$field {
                        if settings.$field != *value {
                            settings.$field = value.clone();
                            changed.push(SettingKey::$variant);
                        }
                    }
                )*
                changed
            }
        }

        impl Settings {
            /// 会话级设置恢复为默认值后的副本，用于写盘
            pub fn durable_snapshot(&self) -> Settings {
                let defaults = Settings::default();
                Settings {
                    $(
                        $field: match SettingKey::$variant.scope() {
                            PersistenceScope::Durable => self.$field.clone(),
                            PersistenceScope::Session => defaults.$field,
                        },
                    )*
                }
            }
        }
    };
}

settings_registry! {
    // 字幕
    subtitle_font_color: String = "White".to_string(),
        SubtitleFontColor, "sora-settings_subtitle_font-color", Durable;
    subtitle_font_size: String = "100%".to_string(),
        SubtitleFontSize, "sora-settings_subtitle_font-size", Durable;
    subtitle_background_color: String = "Black".to_string(),
        SubtitleBackgroundColor, "sora-settings_subtitle_background-color", Durable;
    subtitle_background_opacity: String = "0%".to_string(),
        SubtitleBackgroundOpacity, "sora-settings_subtitle_background-opacity", Durable;
    subtitle_window_color: String = "Black".to_string(),
        SubtitleWindowColor, "sora-settings_subtitle_window-color", Durable;
    subtitle_window_opacity: String = "0%".to_string(),
        SubtitleWindowOpacity, "sora-settings_subtitle_window-opacity", Durable;
    subtitle_text_effects: String = "Outline".to_string(),
        SubtitleTextEffects, "sora-settings_subtitle_text-effect", Durable;
    subtitle_auto_show: bool = false,
        SubtitleAutoShow, "sora-settings_subtitle_auto-show", Durable;
    subtitle_auto_switch: bool = true,
        SubtitleAutoSwitch, "sora-settings_subtitle_auto-switch", Durable;

    // 实验功能
    mute_trailer: bool = true,
        MuteTrailer, "sora-settings_experiments_mute-trailer", Session;
    play_trailer: bool = false,
        PlayTrailer, "sora-settings_experiments_play-trailer", Session;

    // 播放器
    player_auto_size: bool = false,
        PlayerAutoSize, "sora-settings_player_auto-size", Durable;
    player_pic_in_pic: bool = true,
        PlayerPicInPic, "sora-settings_player_pic-in-pic", Durable;
    player_mute: bool = false,
        PlayerMute, "sora-settings_player_mute", Durable;
    player_auto_play: bool = false,
        PlayerAutoPlay, "sora-settings_player_auto-play", Durable;
    player_auto_mini: bool = false,
        PlayerAutoMini, "sora-settings_player_auto-mini", Durable;
    player_loop: bool = false,
        PlayerLoop, "sora-settings_player_loop", Durable;
    player_screenshot: bool = true,
        PlayerScreenshot, "sora-settings_player_screenshot", Durable;
    player_mini_progressbar: bool = true,
        PlayerMiniProgressbar, "sora-settings_player_mini-progressbar", Durable;
    player_auto_playback: bool = true,
        PlayerAutoPlayback, "sora-settings_player_auto-playback", Durable;
    player_auto_play_next_episode: bool = true,
        PlayerAutoPlayNextEpisode, "sora-settings_player_auto-play-next-episode", Durable;
    player_show_skip_op_ed_button: bool = true,
        PlayerShowSkipOpEdButton, "sora-settings_player_show-skip-op-ed-button", Durable;
    player_auto_skip_op_ed: bool = false,
        PlayerAutoSkipOpEd, "sora-settings_player_auto-skip-op-ed", Durable;
    player_fast_forward: bool = true,
        PlayerFastForward, "sora-settings_player_fast-forward", Durable;

    // 布局
    sidebar_style_mode: SidebarStyleMode = SidebarStyleMode::RoundedAll,
        SidebarStyleMode, "sora-settings_layout_sidebar-style-mode", Durable;
    sidebar_mini_mode: bool = false,
        SidebarMiniMode, "sora-settings_layout_sidebar-mini-mode", Session;
    sidebar_hover_mode: bool = false,
        SidebarHoverMode, "sora-settings_layout_sidebar-hover-mode", Session;
    sidebar_boxed_mode: bool = false,
        SidebarBoxedMode, "sora-settings_layout_sidebar-boxed-mode", Session;
    sidebar_sheet_mode: bool = false,
        SidebarSheetMode, "sora-settings_layout_sidebar-sheet-mode", Session;
    list_view: ListViewType = ListViewType::Card,
        ListView, "sora-settings_layout_list-view", Session;
    list_loading_type: ListLoadingType = ListLoadingType::Pagination,
        ListLoadingType, "sora-settings_layout_list-loading-type", Session;
}
