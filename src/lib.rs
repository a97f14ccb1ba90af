// 媒体发现后端库
//
// 本库提供发现页的核心功能，包括：
// - 筛选状态与 URL 查询参数的双向映射
// - 筛选面板的可选项目录
// - 用户设置注册表与持久化
// - 分页与观看历史筛选
// - API 路由

pub mod api;
pub mod models;
pub mod services;
