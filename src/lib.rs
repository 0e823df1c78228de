//! LingoDrill 客户端核心
//!
//! 与平台无关的客户端逻辑，浏览器前端与原生测试共用：
//! - `session`: 会话状态访问器（可注入的键值存储）
//! - `route` / `guard`: 静态路由表与导航守卫
//! - `request` / `client`: HTTP 传输抽象与拦截器管道
//! - `api` / `auth`: 端点门面与登录流程

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod guard;
pub mod notify;
pub mod request;
pub mod route;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use lingodrill_shared as shared;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, NavigationError};
pub use guard::{Navigation, Navigator, before_each, resolve_navigation};
pub use notify::{NoticeLevel, Notifier};
pub use route::{RouteMatch, RouteName, match_path};
pub use session::{Session, SessionSnapshot, SessionStore};
