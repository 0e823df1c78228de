//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 实现会话存储接口，会话字段因此可以跨页面刷新保留。

use std::rc::Rc;

use lingodrill::session::{Session, SessionStore};

/// 浏览器 LocalStorage
///
/// 每次操作都重新获取 Storage 实例，不缓存任何值。
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    /// 获取 LocalStorage 实例
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStore for BrowserStorage {
    /// 获取存储的字符串值
    ///
    /// 键不存在或发生错误时返回 `None`
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    fn delete(&self, key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}

/// 基于 LocalStorage 的会话访问器
pub fn browser_session() -> Session {
    Session::new(Rc::new(BrowserStorage))
}
