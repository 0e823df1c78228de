//! 会话状态模块
//!
//! 会话字段保存在可注入的键值存储中（浏览器下为 LocalStorage）。
//! 每次读取都直接访问存储，不在内存中缓存，
//! 以便守卫和请求拦截器总能看到登录流程或 401 处理写入的最新值。

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use lingodrill_shared::{KEY_IS_ADMIN, KEY_TOKEN, KEY_USER_ID, KEY_USERNAME, LoginResponse};

/// 键值存储接口
///
/// 与浏览器 LocalStorage 的语义保持一致：写入失败返回 `false`。
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> bool;
    fn delete(&self, key: &str) -> bool;
}

/// 内存存储，用于原生环境和测试
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }

    fn delete(&self, key: &str) -> bool {
        self.entries.borrow_mut().remove(key);
        true
    }
}

/// 某一时刻的认证状态快照，供守卫做纯判断
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSnapshot {
    pub has_token: bool,
    pub is_admin: bool,
}

/// 会话访问器
///
/// 写入方只有两类：登录流程（`establish`）与 401 处理（`expire`）。
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn SessionStore>,
}

impl Session {
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// 空字符串按未登录处理
    pub fn token(&self) -> Option<String> {
        self.store.get(KEY_TOKEN).filter(|t| !t.is_empty())
    }

    pub fn user_id(&self) -> Option<String> {
        self.store.get(KEY_USER_ID)
    }

    pub fn username(&self) -> Option<String> {
        self.store.get(KEY_USERNAME)
    }

    /// 只有值恰好为 `"true"` 才视为管理员
    pub fn is_admin(&self) -> bool {
        self.store.get(KEY_IS_ADMIN).as_deref() == Some("true")
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            has_token: self.token().is_some(),
            is_admin: self.is_admin(),
        }
    }

    /// 登录成功后写入全部会话字段
    pub fn establish(&self, login: &LoginResponse) {
        self.store.set(KEY_TOKEN, &login.token);
        self.store.set(KEY_USER_ID, &login.user_id.to_string());
        self.store.set(KEY_USERNAME, &login.username);
        if login.is_admin {
            self.store.set(KEY_IS_ADMIN, "true");
        } else {
            self.store.delete(KEY_IS_ADMIN);
        }
        log::info!("[Session] established for {}", login.username);
    }

    /// 登录过期：清除凭据（token、user_id、username）
    pub fn expire(&self) {
        self.store.delete(KEY_TOKEN);
        self.store.delete(KEY_USER_ID);
        self.store.delete(KEY_USERNAME);
    }

    /// 注销：清除全部会话字段
    pub fn clear(&self) {
        self.expire();
        self.store.delete(KEY_IS_ADMIN);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> (Rc<MemoryStore>, Session) {
        let store = Rc::new(MemoryStore::new());
        (store.clone(), Session::new(store))
    }

    fn login(is_admin: bool) -> LoginResponse {
        LoginResponse {
            token: "t-1".to_string(),
            user_id: 42,
            username: "wang".to_string(),
            is_admin,
        }
    }

    #[test]
    fn establish_writes_all_keys() {
        let (store, session) = session();
        session.establish(&login(true));

        assert_eq!(store.get(KEY_TOKEN).as_deref(), Some("t-1"));
        assert_eq!(store.get(KEY_USER_ID).as_deref(), Some("42"));
        assert_eq!(store.get(KEY_USERNAME).as_deref(), Some("wang"));
        assert_eq!(store.get(KEY_IS_ADMIN).as_deref(), Some("true"));
        assert_eq!(
            session.snapshot(),
            SessionSnapshot {
                has_token: true,
                is_admin: true
            }
        );
    }

    #[test]
    fn non_admin_login_removes_stale_admin_flag() {
        let (store, session) = session();
        store.set(KEY_IS_ADMIN, "true");
        session.establish(&login(false));
        assert_eq!(store.get(KEY_IS_ADMIN), None);
        assert!(!session.is_admin());
    }

    #[test]
    fn admin_flag_must_be_exactly_true() {
        let (store, session) = session();
        store.set(KEY_IS_ADMIN, "1");
        assert!(!session.is_admin());
        store.set(KEY_IS_ADMIN, "TRUE");
        assert!(!session.is_admin());
        store.set(KEY_IS_ADMIN, "true");
        assert!(session.is_admin());
    }

    #[test]
    fn empty_token_counts_as_absent() {
        let (store, session) = session();
        store.set(KEY_TOKEN, "");
        assert!(!session.snapshot().has_token);
    }

    #[test]
    fn expire_keeps_admin_flag_but_clear_removes_it() {
        let (store, session) = session();
        session.establish(&login(true));

        session.expire();
        assert_eq!(session.token(), None);
        assert_eq!(session.user_id(), None);
        assert_eq!(session.username(), None);
        assert_eq!(store.get(KEY_IS_ADMIN).as_deref(), Some("true"));

        session.clear();
        assert_eq!(store.get(KEY_IS_ADMIN), None);
    }

    #[test]
    fn reads_are_not_cached() {
        let (store, session) = session();
        assert!(!session.snapshot().has_token);
        store.set(KEY_TOKEN, "late");
        assert_eq!(session.token().as_deref(), Some("late"));
    }
}
