//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 实现了"请求 -> 守卫 -> 处理 -> 加载"的导航流程，守卫判定来自核心库。

use leptos::prelude::*;
use lingodrill::guard::{Navigator, resolve_navigation};
use lingodrill::route::{RouteMatch, match_path};
use wasm_bindgen::prelude::*;

use super::storage::browser_session;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（内部工具函数，用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 每次导航都从 LocalStorage 读取最新的会话状态。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<RouteMatch>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<RouteMatch>,
}

impl RouterService {
    fn new() -> Self {
        // 初始路由同样经过守卫
        let (current_route, set_route) = signal(match_path(&current_path()));
        let router = Self {
            current_route,
            set_route,
        };
        router.navigate_to(&current_path(), false);
        router
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<RouteMatch> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    pub fn navigate(&self, path: &str) {
        self.navigate_to(path, true);
    }

    /// # Arguments
    /// * `path` - 目标路径
    /// * `use_push` - true 使用 pushState, false 使用 replaceState
    fn navigate_to(&self, path: &str, use_push: bool) {
        let resolved = match resolve_navigation(path, &browser_session()) {
            Ok(resolved) => resolved,
            Err(e) => {
                log::error!("[Router] {e}");
                return;
            }
        };

        if resolved.redirected {
            log::info!("[Router] {} redirected to {}", path, resolved.route);
        }

        let target = resolved.route.path().to_string();
        if use_push {
            push_history_state(&target);
        } else {
            replace_history_state(&target);
        }
        self.set_route.set(resolved.route);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let router = *self;

        // popstate 时也执行守卫逻辑
        let closure = Closure::<dyn Fn()>::new(move || {
            router.navigate_to(&current_path(), false);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }
}

impl Navigator for RouterService {
    fn push(&self, path: &str) {
        self.navigate(path);
    }
}

/// 创建路由服务并提供到 Context
pub fn provide_router() -> RouterService {
    let router = RouterService::new();
    router.init_popstate_listener();
    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(RouteMatch) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
