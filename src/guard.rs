//! 导航守卫
//!
//! **核心守卫逻辑**：根据目标路由的匹配链元数据与会话快照，
//! 决定放行还是重定向。守卫只读取会话，不修改会话。

use crate::error::NavigationError;
use crate::route::{LOGIN_PATH, MENU_PATH, ROUTES, RouteMatch, RouteRecord, match_path_in};
use crate::session::{Session, SessionSnapshot};

/// 一次导航最多允许的守卫重定向次数
pub const MAX_REDIRECTS: usize = 8;

/// 守卫判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect(&'static str),
}

/// 执行导航的能力，由路由服务实现
pub trait Navigator {
    fn push(&self, path: &str);
}

/// 每次路由切换前调用，按顺序判定，先命中者生效
pub fn before_each(to: &RouteMatch, session: SessionSnapshot) -> Navigation {
    if to.requires_auth() {
        if !session.has_token {
            return Navigation::Redirect(LOGIN_PATH);
        }
        // requires_admin 与 requires_auth 分别判定，不假设二者的蕴含关系
        if to.requires_admin() && !session.is_admin {
            return Navigation::Redirect(MENU_PATH);
        }
        return Navigation::Proceed;
    }

    if to.path() == LOGIN_PATH && session.has_token {
        return Navigation::Redirect(MENU_PATH);
    }
    Navigation::Proceed
}

/// 导航解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// 最终落地的路由
    pub route: RouteMatch,
    /// 是否经过守卫重定向
    pub redirected: bool,
}

/// 解析一次导航：重定向目标同样要经过守卫
///
/// 每一跳都重新读取会话快照。
pub fn resolve_navigation(path: &str, session: &Session) -> Result<Resolved, NavigationError> {
    resolve_navigation_in(ROUTES, path, session)
}

/// 在指定路由表上解析导航
pub fn resolve_navigation_in(
    routes: &'static [RouteRecord],
    path: &str,
    session: &Session,
) -> Result<Resolved, NavigationError> {
    let mut route = match_path_in(routes, path);
    let mut redirected = false;

    for _ in 0..MAX_REDIRECTS {
        match before_each(&route, session.snapshot()) {
            Navigation::Proceed => return Ok(Resolved { route, redirected }),
            Navigation::Redirect(target) => {
                log::info!("[Guard] {} -> {}", route, target);
                route = match_path_in(routes, target);
                redirected = true;
            }
        }
    }

    Err(NavigationError::RedirectLoop {
        path: path.to_string(),
        hops: MAX_REDIRECTS,
    })
}
