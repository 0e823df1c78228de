//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的静态路由表及其访问元数据。

use std::fmt::Display;

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const MENU_PATH: &str = "/menu";

/// 静态重定向最多跟随的次数
const MAX_STATIC_REDIRECTS: usize = 4;

/// 命名路由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteName {
    Login,
    Menu,
    WordPractice,
    ArticlePractice,
    AdminDashboard,
    AdminUsers,
    AdminWords,
    AdminArticles,
}

/// 路由访问元数据
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub requires_admin: bool,
}

impl RouteMeta {
    pub const PUBLIC: RouteMeta = RouteMeta {
        requires_auth: false,
        requires_admin: false,
    };
    pub const AUTH: RouteMeta = RouteMeta {
        requires_auth: true,
        requires_admin: false,
    };
    pub const ADMIN: RouteMeta = RouteMeta {
        requires_auth: true,
        requires_admin: true,
    };
}

/// 路由记录
///
/// 子记录的 `path` 为相对父记录的路径段。
#[derive(Debug, PartialEq, Eq)]
pub struct RouteRecord {
    pub path: &'static str,
    pub name: Option<RouteName>,
    pub meta: RouteMeta,
    pub redirect: Option<&'static str>,
    pub children: &'static [RouteRecord],
}

impl RouteRecord {
    const fn page(path: &'static str, name: RouteName, meta: RouteMeta) -> Self {
        Self {
            path,
            name: Some(name),
            meta,
            redirect: None,
            children: &[],
        }
    }
}

/// 应用路由表
pub static ROUTES: &[RouteRecord] = &[
    RouteRecord {
        path: ROOT_PATH,
        name: None,
        meta: RouteMeta::PUBLIC,
        redirect: Some(LOGIN_PATH),
        children: &[],
    },
    RouteRecord::page(LOGIN_PATH, RouteName::Login, RouteMeta::PUBLIC),
    RouteRecord::page(MENU_PATH, RouteName::Menu, RouteMeta::AUTH),
    RouteRecord::page("/word-practice", RouteName::WordPractice, RouteMeta::AUTH),
    RouteRecord::page(
        "/article-practice",
        RouteName::ArticlePractice,
        RouteMeta::AUTH,
    ),
    RouteRecord {
        path: "/admin",
        name: Some(RouteName::AdminDashboard),
        meta: RouteMeta::ADMIN,
        redirect: None,
        children: &[
            RouteRecord::page("users", RouteName::AdminUsers, RouteMeta::PUBLIC),
            RouteRecord::page("words", RouteName::AdminWords, RouteMeta::PUBLIC),
            RouteRecord::page("articles", RouteName::AdminArticles, RouteMeta::PUBLIC),
        ],
    },
];

/// 路径匹配结果
///
/// `matched` 是从父到子的整条匹配链，未知路径时为空。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    path: String,
    matched: Vec<&'static RouteRecord>,
}

impl RouteMatch {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn matched(&self) -> &[&'static RouteRecord] {
        &self.matched
    }

    pub fn name(&self) -> Option<RouteName> {
        self.matched.last().and_then(|record| record.name)
    }

    pub fn is_not_found(&self) -> bool {
        self.matched.is_empty()
    }

    /// 链上任一记录要求登录即视为要求登录
    pub fn requires_auth(&self) -> bool {
        self.matched.iter().any(|record| record.meta.requires_auth)
    }

    /// 链上任一记录要求管理员即视为要求管理员
    pub fn requires_admin(&self) -> bool {
        self.matched.iter().any(|record| record.meta.requires_admin)
    }
}

impl Display for RouteMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path)
    }
}

/// 去掉查询串、片段和末尾的 `/`
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        ROOT_PATH.to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

fn join(prefix: &str, segment: &str) -> String {
    if segment.starts_with('/') {
        segment.to_string()
    } else {
        format!("{}/{}", prefix.trim_end_matches('/'), segment)
    }
}

fn find(
    records: &'static [RouteRecord],
    prefix: &str,
    path: &str,
    chain: &mut Vec<&'static RouteRecord>,
) -> bool {
    for record in records {
        let full = join(prefix, record.path);
        if full == path {
            chain.push(record);
            return true;
        }
        if !record.children.is_empty() && path.starts_with(&format!("{full}/")) {
            chain.push(record);
            if find(record.children, &full, path, chain) {
                return true;
            }
            chain.pop();
        }
    }
    false
}

fn match_exact(routes: &'static [RouteRecord], path: &str) -> RouteMatch {
    let mut matched = Vec::new();
    find(routes, "", path, &mut matched);
    RouteMatch {
        path: path.to_string(),
        matched,
    }
}

/// 将 URL 路径解析为匹配链，并跟随路由表中的静态重定向
pub fn match_path(path: &str) -> RouteMatch {
    match_path_in(ROUTES, path)
}

/// 在指定路由表中匹配
pub fn match_path_in(routes: &'static [RouteRecord], path: &str) -> RouteMatch {
    let mut current = match_exact(routes, &normalize_path(path));
    for _ in 0..MAX_STATIC_REDIRECTS {
        let Some(target) = current.matched.last().and_then(|record| record.redirect) else {
            break;
        };
        current = match_exact(routes, target);
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_redirects_to_login() {
        let route = match_path("/");
        assert_eq!(route.path(), LOGIN_PATH);
        assert_eq!(route.name(), Some(RouteName::Login));
        assert_eq!(match_path("").path(), LOGIN_PATH);
    }

    #[test]
    fn practice_routes_require_auth_only() {
        for path in [MENU_PATH, "/word-practice", "/article-practice"] {
            let route = match_path(path);
            assert!(route.requires_auth(), "{path}");
            assert!(!route.requires_admin(), "{path}");
        }
    }

    #[test]
    fn admin_children_inherit_through_chain() {
        let route = match_path("/admin/words");
        assert_eq!(route.matched().len(), 2);
        assert_eq!(route.name(), Some(RouteName::AdminWords));
        assert!(!route.matched()[1].meta.requires_auth);
        assert!(route.requires_auth());
        assert!(route.requires_admin());
    }

    #[test]
    fn query_fragment_and_trailing_slash_are_ignored() {
        let route = match_path("/word-practice/?page=3#top");
        assert_eq!(route.path(), "/word-practice");
        assert_eq!(route.name(), Some(RouteName::WordPractice));
    }

    #[test]
    fn unknown_paths_have_empty_chain() {
        let route = match_path("/nowhere");
        assert!(route.is_not_found());
        assert!(!route.requires_auth());

        let route = match_path("/admin/unknown");
        assert!(route.is_not_found());
    }
}
