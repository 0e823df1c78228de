//! LingoDrill 前端应用
//!
//! 采用 Context-Driven 的架构：
//! - `web::router`: 路由服务（History API + 核心库守卫）
//! - `web::toast`: 全局提示（请求管道的通知出口）
//! - `auth`: 共享 API 客户端与登录流程
//! - `components`: UI 组件层

mod auth;
mod components {
    pub mod admin;
    pub mod article_practice;
    pub mod login;
    pub mod menu;
    mod pager;
    pub mod word_practice;
}

use crate::auth::provide_auth;
use crate::components::admin::{AdminPage, AdminTab};
use crate::components::article_practice::ArticlePracticePage;
use crate::components::login::LoginPage;
use crate::components::menu::MenuPage;
use crate::components::word_practice::WordPracticePage;

use leptos::prelude::*;
use lingodrill::route::{RouteMatch, RouteName};

// 浏览器原生 Web API 封装
pub(crate) mod web {
    mod http;
    pub mod router;
    pub mod storage;
    pub mod toast;

    pub use http::FetchHttpClient;
}

use web::router::{RouterOutlet, provide_router};
use web::toast::{Toasts, provide_toasts};

/// 路由匹配函数
///
/// 根据匹配到的命名路由返回对应的视图组件。
fn route_matcher(route: RouteMatch) -> AnyView {
    match route.name() {
        Some(RouteName::Login) => view! { <LoginPage /> }.into_any(),
        Some(RouteName::Menu) => view! { <MenuPage /> }.into_any(),
        Some(RouteName::WordPractice) => view! { <WordPracticePage /> }.into_any(),
        Some(RouteName::ArticlePractice) => view! { <ArticlePracticePage /> }.into_any(),
        Some(RouteName::AdminDashboard | RouteName::AdminUsers) => {
            view! { <AdminPage tab=AdminTab::Users /> }.into_any()
        }
        Some(RouteName::AdminWords) => view! { <AdminPage tab=AdminTab::Words /> }.into_any(),
        Some(RouteName::AdminArticles) => {
            view! { <AdminPage tab=AdminTab::Articles /> }.into_any()
        }
        None => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"页面未找到"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 提示服务：请求管道的错误通知出口
    let toasts = provide_toasts();

    // 2. 路由服务：初始路由即经过守卫
    let router = provide_router();

    // 3. 共享 API 客户端（401 时通过路由服务跳转登录页）
    provide_auth(router, toasts);

    view! {
        <Toasts />
        <RouterOutlet matcher=route_matcher />
    }
}
