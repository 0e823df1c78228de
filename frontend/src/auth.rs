//! 认证模块
//!
//! 组装共享的 API 客户端，并把登录/注销流程接到路由服务上。
//! 会话状态始终从 LocalStorage 读取，这里不保存任何副本。

use std::rc::Rc;

use leptos::prelude::*;
use lingodrill::ClientConfig;
use lingodrill::api::ApiClient;
use lingodrill::client::Pipeline;
use lingodrill::error::ClientResult;
use lingodrill::route::{LOGIN_PATH, MENU_PATH};
use lingodrill_shared::LoginResponse;

use crate::web::router::RouterService;
use crate::web::storage::browser_session;
use crate::web::toast::ToastService;
use crate::web::FetchHttpClient;

/// 认证上下文
///
/// API 客户端内部持有 `Rc`，因此放在本地存储的 StoredValue 中共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    api: StoredValue<ApiClient, LocalStorage>,
    router: RouterService,
}

impl AuthContext {
    /// 创建上下文：fetch 传输 + 标准拦截器链
    pub fn new(router: RouterService, toasts: ToastService) -> Self {
        let config = ClientConfig::default();
        let transport = Rc::new(FetchHttpClient::new(config.timeout()));
        let pipeline = Pipeline::standard(
            transport,
            browser_session(),
            Rc::new(toasts),
            Rc::new(router),
        );
        let api = ApiClient::new(config, pipeline);

        Self {
            api: StoredValue::new_local(api),
            router,
        }
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }
}

pub fn provide_auth(router: RouterService, toasts: ToastService) -> AuthContext {
    let ctx = AuthContext::new(router, toasts);
    provide_context(ctx);
    ctx
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 登录，成功后进入主菜单
pub async fn login(ctx: AuthContext, username: String, password: String) -> ClientResult<LoginResponse> {
    let api = ctx.api();
    let resp = lingodrill::auth::login(&api, &browser_session(), &username, &password).await?;
    ctx.router.navigate(MENU_PATH);
    Ok(resp)
}

pub async fn register(ctx: AuthContext, username: String, password: String) -> ClientResult<()> {
    let api = ctx.api();
    lingodrill::auth::register(&api, &username, &password).await?;
    Ok(())
}

/// 注销并回到登录页
pub fn logout(ctx: AuthContext) {
    lingodrill::auth::logout(&browser_session());
    ctx.router.navigate(LOGIN_PATH);
}
