//! 端点门面
//!
//! 每个方法对应一次 REST 调用，不做重试、合并或缓存。

use std::rc::Rc;

use lingodrill_shared::protocol::{
    Ack, AdminListArticlesRequest, AdminListWordsRequest, ApiRequest, CreateArticleRequest,
    CreateWordRequest, DeleteArticleRequest, DeleteUserRequest, DeleteWordRequest,
    GetProgressRequest, ListArticlesRequest, ListUsersRequest, ListWordsRequest, LoginRequest,
    RegisterRequest, SaveProgressRequest, UpdateArticleRequest, UpdateWordRequest,
};
use lingodrill_shared::{
    Article, ArticlePayload, Credentials, LoginResponse, Page, Paginated, PracticeKind, Progress,
    User, Word, WordPayload,
};

use crate::client::Pipeline;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::request::HttpRequest;

/// 共享的 API 客户端，克隆开销很小
#[derive(Clone)]
pub struct ApiClient {
    config: ClientConfig,
    pipeline: Rc<Pipeline>,
}

impl ApiClient {
    pub fn new(config: ClientConfig, pipeline: Pipeline) -> Self {
        Self {
            config,
            pipeline: Rc::new(pipeline),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// 通过拦截器管道发送一个端点请求并解析响应
    pub async fn call<R: ApiRequest>(&self, req: &R) -> ClientResult<R::Response> {
        let http = match self.build(req) {
            Ok(http) => http,
            Err(err) => return Err(self.pipeline.reject(err)),
        };

        let resp = self.pipeline.execute(http).await?;
        // 2xx 但响应体无法解析同样算失败，需要经过响应拦截器给出提示
        resp.json::<R::Response>().map_err(|err| {
            log::error!("[Client] {} {}: {err}", R::METHOD, req.path());
            self.pipeline.reject(err)
        })
    }

    fn build<R: ApiRequest>(&self, req: &R) -> ClientResult<HttpRequest> {
        let http = HttpRequest::new(&self.config.url(&req.path()), R::METHOD);
        match req.body().map_err(ClientError::Encode)? {
            Some(body) => Ok(http
                .with_header("Content-Type", "application/json")
                .with_body(body)),
            None => Ok(http),
        }
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi { client: self }
    }

    pub fn practice(&self) -> PracticeApi<'_> {
        PracticeApi { client: self }
    }

    pub fn admin(&self) -> AdminApi<'_> {
        AdminApi { client: self }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ApiClient {
    /// 原生环境下的客户端
    ///
    /// 使用 reqwest 传输，后端地址取自 `LINGODRILL_API_URL`，通知写入日志。
    pub fn native(
        session: crate::session::Session,
        navigator: Rc<dyn crate::guard::Navigator>,
    ) -> ClientResult<Self> {
        let config = ClientConfig::from_env();
        let transport = Rc::new(crate::request::ReqwestHttpClient::new(config.timeout())?);
        let pipeline = Pipeline::standard(
            transport,
            session,
            Rc::new(crate::notify::LogNotifier),
            navigator,
        );
        log::info!("[Client] native client for {}", config.base_url());
        Ok(Self::new(config, pipeline))
    }
}

// =========================================================
// Auth
// =========================================================

pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl AuthApi<'_> {
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        self.client
            .call(&LoginRequest(Credentials::new(username, password)))
            .await
    }

    pub async fn register(&self, username: &str, password: &str) -> ClientResult<Ack> {
        self.client
            .call(&RegisterRequest(Credentials::new(username, password)))
            .await
    }
}

// =========================================================
// Practice
// =========================================================

pub struct PracticeApi<'a> {
    client: &'a ApiClient,
}

impl PracticeApi<'_> {
    pub async fn get_words(&self, page: impl Into<Page>) -> ClientResult<Paginated<Word>> {
        self.client
            .call(&ListWordsRequest { page: page.into() })
            .await
    }

    pub async fn get_articles(&self, page: impl Into<Page>) -> ClientResult<Paginated<Article>> {
        self.client
            .call(&ListArticlesRequest { page: page.into() })
            .await
    }

    pub async fn save_progress(&self, kind: PracticeKind, page: u32) -> ClientResult<Ack> {
        self.client
            .call(&SaveProgressRequest(Progress { kind, page }))
            .await
    }

    pub async fn get_progress(&self, kind: PracticeKind) -> ClientResult<Progress> {
        self.client.call(&GetProgressRequest { kind }).await
    }
}

// =========================================================
// Admin
// =========================================================

pub struct AdminApi<'a> {
    client: &'a ApiClient,
}

impl AdminApi<'_> {
    // --- 用户管理 ---

    pub async fn get_users(&self, page: impl Into<Page>) -> ClientResult<Paginated<User>> {
        self.client
            .call(&ListUsersRequest { page: page.into() })
            .await
    }

    pub async fn delete_user(&self, id: i64) -> ClientResult<Ack> {
        self.client.call(&DeleteUserRequest { id }).await
    }

    // --- 词语管理 ---

    pub async fn get_all_words(&self, page: impl Into<Page>) -> ClientResult<Paginated<Word>> {
        self.client
            .call(&AdminListWordsRequest { page: page.into() })
            .await
    }

    pub async fn add_word(&self, word: &str, pinyin: &str) -> ClientResult<Ack> {
        self.client
            .call(&CreateWordRequest(word_payload(word, pinyin)))
            .await
    }

    pub async fn update_word(&self, id: i64, word: &str, pinyin: &str) -> ClientResult<Ack> {
        self.client
            .call(&UpdateWordRequest {
                id,
                payload: word_payload(word, pinyin),
            })
            .await
    }

    pub async fn delete_word(&self, id: i64) -> ClientResult<Ack> {
        self.client.call(&DeleteWordRequest { id }).await
    }

    // --- 文章管理 ---

    pub async fn get_all_articles(
        &self,
        page: impl Into<Page>,
    ) -> ClientResult<Paginated<Article>> {
        self.client
            .call(&AdminListArticlesRequest { page: page.into() })
            .await
    }

    pub async fn add_article(&self, title: &str, content: &str, pinyin: &str) -> ClientResult<Ack> {
        self.client
            .call(&CreateArticleRequest(article_payload(title, content, pinyin)))
            .await
    }

    pub async fn update_article(
        &self,
        id: i64,
        title: &str,
        content: &str,
        pinyin: &str,
    ) -> ClientResult<Ack> {
        self.client
            .call(&UpdateArticleRequest {
                id,
                payload: article_payload(title, content, pinyin),
            })
            .await
    }

    pub async fn delete_article(&self, id: i64) -> ClientResult<Ack> {
        self.client.call(&DeleteArticleRequest { id }).await
    }
}

fn word_payload(word: &str, pinyin: &str) -> WordPayload {
    WordPayload {
        word: word.to_string(),
        pinyin: pinyin.to_string(),
    }
}

fn article_payload(title: &str, content: &str, pinyin: &str) -> ArticlePayload {
    ArticlePayload {
        title: title.to_string(),
        content: content.to_string(),
        pinyin: pinyin.to_string(),
    }
}

#[cfg(test)]
mod tests;
