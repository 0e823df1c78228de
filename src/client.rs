//! 请求管道
//!
//! 围绕单一的传输函数组织有序的拦截器链：
//! 请求拦截器（按注册顺序）-> 发送 -> 非 2xx 转为错误 -> 响应拦截器（按注册顺序）。
//! 请求阶段的失败同样会经过响应拦截器，保证任何失败都有可见的反馈。

use std::rc::Rc;

use lingodrill_shared::HEADER_AUTHORIZATION;

use crate::error::{ClientError, ClientResult, SESSION_EXPIRED_MESSAGE};
use crate::guard::Navigator;
use crate::notify::Notifier;
use crate::request::{HttpClient, HttpRequest, HttpResponse};
use crate::route::LOGIN_PATH;
use crate::session::Session;

/// 在请求发出前运行
pub trait RequestInterceptor {
    fn on_request(&self, req: HttpRequest) -> ClientResult<HttpRequest>;
}

/// 在响应（或失败）返回后运行
///
/// 成功结果应原样返回；失败结果可以做本地处理，但必须继续返回错误。
pub trait ResponseInterceptor {
    fn on_response(&self, outcome: ClientResult<HttpResponse>) -> ClientResult<HttpResponse>;
}

// =========================================================
// 标准拦截器
// =========================================================

/// 存在 token 时附加 `Authorization: Bearer <token>`
pub struct BearerAuth {
    session: Session,
}

impl BearerAuth {
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

impl RequestInterceptor for BearerAuth {
    fn on_request(&self, req: HttpRequest) -> ClientResult<HttpRequest> {
        match self.session.token() {
            Some(token) => Ok(req.with_header(HEADER_AUTHORIZATION, &format!("Bearer {token}"))),
            None => Ok(req),
        }
    }
}

/// 401：清除凭据、提示登录过期并跳转登录页
pub struct SessionExpiry {
    session: Session,
    notifier: Rc<dyn Notifier>,
    navigator: Rc<dyn Navigator>,
}

impl SessionExpiry {
    pub fn new(session: Session, notifier: Rc<dyn Notifier>, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            session,
            notifier,
            navigator,
        }
    }
}

impl ResponseInterceptor for SessionExpiry {
    fn on_response(&self, outcome: ClientResult<HttpResponse>) -> ClientResult<HttpResponse> {
        if let Err(err) = &outcome {
            if err.is_unauthorized() {
                log::warn!("[Client] 401 received, clearing session");
                self.session.expire();
                self.notifier.error(SESSION_EXPIRED_MESSAGE);
                self.navigator.push(LOGIN_PATH);
            }
        }
        outcome
    }
}

/// 其余失败：优先展示服务端错误信息，否则展示通用网络错误
pub struct ErrorNotice {
    notifier: Rc<dyn Notifier>,
}

impl ErrorNotice {
    pub fn new(notifier: Rc<dyn Notifier>) -> Self {
        Self { notifier }
    }
}

impl ResponseInterceptor for ErrorNotice {
    fn on_response(&self, outcome: ClientResult<HttpResponse>) -> ClientResult<HttpResponse> {
        if let Err(err) = &outcome {
            if !err.is_unauthorized() {
                log::error!("[Client] request failed: {err}");
                self.notifier.error(err.user_message());
            }
        }
        outcome
    }
}

// =========================================================
// 管道
// =========================================================

pub struct Pipeline {
    transport: Rc<dyn HttpClient>,
    request: Vec<Box<dyn RequestInterceptor>>,
    response: Vec<Box<dyn ResponseInterceptor>>,
}

impl Pipeline {
    pub fn new(transport: Rc<dyn HttpClient>) -> Self {
        Self {
            transport,
            request: Vec::new(),
            response: Vec::new(),
        }
    }

    /// 标准链路：附加 token -> 发送 -> 401 处理 -> 错误提示
    pub fn standard(
        transport: Rc<dyn HttpClient>,
        session: Session,
        notifier: Rc<dyn Notifier>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self::new(transport)
            .with_request(BearerAuth::new(session.clone()))
            .with_response(SessionExpiry::new(session, notifier.clone(), navigator))
            .with_response(ErrorNotice::new(notifier))
    }

    pub fn with_request(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.request.push(Box::new(interceptor));
        self
    }

    pub fn with_response(mut self, interceptor: impl ResponseInterceptor + 'static) -> Self {
        self.response.push(Box::new(interceptor));
        self
    }

    pub async fn execute(&self, req: HttpRequest) -> ClientResult<HttpResponse> {
        let outcome = self.dispatch(req).await;
        self.complete(outcome)
    }

    /// 让请求构建阶段的错误也经过响应拦截器
    pub fn reject(&self, err: ClientError) -> ClientError {
        match self.complete(Err(err)) {
            Err(err) => err,
            Ok(resp) => ClientError::from_response(&resp),
        }
    }

    async fn dispatch(&self, req: HttpRequest) -> ClientResult<HttpResponse> {
        let req = self
            .request
            .iter()
            .try_fold(req, |req, interceptor| interceptor.on_request(req))?;

        let resp = self.transport.send(req).await?;
        if resp.is_success() {
            Ok(resp)
        } else {
            Err(ClientError::from_response(&resp))
        }
    }

    fn complete(&self, outcome: ClientResult<HttpResponse>) -> ClientResult<HttpResponse> {
        self.response
            .iter()
            .fold(outcome, |outcome, interceptor| interceptor.on_response(outcome))
    }
}
