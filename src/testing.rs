// =========================================================
// 测试工具: MockHttpClient 与记录型通知/导航
// =========================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::api::ApiClient;
use crate::client::Pipeline;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::guard::Navigator;
use crate::notify::{NoticeLevel, Notifier};
use crate::request::{HttpClient, HttpRequest, HttpResponse};
use crate::session::{MemoryStore, Session};

pub const BASE_URL: &str = "http://api.test";

enum Reply {
    Respond(u16, String),
    NetworkError(String),
}

pub struct MockHttpClient {
    responses: RefCell<HashMap<String, Reply>>,
    /// 记录发出的请求（已经过请求拦截器）
    pub requests: RefCell<Vec<HttpRequest>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self {
            responses: RefCell::new(HashMap::new()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn mock_response(&self, url: &str, status: u16, body: serde_json::Value) {
        self.responses
            .borrow_mut()
            .insert(url.to_string(), Reply::Respond(status, body.to_string()));
    }

    pub fn mock_raw(&self, url: &str, status: u16, body: &str) {
        self.responses
            .borrow_mut()
            .insert(url.to_string(), Reply::Respond(status, body.to_string()));
    }

    pub fn mock_network_error(&self, url: &str, message: &str) {
        self.responses
            .borrow_mut()
            .insert(url.to_string(), Reply::NetworkError(message.to_string()));
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for MockHttpClient {
    async fn send(&self, req: HttpRequest) -> ClientResult<HttpResponse> {
        let url = req.url.clone();
        self.requests.borrow_mut().push(req);

        match self.responses.borrow().get(&url) {
            Some(Reply::Respond(status, body)) => Ok(HttpResponse {
                status: *status,
                body: body.clone(),
            }),
            Some(Reply::NetworkError(message)) => Err(ClientError::Network(message.clone())),
            None => Ok(HttpResponse {
                status: 404,
                body: "Not Found".to_string(),
            }),
        }
    }
}

/// Shared operation log so tests can assert ordering across collaborators.
pub type OpLog = Rc<RefCell<Vec<String>>>;

pub struct RecordingNotifier {
    log: OpLog,
}

impl RecordingNotifier {
    pub fn new(log: OpLog) -> Self {
        Self { log }
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        let level = match level {
            NoticeLevel::Success => "success",
            NoticeLevel::Error => "error",
        };
        self.log
            .borrow_mut()
            .push(format!("notify:{level}:{message}"));
    }
}

pub struct RecordingNavigator {
    log: OpLog,
}

impl RecordingNavigator {
    pub fn new(log: OpLog) -> Self {
        Self { log }
    }
}

impl Navigator for RecordingNavigator {
    fn push(&self, path: &str) {
        self.log.borrow_mut().push(format!("navigate:{path}"));
    }
}

/// A fully wired client over an in-memory store and mock transport.
pub struct Harness {
    pub store: Rc<MemoryStore>,
    pub session: Session,
    pub transport: Rc<MockHttpClient>,
    pub api: ApiClient,
    log: OpLog,
}

impl Harness {
    pub fn new() -> Self {
        let log: OpLog = Rc::new(RefCell::new(Vec::new()));
        let store = Rc::new(MemoryStore::new());
        let session = Session::new(store.clone());
        let transport = Rc::new(MockHttpClient::new());

        let pipeline = Pipeline::standard(
            transport.clone(),
            session.clone(),
            Rc::new(RecordingNotifier::new(log.clone())),
            Rc::new(RecordingNavigator::new(log.clone())),
        );
        let api = ApiClient::new(ClientConfig::new(BASE_URL), pipeline);

        Self {
            store,
            session,
            transport,
            api,
            log,
        }
    }

    pub fn log(&self) -> Vec<String> {
        self.log.borrow().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.transport
            .requests
            .borrow()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}
