use std::time::Duration;

use lingodrill_shared::ErrorBody;
use thiserror::Error;

use crate::request::HttpResponse;

/// 401 时展示给用户的提示
pub const SESSION_EXPIRED_MESSAGE: &str = "登录已过期，请重新登录";
/// 服务端没有给出错误信息时的兜底提示
pub const NETWORK_ERROR_MESSAGE: &str = "网络错误";

pub const STATUS_UNAUTHORIZED: u16 = 401;

/// 请求管道中的错误
#[derive(Debug, Error)]
pub enum ClientError {
    /// 请求构建失败
    #[error("request build failed: {0}")]
    RequestBuild(String),
    /// 请求体序列化失败
    #[error("request body encode failed: {0}")]
    Encode(#[source] serde_json::Error),
    /// 网络请求失败
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
    /// 非 2xx 响应，`message` 取自响应体的 `error` 字段
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// 响应解析失败
    #[error("response decode failed: {0}")]
    Decode(#[source] serde_json::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// 从非 2xx 响应构造错误，尽量保留服务端给出的错误信息
    pub fn from_response(resp: &HttpResponse) -> Self {
        let message = serde_json::from_str::<ErrorBody>(&resp.body)
            .ok()
            .and_then(|body| body.message());
        ClientError::Status {
            status: resp.status,
            message,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(STATUS_UNAUTHORIZED)
    }

    /// 面向用户的提示文本
    pub fn user_message(&self) -> &str {
        match self {
            ClientError::Status {
                message: Some(message),
                ..
            } => message,
            _ => NETWORK_ERROR_MESSAGE,
        }
    }
}

/// 导航解析错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("navigation to {path} exceeded {hops} redirects")]
    RedirectLoop { path: String, hops: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn server_error_field_becomes_user_message() {
        let err = ClientError::from_response(&response(409, r#"{"error":"用户名已存在"}"#));
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.user_message(), "用户名已存在");
    }

    #[test]
    fn missing_error_field_falls_back() {
        let err = ClientError::from_response(&response(502, "<html>Bad Gateway</html>"));
        assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);

        let err = ClientError::from_response(&response(500, r#"{"error":""}"#));
        assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);

        let err = ClientError::Network("connection refused".to_string());
        assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);
    }

    #[test]
    fn non_string_error_field_is_still_shown() {
        let err = ClientError::from_response(&response(400, r#"{"error":1001}"#));
        assert_eq!(err.user_message(), "1001");

        let err = ClientError::from_response(&response(422, r#"{"error":["word"]}"#));
        assert_eq!(err.user_message(), r#"["word"]"#);
    }

    #[test]
    fn unauthorized_detection() {
        assert!(ClientError::from_response(&response(401, "")).is_unauthorized());
        assert!(!ClientError::from_response(&response(403, "")).is_unauthorized());
        assert!(!ClientError::Timeout(Duration::from_secs(10)).is_unauthorized());
    }
}
