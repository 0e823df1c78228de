//! 登录流程
//!
//! 会话的写入只发生在这里（登录/注销）和 401 拦截器中。

use lingodrill_shared::LoginResponse;
use lingodrill_shared::protocol::Ack;

use crate::api::ApiClient;
use crate::error::ClientResult;
use crate::session::Session;

/// 登录并保存会话
pub async fn login(
    api: &ApiClient,
    session: &Session,
    username: &str,
    password: &str,
) -> ClientResult<LoginResponse> {
    let resp = api.auth().login(username, password).await?;
    session.establish(&resp);
    Ok(resp)
}

/// 注册新账号，不会自动登录
pub async fn register(api: &ApiClient, username: &str, password: &str) -> ClientResult<Ack> {
    api.auth().register(username, password).await
}

/// 注销并清除全部会话字段
pub fn logout(session: &Session) {
    session.clear();
    log::info!("[Session] logged out");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionStore;
    use crate::testing::Harness;
    use lingodrill_shared::{KEY_IS_ADMIN, KEY_TOKEN};
    use serde_json::json;

    #[tokio::test]
    async fn login_writes_session_and_later_requests_carry_token() {
        let h = Harness::new();
        h.transport.mock_response(
            "http://api.test/login",
            200,
            json!({ "token": "fresh", "user_id": 3, "username": "zhao", "is_admin": true }),
        );
        h.transport
            .mock_response("http://api.test/api/words?page=1", 200, json!({ "items": [] }));

        let resp = login(&h.api, &h.session, "zhao", "secret").await.unwrap();
        assert_eq!(resp.username, "zhao");
        assert_eq!(h.session.token().as_deref(), Some("fresh"));
        assert!(h.session.is_admin());

        // the login request itself went out without a token
        let requests = h.transport.requests.borrow();
        assert_eq!(requests[0].header("Authorization"), None);
        assert_eq!(
            requests[0].body.as_deref(),
            Some(r#"{"username":"zhao","password":"secret"}"#)
        );
        drop(requests);

        h.api.practice().get_words(None).await.unwrap();
        let requests = h.transport.requests.borrow();
        assert_eq!(requests[1].header("Authorization"), Some("Bearer fresh"));
    }

    #[tokio::test]
    async fn failed_login_leaves_session_untouched() {
        let h = Harness::new();
        h.transport.mock_response(
            "http://api.test/login",
            400,
            json!({ "error": "用户名或密码错误" }),
        );

        let err = login(&h.api, &h.session, "zhao", "wrong").await.unwrap_err();
        assert_eq!(err.user_message(), "用户名或密码错误");
        assert_eq!(h.session.token(), None);
        assert_eq!(h.log(), vec!["notify:error:用户名或密码错误".to_string()]);
    }

    #[tokio::test]
    async fn register_does_not_log_in() {
        let h = Harness::new();
        h.transport.mock_response(
            "http://api.test/register",
            201,
            json!({ "message": "注册成功" }),
        );

        let ack = register(&h.api, "qian", "pw").await.unwrap();
        assert_eq!(ack["message"], "注册成功");
        assert_eq!(h.session.token(), None);
    }

    #[test]
    fn logout_clears_every_key() {
        let h = Harness::new();
        h.store.set(KEY_TOKEN, "t");
        h.store.set(KEY_IS_ADMIN, "true");
        logout(&h.session);
        assert_eq!(h.store.get(KEY_TOKEN), None);
        assert_eq!(h.store.get(KEY_IS_ADMIN), None);
    }
}
