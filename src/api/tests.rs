use super::*;
use crate::config::API_URL_VAR;
use crate::session::{MemoryStore, Session, SessionStore};
use crate::testing::{OpLog, RecordingNavigator};
use lingodrill_shared::{KEY_IS_ADMIN, KEY_TOKEN, KEY_USER_ID, KEY_USERNAME, PracticeKind};
use std::cell::RefCell;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

/// 本地 HTTP 后端：`GET /api/words` 返回列表，其余请求一律 401。
/// 每个连接收到的请求头都会转发给测试。
async fn spawn_backend() -> (String, mpsc::UnboundedReceiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }
            let head = String::from_utf8_lossy(&head).to_string();

            let (status, body) = if head.starts_with("GET /api/words") {
                (
                    "200 OK",
                    r#"{"items":[{"id":1,"word":"你好","pinyin":"nǐ hǎo"}],"total":1}"#,
                )
            } else {
                ("401 Unauthorized", r#"{"error":"token expired"}"#)
            };
            let _ = tx.send(head);

            let reply = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(reply.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    (format!("http://{addr}"), rx)
}

#[tokio::test]
async fn native_client_carries_token_and_handles_expiry_over_http() {
    let (base, mut seen) = spawn_backend().await;

    let log: OpLog = Rc::new(RefCell::new(Vec::new()));
    let store = Rc::new(MemoryStore::new());
    store.set(KEY_TOKEN, "tok-native");
    store.set(KEY_USER_ID, "11");
    store.set(KEY_USERNAME, "zhou");
    store.set(KEY_IS_ADMIN, "true");
    let session = Session::new(store.clone());

    let api = temp_env::with_var(API_URL_VAR, Some(base.as_str()), || {
        ApiClient::native(session.clone(), Rc::new(RecordingNavigator::new(log.clone())))
    })
    .unwrap();
    assert_eq!(api.config().base_url(), base);

    let words = api.practice().get_words(None).await.unwrap();
    assert_eq!(words.items.len(), 1);
    assert_eq!(words.items[0].word, "你好");

    let head = seen.recv().await.unwrap();
    assert!(head.starts_with("GET /api/words?page=1 "), "{head}");
    // hyper 发送的头部名为小写
    assert!(
        head.to_ascii_lowercase()
            .contains("authorization: bearer tok-native"),
        "{head}"
    );

    let err = api
        .practice()
        .get_progress(PracticeKind::Word)
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());
    assert!(seen.recv().await.unwrap().starts_with("GET /api/progress/word "));

    assert_eq!(store.get(KEY_TOKEN), None);
    assert_eq!(store.get(KEY_USER_ID), None);
    assert_eq!(store.get(KEY_USERNAME), None);
    assert_eq!(store.get(KEY_IS_ADMIN).as_deref(), Some("true"));
    assert_eq!(log.borrow().clone(), vec!["navigate:/login".to_string()]);
}

#[tokio::test]
async fn native_client_without_backend_reports_network_error() {
    // 绑定后立即释放端口，保证连接被拒绝
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };

    let log: OpLog = Rc::new(RefCell::new(Vec::new()));
    let session = Session::new(Rc::new(MemoryStore::new()));
    let url = format!("http://{addr}");
    let api = temp_env::with_var(API_URL_VAR, Some(url.as_str()), || {
        ApiClient::native(session, Rc::new(RecordingNavigator::new(log.clone())))
    })
    .unwrap();

    let err = api.practice().get_words(1).await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)), "{err:?}");
    assert_eq!(err.user_message(), crate::error::NETWORK_ERROR_MESSAGE);
    assert!(log.borrow().is_empty());
}
