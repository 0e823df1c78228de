use serde::{Deserialize, Serialize};

pub mod protocol;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";

/// 持久化会话使用的存储键
pub const KEY_TOKEN: &str = "token";
pub const KEY_USER_ID: &str = "user_id";
pub const KEY_USERNAME: &str = "username";
pub const KEY_IS_ADMIN: &str = "is_admin";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 登录/注册请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: i64,
    pub username: String,
    #[serde(default)]
    pub is_admin: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: i64,
    pub word: String,
    pub pinyin: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub pinyin: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// 词语新增/修改请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPayload {
    pub word: String,
    pub pinyin: String,
}

/// 文章新增/修改请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticlePayload {
    pub title: String,
    pub content: String,
    pub pinyin: String,
}

/// 练习类型，同时作为 `/api/progress/{type}` 的路径段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PracticeKind {
    Word,
    Article,
}

impl PracticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PracticeKind::Word => "word",
            PracticeKind::Article => "article",
        }
    }
}

impl std::fmt::Display for PracticeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    #[serde(rename = "type")]
    pub kind: PracticeKind,
    pub page: u32,
}

/// 分页列表响应
///
/// 后端不同列表接口的数组字段名不一致，这里统一收敛为 `items`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    #[serde(
        alias = "data",
        alias = "words",
        alias = "articles",
        alias = "users"
    )]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "first_page")]
    pub page: u32,
}

impl<T> Paginated<T> {
    /// 是否可能还有下一页
    ///
    /// 总数未知时只要本页非空就允许继续翻页。
    pub fn has_more(&self) -> bool {
        let shown = u64::from(self.page).saturating_mul(self.items.len() as u64);
        !self.items.is_empty() && (self.total == 0 || shown < self.total)
    }
}

fn first_page() -> u32 {
    Page::FIRST.get()
}

/// 服务端错误响应体 `{ "error": ... }`
///
/// `error` 通常是字符串，但也可能是数字或对象。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: serde_json::Value,
}

impl ErrorBody {
    /// 可展示的错误信息
    ///
    /// 空字符串、`0`、`false` 与 `null` 视为没有给出信息。
    pub fn message(&self) -> Option<String> {
        use serde_json::Value;
        match &self.error {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            other => Some(other.to_string()),
        }
    }
}

// =========================================================
// 分页参数
// =========================================================

/// 从 1 开始的页码
///
/// 省略时为第 1 页，传入 0 时按第 1 页处理。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Page(u32);

impl Page {
    pub const FIRST: Page = Page(1);

    pub fn new(page: u32) -> Self {
        Self(page.max(1))
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }

    pub fn prev(&self) -> Self {
        Self::new(self.0.saturating_sub(1))
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::FIRST
    }
}

impl From<u32> for Page {
    fn from(page: u32) -> Self {
        Self::new(page)
    }
}

impl From<Option<u32>> for Page {
    fn from(page: Option<u32>) -> Self {
        page.map(Self::new).unwrap_or_default()
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults_to_first() {
        assert_eq!(Page::default().get(), 1);
        assert_eq!(Page::from(None).get(), 1);
        assert_eq!(Page::from(0).get(), 1);
        assert_eq!(Page::from(Some(3)).get(), 3);
        assert_eq!(Page::FIRST.prev(), Page::FIRST);
    }

    #[test]
    fn login_response_without_admin_flag_is_not_admin() {
        let json = r#"{"token":"abc","user_id":7,"username":"li"}"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.token, "abc");
        assert!(!resp.is_admin);
    }

    #[test]
    fn progress_uses_type_field() {
        let progress = Progress {
            kind: PracticeKind::Article,
            page: 4,
        };
        let value = serde_json::to_value(progress).unwrap();
        assert_eq!(value, serde_json::json!({ "type": "article", "page": 4 }));
    }

    #[test]
    fn paginated_accepts_resource_named_arrays() {
        let json = r#"{"words":[{"id":1,"word":"你好","pinyin":"nǐ hǎo"}],"total":31}"#;
        let page: Paginated<Word> = serde_json::from_str(json).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total, 31);
        assert_eq!(page.page, 1);
        assert!(page.has_more());
    }

    #[test]
    fn error_body_message_accepts_any_truthy_value() {
        let parse = |json: &str| serde_json::from_str::<ErrorBody>(json).unwrap().message();

        assert_eq!(parse(r#"{"error":"词语已存在"}"#).as_deref(), Some("词语已存在"));
        assert_eq!(parse(r#"{"error":42}"#).as_deref(), Some("42"));
        assert_eq!(
            parse(r#"{"error":{"code":"E1"}}"#).as_deref(),
            Some(r#"{"code":"E1"}"#)
        );
        assert_eq!(parse(r#"{"error":""}"#), None);
        assert_eq!(parse(r#"{"error":0}"#), None);
        assert_eq!(parse(r#"{"error":false}"#), None);
        assert_eq!(parse(r#"{"error":null}"#), None);
        assert_eq!(parse(r#"{"message":"x"}"#), None);
    }

    #[test]
    fn last_full_page_has_no_more() {
        let page = Paginated {
            items: vec![1, 2, 3],
            total: 6,
            page: 2,
        };
        assert!(!page.has_more());

        let empty: Paginated<u8> = Paginated {
            items: vec![],
            total: 0,
            page: 5,
        };
        assert!(!empty.has_more());
    }
}
