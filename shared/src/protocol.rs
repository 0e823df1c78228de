use crate::{
    ArticlePayload, Article, Credentials, LoginResponse, Page, Paginated, PracticeKind, Progress,
    User, Word, WordPayload,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
///
/// Each implementor maps to exactly one REST call.
pub trait ApiRequest {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;

    /// Path relative to the API base URL, including any query string.
    fn path(&self) -> String;

    /// JSON body, if the endpoint takes one.
    fn body(&self) -> serde_json::Result<Option<String>> {
        Ok(None)
    }
}

/// Mutations whose response body carries nothing the client relies on.
pub type Ack = Value;

// =========================================================
// Auth
// =========================================================

#[derive(Debug, Clone)]
pub struct LoginRequest(pub Credentials);

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/login".to_string()
    }

    fn body(&self) -> serde_json::Result<Option<String>> {
        serde_json::to_string(&self.0).map(Some)
    }
}

#[derive(Debug, Clone)]
pub struct RegisterRequest(pub Credentials);

impl ApiRequest for RegisterRequest {
    type Response = Ack;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/register".to_string()
    }

    fn body(&self) -> serde_json::Result<Option<String>> {
        serde_json::to_string(&self.0).map(Some)
    }
}

// =========================================================
// Practice
// =========================================================

#[derive(Debug, Clone, Copy)]
pub struct ListWordsRequest {
    pub page: Page,
}

impl ApiRequest for ListWordsRequest {
    type Response = Paginated<Word>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/api/words?page={}", self.page)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ListArticlesRequest {
    pub page: Page,
}

impl ApiRequest for ListArticlesRequest {
    type Response = Paginated<Article>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/api/articles?page={}", self.page)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SaveProgressRequest(pub Progress);

impl ApiRequest for SaveProgressRequest {
    type Response = Ack;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/api/progress".to_string()
    }

    fn body(&self) -> serde_json::Result<Option<String>> {
        serde_json::to_string(&self.0).map(Some)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GetProgressRequest {
    pub kind: PracticeKind,
}

impl ApiRequest for GetProgressRequest {
    type Response = Progress;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/api/progress/{}", self.kind)
    }
}

// =========================================================
// Admin
// =========================================================

#[derive(Debug, Clone, Copy)]
pub struct ListUsersRequest {
    pub page: Page,
}

impl ApiRequest for ListUsersRequest {
    type Response = Paginated<User>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/admin/users?page={}", self.page)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DeleteUserRequest {
    pub id: i64,
}

impl ApiRequest for DeleteUserRequest {
    type Response = Ack;
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("/admin/users/{}", self.id)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AdminListWordsRequest {
    pub page: Page,
}

impl ApiRequest for AdminListWordsRequest {
    type Response = Paginated<Word>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/admin/words?page={}", self.page)
    }
}

#[derive(Debug, Clone)]
pub struct CreateWordRequest(pub WordPayload);

impl ApiRequest for CreateWordRequest {
    type Response = Ack;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/admin/words".to_string()
    }

    fn body(&self) -> serde_json::Result<Option<String>> {
        serde_json::to_string(&self.0).map(Some)
    }
}

#[derive(Debug, Clone)]
pub struct UpdateWordRequest {
    pub id: i64,
    pub payload: WordPayload,
}

impl ApiRequest for UpdateWordRequest {
    type Response = Ack;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/admin/words/{}", self.id)
    }

    fn body(&self) -> serde_json::Result<Option<String>> {
        serde_json::to_string(&self.payload).map(Some)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DeleteWordRequest {
    pub id: i64,
}

impl ApiRequest for DeleteWordRequest {
    type Response = Ack;
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("/admin/words/{}", self.id)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AdminListArticlesRequest {
    pub page: Page,
}

impl ApiRequest for AdminListArticlesRequest {
    type Response = Paginated<Article>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/admin/articles?page={}", self.page)
    }
}

#[derive(Debug, Clone)]
pub struct CreateArticleRequest(pub ArticlePayload);

impl ApiRequest for CreateArticleRequest {
    type Response = Ack;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/admin/articles".to_string()
    }

    fn body(&self) -> serde_json::Result<Option<String>> {
        serde_json::to_string(&self.0).map(Some)
    }
}

#[derive(Debug, Clone)]
pub struct UpdateArticleRequest {
    pub id: i64,
    pub payload: ArticlePayload,
}

impl ApiRequest for UpdateArticleRequest {
    type Response = Ack;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/admin/articles/{}", self.id)
    }

    fn body(&self) -> serde_json::Result<Option<String>> {
        serde_json::to_string(&self.payload).map(Some)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DeleteArticleRequest {
    pub id: i64,
}

impl ApiRequest for DeleteArticleRequest {
    type Response = Ack;
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("/admin/articles/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginated_paths_carry_page_query() {
        let req = ListWordsRequest { page: Page::new(2) };
        assert_eq!(req.path(), "/api/words?page=2");
        let req = AdminListArticlesRequest {
            page: Page::default(),
        };
        assert_eq!(req.path(), "/admin/articles?page=1");
    }

    #[test]
    fn update_word_serializes_payload_only() {
        let req = UpdateWordRequest {
            id: 9,
            payload: WordPayload {
                word: "学习".to_string(),
                pinyin: "xué xí".to_string(),
            },
        };
        assert_eq!(req.path(), "/admin/words/9");
        let body: Value = serde_json::from_str(&req.body().unwrap().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "word": "学习", "pinyin": "xué xí" })
        );
    }

    #[test]
    fn get_requests_have_no_body() {
        let req = GetProgressRequest {
            kind: PracticeKind::Word,
        };
        assert_eq!(req.path(), "/api/progress/word");
        assert!(req.body().unwrap().is_none());
        assert_eq!(GetProgressRequest::METHOD, HttpMethod::Get);
    }
}
