use std::time::Duration;

// =========================================================
// 运行时配置 (Runtime Configuration)
// =========================================================

/// 开发构建下后端默认运行在本机 8080 端口
const DEFAULT_DEV_API_URL: &str = "http://localhost:8080";
/// 发布构建与页面同源部署
const DEFAULT_RELEASE_API_URL: &str = "";
/// 原生环境下可通过该环境变量覆盖后端地址
pub const API_URL_VAR: &str = "LINGODRILL_API_URL";
/// 传输层固定超时，构造客户端时确定，不支持按请求调整
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// 客户端配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// 读取 `LINGODRILL_API_URL`，读不到就用构建类型对应的默认值
    pub fn from_env() -> Self {
        match std::env::var(API_URL_VAR) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// 拼接完整请求地址
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::new(DEFAULT_DEV_API_URL)
        } else {
            Self::new(DEFAULT_RELEASE_API_URL)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash() {
        let config = ClientConfig::new("http://api.test/");
        assert_eq!(config.base_url(), "http://api.test");
        assert_eq!(config.url("/api/words?page=1"), "http://api.test/api/words?page=1");
        assert_eq!(config.url("login"), "http://api.test/login");
    }

    #[test]
    fn same_origin_base_yields_relative_urls() {
        let config = ClientConfig::new("");
        assert_eq!(config.url("/login"), "/login");
    }

    #[test]
    fn timeout_is_fixed() {
        assert_eq!(ClientConfig::new("x").timeout(), Duration::from_secs(10));
    }

    #[test]
    fn env_override() {
        temp_env::with_var(API_URL_VAR, Some("https://drill.example/"), || {
            assert_eq!(ClientConfig::from_env().base_url(), "https://drill.example");
        });
        temp_env::with_var_unset(API_URL_VAR, || {
            assert_eq!(ClientConfig::from_env(), ClientConfig::default());
        });
    }
}
